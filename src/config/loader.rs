//! Survey configuration loading functionality.
//!
//! This module provides the [`SurveyLoader`] type for loading market
//! survey benchmarks from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::MarketBenchmarks;

use super::types::{SpecialtyBenchmarks, SurveyMetadata};

/// Loads and provides access to market survey benchmarks.
///
/// The `SurveyLoader` reads YAML survey files from a directory and
/// provides lookup of per-specialty benchmark points.
///
/// # Directory Structure
///
/// The survey directory should have the following structure:
/// ```text
/// config/surveys/
/// ├── survey.yaml          # Survey metadata
/// └── specialties/
///     ├── cardiology.yaml  # One file per specialty
///     └── …
/// ```
///
/// # Example
///
/// ```no_run
/// use comp_engine::config::SurveyLoader;
///
/// let loader = SurveyLoader::load("./config/surveys").unwrap();
/// let benchmarks = loader.get_benchmarks("cardiology").unwrap();
/// println!("Median wRVUs: {:?}", benchmarks.wrvu_50);
/// ```
#[derive(Debug, Clone)]
pub struct SurveyLoader {
    metadata: SurveyMetadata,
    specialties: HashMap<String, SpecialtyBenchmarks>,
}

impl SurveyLoader {
    /// Loads survey data from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the survey directory (e.g., "./config/surveys")
    ///
    /// # Returns
    ///
    /// Returns a `SurveyLoader` instance on success, or an error if:
    /// - The metadata file or specialties directory is missing
    /// - Any file contains invalid YAML
    /// - No specialty file could be loaded
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("survey.yaml");
        let metadata = Self::load_yaml::<SurveyMetadata>(&metadata_path)?;

        let specialties_dir = path.join("specialties");
        let specialties = Self::load_specialties(&specialties_dir)?;

        Ok(Self {
            metadata,
            specialties,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all specialty files from the specialties directory.
    fn load_specialties(
        specialties_dir: &Path,
    ) -> EngineResult<HashMap<String, SpecialtyBenchmarks>> {
        let dir_str = specialties_dir.display().to_string();

        if !specialties_dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(specialties_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut specialties = HashMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let specialty = Self::load_yaml::<SpecialtyBenchmarks>(&path)?;
                specialties.insert(specialty.code.clone(), specialty);
            }
        }

        if specialties.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no specialty files found)", dir_str),
            });
        }

        Ok(specialties)
    }

    /// Returns the survey metadata.
    pub fn metadata(&self) -> &SurveyMetadata {
        &self.metadata
    }

    /// Returns the codes of all loaded specialties, sorted.
    pub fn specialty_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.specialties.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Gets a specialty's full record by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The specialty code (e.g., "cardiology")
    ///
    /// # Returns
    ///
    /// Returns the specialty if found, or a `SpecialtyNotFound` error.
    pub fn get_specialty(&self, code: &str) -> EngineResult<&SpecialtyBenchmarks> {
        self.specialties
            .get(code)
            .ok_or_else(|| EngineError::SpecialtyNotFound {
                code: code.to_string(),
            })
    }

    /// Gets a specialty's benchmark points by its code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use comp_engine::config::SurveyLoader;
    ///
    /// let loader = SurveyLoader::load("./config/surveys")?;
    /// let benchmarks = loader.get_benchmarks("cardiology")?;
    /// # Ok::<(), comp_engine::error::EngineError>(())
    /// ```
    pub fn get_benchmarks(&self, code: &str) -> EngineResult<&MarketBenchmarks> {
        self.get_specialty(code).map(|s| &s.benchmarks)
    }
}
