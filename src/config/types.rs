//! Configuration types for market survey data.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML survey files.

use serde::Deserialize;

use crate::models::MarketBenchmarks;

/// Metadata about the loaded market survey.
///
/// Contains identifying information about the survey data set: its
/// publisher, name, survey year, and data cut.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyMetadata {
    /// The survey publisher (e.g., "National Provider Compensation Survey").
    pub source: String,
    /// The human-readable name of the survey data set.
    pub name: String,
    /// The survey year the data was collected for.
    pub year: i32,
    /// The version or data cut of the survey files.
    pub version: String,
}

/// One specialty's survey benchmarks.
///
/// Deserialized from a file under the `specialties/` directory.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecialtyBenchmarks {
    /// The specialty code (e.g., "cardiology").
    pub code: String,
    /// The human-readable specialty name.
    pub name: String,
    /// The surveyed benchmark points; any subset may be present.
    pub benchmarks: MarketBenchmarks,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_specialty_deserializes_from_yaml() {
        let yaml = r#"
code: cardiology
name: Cardiology
benchmarks:
  wrvu_25: "7000"
  wrvu_50: "8500"
  tcc_50: "550000"
"#;

        let specialty: SpecialtyBenchmarks = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(specialty.code, "cardiology");
        assert_eq!(
            specialty.benchmarks.wrvu_50,
            Some(Decimal::from_str("8500").unwrap())
        );
        assert!(specialty.benchmarks.cf_50.is_none());
    }

    #[test]
    fn test_metadata_deserializes_from_yaml() {
        let yaml = r#"
source: National Provider Compensation Survey
name: Blended Market Survey
year: 2026
version: "2026-01"
"#;

        let metadata: SurveyMetadata = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(metadata.year, 2026);
        assert_eq!(metadata.version, "2026-01");
    }
}
