//! Physician Compensation Modeling Engine
//!
//! This crate models physician compensation design: given market survey
//! benchmarks and a compensation plan configuration, it computes
//! productivity percentiles, conversion-factor driven incentive pay,
//! fair-market-value risk classification, on-call pay, and multi-year
//! budget projections.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
