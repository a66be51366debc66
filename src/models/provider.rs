//! Provider production records for internal benchmarking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One provider's raw annual production, used to build empirical
/// percentiles.
///
/// Values are as-reported; the internal benchmarking layer normalizes by
/// FTE before computing order statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    /// Annual wRVUs produced.
    pub wrvus: Decimal,
    /// Annual total cash compensation paid.
    pub tcc: Decimal,
    /// Clinical FTE over the same period.
    pub fte: Decimal,
}

impl ProviderRecord {
    /// Builds a record from its three components.
    pub fn new(wrvus: Decimal, tcc: Decimal, fte: Decimal) -> Self {
        Self { wrvus, tcc, fte }
    }
}
