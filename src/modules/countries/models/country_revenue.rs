use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Yearly revenue attributed to one country.
///
/// Country names are not guaranteed unique in the source data and are kept
/// as-is; the reports never deduplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRevenue {
    pub country: String,
    pub revenue: Decimal,
}

impl CountryRevenue {
    pub fn new(country: impl Into<String>, revenue: Decimal) -> Self {
        Self {
            country: country.into(),
            revenue,
        }
    }
}
