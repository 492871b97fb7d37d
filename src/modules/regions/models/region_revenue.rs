use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Revenue attributed to one sales region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionRevenue {
    pub region: String,
    pub revenue: Decimal,
}

impl RegionRevenue {
    pub fn new(region: impl Into<String>, revenue: Decimal) -> Self {
        Self {
            region: region.into(),
            revenue,
        }
    }
}
