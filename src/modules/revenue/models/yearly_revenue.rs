use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::engine::{GrowthDistribution, ShareEntry};

/// Total revenue booked in one calendar year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyRevenue {
    pub year: i32,
    pub revenue: Decimal,
}

impl YearlyRevenue {
    pub fn new(year: i32, revenue: Decimal) -> Self {
        Self { year, revenue }
    }
}

/// The dashboard's landing view: grand totals, top-country shares, and the
/// customer growth distribution, each computed from an independently fetched
/// data set.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub q3_total: Decimal,
    pub q4_total: Decimal,
    pub grand_total: Decimal,
    pub top_countries: Vec<ShareEntry>,
    pub customer_growth: GrowthDistribution,
}
