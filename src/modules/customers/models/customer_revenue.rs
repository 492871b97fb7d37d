use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::engine::GrowthMetrics;

/// One customer's quarterly revenue picture.
///
/// `variance` (Q4 − Q3) and `total_revenue` are materialized once at the
/// data-access boundary so every report reads the same numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRevenue {
    pub customer: String,
    pub q3_revenue: Decimal,
    pub q4_revenue: Decimal,
    pub variance: Decimal,
    pub total_revenue: Decimal,
}

impl CustomerRevenue {
    pub fn new(customer: impl Into<String>, q3_revenue: Decimal, q4_revenue: Decimal) -> Self {
        Self {
            customer: customer.into(),
            q3_revenue,
            q4_revenue,
            variance: q4_revenue - q3_revenue,
            total_revenue: q3_revenue + q4_revenue,
        }
    }
}

impl GrowthMetrics for CustomerRevenue {
    fn q3_revenue(&self) -> Decimal {
        self.q3_revenue
    }

    fn q4_revenue(&self) -> Decimal {
        self.q4_revenue
    }

    fn variance(&self) -> Decimal {
        self.variance
    }
}

/// Sort key for the customer list; a property of the requesting report, not
/// of the pagination operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerSortKey {
    #[default]
    Variance,
    Q4Revenue,
}

impl CustomerSortKey {
    /// Lenient parse; unrecognized values fall back to the default key.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("q4Revenue") | Some("q4_revenue") => CustomerSortKey::Q4Revenue,
            _ => CustomerSortKey::Variance,
        }
    }

    pub fn metric(&self, record: &CustomerRevenue) -> Decimal {
        match self {
            CustomerSortKey::Variance => record.variance,
            CustomerSortKey::Q4Revenue => record.q4_revenue,
        }
    }
}
