use rust_decimal::Decimal;
use serde::Serialize;

use super::share::percent_of;

/// Quarterly revenue metrics exposed by records that carry growth data.
///
/// Variance is the default growth indicator; implementors may override it if
/// the source materializes the column directly.
pub trait GrowthMetrics {
    fn q3_revenue(&self) -> Decimal;
    fn q4_revenue(&self) -> Decimal;

    fn variance(&self) -> Decimal {
        self.q4_revenue() - self.q3_revenue()
    }
}

/// Three-way growth classification against zero variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthClass {
    Positive,
    Negative,
    Neutral,
}

impl GrowthClass {
    pub fn from_variance(variance: Decimal) -> Self {
        if variance > Decimal::ZERO {
            GrowthClass::Positive
        } else if variance < Decimal::ZERO {
            GrowthClass::Negative
        } else {
            GrowthClass::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthClass::Positive => "positive",
            GrowthClass::Negative => "negative",
            GrowthClass::Neutral => "neutral",
        }
    }
}

/// Distributional statistics over a full record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthDistribution {
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub positive_percentage: Decimal,
    pub negative_percentage: Decimal,
    pub neutral_percentage: Decimal,
    pub q3_total: Decimal,
    pub q4_total: Decimal,
}

/// Classify every record's variance and report class counts, class shares of
/// the record count, and the Q3/Q4 totals over the whole set.
///
/// An empty input yields all-zero counts and percentages, never NaN.
pub fn growth_distribution<T: GrowthMetrics>(records: &[T]) -> GrowthDistribution {
    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut neutral = 0usize;
    let mut q3_total = Decimal::ZERO;
    let mut q4_total = Decimal::ZERO;

    for record in records {
        match GrowthClass::from_variance(record.variance()) {
            GrowthClass::Positive => positive += 1,
            GrowthClass::Negative => negative += 1,
            GrowthClass::Neutral => neutral += 1,
        }
        q3_total += record.q3_revenue();
        q4_total += record.q4_revenue();
    }

    let total = Decimal::from(records.len());

    GrowthDistribution {
        positive_count: positive,
        negative_count: negative,
        neutral_count: neutral,
        positive_percentage: percent_of(Decimal::from(positive), total),
        negative_percentage: percent_of(Decimal::from(negative), total),
        neutral_percentage: percent_of(Decimal::from(neutral), total),
        q3_total,
        q4_total,
    }
}
