use serde::{Deserialize, Serialize};

/// A dashboard "analysis" prompt.
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub prompt: String,
}

/// Closed set of questions the analysis endpoint understands.
///
/// Classification is a deterministic keyword table; the first matching row
/// wins, so the table order below is the documented priority. Anything else
/// is `Unknown`, which answers with the supported-question list rather than
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisIntent {
    TopCountries,
    RevenueShare,
    CustomerGrowth,
    RegionBreakdown,
    RevenueTrend,
    Unknown,
}

const KEYWORD_TABLE: &[(AnalysisIntent, &[&str])] = &[
    (AnalysisIntent::RegionBreakdown, &["region"]),
    (AnalysisIntent::TopCountries, &["top countr", "best countr", "biggest countr"]),
    (AnalysisIntent::RevenueShare, &["share", "distribution", "percentage"]),
    (AnalysisIntent::CustomerGrowth, &["growth", "growing", "customer"]),
    (AnalysisIntent::RevenueTrend, &["trend", "yearly", "per year", "over the years"]),
];

impl AnalysisIntent {
    pub fn classify(prompt: &str) -> Self {
        let normalized = prompt.to_lowercase();
        for (intent, keywords) in KEYWORD_TABLE {
            if keywords.iter().any(|k| normalized.contains(k)) {
                return *intent;
            }
        }
        AnalysisIntent::Unknown
    }

    /// Human-readable descriptions of the recognized questions, returned for
    /// unclassified prompts.
    pub fn supported_prompts() -> Vec<&'static str> {
        vec![
            "revenue breakdown by region",
            "top countries by revenue",
            "revenue share by country",
            "customer growth between Q3 and Q4",
            "yearly revenue trend",
        ]
    }
}
