// Classifier tests: the analysis endpoint recognizes a closed intent set via
// a deterministic keyword table.

use salespulse::analysis::AnalysisIntent;

#[test]
fn test_recognized_intents() {
    let cases = [
        ("show the top countries", AnalysisIntent::TopCountries),
        ("which are our best countries?", AnalysisIntent::TopCountries),
        ("revenue share please", AnalysisIntent::RevenueShare),
        ("revenue distribution across markets", AnalysisIntent::RevenueShare),
        ("how is customer growth", AnalysisIntent::CustomerGrowth),
        ("who is growing fastest", AnalysisIntent::CustomerGrowth),
        ("break it down by region", AnalysisIntent::RegionBreakdown),
        ("what's the yearly trend", AnalysisIntent::RevenueTrend),
    ];

    for (prompt, expected) in cases {
        assert_eq!(AnalysisIntent::classify(prompt), expected, "prompt: {prompt}");
    }
}

#[test]
fn test_classification_is_case_insensitive() {
    assert_eq!(
        AnalysisIntent::classify("TOP COUNTRIES BY REVENUE"),
        AnalysisIntent::TopCountries
    );
}

#[test]
fn test_unknown_prompts() {
    for prompt in ["", "hello", "delete everything", "what's for lunch"] {
        assert_eq!(AnalysisIntent::classify(prompt), AnalysisIntent::Unknown);
    }
}

#[test]
fn test_region_outranks_share_keywords() {
    // Table order is the priority contract: a prompt naming regions goes to
    // the region report even when it also says "share"
    assert_eq!(
        AnalysisIntent::classify("share of revenue by region"),
        AnalysisIntent::RegionBreakdown
    );
}

#[test]
fn test_supported_prompts_cover_all_real_intents() {
    // One hint per recognized intent, nothing for Unknown
    assert_eq!(AnalysisIntent::supported_prompts().len(), 5);
}
