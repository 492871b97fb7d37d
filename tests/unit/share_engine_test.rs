// Property-based and scenario tests for the ranking and share-with-Others
// computations.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salespulse::core::engine::{rank_by, share_with_others, OTHERS_LABEL};

fn record(label: &str, value: i64) -> (String, Decimal) {
    (label.to_string(), Decimal::from(value))
}

#[test]
fn test_rank_scenario() {
    // [{A,100},{B,300},{C,200}], limit 2 -> [B, C]
    let data = vec![record("A", 100), record("B", 300), record("C", 200)];
    let ranked = rank_by(&data, |r| r.1, 2);

    let labels: Vec<&str> = ranked.iter().map(|r| r.0.as_str()).collect();
    assert_eq!(labels, ["B", "C"]);
}

#[test]
fn test_share_scenario() {
    // total 600; B 50.00%, C 33.33%, Others(A, 100) 16.67%
    let data = vec![record("A", 100), record("B", 300), record("C", 200)];
    let shares = share_with_others(&data, |r| r.1, |r| &r.0, 2);

    assert_eq!(shares.len(), 3);
    assert_eq!(shares[0].label, "B");
    assert_eq!(shares[0].percentage, dec!(50.00));
    assert_eq!(shares[1].label, "C");
    assert_eq!(shares[1].percentage, dec!(33.33));
    assert_eq!(shares[2].label, OTHERS_LABEL);
    assert_eq!(shares[2].value, dec!(100));
    assert_eq!(shares[2].percentage, dec!(16.67));
}

#[test]
fn test_zero_total_has_no_division_artifact() {
    let data = vec![record("A", 0), record("B", 0)];
    let shares = share_with_others(&data, |r| r.1, |r| &r.0, 1);

    assert!(shares.iter().all(|s| s.percentage == Decimal::ZERO));
}

#[test]
fn test_duplicate_labels_bucket_by_sort_position() {
    // Tail rollup goes by position, never by label, since labels may repeat
    let data = vec![record("X", 300), record("X", 100), record("Y", 200)];
    let shares = share_with_others(&data, |r| r.1, |r| &r.0, 2);

    assert_eq!(shares.len(), 3);
    assert_eq!(shares[0].label, "X");
    assert_eq!(shares[1].label, "Y");
    assert_eq!(shares[2].label, OTHERS_LABEL);
    assert_eq!(shares[2].value, dec!(100));
}

proptest! {
    /// Ranking output length is min(limit, input length)
    #[test]
    fn prop_rank_length(
        values in prop::collection::vec(0i64..1_000_000, 0..50),
        limit in 0usize..60,
    ) {
        let data: Vec<(String, Decimal)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("r{}", i), Decimal::from(*v)))
            .collect();

        let ranked = rank_by(&data, |r| r.1, limit);
        prop_assert_eq!(ranked.len(), limit.min(data.len()));
    }

    /// Ranking output is descending in the metric
    #[test]
    fn prop_rank_is_descending(
        values in prop::collection::vec(0i64..1_000_000, 1..50),
        limit in 1usize..60,
    ) {
        let data: Vec<(String, Decimal)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("r{}", i), Decimal::from(*v)))
            .collect();

        let ranked = rank_by(&data, |r| r.1, limit);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    /// Ties keep input order (stable sort contract)
    #[test]
    fn prop_ties_keep_input_order(len in 1usize..30) {
        let data: Vec<(String, Decimal)> = (0..len)
            .map(|i| (format!("r{}", i), Decimal::from(42)))
            .collect();

        let ranked = rank_by(&data, |r| r.1, len);
        let labels: Vec<&String> = ranked.iter().map(|r| &r.0).collect();
        let expected: Vec<&String> = data.iter().map(|r| &r.0).collect();
        prop_assert_eq!(labels, expected);
    }

    /// With a positive total, head + Others percentages sum to 100 within
    /// rounding tolerance (±0.01 per entry)
    #[test]
    fn prop_percentages_sum_to_100(
        values in prop::collection::vec(1i64..1_000_000, 1..40),
        limit in 1usize..50,
    ) {
        let data: Vec<(String, Decimal)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("r{}", i), Decimal::from(*v)))
            .collect();

        let shares = share_with_others(&data, |r| r.1, |r| &r.0, limit);
        let sum: Decimal = shares.iter().map(|s| s.percentage).sum();
        let tolerance = Decimal::new(1, 2) * Decimal::from(shares.len() as i64);

        prop_assert!((sum - Decimal::ONE_HUNDRED).abs() <= tolerance,
            "sum {} outside tolerance {}", sum, tolerance);
    }

    /// Head and Others values partition the total exactly (no rounding on values)
    #[test]
    fn prop_values_partition_total(
        values in prop::collection::vec(0i64..1_000_000, 1..40),
        limit in 1usize..50,
    ) {
        let data: Vec<(String, Decimal)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("r{}", i), Decimal::from(*v)))
            .collect();

        let total: Decimal = data.iter().map(|r| r.1).sum();
        let shares = share_with_others(&data, |r| r.1, |r| &r.0, limit);
        let sum: Decimal = shares.iter().map(|s| s.value).sum();

        prop_assert_eq!(sum, total);
    }

    /// The Others entry appears exactly when records overflow the head
    #[test]
    fn prop_others_presence(
        len in 1usize..40,
        limit in 1usize..50,
    ) {
        let data: Vec<(String, Decimal)> = (0..len)
            .map(|i| (format!("r{}", i), Decimal::from(i as i64 + 1)))
            .collect();

        let shares = share_with_others(&data, |r| r.1, |r| &r.0, limit);
        let has_others = shares.iter().any(|s| s.label == OTHERS_LABEL);
        prop_assert_eq!(has_others, len > limit);
    }
}
