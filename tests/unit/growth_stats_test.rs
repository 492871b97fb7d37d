// Property-based and scenario tests for growth-distribution statistics.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salespulse::core::engine::{growth_distribution, GrowthClass};
use salespulse::customers::CustomerRevenue;

fn customer(name: &str, q3: i64, q4: i64) -> CustomerRevenue {
    CustomerRevenue::new(name, Decimal::from(q3), Decimal::from(q4))
}

#[test]
fn test_three_way_classification() {
    assert_eq!(GrowthClass::from_variance(dec!(0.01)), GrowthClass::Positive);
    assert_eq!(GrowthClass::from_variance(dec!(-0.01)), GrowthClass::Negative);
    assert_eq!(GrowthClass::from_variance(Decimal::ZERO), GrowthClass::Neutral);
}

#[test]
fn test_distribution_over_mixed_set() {
    let data = vec![
        customer("up", 100, 200),
        customer("down", 200, 100),
        customer("flat", 150, 150),
        customer("up2", 0, 1),
    ];
    let dist = growth_distribution(&data);

    assert_eq!(dist.positive_count, 2);
    assert_eq!(dist.negative_count, 1);
    assert_eq!(dist.neutral_count, 1);
    assert_eq!(dist.positive_percentage, dec!(50.00));
    assert_eq!(dist.q3_total, dec!(450));
    assert_eq!(dist.q4_total, dec!(451));
}

#[test]
fn test_empty_set_is_all_zero() {
    let dist = growth_distribution::<CustomerRevenue>(&[]);
    assert_eq!(dist.positive_count, 0);
    assert_eq!(dist.negative_count, 0);
    assert_eq!(dist.neutral_count, 0);
    assert_eq!(dist.positive_percentage, Decimal::ZERO);
    assert_eq!(dist.negative_percentage, Decimal::ZERO);
    assert_eq!(dist.neutral_percentage, Decimal::ZERO);
    assert_eq!(dist.q3_total, Decimal::ZERO);
    assert_eq!(dist.q4_total, Decimal::ZERO);
}

proptest! {
    /// Class counts always sum to the input length
    #[test]
    fn prop_counts_sum_to_length(
        rows in prop::collection::vec((0i64..1_000, 0i64..1_000), 0..80),
    ) {
        let data: Vec<CustomerRevenue> = rows
            .iter()
            .enumerate()
            .map(|(i, (q3, q4))| customer(&format!("c{}", i), *q3, *q4))
            .collect();

        let dist = growth_distribution(&data);
        prop_assert_eq!(
            dist.positive_count + dist.negative_count + dist.neutral_count,
            data.len()
        );
    }

    /// Class percentages sum to 100 within rounding tolerance, or all-zero
    /// for empty input
    #[test]
    fn prop_percentages_sum_to_100(
        rows in prop::collection::vec((0i64..1_000, 0i64..1_000), 0..80),
    ) {
        let data: Vec<CustomerRevenue> = rows
            .iter()
            .enumerate()
            .map(|(i, (q3, q4))| customer(&format!("c{}", i), *q3, *q4))
            .collect();

        let dist = growth_distribution(&data);
        let sum = dist.positive_percentage + dist.negative_percentage + dist.neutral_percentage;

        if data.is_empty() {
            prop_assert_eq!(sum, Decimal::ZERO);
        } else {
            let tolerance = Decimal::new(3, 2);
            prop_assert!((sum - Decimal::ONE_HUNDRED).abs() <= tolerance,
                "percentage sum {} outside tolerance", sum);
        }
    }

    /// Q3/Q4 totals equal the sums over the full input
    #[test]
    fn prop_totals_match_sums(
        rows in prop::collection::vec((0i64..1_000, 0i64..1_000), 0..80),
    ) {
        let data: Vec<CustomerRevenue> = rows
            .iter()
            .enumerate()
            .map(|(i, (q3, q4))| customer(&format!("c{}", i), *q3, *q4))
            .collect();

        let dist = growth_distribution(&data);
        let q3: Decimal = data.iter().map(|c| c.q3_revenue).sum();
        let q4: Decimal = data.iter().map(|c| c.q4_revenue).sum();
        prop_assert_eq!(dist.q3_total, q3);
        prop_assert_eq!(dist.q4_total, q4);
    }
}
