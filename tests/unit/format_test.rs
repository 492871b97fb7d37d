// Display-formatting tests: the dashboard renders these strings verbatim, so
// the rounding must match the engine's (2 dp, half away from zero).

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salespulse::core::format::{format_currency, format_percentage};

#[test]
fn test_currency_grouping() {
    assert_eq!(format_currency(dec!(0)), "0.00");
    assert_eq!(format_currency(dec!(5)), "5.00");
    assert_eq!(format_currency(dec!(999.99)), "999.99");
    assert_eq!(format_currency(dec!(1000)), "1,000.00");
    assert_eq!(format_currency(dec!(1234567.891)), "1,234,567.89");
    assert_eq!(format_currency(dec!(100000000)), "100,000,000.00");
}

#[test]
fn test_currency_negative_amounts() {
    assert_eq!(format_currency(dec!(-1)), "-1.00");
    assert_eq!(format_currency(dec!(-1234.5)), "-1,234.50");
}

#[test]
fn test_currency_half_away_from_zero() {
    assert_eq!(format_currency(dec!(2.345)), "2.35");
    assert_eq!(format_currency(dec!(2.335)), "2.34");
    assert_eq!(format_currency(dec!(-2.345)), "-2.35");
}

#[test]
fn test_percentage_rendering() {
    assert_eq!(format_percentage(dec!(50)), "50.00%");
    assert_eq!(format_percentage(dec!(33.333)), "33.33%");
    assert_eq!(format_percentage(dec!(16.666)), "16.67%");
    assert_eq!(format_percentage(dec!(0)), "0.00%");
}

proptest! {
    /// Currency strings always carry exactly two decimals and valid grouping
    #[test]
    fn prop_currency_shape(units in -1_000_000_000i64..1_000_000_000, cents in 0u32..100) {
        let amount = Decimal::from(units) + Decimal::new(cents as i64, 2);
        let text = format_currency(amount);

        let (_, frac) = text.rsplit_once('.').expect("decimal point");
        prop_assert_eq!(frac.len(), 2);

        // Groups between separators are always three digits
        let int_part = text.trim_start_matches('-').split('.').next().unwrap();
        let groups: Vec<&str> = int_part.split(',').collect();
        for (i, group) in groups.iter().enumerate() {
            if i == 0 {
                prop_assert!(!group.is_empty() && group.len() <= 3);
            } else {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }

    /// Formatting round-trips the rounded numeric value
    #[test]
    fn prop_currency_round_trips(units in -1_000_000i64..1_000_000, cents in 0u32..100) {
        let amount = Decimal::from(units) + Decimal::new(cents as i64, 2);
        let text = format_currency(amount).replace(',', "");
        let parsed: Decimal = text.parse().unwrap();
        prop_assert_eq!(parsed, amount.round_dp(2));
    }
}
