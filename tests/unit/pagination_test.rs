// Property-based and scenario tests for filter-and-paginate.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salespulse::core::engine::{filter_and_paginate, paginate, FilterSpec, GrowthMetrics};
use salespulse::customers::CustomerRevenue;

fn customer(name: &str, q3: i64, q4: i64) -> CustomerRevenue {
    CustomerRevenue::new(name, Decimal::from(q3), Decimal::from(q4))
}

fn spec(min_q4: Decimal, positive_only: bool, page: u32, page_size: u32) -> FilterSpec {
    FilterSpec {
        min_q4_revenue: min_q4,
        positive_growth_only: positive_only,
        page,
        page_size,
    }
}

#[test]
fn test_min_q4_scenario() {
    // minQ4Revenue=150 over [{X,Q4:100},{Y,Q4:200}] -> only Y, totalItems 1
    let data = vec![customer("X", 0, 100), customer("Y", 0, 200)];
    let page = filter_and_paginate(&data, &spec(dec!(150), false, 1, 10), |c| c.q4_revenue());

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].customer, "Y");
    assert_eq!(page.info.total_items, 1);
}

#[test]
fn test_page_beyond_last_scenario() {
    // page 3 / size 10 over 5 filtered items -> empty, totalPages 1, no next
    let data: Vec<CustomerRevenue> = (0..5)
        .map(|i| customer(&format!("c{}", i), 0, i))
        .collect();
    let page = filter_and_paginate(&data, &spec(Decimal::ZERO, false, 3, 10), |c| c.q4_revenue());

    assert!(page.items.is_empty());
    assert_eq!(page.info.total_pages, 1);
    assert_eq!(page.info.total_items, 5);
    assert!(!page.info.has_next_page);
}

#[test]
fn test_non_positive_threshold_disables_filter() {
    let data = vec![customer("X", 0, 100), customer("Y", 0, 200)];
    let page = filter_and_paginate(&data, &spec(Decimal::ZERO, false, 1, 10), |c| c.q4_revenue());
    assert_eq!(page.info.total_items, 2);
}

#[test]
fn test_pagination_info_midway() {
    let page = paginate((0..25).collect::<Vec<_>>(), 2, 10);
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.info.current_page, 2);
    assert_eq!(page.info.total_pages, 3);
    assert_eq!(page.info.next_page, Some(3));
    assert_eq!(page.info.prev_page, Some(1));
    assert!(page.info.has_next_page);
    assert!(page.info.has_prev_page);
}

prop_compose! {
    fn arb_customers()(rows in prop::collection::vec((0i64..10_000, 0i64..10_000), 0..60))
        -> Vec<CustomerRevenue>
    {
        rows.iter()
            .enumerate()
            .map(|(i, (q3, q4))| customer(&format!("c{}", i), *q3, *q4))
            .collect()
    }
}

proptest! {
    /// Every returned record satisfies the filter predicate, and totalItems
    /// counts the satisfying records independent of the window
    #[test]
    fn prop_returned_records_satisfy_filter(
        data in arb_customers(),
        min_q4 in 0i64..10_000,
        positive_only: bool,
        page in 1u32..10,
        page_size in 1u32..20,
    ) {
        let spec = spec(Decimal::from(min_q4), positive_only, page, page_size);
        let result = filter_and_paginate(&data, &spec, |c| c.variance());

        for item in &result.items {
            prop_assert!(spec.matches(item));
        }

        let expected = data.iter().filter(|c| spec.matches(*c)).count();
        prop_assert_eq!(result.info.total_items, expected);
    }

    /// Page windows tile the filtered set: sizes sum to totalItems
    #[test]
    fn prop_page_windows_tile(
        data in arb_customers(),
        page_size in 1u32..20,
    ) {
        let probe = spec(Decimal::ZERO, false, 1, page_size);
        let first = filter_and_paginate(&data, &probe, |c| c.variance());

        let mut seen = 0usize;
        for page in 1..=first.info.total_pages.max(1) {
            let s = spec(Decimal::ZERO, false, page, page_size);
            seen += filter_and_paginate(&data, &s, |c| c.variance()).items.len();
        }
        prop_assert_eq!(seen, first.info.total_items);
    }

    /// Requesting past the last page is empty with hasNextPage false
    #[test]
    fn prop_past_last_page_is_empty(
        data in arb_customers(),
        page_size in 1u32..20,
    ) {
        let probe = spec(Decimal::ZERO, false, 1, page_size);
        let first = filter_and_paginate(&data, &probe, |c| c.variance());

        let beyond = first.info.total_pages + 1;
        let s = spec(Decimal::ZERO, false, beyond, page_size);
        let result = filter_and_paginate(&data, &s, |c| c.variance());

        prop_assert!(result.items.is_empty());
        prop_assert!(!result.info.has_next_page);
    }
}
