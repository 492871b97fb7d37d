use rust_decimal::Decimal;
use serde::Serialize;

use super::stats::GrowthMetrics;

/// Caller-supplied constraints applied before ranking and pagination.
///
/// Built fresh per request by the controller; the engine never retains it.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    /// Keep records whose Q4 revenue is at least this value. Non-positive
    /// thresholds disable the check (the permissive parameter policy maps
    /// absent or malformed values to zero).
    pub min_q4_revenue: Decimal,
    /// Restrict to strictly positive variance.
    pub positive_growth_only: bool,
    /// 1-based page number. Values below 1 are clamped to 1.
    pub page: u32,
    /// Items per page. Zero is clamped to 1.
    pub page_size: u32,
}

impl FilterSpec {
    /// Predicate evaluated against raw, unrounded metric values.
    pub fn matches<T: GrowthMetrics>(&self, record: &T) -> bool {
        let q4_ok = self.min_q4_revenue <= Decimal::ZERO
            || record.q4_revenue() >= self.min_q4_revenue;
        let growth_ok = !self.positive_growth_only || record.variance() > Decimal::ZERO;
        q4_ok && growth_ok
    }
}

/// Pagination block attached to paged responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u32,
    pub total_pages: u32,
    /// Post-filter, pre-pagination count.
    pub total_items: usize,
    pub items_per_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
}

/// One page of records plus its pagination block.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

/// Slice `records` into the requested page.
///
/// A page starting beyond the end of the data yields an empty page, not an
/// error; `total_items` always reflects the full input length.
pub fn paginate<T>(records: Vec<T>, page: u32, page_size: u32) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);

    let total_items = records.len();
    let total_pages = (total_items as u64).div_ceil(page_size as u64) as u32;

    let skip = (page as usize - 1).saturating_mul(page_size as usize);
    let items: Vec<T> = records
        .into_iter()
        .skip(skip)
        .take(page_size as usize)
        .collect();

    let has_next_page = page < total_pages;
    let has_prev_page = page > 1;

    Page {
        items,
        info: PageInfo {
            current_page: page,
            total_pages,
            total_items,
            items_per_page: page_size,
            has_next_page,
            has_prev_page,
            next_page: has_next_page.then(|| page + 1),
            prev_page: has_prev_page.then(|| page - 1),
        },
    }
}

/// Filter by `spec`, stable-sort descending by `sort_key`, then paginate.
///
/// The sort key is a property of the requesting report (variance for the
/// growth view, Q4 revenue for the revenue view), not of this operation.
pub fn filter_and_paginate<T, K>(records: &[T], spec: &FilterSpec, sort_key: K) -> Page<T>
where
    T: GrowthMetrics + Clone,
    K: Fn(&T) -> Decimal,
{
    let mut filtered: Vec<T> = records
        .iter()
        .filter(|r| spec.matches(*r))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));

    paginate(filtered, spec.page, spec.page_size)
}
