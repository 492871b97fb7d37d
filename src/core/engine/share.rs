use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Fallback used by callers when a top-N limit is absent or not a positive
/// integer. The engine itself takes the already-clamped value.
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Label assigned to the rollup entry covering everything outside the top-N head.
pub const OTHERS_LABEL: &str = "Others";

/// A record's metric value together with its percentage of the report total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareEntry {
    pub label: String,
    pub value: Decimal,
    /// Percentage of the total, rounded to 2 decimal places (half away from zero).
    pub percentage: Decimal,
}

/// Percentage of `value` over `total`, rounded to 2 decimal places.
///
/// A non-positive total yields exactly zero rather than a division artifact,
/// so empty or all-zero data sets render as 0.00% across the board.
pub fn percent_of(value: Decimal, total: Decimal) -> Decimal {
    if total > Decimal::ZERO {
        (value / total * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    } else {
        Decimal::ZERO
    }
}

/// Return the first `limit` records after a descending stable sort by `metric`.
///
/// Ties keep their input order; the source data defines no secondary key, so
/// input order is the documented tie-break contract. A limit beyond the input
/// length simply returns the whole set.
pub fn rank_by<T, F>(records: &[T], metric: F, limit: usize) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> Decimal,
{
    let mut ranked: Vec<T> = records.to_vec();
    // Vec::sort_by is stable, which is what keeps equal metrics in input order.
    ranked.sort_by(|a, b| metric(b).cmp(&metric(a)));
    ranked.truncate(limit);
    ranked
}

/// Top-N revenue share with an "Others" rollup.
///
/// The head is the first `limit` records of a descending stable sort by
/// `metric`; every record outside the head (by sort position, since labels may
/// repeat) is folded into a single trailing "Others" entry. Percentages are
/// computed against the total over the *full* input, so head plus Others sums
/// to 100% up to per-entry rounding. No Others entry is emitted when the head
/// already covers the whole set.
pub fn share_with_others<T, F, L>(records: &[T], metric: F, label: L, limit: usize) -> Vec<ShareEntry>
where
    F: Fn(&T) -> Decimal,
    L: Fn(&T) -> &str,
{
    let total: Decimal = records.iter().map(&metric).sum();

    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| metric(&records[b]).cmp(&metric(&records[a])));

    let head_len = limit.min(order.len());
    let mut entries = Vec::with_capacity(head_len + 1);

    for &idx in &order[..head_len] {
        let value = metric(&records[idx]);
        entries.push(ShareEntry {
            label: label(&records[idx]).to_string(),
            value,
            percentage: percent_of(value, total),
        });
    }

    if order.len() > head_len {
        let value: Decimal = order[head_len..].iter().map(|&idx| metric(&records[idx])).sum();
        entries.push(ShareEntry {
            label: OTHERS_LABEL.to_string(),
            value,
            percentage: percent_of(value, total),
        });
    }

    entries
}
