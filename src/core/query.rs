use rust_decimal::Decimal;
use std::str::FromStr;

/// Lenient query-parameter parsing.
///
/// Malformed or missing report parameters are defaulted silently rather than
/// rejected; the dashboard never sees a 400 for a bad `limit` or `page`.

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

fn parse_or<T: FromStr>(raw: Option<&str>, fallback: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(fallback)
}

/// Top-N limit: positive integer or the caller's configured fallback
/// (`AppConfig::default_top_limit` for the report endpoints).
pub fn limit_or_default(raw: Option<&str>, fallback: usize) -> usize {
    let parsed: i64 = parse_or(raw, fallback as i64);
    if parsed > 0 {
        parsed as usize
    } else {
        fallback
    }
}

/// 1-based page number; anything else becomes page 1.
pub fn page_or_default(raw: Option<&str>) -> u32 {
    let parsed: i64 = parse_or(raw, 1);
    if parsed >= 1 {
        parsed as u32
    } else {
        1
    }
}

/// Page size clamped into `1..=MAX_PAGE_SIZE`.
pub fn page_size_or_default(raw: Option<&str>) -> u32 {
    let parsed: i64 = parse_or(raw, DEFAULT_PAGE_SIZE as i64);
    if parsed >= 1 {
        (parsed as u64).min(MAX_PAGE_SIZE as u64) as u32
    } else {
        DEFAULT_PAGE_SIZE
    }
}

/// Numeric threshold; malformed input disables the filter (zero).
pub fn decimal_or_zero(raw: Option<&str>) -> Decimal {
    parse_or(raw, Decimal::ZERO)
}

/// Boolean flag; only the literal `true`/`1` enable it.
pub fn flag(raw: Option<&str>) -> bool {
    matches!(raw.map(str::trim), Some("true") | Some("1"))
}
