use rust_decimal::{Decimal, RoundingStrategy};

/// Display formatting for dashboard values.
///
/// Dashboards render these strings directly, so the rounding here must match
/// the engine's: 2 decimal places, half away from zero.

/// Format a monetary amount with thousands grouping, e.g. `1,234,567.89`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let as_text = format!("{:.2}", rounded);

    let (sign, digits) = match as_text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", as_text.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Format a percentage as `NN.NN%`.
pub fn format_percentage(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", rounded)
}
