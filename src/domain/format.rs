// Formatting utilities - currency strings and guest initials
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("invalid currency amount: {0}")]
    InvalidAmount(f64),
}

/// Render a non-negative amount as a dollar string with thousands separators
/// and no fractional digits, e.g. `82450.0` -> `"$82,450"`.
///
/// NaN, infinities and negative amounts are rejected rather than clamped, so
/// a bad upstream aggregate surfaces as an error instead of a plausible
/// number on the dashboard.
pub fn format_currency(amount: f64) -> Result<String, FormatError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(FormatError::InvalidAmount(amount));
    }

    let whole = amount.round() as i64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    Ok(format!("${}", grouped))
}

/// First character of each of the first two whitespace-separated tokens,
/// uppercased. Empty input yields an empty string.
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}
