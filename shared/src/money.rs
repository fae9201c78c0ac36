//! # Money Formatting
//!
//! Every amount in the application is an integer number of cents. Floating point never touches
//! a monetary value: parsing folds digits into an `i64` and formatting splits the integer into
//! reais and centavos.
//!
//! ## Functions
//!
//! - [`parse_cents`] - Free-form input to cents (digits only)
//! - [`format_brl`] - Cents to `R$ 1.234,56`
//! - [`format_input`] - Re-render what the user typed into an amount field
//! - [`format_signed_brl`] - Movement amounts with an explicit direction sign
//! - [`pix_payload`] - Payload string shown in the PIX charge modal

/// Integer monetary unit, 1/100 of a real.
pub type Cents = i64;

/// Currency symbol used by [`format_brl`].
pub const CURRENCY_SYMBOL: &str = "R$";

/// Interpret the digits of `input` as an integer amount of cents.
///
/// Every non-digit character is ignored, so `"R$ 120,00"` and `"12000"` both parse to
/// `12000`. Input without digits yields `0`. Values that do not fit in an `i64` saturate
/// at [`i64::MAX`].
///
/// # Examples
///
/// ```rust
/// use shared::money::parse_cents;
///
/// assert_eq!(parse_cents("12000"), 12000);
/// assert_eq!(parse_cents("R$ 1.000,50"), 100050);
/// assert_eq!(parse_cents("abc"), 0);
/// ```
pub fn parse_cents(input: &str) -> Cents {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        })
}

/// Format cents as Brazilian reais (e.g., 123456 -> "R$ 1.234,56")
///
/// # Examples
///
/// ```rust
/// use shared::money::format_brl;
///
/// assert_eq!(format_brl(12000), "R$ 120,00");
/// assert_eq!(format_brl(100000), "R$ 1.000,00");
/// assert_eq!(format_brl(-5000), "-R$ 50,00");
/// ```
pub fn format_brl(cents: Cents) -> String {
    let magnitude = cents.unsigned_abs();
    let units = magnitude / 100;
    let fraction = magnitude % 100;

    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL} {grouped},{fraction:02}")
}

/// Re-render a raw amount field value.
///
/// Used on every keystroke of the Sale and Withdrawal inputs, so the field always shows a
/// well-formed currency string. Applying it to its own output changes nothing.
pub fn format_input(input: &str) -> String {
    format_brl(parse_cents(input))
}

/// Format an account movement with its direction: `+ R$ 200,00` or `- R$ 50,00`.
pub fn format_signed_brl(cents: Cents) -> String {
    let sign = if cents < 0 { '-' } else { '+' };
    // i64::MIN has no positive counterpart; saturate instead of overflowing.
    let magnitude = cents.checked_abs().unwrap_or(i64::MAX);
    format!("{sign} {}", format_brl(magnitude))
}

/// Payload for a PIX charge of `cents`, e.g. `pix:solutpag|valor=120.00`.
pub fn pix_payload(cents: Cents) -> String {
    let magnitude = cents.unsigned_abs();
    format!("pix:solutpag|valor={}.{:02}", magnitude / 100, magnitude % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_of(s: &str) -> String {
        s.chars().filter(char::is_ascii_digit).collect()
    }

    #[test]
    fn test_parse_cents_digits_only() {
        assert_eq!(parse_cents("12000"), 12000);
        assert_eq!(parse_cents("R$ 120,00"), 12000);
        assert_eq!(parse_cents("1a2b3c"), 123);
        assert_eq!(parse_cents("007"), 7);
    }

    #[test]
    fn test_parse_cents_without_digits() {
        assert_eq!(parse_cents(""), 0);
        assert_eq!(parse_cents("R$ ,"), 0);
        assert_eq!(parse_cents("٣٤"), 0); // non-ASCII digits are not digits here
    }

    #[test]
    fn test_parse_cents_saturates() {
        assert_eq!(parse_cents("99999999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(5), "R$ 0,05");
        assert_eq!(format_brl(500), "R$ 5,00");
        assert_eq!(format_brl(8990), "R$ 89,90");
        assert_eq!(format_brl(100000), "R$ 1.000,00");
        assert_eq!(format_brl(123456789), "R$ 1.234.567,89");
        assert_eq!(format_brl(-250), "-R$ 2,50");
    }

    #[test]
    fn test_format_brl_extremes() {
        assert_eq!(format_brl(i64::MIN), "-R$ 92.233.720.368.547.758,08");
        assert_eq!(format_brl(i64::MAX), "R$ 92.233.720.368.547.758,07");
    }

    #[test]
    fn test_digit_stream_round_trips() {
        for cents in [0, 1, 99, 100, 12000, 99500, 100000, 123456789] {
            let formatted = format_brl(cents);
            assert_eq!(parse_cents(&digits_of(&formatted)), cents, "{formatted}");
        }
    }

    #[test]
    fn test_format_input_is_idempotent() {
        for raw in ["", "1", "12000", "R$ 1.000,00", "x9y9"] {
            let once = format_input(raw);
            assert_eq!(format_input(&once), once);
        }
        assert_eq!(format_input("12000"), "R$ 120,00");
    }

    #[test]
    fn test_format_signed_brl() {
        assert_eq!(format_signed_brl(20000), "+ R$ 200,00");
        assert_eq!(format_signed_brl(-5000), "- R$ 50,00");
        assert_eq!(format_signed_brl(0), "+ R$ 0,00");
    }

    #[test]
    fn test_pix_payload() {
        assert_eq!(pix_payload(12000), "pix:solutpag|valor=120.00");
        assert_eq!(pix_payload(505), "pix:solutpag|valor=5.05");
    }
}
