pub mod errors;
pub mod lead;

pub use errors::{Error, Result};
pub use lead::{Disposition, Lead, LeadState, LeadTable};

/// Ratio with the zero-denominator guard applied: `0.0` instead of NaN/inf.
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        let ratio = numerator / denominator;
        if ratio.is_finite() {
            ratio
        } else {
            0.0
        }
    }
}

/// Percentage (0-100 scale) with the zero-denominator guard applied.
pub fn safe_pct(numerator: f64, denominator: f64) -> f64 {
    safe_ratio(numerator, denominator) * 100.0
}

/// Round to `places` decimals; exact halves go to the even neighbour.
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// Integer with comma thousands separators: `12345` -> `"12,345"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Amount rounded to whole units with thousands separators.
pub fn format_amount(value: f64) -> String {
    group_thousands(round_to(value, 0) as i64)
}

/// Serde helper: emit floats rounded to 2 decimals without touching the stored value.
pub fn serialize_2dp<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(round_to(*value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_ratio_zero_denominator() {
        assert_eq!(safe_ratio(10.0, 0.0), 0.0);
        assert_eq!(safe_pct(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_safe_pct() {
        assert_eq!(safe_pct(1.0, 4.0), 25.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(7.25, 1), 7.2);
        assert_eq!(round_to(7.75, 1), 7.8);
        assert_eq!(round_to(-7.25, 1), -7.2);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(7.26, 1), 7.3);
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(f64::NAN, 2), 0.0);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-15), "-15");
        assert_eq!(group_thousands(-4500), "-4,500");
    }

    #[test]
    fn test_format_amount_rounds() {
        assert_eq!(format_amount(12499.5), "12,500");
        assert_eq!(format_amount(12498.5), "12,498");
        assert_eq!(format_amount(0.4), "0");
    }
}
