//! Parsing of human-friendly numeric thresholds such as `100K` or `1.5M`.

use crate::errors::ScheduleError;

/// Parses a threshold with an optional `K` (thousand) or `M` (million) suffix.
///
/// Whitespace anywhere in the input is ignored, the suffix is case-insensitive
/// and at most one decimal point is accepted. Fractional results are rounded to
/// the nearest whole unit.
pub fn parse_threshold(input: &str) -> Result<u64, ScheduleError> {
    let compact: String = input.chars().filter(|ch| !ch.is_whitespace()).collect();
    let unparseable = || ScheduleError::UnparseableThreshold(input.to_string());

    let (number, multiplier) = match compact.chars().last() {
        Some('k') | Some('K') => (&compact[..compact.len() - 1], 1_000f64),
        Some('m') | Some('M') => (&compact[..compact.len() - 1], 1_000_000f64),
        Some(_) => (compact.as_str(), 1f64),
        None => return Err(unparseable()),
    };

    let well_formed = !number.is_empty()
        && number.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
        && number.matches('.').count() <= 1
        && number.chars().any(|ch| ch.is_ascii_digit());
    if !well_formed {
        return Err(unparseable());
    }

    let value: f64 = number.parse().map_err(|_| unparseable())?;
    let scaled = (value * multiplier).round();
    if !scaled.is_finite() || scaled > u64::MAX as f64 {
        return Err(unparseable());
    }
    Ok(scaled as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffixes_scale_values() {
        assert_eq!(parse_threshold("100K").unwrap(), 100_000);
        assert_eq!(parse_threshold("1.5M").unwrap(), 1_500_000);
        assert_eq!(parse_threshold("2m").unwrap(), 2_000_000);
        assert_eq!(parse_threshold("250000").unwrap(), 250_000);
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(parse_threshold(" 2 k ").unwrap(), 2_000);
        assert_eq!(parse_threshold("\t10\n").unwrap(), 10);
    }

    #[test]
    fn decimal_forms() {
        assert_eq!(parse_threshold(".5K").unwrap(), 500);
        assert_eq!(parse_threshold("12.").unwrap(), 12);
        assert_eq!(parse_threshold("1.2346K").unwrap(), 1_235);
    }

    #[test]
    fn rejects_garbage() {
        for input in ["abc", "", "   ", "K", ".", "1.2.3", "-5", "10KM", "1e6", "1,000"] {
            assert!(
                matches!(parse_threshold(input), Err(ScheduleError::UnparseableThreshold(_))),
                "expected `{input}` to be rejected"
            );
        }
    }
}
