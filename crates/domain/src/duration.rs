//! Duration formatting and parsing.

use std::time::Duration;

use crate::error::{DomainError, DomainResult};

const MILLISECOND: Duration = Duration::from_millis(1);
const SECOND: Duration = Duration::from_secs(1);
const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(3600);

/// Formats a duration in the largest fitting unit (`ns`, `ms`, `s`, `m`, `h`).
///
/// Sub-millisecond durations are printed as whole nanoseconds; every other
/// unit uses `decimals` fractional digits.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use stencil_domain::duration::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(1500), 2), "1.50s");
/// assert_eq!(format_duration(Duration::from_nanos(42), 2), "42ns");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_duration(duration: Duration, decimals: usize) -> String {
    if duration < MILLISECOND {
        return format!("{}ns", duration.as_nanos());
    }

    let (value, unit) = if duration < SECOND {
        (duration.as_micros() as f64 / 1000.0, "ms")
    } else if duration < MINUTE {
        (duration.as_secs_f64(), "s")
    } else if duration < HOUR {
        (duration.as_secs_f64() / 60.0, "m")
    } else {
        (duration.as_secs_f64() / 3600.0, "h")
    };

    format!("{value:.decimals$}{unit}")
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3600 * 1_000_000_000),
        _ => None,
    }
}

/// Parses a duration string such as `"300ms"`, `"1.5h"` or `"2h45m"`.
///
/// An empty string parses as zero. Valid units are `ns`, `us` (or `µs`),
/// `ms`, `s`, `m` and `h`. A bare `"0"` is accepted without a unit.
///
/// # Errors
///
/// Returns [`DomainError::InvalidDuration`] for malformed input, unknown
/// units, negative values, or values that do not fit in a `u64` of
/// nanoseconds.
pub fn parse_duration(input: &str) -> DomainResult<Duration> {
    if input.is_empty() {
        return Ok(Duration::ZERO);
    }

    let invalid = |reason: &str| DomainError::InvalidDuration(format!("{reason}: {input}"));

    let mut rest = input.strip_prefix('+').unwrap_or(input);
    if rest.starts_with('-') {
        return Err(invalid("negative durations are not supported"));
    }
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid("missing value"));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_end);

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);
        rest = tail;

        if unit.is_empty() {
            return Err(invalid("missing unit"));
        }
        let scale = unit_nanos(unit).ok_or_else(|| invalid("unknown unit"))?;
        let nanos = scaled_nanos(number, scale).ok_or_else(|| invalid("invalid number"))?;
        total = total
            .checked_add(nanos)
            .ok_or_else(|| invalid("value too large"))?;
    }

    let nanos = u64::try_from(total).map_err(|_| invalid("value too large"))?;
    Ok(Duration::from_nanos(nanos))
}

/// Converts a decimal number of `scale`-nanosecond units into nanoseconds.
fn scaled_nanos(number: &str, scale: u128) -> Option<u128> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if fraction.contains('.') || (whole.is_empty() && fraction.is_empty()) {
        return None;
    }

    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole.checked_mul(scale)?;

    // Digits past nanosecond precision cannot change the result.
    let fraction = &fraction[..fraction.len().min(18)];
    if !fraction.is_empty() {
        let digits: u128 = fraction.parse().ok()?;
        let denominator = 10u128.checked_pow(u32::try_from(fraction.len()).ok()?)?;
        nanos = nanos.checked_add(digits.checked_mul(scale)? / denominator)?;
    }

    Some(nanos)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_each_unit() {
        assert_eq!(format_duration(Duration::from_nanos(999), 2), "999ns");
        assert_eq!(format_duration(Duration::from_micros(1500), 1), "1.5ms");
        assert_eq!(format_duration(Duration::from_millis(2004), 2), "2.00s");
        assert_eq!(format_duration(Duration::from_secs(90), 1), "1.5m");
        assert_eq!(format_duration(Duration::from_secs(5400), 2), "1.50h");
    }

    #[test]
    fn test_format_zero_decimals() {
        assert_eq!(format_duration(Duration::from_secs(2), 0), "2s");
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(parse_duration("").unwrap(), Duration::ZERO);
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_single_units() {
        assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("300ms").unwrap(), Duration::from_millis(300));
        assert_eq!(parse_duration("15us").unwrap(), Duration::from_micros(15));
        assert_eq!(parse_duration("15µs").unwrap(), Duration::from_micros(15));
        assert_eq!(parse_duration("7ns").unwrap(), Duration::from_nanos(7));
        assert_eq!(parse_duration("+5m").unwrap(), Duration::from_secs(300));
    }

    #[test]
    fn test_parse_compound_and_fractional() {
        assert_eq!(
            parse_duration("2h45m").unwrap(),
            Duration::from_secs(2 * 3600 + 45 * 60)
        );
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
        assert_eq!(
            parse_duration("1m0.25s").unwrap(),
            Duration::from_millis(60_250)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_duration("5").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("5d").is_err());
        assert!(parse_duration("-1s").is_err());
        assert!(parse_duration("1..5s").is_err());
        assert!(parse_duration(".s").is_err());
        assert!(parse_duration("+").is_err());
        assert!(parse_duration("9999999999h").is_err());
    }
}
