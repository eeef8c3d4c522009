//! Integer range strings such as `"1-3"` or `"7"`.

use crate::error::{DomainError, DomainResult};

/// Largest number of integers a range, or a list of ranges, may expand to.
pub const MAX_RANGE_VALUES: u64 = 1_000_000;

/// Expands a single range string into its integers.
///
/// `"1-3"` yields `[1, 2, 3]`; a bare integer such as `"7"` yields `[7]`.
/// Whitespace around each bound is ignored.
///
/// # Errors
///
/// Returns [`DomainError::InvalidRange`] if the string has more than one
/// `-`, a bound is not an integer, the start exceeds the end, or the range
/// holds more than [`MAX_RANGE_VALUES`] integers.
pub fn parse_range(range: &str) -> DomainResult<Vec<i64>> {
    let Some((start, end)) = range.split_once('-') else {
        let value = range
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidRange(format!("invalid integer value: {range}")))?;
        return Ok(vec![value]);
    };

    if end.contains('-') {
        return Err(DomainError::InvalidRange(format!(
            "invalid range format: {range}"
        )));
    }

    let start: i64 = start
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidRange(format!("invalid start value in range: {range}")))?;
    let end: i64 = end
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidRange(format!("invalid end value in range: {range}")))?;

    if start > end {
        return Err(DomainError::InvalidRange(format!(
            "start value is greater than end value in range: {range}"
        )));
    }

    if end.abs_diff(start) >= MAX_RANGE_VALUES {
        return Err(DomainError::InvalidRange(format!(
            "range expands to more than {MAX_RANGE_VALUES} values: {range}"
        )));
    }

    Ok((start..=end).collect())
}

/// Expands and concatenates several range strings, in order.
///
/// # Errors
///
/// Returns the first [`DomainError::InvalidRange`] encountered, including
/// when the combined expansion exceeds [`MAX_RANGE_VALUES`].
pub fn parse_ranges<S: AsRef<str>>(ranges: &[S]) -> DomainResult<Vec<i64>> {
    let mut values = Vec::new();
    for range in ranges {
        values.extend(parse_range(range.as_ref())?);
        if values.len() as u64 > MAX_RANGE_VALUES {
            return Err(DomainError::InvalidRange(format!(
                "ranges expand to more than {MAX_RANGE_VALUES} values"
            )));
        }
    }
    Ok(values)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("1-3").unwrap(), vec![1, 2, 3]);
        assert_eq!(
            parse_range("1-10").unwrap(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
        );
        assert_eq!(parse_range(" 4 - 5 ").unwrap(), vec![4, 5]);
        assert_eq!(parse_range("5-5").unwrap(), vec![5]);
    }

    #[test]
    fn test_parse_single_value() {
        assert_eq!(parse_range("7").unwrap(), vec![7]);
        assert_eq!(parse_range(" 42 ").unwrap(), vec![42]);
    }

    #[test]
    fn test_parse_range_errors() {
        assert!(parse_range("").is_err());
        assert!(parse_range("a-3").is_err());
        assert!(parse_range("1-b").is_err());
        assert!(parse_range("1-2-3").is_err());
        assert!(parse_range("5-1").is_err());
        assert!(parse_range("-1").is_err());
        assert!(parse_range("x").is_err());
    }

    #[test]
    fn test_parse_ranges() {
        assert_eq!(
            parse_ranges(&["1-3", "4-6"]).unwrap(),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!(
            parse_ranges(&["1-3", "4-6", "7-9"]).unwrap(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
        assert_eq!(parse_ranges(&["9", "1-2"]).unwrap(), vec![9, 1, 2]);
    }

    #[test]
    fn test_oversized_ranges_are_rejected() {
        assert!(matches!(
            parse_range("0-9223372036854775807"),
            Err(DomainError::InvalidRange(_))
        ));
        assert_eq!(parse_range("1-1000000").unwrap().len(), 1_000_000);
        assert!(parse_range("0-1000000").is_err());

        assert!(matches!(
            parse_ranges(&["1-600000", "1-600000"]),
            Err(DomainError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_parse_ranges_stops_at_first_error() {
        let err = parse_ranges(&["1-2", "3-x", "oops"]).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidRange("invalid end value in range: 3-x".to_string())
        );
    }
}
