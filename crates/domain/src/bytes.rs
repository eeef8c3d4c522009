//! Human-readable byte sizes.

use crate::error::{DomainError, DomainResult};

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;
const TIB: u64 = GIB * 1024;
const PIB: u64 = TIB * 1024;
const EIB: u64 = PIB * 1024;

/// Binary thresholds, largest first.
const BINARY_STEPS: &[(u64, &str)] = &[
    (EIB, "EiB"),
    (PIB, "PiB"),
    (TIB, "TiB"),
    (GIB, "GiB"),
    (MIB, "MiB"),
    (KIB, "KiB"),
];

/// Formats a byte count using binary units with two decimals.
///
/// # Examples
///
/// ```
/// use stencil_domain::bytes::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 bytes");
/// assert_eq!(format_bytes(1536), "1.50 KiB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    BINARY_STEPS
        .iter()
        .find(|(step, _)| bytes >= *step)
        .map_or_else(
            || format!("{bytes} bytes"),
            |(step, unit)| format!("{:.2} {unit}", bytes as f64 / *step as f64),
        )
}

/// Returns the multiplier for a size unit suffix.
fn unit_multiplier(unit: &str) -> Option<u64> {
    let multiplier = match unit {
        "Ki" | "KiB" => KIB,
        "Mi" | "MiB" => MIB,
        "Gi" | "GiB" => GIB,
        "Ti" | "TiB" => TIB,
        "Pi" | "PiB" => PIB,
        "Ei" | "EiB" => EIB,
        "K" | "KB" => 1_000,
        "M" | "MB" => 1_000_000,
        "G" | "GB" => 1_000_000_000,
        "T" | "TB" => 1_000_000_000_000,
        "P" | "PB" => 1_000_000_000_000_000,
        "E" | "EB" => 1_000_000_000_000_000_000,
        _ => return None,
    };
    Some(multiplier)
}

/// Parses a size such as `"1Mi"`, `"125MiB"` or `"2GB"` into bytes.
///
/// The input must be an unsigned integer immediately followed by a unit.
/// Binary units (`Ki`, `KiB`, ... `EiB`) use powers of 1024, decimal units
/// (`K`, `KB`, ... `EB`) use powers of 1000.
///
/// # Errors
///
/// Returns [`DomainError::InvalidByteSize`] when the input is empty, the
/// number or unit is missing, the unit is unknown, or the result overflows.
pub fn parse_bytes(input: &str) -> DomainResult<u64> {
    if input.is_empty() {
        return Err(DomainError::InvalidByteSize("input cannot be empty".to_string()));
    }

    let split = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    let (number, unit) = input.split_at(split);

    if number.is_empty() || unit.is_empty() {
        return Err(DomainError::InvalidByteSize(format!(
            "missing number or unit: {input}"
        )));
    }

    let value: u64 = number
        .parse()
        .map_err(|_| DomainError::InvalidByteSize(format!("invalid number: {number}")))?;
    let multiplier = unit_multiplier(unit)
        .ok_or_else(|| DomainError::InvalidByteSize(format!("invalid unit: {unit}")))?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| DomainError::InvalidByteSize(format!("value too large: {input}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_small_values() {
        assert_eq!(format_bytes(0), "0 bytes");
        assert_eq!(format_bytes(512), "512 bytes");
        assert_eq!(format_bytes(1023), "1023 bytes");
    }

    #[test]
    fn test_format_binary_units() {
        assert_eq!(format_bytes(1024), "1.00 KiB");
        assert_eq!(format_bytes(2048), "2.00 KiB");
        assert_eq!(format_bytes(MIB), "1.00 MiB");
        assert_eq!(format_bytes(GIB), "1.00 GiB");
        assert_eq!(format_bytes(TIB), "1.00 TiB");
        assert_eq!(format_bytes(PIB), "1.00 PiB");
        assert_eq!(format_bytes(EIB), "1.00 EiB");
        assert_eq!(format_bytes(u64::MAX), "16.00 EiB");
    }

    #[test]
    fn test_parse_decimal_units() {
        assert_eq!(parse_bytes("1KB").unwrap(), 1_000);
        assert_eq!(parse_bytes("1MB").unwrap(), 1_000_000);
        assert_eq!(parse_bytes("1GB").unwrap(), 1_000_000_000);
        assert_eq!(parse_bytes("1TB").unwrap(), 1_000_000_000_000);
        assert_eq!(parse_bytes("1PB").unwrap(), 1_000_000_000_000_000);
        assert_eq!(parse_bytes("1EB").unwrap(), 1_000_000_000_000_000_000);
        assert_eq!(parse_bytes("3K").unwrap(), 3_000);
    }

    #[test]
    fn test_parse_binary_units() {
        assert_eq!(parse_bytes("1Ki").unwrap(), 1024);
        assert_eq!(parse_bytes("1Mi").unwrap(), MIB);
        assert_eq!(parse_bytes("125MiB").unwrap(), 125 * MIB);
        assert_eq!(parse_bytes("1Gi").unwrap(), GIB);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_bytes("").is_err());
        assert!(parse_bytes("100").is_err());
        assert!(parse_bytes("MB").is_err());
        assert!(parse_bytes("10XB").is_err());
        assert!(parse_bytes("1.5GB").is_err());
        assert!(parse_bytes("-1KB").is_err());
        assert!(parse_bytes("100EiB").is_err());
    }
}
