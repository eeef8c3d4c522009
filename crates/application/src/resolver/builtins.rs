//! Built-in generator functions
//!
//! These are the functions callable through `{{name(args)}}`. Each one takes
//! at most one argument and draws time and randomness from the resolver's
//! configured ports.

use std::fmt::Write as _;

use stencil_domain::{DateLayout, DomainError};
use thiserror::Error;

use super::config::ResolverConfig;
use crate::ports::RandomSourceError;

/// Alphabet used by `randomString`.
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Bytes at or above this value are rejected so every alphabet index is
/// equally likely (`248 = 4 * 62`).
const REJECTION_THRESHOLD: u8 = 248;

/// Upper bound on refill rounds before `randomString` gives up.
const MAX_DRAW_ROUNDS: usize = 64;

/// Error raised when a builtin cannot produce a value for its arguments.
///
/// The resolver turns these into literal (unresolved) placeholders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FunctionError {
    /// The length argument is not an integer.
    #[error("length argument is not an integer: {0:?}")]
    InvalidLength(String),

    /// The length argument is outside `1..=max`.
    #[error("length {length} is outside 1..={max}")]
    LengthOutOfRange {
        /// The requested length.
        length: i64,
        /// The configured maximum.
        max: usize,
    },

    /// The date layout could not be formatted.
    #[error(transparent)]
    Layout(#[from] DomainError),
}

/// Information about a built-in function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinInfo {
    /// Function name in its documented spelling.
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Example call
    pub usage: &'static str,
    /// Example output
    pub example: &'static str,
}

/// The built-in generator functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    /// `randomString(n)`: `n` characters from `[A-Za-z0-9]`.
    RandomString,
    /// `randomHex(n)`: `n` lowercase hex characters.
    RandomHex,
    /// `uuid()`: random version 4 UUID.
    Uuid,
    /// `timestamp()`: Unix time in seconds.
    Timestamp,
    /// `timestampMs()`: Unix time in milliseconds.
    TimestampMs,
    /// `now()`: RFC 3339 time in the clock's offset.
    ///
    /// The standard clocks render UTC (`...Z`); a clock built for local time
    /// renders the host offset (`...+02:00`).
    Now,
    /// `date(layout)`: current time in a named or strftime layout, in the
    /// same offset as `now()`.
    Date,
}

impl BuiltinFunction {
    /// Returns every builtin.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::RandomString,
            Self::RandomHex,
            Self::Uuid,
            Self::Timestamp,
            Self::TimestampMs,
            Self::Now,
            Self::Date,
        ]
    }

    /// Returns the lowercase registry key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RandomString => "randomstring",
            Self::RandomHex => "randomhex",
            Self::Uuid => "uuid",
            Self::Timestamp => "timestamp",
            Self::TimestampMs => "timestampms",
            Self::Now => "now",
            Self::Date => "date",
        }
    }

    /// Looks a builtin up by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|function| function.name().eq_ignore_ascii_case(name))
    }

    /// Returns descriptions of all builtins.
    #[must_use]
    pub fn available() -> Vec<BuiltinInfo> {
        vec![
            BuiltinInfo {
                name: "randomString",
                description: "Random alphanumeric string (default 32 chars)",
                usage: "{{randomString(16)}}",
                example: "aB3dE5fG7hI9jK1m",
            },
            BuiltinInfo {
                name: "randomHex",
                description: "Random lowercase hex string (default 32 chars)",
                usage: "{{randomHex(8)}}",
                example: "9f86d081",
            },
            BuiltinInfo {
                name: "uuid",
                description: "Random UUID v4",
                usage: "{{uuid()}}",
                example: "550e8400-e29b-41d4-a716-446655440000",
            },
            BuiltinInfo {
                name: "timestamp",
                description: "Unix timestamp in seconds",
                usage: "{{timestamp()}}",
                example: "1706284800",
            },
            BuiltinInfo {
                name: "timestampMs",
                description: "Unix timestamp in milliseconds",
                usage: "{{timestampMs()}}",
                example: "1706284800000",
            },
            BuiltinInfo {
                name: "now",
                description: "Current time in RFC 3339 (UTC)",
                usage: "{{now()}}",
                example: "2024-01-26T12:00:00Z",
            },
            BuiltinInfo {
                name: "date",
                description: "Current time in a named layout or strftime pattern",
                usage: "{{date(kitchen)}}",
                example: "3:04PM",
            },
        ]
    }

    /// Checks the argument text without generating a value.
    ///
    /// # Errors
    ///
    /// Returns an error if `invoke` would reject the same arguments.
    pub fn validate_args(self, args: &str, config: &ResolverConfig) -> Result<(), FunctionError> {
        match self {
            Self::RandomString | Self::RandomHex => parse_length(args, config).map(|_| ()),
            Self::Date => {
                date_layout(args, config).format(&config.clock().zoned_now())?;
                Ok(())
            }
            Self::Uuid | Self::Timestamp | Self::TimestampMs | Self::Now => Ok(()),
        }
    }

    /// Generates a value for this function.
    ///
    /// A failing random source yields an empty string rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid.
    pub fn invoke(self, args: &str, config: &ResolverConfig) -> Result<String, FunctionError> {
        let now = || config.clock().now();

        match self {
            Self::RandomString => Ok(self.or_empty(random_string(parse_length(args, config)?, config))),
            Self::RandomHex => Ok(self.or_empty(random_hex(parse_length(args, config)?, config))),
            Self::Uuid => Ok(self.or_empty(random_uuid(config))),
            Self::Timestamp => Ok(now().timestamp().to_string()),
            Self::TimestampMs => Ok(now().timestamp_millis().to_string()),
            Self::Now => Ok(DateLayout::Rfc3339.format(&config.clock().zoned_now())?),
            Self::Date => Ok(date_layout(args, config).format(&config.clock().zoned_now())?),
        }
    }

    fn or_empty(self, generated: Result<String, RandomSourceError>) -> String {
        generated.unwrap_or_else(|error| {
            tracing::warn!(function = self.name(), %error, "random source failed");
            String::new()
        })
    }
}

/// Parses a length argument: empty means the configured default.
fn parse_length(args: &str, config: &ResolverConfig) -> Result<usize, FunctionError> {
    if args.is_empty() {
        return Ok(config.default_random_length());
    }

    let length: i64 = args
        .parse()
        .map_err(|_| FunctionError::InvalidLength(args.to_string()))?;
    let max = config.max_random_length();

    usize::try_from(length)
        .ok()
        .filter(|length| (1..=max).contains(length))
        .ok_or(FunctionError::LengthOutOfRange { length, max })
}

fn date_layout(args: &str, config: &ResolverConfig) -> DateLayout {
    if args.is_empty() {
        config.default_date_layout().clone()
    } else {
        DateLayout::parse(args)
    }
}

fn random_string(length: usize, config: &ResolverConfig) -> Result<String, RandomSourceError> {
    let mut output = String::with_capacity(length);
    let mut buffer = vec![0u8; length];

    for _ in 0..MAX_DRAW_ROUNDS {
        config.random().fill_bytes(&mut buffer)?;
        for &byte in &buffer {
            if byte < REJECTION_THRESHOLD {
                output.push(char::from(ALPHANUMERIC[usize::from(byte) % ALPHANUMERIC.len()]));
                if output.len() == length {
                    return Ok(output);
                }
            }
        }
    }

    Err(RandomSourceError::Exhausted(MAX_DRAW_ROUNDS))
}

fn random_hex(length: usize, config: &ResolverConfig) -> Result<String, RandomSourceError> {
    let mut buffer = vec![0u8; length.div_ceil(2)];
    config.random().fill_bytes(&mut buffer)?;

    let mut output = buffer
        .iter()
        .fold(String::with_capacity(buffer.len() * 2), |mut acc, byte| {
            let _ = write!(acc, "{byte:02x}");
            acc
        });
    output.truncate(length);
    Ok(output)
}

fn random_uuid(config: &ResolverConfig) -> Result<String, RandomSourceError> {
    let mut bytes = [0u8; 16];
    config.random().fill_bytes(&mut bytes)?;
    Ok(uuid::Builder::from_random_bytes(bytes).into_uuid().to_string())
}
