//! Resolver settings
//!
//! Plain serde data describing how a resolver should behave. Loading these
//! from files or the environment is an infrastructure concern.

use serde::{Deserialize, Serialize};

use crate::error::{ApplicationError, ApplicationResult};
use crate::resolver::BuiltinFunction;

/// Default length for `randomString()` and `randomHex()` without arguments.
pub const DEFAULT_RANDOM_LENGTH: usize = 32;

/// Largest length accepted by `randomString(n)` and `randomHex(n)`.
pub const MAX_RANDOM_LENGTH: usize = 1024;

/// User-facing resolver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// Length used when a random generator is called without an argument.
    pub default_random_length: usize,

    /// Upper bound for random generator lengths.
    pub max_random_length: usize,

    /// Layout used by `date()` without an argument.
    pub default_date_layout: String,

    /// Function names that are left unresolved.
    pub disabled_functions: Vec<String>,

    /// Whether `${NAME}` / `{NAME}` references are substituted.
    pub environment_pass: bool,

    /// Whether `now()` and `date()` render the host's local offset instead
    /// of UTC.
    pub local_time: bool,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            default_random_length: DEFAULT_RANDOM_LENGTH,
            max_random_length: MAX_RANDOM_LENGTH,
            default_date_layout: "rfc3339".to_string(),
            disabled_functions: Vec::new(),
            environment_pass: true,
            local_time: false,
        }
    }
}

impl ResolverSettings {
    /// Checks the settings for consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::InvalidConfig`] for out-of-range lengths
    /// and [`ApplicationError::UnknownFunction`] for unknown disabled names.
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.max_random_length == 0 {
            return Err(ApplicationError::InvalidConfig(
                "max_random_length must be at least 1".to_string(),
            ));
        }

        if !(1..=self.max_random_length).contains(&self.default_random_length) {
            return Err(ApplicationError::InvalidConfig(format!(
                "default_random_length must be within 1..={}, got {}",
                self.max_random_length, self.default_random_length
            )));
        }

        if let Some(name) = self
            .disabled_functions
            .iter()
            .find(|name| BuiltinFunction::from_name(name).is_none())
        {
            return Err(ApplicationError::UnknownFunction(name.clone()));
        }

        Ok(())
    }
}
