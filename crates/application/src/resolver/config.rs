//! Resolver configuration
//!
//! Everything a resolver reads from the outside world is bundled here so a
//! resolver can be built with a fixed clock, a seeded random source or a
//! static environment.

use std::fmt;
use std::sync::Arc;

use stencil_domain::DateLayout;

use super::registry::FunctionRegistry;
use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::{Clock, EnvironmentSource, RandomSource};
use crate::settings::{DEFAULT_RANDOM_LENGTH, MAX_RANDOM_LENGTH, ResolverSettings};

/// Immutable inputs of a [`PlaceholderResolver`](super::PlaceholderResolver).
#[derive(Clone)]
pub struct ResolverConfig {
    clock: Arc<dyn Clock>,
    random: Arc<dyn RandomSource>,
    environment: Arc<dyn EnvironmentSource>,
    registry: FunctionRegistry,
    default_random_length: usize,
    max_random_length: usize,
    default_date_layout: DateLayout,
    environment_pass: bool,
}

impl ResolverConfig {
    /// Creates a configuration with the standard registry and default limits.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
        environment: Arc<dyn EnvironmentSource>,
    ) -> Self {
        Self {
            clock,
            random,
            environment,
            registry: FunctionRegistry::standard(),
            default_random_length: DEFAULT_RANDOM_LENGTH,
            max_random_length: MAX_RANDOM_LENGTH,
            default_date_layout: DateLayout::Rfc3339,
            environment_pass: true,
        }
    }

    /// Creates a configuration from validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings fail validation.
    pub fn from_settings(
        settings: &ResolverSettings,
        clock: Arc<dyn Clock>,
        random: Arc<dyn RandomSource>,
        environment: Arc<dyn EnvironmentSource>,
    ) -> ApplicationResult<Self> {
        settings.validate()?;

        let registry = settings
            .disabled_functions
            .iter()
            .try_fold(FunctionRegistry::standard(), |registry, name| {
                registry.without(name)
            })?;

        Ok(Self::new(clock, random, environment)
            .with_registry(registry)
            .with_random_lengths(settings.default_random_length, settings.max_random_length)?
            .with_default_date_layout(DateLayout::parse(&settings.default_date_layout))
            .with_environment_pass(settings.environment_pass))
    }

    /// Replaces the function registry.
    #[must_use]
    pub fn with_registry(mut self, registry: FunctionRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets the default and maximum random lengths.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::InvalidConfig`] unless
    /// `1 <= default <= max`.
    pub fn with_random_lengths(mut self, default: usize, max: usize) -> ApplicationResult<Self> {
        if default == 0 || default > max {
            return Err(ApplicationError::InvalidConfig(format!(
                "random lengths must satisfy 1 <= default <= max, got default={default} max={max}"
            )));
        }
        self.default_random_length = default;
        self.max_random_length = max;
        Ok(self)
    }

    /// Sets the layout used by `date()` without an argument.
    #[must_use]
    pub fn with_default_date_layout(mut self, layout: DateLayout) -> Self {
        self.default_date_layout = layout;
        self
    }

    /// Enables or disables the environment pass.
    #[must_use]
    pub fn with_environment_pass(mut self, enabled: bool) -> Self {
        self.environment_pass = enabled;
        self
    }

    /// Returns the clock.
    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Returns the random source.
    #[must_use]
    pub fn random(&self) -> &dyn RandomSource {
        self.random.as_ref()
    }

    /// Returns the environment source.
    #[must_use]
    pub fn environment(&self) -> &dyn EnvironmentSource {
        self.environment.as_ref()
    }

    /// Returns the function registry.
    #[must_use]
    pub const fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Returns the default random length.
    #[must_use]
    pub const fn default_random_length(&self) -> usize {
        self.default_random_length
    }

    /// Returns the maximum random length.
    #[must_use]
    pub const fn max_random_length(&self) -> usize {
        self.max_random_length
    }

    /// Returns the default date layout.
    #[must_use]
    pub const fn default_date_layout(&self) -> &DateLayout {
        &self.default_date_layout
    }

    /// Returns whether environment references are substituted.
    #[must_use]
    pub const fn environment_pass(&self) -> bool {
        self.environment_pass
    }
}

impl fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("registry", &self.registry.names())
            .field("default_random_length", &self.default_random_length)
            .field("max_random_length", &self.max_random_length)
            .field("default_date_layout", &self.default_date_layout)
            .field("environment_pass", &self.environment_pass)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::resolver::test_support::{FixedClock, SequenceRandom};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn ports() -> (Arc<dyn Clock>, Arc<dyn RandomSource>, Arc<dyn EnvironmentSource>) {
        (
            Arc::new(FixedClock::default()),
            Arc::new(SequenceRandom::default()),
            Arc::new(HashMap::<String, String>::new()),
        )
    }

    #[test]
    fn test_new_uses_defaults() {
        let (clock, random, environment) = ports();
        let config = ResolverConfig::new(clock, random, environment);
        assert_eq!(config.default_random_length(), 32);
        assert_eq!(config.max_random_length(), 1024);
        assert_eq!(config.default_date_layout(), &DateLayout::Rfc3339);
        assert!(config.environment_pass());
        assert_eq!(config.registry().len(), 7);
    }

    #[test]
    fn test_with_random_lengths_validates() {
        let (clock, random, environment) = ports();
        let config = ResolverConfig::new(clock, random, environment);
        assert!(config.clone().with_random_lengths(0, 10).is_err());
        assert!(config.clone().with_random_lengths(11, 10).is_err());

        let config = config.with_random_lengths(8, 8).unwrap();
        assert_eq!(config.default_random_length(), 8);
        assert_eq!(config.max_random_length(), 8);
    }

    #[test]
    fn test_from_settings() {
        let (clock, random, environment) = ports();
        let settings = ResolverSettings {
            default_random_length: 12,
            max_random_length: 64,
            default_date_layout: "kitchen".to_string(),
            disabled_functions: vec!["UUID".to_string(), "now".to_string()],
            environment_pass: false,
            local_time: false,
        };

        let config = ResolverConfig::from_settings(&settings, clock, random, environment).unwrap();
        assert_eq!(config.default_random_length(), 12);
        assert_eq!(config.max_random_length(), 64);
        assert_eq!(
            config.default_date_layout(),
            &DateLayout::Pattern("%-I:%M%p".to_string())
        );
        assert!(!config.environment_pass());
        assert!(!config.registry().contains("uuid"));
        assert!(!config.registry().contains("now"));
        assert_eq!(config.registry().len(), 5);
    }

    #[test]
    fn test_from_settings_rejects_invalid() {
        let (clock, random, environment) = ports();
        let settings = ResolverSettings {
            disabled_functions: vec!["eval".to_string()],
            ..ResolverSettings::default()
        };
        assert!(matches!(
            ResolverConfig::from_settings(&settings, clock, random, environment),
            Err(ApplicationError::UnknownFunction(_))
        ));
    }

    #[test]
    fn test_debug_omits_ports() {
        let (clock, random, environment) = ports();
        let debug = format!("{:?}", ResolverConfig::new(clock, random, environment));
        assert!(debug.starts_with("ResolverConfig"));
        assert!(debug.contains("environment_pass: true"));
    }
}
