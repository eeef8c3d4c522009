//! Settings loading
//!
//! Resolver settings are layered, later sources overriding earlier ones:
//!
//! 1. built-in defaults (fields absent from every source)
//! 2. an optional TOML, YAML or JSON file (format picked by extension)
//! 3. `STENCIL_*` environment variables, e.g. `STENCIL_MAX_RANDOM_LENGTH=64`
//!    or `STENCIL_DISABLED_FUNCTIONS=uuid,now`

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use config::{Config, Environment, File};
use stencil_application::{
    ApplicationError, PlaceholderResolver, ResolverConfig, ResolverSettings,
};
use thiserror::Error;

use crate::adapters::{OsRandom, ProcessEnvironment, SystemClock};

/// Prefix of environment variables that override settings.
pub const ENV_PREFIX: &str = "STENCIL";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A source could not be read or deserialized.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    /// The loaded settings are inconsistent.
    #[error("invalid settings: {0}")]
    Invalid(#[from] ApplicationError),
}

/// Loads settings from `path` (if given) and the process environment.
///
/// # Errors
///
/// Returns an error if the file is missing or malformed, a value has the
/// wrong type, or the result fails validation.
pub fn load_settings(path: Option<&Path>) -> Result<ResolverSettings, SettingsError> {
    load_settings_from(path, None)
}

/// Loads settings from `path` (if given) and `env` instead of the process
/// environment.
///
/// Keys in `env` carry the `STENCIL_` prefix, as they would in the process
/// environment.
///
/// # Errors
///
/// See [`load_settings`].
pub fn load_settings_with_env(
    path: Option<&Path>,
    env: HashMap<String, String>,
) -> Result<ResolverSettings, SettingsError> {
    load_settings_from(path, Some(env))
}

fn load_settings_from(
    path: Option<&Path>,
    env: Option<HashMap<String, String>>,
) -> Result<ResolverSettings, SettingsError> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "loading resolver settings file");
        builder = builder.add_source(File::from(path).required(true));
    }

    let environment = Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("disabled_functions")
        .source(env.map(|vars| vars.into_iter().collect()));

    let settings: ResolverSettings = builder.add_source(environment).build()?.try_deserialize()?;

    if let Err(error) = settings.validate() {
        tracing::warn!(%error, "rejected resolver settings");
        return Err(error.into());
    }

    Ok(settings)
}

/// Builds a resolver backed by the system clock, the OS random source and
/// the process environment.
///
/// Dates render in UTC unless `settings.local_time` is set.
///
/// # Errors
///
/// Returns an error if `settings` fail validation.
pub fn system_resolver(settings: &ResolverSettings) -> Result<PlaceholderResolver, SettingsError> {
    let clock = if settings.local_time {
        SystemClock::local()
    } else {
        SystemClock::new()
    };
    let config = ResolverConfig::from_settings(
        settings,
        Arc::new(clock),
        Arc::new(OsRandom::new()),
        Arc::new(ProcessEnvironment::new()),
    )?;
    Ok(PlaceholderResolver::new(config))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn settings_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = load_settings_with_env(None, HashMap::new()).unwrap();
        assert_eq!(settings, ResolverSettings::default());
    }

    #[test]
    fn test_toml_file() {
        let file = settings_file(
            ".toml",
            "max_random_length = 64\ndefault_date_layout = \"kitchen\"\n",
        );
        let settings = load_settings_with_env(Some(file.path()), HashMap::new()).unwrap();
        assert_eq!(settings.max_random_length, 64);
        assert_eq!(settings.default_date_layout, "kitchen");
        assert_eq!(settings.default_random_length, 32);
    }

    #[test]
    fn test_yaml_and_json_files() {
        let yaml = settings_file(".yaml", "environment_pass: false\nlocal_time: true\n");
        let settings = load_settings_with_env(Some(yaml.path()), HashMap::new()).unwrap();
        assert!(!settings.environment_pass);
        assert!(settings.local_time);

        let json = settings_file(".json", r#"{"disabled_functions": ["uuid"]}"#);
        let settings = load_settings_with_env(Some(json.path()), HashMap::new()).unwrap();
        assert_eq!(settings.disabled_functions, vec!["uuid".to_string()]);
    }

    #[test]
    fn test_env_overrides_file() {
        let file = settings_file(".toml", "default_random_length = 8\n");
        let settings = load_settings_with_env(
            Some(file.path()),
            env(&[
                ("STENCIL_DEFAULT_RANDOM_LENGTH", "16"),
                ("STENCIL_ENVIRONMENT_PASS", "false"),
                ("STENCIL_DISABLED_FUNCTIONS", "uuid,now"),
                ("UNRELATED", "ignored"),
            ]),
        )
        .unwrap();

        assert_eq!(settings.default_random_length, 16);
        assert!(!settings.environment_pass);
        assert_eq!(
            settings.disabled_functions,
            vec!["uuid".to_string(), "now".to_string()]
        );
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_settings_with_env(Some(&dir.path().join("absent.toml")), HashMap::new());
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn test_wrong_type_is_error() {
        let result = load_settings_with_env(
            None,
            env(&[("STENCIL_MAX_RANDOM_LENGTH", "lots")]),
        );
        assert!(matches!(result, Err(SettingsError::Load(_))));
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let result = load_settings_with_env(
            None,
            env(&[("STENCIL_DISABLED_FUNCTIONS", "uuid,eval")]),
        );
        assert!(matches!(
            result,
            Err(SettingsError::Invalid(ApplicationError::UnknownFunction(name))) if name == "eval"
        ));

        let result = load_settings_with_env(
            None,
            env(&[
                ("STENCIL_DEFAULT_RANDOM_LENGTH", "100"),
                ("STENCIL_MAX_RANDOM_LENGTH", "10"),
            ]),
        );
        assert!(matches!(
            result,
            Err(SettingsError::Invalid(ApplicationError::InvalidConfig(_)))
        ));
    }

    #[test]
    fn test_system_resolver() {
        let settings = ResolverSettings {
            disabled_functions: vec!["uuid".to_string()],
            ..ResolverSettings::default()
        };
        let resolver = system_resolver(&settings).unwrap();
        assert_eq!(resolver.resolve("{{uuid()}}"), "{{uuid()}}");
        assert_eq!(resolver.resolve("{{randomHex(6)}}").len(), 6);
        assert!(resolver.resolve("{{now()}}").ends_with('Z'));
    }

    #[test]
    fn test_system_resolver_local_time() {
        let settings = ResolverSettings {
            local_time: true,
            ..ResolverSettings::default()
        };
        let resolver = system_resolver(&settings).unwrap();
        let rendered = resolver.resolve("{{now()}}");
        let parsed = chrono::DateTime::parse_from_rfc3339(&rendered).unwrap();
        assert_eq!(
            parsed.offset().local_minus_utc(),
            chrono::Local::now().offset().local_minus_utc()
        );
    }
}
