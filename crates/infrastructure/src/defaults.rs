//! Process-wide resolver
//!
//! Convenience entry points for callers that want the standard behaviour:
//! system clock, OS randomness and the live process environment.

use std::sync::{Arc, LazyLock};

use stencil_application::ports::EnvironmentSource;
use stencil_application::{PlaceholderResolver, ResolverConfig};

use crate::adapters::{OsRandom, ProcessEnvironment, SystemClock};

static DEFAULT_RESOLVER: LazyLock<PlaceholderResolver> =
    LazyLock::new(|| PlaceholderResolver::new(system_config()));

/// Returns a configuration using the system clock, the OS random source
/// and the process environment.
#[must_use]
pub fn system_config() -> ResolverConfig {
    ResolverConfig::new(
        Arc::new(SystemClock::new()),
        Arc::new(OsRandom::new()),
        Arc::new(ProcessEnvironment::new()),
    )
}

/// Returns the shared default resolver.
#[must_use]
pub fn default_resolver() -> &'static PlaceholderResolver {
    &DEFAULT_RESOLVER
}

/// Replaces `{{name(args)}}` calls, then `${NAME}` / `{NAME}` references.
///
/// Never fails; anything that cannot be resolved is left as written.
///
/// ```
/// use stencil_infrastructure::replace_env_vars;
///
/// assert_eq!(replace_env_vars("no placeholders"), "no placeholders");
/// assert_eq!(replace_env_vars("{{unknownFn()}}"), "{{unknownFn()}}");
/// assert_eq!(replace_env_vars("{{randomHex(8)}}").len(), 8);
/// ```
#[must_use]
pub fn replace_env_vars(input: &str) -> String {
    DEFAULT_RESOLVER.resolve(input)
}

/// Returns environment variable `name`, or `default` if unset.
#[must_use]
pub fn env(name: &str, default: &str) -> String {
    ProcessEnvironment::new().get_or(name, default)
}

/// Returns environment variable `name` as an integer, or `default` if unset
/// or not an integer.
#[must_use]
pub fn env_int(name: &str, default: i64) -> i64 {
    ProcessEnvironment::new().get_int(name, default)
}

/// Returns environment variable `name` as a boolean, or `default` if unset
/// or not a recognised boolean spelling.
#[must_use]
pub fn env_bool(name: &str, default: bool) -> bool {
    ProcessEnvironment::new().get_bool(name, default)
}
