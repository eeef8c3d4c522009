//! Process environment adapter

use stencil_application::ports::EnvironmentSource;

/// Reads variables from the current process environment.
///
/// Values that are not valid Unicode are converted lossily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    /// Creates a new process environment source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EnvironmentSource for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        // Such names can never be set.
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}
