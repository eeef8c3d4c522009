//! Environment variable lookup port

use std::collections::HashMap;

use stencil_domain::{parse_bool, parse_int};

/// Port for reading environment variables.
///
/// Every call reads the current state of the source; nothing is cached.
pub trait EnvironmentSource: Send + Sync {
    /// Returns the value of `name`, or `None` if it is not set.
    ///
    /// A variable that is set to the empty string returns `Some("")`.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns true if `name` is set, even to an empty value.
    fn is_set(&self, name: &str) -> bool {
        self.var(name).is_some()
    }

    /// Returns the value of `name`, or `default` if it is not set.
    fn get_or(&self, name: &str, default: &str) -> String {
        self.var(name).unwrap_or_else(|| default.to_string())
    }

    /// Returns `name` parsed as an integer, or `default` if unset or invalid.
    fn get_int(&self, name: &str, default: i64) -> i64 {
        self.var(name)
            .and_then(|value| parse_int(&value))
            .unwrap_or(default)
    }

    /// Returns `name` parsed as a boolean, or `default` if unset or invalid.
    fn get_bool(&self, name: &str, default: bool) -> bool {
        self.var(name)
            .and_then(|value| parse_bool(&value))
            .unwrap_or(default)
    }
}

impl<S: std::hash::BuildHasher + Send + Sync> EnvironmentSource for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn env() -> HashMap<String, String> {
        HashMap::from([
            ("EXISTING_VAR".to_string(), "exists".to_string()),
            ("EMPTY_VAR".to_string(), String::new()),
            ("EXISTING_INT_VAR".to_string(), "42".to_string()),
            ("INVALID_INT_VAR".to_string(), "forty-two".to_string()),
            ("EXISTING_BOOL_VAR".to_string(), "true".to_string()),
            ("INVALID_BOOL_VAR".to_string(), "maybe".to_string()),
        ])
    }

    #[test]
    fn test_get_or() {
        let env = env();
        assert_eq!(env.get_or("EXISTING_VAR", "default"), "exists");
        assert_eq!(env.get_or("NON_EXISTING_VAR", "default"), "default");
        assert_eq!(env.get_or("EMPTY_VAR", "default"), "");
    }

    #[test]
    fn test_get_int() {
        let env = env();
        assert_eq!(env.get_int("EXISTING_INT_VAR", 10), 42);
        assert_eq!(env.get_int("NON_EXISTING_INT_VAR", 10), 10);
        assert_eq!(env.get_int("INVALID_INT_VAR", 20), 20);
    }

    #[test]
    fn test_get_bool() {
        let env = env();
        assert!(env.get_bool("EXISTING_BOOL_VAR", false));
        assert!(env.get_bool("NON_EXISTING_BOOL_VAR", true));
        assert!(!env.get_bool("INVALID_BOOL_VAR", false));
    }

    #[test]
    fn test_is_set_includes_empty() {
        let env = env();
        assert!(env.is_set("EMPTY_VAR"));
        assert!(!env.is_set("MISSING"));
    }
}
