//! Function registry
//!
//! Maps lowercase function names to builtins. A registry is built once and
//! never mutated afterwards; narrowing it produces a new registry.

use std::collections::HashMap;

use super::builtins::BuiltinFunction;
use crate::error::{ApplicationError, ApplicationResult};

/// Lookup table from function name to builtin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRegistry {
    functions: HashMap<String, BuiltinFunction>,
}

impl FunctionRegistry {
    /// Creates a registry with every builtin enabled.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            functions: BuiltinFunction::all()
                .iter()
                .map(|function| (function.name().to_string(), *function))
                .collect(),
        }
    }

    /// Creates a registry that resolves nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Returns a copy of this registry without `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::UnknownFunction`] if `name` is not a builtin.
    pub fn without(&self, name: &str) -> ApplicationResult<Self> {
        let function = BuiltinFunction::from_name(name)
            .ok_or_else(|| ApplicationError::UnknownFunction(name.to_string()))?;

        let mut functions = self.functions.clone();
        functions.remove(function.name());
        Ok(Self { functions })
    }

    /// Looks up a function by name, ignoring ASCII case.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<BuiltinFunction> {
        self.functions.get(&name.to_ascii_lowercase()).copied()
    }

    /// Returns true if `name` resolves to an enabled function.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Returns the enabled function names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of enabled functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true if no function is enabled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
