//! Placeholder resolution engine
//!
//! Resolution runs two passes over the input, strictly in sequence:
//!
//! 1. `{{name(args)}}` calls are replaced with builtin output.
//! 2. `${NAME}` / `{NAME}` references in the result are replaced with
//!    environment values.
//!
//! Anything that cannot be resolved is copied through unchanged.

use stencil_domain::{Placeholder, PlaceholderKind, ResolvedPlaceholder, Substitution};

use super::config::ResolverConfig;
use super::parser::{scan_env_references, scan_function_calls, scan_placeholders};

/// Result of resolving a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// The resolved string.
    pub resolved: String,

    /// Placeholders that were replaced, in the order they were resolved.
    pub resolved_placeholders: Vec<ResolvedPlaceholder>,

    /// Placeholders that were left literal.
    ///
    /// Spans of function calls refer to the input; spans of environment
    /// references refer to the output of the function pass.
    pub unresolved: Vec<Placeholder>,

    /// Whether every placeholder was resolved.
    pub is_complete: bool,
}

impl ResolutionResult {
    /// Creates a result for input with no placeholders.
    #[must_use]
    pub fn no_placeholders(input: &str) -> Self {
        Self {
            resolved: input.to_string(),
            resolved_placeholders: Vec::new(),
            unresolved: Vec::new(),
            is_complete: true,
        }
    }

    /// Returns the count of resolved placeholders.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.resolved_placeholders.len()
    }

    /// Returns the count of unresolved placeholders.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }
}

/// Output of a single pass.
struct PassOutput {
    text: String,
    resolved: Vec<ResolvedPlaceholder>,
    unresolved: Vec<Placeholder>,
}

/// Splices substitutions into `input` at the placeholder spans.
fn fold_pass(
    input: &str,
    placeholders: Vec<Placeholder>,
    mut substitute: impl FnMut(&Placeholder) -> Substitution,
) -> PassOutput {
    let mut text = String::with_capacity(input.len());
    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();
    let mut last_end = 0;

    for placeholder in placeholders {
        text.push_str(&input[last_end..placeholder.span.start]);
        last_end = placeholder.span.end;

        match substitute(&placeholder) {
            Substitution::Resolved(value) => {
                text.push_str(&value);
                resolved.push(ResolvedPlaceholder { placeholder, value });
            }
            Substitution::Unresolved(original) => {
                tracing::debug!(placeholder = %original, "placeholder left unresolved");
                text.push_str(&original);
                unresolved.push(placeholder);
            }
        }
    }

    text.push_str(&input[last_end..]);

    PassOutput {
        text,
        resolved,
        unresolved,
    }
}

fn substitute_function(
    input: &str,
    placeholder: &Placeholder,
    config: &ResolverConfig,
) -> Substitution {
    let original = || Substitution::Unresolved(placeholder.source_text(input).to_string());

    let PlaceholderKind::FunctionCall { name, args } = &placeholder.kind else {
        return original();
    };

    let Some(function) = config.registry().lookup(name) else {
        return original();
    };

    match function.invoke(args, config) {
        Ok(value) => Substitution::Resolved(value),
        Err(error) => {
            tracing::debug!(function = %name, %error, "function call rejected");
            original()
        }
    }
}

fn substitute_env(input: &str, placeholder: &Placeholder, config: &ResolverConfig) -> Substitution {
    config.environment().var(placeholder.name()).map_or_else(
        || Substitution::Unresolved(placeholder.source_text(input).to_string()),
        Substitution::Resolved,
    )
}

fn function_pass(input: &str, config: &ResolverConfig) -> PassOutput {
    fold_pass(input, scan_function_calls(input), |placeholder| {
        substitute_function(input, placeholder, config)
    })
}

fn env_pass(input: &str, config: &ResolverConfig) -> PassOutput {
    fold_pass(input, scan_env_references(input), |placeholder| {
        substitute_env(input, placeholder, config)
    })
}

/// Replaces every `{{name(args)}}` call that the registry can resolve.
#[must_use]
pub fn replace_function_calls(input: &str, config: &ResolverConfig) -> String {
    function_pass(input, config).text
}

/// Replaces every `${NAME}` / `{NAME}` reference whose variable is set.
///
/// This pass runs regardless of the configuration's environment-pass flag.
#[must_use]
pub fn replace_env_references(input: &str, config: &ResolverConfig) -> String {
    env_pass(input, config).text
}

/// Resolves placeholders according to a [`ResolverConfig`].
///
/// The resolver holds no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct PlaceholderResolver {
    config: ResolverConfig,
}

impl PlaceholderResolver {
    /// Creates a resolver with the given configuration.
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves all placeholders in `input`.
    ///
    /// Never fails: placeholders that cannot be resolved stay literal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::collections::HashMap;
    /// # use std::sync::Arc;
    /// # use chrono::{DateTime, Utc};
    /// # use stencil_application::ports::{Clock, RandomSource, RandomSourceError};
    /// # use stencil_application::resolver::{PlaceholderResolver, ResolverConfig};
    /// # struct Epoch;
    /// # impl Clock for Epoch { fn now(&self) -> DateTime<Utc> { DateTime::UNIX_EPOCH } }
    /// # struct Zeros;
    /// # impl RandomSource for Zeros {
    /// #     fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError> {
    /// #         dest.fill(0);
    /// #         Ok(())
    /// #     }
    /// # }
    /// let env = HashMap::from([("USER".to_string(), "ada".to_string())]);
    /// let config = ResolverConfig::new(Arc::new(Epoch), Arc::new(Zeros), Arc::new(env));
    /// let resolver = PlaceholderResolver::new(config);
    ///
    /// assert_eq!(resolver.resolve("${USER}@{{timestamp()}}"), "ada@0");
    /// assert_eq!(resolver.resolve("${MISSING}"), "${MISSING}");
    /// ```
    #[must_use]
    pub fn resolve(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }

        let functions_replaced = replace_function_calls(input, &self.config);
        if self.config.environment_pass() {
            replace_env_references(&functions_replaced, &self.config)
        } else {
            functions_replaced
        }
    }

    /// Resolves all placeholders in `input` and reports what happened.
    #[must_use]
    pub fn resolve_detailed(&self, input: &str) -> ResolutionResult {
        if input.is_empty() {
            return ResolutionResult::no_placeholders(input);
        }

        let functions = function_pass(input, &self.config);
        let PassOutput {
            text,
            mut resolved,
            mut unresolved,
        } = functions;

        let resolved_text = if self.config.environment_pass() {
            let environment = env_pass(&text, &self.config);
            resolved.extend(environment.resolved);
            unresolved.extend(environment.unresolved);
            environment.text
        } else {
            text
        };

        let is_complete = unresolved.is_empty();
        ResolutionResult {
            resolved: resolved_text,
            resolved_placeholders: resolved,
            unresolved,
            is_complete,
        }
    }

    /// Runs only the function pass.
    #[must_use]
    pub fn replace_functions(&self, input: &str) -> String {
        replace_function_calls(input, &self.config)
    }

    /// Runs only the environment pass.
    #[must_use]
    pub fn replace_env_references(&self, input: &str) -> String {
        replace_env_references(input, &self.config)
    }

    /// Returns the placeholders in `input` this resolver would leave literal.
    ///
    /// Function arguments are validated but no values are generated.
    /// Useful for checking resolved output for leftovers.
    #[must_use]
    pub fn find_unresolved(&self, input: &str) -> Vec<Placeholder> {
        scan_placeholders(input)
            .into_iter()
            .filter(|placeholder| match &placeholder.kind {
                PlaceholderKind::FunctionCall { name, args } => {
                    self.config.registry().lookup(name).is_none_or(|function| {
                        function.validate_args(args, &self.config).is_err()
                    })
                }
                PlaceholderKind::EnvReference { name, .. } => {
                    !self.config.environment_pass() || !self.config.environment().is_set(name)
                }
            })
            .collect()
    }
}
