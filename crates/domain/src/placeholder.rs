//! Placeholder value types
//!
//! A placeholder is a span of source text that the resolver may rewrite:
//! either a `{{name(args)}}` function call or a `${NAME}` / `{NAME}`
//! environment reference.

use std::fmt;
use std::ops::Range;

/// How an environment reference was written in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvSyntax {
    /// `${NAME}`
    Dollar,
    /// `{NAME}`
    Brace,
}

/// The recognised shape of a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// `{{name(args)}}`
    FunctionCall {
        /// Function name as written (case preserved).
        name: String,
        /// Argument text, already trimmed.
        args: String,
    },
    /// `${NAME}` or `{NAME}`
    EnvReference {
        /// Variable name.
        name: String,
        /// Which delimiter form was used.
        syntax: EnvSyntax,
    },
}

/// A placeholder located in a source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// What the placeholder asks for.
    pub kind: PlaceholderKind,

    /// Byte range in the source string covering the whole token.
    pub span: Range<usize>,
}

impl Placeholder {
    /// Creates a function-call placeholder.
    #[must_use]
    pub fn function_call(
        name: impl Into<String>,
        args: impl Into<String>,
        span: Range<usize>,
    ) -> Self {
        Self {
            kind: PlaceholderKind::FunctionCall {
                name: name.into(),
                args: args.into(),
            },
            span,
        }
    }

    /// Creates an environment-reference placeholder.
    #[must_use]
    pub fn env_reference(name: impl Into<String>, syntax: EnvSyntax, span: Range<usize>) -> Self {
        Self {
            kind: PlaceholderKind::EnvReference {
                name: name.into(),
                syntax,
            },
            span,
        }
    }

    /// Returns the function or variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.kind {
            PlaceholderKind::FunctionCall { name, .. } | PlaceholderKind::EnvReference { name, .. } => {
                name
            }
        }
    }

    /// Returns true for `{{name(args)}}` placeholders.
    #[must_use]
    pub const fn is_function_call(&self) -> bool {
        matches!(self.kind, PlaceholderKind::FunctionCall { .. })
    }

    /// Returns the exact source text this placeholder was parsed from.
    ///
    /// Returns an empty string if the span does not belong to `source`.
    #[must_use]
    pub fn source_text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.span.clone()).unwrap_or_default()
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PlaceholderKind::FunctionCall { name, args } => write!(f, "{{{{{name}({args})}}}}"),
            PlaceholderKind::EnvReference {
                name,
                syntax: EnvSyntax::Dollar,
            } => write!(f, "${{{name}}}"),
            PlaceholderKind::EnvReference {
                name,
                syntax: EnvSyntax::Brace,
            } => write!(f, "{{{name}}}"),
        }
    }
}

/// Outcome of a single substitution attempt.
///
/// Every match is folded into the output string through this type, so
/// "not found" and "failed" both surface as [`Substitution::Unresolved`]
/// carrying the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// The placeholder produced a replacement value.
    Resolved(String),
    /// The placeholder is kept verbatim.
    Unresolved(String),
}

impl Substitution {
    /// Returns the text that goes into the output.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Resolved(text) | Self::Unresolved(text) => text,
        }
    }

    /// Consumes the substitution and returns its output text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Resolved(text) | Self::Unresolved(text) => text,
        }
    }

    /// Returns true when a replacement value was produced.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// A placeholder together with the value it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlaceholder {
    /// The placeholder as found in the pass input.
    pub placeholder: Placeholder,
    /// The replacement text.
    pub value: String,
}
