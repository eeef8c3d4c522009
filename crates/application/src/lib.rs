//! Stencil Application - Placeholder resolver, ports and use cases
//!
//! This crate holds the resolver that rewrites `{{name(args)}}` function
//! calls and `${NAME}` / `{NAME}` environment references, together with
//! the ports it reads time, randomness and environment values through.
//! Adapters for those ports live in `stencil-infrastructure`.

pub mod error;
pub mod ports;
pub mod resolver;
pub mod settings;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use resolver::{
    BuiltinFunction, FunctionRegistry, PlaceholderResolver, ResolutionResult, ResolverConfig,
};
pub use settings::ResolverSettings;
