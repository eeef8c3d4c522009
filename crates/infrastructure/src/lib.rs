//! Stencil Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, the settings loader and the
//! process-wide [`replace_env_vars`] entry point.

pub mod adapters;
pub mod defaults;
pub mod persistence;
pub mod settings;

pub use adapters::{OsRandom, ProcessEnvironment, SeededRandom, StaticEnvironment, SystemClock};
pub use defaults::{default_resolver, env, env_bool, env_int, replace_env_vars, system_config};
pub use persistence::{PRIVATE_FILE_MODE, TokioFileSystem};
pub use settings::{ENV_PREFIX, SettingsError, load_settings, load_settings_with_env, system_resolver};
