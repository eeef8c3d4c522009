//! Placeholder resolver
//!
//! Rewrites `{{name(args)}}` function calls and `${NAME}` / `{NAME}`
//! environment references in arbitrary text.

pub mod builtins;
pub mod config;
pub mod engine;
pub mod parser;
pub mod registry;

pub use builtins::{BuiltinFunction, BuiltinInfo, FunctionError};
pub use config::ResolverConfig;
pub use engine::{
    PlaceholderResolver, ResolutionResult, replace_env_references, replace_function_calls,
};
pub use parser::{has_placeholders, scan_env_references, scan_function_calls, scan_placeholders};
pub use registry::FunctionRegistry;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod test_support {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU8, Ordering};

    use chrono::{DateTime, TimeZone, Utc};

    use super::ResolverConfig;
    use crate::ports::{Clock, RandomSource, RandomSourceError};

    /// Clock frozen at 2024-01-26T15:04:05Z.
    pub struct FixedClock(pub DateTime<Utc>);

    impl Default for FixedClock {
        fn default() -> Self {
            Self(Utc.with_ymd_and_hms(2024, 1, 26, 15, 4, 5).unwrap())
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    /// Emits 0, 1, 2, ... wrapping at 255.
    #[derive(Default)]
    pub struct SequenceRandom(AtomicU8);

    impl RandomSource for SequenceRandom {
        fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError> {
            for byte in dest {
                *byte = self.0.fetch_add(1, Ordering::Relaxed);
            }
            Ok(())
        }
    }

    pub struct ZeroRandom;

    impl RandomSource for ZeroRandom {
        fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomSourceError> {
            dest.fill(0);
            Ok(())
        }
    }

    pub struct FailingRandom;

    impl RandomSource for FailingRandom {
        fn fill_bytes(&self, _dest: &mut [u8]) -> Result<(), RandomSourceError> {
            Err(RandomSourceError::Unavailable("entropy pool closed".to_string()))
        }
    }

    pub fn fixed_config(random: Arc<dyn RandomSource>) -> ResolverConfig {
        ResolverConfig::new(
            Arc::new(FixedClock::default()),
            random,
            Arc::new(HashMap::<String, String>::new()),
        )
    }

    pub fn test_config() -> ResolverConfig {
        fixed_config(Arc::new(SequenceRandom::default()))
    }

    pub fn config_with_env(vars: &[(&str, &str)]) -> ResolverConfig {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect();
        ResolverConfig::new(
            Arc::new(FixedClock::default()),
            Arc::new(SequenceRandom::default()),
            Arc::new(env),
        )
    }
}
