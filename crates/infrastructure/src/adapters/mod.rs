//! Adapters for the application ports.

mod os_random;
mod process_environment;
mod seeded_random;
mod static_environment;
mod system_clock;

pub use os_random::OsRandom;
pub use process_environment::ProcessEnvironment;
pub use seeded_random::SeededRandom;
pub use static_environment::StaticEnvironment;
pub use system_clock::SystemClock;
