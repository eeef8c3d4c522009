//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the resolver and the outside world.
//! Each port is a trait that can be implemented by adapters in the
//! infrastructure layer.

mod clock;
mod environment;
mod file_system;
mod random;

pub use clock::Clock;
pub use environment::EnvironmentSource;
pub use file_system::{FileSystem, FileSystemError};
pub use random::{RandomSource, RandomSourceError};
