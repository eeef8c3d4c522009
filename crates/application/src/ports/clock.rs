//! Clock port for time-related operations

use chrono::{DateTime, FixedOffset, Utc};

/// Port for getting the current time.
///
/// This abstraction allows testing time-dependent generators by providing
/// a fixed implementation.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current time in the offset used for rendered dates.
    ///
    /// Defaults to UTC.
    fn zoned_now(&self) -> DateTime<FixedOffset> {
        self.now().fixed_offset()
    }
}
