//! System clock adapter

use chrono::{DateTime, FixedOffset, Local, Utc};
use stencil_application::ports::Clock;

/// Clock backed by the host's wall-clock time.
///
/// Rendered dates use UTC unless the clock is built with
/// [`SystemClock::local`], which uses the host's local offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    local: bool,
}

impl SystemClock {
    /// Creates a clock that renders dates in UTC.
    #[must_use]
    pub const fn new() -> Self {
        Self { local: false }
    }

    /// Creates a clock that renders dates in the host's local offset.
    #[must_use]
    pub const fn local() -> Self {
        Self { local: true }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn zoned_now(&self) -> DateTime<FixedOffset> {
        if self.local {
            Local::now().fixed_offset()
        } else {
            Utc::now().fixed_offset()
        }
    }
}
