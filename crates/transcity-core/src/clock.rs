//! Source of "now" for snapshot derivation.
//!
//! A snapshot samples the clock exactly once and threads that instant
//! through every readiness figure, so business and estate timers in one
//! response never drift against each other.

use chrono::{DateTime, Utc};

/// Where the current instant comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// The system wall clock.
    #[default]
    System,
    /// A frozen instant, for tests and fixtures.
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Sample the current instant.
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(at) => *at,
        }
    }
}
