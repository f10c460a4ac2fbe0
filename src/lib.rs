#![doc = include_str!("../README.md")]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod error;
mod timeval;
mod tracker;

pub use error::Error;
pub use timeval::TimeValue;
pub use tracker::DeadlineTracker;

/// Number of microseconds in one second
pub const MICROS_PER_SECOND: u64 = 1_000_000;
