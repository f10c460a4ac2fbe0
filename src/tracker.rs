use crate::timeval::TimeValue;

/// Tracks elapsed time against a configurable timeout threshold
///
/// The tracker holds a configured timeout and a checkpoint (the last time
/// value it has accepted as current). It never samples the clock itself; the
/// surrounding polling loop supplies every time sample. Samples older than
/// the checkpoint are ignored, so the checkpoint only ever moves forward.
#[derive(Debug, Clone, Default)]
pub struct DeadlineTracker {
    /// Configured timeout duration
    timeout: TimeValue,
    /// The last time value accepted as current
    now: TimeValue,
}

impl DeadlineTracker {
    /// Construct a new `DeadlineTracker` with a zero timeout and a zero checkpoint
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a `DeadlineTracker` with the given timeout
    #[must_use]
    pub fn with_timeout(timeout: TimeValue) -> Self {
        Self {
            timeout,
            now: TimeValue::ZERO,
        }
    }

    /// Construct a `DeadlineTracker` with a timeout given as a flattened microsecond count
    #[must_use]
    pub fn with_timeout_micros(timeout_us: u64) -> Self {
        Self::with_timeout(TimeValue::from_micros(timeout_us))
    }

    /// Construct a `DeadlineTracker` with the given timeout and an explicit starting checkpoint
    #[must_use]
    pub fn with_timeout_and_now(timeout: TimeValue, now: TimeValue) -> Self {
        Self { timeout, now }
    }

    /// Get the current checkpoint
    #[must_use]
    pub fn now(&self) -> TimeValue {
        self.now
    }

    /// Set the current checkpoint
    ///
    /// This is a direct assignment; the anti-regression guard only applies to
    /// the check operations.
    pub fn set_now(&mut self, current_time: TimeValue) {
        self.now = current_time;
    }

    /// Get the configured timeout
    #[must_use]
    pub fn timeout(&self) -> TimeValue {
        self.timeout
    }

    /// Get the configured timeout as a flattened microsecond count
    #[must_use]
    pub fn timeout_micros(&self) -> u64 {
        self.timeout.as_micros()
    }

    /// Set the timeout
    pub fn set_timeout(&mut self, timeout: TimeValue) {
        self.timeout = timeout;
    }

    /// Set the timeout from a flattened microsecond count
    pub fn set_timeout_micros(&mut self, timeout_us: u64) {
        self.timeout = TimeValue::from_micros(timeout_us);
    }

    /// Check the deadline against the configured timeout and advance the checkpoint
    ///
    /// Returns `true` if `current_time` is strictly past the deadline
    /// (checkpoint plus timeout). The checkpoint advances to `current_time`
    /// whether or not the deadline fired. Samples older than the checkpoint
    /// return `false` without mutating anything.
    #[profiling::function]
    pub fn check_and_advance(&mut self, current_time: TimeValue) -> bool {
        self.check_and_advance_with(current_time, self.timeout)
    }

    /// Check the deadline against an explicit timeout and advance the checkpoint
    ///
    /// Same as [`check_and_advance`](Self::check_and_advance), but measured
    /// against `timeout` instead of the configured one.
    #[profiling::function]
    pub fn check_and_advance_with(&mut self, current_time: TimeValue, timeout: TimeValue) -> bool {
        if self.now > current_time {
            log::trace!(
                "Ignoring out-of-order time sample {:?} behind checkpoint {:?}",
                current_time,
                self.now
            );
            return false;
        }

        let deadline = self.now + timeout;
        self.now = current_time;

        let timed_out = self.now > deadline;
        if timed_out {
            log::trace!("Deadline {:?} exceeded at {:?}", deadline, self.now);
        }
        timed_out
    }

    /// Check the deadline and advance the checkpoint only if it fired
    ///
    /// Returns `true` if `current_time` is strictly past the deadline
    /// (checkpoint plus configured timeout), and advances the checkpoint to
    /// `current_time` only in that case. Until the deadline is crossed the
    /// checkpoint stays anchored, so repeated checks keep measuring from the
    /// same point. Samples older than the checkpoint return `false` without
    /// mutating anything.
    #[profiling::function]
    pub fn check_and_advance_on_timeout(&mut self, current_time: TimeValue) -> bool {
        if self.now > current_time {
            log::trace!(
                "Ignoring out-of-order time sample {:?} behind checkpoint {:?}",
                current_time,
                self.now
            );
            return false;
        }

        let deadline = self.now + self.timeout;
        let timed_out = current_time > deadline;
        if timed_out {
            log::trace!("Deadline {:?} exceeded at {:?}", deadline, current_time);
            self.now = current_time;
        }
        timed_out
    }
}
