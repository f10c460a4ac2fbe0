use std::ops::Add;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::Error;
use crate::MICROS_PER_SECOND;

/// A time value with microsecond resolution
///
/// Depending on context this represents either a point in time (seconds since
/// some epoch) or a duration. Ordering is lexicographic: seconds first, then
/// sub-second microseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue {
    /// Whole seconds
    secs: u64,
    /// Sub-second microseconds, always less than `MICROS_PER_SECOND`
    micros: u32,
}

impl TimeValue {
    /// The zero value
    pub const ZERO: Self = Self { secs: 0, micros: 0 };

    /// Construct a `TimeValue` from whole seconds and sub-second microseconds
    ///
    /// `micros` must be less than `MICROS_PER_SECOND`.
    #[must_use]
    pub fn new(secs: u64, micros: u32) -> Self {
        debug_assert!(u64::from(micros) < MICROS_PER_SECOND);
        Self { secs, micros }
    }

    /// Construct a `TimeValue` from a flattened microsecond count
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_micros(micros: u64) -> Self {
        Self {
            secs: micros / MICROS_PER_SECOND,
            micros: (micros % MICROS_PER_SECOND) as u32,
        }
    }

    /// Convert a wall clock instant, truncating to whole-second resolution
    ///
    /// **Warning:** Sub-second precision is discarded on this path. Instants
    /// before the Unix epoch are rejected.
    pub fn from_system_time(time: SystemTime) -> Result<Self, Error> {
        let since_epoch = time
            .duration_since(UNIX_EPOCH)
            .map_err(|_| Error::PreEpochTime)?;
        Ok(Self {
            secs: since_epoch.as_secs(),
            micros: 0,
        })
    }

    /// Get the whole-second part
    #[must_use]
    pub fn secs(&self) -> u64 {
        self.secs
    }

    /// Get the sub-second microsecond part
    #[must_use]
    pub fn micros(&self) -> u32 {
        self.micros
    }

    /// Flatten into a total microsecond count
    #[must_use]
    pub fn as_micros(&self) -> u64 {
        self.secs * MICROS_PER_SECOND + u64::from(self.micros)
    }
}

impl Add for TimeValue {
    type Output = Self;

    /// Sum both fields, carrying microsecond overflow into the seconds field
    #[allow(clippy::cast_possible_truncation)]
    fn add(self, rhs: Self) -> Self {
        let mut secs = self.secs + rhs.secs;
        let mut micros = u64::from(self.micros) + u64::from(rhs.micros);
        if micros >= MICROS_PER_SECOND {
            secs += 1;
            micros -= MICROS_PER_SECOND;
        }
        Self {
            secs,
            micros: micros as u32,
        }
    }
}

impl From<Duration> for TimeValue {
    /// Sub-microsecond precision is truncated
    fn from(duration: Duration) -> Self {
        Self {
            secs: duration.as_secs(),
            micros: duration.subsec_micros(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_zero_is_identity() {
        let value = TimeValue::new(42, 123_456);
        assert_eq!(value + TimeValue::ZERO, value);
        assert_eq!(TimeValue::ZERO + value, value);
    }

    #[test]
    fn test_add_carries_microsecond_overflow() {
        let sum = TimeValue::new(1, 700_000) + TimeValue::new(2, 600_000);
        assert_eq!(sum, TimeValue::new(4, 300_000));
        assert!(u64::from(sum.micros()) < MICROS_PER_SECOND);
    }

    #[test]
    fn test_add_preserves_total_microseconds() {
        let a = TimeValue::new(3, 999_999);
        let b = TimeValue::new(0, 999_999);
        assert_eq!((a + b).as_micros(), a.as_micros() + b.as_micros());
    }

    #[test]
    fn test_ordering_matches_flattened_count() {
        let values = [
            TimeValue::ZERO,
            TimeValue::new(0, 999_999),
            TimeValue::new(1, 0),
            TimeValue::new(1, 1),
            TimeValue::new(2, 500_000),
        ];
        for left in &values {
            for right in &values {
                assert_eq!(
                    left.cmp(right),
                    left.as_micros().cmp(&right.as_micros()),
                    "ordering mismatch between {left:?} and {right:?}"
                );
            }
        }
    }

    #[test]
    fn test_from_micros_round_trip() {
        for count in [0, 1, 999_999, 1_000_000, 1_000_001, 5_000_000, 86_400_123_456] {
            assert_eq!(TimeValue::from_micros(count).as_micros(), count);
        }
    }

    #[test]
    fn test_from_micros_decomposition() {
        let value = TimeValue::from_micros(5_000_123);
        assert_eq!(value.secs(), 5);
        assert_eq!(value.micros(), 123);
    }

    #[test]
    fn test_from_duration_truncates_nanoseconds() {
        let value = TimeValue::from(Duration::new(7, 123_456_789));
        assert_eq!(value, TimeValue::new(7, 123_456));
    }

    #[test]
    fn test_from_system_time_truncates_to_seconds() {
        let instant = UNIX_EPOCH + Duration::new(1000, 987_654_321);
        let value = TimeValue::from_system_time(instant).unwrap();
        assert_eq!(value, TimeValue::new(1000, 0));
    }

    #[test]
    fn test_from_system_time_rejects_pre_epoch() {
        let instant = UNIX_EPOCH - Duration::from_secs(1);
        assert!(TimeValue::from_system_time(instant).is_err());
    }
}
