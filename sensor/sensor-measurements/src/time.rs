//! Time types for sensor data.
//!
//! Sensor events are stamped with a monotonic clock in nanoseconds. The
//! clock origin is arbitrary (usually system boot), so values are signed
//! and only differences between them carry meaning.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Monotonic clock value in nanoseconds.
///
/// # Example
///
/// ```
/// use sensor_measurements::Timestamp;
///
/// let ts = Timestamp::from_secs_f64(1.5);
/// assert_eq!(ts, Timestamp::from_nanos(1_500_000_000));
/// assert!(Timestamp::default().is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp {
    nanos: i64,
}

impl Timestamp {
    /// Creates a timestamp from nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Creates a timestamp from seconds (floating point).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_secs_f64(secs: f64) -> Self {
        Self {
            nanos: (secs * 1e9).round() as i64,
        }
    }

    /// Returns the timestamp as nanoseconds.
    #[must_use]
    pub const fn as_nanos(self) -> i64 {
        self.nanos
    }

    /// Returns the timestamp as seconds (floating point).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(self) -> f64 {
        self.nanos as f64 / 1e9
    }

    /// Returns the zero timestamp.
    #[must_use]
    pub const fn zero() -> Self {
        Self { nanos: 0 }
    }

    /// Checks if this is the zero timestamp.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.nanos == 0
    }

    /// Returns the duration between two timestamps.
    ///
    /// Always returns a non-negative duration (absolute difference).
    #[must_use]
    pub const fn abs_diff(self, other: Self) -> Duration {
        Duration::from_nanos(self.nanos.abs_diff(other.nanos))
    }
}

impl From<i64> for Timestamp {
    fn from(nanos: i64) -> Self {
        Self::from_nanos(nanos)
    }
}

/// A non-negative span of time with nanosecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Duration {
    nanos: u64,
}

impl Duration {
    /// Creates a duration from nanoseconds.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Creates a duration from microseconds.
    #[must_use]
    pub const fn from_micros(micros: u64) -> Self {
        Self {
            nanos: micros * 1_000,
        }
    }

    /// Creates a duration from milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            nanos: millis * 1_000_000,
        }
    }

    /// Returns the duration as nanoseconds.
    #[must_use]
    pub const fn as_nanos(self) -> u64 {
        self.nanos
    }

    /// Returns the duration as microseconds.
    #[must_use]
    pub const fn as_micros(self) -> u64 {
        self.nanos / 1_000
    }

    /// Returns the duration as milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.nanos / 1_000_000
    }

    /// Returns the duration as seconds (floating point).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(self) -> f64 {
        self.nanos as f64 / 1e9
    }

    /// Returns the zero duration.
    #[must_use]
    pub const fn zero() -> Self {
        Self { nanos: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_from_secs_f64() {
        let ts = Timestamp::from_secs_f64(1.5);
        assert_eq!(ts.as_nanos(), 1_500_000_000);
        assert!((ts.as_secs_f64() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn timestamp_may_be_negative() {
        let ts = Timestamp::from_nanos(-250);
        assert_eq!(ts.as_nanos(), -250);
        assert!(ts < Timestamp::zero());
    }

    #[test]
    fn timestamp_abs_diff() {
        let a = Timestamp::from_nanos(1000);
        let b = Timestamp::from_nanos(-300);

        assert_eq!(a.abs_diff(b), Duration::from_nanos(1300));
        assert_eq!(b.abs_diff(a), Duration::from_nanos(1300));
    }

    #[test]
    fn duration_conversions() {
        let d = Duration::from_millis(1500);
        assert_eq!(d.as_nanos(), 1_500_000_000);
        assert_eq!(d.as_micros(), 1_500_000);
        assert_eq!(d.as_millis(), 1500);
        assert!((d.as_secs_f64() - 1.5).abs() < 1e-9);
        assert_eq!(Duration::from_micros(2), Duration::from_nanos(2000));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn timestamp_serialization() {
        let ts = Timestamp::from_nanos(1_500_000_000);
        let json = serde_json::to_string(&ts).ok();
        assert!(json.is_some());

        let parsed: Result<Timestamp, _> = serde_json::from_str(&json.unwrap_or_default());
        assert_eq!(parsed.unwrap_or_default(), ts);
    }
}
