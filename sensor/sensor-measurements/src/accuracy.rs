//! Driver-reported accuracy status.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Accuracy status reported by the sensor driver along with a sample.
///
/// Carried through copies and conversions unchanged; it is metadata only.
///
/// # Example
///
/// ```
/// use sensor_measurements::SensorAccuracy;
///
/// assert_eq!(SensorAccuracy::from_value(3), Some(SensorAccuracy::High));
/// assert_eq!(SensorAccuracy::from_value(42), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorAccuracy {
    /// Values cannot be trusted (calibration needed or no contact).
    Unreliable,
    /// Low accuracy, calibration with the environment is needed.
    Low,
    /// Average accuracy.
    Medium,
    /// Maximum accuracy.
    High,
}

impl SensorAccuracy {
    /// All accuracy levels, ordered by their platform status code.
    pub const ALL: [Self; 4] = [Self::Unreliable, Self::Low, Self::Medium, Self::High];

    /// Looks up an accuracy level from its platform status code.
    #[must_use]
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Unreliable),
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    /// Returns the platform status code of this accuracy level.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Unreliable => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}
