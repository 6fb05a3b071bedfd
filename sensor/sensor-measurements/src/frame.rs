//! Local-level coordinate systems for sensor data.
//!
//! Every measurement declares which right-handed local frame its numeric
//! fields are expressed in, so that `sensor-frames` can validate a
//! conversion before applying it.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference frame a measurement is expressed in.
///
/// # Example
///
/// ```
/// use sensor_measurements::SensorCoordinateSystem;
///
/// let frame = SensorCoordinateSystem::default();
/// assert_eq!(frame, SensorCoordinateSystem::Enu);
/// assert_eq!(frame.opposite(), SensorCoordinateSystem::Ned);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorCoordinateSystem {
    /// East-North-Up. Used by mobile platform sensor APIs.
    #[default]
    Enu,
    /// North-East-Down. Used by aerospace navigation.
    Ned,
}

impl SensorCoordinateSystem {
    /// Returns the other frame.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Enu => Self::Ned,
            Self::Ned => Self::Enu,
        }
    }

    /// Returns the name of the frame for display purposes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Enu => "ENU",
            Self::Ned => "NED",
        }
    }
}

impl fmt::Display for SensorCoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_enu() {
        assert_eq!(SensorCoordinateSystem::default(), SensorCoordinateSystem::Enu);
    }

    #[test]
    fn opposite_is_involution() {
        for frame in [SensorCoordinateSystem::Enu, SensorCoordinateSystem::Ned] {
            assert_ne!(frame.opposite(), frame);
            assert_eq!(frame.opposite().opposite(), frame);
        }
    }

    #[test]
    fn frame_names() {
        assert_eq!(SensorCoordinateSystem::Enu.name(), "ENU");
        assert_eq!(SensorCoordinateSystem::Ned.to_string(), "NED");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn frame_serialization() {
        let json = serde_json::to_string(&SensorCoordinateSystem::Ned).ok();
        assert!(json.is_some());
    }
}
