//! Sensor families and their calibrated/uncalibrated subtypes.
//!
//! Subtypes map one-to-one onto the platform sensor type codes, so a
//! driver can look them up from the raw event.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Family of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorKind {
    /// Linear acceleration including gravity.
    Accelerometer,
    /// Device orientation.
    Attitude,
    /// Gravity vector.
    Gravity,
    /// Angular speed.
    Gyroscope,
    /// Magnetic flux density.
    Magnetometer,
}

impl SensorKind {
    /// Returns a human-readable name for the sensor kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Accelerometer => "accelerometer",
            Self::Attitude => "attitude",
            Self::Gravity => "gravity",
            Self::Gyroscope => "gyroscope",
            Self::Magnetometer => "magnetometer",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accelerometer subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AccelerometerSensorType {
    /// Calibrated accelerometer, bias already removed.
    Accelerometer,
    /// Raw accelerometer reporting a bias estimate alongside the reading.
    #[default]
    AccelerometerUncalibrated,
}

impl AccelerometerSensorType {
    /// Looks up a subtype from its platform sensor type code.
    #[must_use]
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Accelerometer),
            35 => Some(Self::AccelerometerUncalibrated),
            _ => None,
        }
    }

    /// Returns the platform sensor type code.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Accelerometer => 1,
            Self::AccelerometerUncalibrated => 35,
        }
    }

    /// Whether readings of this subtype carry a bias estimate.
    #[must_use]
    pub const fn is_uncalibrated(self) -> bool {
        matches!(self, Self::AccelerometerUncalibrated)
    }
}

/// Gyroscope subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GyroscopeSensorType {
    /// Calibrated gyroscope, drift already compensated.
    Gyroscope,
    /// Raw gyroscope reporting a drift estimate alongside the reading.
    #[default]
    GyroscopeUncalibrated,
}

impl GyroscopeSensorType {
    /// Looks up a subtype from its platform sensor type code.
    #[must_use]
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            4 => Some(Self::Gyroscope),
            16 => Some(Self::GyroscopeUncalibrated),
            _ => None,
        }
    }

    /// Returns the platform sensor type code.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Gyroscope => 4,
            Self::GyroscopeUncalibrated => 16,
        }
    }

    /// Whether readings of this subtype carry a bias estimate.
    #[must_use]
    pub const fn is_uncalibrated(self) -> bool {
        matches!(self, Self::GyroscopeUncalibrated)
    }
}

/// Magnetometer subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MagnetometerSensorType {
    /// Calibrated magnetometer, hard iron already removed.
    Magnetometer,
    /// Raw magnetometer reporting a hard-iron estimate alongside the reading.
    #[default]
    MagnetometerUncalibrated,
}

impl MagnetometerSensorType {
    /// Looks up a subtype from its platform sensor type code.
    #[must_use]
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            2 => Some(Self::Magnetometer),
            14 => Some(Self::MagnetometerUncalibrated),
            _ => None,
        }
    }

    /// Returns the platform sensor type code.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Magnetometer => 2,
            Self::MagnetometerUncalibrated => 14,
        }
    }

    /// Whether readings of this subtype carry a hard-iron estimate.
    #[must_use]
    pub const fn is_uncalibrated(self) -> bool {
        matches!(self, Self::MagnetometerUncalibrated)
    }
}

/// Attitude (rotation vector) subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttitudeSensorType {
    /// Absolute attitude fused from accelerometer, gyroscope and magnetometer.
    #[default]
    AbsoluteAttitude,
    /// Attitude relative to an arbitrary heading (no magnetometer).
    RelativeAttitude,
    /// Absolute attitude fused from accelerometer and magnetometer only.
    GeomagneticAbsoluteAttitude,
}

impl AttitudeSensorType {
    /// Looks up a subtype from its platform sensor type code.
    #[must_use]
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            11 => Some(Self::AbsoluteAttitude),
            15 => Some(Self::RelativeAttitude),
            20 => Some(Self::GeomagneticAbsoluteAttitude),
            _ => None,
        }
    }

    /// Returns the platform sensor type code.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::AbsoluteAttitude => 11,
            Self::RelativeAttitude => 15,
            Self::GeomagneticAbsoluteAttitude => 20,
        }
    }

    /// Attitude sensors never report a separate bias.
    #[must_use]
    pub const fn is_uncalibrated(self) -> bool {
        false
    }

    /// Whether the heading is referenced to magnetic north.
    #[must_use]
    pub const fn is_absolute(self) -> bool {
        !matches!(self, Self::RelativeAttitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accelerometer_lookup() {
        for t in [
            AccelerometerSensorType::Accelerometer,
            AccelerometerSensorType::AccelerometerUncalibrated,
        ] {
            assert_eq!(AccelerometerSensorType::from_value(t.value()), Some(t));
        }
        assert_eq!(AccelerometerSensorType::from_value(4), None);
        assert!(AccelerometerSensorType::default().is_uncalibrated());
    }

    #[test]
    fn gyroscope_lookup() {
        for t in [
            GyroscopeSensorType::Gyroscope,
            GyroscopeSensorType::GyroscopeUncalibrated,
        ] {
            assert_eq!(GyroscopeSensorType::from_value(t.value()), Some(t));
        }
        assert_eq!(GyroscopeSensorType::from_value(1), None);
        assert!(!GyroscopeSensorType::Gyroscope.is_uncalibrated());
    }

    #[test]
    fn magnetometer_lookup() {
        for t in [
            MagnetometerSensorType::Magnetometer,
            MagnetometerSensorType::MagnetometerUncalibrated,
        ] {
            assert_eq!(MagnetometerSensorType::from_value(t.value()), Some(t));
        }
        assert_eq!(MagnetometerSensorType::from_value(0), None);
    }

    #[test]
    fn attitude_lookup() {
        for t in [
            AttitudeSensorType::AbsoluteAttitude,
            AttitudeSensorType::RelativeAttitude,
            AttitudeSensorType::GeomagneticAbsoluteAttitude,
        ] {
            assert_eq!(AttitudeSensorType::from_value(t.value()), Some(t));
            assert!(!t.is_uncalibrated());
        }
        assert!(!AttitudeSensorType::RelativeAttitude.is_absolute());
        assert!(AttitudeSensorType::GeomagneticAbsoluteAttitude.is_absolute());
    }

    #[test]
    fn kind_names() {
        assert_eq!(SensorKind::Gyroscope.name(), "gyroscope");
        assert_eq!(SensorKind::Magnetometer.to_string(), "magnetometer");
    }
}
