//! Gyroscope measurements.

use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurement::{hash_f32, hash_opt_f32, impl_sensor_measurement};
use crate::{
    GyroscopeSensorType, SensorAccuracy, SensorCoordinateSystem, SensorKind, Timestamp, Triad,
    TriadUnit,
};

/// A single gyroscope sample.
///
/// # Units
///
/// - Angular speed and bias: radians per second (rad/s)
///
/// # Example
///
/// ```
/// use sensor_measurements::{GyroscopeMeasurement, GyroscopeSensorType};
///
/// let m = GyroscopeMeasurement::new(0.0, 0.0, 0.1)
///     .with_sensor_type(GyroscopeSensorType::Gyroscope);
///
/// assert!(!m.has_bias());
/// assert!((m.to_norm() - 0.1).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GyroscopeMeasurement {
    /// Angular speed around the x axis.
    pub wx: f32,
    /// Angular speed around the y axis.
    pub wy: f32,
    /// Angular speed around the z axis.
    pub wz: f32,
    /// Estimated drift around the x axis.
    pub bx: Option<f32>,
    /// Estimated drift around the y axis.
    pub by: Option<f32>,
    /// Estimated drift around the z axis.
    pub bz: Option<f32>,
    /// Time the sample was taken.
    pub timestamp: Timestamp,
    /// Driver-reported accuracy.
    pub accuracy: Option<SensorAccuracy>,
    /// Calibrated or uncalibrated subtype.
    pub sensor_type: GyroscopeSensorType,
    /// Frame the axes are expressed in.
    pub coordinate_system: SensorCoordinateSystem,
}

impl GyroscopeMeasurement {
    /// Creates a measurement with the given angular speeds and default metadata.
    #[must_use]
    pub fn new(wx: f32, wy: f32, wz: f32) -> Self {
        Self {
            wx,
            wy,
            wz,
            ..Self::default()
        }
    }

    /// Sets the drift estimate.
    #[must_use]
    pub fn with_bias(mut self, bx: f32, by: f32, bz: f32) -> Self {
        self.bx = Some(bx);
        self.by = Some(by);
        self.bz = Some(bz);
        self
    }

    /// Sets the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets the driver-reported accuracy.
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: SensorAccuracy) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    /// Sets the subtype.
    #[must_use]
    pub fn with_sensor_type(mut self, sensor_type: GyroscopeSensorType) -> Self {
        self.sensor_type = sensor_type;
        self
    }

    /// Sets the frame the axes are expressed in.
    #[must_use]
    pub fn with_coordinate_system(mut self, coordinate_system: SensorCoordinateSystem) -> Self {
        self.coordinate_system = coordinate_system;
        self
    }

    /// Overwrites every field with the values of `other`.
    pub fn copy_from(&mut self, other: &Self) {
        self.clone_from(other);
    }

    /// Whether all three drift components are present.
    #[must_use]
    pub const fn has_bias(&self) -> bool {
        self.bx.is_some() && self.by.is_some() && self.bz.is_some()
    }

    /// Returns the angular speeds as an array.
    #[must_use]
    pub const fn axes(&self) -> [f32; 3] {
        [self.wx, self.wy, self.wz]
    }

    /// Returns the angular speed in rad/s, with any drift added to each axis.
    #[must_use]
    pub fn to_triad(&self) -> Triad {
        Triad::from_axes(
            self.axes(),
            [self.bx, self.by, self.bz],
            1.0,
            TriadUnit::RadiansPerSecond,
        )
    }

    /// Returns the norm of [`Self::to_triad`] in rad/s.
    #[must_use]
    pub fn to_norm(&self) -> f64 {
        self.to_triad().norm()
    }
}

impl Hash for GyroscopeMeasurement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.wx, state);
        hash_f32(self.wy, state);
        hash_f32(self.wz, state);
        hash_opt_f32(self.bx, state);
        hash_opt_f32(self.by, state);
        hash_opt_f32(self.bz, state);
        self.timestamp.hash(state);
        self.accuracy.hash(state);
        self.sensor_type.hash(state);
        self.coordinate_system.hash(state);
    }
}

impl_sensor_measurement!(GyroscopeMeasurement, SensorKind::Gyroscope);
