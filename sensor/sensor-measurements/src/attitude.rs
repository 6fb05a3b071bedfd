//! Attitude (orientation) measurements.

use std::hash::{Hash, Hasher};

use glam::DQuat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurement::{hash_f64, hash_opt_f32, impl_sensor_measurement};
use crate::{AttitudeSensorType, SensorAccuracy, SensorCoordinateSystem, SensorKind, Timestamp};

/// A single attitude sample from a rotation-vector sensor.
///
/// The quaternion rotates body-frame vectors into the local-level frame
/// named by `coordinate_system`.
///
/// # Example
///
/// ```
/// use glam::DQuat;
/// use sensor_measurements::{AttitudeMeasurement, AttitudeSensorType};
///
/// let m = AttitudeMeasurement::new(DQuat::from_rotation_z(0.5))
///     .with_heading_accuracy(0.1)
///     .with_sensor_type(AttitudeSensorType::RelativeAttitude);
///
/// assert!(m.attitude.is_normalized());
/// assert_eq!(m.heading_accuracy, Some(0.1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttitudeMeasurement {
    /// Unit quaternion from body to local-level frame.
    pub attitude: DQuat,
    /// Estimated heading accuracy in radians.
    pub heading_accuracy: Option<f32>,
    /// Time the sample was taken.
    pub timestamp: Timestamp,
    /// Driver-reported accuracy.
    pub accuracy: Option<SensorAccuracy>,
    /// Absolute, relative or geomagnetic subtype.
    pub sensor_type: AttitudeSensorType,
    /// Frame the attitude is expressed in.
    pub coordinate_system: SensorCoordinateSystem,
}

impl AttitudeMeasurement {
    /// Creates a measurement with the given attitude and default metadata.
    #[must_use]
    pub fn new(attitude: DQuat) -> Self {
        Self {
            attitude,
            heading_accuracy: None,
            timestamp: Timestamp::zero(),
            accuracy: None,
            sensor_type: AttitudeSensorType::default(),
            coordinate_system: SensorCoordinateSystem::default(),
        }
    }

    /// Sets the heading accuracy in radians.
    #[must_use]
    pub fn with_heading_accuracy(mut self, heading_accuracy: f32) -> Self {
        self.heading_accuracy = Some(heading_accuracy);
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
    pub fn with_sensor_type(mut self, sensor_type: AttitudeSensorType) -> Self {
        self.sensor_type = sensor_type;
        self
    }

    /// Sets the frame the attitude is expressed in.
    #[must_use]
    pub fn with_coordinate_system(mut self, coordinate_system: SensorCoordinateSystem) -> Self {
        self.coordinate_system = coordinate_system;
        self
    }

    /// Overwrites every field with the values of `other`.
    pub fn copy_from(&mut self, other: &Self) {
        self.clone_from(other);
    }
}

impl Default for AttitudeMeasurement {
    fn default() -> Self {
        Self::new(DQuat::IDENTITY)
    }
}

impl Hash for AttitudeMeasurement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.attitude.x, state);
        hash_f64(self.attitude.y, state);
        hash_f64(self.attitude.z, state);
        hash_f64(self.attitude.w, state);
        hash_opt_f32(self.heading_accuracy, state);
        self.timestamp.hash(state);
        self.accuracy.hash(state);
        self.sensor_type.hash(state);
        self.coordinate_system.hash(state);
    }
}

impl_sensor_measurement!(AttitudeMeasurement, SensorKind::Attitude);
