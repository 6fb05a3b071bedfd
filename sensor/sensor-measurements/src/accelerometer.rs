//! Accelerometer measurements.

use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurement::{hash_f32, hash_opt_f32, impl_sensor_measurement};
use crate::{
    AccelerometerSensorType, SensorAccuracy, SensorCoordinateSystem, SensorKind, Timestamp, Triad,
    TriadUnit,
};

/// A single accelerometer sample.
///
/// # Units
///
/// - Specific force and bias: meters per second squared (m/s²)
///
/// Bias terms are only reported by the uncalibrated subtype.
///
/// # Example
///
/// ```
/// use sensor_measurements::{AccelerometerMeasurement, SensorCoordinateSystem, Timestamp};
///
/// let m = AccelerometerMeasurement::new(0.0, 0.0, 9.81)
///     .with_bias(0.01, -0.02, 0.03)
///     .with_timestamp(Timestamp::from_nanos(1_000));
///
/// assert!(m.has_bias());
/// assert_eq!(m.coordinate_system, SensorCoordinateSystem::Enu);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccelerometerMeasurement {
    /// Specific force along the x axis.
    pub ax: f32,
    /// Specific force along the y axis.
    pub ay: f32,
    /// Specific force along the z axis.
    pub az: f32,
    /// Estimated bias along the x axis.
    pub bx: Option<f32>,
    /// Estimated bias along the y axis.
    pub by: Option<f32>,
    /// Estimated bias along the z axis.
    pub bz: Option<f32>,
    /// Time the sample was taken.
    pub timestamp: Timestamp,
    /// Driver-reported accuracy.
    pub accuracy: Option<SensorAccuracy>,
    /// Calibrated or uncalibrated subtype.
    pub sensor_type: AccelerometerSensorType,
    /// Frame the axes are expressed in.
    pub coordinate_system: SensorCoordinateSystem,
}

impl AccelerometerMeasurement {
    /// Creates a measurement with the given axes and default metadata.
    #[must_use]
    pub fn new(ax: f32, ay: f32, az: f32) -> Self {
        Self {
            ax,
            ay,
            az,
            ..Self::default()
        }
    }

    /// Sets the bias estimate.
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
    pub fn with_sensor_type(mut self, sensor_type: AccelerometerSensorType) -> Self {
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

    /// Whether all three bias components are present.
    #[must_use]
    pub const fn has_bias(&self) -> bool {
        self.bx.is_some() && self.by.is_some() && self.bz.is_some()
    }

    /// Returns the axes as an array.
    #[must_use]
    pub const fn axes(&self) -> [f32; 3] {
        [self.ax, self.ay, self.az]
    }

    /// Returns the specific force in m/s², with any bias added to each axis.
    #[must_use]
    pub fn to_triad(&self) -> Triad {
        Triad::from_axes(
            self.axes(),
            [self.bx, self.by, self.bz],
            1.0,
            TriadUnit::MetersPerSquaredSecond,
        )
    }

    /// Returns the norm of [`Self::to_triad`] in m/s².
    #[must_use]
    pub fn to_norm(&self) -> f64 {
        self.to_triad().norm()
    }
}

impl Hash for AccelerometerMeasurement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.ax, state);
        hash_f32(self.ay, state);
        hash_f32(self.az, state);
        hash_opt_f32(self.bx, state);
        hash_opt_f32(self.by, state);
        hash_opt_f32(self.bz, state);
        self.timestamp.hash(state);
        self.accuracy.hash(state);
        self.sensor_type.hash(state);
        self.coordinate_system.hash(state);
    }
}

impl_sensor_measurement!(AccelerometerMeasurement, SensorKind::Accelerometer);
