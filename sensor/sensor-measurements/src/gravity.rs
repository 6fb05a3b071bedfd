//! Gravity measurements.

use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurement::{hash_f32, impl_sensor_measurement};
use crate::{SensorAccuracy, SensorCoordinateSystem, SensorKind, Timestamp, Triad, TriadUnit};

/// A single gravity sample, as estimated by the platform's sensor fusion.
///
/// There is only one gravity sensor subtype and it never reports a bias.
///
/// # Units
///
/// - Gravity: meters per second squared (m/s²)
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GravityMeasurement {
    /// Gravity along the x axis.
    pub gx: f32,
    /// Gravity along the y axis.
    pub gy: f32,
    /// Gravity along the z axis.
    pub gz: f32,
    /// Time the sample was taken.
    pub timestamp: Timestamp,
    /// Driver-reported accuracy.
    pub accuracy: Option<SensorAccuracy>,
    /// Frame the axes are expressed in.
    pub coordinate_system: SensorCoordinateSystem,
}

impl GravityMeasurement {
    /// Creates a measurement with the given axes and default metadata.
    #[must_use]
    pub fn new(gx: f32, gy: f32, gz: f32) -> Self {
        Self {
            gx,
            gy,
            gz,
            ..Self::default()
        }
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

    /// Returns the axes as an array.
    #[must_use]
    pub const fn axes(&self) -> [f32; 3] {
        [self.gx, self.gy, self.gz]
    }

    /// Returns gravity in m/s².
    #[must_use]
    pub fn to_triad(&self) -> Triad {
        Triad::from_axes(self.axes(), [None; 3], 1.0, TriadUnit::MetersPerSquaredSecond)
    }

    /// Returns the gravity magnitude in m/s².
    #[must_use]
    pub fn to_norm(&self) -> f64 {
        self.to_triad().norm()
    }
}

impl Hash for GravityMeasurement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.gx, state);
        hash_f32(self.gy, state);
        hash_f32(self.gz, state);
        self.timestamp.hash(state);
        self.accuracy.hash(state);
        self.coordinate_system.hash(state);
    }
}

impl_sensor_measurement!(GravityMeasurement, SensorKind::Gravity);
