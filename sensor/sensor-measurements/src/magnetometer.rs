//! Magnetometer measurements.

use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurement::{hash_f32, hash_opt_f32, impl_sensor_measurement};
use crate::{
    MagnetometerSensorType, SensorAccuracy, SensorCoordinateSystem, SensorKind, Timestamp, Triad,
    TriadUnit,
};

/// Tesla per microtesla.
const MICROTESLA_TO_TESLA: f64 = 1e-6;

/// A single magnetometer sample.
///
/// # Units
///
/// - Flux density and hard iron: microtesla (µT)
///
/// [`Self::to_triad`] converts to tesla.
///
/// # Example
///
/// ```
/// use sensor_measurements::MagnetometerMeasurement;
///
/// let m = MagnetometerMeasurement::new(22.0, 5.0, -40.0).with_hard_iron(1.0, 1.0, 1.0);
/// assert!(m.has_hard_iron());
/// assert!((m.to_triad().x - 23e-6).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MagnetometerMeasurement {
    /// Flux density along the x axis.
    pub bx: f32,
    /// Flux density along the y axis.
    pub by: f32,
    /// Flux density along the z axis.
    pub bz: f32,
    /// Hard-iron estimate along the x axis.
    pub hard_iron_x: Option<f32>,
    /// Hard-iron estimate along the y axis.
    pub hard_iron_y: Option<f32>,
    /// Hard-iron estimate along the z axis.
    pub hard_iron_z: Option<f32>,
    /// Time the sample was taken.
    pub timestamp: Timestamp,
    /// Driver-reported accuracy.
    pub accuracy: Option<SensorAccuracy>,
    /// Calibrated or uncalibrated subtype.
    pub sensor_type: MagnetometerSensorType,
    /// Frame the axes are expressed in.
    pub coordinate_system: SensorCoordinateSystem,
}

impl MagnetometerMeasurement {
    /// Creates a measurement with the given flux density and default metadata.
    #[must_use]
    pub fn new(bx: f32, by: f32, bz: f32) -> Self {
        Self {
            bx,
            by,
            bz,
            ..Self::default()
        }
    }

    /// Sets the hard-iron estimate.
    #[must_use]
    pub fn with_hard_iron(mut self, x: f32, y: f32, z: f32) -> Self {
        self.hard_iron_x = Some(x);
        self.hard_iron_y = Some(y);
        self.hard_iron_z = Some(z);
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
    pub fn with_sensor_type(mut self, sensor_type: MagnetometerSensorType) -> Self {
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

    /// Whether all three hard-iron components are present.
    #[must_use]
    pub const fn has_hard_iron(&self) -> bool {
        self.hard_iron_x.is_some() && self.hard_iron_y.is_some() && self.hard_iron_z.is_some()
    }

    /// Returns the flux density as an array.
    #[must_use]
    pub const fn axes(&self) -> [f32; 3] {
        [self.bx, self.by, self.bz]
    }

    /// Returns the flux density in tesla, with any hard iron added to each axis.
    #[must_use]
    pub fn to_triad(&self) -> Triad {
        Triad::from_axes(
            self.axes(),
            [self.hard_iron_x, self.hard_iron_y, self.hard_iron_z],
            MICROTESLA_TO_TESLA,
            TriadUnit::Tesla,
        )
    }

    /// Returns the norm of [`Self::to_triad`] in tesla.
    #[must_use]
    pub fn to_norm(&self) -> f64 {
        self.to_triad().norm()
    }
}

impl Hash for MagnetometerMeasurement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f32(self.bx, state);
        hash_f32(self.by, state);
        hash_f32(self.bz, state);
        hash_opt_f32(self.hard_iron_x, state);
        hash_opt_f32(self.hard_iron_y, state);
        hash_opt_f32(self.hard_iron_z, state);
        self.timestamp.hash(state);
        self.accuracy.hash(state);
        self.sensor_type.hash(state);
        self.coordinate_system.hash(state);
    }
}

impl_sensor_measurement!(MagnetometerMeasurement, SensorKind::Magnetometer);
