//! Inertial sensor measurement value types.
//!
//! This crate provides plain data holders for the readings of the inertial
//! sensors found on phones, tablets and flight controllers, plus "synced"
//! aggregates that bind several readings to one shared timestamp.
//!
//! # Measurement Types
//!
//! - [`AccelerometerMeasurement`] - Specific force with optional bias
//! - [`GyroscopeMeasurement`] - Angular speed with optional drift
//! - [`MagnetometerMeasurement`] - Magnetic flux density with optional hard iron
//! - [`GravityMeasurement`] - Gravity vector estimated by the platform
//! - [`AttitudeMeasurement`] - Orientation quaternion
//!
//! # Synced Measurements
//!
//! - [`GravityAndGyroscopeSyncedMeasurement`]
//! - [`GravityAndMagnetometerSyncedMeasurement`]
//! - [`GyroscopeAndMagnetometerSyncedMeasurement`]
//! - [`GravityGyroscopeAndMagnetometerSyncedMeasurement`]
//! - [`AccelerometerAndGyroscopeSyncedMeasurement`]
//! - [`AccelerometerGyroscopeAndMagnetometerSyncedMeasurement`]
//! - [`AttitudeAccelerometerAndGyroscopeSyncedMeasurement`]
//!
//! # Coordinate Systems
//!
//! Every measurement declares the local-level frame its numeric fields are
//! expressed in via [`SensorCoordinateSystem`]:
//! - `Enu` - East-North-Up (default, used by mobile platform sensor APIs)
//! - `Ned` - North-East-Down (used by aerospace navigation)
//!
//! Conversion between the two lives in `sensor-frames`. This crate only
//! holds data.
//!
//! # Example
//!
//! ```
//! use sensor_measurements::{
//!     AccelerometerMeasurement, SensorAccuracy, SensorCoordinateSystem, Timestamp,
//! };
//!
//! let m = AccelerometerMeasurement::new(0.0, 0.0, 9.81)
//!     .with_timestamp(Timestamp::from_nanos(1_000_000))
//!     .with_accuracy(SensorAccuracy::High);
//!
//! assert_eq!(m.coordinate_system, SensorCoordinateSystem::Enu);
//! assert!((m.to_norm() - 9.81).abs() < 1e-5);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod accelerometer;
mod accuracy;
mod attitude;
mod frame;
mod gravity;
mod gyroscope;
mod magnetometer;
mod measurement;
mod sensor_type;
mod synced;
mod time;
mod triad;

pub use accelerometer::AccelerometerMeasurement;
pub use accuracy::SensorAccuracy;
pub use attitude::AttitudeMeasurement;
pub use frame::SensorCoordinateSystem;
pub use gravity::GravityMeasurement;
pub use gyroscope::GyroscopeMeasurement;
pub use magnetometer::MagnetometerMeasurement;
pub use measurement::SensorMeasurement;
pub use sensor_type::{
    AccelerometerSensorType, AttitudeSensorType, GyroscopeSensorType, MagnetometerSensorType,
    SensorKind,
};
pub use synced::{
    AccelerometerAndGyroscopeSyncedMeasurement,
    AccelerometerGyroscopeAndMagnetometerSyncedMeasurement,
    AttitudeAccelerometerAndGyroscopeSyncedMeasurement, GravityAndGyroscopeSyncedMeasurement,
    GravityAndMagnetometerSyncedMeasurement, GravityGyroscopeAndMagnetometerSyncedMeasurement,
    GyroscopeAndMagnetometerSyncedMeasurement,
};
pub use time::{Duration, Timestamp};
pub use triad::{Triad, TriadUnit};
