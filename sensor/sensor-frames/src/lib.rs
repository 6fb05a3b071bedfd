//! ENU ↔ NED frame conversion for inertial sensor measurements.
//!
//! Mobile platform sensor APIs report readings in East-North-Up (ENU) while
//! aerospace navigation works in North-East-Down (NED). This crate converts
//! every measurement type of `sensor-measurements` between the two.
//!
//! # Converter Primitives
//!
//! - [`converter`] - The fixed change of basis `(x, y, z) ↦ (y, x, -z)` for
//!   axis triples, optional bias triples and attitude quaternions
//!
//! # Measurement Conversion
//!
//! - [`FrameConvert`] - Implemented for every measurement and synced
//!   measurement. Offers throwing (`try_*`) and non-throwing variants, each
//!   returning a new value or writing into an existing target.
//!
//! # Errors
//!
//! A throwing conversion only accepts a source in the frame opposite to the
//! requested one. Anything else yields [`FrameError::InvalidSourceFrame`]
//! and leaves both source and target untouched.
//!
//! # Example
//!
//! ```
//! use sensor_frames::FrameConvert;
//! use sensor_measurements::{
//!     GravityAndGyroscopeSyncedMeasurement, GravityMeasurement, SensorCoordinateSystem,
//!     Timestamp,
//! };
//!
//! let mut synced = GravityAndGyroscopeSyncedMeasurement::new(Timestamp::from_nanos(1));
//! synced.gravity = Some(GravityMeasurement::new(0.0, 0.0, -9.81));
//!
//! let ned = synced.try_to_ned().unwrap();
//! let gravity = ned.gravity.unwrap();
//! assert_eq!(gravity.coordinate_system, SensorCoordinateSystem::Ned);
//! assert_eq!(gravity.gz, 9.81);
//! assert!(ned.gyroscope.is_none());
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod convert;
pub mod converter;
mod error;
mod synced;

pub use convert::FrameConvert;
pub use error::{FrameError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{FrameConvert, FrameError};
}
