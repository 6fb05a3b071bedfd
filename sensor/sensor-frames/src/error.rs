//! Error types for the sensor-frames crate.

use sensor_measurements::{SensorCoordinateSystem, SensorKind};
use thiserror::Error;

/// Errors that can occur when converting measurements between frames.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// The source is not expressed in the frame the conversion starts from.
    #[error("invalid source frame for {sensor}: expected {expected}, got {actual}")]
    InvalidSourceFrame {
        /// Measurement that failed the check.
        sensor: SensorKind,
        /// Frame the conversion requires the source to be in.
        expected: SensorCoordinateSystem,
        /// Frame the source is actually in.
        actual: SensorCoordinateSystem,
    },
}

impl FrameError {
    /// Creates an invalid source frame error.
    #[must_use]
    pub const fn invalid_source_frame(
        sensor: SensorKind,
        expected: SensorCoordinateSystem,
        actual: SensorCoordinateSystem,
    ) -> Self {
        Self::InvalidSourceFrame {
            sensor,
            expected,
            actual,
        }
    }
}

/// Result type for frame conversions.
pub type Result<T> = std::result::Result<T, FrameError>;
