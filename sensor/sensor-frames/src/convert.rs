//! Frame conversion for single measurements.

use sensor_measurements::{
    AccelerometerMeasurement, AttitudeMeasurement, GravityMeasurement, GyroscopeMeasurement,
    MagnetometerMeasurement, SensorCoordinateSystem, SensorMeasurement,
};
use tracing::{debug, trace};

use crate::converter::{convert_axes, convert_optional_axes, convert_quaternion};
use crate::error::{FrameError, Result};

/// Conversion of a value between the ENU and NED frames.
///
/// Implementors provide the frame check and the raw axis change. The
/// provided methods build the two conversion families on top of them:
///
/// - `try_*` conversions require the source to be in the frame opposite
///   to the requested one and fail with [`FrameError::InvalidSourceFrame`]
///   otherwise. The check always runs before anything is written.
/// - Non-throwing conversions copy whatever is already in the requested
///   frame and convert the rest. They never fail.
///
/// # Example
///
/// ```
/// use sensor_frames::FrameConvert;
/// use sensor_measurements::{AccelerometerMeasurement, SensorCoordinateSystem};
///
/// let enu = AccelerometerMeasurement::new(1.0, 2.0, 3.0);
/// let ned = enu.try_to_ned().unwrap();
///
/// assert_eq!(ned.axes(), [2.0, 1.0, -3.0]);
/// assert_eq!(ned.coordinate_system, SensorCoordinateSystem::Ned);
/// assert!(ned.try_to_ned().is_err());
/// assert_eq!(ned.to_enu(), enu);
/// ```
pub trait FrameConvert: Clone {
    /// Checks that every present part is expressed in `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidSourceFrame`] naming the first part
    /// found in another frame.
    fn ensure_frame(&self, expected: SensorCoordinateSystem) -> Result<()>;

    /// Moves every present part to the opposite frame without checking.
    fn swap_frame_unchecked(&mut self);

    /// Moves every present part that is not yet in `to` into `to`.
    fn align_to(&mut self, to: SensorCoordinateSystem);

    /// Converts in place from the opposite frame into `to`.
    ///
    /// # Errors
    ///
    /// Fails without modifying `self` if any part is not in `to.opposite()`.
    fn try_convert_in_place(&mut self, to: SensorCoordinateSystem) -> Result<()> {
        self.ensure_frame(to.opposite())?;
        self.swap_frame_unchecked();
        trace!(%to, "converted in place");
        Ok(())
    }

    /// Writes the conversion of `self` into `to` into `target`.
    ///
    /// # Errors
    ///
    /// Fails without modifying `target` if any part of `self` is not in
    /// `to.opposite()`.
    fn try_convert_into(&self, to: SensorCoordinateSystem, target: &mut Self) -> Result<()> {
        self.ensure_frame(to.opposite())?;
        target.clone_from(self);
        target.swap_frame_unchecked();
        trace!(%to, "converted into target");
        Ok(())
    }

    /// Returns the conversion of `self` into `to`.
    ///
    /// # Errors
    ///
    /// Fails if any part of `self` is not in `to.opposite()`.
    fn try_convert(&self, to: SensorCoordinateSystem) -> Result<Self> {
        self.ensure_frame(to.opposite())?;
        let mut converted = self.clone();
        converted.swap_frame_unchecked();
        trace!(%to, "converted");
        Ok(converted)
    }

    /// Brings `self` into `to`, converting only what is not there yet.
    fn convert_in_place(&mut self, to: SensorCoordinateSystem) {
        self.align_to(to);
    }

    /// Writes `self`, brought into `to`, into `target`.
    fn convert_into(&self, to: SensorCoordinateSystem, target: &mut Self) {
        target.clone_from(self);
        target.align_to(to);
    }

    /// Returns `self` brought into `to`.
    #[must_use]
    fn convert(&self, to: SensorCoordinateSystem) -> Self {
        let mut converted = self.clone();
        converted.align_to(to);
        converted
    }

    /// Converts from ENU to a new NED value.
    ///
    /// # Errors
    ///
    /// Fails if any part of `self` is not in ENU.
    fn try_to_ned(&self) -> Result<Self> {
        self.try_convert(SensorCoordinateSystem::Ned)
    }

    /// Converts from NED to a new ENU value.
    ///
    /// # Errors
    ///
    /// Fails if any part of `self` is not in NED.
    fn try_to_enu(&self) -> Result<Self> {
        self.try_convert(SensorCoordinateSystem::Enu)
    }

    /// Converts from ENU into an existing NED `target`.
    ///
    /// # Errors
    ///
    /// Fails without modifying `target` if any part of `self` is not in ENU.
    fn try_to_ned_into(&self, target: &mut Self) -> Result<()> {
        self.try_convert_into(SensorCoordinateSystem::Ned, target)
    }

    /// Converts from NED into an existing ENU `target`.
    ///
    /// # Errors
    ///
    /// Fails without modifying `target` if any part of `self` is not in NED.
    fn try_to_enu_into(&self, target: &mut Self) -> Result<()> {
        self.try_convert_into(SensorCoordinateSystem::Enu, target)
    }

    /// Returns a NED copy, converting only what is in ENU.
    #[must_use]
    fn to_ned(&self) -> Self {
        self.convert(SensorCoordinateSystem::Ned)
    }

    /// Returns an ENU copy, converting only what is in NED.
    #[must_use]
    fn to_enu(&self) -> Self {
        self.convert(SensorCoordinateSystem::Enu)
    }

    /// Writes a NED copy into `target`, converting only what is in ENU.
    fn to_ned_into(&self, target: &mut Self) {
        self.convert_into(SensorCoordinateSystem::Ned, target);
    }

    /// Writes an ENU copy into `target`, converting only what is in NED.
    fn to_enu_into(&self, target: &mut Self) {
        self.convert_into(SensorCoordinateSystem::Enu, target);
    }
}

/// Frame check shared by every single measurement.
fn ensure_measurement_frame<M: SensorMeasurement>(
    measurement: &M,
    expected: SensorCoordinateSystem,
) -> Result<()> {
    let actual = measurement.coordinate_system();
    if actual == expected {
        return Ok(());
    }
    debug!(
        sensor = %M::KIND,
        %expected,
        %actual,
        "rejecting frame conversion"
    );
    Err(FrameError::invalid_source_frame(M::KIND, expected, actual))
}

macro_rules! impl_measurement_frame_convert {
    ($ty:ty, |$m:ident| $swap:block) => {
        impl FrameConvert for $ty {
            fn ensure_frame(&self, expected: SensorCoordinateSystem) -> Result<()> {
                ensure_measurement_frame(self, expected)
            }

            fn swap_frame_unchecked(&mut self) {
                let $m = &mut *self;
                $swap
                $m.coordinate_system = $m.coordinate_system.opposite();
            }

            fn align_to(&mut self, to: SensorCoordinateSystem) {
                if self.coordinate_system != to {
                    self.swap_frame_unchecked();
                }
            }
        }
    };
}

impl_measurement_frame_convert!(AccelerometerMeasurement, |m| {
    (m.ax, m.ay, m.az) = convert_axes(m.ax, m.ay, m.az);
    (m.bx, m.by, m.bz) = convert_optional_axes(m.bx, m.by, m.bz);
});

impl_measurement_frame_convert!(GyroscopeMeasurement, |m| {
    (m.wx, m.wy, m.wz) = convert_axes(m.wx, m.wy, m.wz);
    (m.bx, m.by, m.bz) = convert_optional_axes(m.bx, m.by, m.bz);
});

impl_measurement_frame_convert!(MagnetometerMeasurement, |m| {
    (m.bx, m.by, m.bz) = convert_axes(m.bx, m.by, m.bz);
    (m.hard_iron_x, m.hard_iron_y, m.hard_iron_z) =
        convert_optional_axes(m.hard_iron_x, m.hard_iron_y, m.hard_iron_z);
});

impl_measurement_frame_convert!(GravityMeasurement, |m| {
    (m.gx, m.gy, m.gz) = convert_axes(m.gx, m.gy, m.gz);
});

impl_measurement_frame_convert!(AttitudeMeasurement, |m| {
    m.attitude = convert_quaternion(m.attitude);
});
