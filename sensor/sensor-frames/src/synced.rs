//! Frame conversion for synced measurements.
//!
//! Each present member is converted with its own [`FrameConvert`] impl.
//! Absent members stay absent and the shared timestamp is never touched.
//! The throwing variants check every present member before changing any,
//! so a single member in the wrong frame rejects the whole aggregate.

use sensor_measurements::{
    AccelerometerAndGyroscopeSyncedMeasurement,
    AccelerometerGyroscopeAndMagnetometerSyncedMeasurement,
    AttitudeAccelerometerAndGyroscopeSyncedMeasurement, GravityAndGyroscopeSyncedMeasurement,
    GravityAndMagnetometerSyncedMeasurement, GravityGyroscopeAndMagnetometerSyncedMeasurement,
    GyroscopeAndMagnetometerSyncedMeasurement, SensorCoordinateSystem,
};

use crate::convert::FrameConvert;
use crate::error::Result;

macro_rules! impl_synced_frame_convert {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl FrameConvert for $ty {
            fn ensure_frame(&self, expected: SensorCoordinateSystem) -> Result<()> {
                $(
                    if let Some(ref member) = self.$field {
                        member.ensure_frame(expected)?;
                    }
                )+
                Ok(())
            }

            fn swap_frame_unchecked(&mut self) {
                $(
                    if let Some(ref mut member) = self.$field {
                        member.swap_frame_unchecked();
                    }
                )+
            }

            fn align_to(&mut self, to: SensorCoordinateSystem) {
                $(
                    if let Some(ref mut member) = self.$field {
                        member.align_to(to);
                    }
                )+
            }
        }
    };
}

impl_synced_frame_convert!(GravityAndGyroscopeSyncedMeasurement { gravity, gyroscope });
impl_synced_frame_convert!(GravityAndMagnetometerSyncedMeasurement {
    gravity,
    magnetometer
});
impl_synced_frame_convert!(GyroscopeAndMagnetometerSyncedMeasurement {
    gyroscope,
    magnetometer
});
impl_synced_frame_convert!(GravityGyroscopeAndMagnetometerSyncedMeasurement {
    gravity,
    gyroscope,
    magnetometer
});
impl_synced_frame_convert!(AccelerometerAndGyroscopeSyncedMeasurement {
    accelerometer,
    gyroscope
});
impl_synced_frame_convert!(AccelerometerGyroscopeAndMagnetometerSyncedMeasurement {
    accelerometer,
    gyroscope,
    magnetometer
});
impl_synced_frame_convert!(AttitudeAccelerometerAndGyroscopeSyncedMeasurement {
    attitude,
    accelerometer,
    gyroscope
});

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use glam::DQuat;
    use sensor_measurements::{
        AccelerometerMeasurement, AttitudeMeasurement, GravityMeasurement, GyroscopeMeasurement,
        MagnetometerMeasurement, SensorKind, Timestamp,
    };

    use super::*;
    use crate::FrameError;

    const ENU: SensorCoordinateSystem = SensorCoordinateSystem::Enu;
    const NED: SensorCoordinateSystem = SensorCoordinateSystem::Ned;

    fn gravity() -> GravityMeasurement {
        GravityMeasurement::new(0.5, -0.25, -9.75).with_timestamp(Timestamp::from_nanos(100))
    }

    fn gyroscope() -> GyroscopeMeasurement {
        GyroscopeMeasurement::new(0.1, 0.2, 0.3)
            .with_bias(0.01, 0.02, 0.03)
            .with_timestamp(Timestamp::from_nanos(101))
    }

    fn magnetometer() -> MagnetometerMeasurement {
        MagnetometerMeasurement::new(22.0, 5.0, -40.0)
            .with_hard_iron(1.0, 2.0, 3.0)
            .with_timestamp(Timestamp::from_nanos(99))
    }

    fn triple() -> GravityGyroscopeAndMagnetometerSyncedMeasurement {
        GravityGyroscopeAndMagnetometerSyncedMeasurement::from_parts(
            Some(gravity()),
            Some(gyroscope()),
            Some(magnetometer()),
            Timestamp::from_nanos(100),
        )
    }

    #[test]
    fn converts_every_member() {
        let ned = triple().try_to_ned().unwrap();
        assert_eq!(ned.gravity, Some(gravity().try_to_ned().unwrap()));
        assert_eq!(ned.gyroscope, Some(gyroscope().try_to_ned().unwrap()));
        assert_eq!(ned.magnetometer, Some(magnetometer().try_to_ned().unwrap()));
        assert_eq!(ned.timestamp, Timestamp::from_nanos(100));
        assert_eq!(ned.try_to_enu().unwrap(), triple());
    }

    #[test]
    fn empty_aggregate_converts_to_empty() {
        let empty = GravityAndGyroscopeSyncedMeasurement::new(Timestamp::from_nanos(9));
        for converted in [
            empty.try_to_ned().unwrap(),
            empty.try_to_enu().unwrap(),
            empty.to_ned(),
            empty.to_enu(),
        ] {
            assert!(converted.is_empty());
            assert_eq!(converted.timestamp, Timestamp::from_nanos(9));
        }
    }

    #[test]
    fn absent_member_stays_absent() {
        let synced = GravityAndMagnetometerSyncedMeasurement::from_parts(
            None,
            Some(magnetometer()),
            Timestamp::from_nanos(1),
        );
        let ned = synced.try_to_ned().unwrap();
        assert_eq!(ned.gravity, None);
        assert_eq!(ned.magnetometer, Some(magnetometer().to_ned()));
    }

    #[test]
    fn any_wrong_member_rejects_whole_aggregate() {
        let wrong_gravity = {
            let mut s = triple();
            s.gravity = Some(gravity().with_coordinate_system(NED));
            s
        };
        let wrong_gyroscope = {
            let mut s = triple();
            s.gyroscope = Some(gyroscope().with_coordinate_system(NED));
            s
        };
        let wrong_magnetometer = {
            let mut s = triple();
            s.magnetometer = Some(magnetometer().with_coordinate_system(NED));
            s
        };

        let cases = [
            (wrong_gravity, SensorKind::Gravity),
            (wrong_gyroscope, SensorKind::Gyroscope),
            (wrong_magnetometer, SensorKind::Magnetometer),
        ];
        for (synced, kind) in cases {
            assert_eq!(
                synced.try_to_ned().unwrap_err(),
                FrameError::invalid_source_frame(kind, ENU, NED)
            );
        }
    }

    #[test]
    fn rejected_in_place_conversion_mutates_nothing() {
        // Only the last member is in the wrong frame: earlier members must
        // not be converted before the check fails.
        let mut synced = triple();
        synced.magnetometer = Some(magnetometer().with_coordinate_system(NED));
        let before = synced.clone();

        assert!(synced.try_convert_in_place(NED).is_err());
        assert_eq!(synced, before);
        assert!(synced.try_to_ned().is_err());
    }

    #[test]
    fn rejected_into_conversion_leaves_target_intact() {
        let mut source = triple();
        source.gyroscope = Some(gyroscope().with_coordinate_system(NED));

        let mut target = GravityGyroscopeAndMagnetometerSyncedMeasurement::new(Timestamp::zero());
        assert!(source.try_to_ned_into(&mut target).is_err());
        assert!(target.is_empty());
        assert!(target.timestamp.is_zero());
    }

    #[test]
    fn into_target_replaces_members() {
        let mut target = GravityGyroscopeAndMagnetometerSyncedMeasurement::from_parts(
            None,
            Some(GyroscopeMeasurement::default()),
            None,
            Timestamp::from_nanos(5),
        );
        triple().try_to_ned_into(&mut target).unwrap();
        assert_eq!(target, triple().try_to_ned().unwrap());
    }

    #[test]
    fn non_throwing_aligns_mixed_frames() {
        let mut synced = triple();
        synced.gyroscope = Some(gyroscope().try_to_ned().unwrap());

        let ned = synced.to_ned();
        assert_eq!(ned, triple().try_to_ned().unwrap());

        let enu = synced.to_enu();
        assert_eq!(enu, triple());
    }

    #[test]
    fn non_throwing_into_target() {
        let mut target = GyroscopeAndMagnetometerSyncedMeasurement::default();
        let synced = GyroscopeAndMagnetometerSyncedMeasurement::from_parts(
            Some(gyroscope()),
            Some(magnetometer()),
            Timestamp::from_nanos(3),
        );
        synced.to_ned_into(&mut target);
        assert_eq!(target.gyroscope, Some(gyroscope().to_ned()));
        assert_eq!(target.magnetometer, Some(magnetometer().to_ned()));
        assert_eq!(target.timestamp, Timestamp::from_nanos(3));

        let mut back = GyroscopeAndMagnetometerSyncedMeasurement::default();
        target.to_enu_into(&mut back);
        assert_eq!(back, synced);
    }

    #[test]
    fn attitude_aggregate() {
        let synced = AttitudeAccelerometerAndGyroscopeSyncedMeasurement::from_parts(
            Some(AttitudeMeasurement::new(DQuat::from_rotation_x(0.25))),
            Some(AccelerometerMeasurement::new(1.0, 2.0, 3.0)),
            None,
            Timestamp::from_nanos(8),
        );
        let ned = synced.try_to_ned().unwrap();
        assert_eq!(
            ned.accelerometer.as_ref().map(AccelerometerMeasurement::axes),
            Some([2.0, 1.0, -3.0])
        );
        assert_eq!(ned.gyroscope, None);
        assert_eq!(ned.try_to_enu().unwrap(), synced);
    }

    #[test]
    fn accelerometer_aggregates() {
        let pair = AccelerometerAndGyroscopeSyncedMeasurement::from_parts(
            Some(AccelerometerMeasurement::new(1.0, 2.0, 3.0)),
            Some(gyroscope().with_coordinate_system(NED)),
            Timestamp::zero(),
        );
        assert!(pair.try_to_ned().is_err());
        assert!(pair.try_to_enu().is_err());

        let triple = AccelerometerGyroscopeAndMagnetometerSyncedMeasurement::from_parts(
            Some(AccelerometerMeasurement::new(1.0, 2.0, 3.0)),
            Some(gyroscope()),
            Some(magnetometer()),
            Timestamp::zero(),
        );
        let ned = triple.try_to_ned().unwrap();
        assert_eq!(ned.to_enu(), triple);
    }
}
