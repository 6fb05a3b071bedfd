//! Synced measurements for multi-sensor data.
//!
//! A synced measurement binds samples from several sensors that a
//! synchronizer judged to belong to the same instant. Each member is
//! optional: a sensor may have produced no sample for a given tick.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    AccelerometerMeasurement, AttitudeMeasurement, Duration, GravityMeasurement,
    GyroscopeMeasurement, MagnetometerMeasurement, SensorKind, SensorMeasurement, Timestamp,
};

macro_rules! synced_measurement {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$field_meta:meta])* $field:ident: $ty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name {
            /// Reference timestamp shared by the members.
            ///
            /// Independent of the members' own timestamps, which may
            /// differ slightly due to synchronization jitter.
            pub timestamp: Timestamp,
            $(
                $(#[$field_meta])*
                pub $field: Option<$ty>,
            )+
        }

        impl $name {
            /// Creates a synced measurement with every member absent.
            #[must_use]
            pub const fn new(timestamp: Timestamp) -> Self {
                Self {
                    timestamp,
                    $( $field: None, )+
                }
            }

            /// Creates a synced measurement from its members, stored as given.
            #[must_use]
            pub const fn from_parts($( $field: Option<$ty>, )+ timestamp: Timestamp) -> Self {
                Self {
                    timestamp,
                    $( $field, )+
                }
            }

            /// Overwrites the timestamp and every member with deep copies from `other`.
            pub fn copy_from(&mut self, other: &Self) {
                self.clone_from(other);
            }

            /// Checks if no member is present.
            #[must_use]
            pub const fn is_empty(&self) -> bool {
                $( self.$field.is_none() )&&+
            }

            /// Returns the number of members present.
            #[must_use]
            pub fn sensor_count(&self) -> usize {
                0 $( + usize::from(self.$field.is_some()) )+
            }

            /// Returns the kinds of the members present, in field order.
            #[must_use]
            pub fn present_sensors(&self) -> Vec<SensorKind> {
                let mut sensors = Vec::new();
                $(
                    if self.$field.is_some() {
                        sensors.push(<$ty as SensorMeasurement>::KIND);
                    }
                )+
                sensors
            }

            /// Computes the maximum distance between a member's timestamp and
            /// the shared timestamp.
            #[must_use]
            pub fn max_timestamp_jitter(&self) -> Duration {
                let mut max_jitter = Duration::zero();
                $(
                    if let Some(ref member) = self.$field {
                        let jitter = self.timestamp.abs_diff(member.timestamp);
                        if jitter > max_jitter {
                            max_jitter = jitter;
                        }
                    }
                )+
                max_jitter
            }
        }
    };
}

synced_measurement! {
    /// Gravity and gyroscope samples taken at the same instant.
    ///
    /// # Example
    ///
    /// ```
    /// use sensor_measurements::{
    ///     GravityAndGyroscopeSyncedMeasurement, GravityMeasurement, Timestamp,
    /// };
    ///
    /// let mut synced = GravityAndGyroscopeSyncedMeasurement::new(Timestamp::from_nanos(10));
    /// synced.gravity = Some(GravityMeasurement::new(0.0, 0.0, -9.81));
    ///
    /// assert!(!synced.is_empty());
    /// assert_eq!(synced.sensor_count(), 1);
    /// ```
    GravityAndGyroscopeSyncedMeasurement {
        /// Gravity sample.
        gravity: GravityMeasurement,
        /// Gyroscope sample.
        gyroscope: GyroscopeMeasurement,
    }
}

synced_measurement! {
    /// Gravity and magnetometer samples taken at the same instant.
    GravityAndMagnetometerSyncedMeasurement {
        /// Gravity sample.
        gravity: GravityMeasurement,
        /// Magnetometer sample.
        magnetometer: MagnetometerMeasurement,
    }
}

synced_measurement! {
    /// Gyroscope and magnetometer samples taken at the same instant.
    GyroscopeAndMagnetometerSyncedMeasurement {
        /// Gyroscope sample.
        gyroscope: GyroscopeMeasurement,
        /// Magnetometer sample.
        magnetometer: MagnetometerMeasurement,
    }
}

synced_measurement! {
    /// Gravity, gyroscope and magnetometer samples taken at the same instant.
    GravityGyroscopeAndMagnetometerSyncedMeasurement {
        /// Gravity sample.
        gravity: GravityMeasurement,
        /// Gyroscope sample.
        gyroscope: GyroscopeMeasurement,
        /// Magnetometer sample.
        magnetometer: MagnetometerMeasurement,
    }
}

synced_measurement! {
    /// Accelerometer and gyroscope samples taken at the same instant.
    AccelerometerAndGyroscopeSyncedMeasurement {
        /// Accelerometer sample.
        accelerometer: AccelerometerMeasurement,
        /// Gyroscope sample.
        gyroscope: GyroscopeMeasurement,
    }
}

synced_measurement! {
    /// Accelerometer, gyroscope and magnetometer samples taken at the same instant.
    AccelerometerGyroscopeAndMagnetometerSyncedMeasurement {
        /// Accelerometer sample.
        accelerometer: AccelerometerMeasurement,
        /// Gyroscope sample.
        gyroscope: GyroscopeMeasurement,
        /// Magnetometer sample.
        magnetometer: MagnetometerMeasurement,
    }
}

synced_measurement! {
    /// Attitude, accelerometer and gyroscope samples taken at the same instant.
    AttitudeAccelerometerAndGyroscopeSyncedMeasurement {
        /// Attitude sample.
        attitude: AttitudeMeasurement,
        /// Accelerometer sample.
        accelerometer: AccelerometerMeasurement,
        /// Gyroscope sample.
        gyroscope: GyroscopeMeasurement,
    }
}
