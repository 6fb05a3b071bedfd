//! Behaviour shared by every measurement type.

use std::hash::{Hash, Hasher};

use crate::{SensorAccuracy, SensorCoordinateSystem, SensorKind, Timestamp};

/// Common accessors of a single-sensor measurement.
///
/// Implemented by every measurement type; used by the synced aggregates and
/// by the frame converters in `sensor-frames`.
pub trait SensorMeasurement: Clone + PartialEq {
    /// Sensor family this measurement belongs to.
    const KIND: SensorKind;

    /// Time the sample was taken.
    fn timestamp(&self) -> Timestamp;

    /// Driver-reported accuracy, if any.
    fn accuracy(&self) -> Option<SensorAccuracy>;

    /// Frame the numeric fields are expressed in.
    fn coordinate_system(&self) -> SensorCoordinateSystem;

    /// Relabels the frame without touching any numeric field.
    fn set_coordinate_system(&mut self, coordinate_system: SensorCoordinateSystem);
}

macro_rules! impl_sensor_measurement {
    ($ty:ty, $kind:expr) => {
        impl $crate::SensorMeasurement for $ty {
            const KIND: $crate::SensorKind = $kind;

            fn timestamp(&self) -> $crate::Timestamp {
                self.timestamp
            }

            fn accuracy(&self) -> Option<$crate::SensorAccuracy> {
                self.accuracy
            }

            fn coordinate_system(&self) -> $crate::SensorCoordinateSystem {
                self.coordinate_system
            }

            fn set_coordinate_system(&mut self, coordinate_system: $crate::SensorCoordinateSystem) {
                self.coordinate_system = coordinate_system;
            }
        }
    };
}

pub(crate) use impl_sensor_measurement;

// `0.0 == -0.0` under `PartialEq`, so both must feed the hasher the same bits.
pub(crate) fn hash_f32<H: Hasher>(value: f32, state: &mut H) {
    let bits = if value == 0.0 { 0 } else { value.to_bits() };
    bits.hash(state);
}

pub(crate) fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let bits = if value == 0.0 { 0 } else { value.to_bits() };
    bits.hash(state);
}

pub(crate) fn hash_opt_f32<H: Hasher>(value: Option<f32>, state: &mut H) {
    match value {
        Some(v) => {
            1u8.hash(state);
            hash_f32(v, state);
        }
        None => 0u8.hash(state),
    }
}

#[cfg(test)]
pub(crate) fn hash_of<T: Hash>(value: &T) -> u64 {
    use std::collections::hash_map::DefaultHasher;

    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn f32_hash(value: f32) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_f32(value, &mut hasher);
        hasher.finish()
    }

    #[test]
    fn signed_zeros_hash_alike() {
        assert_eq!(f32_hash(0.0), f32_hash(-0.0));
        assert_ne!(f32_hash(1.0), f32_hash(-1.0));
    }

    #[test]
    fn absent_and_zero_differ() {
        let mut a = DefaultHasher::new();
        hash_opt_f32(None, &mut a);
        let mut b = DefaultHasher::new();
        hash_opt_f32(Some(0.0), &mut b);
        assert_ne!(a.finish(), b.finish());
    }
}
