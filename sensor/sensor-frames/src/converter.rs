//! ENU ↔ NED change of basis.
//!
//! Both local-level frames share their origin and differ by a fixed
//! rotation of 180° about the horizontal bisector `(1, 1, 0) / √2`:
//!
//! ```text
//! x_ned =  y_enu      x_enu =  y_ned
//! y_ned =  x_enu      y_enu =  x_ned
//! z_ned = -z_enu      z_enu = -z_ned
//! ```
//!
//! The rotation is its own inverse, so every function here converts in
//! either direction.

use std::f64::consts::FRAC_1_SQRT_2;

use glam::{DMat3, DQuat, DVec3, Vec3};

/// Rotation taking ENU coordinates to NED coordinates (and back).
const CONVERSION_ROTATION: DQuat = DQuat::from_xyzw(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0, 0.0);

/// Matrix form of [`CONVERSION_ROTATION`]. Symmetric and orthogonal.
const CONVERSION_MATRIX: DMat3 = DMat3::from_cols(
    DVec3::new(0.0, 1.0, 0.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(0.0, 0.0, -1.0),
);

/// Returns the rotation between the two frames as a unit quaternion.
///
/// # Example
///
/// ```
/// use glam::DVec3;
/// use sensor_frames::converter::conversion_rotation;
///
/// let up = DVec3::Z;
/// let down = conversion_rotation() * up;
/// assert!((down + DVec3::Z).length() < 1e-12);
/// ```
#[must_use]
pub const fn conversion_rotation() -> DQuat {
    CONVERSION_ROTATION
}

/// Returns the rotation between the two frames as a matrix.
#[must_use]
pub const fn conversion_matrix() -> DMat3 {
    CONVERSION_MATRIX
}

/// Converts a single axis triple.
///
/// Sign changes are exact, so converting twice reproduces the input bit for bit.
#[must_use]
pub fn convert_axes(x: f32, y: f32, z: f32) -> (f32, f32, f32) {
    (y, x, -z)
}

/// Converts an axis triple stored as an array.
#[must_use]
pub fn convert_array([x, y, z]: [f32; 3]) -> [f32; 3] {
    [y, x, -z]
}

/// Converts a vector.
#[must_use]
pub fn convert_vec3(v: Vec3) -> Vec3 {
    Vec3::new(v.y, v.x, -v.z)
}

/// Converts an axis triple whose components may be absent.
///
/// Absent components stay absent; present ones move to their new axis.
#[must_use]
pub fn convert_optional_axes(
    x: Option<f32>,
    y: Option<f32>,
    z: Option<f32>,
) -> (Option<f32>, Option<f32>, Option<f32>) {
    (y, x, z.map(|z| -z))
}

/// Re-expresses an attitude quaternion in the other frame.
///
/// Equivalent to the conjugation `C · q · C⁻¹` by [`conversion_rotation`]:
/// the scalar part is unchanged and the vector part is permuted like any
/// other axis triple. Computed by permutation to avoid rounding.
///
/// # Example
///
/// ```
/// use glam::DQuat;
/// use sensor_frames::converter::convert_quaternion;
///
/// let q = DQuat::from_rotation_z(0.3);
/// assert_eq!(convert_quaternion(convert_quaternion(q)), q);
/// ```
#[must_use]
pub fn convert_quaternion(q: DQuat) -> DQuat {
    DQuat::from_xyzw(q.y, q.x, -q.z, q.w)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn axes_permutation() {
        assert_eq!(convert_axes(1.0, 2.0, 3.0), (2.0, 1.0, -3.0));
        assert_eq!(convert_array([1.0, 2.0, 3.0]), [2.0, 1.0, -3.0]);
        assert_eq!(convert_vec3(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(2.0, 1.0, -3.0));
    }

    #[test]
    fn axes_self_inverse() {
        let v = [0.125, -7.5, 42.0];
        assert_eq!(convert_array(convert_array(v)), v);
    }

    #[test]
    fn optional_axes() {
        assert_eq!(
            convert_optional_axes(Some(1.0), None, Some(3.0)),
            (None, Some(1.0), Some(-3.0))
        );
        assert_eq!(convert_optional_axes(None, None, None), (None, None, None));
    }

    #[test]
    fn rotation_is_unit_and_self_inverse() {
        let q = conversion_rotation();
        assert!(q.is_normalized());

        let twice = q * q;
        // q² = -1, the same rotation as the identity
        assert_relative_eq!(twice.w.abs(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_matches_permutation() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        let rotated = conversion_rotation() * v;
        assert_relative_eq!(rotated.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.z, -3.0, epsilon = 1e-12);

        let by_matrix = conversion_matrix() * v;
        assert!((by_matrix - rotated).length() < 1e-12);
    }

    #[test]
    fn matrix_matches_quaternion() {
        let from_quat = DMat3::from_quat(conversion_rotation());
        assert!(from_quat.abs_diff_eq(conversion_matrix(), 1e-12));
        assert_relative_eq!(conversion_matrix().determinant(), 1.0);
    }

    #[test]
    fn quaternion_matches_conjugation() {
        let q = DQuat::from_euler(glam::EulerRot::ZYX, 0.4, -0.2, 1.1);
        let c = conversion_rotation();
        let expected = c * q * c.inverse();
        assert!(convert_quaternion(q).abs_diff_eq(expected, 1e-12));
    }

    #[test]
    fn converted_attitude_rotates_converted_vectors() {
        // Rotating in one frame then converting equals converting then rotating.
        let q = DQuat::from_axis_angle(DVec3::new(0.3, -0.5, 0.8).normalize(), 0.7);
        let v = DVec3::new(0.2, 1.5, -0.4);

        let m = conversion_matrix();
        let lhs = m * (q * v);
        let rhs = convert_quaternion(q) * (m * v);
        assert!((lhs - rhs).length() < 1e-12);
    }

    #[test]
    fn quaternion_round_trip_is_exact() {
        let q = DQuat::from_xyzw(0.1, 0.2, 0.3, 0.927_361_849_549_570_4);
        assert_eq!(convert_quaternion(convert_quaternion(q)), q);
    }
}
