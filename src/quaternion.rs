//! Quaternions.

use crate::{
    angle::{Angle, Radians},
    consts::f32::{DEG_TO_RAD, RAD_TO_DEG},
    matrix::{Matrix3, Matrix4},
    point::Point3,
    vector::{UnitVector3, Vector3},
};
use approx::RelativeEq;
use bytemuck::{Pod, Zeroable};

/// A quaternion with no constraint on its norm.
///
/// Components follow the game-engine convention: `(x, y, z, w)` with x, y, z
/// the imaginary parts and w the real part. A unit norm is expected for
/// values representing rotations but is not enforced here; use
/// [`UnitQuaternion`] for guaranteed rotations.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Quaternion {
    inner: glam::Quat,
}

/// A unit quaternion representing a 3D rotation.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct UnitQuaternion {
    inner: glam::Quat,
}

impl Quaternion {
    /// Creates a new quaternion from the given components, in the order
    /// x, y, z (imaginary), w (real).
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_glam(glam::Quat::from_xyzw(x, y, z, w))
    }

    /// Creates a new quaternion from the real part and the imaginary vector
    /// part.
    #[inline]
    pub const fn from_parts(real: f32, imag: Vector3) -> Self {
        Self::new(imag.x(), imag.y(), imag.z(), real)
    }

    /// Creates the identity quaternion (0, 0, 0, 1).
    #[inline]
    pub const fn identity() -> Self {
        Self::from_glam(glam::Quat::IDENTITY)
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
    }

    /// The w-component.
    #[inline]
    pub fn w(&self) -> f32 {
        self.inner.w
    }

    /// The real part.
    #[inline]
    pub fn real(&self) -> f32 {
        self.inner.w
    }

    /// The imaginary vector part.
    #[inline]
    pub fn imag(&self) -> Vector3 {
        Vector3::new(self.inner.x, self.inner.y, self.inner.z)
    }

    /// Computes the norm of the quaternion.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Returns the quaternion with all components negated. For unit
    /// quaternions this represents the same rotation.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::from_glam(-self.inner)
    }

    /// Wraps the given native [`glam::Quat`].
    #[inline]
    pub const fn from_glam(inner: glam::Quat) -> Self {
        Self { inner }
    }

    /// Returns the native [`glam::Quat`] representation.
    #[inline]
    pub const fn to_glam(self) -> glam::Quat {
        self.inner
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Add, add, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::from_glam(a.inner + b.inner)
});

impl_binop!(Mul, mul, Quaternion, Quaternion, Quaternion, |a, b| {
    Quaternion::from_glam(a.inner * b.inner)
});

impl_abs_diff_eq!(Quaternion, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(Quaternion, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});

impl UnitQuaternion {
    /// Creates the identity rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_glam(glam::Quat::IDENTITY)
    }

    /// Normalizes the given quaternion into a unit quaternion.
    #[inline]
    pub fn normalized_from(quaternion: Quaternion) -> Self {
        Self::from_glam(quaternion.to_glam().normalize())
    }

    /// Converts the given quaternion, which is assumed to have unit norm.
    #[inline]
    pub const fn unchecked_from(quaternion: Quaternion) -> Self {
        Self::from_glam(quaternion.to_glam())
    }

    /// Creates the rotation by the given angle around the given axis.
    #[inline]
    pub fn from_axis_angle<A: Angle>(axis: &UnitVector3, angle: A) -> Self {
        Self::from_glam(glam::Quat::from_axis_angle(axis.to_glam(), angle.radians()))
    }

    /// Creates the rotation described by the given Euler angles in radians:
    /// x is pitch, y is yaw and z is roll.
    ///
    /// The rotations compose as `R = Rz(roll) * Ry(yaw) * Rx(pitch)`, so the
    /// pitch rotation is applied to a column vector first, then yaw, then
    /// roll. Euler-angle extraction is singular where the yaw reaches ±90°;
    /// see [`Self::to_euler_angles`].
    pub fn from_euler_angles(angles: &Vector3) -> Self {
        let (sx, cx) = (0.5 * angles.x()).sin_cos();
        let (sy, cy) = (0.5 * angles.y()).sin_cos();
        let (sz, cz) = (0.5 * angles.z()).sin_cos();
        Self::from_glam(glam::Quat::from_xyzw(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        ))
    }

    /// Creates the rotation described by the given Euler angles in degrees:
    /// x is pitch, y is yaw and z is roll.
    #[inline]
    pub fn from_euler_angles_deg(angles: &Vector3) -> Self {
        Self::from_euler_angles(&(angles * DEG_TO_RAD))
    }

    /// Returns the Euler angles in radians (x pitch, y yaw, z roll)
    /// describing this rotation.
    ///
    /// The decomposition is not unique; the returned solution has yaw in
    /// [-π/2, π/2]. The yaw operand is clamped before the arcsine, so the
    /// result is never NaN. At the yaw = ±90° singularity pitch and roll are
    /// no longer independent and the remaining twist is not recoverable; the
    /// extraction then returns zero for both.
    pub fn to_euler_angles(&self) -> Vector3 {
        let (x, y, z, w) = (self.inner.x, self.inner.y, self.inner.z, self.inner.w);
        let pitch = f32::atan2(2.0 * (w * x + y * z), 1.0 - 2.0 * (x * x + y * y));
        let yaw = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin();
        let roll = f32::atan2(2.0 * (w * z + x * y), 1.0 - 2.0 * (y * y + z * z));
        Vector3::new(pitch, yaw, roll)
    }

    /// Returns the Euler angles in degrees (x pitch, y yaw, z roll)
    /// describing this rotation.
    #[inline]
    pub fn to_euler_angles_deg(&self) -> Vector3 {
        self.to_euler_angles() * RAD_TO_DEG
    }

    /// The real part.
    #[inline]
    pub fn real(&self) -> f32 {
        self.inner.w
    }

    /// The imaginary vector part.
    #[inline]
    pub fn imag(&self) -> Vector3 {
        Vector3::new(self.inner.x, self.inner.y, self.inner.z)
    }

    /// Returns the inverse rotation.
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::from_glam(self.inner.inverse())
    }

    /// Returns the quaternion with all components negated, which represents
    /// the same rotation.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::from_glam(-self.inner)
    }

    /// The rotation angle.
    #[inline]
    pub fn angle(&self) -> Radians {
        let (_, angle) = self.inner.to_axis_angle();
        Radians(angle)
    }

    /// The rotation axis, or [`None`] for a (near-)identity rotation, whose
    /// axis is arbitrary.
    #[inline]
    pub fn axis(&self) -> Option<UnitVector3> {
        self.axis_angle().map(|(axis, _)| axis)
    }

    /// The rotation axis and angle, or [`None`] for a (near-)identity
    /// rotation, whose axis is arbitrary.
    pub fn axis_angle(&self) -> Option<(UnitVector3, Radians)> {
        let (axis, angle) = self.inner.to_axis_angle();
        if angle.abs() < 1e-6 {
            None
        } else {
            Some((UnitVector3::from_glam(axis), Radians(angle)))
        }
    }

    /// Returns the rotation as an unconstrained [`Quaternion`].
    #[inline]
    pub const fn to_quaternion(&self) -> Quaternion {
        Quaternion::from_glam(self.inner)
    }

    /// Returns the 3x3 matrix applying the same rotation to a column vector.
    #[inline]
    pub fn to_rotation_matrix(&self) -> Matrix3 {
        Matrix3::from_glam(glam::Mat3::from_quat(self.inner))
    }

    /// Returns the homogeneous 4x4 matrix applying the same rotation: unit
    /// scale, zero translation.
    #[inline]
    pub fn to_homogeneous_matrix(&self) -> Matrix4 {
        Matrix4::from_glam(glam::Mat4::from_quat(self.inner))
    }

    /// Applies the rotation to the given vector.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        Vector3::from_glam(self.inner * vector.to_glam())
    }

    /// Applies the rotation to the given point.
    #[inline]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        Point3::from_glam(self.inner * point.to_glam())
    }

    /// Applies the rotation to the given unit vector.
    #[inline]
    pub fn rotate_unit_vector(&self, vector: &UnitVector3) -> UnitVector3 {
        UnitVector3::from_glam(self.inner * vector.to_glam())
    }

    /// Wraps the given native [`glam::Quat`], which is assumed to have unit
    /// norm.
    #[inline]
    pub const fn from_glam(inner: glam::Quat) -> Self {
        Self { inner }
    }

    /// Returns the native [`glam::Quat`] representation.
    #[inline]
    pub const fn to_glam(self) -> glam::Quat {
        self.inner
    }
}

impl Default for UnitQuaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(
    Mul,
    mul,
    UnitQuaternion,
    UnitQuaternion,
    UnitQuaternion,
    |a, b| { UnitQuaternion::from_glam(a.inner * b.inner) }
);

impl_abs_diff_eq!(UnitQuaternion, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(UnitQuaternion, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::{
        angle::Degrees,
        consts::f32::{FRAC_PI_2, FRAC_PI_3, PI},
    };
    use approx::assert_abs_diff_eq;

    // Test constants
    const EPSILON: f32 = 1e-6;

    #[test]
    fn quaternion_constructor_uses_xyzw_component_order() {
        let quat = Quaternion::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(quat.x(), 1.0);
        assert_eq!(quat.y(), 2.0);
        assert_eq!(quat.z(), 3.0);
        assert_eq!(quat.w(), 4.0);
        assert_eq!(quat.real(), 4.0);
        assert_eq!(quat.imag(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn quaternion_from_parts_matches_component_constructor() {
        let quat = Quaternion::from_parts(4.0, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(quat, Quaternion::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn quaternion_identity_is_0001() {
        assert_eq!(Quaternion::identity(), Quaternion::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quaternion::default(), Quaternion::identity());
    }

    #[test]
    fn quaternion_norm_works() {
        assert_abs_diff_eq!(
            Quaternion::new(0.0, 3.0, 0.0, 4.0).norm(),
            5.0,
            epsilon = EPSILON
        );
    }

    #[test]
    fn quaternion_multiplication_works() {
        let q1 = Quaternion::new(0.0, 0.0, 0.0, 1.0);
        let q2 = Quaternion::new(1.0, 0.0, 0.0, 0.0);

        // 1 * i = i
        assert_abs_diff_eq!(&q1 * &q2, q2, epsilon = EPSILON);

        // i * i = -1
        assert_abs_diff_eq!(
            &q2 * &q2,
            Quaternion::new(0.0, 0.0, 0.0, -1.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn normalizing_quaternion_gives_unit_norm() {
        let unit = UnitQuaternion::normalized_from(Quaternion::new(0.0, 0.0, 0.0, 2.0));
        assert_abs_diff_eq!(unit.to_quaternion(), Quaternion::identity(), epsilon = EPSILON);
    }

    #[test]
    fn rotation_from_axis_angle_rotates_perpendicular_vector_by_the_angle() {
        let rotation = UnitQuaternion::from_axis_angle(&UnitVector3::unit_z(), Radians(FRAC_PI_3));
        let vector = Vector3::unit_x();

        let rotated = rotation.transform_vector(&vector);

        assert_abs_diff_eq!(rotated.dot(&vector), FRAC_PI_3.cos(), epsilon = EPSILON);
        assert_abs_diff_eq!(rotated.norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn quarter_turn_around_z_maps_x_to_y() {
        let rotation = UnitQuaternion::from_axis_angle(&UnitVector3::unit_z(), Radians(FRAC_PI_2));
        let rotated = rotation.transform_vector(&Vector3::unit_x());

        assert_abs_diff_eq!(rotated, Vector3::unit_y(), epsilon = EPSILON);
    }

    #[test]
    fn axis_angle_construction_accepts_degrees_and_radians_equivalently() {
        let axis = UnitVector3::unit_y();
        let from_deg = UnitQuaternion::from_axis_angle(&axis, Degrees(90.0));
        let from_rad = UnitQuaternion::from_axis_angle(&axis, Radians(FRAC_PI_2));

        assert_abs_diff_eq!(
            from_deg.to_quaternion(),
            from_rad.to_quaternion(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn rotating_unit_y_by_quarter_turn_pitch_and_yaw_gives_unit_x() {
        // Pins the composition order Rz * Ry * Rx (pitch applied first): the
        // pitch takes +Y to +Z and the yaw then takes +Z to +X. The reverse
        // composition would leave +Y on +Z instead.
        let rotation =
            UnitQuaternion::from_euler_angles(&Vector3::new(FRAC_PI_2, FRAC_PI_2, 0.0));
        let rotated = rotation.transform_vector(&Vector3::unit_y());

        assert_abs_diff_eq!(rotated, Vector3::unit_x(), epsilon = 1e-5);
    }

    #[test]
    fn euler_angle_round_trip_works_away_from_singularity() {
        let angles = Vector3::new(0.1, 0.2, 0.3);
        let extracted = UnitQuaternion::from_euler_angles(&angles).to_euler_angles();

        assert_abs_diff_eq!(extracted, angles, epsilon = 1e-5);
    }

    #[test]
    fn euler_angle_round_trip_in_degrees_works_away_from_singularity() {
        let angles = Vector3::new(10.0, 20.0, 30.0);
        let extracted = UnitQuaternion::from_euler_angles_deg(&angles).to_euler_angles_deg();

        assert_abs_diff_eq!(extracted, angles, epsilon = 1e-4);
    }

    #[test]
    fn degree_euler_construction_is_exactly_the_radian_one_after_conversion() {
        let degrees = Vector3::new(35.0, -20.0, 110.0);
        let radians = &degrees * DEG_TO_RAD;

        assert_eq!(
            UnitQuaternion::from_euler_angles_deg(&degrees),
            UnitQuaternion::from_euler_angles(&radians)
        );
    }

    #[test]
    fn euler_extraction_at_yaw_singularity_does_not_produce_nan() {
        let angles = Vector3::new(0.3, FRAC_PI_2, 0.2);
        let rotation = UnitQuaternion::from_euler_angles(&angles);

        let extracted = rotation.to_euler_angles();
        assert!(extracted.x().is_finite());
        assert!(extracted.y().is_finite());
        assert!(extracted.z().is_finite());
        assert_abs_diff_eq!(extracted.y(), FRAC_PI_2, epsilon = 1e-2);
    }

    #[test]
    fn euler_round_trip_still_works_close_to_the_singularity() {
        let angles = Vector3::new(0.3, 1.4, 0.2);
        let extracted = UnitQuaternion::from_euler_angles(&angles).to_euler_angles();

        assert_abs_diff_eq!(extracted, angles, epsilon = 1e-4);
    }

    #[test]
    fn rotation_matrix_agrees_with_quaternion_rotation() {
        let rotation =
            UnitQuaternion::from_euler_angles(&Vector3::new(0.4, -0.7, 1.1));
        let matrix = rotation.to_rotation_matrix();

        for vector in [
            Vector3::unit_x(),
            Vector3::unit_y(),
            Vector3::new(1.0, 2.0, 3.0),
        ] {
            assert_abs_diff_eq!(
                &matrix * &vector,
                rotation.transform_vector(&vector),
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn homogeneous_rotation_matrix_has_no_translation() {
        let rotation = UnitQuaternion::from_axis_angle(&UnitVector3::unit_z(), Radians(FRAC_PI_2));
        let matrix = rotation.to_homogeneous_matrix();

        assert_abs_diff_eq!(
            matrix.translation(),
            crate::vector::Vector4::unit_w(),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(matrix.element(3, 0), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(matrix.element(3, 1), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(matrix.element(3, 2), 0.0, epsilon = EPSILON);
    }

    #[test]
    fn rotation_composition_is_associative() {
        let q1 = UnitQuaternion::from_axis_angle(&UnitVector3::unit_x(), Radians(0.1));
        let q2 = UnitQuaternion::from_axis_angle(&UnitVector3::unit_y(), Radians(0.2));
        let q3 = UnitQuaternion::from_axis_angle(&UnitVector3::unit_z(), Radians(0.3));

        let left = &(&q1 * &q2) * &q3;
        let right = &q1 * &(&q2 * &q3);

        assert_abs_diff_eq!(
            left.to_quaternion(),
            right.to_quaternion(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn inverse_rotation_undoes_rotation() {
        let rotation = UnitQuaternion::from_axis_angle(&UnitVector3::unit_y(), Radians(0.8));
        let vector = Vector3::new(1.0, 2.0, 3.0);

        let back = rotation.inverse().transform_vector(&rotation.transform_vector(&vector));
        assert_abs_diff_eq!(back, vector, epsilon = EPSILON);
    }

    #[test]
    fn negated_rotation_represents_same_rotation() {
        let rotation = UnitQuaternion::from_axis_angle(&UnitVector3::unit_x(), Radians(0.9));
        let vector = Vector3::new(0.0, 1.0, 2.0);

        assert_abs_diff_eq!(
            rotation.negated().transform_vector(&vector),
            rotation.transform_vector(&vector),
            epsilon = EPSILON
        );
    }

    #[test]
    fn axis_angle_extraction_works() {
        let rotation = UnitQuaternion::from_axis_angle(&UnitVector3::unit_y(), Radians(FRAC_PI_3));
        let (axis, angle) = rotation.axis_angle().unwrap();

        assert_abs_diff_eq!(angle, Radians(FRAC_PI_3), epsilon = EPSILON);
        assert_abs_diff_eq!(axis.y(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn identity_rotation_has_no_axis() {
        assert!(UnitQuaternion::identity().axis_angle().is_none());
        assert!(UnitQuaternion::identity().axis().is_none());
        assert_abs_diff_eq!(UnitQuaternion::identity().angle(), Radians(0.0));
    }

    #[test]
    fn rotation_preserves_vector_norm() {
        let rotation = UnitQuaternion::from_euler_angles(&Vector3::new(0.5, 1.0, -0.3));
        let vector = Vector3::new(2.0, 3.0, 4.0);

        assert_abs_diff_eq!(
            rotation.transform_vector(&vector).norm(),
            vector.norm(),
            epsilon = 1e-5
        );
    }

    #[test]
    fn transforming_point_matches_transforming_vector() {
        let rotation = UnitQuaternion::from_axis_angle(&UnitVector3::unit_z(), Radians(PI / 5.0));
        let point = Point3::new(1.0, 2.0, 3.0);

        let transformed = rotation.transform_point(&point);
        let expected = rotation.transform_vector(&point.to_vector());

        assert_abs_diff_eq!(transformed.to_vector(), expected, epsilon = EPSILON);
    }
}
