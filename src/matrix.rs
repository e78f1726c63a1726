//! Matrices.

use crate::{
    angle::Angle,
    error::MathError,
    point::Point3,
    quaternion::UnitQuaternion,
    vector::{UnitVector3, Vector3, Vector4},
};
use approx::RelativeEq;
use bytemuck::{Pod, Zeroable};

/// A 3x3 matrix, column-major.
///
/// Primarily used to carry pure rotations produced by
/// [`UnitQuaternion::to_rotation_matrix`]; affine transforms and projections
/// use [`Matrix4`].
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix3 {
    inner: glam::Mat3,
}

/// A 4x4 matrix, column-major.
///
/// One representation serves both affine transforms and projections. For an
/// affine transform, columns 0-2 are the x-, y- and z-basis vectors and
/// column 3 is the translation.
///
/// The matrix builders come in two families that are kept in sync by
/// construction: the pure family ([`Self::translated`], [`Self::scaled`],
/// [`Self::rotated`], ...) returns a new matrix, and the in-place family
/// ([`Self::translate`], [`Self::scale`], [`Self::rotate`], ...) overwrites
/// the receiver with the result of the corresponding pure operation and
/// returns `&mut Self` for chaining.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    inner: glam::Mat4,
}

impl Matrix3 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_glam(glam::Mat3::IDENTITY)
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(column_1: Vector3, column_2: Vector3, column_3: Vector3) -> Self {
        Self::from_glam(glam::Mat3::from_cols(
            column_1.to_glam(),
            column_2.to_glam(),
            column_3.to_glam(),
        ))
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        let m = &self.inner;
        match j {
            0 => m.x_axis[i],
            1 => m.y_axis[i],
            2 => m.z_axis[i],
            _ => panic!("matrix column index out of bounds"),
        }
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::from_glam(self.inner.transpose())
    }

    /// Wraps the given native [`glam::Mat3`].
    #[inline]
    pub const fn from_glam(inner: glam::Mat3) -> Self {
        Self { inner }
    }

    /// Returns the native [`glam::Mat3`] representation.
    #[inline]
    pub const fn to_glam(self) -> glam::Mat3 {
        self.inner
    }
}

impl_binop!(Mul, mul, Matrix3, Matrix3, Matrix3, |a, b| {
    Matrix3::from_glam(a.inner.mul_mat3(&b.inner))
});

impl_binop!(Mul, mul, Matrix3, Vector3, Vector3, |a, b| {
    Vector3::from_glam(a.inner.mul_vec3(b.to_glam()))
});

impl_abs_diff_eq!(Matrix3, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(Matrix3, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_glam(glam::Mat4::IDENTITY)
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_glam(glam::Mat4::ZERO)
    }

    /// Creates a matrix with -1 along the main diagonal and zeros elsewhere.
    #[inline]
    pub const fn negative_identity() -> Self {
        Self::from_diagonal(&Vector4::new(-1.0, -1.0, -1.0, -1.0))
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4) -> Self {
        Self::from_glam(glam::Mat4::from_diagonal(diagonal.to_glam()))
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
        column_4: Vector4,
    ) -> Self {
        Self::from_glam(glam::Mat4::from_cols(
            column_1.to_glam(),
            column_2.to_glam(),
            column_3.to_glam(),
            column_4.to_glam(),
        ))
    }

    /// Creates the transform translating to the given position, by setting
    /// the translation column of the identity matrix directly.
    #[inline]
    pub const fn from_translation(translation: &Vector3) -> Self {
        Self::from_columns(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::new(translation.x(), translation.y(), translation.z(), 1.0),
        )
    }

    /// Creates the transform applying the given per-axis scale factors, by
    /// setting the diagonal of the identity matrix directly.
    #[inline]
    pub const fn from_scale(scale: &Vector3) -> Self {
        Self::from_diagonal(&Vector4::new(scale.x(), scale.y(), scale.z(), 1.0))
    }

    /// Creates the transform applying the given rotation.
    #[inline]
    pub fn from_rotation(rotation: &UnitQuaternion) -> Self {
        rotation.to_homogeneous_matrix()
    }

    /// Creates the transform rotating by the given angle around the given
    /// axis.
    #[inline]
    pub fn from_axis_angle<A: Angle>(axis: &UnitVector3, angle: A) -> Self {
        Self::from_rotation(&UnitQuaternion::from_axis_angle(axis, angle))
    }

    /// Creates the transform applying the given Euler-angle rotation in
    /// radians (x pitch, y yaw, z roll).
    ///
    /// Defined as the quaternion conversion
    /// ([`UnitQuaternion::from_euler_angles`]) followed by
    /// [`UnitQuaternion::to_homogeneous_matrix`]; there is no separate
    /// direct construction from Euler angles.
    #[inline]
    pub fn from_euler_rotation(angles: &Vector3) -> Self {
        Self::from_rotation(&UnitQuaternion::from_euler_angles(angles))
    }

    /// Creates the transform applying the given Euler-angle rotation in
    /// degrees (x pitch, y yaw, z roll).
    #[inline]
    pub fn from_euler_rotation_deg(angles: &Vector3) -> Self {
        Self::from_rotation(&UnitQuaternion::from_euler_angles_deg(angles))
    }

    /// The x-basis vector (first column), exactly as stored.
    #[inline]
    pub fn x_basis(&self) -> Vector4 {
        Vector4::from_glam(self.inner.x_axis)
    }

    /// The y-basis vector (second column), exactly as stored.
    #[inline]
    pub fn y_basis(&self) -> Vector4 {
        Vector4::from_glam(self.inner.y_axis)
    }

    /// The z-basis vector (third column), exactly as stored.
    #[inline]
    pub fn z_basis(&self) -> Vector4 {
        Vector4::from_glam(self.inner.z_axis)
    }

    /// The translation (fourth column), exactly as stored.
    #[inline]
    pub fn translation(&self) -> Vector4 {
        Vector4::from_glam(self.inner.w_axis)
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        let m = &self.inner;
        match j {
            0 => m.x_axis[i],
            1 => m.y_axis[i],
            2 => m.z_axis[i],
            3 => m.w_axis[i],
            _ => panic!("matrix column index out of bounds"),
        }
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        let m = &mut self.inner;
        match j {
            0 => &mut m.x_axis[i],
            1 => &mut m.y_axis[i],
            2 => &mut m.z_axis[i],
            3 => &mut m.w_axis[i],
            _ => panic!("matrix column index out of bounds"),
        }
    }

    /// Computes the determinant of this matrix.
    #[inline]
    pub fn determinant(&self) -> f32 {
        self.inner.determinant()
    }

    /// Returns this matrix with a translation by the given displacement
    /// applied to incoming coordinates after the existing transform:
    /// `self * T`.
    ///
    /// Chaining from the identity follows the scale-rotate-translate
    /// convention, where the scale hits the vertex first:
    /// `Matrix4::identity().translated(t).rotated(r).scaled(s)` equals
    /// `T * R * S`.
    #[inline]
    pub fn translated(&self, displacement: &Vector3) -> Self {
        self * Self::from_translation(displacement)
    }

    /// Returns this matrix with the given per-axis scaling applied:
    /// `self * S`.
    #[inline]
    pub fn scaled(&self, scale: &Vector3) -> Self {
        self * Self::from_scale(scale)
    }

    /// Returns this matrix with the given rotation applied: `self * R`.
    #[inline]
    pub fn rotated(&self, rotation: &UnitQuaternion) -> Self {
        self * Self::from_rotation(rotation)
    }

    /// Returns this matrix with a rotation by the given angle around the
    /// given axis applied: `self * R`.
    #[inline]
    pub fn rotated_axis_angle<A: Angle>(&self, axis: &UnitVector3, angle: A) -> Self {
        self * Self::from_axis_angle(axis, angle)
    }

    /// Returns this matrix with the given Euler-angle rotation in radians
    /// applied: `self * R`.
    #[inline]
    pub fn rotated_euler(&self, angles: &Vector3) -> Self {
        self * Self::from_euler_rotation(angles)
    }

    /// Returns this matrix with the given Euler-angle rotation in degrees
    /// applied: `self * R`.
    #[inline]
    pub fn rotated_euler_deg(&self, angles: &Vector3) -> Self {
        self * Self::from_euler_rotation_deg(angles)
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        Self::from_glam(self.inner.transpose())
    }

    /// Returns the inverse of this matrix.
    ///
    /// # Errors
    /// Returns [`MathError::SingularMatrix`] if the magnitude of the
    /// determinant is at most `f32::EPSILON`; such matrices are treated as
    /// singular and never yield a garbage inverse.
    pub fn inverted(&self) -> Result<Self, MathError> {
        if self.determinant().abs() <= f32::EPSILON {
            return Err(MathError::SingularMatrix);
        }
        Ok(Self::from_glam(self.inner.inverse()))
    }

    /// Computes the component-wise (Hadamard) product with the given matrix.
    ///
    /// This is deliberately a named operation: `*` is always the matrix
    /// product.
    #[inline]
    pub fn hadamard(&self, other: &Self) -> Self {
        let a = &self.inner;
        let b = &other.inner;
        Self::from_glam(glam::Mat4::from_cols(
            a.x_axis * b.x_axis,
            a.y_axis * b.y_axis,
            a.z_axis * b.z_axis,
            a.w_axis * b.w_axis,
        ))
    }

    /// Translates this matrix in place; see [`Self::translated`].
    #[inline]
    pub fn translate(&mut self, displacement: &Vector3) -> &mut Self {
        *self = self.translated(displacement);
        self
    }

    /// Scales this matrix in place; see [`Self::scaled`].
    #[inline]
    pub fn scale(&mut self, scale: &Vector3) -> &mut Self {
        *self = self.scaled(scale);
        self
    }

    /// Rotates this matrix in place; see [`Self::rotated`].
    #[inline]
    pub fn rotate(&mut self, rotation: &UnitQuaternion) -> &mut Self {
        *self = self.rotated(rotation);
        self
    }

    /// Rotates this matrix in place around the given axis; see
    /// [`Self::rotated_axis_angle`].
    #[inline]
    pub fn rotate_axis_angle<A: Angle>(&mut self, axis: &UnitVector3, angle: A) -> &mut Self {
        *self = self.rotated_axis_angle(axis, angle);
        self
    }

    /// Rotates this matrix in place by Euler angles in radians; see
    /// [`Self::rotated_euler`].
    #[inline]
    pub fn rotate_euler(&mut self, angles: &Vector3) -> &mut Self {
        *self = self.rotated_euler(angles);
        self
    }

    /// Rotates this matrix in place by Euler angles in degrees; see
    /// [`Self::rotated_euler_deg`].
    #[inline]
    pub fn rotate_euler_deg(&mut self, angles: &Vector3) -> &mut Self {
        *self = self.rotated_euler_deg(angles);
        self
    }

    /// Transposes this matrix in place; see [`Self::transposed`].
    #[inline]
    pub fn transpose(&mut self) -> &mut Self {
        *self = self.transposed();
        self
    }

    /// Inverts this matrix in place; see [`Self::inverted`].
    ///
    /// # Errors
    /// Returns [`MathError::SingularMatrix`] for a (near-)singular matrix,
    /// in which case the receiver is left unchanged.
    pub fn invert(&mut self) -> Result<&mut Self, MathError> {
        *self = self.inverted()?;
        Ok(self)
    }

    /// Assuming this matrix represents a homogeneous transform, returns the
    /// upper left 3x3 matrix representing the linear (rotation and scaling)
    /// part of the transform.
    #[inline]
    pub fn linear_part(&self) -> Matrix3 {
        let m = &self.inner;
        Matrix3::from_glam(glam::Mat3::from_cols(
            m.x_axis.truncate(),
            m.y_axis.truncate(),
            m.z_axis.truncate(),
        ))
    }

    /// Assuming this matrix represents an affine transform, applies it to
    /// the given point (the translation applies, no perspective divide).
    #[inline]
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        Point3::from_glam(self.inner.transform_point3(point.to_glam()))
    }

    /// Assuming this matrix represents an affine transform, applies it to
    /// the given free vector. The translation part of the transform does not
    /// apply to vectors.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        Vector3::from_glam(self.inner.transform_vector3(vector.to_glam()))
    }

    /// Assuming this matrix represents a projection, projects the given
    /// point by applying the matrix and performing the perspective divide.
    #[inline]
    pub fn project_point(&self, point: &Point3) -> Point3 {
        Point3::from_glam(self.inner.project_point3(point.to_glam()))
    }

    /// Wraps the given native [`glam::Mat4`].
    #[inline]
    pub const fn from_glam(inner: glam::Mat4) -> Self {
        Self { inner }
    }

    /// Returns the native [`glam::Mat4`] representation.
    #[inline]
    pub const fn to_glam(self) -> glam::Mat4 {
        self.inner
    }
}

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_glam(a.inner.mul_mat4(&b.inner))
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, b| {
    Vector4::from_glam(a.inner.mul_vec4(b.to_glam()))
});

impl_binop!(Mul, mul, Matrix4, f32, Matrix4, |a, b| {
    Matrix4::from_glam(a.inner.mul_scalar(*b))
});

impl_unary_op!(Neg, neg, Matrix4, Matrix4, |val| {
    Matrix4::from_glam(-val.inner)
});

impl_abs_diff_eq!(Matrix4, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(Matrix4, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});
