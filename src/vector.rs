//! Vectors, including the homogeneous 4-component representation.

use crate::{angle::Radians, error::MathError, point::Point3};
use approx::RelativeEq;
use bytemuck::{Pod, Zeroable};

/// Spatial magnitudes and `w`-components below this threshold are treated as
/// zero by the homogeneous-coordinate operations on [`Vector4`].
const HOMOGENEOUS_EPSILON: f32 = 1e-6;

/// A 2-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    inner: glam::Vec2,
}

/// A 3-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    inner: glam::Vec3,
}

/// A 3-dimensional vector of unit length.
///
/// This is the type-level "direction" counterpart to [`Point3`]: a free
/// vector that translation does not affect. The unit-length invariant holds
/// by construction with [`Self::normalized_from`]; with
/// [`Self::new_unchecked`] and [`Self::unchecked_from`] the caller promises
/// it.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct UnitVector3 {
    inner: glam::Vec3,
}

/// A 4-dimensional vector, doubling as the homogeneous representation of 3D
/// points (`w = 1`) and directions (`w = 0`).
///
/// The point/direction distinction is a convention carried by the
/// `w`-component, not an invariant; the homogeneous operations
/// ([`Self::to_point`], [`Self::to_cartesian`], [`Self::to_direction`])
/// document how they treat each case. Where the distinction should be
/// enforced by the type system, use [`Point3`] and [`UnitVector3`] instead.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    inner: glam::Vec4,
}

impl Vector2 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self::from_glam(glam::Vec2::new(x, y))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_glam(glam::Vec2::ZERO)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.inner.y
    }

    /// Wraps the given native [`glam::Vec2`].
    #[inline]
    pub const fn from_glam(inner: glam::Vec2) -> Self {
        Self { inner }
    }

    /// Returns the native [`glam::Vec2`] representation.
    #[inline]
    pub const fn to_glam(self) -> glam::Vec2 {
        self.inner
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x(), vector.y()]
    }
}

impl_abs_diff_eq!(Vector2, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(Vector2, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});

impl Vector3 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_glam(glam::Vec3::new(x, y, z))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_glam(glam::Vec3::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: f32) -> Self {
        Self::from_glam(glam::Vec3::splat(value))
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::from_glam(glam::Vec3::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::from_glam(glam::Vec3::Y)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::from_glam(glam::Vec3::Z)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.inner.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.inner.z
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: f32) -> Vector4 {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }

    /// Computes the normalized version of the vector. Returns the zero
    /// vector if the norm is zero.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::from_glam(self.inner.normalize_or_zero())
    }

    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.length_squared()
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::from_glam(self.inner.cross(other.inner))
    }

    /// Wraps the given native [`glam::Vec3`].
    #[inline]
    pub const fn from_glam(inner: glam::Vec3) -> Self {
        Self { inner }
    }

    /// Returns the native [`glam::Vec3`] representation.
    #[inline]
    pub const fn to_glam(self) -> glam::Vec3 {
        self.inner
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x(), vector.y(), vector.z()]
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::from_glam(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::from_glam(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector3, f32, Vector3, |a, b| {
    Vector3::from_glam(a.inner * *b)
});

impl_binop!(Mul, mul, f32, Vector3, Vector3, |a, b| {
    Vector3::from_glam(b.inner * *a)
});

impl_binop!(Div, div, Vector3, f32, Vector3, |a, b| {
    Vector3::from_glam(a.inner / *b)
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::from_glam(-val.inner)
});

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});

impl UnitVector3 {
    /// Creates a new unit vector with the given components, which are
    /// assumed to have unit norm.
    #[inline]
    pub const fn new_unchecked(x: f32, y: f32, z: f32) -> Self {
        Self::from_glam(glam::Vec3::new(x, y, z))
    }

    /// Converts the given vector, which is assumed to have unit norm.
    #[inline]
    pub const fn unchecked_from(vector: Vector3) -> Self {
        Self::from_glam(vector.to_glam())
    }

    /// Normalizes the given vector into a unit vector. The result is
    /// non-finite if the norm of the vector is zero.
    #[inline]
    pub fn normalized_from(vector: Vector3) -> Self {
        Self::from_glam(vector.to_glam().normalize())
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::from_glam(glam::Vec3::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::from_glam(glam::Vec3::Y)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::from_glam(glam::Vec3::Z)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.inner.z
    }

    /// Returns the unit vector as an unconstrained [`Vector3`].
    #[inline]
    pub const fn to_vector(&self) -> Vector3 {
        Vector3::from_glam(self.inner)
    }

    /// Returns the homogeneous representation of the direction, with
    /// `w = 0`.
    #[inline]
    pub const fn to_homogeneous(&self) -> Vector4 {
        Vector4::new(self.x(), self.y(), self.z(), 0.0)
    }

    /// Wraps the given native [`glam::Vec3`], which is assumed to have unit
    /// norm.
    #[inline]
    pub const fn from_glam(inner: glam::Vec3) -> Self {
        Self { inner }
    }

    /// Returns the native [`glam::Vec3`] representation.
    #[inline]
    pub const fn to_glam(self) -> glam::Vec3 {
        self.inner
    }
}

impl_unary_op!(Neg, neg, UnitVector3, UnitVector3, |val| {
    UnitVector3::from_glam(-val.inner)
});

impl_abs_diff_eq!(UnitVector3, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(UnitVector3, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_glam(glam::Vec4::new(x, y, z, w))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_glam(glam::Vec4::ZERO)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::from_glam(glam::Vec4::X)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::from_glam(glam::Vec4::Y)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::from_glam(glam::Vec4::Z)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::from_glam(glam::Vec4::W)
    }

    /// The origin as a homogeneous point: (0, 0, 0, 1).
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// The right direction (+X) as a homogeneous direction.
    #[inline]
    pub const fn right() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The left direction (-X) as a homogeneous direction.
    #[inline]
    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0, 0.0)
    }

    /// The up direction (+Y) as a homogeneous direction.
    #[inline]
    pub const fn up() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// The down direction (-Y) as a homogeneous direction.
    #[inline]
    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0, 0.0)
    }

    /// The forward direction (-Z) as a homogeneous direction.
    #[inline]
    pub const fn forward() -> Self {
        Self::new(0.0, 0.0, -1.0, 0.0)
    }

    /// The backward direction (+Z) as a homogeneous direction.
    #[inline]
    pub const fn backward() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// Creates the homogeneous representation of the given point, with
    /// `w = 1`.
    #[inline]
    pub const fn from_point(point: &Point3) -> Self {
        Self::new(point.x(), point.y(), point.z(), 1.0)
    }

    /// Creates the homogeneous representation of the given free vector, with
    /// `w = 0`.
    #[inline]
    pub const fn from_direction(vector: &Vector3) -> Self {
        Self::new(vector.x(), vector.y(), vector.z(), 0.0)
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

    /// A mutable reference to the x-component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.inner.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.inner.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.inner.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub fn w_mut(&mut self) -> &mut f32 {
        &mut self.inner.w
    }

    /// The spatial (x, y, z) components, without any division by `w`.
    #[inline]
    pub fn spatial(&self) -> Vector3 {
        Vector3::from_glam(self.inner.truncate())
    }

    /// Computes the norm of the spatial (x, y, z) components, ignoring `w`.
    #[inline]
    pub fn spatial_norm(&self) -> f32 {
        self.inner.truncate().length()
    }

    /// Computes the norm (length) of the vector over all four components.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the dot product of this vector with another over all four
    /// components.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Converts this vector to a homogeneous point with `w = 1`.
    ///
    /// If `|w|` is below the homogeneous epsilon the vector is treated as a
    /// direction and promoted to a point at the same spatial offset, leaving
    /// x, y and z untouched. Otherwise the perspective divide
    /// `(x/w, y/w, z/w, 1)` is performed.
    ///
    /// For the strict variant that fails on `w = 0` instead of promoting,
    /// use [`Self::to_cartesian`].
    #[inline]
    pub fn to_point(&self) -> Self {
        if self.w().abs() < HOMOGENEOUS_EPSILON {
            Self::new(self.x(), self.y(), self.z(), 1.0)
        } else {
            let inv_w = 1.0 / self.w();
            Self::new(self.x() * inv_w, self.y() * inv_w, self.z() * inv_w, 1.0)
        }
    }

    /// Projects this vector to 3D Cartesian coordinates by dividing the
    /// spatial components by `w`.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] if `w` is exactly zero. Call
    /// sites where a zero `w` is legitimate should use the lenient
    /// [`Self::to_point`] instead.
    #[inline]
    pub fn to_cartesian(&self) -> Result<Vector3, MathError> {
        if self.w() == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        let inv_w = 1.0 / self.w();
        Ok(Vector3::new(
            self.x() * inv_w,
            self.y() * inv_w,
            self.z() * inv_w,
        ))
    }

    /// Converts this vector to a homogeneous unit direction: the spatial
    /// components are normalized and `w` is forced to zero.
    ///
    /// Returns the zero vector if the spatial norm is below the homogeneous
    /// epsilon.
    #[inline]
    pub fn to_direction(&self) -> Self {
        let spatial_norm = self.spatial_norm();
        if spatial_norm < HOMOGENEOUS_EPSILON {
            return Self::zeros();
        }
        let inv_norm = 1.0 / spatial_norm;
        Self::new(
            self.x() * inv_norm,
            self.y() * inv_norm,
            self.z() * inv_norm,
            0.0,
        )
    }

    /// Computes the angle between the spatial (x, y, z) parts of this vector
    /// and another, ignoring `w`.
    ///
    /// Returns a zero angle if either spatial magnitude is (near) zero. The
    /// cosine is clamped to [-1, 1] before the arccosine so floating-point
    /// error cannot produce NaN.
    pub fn spatial_angle(&self, other: &Self) -> Radians {
        let dot = self.spatial().dot(&other.spatial());
        let magnitudes = self.spatial_norm() * other.spatial_norm();
        if magnitudes < HOMOGENEOUS_EPSILON {
            return Radians(0.0);
        }
        Radians((dot / magnitudes).clamp(-1.0, 1.0).acos())
    }

    /// Linearly interpolates between two homogeneous points.
    ///
    /// Both inputs must already be points with `w ≈ 1` (checked with a debug
    /// assertion); the result has `w = 1` exactly. `t` is not clamped, so
    /// values outside [0, 1] extrapolate.
    pub fn lerp_points(a: &Self, b: &Self, t: f32) -> Self {
        debug_assert!(
            (a.w() - 1.0).abs() < HOMOGENEOUS_EPSILON,
            "first input to lerp_points must be a point (w = 1)"
        );
        debug_assert!(
            (b.w() - 1.0).abs() < HOMOGENEOUS_EPSILON,
            "second input to lerp_points must be a point (w = 1)"
        );
        Self::new(
            a.x() + t * (b.x() - a.x()),
            a.y() + t * (b.y() - a.y()),
            a.z() + t * (b.z() - a.z()),
            1.0,
        )
    }

    /// Wraps the given native [`glam::Vec4`].
    #[inline]
    pub const fn from_glam(inner: glam::Vec4) -> Self {
        Self { inner }
    }

    /// Returns the native [`glam::Vec4`] representation.
    #[inline]
    pub const fn to_glam(self) -> glam::Vec4 {
        self.inner
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        [vector.x(), vector.y(), vector.z(), vector.w()]
    }
}

impl std::ops::Index<usize> for Vector4 {
    type Output = f32;

    /// # Panics
    /// If the index is not in 0..4.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl std::ops::IndexMut<usize> for Vector4 {
    /// # Panics
    /// If the index is not in 0..4.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::from_glam(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::from_glam(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, b| {
    Vector4::from_glam(a.inner * *b)
});

impl_binop!(Mul, mul, f32, Vector4, Vector4, |a, b| {
    Vector4::from_glam(b.inner * *a)
});

impl_binop!(Div, div, Vector4, f32, Vector4, |a, b| {
    Vector4::from_glam(a.inner / *b)
});

impl_unary_op!(Neg, neg, Vector4, Vector4, |val| {
    Vector4::from_glam(-val.inner)
});

impl_abs_diff_eq!(Vector4, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(Vector4, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::f32::{FRAC_PI_2, PI};
    use approx::assert_abs_diff_eq;

    // Test constants
    const EPSILON: f32 = 1e-6;

    #[test]
    fn creating_point_representation_sets_w_to_one() {
        let point = Point3::new(1.0, 2.0, 3.0);
        let homogeneous = Vector4::from_point(&point);

        assert_eq!(homogeneous, Vector4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn creating_direction_representation_sets_w_to_zero() {
        let vector = Vector3::new(1.0, 2.0, 3.0);
        let homogeneous = Vector4::from_direction(&vector);

        assert_eq!(homogeneous, Vector4::new(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn point_representation_projects_back_to_original_point() {
        let point = Point3::new(-0.5, 7.25, 3.0);
        let projected = Vector4::from_point(&point).to_cartesian().unwrap();

        assert_eq!(projected, Vector3::new(-0.5, 7.25, 3.0));
    }

    #[test]
    fn converting_to_point_performs_perspective_divide() {
        let vector = Vector4::new(2.0, 4.0, 6.0, 2.0);

        assert_abs_diff_eq!(
            vector.to_point(),
            Vector4::new(1.0, 2.0, 3.0, 1.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn converting_direction_to_point_promotes_without_divide() {
        let direction = Vector4::new(1.0, 2.0, 3.0, 0.0);

        assert_eq!(direction.to_point(), Vector4::new(1.0, 2.0, 3.0, 1.0));

        let near_direction = Vector4::new(1.0, 2.0, 3.0, 1e-8);
        assert_eq!(near_direction.to_point(), Vector4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn strict_cartesian_projection_divides_by_w() {
        let vector = Vector4::new(2.0, 4.0, 6.0, 2.0);

        assert_abs_diff_eq!(
            vector.to_cartesian().unwrap(),
            Vector3::new(1.0, 2.0, 3.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn strict_cartesian_projection_fails_for_zero_w() {
        let direction = Vector4::new(1.0, 2.0, 3.0, 0.0);

        assert_eq!(direction.to_cartesian(), Err(MathError::DivisionByZero));
    }

    #[test]
    fn converting_to_direction_normalizes_spatial_components() {
        let vector = Vector4::new(3.0, 0.0, 0.0, 5.0);

        assert_abs_diff_eq!(
            vector.to_direction(),
            Vector4::new(1.0, 0.0, 0.0, 0.0),
            epsilon = EPSILON
        );

        let norm = Vector4::new(1.0, 2.0, 3.0, 1.0).to_direction().norm();
        assert_abs_diff_eq!(norm, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn converting_spatially_zero_vector_to_direction_gives_zero_vector() {
        let vector = Vector4::new(0.0, 0.0, 0.0, 1.0);

        assert_eq!(vector.to_direction(), Vector4::zeros());
    }

    #[test]
    fn spatial_angle_between_perpendicular_directions_is_quarter_turn() {
        let angle = Vector4::right().spatial_angle(&Vector4::up());
        assert_abs_diff_eq!(angle, Radians(FRAC_PI_2), epsilon = EPSILON);
    }

    #[test]
    fn spatial_angle_ignores_w_component() {
        let a = Vector4::new(1.0, 0.0, 0.0, 1.0);
        let b = Vector4::new(0.0, 0.0, 1.0, -3.0);

        assert_abs_diff_eq!(a.spatial_angle(&b), Radians(FRAC_PI_2), epsilon = EPSILON);
    }

    #[test]
    fn spatial_angle_between_parallel_directions_does_not_produce_nan() {
        let vector = Vector4::new(0.6, 0.8, 0.0, 0.0);

        let angle = vector.spatial_angle(&vector);
        assert!(angle.0.is_finite());
        assert_abs_diff_eq!(angle, Radians(0.0), epsilon = EPSILON);

        let opposite = vector.spatial_angle(&-vector);
        assert_abs_diff_eq!(opposite, Radians(PI), epsilon = EPSILON);
    }

    #[test]
    fn spatial_angle_with_zero_vector_is_zero() {
        let angle = Vector4::zeros().spatial_angle(&Vector4::right());
        assert_eq!(angle, Radians(0.0));
    }

    #[test]
    fn lerping_points_at_midpoint_gives_halfway_point() {
        let a = Vector4::new(0.0, 0.0, 0.0, 1.0);
        let b = Vector4::new(2.0, 0.0, 0.0, 1.0);

        assert_eq!(
            Vector4::lerp_points(&a, &b, 0.5),
            Vector4::new(1.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn lerping_points_extrapolates_outside_unit_interval() {
        let a = Vector4::new(0.0, 1.0, 0.0, 1.0);
        let b = Vector4::new(2.0, 1.0, 0.0, 1.0);

        assert_eq!(
            Vector4::lerp_points(&a, &b, 2.0),
            Vector4::new(4.0, 1.0, 0.0, 1.0)
        );
        assert_eq!(
            Vector4::lerp_points(&a, &b, -1.0),
            Vector4::new(-2.0, 1.0, 0.0, 1.0)
        );
    }

    #[test]
    fn normalizing_nonzero_vector_gives_unit_norm() {
        let vector = Vector3::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(vector.normalized().norm(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector_gives_zero_vector() {
        assert_eq!(Vector3::zeros().normalized(), Vector3::zeros());
    }

    #[test]
    fn unit_vector_construction_works() {
        let unit = UnitVector3::normalized_from(Vector3::new(3.0, 0.0, 4.0));
        assert_abs_diff_eq!(unit.to_vector().norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(unit.x(), 0.6, epsilon = EPSILON);
        assert_abs_diff_eq!(unit.z(), 0.8, epsilon = EPSILON);

        assert_eq!(UnitVector3::unit_y().to_homogeneous(), Vector4::up());
    }

    #[test]
    fn homogeneous_direction_constants_have_zero_w() {
        for direction in [
            Vector4::right(),
            Vector4::left(),
            Vector4::up(),
            Vector4::down(),
            Vector4::forward(),
            Vector4::backward(),
        ] {
            assert_eq!(direction.w(), 0.0);
            assert_abs_diff_eq!(direction.spatial_norm(), 1.0);
        }
        assert_eq!(Vector4::origin().w(), 1.0);
        assert_eq!(Vector4::forward().z(), -1.0);
    }

    #[test]
    fn indexing_accesses_components_in_order() {
        let vector = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(vector[0], 1.0);
        assert_eq!(vector[1], 2.0);
        assert_eq!(vector[2], 3.0);
        assert_eq!(vector[3], 4.0);
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_bounds_panics() {
        let vector = Vector4::zeros();
        let _ = vector[4];
    }

    #[test]
    fn native_conversions_round_trip() {
        let vector = Vector4::new(1.0, -2.0, 3.5, 0.25);
        assert_eq!(Vector4::from_glam(vector.to_glam()), vector);

        let vector = Vector3::new(1.0, -2.0, 3.5);
        assert_eq!(Vector3::from_glam(vector.to_glam()), vector);

        let vector = Vector2::new(0.5, -0.5);
        assert_eq!(Vector2::from_glam(vector.to_glam()), vector);

        assert_eq!(<[f32; 3]>::from(Vector3::from([1.0, 2.0, 3.0])), [
            1.0, 2.0, 3.0
        ]);
    }
}
