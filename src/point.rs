//! Points.

use crate::vector::{Vector3, Vector4};
use approx::RelativeEq;
use bytemuck::{Pod, Zeroable};

/// A position in 3D space.
///
/// This is the type-level "point" counterpart to
/// [`UnitVector3`](crate::vector::UnitVector3): an affine location that
/// translations do act on. Its homogeneous representation has `w = 1`.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Point3 {
    inner: glam::Vec3,
}

impl Point3 {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_glam(glam::Vec3::new(x, y, z))
    }

    /// Creates the origin point.
    #[inline]
    pub const fn origin() -> Self {
        Self::from_glam(glam::Vec3::ZERO)
    }

    /// The x-coordinate.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-coordinate.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-coordinate.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.inner.z
    }

    /// Returns the point as the displacement vector from the origin.
    #[inline]
    pub const fn to_vector(&self) -> Vector3 {
        Vector3::from_glam(self.inner)
    }

    /// Returns the homogeneous representation of the point, with `w = 1`.
    #[inline]
    pub const fn to_homogeneous(&self) -> Vector4 {
        Vector4::new(self.x(), self.y(), self.z(), 1.0)
    }

    /// Creates the point corresponding to the given homogeneous coordinates,
    /// applying the lenient point conversion of [`Vector4::to_point`]
    /// (perspective divide, with `w ≈ 0` treated as a direction to promote).
    #[inline]
    pub fn from_homogeneous(homogeneous: &Vector4) -> Self {
        let point = homogeneous.to_point();
        Self::new(point.x(), point.y(), point.z())
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

impl From<Vector3> for Point3 {
    #[inline]
    fn from(vector: Vector3) -> Self {
        Self::from_glam(vector.to_glam())
    }
}

impl From<Point3> for Vector3 {
    #[inline]
    fn from(point: Point3) -> Self {
        point.to_vector()
    }
}

impl From<[f32; 3]> for Point3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3> for [f32; 3] {
    #[inline]
    fn from(point: Point3) -> Self {
        [point.x(), point.y(), point.z()]
    }
}

impl_binop!(Add, add, Point3, Vector3, Point3, |a, b| {
    Point3::from_glam(a.inner + b.to_glam())
});

impl_binop!(Sub, sub, Point3, Point3, Vector3, |a, b| {
    Vector3::from_glam(a.inner - b.inner)
});

impl_abs_diff_eq!(Point3, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(Point3, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});
