//! Projection transforms targeting Vulkan clip space.
//!
//! Vulkan clip space is left-handed with the y-axis pointing down and
//! normalized depth in [0, 1], while view space follows the right-handed,
//! y-up convention with the camera looking along -z. Both projection kinds
//! bridge the two by composing a conventional projection matrix with the one
//! shared coordinate-flip matrix once at construction, so the stored matrix
//! can be handed to the GPU as-is.

use crate::{
    angle::{Angle, Radians},
    consts::f32::PI,
    matrix::Matrix4,
    point::Point3,
    vector::{Vector3, Vector4},
};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};

/// Matrix negating the y- and z-basis vectors, reorienting right-handed y-up
/// view space to Vulkan's left-handed, y-down clip orientation.
const fn coordinate_flip() -> Matrix4 {
    Matrix4::from_diagonal(&Vector4::new(1.0, -1.0, -1.0, 1.0))
}

/// A perspective projection that maps the view frustum pointing along the
/// negative z-axis to Vulkan clip space: x and y in [-1, 1] with y
/// increasing downward, and depth in [0, 1].
///
/// The projection parameters live only in the matrix entries; the accessors
/// and setters read and write them there.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct PerspectiveTransform {
    matrix: Matrix4,
}

/// An orthographic projection that maps an axis-aligned view box in front of
/// the camera to the same Vulkan clip space as [`PerspectiveTransform`],
/// using the identical coordinate flip.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct OrthographicTransform {
    matrix: Matrix4,
}

impl PerspectiveTransform {
    /// Creates a new perspective projection.
    ///
    /// # Note
    /// `aspect_ratio` is the ratio of width to height of the view plane.
    ///
    /// # Panics
    /// If `aspect_ratio` is not positive, `vertical_field_of_view` is not
    /// strictly between zero and a half turn, `near_distance` is not
    /// positive or `far_distance` does not exceed `near_distance`.
    pub fn new<A: Angle>(
        aspect_ratio: f32,
        vertical_field_of_view: A,
        near_distance: f32,
        far_distance: f32,
    ) -> Self {
        let fov = vertical_field_of_view.radians();
        assert!(aspect_ratio > 0.0, "aspect ratio must be positive");
        assert!(
            fov > 0.0 && fov < PI,
            "vertical field of view must lie strictly between 0 and half a turn"
        );
        assert!(near_distance > 0.0, "near distance must be positive");
        assert!(
            far_distance > near_distance,
            "far distance must exceed near distance"
        );

        let focal_length = 1.0 / (0.5 * fov).tan();
        let depth_scaling = far_distance / (far_distance - near_distance);

        let unflipped = Matrix4::from_columns(
            Vector4::new(focal_length / aspect_ratio, 0.0, 0.0, 0.0),
            Vector4::new(0.0, focal_length, 0.0, 0.0),
            Vector4::new(0.0, 0.0, depth_scaling, 1.0),
            Vector4::new(0.0, 0.0, -near_distance * depth_scaling, 0.0),
        );

        Self {
            matrix: unflipped * coordinate_flip(),
        }
    }

    /// Returns the projection matrix.
    #[inline]
    pub const fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    /// Returns the projection as a plain matrix.
    #[inline]
    pub const fn to_matrix(self) -> Matrix4 {
        self.matrix
    }

    /// Returns the ratio of width to height of the view frustum.
    pub fn aspect_ratio(&self) -> f32 {
        -self.matrix.element(1, 1) / self.matrix.element(0, 0)
    }

    /// Returns the vertical field of view angle.
    pub fn vertical_field_of_view(&self) -> Radians {
        Radians(2.0 * (-1.0 / self.matrix.element(1, 1)).atan())
    }

    /// Returns the near distance of the view frustum.
    pub fn near_distance(&self) -> f32 {
        self.matrix.element(2, 3) / self.matrix.element(2, 2)
    }

    /// Returns the far distance of the view frustum.
    pub fn far_distance(&self) -> f32 {
        self.matrix.element(2, 3) / (1.0 + self.matrix.element(2, 2))
    }

    /// Sets the ratio of width to height of the view frustum.
    ///
    /// # Panics
    /// If `aspect_ratio` is not positive.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        assert!(aspect_ratio > 0.0, "aspect ratio must be positive");
        *self.matrix.element_mut(0, 0) = -self.matrix.element(1, 1) / aspect_ratio;
    }

    /// Sets the vertical field of view angle.
    ///
    /// # Panics
    /// If `vertical_field_of_view` is not strictly between zero and half a
    /// turn.
    pub fn set_vertical_field_of_view<A: Angle>(&mut self, vertical_field_of_view: A) {
        let fov = vertical_field_of_view.radians();
        assert!(
            fov > 0.0 && fov < PI,
            "vertical field of view must lie strictly between 0 and half a turn"
        );

        let old_scaling = self.matrix.element(1, 1);
        let new_scaling = -1.0 / (0.5 * fov).tan();
        *self.matrix.element_mut(1, 1) = new_scaling;
        *self.matrix.element_mut(0, 0) *= new_scaling / old_scaling;
    }

    /// Sets the near and far distance of the view frustum.
    ///
    /// # Panics
    /// If `near_distance` is not positive or `far_distance` does not exceed
    /// it.
    pub fn set_near_and_far_distance(&mut self, near_distance: f32, far_distance: f32) {
        assert!(near_distance > 0.0, "near distance must be positive");
        assert!(
            far_distance > near_distance,
            "far distance must exceed near distance"
        );

        let depth_scaling = -far_distance / (far_distance - near_distance);
        *self.matrix.element_mut(2, 2) = depth_scaling;
        *self.matrix.element_mut(2, 3) = depth_scaling * near_distance;
    }

    /// Projects the given view-space point into clip space by applying the
    /// full projection matrix and performing the perspective divide.
    #[inline]
    pub fn project_point(&self, point: &Point3) -> Point3 {
        self.matrix.project_point(point)
    }

    /// Projects the given view-space point into clip space, including the
    /// perspective divide.
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        let m = &self.matrix;
        let inverse_denom = -1.0 / point.z();
        Point3::new(
            m.element(0, 0) * point.x() * inverse_denom,
            m.element(1, 1) * point.y() * inverse_denom,
            (m.element(2, 2) * point.z() + m.element(2, 3)) * inverse_denom,
        )
    }

    /// Projects the given view-space vector into clip space, including the
    /// perspective divide for the x- and y-components.
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        let m = &self.matrix;
        let inverse_denom = -1.0 / vector.z();
        Vector3::new(
            m.element(0, 0) * vector.x() * inverse_denom,
            m.element(1, 1) * vector.y() * inverse_denom,
            -m.element(2, 2),
        )
    }
}

impl_abs_diff_eq!(PerspectiveTransform, |a, b, epsilon| {
    a.matrix.abs_diff_eq(&b.matrix, epsilon)
});

impl_relative_eq!(PerspectiveTransform, |a, b, epsilon, max_relative| {
    a.matrix.relative_eq(&b.matrix, epsilon, max_relative)
});

impl OrthographicTransform {
    /// Creates a new orthographic projection for the given view box. The
    /// bounds are specified in right-handed y-up view space, with the near
    /// and far planes at `z = -near` and `z = -far`.
    ///
    /// # Panics
    /// If the extent of the view box along any axis is zero.
    pub fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        assert!(left != right, "view box must have nonzero width");
        assert!(bottom != top, "view box must have nonzero height");
        assert!(near != far, "view box must have nonzero depth");

        let scaling_x = Self::compute_scaling_x(left, right);
        let scaling_y = Self::compute_scaling_y(bottom, top);
        let scaling_z = Self::compute_scaling_z(near, far);

        // The coordinate flip negates view-space y, so the vertical bounds
        // enter the unflipped matrix with their signs swapped.
        let unflipped = Matrix4::from_columns(
            Vector4::new(scaling_x, 0.0, 0.0, 0.0),
            Vector4::new(0.0, scaling_y, 0.0, 0.0),
            Vector4::new(0.0, 0.0, scaling_z, 0.0),
            Vector4::new(
                scaling_x * Self::compute_translation_x(left, right),
                scaling_y * Self::compute_translation_y(bottom, top),
                scaling_z * Self::compute_translation_z(near, far),
                1.0,
            ),
        );

        Self {
            matrix: unflipped * coordinate_flip(),
        }
    }

    /// Creates a new orthographic projection for a view box of the given
    /// width and height centered on the view direction.
    ///
    /// Defined purely as [`Self::new`] over the symmetric bounds
    /// `(-width/2, width/2, -height/2, height/2)`.
    ///
    /// # Panics
    /// If the extent of the view box along any axis is zero.
    #[inline]
    pub fn symmetric(width: f32, height: f32, near: f32, far: f32) -> Self {
        Self::new(
            -0.5 * width,
            0.5 * width,
            -0.5 * height,
            0.5 * height,
            near,
            far,
        )
    }

    /// Returns the projection matrix.
    #[inline]
    pub const fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    /// Returns the projection as a plain matrix.
    #[inline]
    pub const fn to_matrix(self) -> Matrix4 {
        self.matrix
    }

    /// Sets the horizontal bounds of the view box.
    ///
    /// # Panics
    /// If `left` equals `right`.
    pub fn set_left_and_right(&mut self, left: f32, right: f32) {
        assert!(left != right, "view box must have nonzero width");
        let scaling_x = Self::compute_scaling_x(left, right);
        *self.matrix.element_mut(0, 0) = scaling_x;
        *self.matrix.element_mut(0, 3) = scaling_x * Self::compute_translation_x(left, right);
    }

    /// Sets the vertical bounds of the view box.
    ///
    /// # Panics
    /// If `bottom` equals `top`.
    pub fn set_bottom_and_top(&mut self, bottom: f32, top: f32) {
        assert!(bottom != top, "view box must have nonzero height");
        let scaling_y = Self::compute_scaling_y(bottom, top);
        *self.matrix.element_mut(1, 1) = -scaling_y;
        *self.matrix.element_mut(1, 3) = scaling_y * Self::compute_translation_y(bottom, top);
    }

    /// Sets the near and far plane distances of the view box.
    ///
    /// # Panics
    /// If `near` equals `far`.
    pub fn set_near_and_far(&mut self, near: f32, far: f32) {
        assert!(near != far, "view box must have nonzero depth");
        let scaling_z = Self::compute_scaling_z(near, far);
        *self.matrix.element_mut(2, 2) = -scaling_z;
        *self.matrix.element_mut(2, 3) = scaling_z * Self::compute_translation_z(near, far);
    }

    /// Projects the given view-space point into clip space by applying the
    /// full projection matrix.
    #[inline]
    pub fn project_point(&self, point: &Point3) -> Point3 {
        self.matrix.project_point(point)
    }

    /// Maps the given view-space point into clip space.
    pub fn transform_point(&self, point: &Point3) -> Point3 {
        let m = &self.matrix;
        Point3::new(
            m.element(0, 0) * point.x() + m.element(0, 3),
            m.element(1, 1) * point.y() + m.element(1, 3),
            m.element(2, 2) * point.z() + m.element(2, 3),
        )
    }

    /// Maps the given view-space vector into clip space. The translation
    /// terms do not apply to vectors.
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        let m = &self.matrix;
        Vector3::new(
            m.element(0, 0) * vector.x(),
            m.element(1, 1) * vector.y(),
            m.element(2, 2) * vector.z(),
        )
    }

    fn compute_translation_x(left: f32, right: f32) -> f32 {
        -0.5 * (left + right)
    }

    fn compute_translation_y(bottom: f32, top: f32) -> f32 {
        0.5 * (bottom + top)
    }

    fn compute_translation_z(near: f32, _far: f32) -> f32 {
        -near
    }

    fn compute_scaling_x(left: f32, right: f32) -> f32 {
        2.0 / (right - left)
    }

    fn compute_scaling_y(bottom: f32, top: f32) -> f32 {
        2.0 / (top - bottom)
    }

    fn compute_scaling_z(near: f32, far: f32) -> f32 {
        1.0 / (far - near)
    }
}

impl_abs_diff_eq!(OrthographicTransform, |a, b, epsilon| {
    a.matrix.abs_diff_eq(&b.matrix, epsilon)
});

impl_relative_eq!(OrthographicTransform, |a, b, epsilon, max_relative| {
    a.matrix.relative_eq(&b.matrix, epsilon, max_relative)
});
