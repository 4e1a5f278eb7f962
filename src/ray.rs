use glam::*;

use crate::CameraTrait;

/// A ray with a unit length direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin.
    pub origin: Vec3,
    /// The direction, always normalized.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    ///
    /// Returns [`None`] if `direction` cannot be normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        Some(Self {
            origin,
            direction: direction.try_normalize()?,
        })
    }

    /// Create a ray through normalized device coordinates of a camera.
    ///
    /// The near point at NDC depth -1 becomes the origin and the direction points towards the far
    /// point at depth 1.
    ///
    /// Returns [`None`] if the camera's projection times view matrix is singular, in which case no
    /// meaningful ray exists.
    pub fn from_ndc(ndc: Vec2, camera: &impl CameraTrait) -> Option<Self> {
        let view_proj = camera.view_projection();
        if view_proj.determinant() == 0.0 {
            log::trace!("Singular view projection matrix, no ray produced");
            return None;
        }

        // Large view extents give tiny but valid determinants.
        let inv = view_proj.inverse();
        let near = inv.project_point3(ndc.extend(-1.0));
        let far = inv.project_point3(ndc.extend(1.0));

        if !near.is_finite() || !far.is_finite() {
            log::trace!("Non-finite unprojection, no ray produced");
            return None;
        }

        Self::new(near, far - near)
    }

    /// Get the point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
