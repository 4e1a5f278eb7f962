use glam::*;

use crate::Ray;

/// The intersection of a [`Ray`] with a bounded plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    /// The distance along the ray, never negative.
    pub distance: f32,
    /// The intersection point in world space.
    pub point: Vec3,
    /// The surface coordinates, both in `[0, 1]`.
    ///
    /// `u` grows with local x and `v` grows with local y.
    pub uv: Vec2,
    /// The plane normal in world space.
    pub normal: Vec3,
}

/// Rays closer to parallel than this are treated as missing the plane.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Intersect a ray with the `z = 0` plane of a `width` x `height` rectangle centered at the local
/// origin and placed in the world by `model`.
///
/// Parallel rays, intersections behind the ray origin and points outside the rectangle are all
/// misses.
pub fn intersect_plane(ray: &Ray, model: &Mat4, size: Vec2) -> Option<PlaneHit> {
    if size.cmple(Vec2::ZERO).any() || model.determinant() == 0.0 {
        return None;
    }
    let inv_model = model.inverse();

    let normal = inv_model
        .transpose()
        .transform_vector3(Vec3::Z)
        .try_normalize()?;
    let origin = model.transform_point3(Vec3::ZERO);

    let denom = normal.dot(ray.direction);
    if denom.abs() <= PARALLEL_EPSILON {
        return None;
    }

    let t = (origin - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }

    let point = ray.at(t);
    let local = inv_model.transform_point3(point).truncate();

    let half = size / 2.0;
    if local.x < -half.x || local.x > half.x || local.y < -half.y || local.y > half.y {
        return None;
    }

    let uv = ((local + half) / size).clamp(Vec2::ZERO, Vec2::ONE);

    Some(PlaneHit {
        distance: t,
        point,
        uv,
        normal,
    })
}
