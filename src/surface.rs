use glam::*;

use crate::{Error, PlaneHit, Ray, intersect_plane};

/// The geometry of a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceGeometry {
    /// A rectangle in the local `z = 0` plane, centered at the origin.
    Plane { width: f32, height: f32 },

    /// An axis aligned box centered at the origin.
    ///
    /// Boxes can be placed in a scene but cannot be picked.
    Box { width: f32, height: f32, depth: f32 },
}

impl SurfaceGeometry {
    /// Get the name of the geometry kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Plane { .. } => "plane",
            Self::Box { .. } => "box",
        }
    }
}

/// A surface placed in the world by a model matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// The geometry.
    pub geometry: SurfaceGeometry,
    /// The model matrix.
    pub model: Mat4,
}

impl Surface {
    /// Create a new plane surface at the origin.
    pub fn plane(width: f32, height: f32) -> Self {
        Self {
            geometry: SurfaceGeometry::Plane { width, height },
            model: Mat4::IDENTITY,
        }
    }

    /// Create a new box surface at the origin.
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self {
            geometry: SurfaceGeometry::Box {
                width,
                height,
                depth,
            },
            model: Mat4::IDENTITY,
        }
    }

    /// Replace the model matrix.
    pub fn with_model(mut self, model: Mat4) -> Self {
        self.model = model;
        self
    }

    /// Translate the surface.
    pub fn translated(mut self, offset: Vec3) -> Self {
        self.model = Mat4::from_translation(offset) * self.model;
        self
    }

    /// Intersect a ray with the surface.
    ///
    /// Returns [`Error::UnsupportedGeometry`] for anything but [`SurfaceGeometry::Plane`].
    pub fn intersect(&self, ray: &Ray) -> Result<Option<PlaneHit>, Error> {
        match self.geometry {
            SurfaceGeometry::Plane { width, height } => {
                Ok(intersect_plane(ray, &self.model, vec2(width, height)))
            }
            other => Err(Error::UnsupportedGeometry(other.kind())),
        }
    }
}

/// A ray hit on one of the candidate surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a> {
    /// The plane hit.
    pub hit: PlaneHit,
    /// The index of the surface in the candidate list.
    pub index: usize,
    /// The surface.
    pub surface: &'a Surface,
}

impl Hit<'_> {
    /// Get the distance along the ray.
    pub fn distance(&self) -> f32 {
        self.hit.distance
    }

    /// Get the surface coordinates.
    pub fn uv(&self) -> Vec2 {
        self.hit.uv
    }
}
