use std::cell::Cell;

use glam::*;

use crate::{CameraTrait, Error, Hit, Ray, Surface};

/// A raycaster for picking [`Surface`]s.
///
/// Only [`SurfaceGeometry::Plane`](crate::SurfaceGeometry::Plane) surfaces can be hit. Other
/// candidates are skipped, and a warning is logged the first time it happens for a raycaster.
#[derive(Debug, Default)]
pub struct Raycaster {
    /// The current ray.
    ray: Option<Ray>,
    /// Whether skipping an unsupported surface has been reported.
    unsupported_reported: Cell<bool>,
}

impl Raycaster {
    /// Create a new raycaster without a ray.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current ray.
    pub fn ray(&self) -> Option<&Ray> {
        self.ray.as_ref()
    }

    /// Set the ray.
    pub fn set_ray(&mut self, ray: Option<Ray>) {
        self.ray = ray;
    }

    /// Set the ray from NDC of a camera.
    ///
    /// Returns the new ray, or [`None`] for a degenerate camera.
    pub fn set_from_camera(&mut self, ndc: Vec2, camera: &impl CameraTrait) -> Option<&Ray> {
        self.ray = Ray::from_ndc(ndc, camera);
        self.ray.as_ref()
    }

    /// Intersect the current ray with the candidates.
    ///
    /// Hits are sorted by ascending distance, ties keep the candidate order.
    pub fn intersect<'a>(&self, candidates: &'a [Surface]) -> Vec<Hit<'a>> {
        let Some(ray) = self.ray.as_ref() else {
            return Vec::new();
        };

        let mut hits = candidates
            .iter()
            .enumerate()
            .filter_map(|(index, surface)| match surface.intersect(ray) {
                Ok(hit) => hit.map(|hit| Hit {
                    hit,
                    index,
                    surface,
                }),
                Err(Error::UnsupportedGeometry(kind)) => {
                    if !self.unsupported_reported.replace(true) {
                        log::warn!("Skipping unsupported {kind} surface at candidate {index}");
                    }
                    None
                }
                Err(e) => {
                    log::error!("Unexpected intersection error: {e}");
                    None
                }
            })
            .collect::<Vec<_>>();

        hits.sort_by(|a, b| a.distance().total_cmp(&b.distance()));

        hits
    }

    /// Get the nearest hit of the current ray.
    pub fn intersect_nearest<'a>(&self, candidates: &'a [Surface]) -> Option<Hit<'a>> {
        self.intersect(candidates).into_iter().next()
    }
}
