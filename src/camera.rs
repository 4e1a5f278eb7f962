use std::ops::{Range, RangeInclusive};

use glam::*;

/// A camera the picking core can cast rays from.
///
/// Both matrices must follow the OpenGL clip space convention, i.e. NDC depth ranges over
/// `[-1, 1]`, and `projection * view` must be invertible for rays to be produced.
pub trait CameraTrait {
    /// Get the view matrix.
    fn view(&self) -> Mat4;

    /// Get the projection matrix.
    fn projection(&self) -> Mat4;

    /// Get the combined projection and view matrix.
    fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

/// An orthographic camera looking down the negative z axis.
#[derive(Debug, Clone)]
pub struct OrthographicCamera {
    /// The position of the camera.
    pub pos: Vec3,
    /// The left plane.
    pub left: f32,
    /// The right plane.
    pub right: f32,
    /// The top plane.
    pub top: f32,
    /// The bottom plane.
    pub bottom: f32,
    /// The z range of the camera.
    pub z: Range<f32>,
    /// The zoom.
    zoom: f32,
    /// The zoom limit.
    zoom_limit: RangeInclusive<f32>,
}

impl OrthographicCamera {
    /// The default position.
    pub const DEFAULT_POS: Vec3 = Vec3::new(0.0, 0.0, 5.0);

    /// The default zoom limit.
    pub const DEFAULT_ZOOM_LIMIT: RangeInclusive<f32> = 0.1..=100.0;

    /// Create a new camera.
    pub fn new(left: f32, right: f32, top: f32, bottom: f32, z: Range<f32>) -> Self {
        Self::new_with(left, right, top, bottom, z, Self::DEFAULT_ZOOM_LIMIT)
    }

    /// Create a new camera with all options.
    pub fn new_with(
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        z: Range<f32>,
        zoom_limit: RangeInclusive<f32>,
    ) -> Self {
        Self {
            pos: Self::DEFAULT_POS,
            left,
            right,
            top,
            bottom,
            z,
            zoom: 1.0,
            zoom_limit,
        }
    }

    /// Create a new camera spanning `[-aspect, aspect] x [-1, 1]`.
    pub fn from_aspect(aspect: f32, z: Range<f32>) -> Self {
        Self::new(-aspect, aspect, 1.0, -1.0, z)
    }

    /// Get the zoom.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Pan the camera by a delta in NDC units, with y pointing down as on screen.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.pos.x -= dx / self.zoom * (self.right - self.left) / 2.0;
        self.pos.y += dy / self.zoom * (self.top - self.bottom) / 2.0;
    }

    /// Zoom in by a factor.
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).min(*self.zoom_limit.end());
    }

    /// Zoom out by a factor.
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).max(*self.zoom_limit.start());
    }

    /// Set the horizontal extent from the aspect ratio of the canvas.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.left = -aspect;
        self.right = aspect;
    }
}

impl CameraTrait for OrthographicCamera {
    fn view(&self) -> Mat4 {
        Mat4::from_translation(-self.pos)
    }

    fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(
            self.left / self.zoom,
            self.right / self.zoom,
            self.bottom / self.zoom,
            self.top / self.zoom,
            self.z.start,
            self.z.end,
        )
    }
}

/// A perspective camera.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// The position of the camera.
    pub pos: Vec3,
    /// The z range of the camera.
    pub z: Range<f32>,
    /// The vertical FOV.
    pub vertical_fov: f32,
    /// The aspect ratio.
    pub aspect_ratio: f32,
    /// The pitch.
    pub pitch: f32,
    /// The yaw.
    pub yaw: f32,
}

impl PerspectiveCamera {
    /// Up direction.
    pub const UP: Vec3 = Vec3::Y;

    /// The pitch limit.
    pub const PITCH_LIMIT: Range<f32> =
        -std::f32::consts::FRAC_PI_2 + 1e-6..std::f32::consts::FRAC_PI_2 - 1e-6;

    /// Create a new camera looking down the negative z axis.
    pub fn new(z: Range<f32>, vertical_fov: f32, aspect_ratio: f32) -> Self {
        Self {
            pos: Vec3::ZERO,
            z,
            vertical_fov,
            aspect_ratio,
            pitch: 0.0,
            yaw: std::f32::consts::PI,
        }
    }

    /// Apply pitch.
    pub fn pitch_by(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta).clamp(Self::PITCH_LIMIT.start, Self::PITCH_LIMIT.end);
    }

    /// Apply yaw.
    pub fn yaw_by(&mut self, delta: f32) {
        self.yaw = (self.yaw + delta).rem_euclid(2.0 * std::f32::consts::PI);
    }

    /// Get the forward vector.
    pub fn get_forward(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }
}

impl CameraTrait for PerspectiveCamera {
    fn view(&self) -> Mat4 {
        Mat4::look_to_rh(self.pos, self.get_forward(), Self::UP)
    }

    fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.vertical_fov,
            self.aspect_ratio,
            self.z.start,
            self.z.end,
        )
    }
}

/// A camera given directly by its matrices, e.g. ones owned by an external scene graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixCamera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl CameraTrait for MatrixCamera {
    fn view(&self) -> Mat4 {
        self.view
    }

    fn projection(&self) -> Mat4 {
        self.projection
    }
}

impl<C: CameraTrait> CameraTrait for &C {
    fn view(&self) -> Mat4 {
        (**self).view()
    }

    fn projection(&self) -> Mat4 {
        (**self).projection()
    }
}
