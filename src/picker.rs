use glam::*;

use crate::{CameraTrait, Raycaster, ScalarField, Surface};

/// The on-screen rectangle of the canvas, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    /// The top left corner.
    pub pos: Vec2,
    /// The size.
    pub size: Vec2,
}

impl CanvasRect {
    /// Create a new canvas rectangle.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            pos: vec2(left, top),
            size: vec2(width, height),
        }
    }

    /// Create a canvas rectangle at the client origin.
    pub fn from_size(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
        }
    }

    /// Convert client coordinates to normalized device coordinates.
    ///
    /// Client y grows downwards while NDC y grows upwards. Returns [`None`] for a canvas without
    /// area.
    pub fn to_ndc(&self, client: Vec2) -> Option<Vec2> {
        if self.size.cmple(Vec2::ZERO).any() {
            return None;
        }

        let rel = (client - self.pos) / self.size;
        Some(vec2(rel.x * 2.0 - 1.0, -rel.y * 2.0 + 1.0))
    }
}

/// A pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The client position.
    pub client: Vec2,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(client_x: f32, client_y: f32) -> Self {
        Self {
            client: vec2(client_x, client_y),
        }
    }
}

/// A sample picked from a [`ScalarField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickResult {
    /// The column.
    pub x: u32,
    /// The row, counted from the top.
    pub y: u32,
    /// The sample value.
    pub value: u8,
}

impl PickResult {
    /// Get the position.
    pub fn pos(&self) -> UVec2 {
        uvec2(self.x, self.y)
    }
}

/// Everything needed to resolve pointer events in a view.
#[derive(Debug, Clone, Copy)]
pub struct Viewport<'a, C: CameraTrait> {
    /// The camera.
    pub camera: &'a C,
    /// The canvas rectangle.
    pub canvas: CanvasRect,
    /// The candidate surfaces.
    pub surfaces: &'a [Surface],
}

impl<'a, C: CameraTrait> Viewport<'a, C> {
    /// Create a new viewport.
    pub fn new(camera: &'a C, canvas: CanvasRect, surfaces: &'a [Surface]) -> Self {
        Self {
            camera,
            canvas,
            surfaces,
        }
    }
}

/// Map surface coordinates to the nearest sample of a `size` field.
///
/// `v = 0` is the bottom of the surface while row 0 is the top of the field.
pub fn uv_to_index(uv: Vec2, size: UVec2) -> UVec2 {
    let max = (size.max(UVec2::ONE) - UVec2::ONE).as_vec2();
    let x = (uv.x * max.x + 0.5).floor();
    let y = ((1.0 - uv.y) * max.y + 0.5).floor();

    vec2(x, y).clamp(Vec2::ZERO, max).as_uvec2()
}

/// A picker resolving pointer events to [`ScalarField`] samples.
#[derive(Debug, Default)]
pub struct FieldPicker {
    /// The raycaster.
    raycaster: Raycaster,
}

impl FieldPicker {
    /// Create a new picker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the raycaster.
    pub fn raycaster(&self) -> &Raycaster {
        &self.raycaster
    }

    /// Get the surface coordinates under the pointer on the nearest surface.
    pub fn pick_uv<C: CameraTrait>(
        &mut self,
        event: &PointerEvent,
        viewport: &Viewport<'_, C>,
    ) -> Option<Vec2> {
        let ndc = viewport.canvas.to_ndc(event.client)?;
        self.raycaster.set_from_camera(ndc, viewport.camera)?;

        self.raycaster
            .intersect_nearest(viewport.surfaces)
            .map(|hit| hit.uv())
    }

    /// Pick the sample of `field` under the pointer.
    ///
    /// Returns [`None`] if the pointer does not hit any surface.
    pub fn pick<C: CameraTrait>(
        &mut self,
        event: &PointerEvent,
        viewport: &Viewport<'_, C>,
        field: &ScalarField,
    ) -> Option<PickResult> {
        let uv = self.pick_uv(event, viewport)?;
        let pos = uv_to_index(uv, field.size());
        let value = field.get(pos.x, pos.y)?;

        log::trace!("Picked {pos} with value {value} at uv {uv}");

        Some(PickResult {
            x: pos.x,
            y: pos.y,
            value,
        })
    }
}
