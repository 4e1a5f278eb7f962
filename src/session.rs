use glam::*;

use crate::{
    Brush, BrushMode, CameraTrait, Error, FieldPicker, FieldSync, PickResult, PointerEvent,
    RegionStats, ScalarField, Viewport,
};

/// The identifier of a [`MaskLayer`] in a [`SegmentationSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaskId(u32);

impl std::fmt::Display for MaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The observer of a [`SegmentationSession`].
///
/// Callbacks are delivered synchronously and in order, once per triggering event.
pub trait SessionObserver {
    /// The sample under the pointer changed, [`None`] if nothing is under the pointer.
    fn on_pick(&mut self, _pick: Option<PickResult>) {}

    /// The active mask was painted and its statistics recomputed.
    fn on_mask_update(&mut self, _mask: MaskId, _stats: &RegionStats) {}

    /// The pointer left the canvas, any hover readout should be cleared.
    fn on_pointer_leave(&mut self) {}
}

impl SessionObserver for () {}

/// The state of a [`SegmentationSession`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The pointer is up, moves only pick.
    #[default]
    Idle,

    /// The pointer is down, moves paint the active mask.
    Drawing,
}

/// A field together with the backend mirroring it.
struct Layer {
    field: ScalarField,
    backend: Option<Box<dyn FieldSync>>,
}

impl Layer {
    fn sync(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            self.field.sync_to(backend);
        }
    }
}

impl std::fmt::Debug for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layer")
            .field("field", &self.field)
            .field("backend", &self.backend.is_some())
            .finish()
    }
}

/// A mask layer of a [`SegmentationSession`].
#[derive(Debug)]
pub struct MaskLayer {
    id: MaskId,
    layer: Layer,
    stats: RegionStats,
}

impl MaskLayer {
    /// Get the ID.
    pub fn id(&self) -> MaskId {
        self.id
    }

    /// Get the mask field.
    pub fn field(&self) -> &ScalarField {
        &self.layer.field
    }

    /// Get the statistics of the data selected by the mask.
    pub fn stats(&self) -> &RegionStats {
        &self.stats
    }
}

/// An interactive segmentation session.
///
/// The session paints the active mask layer with its [`Brush`] while the pointer is down, and
/// keeps the [`RegionStats`] of the data selected by every mask layer up to date.
#[derive(Debug)]
pub struct SegmentationSession {
    /// The state.
    state: SessionState,
    /// The brush.
    brush: Brush,
    /// The picker.
    picker: FieldPicker,

    /// The data layer.
    data: Layer,
    /// The mask layers.
    masks: Vec<MaskLayer>,
    /// The active mask layer.
    active_mask: Option<MaskId>,
    /// The next mask ID.
    next_mask_id: u32,
}

impl SegmentationSession {
    /// Create a new session over a data field with the default brush.
    pub fn new(data: ScalarField) -> Self {
        Self::new_with(data, None, Brush::new())
    }

    /// Create a new session with all options.
    pub fn new_with(
        data: ScalarField,
        data_backend: Option<Box<dyn FieldSync>>,
        brush: Brush,
    ) -> Self {
        log::debug!("Creating segmentation session over {} data", data.size());
        let mut data = Layer {
            field: data,
            backend: data_backend,
        };
        data.sync();

        log::info!("Segmentation session created");

        Self {
            state: SessionState::Idle,
            brush,
            picker: FieldPicker::new(),

            data,
            masks: Vec::new(),
            active_mask: None,
            next_mask_id: 0,
        }
    }

    /// Get the state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Get the brush.
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Set the brush size.
    pub fn set_brush_size(&mut self, size: f32) {
        self.brush.set_size(size);
    }

    /// Set the brush mode.
    pub fn set_brush_mode(&mut self, mode: BrushMode) {
        self.brush.mode = mode;
    }

    /// Toggle the brush mode, returning the new mode.
    pub fn toggle_brush_mode(&mut self) -> BrushMode {
        self.brush.toggle_mode();
        self.brush.mode
    }

    /// Get the data field.
    pub fn data(&self) -> &ScalarField {
        &self.data.field
    }

    /// Mutate the data field.
    ///
    /// `f` receives the samples and the size of the field. The data backend is synced and the
    /// statistics of every mask layer are recomputed afterwards.
    pub fn update_data(&mut self, f: impl FnOnce(&mut [u8], UVec2)) {
        self.data.field.update(f);
        self.data.sync();
        self.refresh_stats();
    }

    /// Add a new empty mask layer and make it active.
    pub fn add_mask_layer(&mut self, backend: Option<Box<dyn FieldSync>>) -> MaskId {
        let mut mask = self.data.field.clone();
        mask.fill(0);

        self.push_mask_layer(mask, backend)
    }

    /// Add a mask layer from an existing mask field and make it active.
    pub fn add_mask_layer_with(
        &mut self,
        mask: ScalarField,
        backend: Option<Box<dyn FieldSync>>,
    ) -> Result<MaskId, Error> {
        if mask.size() != self.data.field.size() {
            return Err(Error::FieldSizeMismatch {
                expected: self.data.field.size(),
                actual: mask.size(),
            });
        }

        Ok(self.push_mask_layer(mask, backend))
    }

    /// Get the mask layers.
    pub fn mask_layers(&self) -> &[MaskLayer] {
        &self.masks
    }

    /// Get a mask layer.
    pub fn mask_layer(&self, id: MaskId) -> Result<&MaskLayer, Error> {
        self.masks
            .iter()
            .find(|layer| layer.id == id)
            .ok_or(Error::MaskLayerNotFound(id))
    }

    /// Get the active mask layer ID.
    pub fn active_mask(&self) -> Option<MaskId> {
        self.active_mask
    }

    /// Set the active mask layer.
    pub fn set_active_mask(&mut self, id: MaskId) -> Result<(), Error> {
        self.mask_layer(id)?;
        self.active_mask = Some(id);

        log::debug!("Mask layer {id} activated");

        Ok(())
    }

    /// Recompute the statistics of every mask layer.
    pub fn refresh_stats(&mut self) {
        let data = &self.data.field;
        for layer in self.masks.iter_mut() {
            layer.stats = RegionStats::compute(data, &layer.layer.field).unwrap_or_else(|e| {
                log::error!("Failed to compute statistics of mask layer {}: {e}", layer.id);
                RegionStats::EMPTY
            });
        }
    }

    /// Handle the pointer going down, starting a stroke.
    pub fn pointer_down<C: CameraTrait>(
        &mut self,
        viewport: &Viewport<'_, C>,
        event: &PointerEvent,
        observer: &mut impl SessionObserver,
    ) {
        log::debug!("Stroke started");
        self.state = SessionState::Drawing;
        self.stroke(viewport, event, observer);
    }

    /// Handle the pointer moving.
    ///
    /// While drawing, the active mask is painted first. The data sample under the pointer is
    /// reported in both states.
    pub fn pointer_move<C: CameraTrait>(
        &mut self,
        viewport: &Viewport<'_, C>,
        event: &PointerEvent,
        observer: &mut impl SessionObserver,
    ) {
        if self.state == SessionState::Drawing {
            self.stroke(viewport, event, observer);
        }

        let pick = self.picker.pick(event, viewport, &self.data.field);
        observer.on_pick(pick);
    }

    /// Handle the pointer going up, ending the stroke.
    pub fn pointer_up(&mut self) {
        if self.state == SessionState::Drawing {
            log::debug!("Stroke ended");
        }
        self.state = SessionState::Idle;
    }

    /// Handle the pointer leaving the canvas, ending the stroke.
    pub fn pointer_leave(&mut self, observer: &mut impl SessionObserver) {
        self.pointer_up();
        observer.on_pointer_leave();
    }

    /// Paint the active mask at the pointer.
    fn stroke<C: CameraTrait>(
        &mut self,
        viewport: &Viewport<'_, C>,
        event: &PointerEvent,
        observer: &mut impl SessionObserver,
    ) {
        let Some(id) = self.active_mask else {
            log::trace!("No active mask layer to paint");
            return;
        };

        let Some(layer) = self.masks.iter_mut().find(|layer| layer.id == id) else {
            log::error!("Active mask layer {id} not found");
            return;
        };

        let Some(pick) = self.picker.pick(event, viewport, &layer.layer.field) else {
            return;
        };

        self.brush.apply(&mut layer.layer.field, pick.pos().as_vec2());
        layer.layer.sync();

        layer.stats = match RegionStats::compute(&self.data.field, &layer.layer.field) {
            Ok(stats) => stats,
            Err(e) => {
                log::error!("Failed to compute statistics of mask layer {id}: {e}");
                RegionStats::EMPTY
            }
        };

        observer.on_mask_update(id, &layer.stats);
    }

    fn push_mask_layer(
        &mut self,
        mask: ScalarField,
        backend: Option<Box<dyn FieldSync>>,
    ) -> MaskId {
        let id = MaskId(self.next_mask_id);
        self.next_mask_id += 1;

        let mut layer = Layer {
            field: mask,
            backend,
        };
        layer.sync();

        let stats = RegionStats::compute(&self.data.field, &layer.field).unwrap_or_else(|e| {
            log::error!("Failed to compute statistics of mask layer {id}: {e}");
            RegionStats::EMPTY
        });

        self.masks.push(MaskLayer { id, layer, stats });
        self.active_mask = Some(id);

        log::debug!("Mask layer {id} added");

        id
    }
}
