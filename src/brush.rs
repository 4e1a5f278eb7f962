use std::ops::RangeInclusive;

use glam::*;

use crate::ScalarField;

/// The brush mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrushMode {
    /// Set samples to [`BrushMode::ADD_VALUE`].
    #[default]
    Add,

    /// Set samples to [`BrushMode::REMOVE_VALUE`].
    Remove,
}

impl BrushMode {
    /// The value written in [`BrushMode::Add`].
    pub const ADD_VALUE: u8 = u8::MAX;

    /// The value written in [`BrushMode::Remove`].
    pub const REMOVE_VALUE: u8 = 0;

    /// Get the value written by the mode.
    pub fn value(&self) -> u8 {
        match self {
            Self::Add => Self::ADD_VALUE,
            Self::Remove => Self::REMOVE_VALUE,
        }
    }

    /// Get the other mode.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Add => Self::Remove,
            Self::Remove => Self::Add,
        }
    }
}

impl std::fmt::Display for BrushMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Add => "Add",
            Self::Remove => "Remove",
        })
    }
}

/// A circular brush stamping a [`ScalarField`].
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    /// The size, never negative.
    size: f32,
    /// The mode.
    pub mode: BrushMode,
}

impl Brush {
    /// The default size.
    pub const DEFAULT_SIZE: f32 = 10.0;

    /// The maximum size.
    pub const MAX_SIZE: f32 = 1024.0;

    /// Create a new brush with the default size in [`BrushMode::Add`].
    pub fn new() -> Self {
        Self::new_with(Self::DEFAULT_SIZE, BrushMode::Add)
    }

    /// Create a new brush with all options.
    pub fn new_with(size: f32, mode: BrushMode) -> Self {
        let mut brush = Self { size: 0.0, mode };
        brush.set_size(size);
        brush
    }

    /// Get the size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Set the size.
    ///
    /// Negative and NaN sizes are clamped to zero, sizes above [`Brush::MAX_SIZE`] (including
    /// infinity) are clamped to it.
    pub fn set_size(&mut self, size: f32) {
        self.size = if size.is_nan() || size < 0.0 {
            log::warn!("Brush size {size} clamped to 0");
            0.0
        } else if size > Self::MAX_SIZE {
            log::warn!("Brush size {size} clamped to {}", Self::MAX_SIZE);
            Self::MAX_SIZE
        } else {
            size
        };
    }

    /// Toggle the mode.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Get the radius of the stamp, `(size + 1) / 2`.
    pub fn radius(&self) -> f32 {
        (self.size + 1.0) / 2.0
    }

    /// Get the offsets of the stamp relative to its center.
    ///
    /// An offset is in the stamp if its length is less than [`Brush::radius`], both axes are
    /// scanned over `[-ceil(radius), ceil(radius)]`.
    pub fn footprint(&self) -> impl Iterator<Item = IVec2> + use<> {
        let extent = self.extent();
        self.offsets(-extent..=extent, -extent..=extent)
    }

    /// Stamp the field at `center`, in field sample coordinates.
    ///
    /// Samples falling outside of the field are skipped, only the part of the stamp overlapping
    /// the field is scanned. Returns the number of samples written, the field is only marked
    /// dirty if it is not zero.
    pub fn apply(&self, field: &mut ScalarField, center: Vec2) -> usize {
        if !center.is_finite() {
            log::trace!("Brush skipped non-finite center {center}");
            return 0;
        }

        let value = self.mode.value();
        let extent = self.extent();
        let size = field.size().as_ivec2();

        // Rounding moves a sample by at most one, so one extra offset on each side is enough.
        let clip = |center: f32, len: i32| {
            let lo = (-center - 1.0).floor().max(-extent as f32) as i32;
            let hi = (len as f32 - center + 1.0).ceil().min(extent as f32) as i32;
            lo..=hi
        };

        let mut written = 0;
        for offset in self.offsets(clip(center.x, size.x), clip(center.y, size.y)) {
            let pos = (center + offset.as_vec2()).round().as_ivec2();
            if pos.cmpge(IVec2::ZERO).all() && field.set(pos.x as u32, pos.y as u32, value) {
                written += 1;
            }
        }

        log::trace!("Brush {} wrote {written} samples at {center}", self.mode);

        written
    }

    /// Get the half width of the scanned square, `ceil(radius)`.
    fn extent(&self) -> i32 {
        self.radius().ceil() as i32
    }

    /// Get the offsets within the ranges that are in the stamp.
    fn offsets(
        &self,
        xs: RangeInclusive<i32>,
        ys: RangeInclusive<i32>,
    ) -> impl Iterator<Item = IVec2> + use<> {
        let radius = self.radius();

        ys.flat_map(move |dy| xs.clone().map(move |dx| ivec2(dx, dy)))
            .filter(move |offset| offset.as_vec2().length() < radius)
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new()
    }
}
