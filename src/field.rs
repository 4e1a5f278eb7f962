use glam::*;

use crate::{Error, FieldSync};

/// A 2D field of `u8` samples backing a data texture.
///
/// Samples are stored row-major with the origin at the top left, so sample `(x, y)` lives at
/// `y * width + x`.
///
/// Every mutation marks the field dirty. A dirty field should be synced to its rendering
/// backend with [`ScalarField::sync_to`] once all mutations of a user action are applied.
#[derive(Clone)]
pub struct ScalarField {
    /// The size.
    size: UVec2,
    /// The samples.
    samples: Vec<u8>,
    /// Whether the samples changed since the last sync.
    dirty: bool,
}

impl ScalarField {
    /// Create a new field filled with zeros.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        Self::from_samples(width, height, vec![0; width as usize * height as usize])
    }

    /// Create a new field from samples.
    pub fn from_samples(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::FieldSizeZero { width, height });
        }

        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(Error::FieldSampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            size: uvec2(width, height),
            samples,
            dirty: true,
        })
    }

    /// Create a new field by evaluating `f(x, y)` for every sample.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Result<Self, Error> {
        let samples = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();

        Self::from_samples(width, height, samples)
    }

    /// Get the width.
    pub fn width(&self) -> u32 {
        self.size.x
    }

    /// Get the height.
    pub fn height(&self) -> u32 {
        self.size.y
    }

    /// Get the size.
    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Get the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the field has no samples, which never happens for a constructed field.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the samples.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Get the index of `(x, y)`, or [`None`] if out of bounds.
    pub fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.size.x && y < self.size.y).then(|| y as usize * self.size.x as usize + x as usize)
    }

    /// Get the sample at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.index(x, y).map(|i| self.samples[i])
    }

    /// Set the sample at `(x, y)`.
    ///
    /// Out of bounds writes are ignored and return `false`.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.samples[i] = value;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Fill every sample with `value`.
    pub fn fill(&mut self, value: u8) {
        self.samples.fill(value);
        self.dirty = true;
    }

    /// Mutate the samples in place.
    ///
    /// `f` receives the samples and the size of the field.
    pub fn update(&mut self, f: impl FnOnce(&mut [u8], UVec2)) {
        f(&mut self.samples, self.size);
        self.dirty = true;
    }

    /// Check whether the field changed since the last sync.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Sync the field to a rendering backend if it is dirty.
    ///
    /// Returns whether the backend was synced.
    pub fn sync_to(&mut self, backend: &mut (impl FieldSync + ?Sized)) -> bool {
        if !self.dirty {
            return false;
        }

        backend.sync(self);
        self.dirty = false;

        true
    }
}

impl std::fmt::Debug for ScalarField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarField")
            .field("size", &self.size)
            .field("samples", &format_args!("[u8; {}]", self.samples.len()))
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl PartialEq for ScalarField {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.samples == other.samples
    }
}

impl Eq for ScalarField {}
