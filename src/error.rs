use glam::*;
use thiserror::Error;

use crate::MaskId;

#[derive(Debug, Error)]
pub enum Error {
    #[error("field size must be non-zero, got {width}x{height}")]
    FieldSizeZero { width: u32, height: u32 },
    #[error("field expects {expected} samples, but {actual} were provided")]
    FieldSampleCountMismatch { expected: usize, actual: usize },
    #[error("field size mismatch, expected {expected}, got {actual}")]
    FieldSizeMismatch { expected: UVec2, actual: UVec2 },
    #[error("mask layer {0} not found")]
    MaskLayerNotFound(MaskId),
    #[error("intersection against {0} geometry is not supported")]
    UnsupportedGeometry(&'static str),
}
