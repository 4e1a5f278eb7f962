//! Interactive picking and mask painting over 2D data textures.
//!
//! A [`SegmentationSession`] turns pointer events into [`ScalarField`] indices by casting a
//! [`Ray`] from a camera onto planar [`Surface`]s, paints the active mask layer with a circular
//! [`Brush`], and keeps the [`RegionStats`] of the masked data up to date. Field mirrors on the
//! GPU are kept in sync through [`FieldSync`], e.g. with a [`FieldTexture`].

mod brush;
mod camera;
mod error;
mod field;
mod picker;
mod plane;
mod ray;
mod raycaster;
mod session;
mod stats;
mod surface;
mod texture;

pub use glam;
pub use wgpu;

pub use brush::*;
pub use camera::*;
pub use error::*;
pub use field::*;
pub use picker::*;
pub use plane::*;
pub use ray::*;
pub use raycaster::*;
pub use session::*;
pub use stats::*;
pub use surface::*;
pub use texture::*;
