//! Coordinate resolution between skin space and photo space.
//!
//! Offsets are applied here and only here; the mapping builder uses the
//! resolved positions as-is.

mod fallback;

pub use fallback::{select_fallback, ColourKey};

use crate::layout::PartSpec;
use crate::types::{Offset, PixelPos};

/// Resolve where a part starts in the (normalized) photo.
///
/// Returns `None` for parts with no photo counterpart. No bounds checking is
/// done; a rectangle pushed off the photo is caught by the compositor.
pub fn resolve_photo_origin(spec: &PartSpec, offset: Offset) -> Option<PixelPos> {
    spec.photo.map(|(x, y)| PixelPos::new(x, y).shifted(offset))
}

/// Resolve where a part starts in the skin. Every part has one.
pub fn resolve_atlas_origin(spec: &PartSpec) -> PixelPos {
    spec.atlas.origin()
}
