//! Shared geometry used by every stage of the pipeline.

mod rect;

pub use rect::AtlasRect;

use serde::Serialize;

/// A signed pixel coordinate.
///
/// Photo-space coordinates can go negative once an offset is applied, so
/// positions stay signed until the compositor checks them against a real image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PixelPos {
    pub x: i64,
    pub y: i64,
}

impl PixelPos {
    pub const ORIGIN: PixelPos = PixelPos { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift this position by an offset.
    pub fn shifted(self, offset: Offset) -> Self {
        Self {
            x: self.x + i64::from(offset.x),
            y: self.y + i64::from(offset.y),
        }
    }
}

/// Caller supplied shift applied to every photo-space coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
