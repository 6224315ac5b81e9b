use super::PixelPos;

/// A rectangle in atlas pixel space, stored as corners.
///
/// `x1`/`y1` are exclusive, matching the Minecraft wiki's skin layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtlasRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl AtlasRect {
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    /// Top-left corner.
    pub fn origin(&self) -> PixelPos {
        PixelPos::new(i64::from(self.x0), i64::from(self.y0))
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Whether two rectangles share at least one pixel.
    pub fn intersects(&self, other: &AtlasRect) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_and_origin() {
        let rect = AtlasRect::new(8, 0, 16, 8);
        assert_eq!(rect.width(), 8);
        assert_eq!(rect.height(), 8);
        assert_eq!(rect.origin(), PixelPos::new(8, 0));
    }

    #[test]
    fn test_touching_rects_do_not_intersect() {
        let a = AtlasRect::new(0, 8, 8, 16);
        let b = AtlasRect::new(8, 8, 16, 16);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&AtlasRect::new(4, 12, 12, 20)));
    }

    #[test]
    fn test_contains_is_exclusive_at_far_edge() {
        let rect = AtlasRect::new(4, 16, 8, 20);
        assert!(rect.contains(4, 16));
        assert!(rect.contains(7, 19));
        assert!(!rect.contains(8, 19));
        assert!(!rect.contains(7, 20));
    }
}
