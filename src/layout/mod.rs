//! The static skin layout.
//!
//! Each body part face has a fixed rectangle in the 64x64 skin and, for the
//! faces a front-facing photo can show, a fixed top-left corner in the photo.

mod parts;

pub use parts::PARTS;

use crate::types::AtlasRect;

/// Skin width in pixels.
pub const SKIN_WIDTH: u32 = 64;
/// Skin height in pixels.
pub const SKIN_HEIGHT: u32 = 64;

/// One named face of the player model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartSpec {
    /// Unique part name, e.g. `"headFront"`.
    pub name: &'static str,
    /// Where the face lives in the skin.
    pub atlas: AtlasRect,
    /// Top-left corner of the face in an unscaled, unshifted photo.
    /// `None` when a photo cannot show this face and it must be painted.
    pub photo: Option<(i64, i64)>,
}

impl PartSpec {
    /// Build a part from a wiki table row:
    /// `[skinX0, skinY0, skinX1, skinY1, photoX, photoY]`, where a photo
    /// corner of `(-1, -1)` marks a face with no photo counterpart.
    pub const fn from_row(name: &'static str, row: [i64; 6]) -> Self {
        let photo = if row[4] == -1 && row[5] == -1 {
            None
        } else {
            Some((row[4], row[5]))
        };
        Self {
            name,
            atlas: AtlasRect::new(row[0] as u32, row[1] as u32, row[2] as u32, row[3] as u32),
            photo,
        }
    }

    pub fn width(&self) -> u32 {
        self.atlas.width()
    }

    pub fn height(&self) -> u32 {
        self.atlas.height()
    }

    /// Whether this face can be taken from a photo.
    pub fn in_photo(&self) -> bool {
        self.photo.is_some()
    }
}

/// Iterate over every part in table order.
pub fn parts() -> impl Iterator<Item = &'static PartSpec> {
    PARTS.iter()
}

/// Look up a part by name.
pub fn part(name: &str) -> Option<&'static PartSpec> {
    PARTS.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_thirty_six_unique_parts() {
        assert_eq!(PARTS.len(), 36);
        let names: HashSet<_> = parts().map(|p| p.name).collect();
        assert_eq!(names.len(), 36);
    }

    #[test]
    fn test_extents_are_positive() {
        for p in parts() {
            assert!(p.width() > 0, "{} has zero width", p.name);
            assert!(p.height() > 0, "{} has zero height", p.name);
        }
    }

    #[test]
    fn test_rects_fit_in_skin() {
        for p in parts() {
            assert!(p.atlas.x1 <= SKIN_WIDTH, "{} overflows horizontally", p.name);
            assert!(p.atlas.y1 <= SKIN_HEIGHT, "{} overflows vertically", p.name);
        }
    }

    #[test]
    fn test_rects_do_not_overlap() {
        for (i, a) in PARTS.iter().enumerate() {
            for b in &PARTS[i + 1..] {
                assert!(
                    !a.atlas.intersects(&b.atlas),
                    "{} overlaps {}",
                    a.name,
                    b.name
                );
            }
        }
    }

    #[test]
    fn test_every_pixel_belongs_to_at_most_one_part() {
        let mut covered = 0;
        for y in 0..SKIN_HEIGHT {
            for x in 0..SKIN_WIDTH {
                let owners = parts().filter(|p| p.atlas.contains(x, y)).count();
                assert!(owners <= 1, "pixel ({x}, {y}) has {owners} owners");
                covered += owners;
            }
        }
        let area: u32 = parts().map(|p| p.width() * p.height()).sum();
        assert_eq!(covered as u32, area);
    }

    #[test]
    fn test_sentinel_row_has_no_photo() {
        let head_bottom = part("headBottom").unwrap();
        assert!(!head_bottom.in_photo());
        assert_eq!(head_bottom.atlas, AtlasRect::new(16, 0, 24, 8));

        let head_front = part("headFront").unwrap();
        assert_eq!(head_front.photo, Some((24, 8)));
    }

    #[test]
    fn test_photo_faces() {
        let in_photo: Vec<_> = parts().filter(|p| p.in_photo()).map(|p| p.name).collect();
        assert_eq!(in_photo.len(), 16);
        assert!(in_photo.contains(&"torsoFront"));
        assert!(!in_photo.contains(&"torsoBack"));
    }

    #[test]
    fn test_unknown_part() {
        assert!(part("tail").is_none());
    }
}
