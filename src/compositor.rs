//! Crop-and-paste composition of a [`Mapping`] onto a fresh canvas.

use crate::error::{Result, SkinError};
use crate::mapping::{CopyInstruction, Mapping};
use crate::report::Reporter;
use image::{imageops, Rgba, RgbaImage};

/// Canvas fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Background {
    /// All channels zero.
    #[default]
    Transparent,
    White,
    Rgba([u8; 4]),
}

impl Background {
    pub fn pixel(self) -> Rgba<u8> {
        match self {
            Background::Transparent => Rgba([0, 0, 0, 0]),
            Background::White => Rgba([255, 255, 255, 255]),
            Background::Rgba(rgba) => Rgba(rgba),
        }
    }
}

/// Compose a `width` x `height` image from a mapping.
///
/// Each instruction's rectangle is cropped from its source and alpha-blended
/// onto the canvas. Sources are never modified. A crop that leaves its source
/// fails the whole composition; paste rectangles are clipped to the canvas.
pub fn composite(
    width: u32,
    height: u32,
    background: Background,
    mapping: &Mapping<'_>,
    reporter: &dyn Reporter,
) -> Result<RgbaImage> {
    let mut canvas = RgbaImage::from_pixel(width, height, background.pixel());

    for (part, ins) in mapping.iter() {
        let (x, y) = crop_origin(part, ins)?;
        reporter.debug(format_args!("Slicing {part}: {ins}"));

        let clip = imageops::crop_imm(ins.source, x, y, ins.width, ins.height).to_image();
        imageops::overlay(&mut canvas, &clip, ins.to.x, ins.to.y);
    }

    Ok(canvas)
}

/// Check an instruction's crop against its source and return the origin as
/// unsigned coordinates.
fn crop_origin(part: &str, ins: &CopyInstruction<'_>) -> Result<(u32, u32)> {
    let (source_width, source_height) = ins.source.dimensions();
    let fits = ins.from.x >= 0
        && ins.from.y >= 0
        && ins.from.x + i64::from(ins.width) <= i64::from(source_width)
        && ins.from.y + i64::from(ins.height) <= i64::from(source_height);

    if !fits {
        return Err(SkinError::CropOutOfBounds {
            part: part.to_string(),
            x: ins.from.x,
            y: ins.from.y,
            width: ins.width,
            height: ins.height,
            source_width,
            source_height,
        });
    }

    // Both fit in u32 once bounded by the source dimensions.
    Ok((ins.from.x as u32, ins.from.y as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::SourceKind;
    use crate::report::NullReporter;
    use crate::types::PixelPos;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLUE: [u8; 4] = [0, 0, 255, 255];

    fn copy<'a>(source: &'a RgbaImage, from: (i64, i64), to: (i64, i64)) -> CopyInstruction<'a> {
        CopyInstruction {
            source,
            kind: SourceKind::Photo,
            width: 2,
            height: 2,
            from: PixelPos::new(from.0, from.1),
            to: PixelPos::new(to.0, to.1),
        }
    }

    #[test]
    fn test_two_crops_on_transparent_canvas() {
        let red = RgbaImage::from_pixel(2, 2, Rgba(RED));
        let blue = RgbaImage::from_pixel(2, 2, Rgba(BLUE));
        let mut mapping = Mapping::new();
        mapping.insert("a", copy(&red, (0, 0), (0, 0)));
        mapping.insert("b", copy(&blue, (0, 0), (2, 2)));

        let canvas = composite(4, 4, Background::Transparent, &mapping, &NullReporter).unwrap();

        for (x, y, p) in canvas.enumerate_pixels() {
            let expected = match (x, y) {
                (0..=1, 0..=1) => RED,
                (2..=3, 2..=3) => BLUE,
                _ => [0, 0, 0, 0],
            };
            assert_eq!(p.0, expected, "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_crop_from_inside_source() {
        let mut source = RgbaImage::from_pixel(6, 6, Rgba([0, 0, 0, 255]));
        source.put_pixel(3, 4, Rgba(RED));
        let mut mapping = Mapping::new();
        mapping.insert("a", copy(&source, (3, 3), (0, 0)));

        let canvas = composite(2, 2, Background::White, &mapping, &NullReporter).unwrap();
        assert_eq!(canvas.get_pixel(0, 1).0, RED);
        assert_eq!(canvas.get_pixel(1, 1).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_transparent_source_keeps_background() {
        let clear = RgbaImage::new(2, 2);
        let mut mapping = Mapping::new();
        mapping.insert("a", copy(&clear, (0, 0), (1, 1)));

        let canvas = composite(4, 4, Background::White, &mapping, &NullReporter).unwrap();
        assert!(canvas.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_empty_mapping_is_background() {
        let canvas = composite(3, 5, Background::Rgba(BLUE), &Mapping::new(), &NullReporter).unwrap();
        assert_eq!(canvas.dimensions(), (3, 5));
        assert!(canvas.pixels().all(|p| p.0 == BLUE));
    }

    #[test]
    fn test_crop_past_source_edge_fails() {
        let source = RgbaImage::new(4, 4);
        let mut mapping = Mapping::new();
        mapping.insert("edge", copy(&source, (3, 0), (0, 0)));

        match composite(4, 4, Background::Transparent, &mapping, &NullReporter) {
            Err(SkinError::CropOutOfBounds { part, x, source_width, .. }) => {
                assert_eq!(part, "edge");
                assert_eq!(x, 3);
                assert_eq!(source_width, 4);
            }
            other => panic!("expected crop error, got {:?}", other.map(|c| c.dimensions())),
        }
    }

    #[test]
    fn test_negative_crop_origin_fails() {
        let source = RgbaImage::new(4, 4);
        let mut mapping = Mapping::new();
        mapping.insert("neg", copy(&source, (0, -1), (0, 0)));

        assert!(matches!(
            composite(4, 4, Background::Transparent, &mapping, &NullReporter),
            Err(SkinError::CropOutOfBounds { y: -1, .. })
        ));
    }

    #[test]
    fn test_paste_past_canvas_is_clipped() {
        let red = RgbaImage::from_pixel(2, 2, Rgba(RED));
        let mut mapping = Mapping::new();
        mapping.insert("a", copy(&red, (0, 0), (3, 3)));

        let canvas = composite(4, 4, Background::Transparent, &mapping, &NullReporter).unwrap();
        assert_eq!(canvas.get_pixel(3, 3).0, RED);
        assert_eq!(canvas.get_pixel(2, 2).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_sources_are_untouched() {
        let red = RgbaImage::from_pixel(2, 2, Rgba(RED));
        let before = red.clone();
        let mut mapping = Mapping::new();
        mapping.insert("a", copy(&red, (0, 0), (0, 0)));

        composite(2, 2, Background::White, &mapping, &NullReporter).unwrap();
        assert_eq!(red, before);
    }
}
