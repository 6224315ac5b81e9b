//! Photo loading and normalization.
//!
//! A photo is scaled so its shorter side matches the skin and its longer side
//! keeps the aspect ratio.

use crate::error::{Result, SkinError};
use crate::layout::{SKIN_HEIGHT, SKIN_WIDTH};
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// Interpolation used when resizing the photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ResizeFilter {
    /// Nearest-neighbour.
    Nearest,
    /// Bilinear.
    Triangle,
    /// Bicubic.
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    pub fn to_filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Open a photo. A missing file is reported as [`SkinError::MissingInput`].
pub fn open_photo<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(SkinError::MissingInput(path.to_path_buf()));
    }
    Ok(image::open(path)?)
}

/// Target size for a photo of `width` x `height`.
///
/// `scale = min(width / 64, height / 64)` and each side becomes
/// `round(side / scale)`, so one side lands on 64 and the other is at least 64.
pub fn normalized_size(width: u32, height: u32) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(SkinError::DegeneratePhoto { width, height });
    }

    let scale = (f64::from(width) / f64::from(SKIN_WIDTH))
        .min(f64::from(height) / f64::from(SKIN_HEIGHT));

    let w = (f64::from(width) / scale).round() as u32;
    let h = (f64::from(height) / scale).round() as u32;
    Ok((w, h))
}

/// Resize a photo to its normalized size.
pub fn normalize(photo: &DynamicImage, filter: ResizeFilter) -> Result<RgbaImage> {
    let (w, h) = normalized_size(photo.width(), photo.height())?;
    let rgba = photo.to_rgba8();
    if rgba.dimensions() == (w, h) {
        return Ok(rgba);
    }
    Ok(imageops::resize(&rgba, w, h, filter.to_filter_type()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_landscape_rounds_to_nearest() {
        // 640 / 7.5 = 85.33
        assert_eq!(normalized_size(640, 480).unwrap(), (85, 64));
    }

    #[test]
    fn test_rounds_up_past_half() {
        // scale = 1.5, 100 / 1.5 = 66.67
        assert_eq!(normalized_size(100, 96).unwrap(), (67, 64));
    }

    #[test]
    fn test_portrait_and_exact() {
        assert_eq!(normalized_size(64, 200).unwrap(), (64, 200));
        assert_eq!(normalized_size(100, 64).unwrap(), (100, 64));
        assert_eq!(normalized_size(128, 128).unwrap(), (64, 64));
    }

    #[test]
    fn test_small_photo_is_upscaled() {
        assert_eq!(normalized_size(32, 32).unwrap(), (64, 64));
        assert_eq!(normalized_size(16, 32).unwrap(), (64, 128));
    }

    #[test]
    fn test_short_side_always_lands_on_skin_size() {
        for (w, h) in [(640, 480), (1920, 1080), (333, 777), (65, 4000), (3001, 2999)] {
            let (nw, nh) = normalized_size(w, h).unwrap();
            assert_eq!(nw.min(nh), 64, "{w}x{h} -> {nw}x{nh}");
            assert!(nw >= 64 && nh >= 64);
        }
    }

    #[test]
    fn test_degenerate_photo() {
        assert!(matches!(
            normalized_size(0, 480),
            Err(SkinError::DegeneratePhoto { width: 0, height: 480 })
        ));
        assert!(matches!(
            normalized_size(640, 0),
            Err(SkinError::DegeneratePhoto { .. })
        ));
    }

    #[test]
    fn test_normalize_resizes() {
        let photo = DynamicImage::ImageRgba8(RgbaImage::from_pixel(640, 480, Rgba([10, 20, 30, 255])));
        let resized = normalize(&photo, ResizeFilter::Nearest).unwrap();
        assert_eq!(resized.dimensions(), (85, 64));
        assert_eq!(resized.get_pixel(40, 40).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_missing_photo() {
        match open_photo("does/not/exist.jpg") {
            Err(SkinError::MissingInput(path)) => assert!(path.ends_with("exist.jpg")),
            other => panic!("expected missing input, got {:?}", other.map(|i| (i.width(), i.height()))),
        }
    }
}
