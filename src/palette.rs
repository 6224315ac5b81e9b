//! Flat colour images used to paint faces a photo cannot show.

use crate::error::{Result, SkinError};
use crate::resolver::ColourKey;
use image::{Rgba, RgbaImage};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Side length of the built-in palette images. Large enough for the biggest
/// face (8x12).
pub const BUILTIN_SIZE: u32 = 16;

/// One loaded image per [`ColourKey`].
#[derive(Debug, Clone)]
pub struct FallbackPalette {
    images: HashMap<ColourKey, RgbaImage>,
}

impl FallbackPalette {
    /// Load `<dir>/<asset_name>.png` for every colour.
    ///
    /// All five images are loaded up front; the first missing one aborts the load.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut images = HashMap::with_capacity(ColourKey::ALL.len());

        for key in ColourKey::ALL {
            let path = asset_path(dir, key);
            if !path.is_file() {
                return Err(SkinError::MissingInput(path));
            }
            let img = image::open(&path)?.to_rgba8();
            images.insert(key, img);
        }

        Ok(Self { images })
    }

    /// Generate flat colour images in memory instead of reading assets.
    pub fn solid(size: u32) -> Self {
        let images = ColourKey::ALL
            .into_iter()
            .map(|key| (key, RgbaImage::from_pixel(size, size, Rgba(key.rgba()))))
            .collect();
        Self { images }
    }

    /// Get the image for a colour.
    pub fn get(&self, key: ColourKey) -> &RgbaImage {
        // Both constructors fill every key.
        &self.images[&key]
    }
}

/// Path of a colour's image inside an asset directory.
pub fn asset_path(dir: &Path, key: ColourKey) -> PathBuf {
    dir.join(format!("{}.png", key.asset_name()))
}
