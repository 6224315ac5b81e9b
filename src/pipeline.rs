//! End-to-end conversion: photo to skin, skin to thumbnail, files on disk.

use crate::compositor::{composite, Background};
use crate::error::{Result, SkinError};
use crate::layout::{SKIN_HEIGHT, SKIN_WIDTH};
use crate::mapping::{build_forward, build_reverse, InstructionSummary};
use crate::palette::{FallbackPalette, BUILTIN_SIZE};
use crate::photo::{normalize, open_photo, ResizeFilter};
use crate::report::Reporter;
use crate::types::Offset;
use image::{ImageEncoder, RgbaImage};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Where the flat colour images come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteSource {
    /// `<dir>/{lightGrey,darkGrey,blue,green,black}.png`.
    Directory(PathBuf),
    /// Generated in memory.
    Builtin,
}

/// Conversion settings.
#[derive(Debug, Clone)]
pub struct SkinConfig {
    /// Shift applied to every photo coordinate.
    pub offset: Offset,
    /// Interpolation used when normalizing the photo.
    pub filter: ResizeFilter,
    pub palette: PaletteSource,
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self {
            offset: Offset::ZERO,
            filter: ResizeFilter::default(),
            palette: PaletteSource::Directory(PathBuf::from("assets")),
        }
    }
}

impl SkinConfig {
    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.offset = Offset::new(x, y);
        self
    }

    pub fn with_filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_palette(mut self, palette: PaletteSource) -> Self {
        self.palette = palette;
        self
    }

    fn load_palette(&self) -> Result<FallbackPalette> {
        match &self.palette {
            PaletteSource::Directory(dir) => FallbackPalette::load(dir),
            PaletteSource::Builtin => Ok(FallbackPalette::solid(BUILTIN_SIZE)),
        }
    }
}

/// A skin together with the size of the normalized photo it was cut from.
#[derive(Debug, Clone)]
pub struct BuiltSkin {
    pub skin: RgbaImage,
    pub photo_size: (u32, u32),
    /// The photo to skin instructions the skin was composed from.
    pub mapping: Vec<InstructionSummary>,
}

/// Both images produced by a conversion.
#[derive(Debug, Clone)]
pub struct SkinOutput {
    /// 64x64, transparent where no face was painted.
    pub skin: RgbaImage,
    /// The skin mapped back onto photo positions over white.
    pub thumbnail: RgbaImage,
    /// The photo to skin instructions the skin was composed from.
    pub mapping: Vec<InstructionSummary>,
}

impl SkinOutput {
    pub fn skin_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.skin)
    }

    pub fn thumbnail_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.thumbnail)
    }

    /// Pretty-printed JSON of the photo to skin mapping.
    pub fn mapping_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.mapping)?)
    }
}

/// Build a skin from the photo at `photo_path`.
///
/// The photo is opened before the palette, so a missing photo is reported
/// without touching any palette asset.
pub fn build_skin<P: AsRef<Path>>(
    photo_path: P,
    config: &SkinConfig,
    reporter: &dyn Reporter,
) -> Result<BuiltSkin> {
    let photo_path = photo_path.as_ref();
    let offset = config.offset;
    reporter.info(format_args!(
        "Converting photo '{}' to skin with offset ({}, {})",
        photo_path.display(),
        offset.x,
        offset.y
    ));

    let photo = open_photo(photo_path)?;
    let palette = config.load_palette()?;

    let resized = normalize(&photo, config.filter)?;
    drop(photo);
    reporter.info(format_args!(
        "Resized the photo to {}x{}",
        resized.width(),
        resized.height()
    ));

    let mapping = build_forward(&resized, &palette, offset, reporter);
    let skin = composite(SKIN_WIDTH, SKIN_HEIGHT, Background::Transparent, &mapping, reporter)?;

    Ok(BuiltSkin {
        skin,
        photo_size: resized.dimensions(),
        mapping: mapping.summary(),
    })
}

/// Map a skin back onto a white canvas the size of the normalized photo.
pub fn build_thumbnail(
    skin: &RgbaImage,
    photo_size: (u32, u32),
    offset: Offset,
    reporter: &dyn Reporter,
) -> Result<RgbaImage> {
    reporter.info(format_args!("Converting skin back to photo"));
    let mapping = build_reverse(skin, offset, reporter);
    composite(photo_size.0, photo_size.1, Background::White, &mapping, reporter)
}

/// Build the skin and its thumbnail.
pub fn convert<P: AsRef<Path>>(
    photo_path: P,
    config: &SkinConfig,
    reporter: &dyn Reporter,
) -> Result<SkinOutput> {
    let BuiltSkin {
        skin,
        photo_size,
        mapping,
    } = build_skin(photo_path, config, reporter)?;
    let thumbnail = build_thumbnail(&skin, photo_size, config.offset, reporter)?;
    Ok(SkinOutput {
        skin,
        thumbnail,
        mapping,
    })
}

/// `<stem>-skin.png` and `<stem>-thumb.png` next to the photo.
pub fn output_paths(photo_path: &Path) -> (PathBuf, PathBuf) {
    let stem = photo_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    (
        photo_path.with_file_name(format!("{stem}-skin.png")),
        photo_path.with_file_name(format!("{stem}-thumb.png")),
    )
}

/// Write both images as PNG next to the photo and return their paths.
///
/// Either both files end up in place or neither does. Each image is written
/// to a temporary file beside its destination and renamed into place; if the
/// thumbnail cannot be placed, the freshly placed skin is removed again.
pub fn write_outputs(
    output: &SkinOutput,
    photo_path: &Path,
    reporter: &dyn Reporter,
) -> Result<(PathBuf, PathBuf)> {
    let skin_png = output.skin_png()?;
    let thumbnail_png = output.thumbnail_png()?;
    let (skin_path, thumb_path) = output_paths(photo_path);

    let skin_tmp = stage(&skin_path, &skin_png)?;
    let thumb_tmp = stage(&thumb_path, &thumbnail_png)?;

    reporter.info(format_args!("Saving skin as {}", skin_path.display()));
    skin_tmp.persist(&skin_path).map_err(|e| e.error)?;

    reporter.info(format_args!("Saving thumbnail as {}", thumb_path.display()));
    if let Err(e) = thumb_tmp.persist(&thumb_path) {
        // The skin was renamed into place above, so it is ours to remove.
        let _ = std::fs::remove_file(&skin_path);
        return Err(e.error.into());
    }

    Ok((skin_path, thumb_path))
}

/// Write `bytes` to a temporary file in the same directory as `dest`.
fn stage(dest: &Path, bytes: &[u8]) -> Result<NamedTempFile> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}

fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let cursor = std::io::Cursor::new(&mut bytes);
    let encoder = image::codecs::png::PngEncoder::new(cursor);

    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| SkinError::Encode(format!("Failed to encode PNG: {}", e)))?;

    Ok(bytes)
}
