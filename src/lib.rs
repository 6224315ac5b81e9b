//! # photo2skin
//!
//! Turn a photo of a person into a 64x64 Minecraft skin.
//!
//! ## Overview
//!
//! Every face of the player model has a fixed rectangle in the skin. The
//! faces a front-facing photo can show (head, torso front, arms and legs)
//! also have a fixed position in a photo scaled so its short side is 64
//! pixels. Faces the photo cannot show are painted from a small palette of
//! flat colour images.
//!
//! The same table run in reverse copies the skin back onto photo positions,
//! giving a thumbnail that previews how the skin will look.
//!
//! ## Quick Start
//!
//! ```ignore
//! use photo2skin::{convert, write_outputs, SkinConfig, TracingReporter};
//!
//! let config = SkinConfig::default().with_offset(6, 5);
//! let output = convert("me.jpg", &config, &TracingReporter)?;
//!
//! // Writes me-skin.png and me-thumb.png
//! write_outputs(&output, "me.jpg".as_ref(), &TracingReporter)?;
//! ```

pub mod error;
pub mod types;
pub mod layout;
pub mod resolver;
pub mod palette;
pub mod photo;
pub mod mapping;
pub mod compositor;
pub mod pipeline;
pub mod report;

// Re-export main types for convenience
pub use error::{SkinError, Result};
pub use types::{AtlasRect, Offset, PixelPos};
pub use layout::{part, parts, PartSpec, PARTS, SKIN_HEIGHT, SKIN_WIDTH};
pub use resolver::{resolve_atlas_origin, resolve_photo_origin, select_fallback, ColourKey};
pub use palette::FallbackPalette;
pub use photo::{normalize, normalized_size, ResizeFilter};
pub use mapping::{build_forward, build_reverse, CopyInstruction, Mapping, SourceKind};
pub use compositor::{composite, Background};
pub use pipeline::{
    build_skin, build_thumbnail, convert, output_paths, write_outputs, BuiltSkin, PaletteSource,
    SkinConfig, SkinOutput,
};
pub use report::{NullReporter, Reporter, TracingReporter};
