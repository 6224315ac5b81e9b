//! Copy instructions between the photo and the skin.
//!
//! The forward mapping fills every skin face, taking it from the photo when
//! the photo shows it and from the palette otherwise. The reverse mapping
//! copies skin faces back to their photo positions and skips the rest.

mod summary;

pub use summary::InstructionSummary;

use crate::layout::{parts, PartSpec};
use crate::palette::FallbackPalette;
use crate::report::Reporter;
use crate::resolver::{resolve_atlas_origin, resolve_photo_origin, select_fallback, ColourKey};
use crate::types::{Offset, PixelPos};
use image::RgbaImage;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Which image an instruction reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "colour")]
pub enum SourceKind {
    Photo,
    Atlas,
    Fallback(ColourKey),
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Photo => f.write_str("photo"),
            SourceKind::Atlas => f.write_str("skin"),
            SourceKind::Fallback(colour) => write!(f, "{colour}"),
        }
    }
}

/// Copy a `width` x `height` rectangle at `from` in `source` to `to`.
#[derive(Clone, Copy)]
pub struct CopyInstruction<'a> {
    pub source: &'a RgbaImage,
    pub kind: SourceKind,
    pub width: u32,
    pub height: u32,
    pub from: PixelPos,
    pub to: PixelPos,
}

impl PartialEq for CopyInstruction<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source, other.source)
            && self.kind == other.kind
            && self.width == other.width
            && self.height == other.height
            && self.from == other.from
            && self.to == other.to
    }
}

// Source pixels are left out; the kind identifies the image.
impl fmt::Debug for CopyInstruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyInstruction")
            .field("kind", &self.kind)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

impl fmt::Display for CopyInstruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})..({}, {}) -> ({}, {})",
            self.kind,
            self.from.x,
            self.from.y,
            self.from.x + i64::from(self.width),
            self.from.y + i64::from(self.height),
            self.to.x,
            self.to.y
        )
    }
}

/// Copy instructions keyed by part name.
///
/// Faces never overlap, so iteration order does not change the composed
/// image; a sorted map keeps it deterministic anyway.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping<'a> {
    instructions: BTreeMap<&'static str, CopyInstruction<'a>>,
}

impl<'a> Mapping<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, part: &'static str, instruction: CopyInstruction<'a>) {
        self.instructions.insert(part, instruction);
    }

    pub fn get(&self, part: &str) -> Option<&CopyInstruction<'a>> {
        self.instructions.get(part)
    }

    pub fn contains(&self, part: &str) -> bool {
        self.instructions.contains_key(part)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CopyInstruction<'a>)> {
        self.instructions.iter().map(|(name, ins)| (*name, ins))
    }
}

/// Build the photo to skin mapping. Every part gets exactly one instruction.
pub fn build_forward<'a>(
    photo: &'a RgbaImage,
    palette: &'a FallbackPalette,
    offset: Offset,
    reporter: &dyn Reporter,
) -> Mapping<'a> {
    let mut mapping = Mapping::new();

    for spec in parts() {
        let (source, kind, from) = match resolve_photo_origin(spec, offset) {
            Some(origin) => (photo, SourceKind::Photo, origin),
            None => {
                let colour = select_fallback(spec.name);
                reporter.debug(format_args!(
                    "Painting {} with {} because it is not in the photo",
                    spec.name, colour
                ));
                (palette.get(colour), SourceKind::Fallback(colour), PixelPos::ORIGIN)
            }
        };

        let instruction = instruction(spec, source, kind, from, resolve_atlas_origin(spec));
        reporter.debug(format_args!("Adding {}: {}", spec.name, instruction));
        mapping.insert(spec.name, instruction);
    }

    mapping
}

/// Build the skin to photo mapping. Parts not in the photo are skipped.
pub fn build_reverse<'a>(atlas: &'a RgbaImage, offset: Offset, reporter: &dyn Reporter) -> Mapping<'a> {
    let mut mapping = Mapping::new();

    for spec in parts() {
        let Some(to) = resolve_photo_origin(spec, offset) else {
            reporter.debug(format_args!("Skipping {} because it is not in the photo", spec.name));
            continue;
        };

        let instruction = instruction(spec, atlas, SourceKind::Atlas, resolve_atlas_origin(spec), to);
        reporter.debug(format_args!("Adding {}: {}", spec.name, instruction));
        mapping.insert(spec.name, instruction);
    }

    mapping
}

fn instruction<'a>(
    spec: &PartSpec,
    source: &'a RgbaImage,
    kind: SourceKind,
    from: PixelPos,
    to: PixelPos,
) -> CopyInstruction<'a> {
    CopyInstruction {
        source,
        kind,
        width: spec.width(),
        height: spec.height(),
        from,
        to,
    }
}
