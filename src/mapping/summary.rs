use super::{Mapping, SourceKind};
use crate::error::Result;
use crate::types::PixelPos;
use serde::Serialize;

/// A serializable view of one instruction, without the pixel data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructionSummary {
    pub part: &'static str,
    pub source: SourceKind,
    pub width: u32,
    pub height: u32,
    pub from: PixelPos,
    pub to: PixelPos,
}

impl Mapping<'_> {
    /// One summary per instruction, ordered by part name.
    pub fn summary(&self) -> Vec<InstructionSummary> {
        self.iter()
            .map(|(part, ins)| InstructionSummary {
                part,
                source: ins.kind,
                width: ins.width,
                height: ins.height,
                from: ins.from,
                to: ins.to,
            })
            .collect()
    }

    /// Pretty-printed JSON of [`Mapping::summary`].
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summary())?)
    }
}
