use serde::Serialize;
use std::fmt;

/// The flat colours available for painting faces a photo cannot show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColourKey {
    /// Loaded but not chosen by [`select_fallback`].
    LightGrey,
    DarkGrey,
    Blue,
    Green,
    /// Loaded but not chosen by [`select_fallback`].
    Black,
}

impl ColourKey {
    pub const ALL: [ColourKey; 5] = [
        ColourKey::LightGrey,
        ColourKey::DarkGrey,
        ColourKey::Blue,
        ColourKey::Green,
        ColourKey::Black,
    ];

    /// File stem of this colour's palette image.
    pub fn asset_name(self) -> &'static str {
        match self {
            ColourKey::LightGrey => "lightGrey",
            ColourKey::DarkGrey => "darkGrey",
            ColourKey::Blue => "blue",
            ColourKey::Green => "green",
            ColourKey::Black => "black",
        }
    }

    /// The colour of the bundled palette image.
    pub fn rgba(self) -> [u8; 4] {
        match self {
            ColourKey::LightGrey => [192, 192, 192, 255],
            ColourKey::DarkGrey => [96, 96, 96, 255],
            ColourKey::Blue => [44, 71, 160, 255],
            ColourKey::Green => [58, 125, 46, 255],
            ColourKey::Black => [0, 0, 0, 255],
        }
    }
}

impl fmt::Display for ColourKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_name())
    }
}

/// Pick the colour used to paint a part with no photo counterpart.
///
/// Later rules win: a "Bottom" face is dark grey even on a leg or an arm.
pub fn select_fallback(part_name: &str) -> ColourKey {
    let mut colour = ColourKey::Green;
    if part_name.contains("Leg") {
        colour = ColourKey::Blue;
    }
    if part_name.contains("Arm") {
        colour = ColourKey::Green;
    }
    if part_name.contains("Bottom") {
        colour = ColourKey::DarkGrey;
    }
    colour
}
