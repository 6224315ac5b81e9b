use super::PartSpec;

/// The skin layout from the Minecraft wiki plus each face's corner in a photo.
///
/// Row format: skin x0, y0, x1, y1, photo x, photo y.
/// A photo corner of (-1, -1) means the face is painted from the palette.
pub static PARTS: [PartSpec; 36] = [
    PartSpec::from_row("headTop", [8, 0, 16, 8, 24, 0]),
    PartSpec::from_row("headBottom", [16, 0, 24, 8, -1, -1]),
    PartSpec::from_row("headRight", [0, 8, 8, 16, 16, 8]),
    PartSpec::from_row("headFront", [8, 8, 16, 16, 24, 8]),
    PartSpec::from_row("headLeft", [16, 8, 24, 16, 32, 8]),
    PartSpec::from_row("headBack", [24, 8, 32, 16, 8, 8]),
    PartSpec::from_row("rightLegTop", [4, 16, 8, 20, -1, -1]),
    PartSpec::from_row("rightLegBottom", [8, 16, 12, 20, -1, -1]),
    PartSpec::from_row("rightLegRight", [0, 20, 4, 32, 20, 28]),
    PartSpec::from_row("rightLegFront", [4, 20, 8, 32, 24, 28]),
    PartSpec::from_row("rightLegLeft", [8, 20, 12, 32, -1, -1]),
    PartSpec::from_row("rightLegBack", [12, 20, 16, 32, -1, -1]),
    PartSpec::from_row("torsoTop", [20, 16, 28, 20, -1, -1]),
    PartSpec::from_row("torsoBottom", [28, 16, 36, 20, -1, -1]),
    PartSpec::from_row("torsoRight", [16, 20, 20, 32, -1, -1]),
    PartSpec::from_row("torsoFront", [20, 20, 28, 32, 24, 16]),
    PartSpec::from_row("torsoLeft", [28, 20, 32, 32, -1, -1]),
    PartSpec::from_row("torsoBack", [32, 20, 40, 32, -1, -1]),
    PartSpec::from_row("rightArmTop", [44, 16, 48, 20, -1, -1]),
    PartSpec::from_row("rightArmBottom", [48, 16, 52, 20, -1, -1]),
    PartSpec::from_row("rightArmRight", [40, 20, 44, 32, 16, 16]),
    PartSpec::from_row("rightArmFront", [44, 20, 48, 32, 20, 16]),
    PartSpec::from_row("rightArmLeft", [48, 20, 52, 32, -1, -1]),
    PartSpec::from_row("rightArmBack", [52, 20, 56, 32, 12, 16]),
    PartSpec::from_row("leftLegTop", [20, 48, 24, 52, -1, -1]),
    PartSpec::from_row("leftLegBottom", [24, 48, 28, 52, -1, -1]),
    PartSpec::from_row("leftLegRight", [16, 52, 20, 64, -1, -1]),
    PartSpec::from_row("leftLegFront", [20, 52, 24, 64, 28, 28]),
    PartSpec::from_row("leftLegLeft", [24, 52, 28, 64, 32, 28]),
    PartSpec::from_row("leftLegBack", [28, 52, 32, 64, -1, -1]),
    PartSpec::from_row("leftArmTop", [36, 48, 40, 52, -1, -1]),
    PartSpec::from_row("leftArmBottom", [40, 48, 44, 52, -1, -1]),
    PartSpec::from_row("leftArmRight", [32, 52, 36, 64, -1, -1]),
    PartSpec::from_row("leftArmFront", [36, 52, 40, 64, 32, 16]),
    PartSpec::from_row("leftArmLeft", [40, 52, 44, 64, 36, 16]),
    PartSpec::from_row("leftArmBack", [44, 52, 48, 64, 40, 16]),
];
