/// Color returned when sampling without a palette bound.
pub const NEUTRAL_COLOR: [u8; 4] = [255, 255, 255, 255];

/// A triangle has three sides, so at most three edge neighbors.
pub const MAX_FACE_LINKS: usize = 3;

/// Corner angle (degrees) of an ideal quad.
pub const QUAD_CORNER_ANGLE: f32 = 90.0;

/// Edge vectors shorter than this produce a 0° corner angle.
pub const MIN_ANGLE_DENOMINATOR: f32 = 1e-15;

/// Corner probes below this length are not worth nudging during remap.
pub const MIN_TEXEL_SEEK: u32 = 2;
