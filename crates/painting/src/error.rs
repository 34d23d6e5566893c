//! Error types for mesh rebuild and palette operations.

/// Errors that can occur while preparing a mesh or remapping a palette
#[derive(Debug, thiserror::Error)]
pub enum PaintError {
    #[error("Index count {0} is not divisible by 3")]
    IndexCount(usize),

    #[error("Triangle index {index} out of range ({vertex_count} vertices)")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    #[error("Attribute {name} has {len} entries, expected {expected}")]
    AttributeLength {
        name: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("Palette has no pixels ({width}x{height})")]
    EmptyPalette { width: u32, height: u32 },

    #[error("Palette pixel count {len} does not match {width}x{height}")]
    PaletteSize { width: u32, height: u32, len: usize },
}
