//! PolyPaint core - flat per-face color painting for triangle meshes
//!
//! Faces are colored by pointing their UVs at a palette texture. This crate
//! provides the engine behind the paint tools:
//! - [`mesh`] - Source mesh input and the exploded per-face layout
//! - [`topology`] - Welded indexing, corner angles, face adjacency, quads and loops
//! - [`palette`] - RGBA8 palette texture sampling
//! - [`uv_buffer`] - Per-face UV storage
//! - [`history`] - Linear undo/redo over UV snapshots
//! - [`engine`] - The paint engine tying it all together

pub mod constants;
pub mod engine;
pub mod error;
pub mod history;
pub mod mesh;
pub mod palette;
pub mod topology;
pub mod types;
pub mod uv_buffer;

#[cfg(test)]
mod test_meshes;

pub use constants::*;
pub use engine::{CursorPoly, PaintEngine, PresentationState};
pub use error::PaintError;
pub use history::UndoHistory;
pub use mesh::{BoneWeight, ExplodedMesh, SourceMesh};
pub use palette::Palette;
pub use polypaint_config::PaintConfig;
pub use topology::{Edge, FaceLink, MeshTopology, TopologyError, TopologyReport};
pub use types::*;
pub use uv_buffer::UvBuffer;
