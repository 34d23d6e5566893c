//! Shared configuration for PolyPaint
//!
//! This crate is the single source of truth for the tunable limits of a
//! paint session: quad detection tolerance, flood-fill and loop-walk
//! iteration caps, and the palette remap texel search distance.

use serde::{Deserialize, Serialize};

/// Default quad tolerance, in degrees of summed deviation from 90°
pub const DEFAULT_QUAD_TOLERANCE: f32 = 120.0;

/// Default number of breadth-first rounds a flood fill may run
pub const DEFAULT_FILL_ITERATION_CAP: usize = 1000;

/// Default number of quads a loop walk may step across
pub const DEFAULT_LOOP_ITERATION_CAP: usize = 1000;

/// Default diagonal search distance (pixels) when nudging a remapped texel
/// away from a color border
pub const DEFAULT_REMAP_SEEK_LIMIT: u32 = 20;

/// Environment variable overriding [`PaintConfig::quad_tolerance`]
pub const ENV_QUAD_TOLERANCE: &str = "POLYPAINT_QUAD_TOLERANCE";

/// Environment variable overriding [`PaintConfig::restrict_to_selection`]
pub const ENV_RESTRICT_TO_SELECTION: &str = "POLYPAINT_RESTRICT_TO_SELECTION";

/// Tuning for a paint session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Maximum summed corner deviation (degrees) for two triangles to count as a quad
    pub quad_tolerance: f32,
    /// Flood fill stops after this many frontier rounds
    pub fill_iteration_cap: usize,
    /// Loop walk stops after this many steps
    pub loop_iteration_cap: usize,
    /// Max diagonal pixels probed by the remap border-avoidance heuristic
    pub remap_seek_limit: u32,
    /// Only paint faces that are part of the selection
    pub restrict_to_selection: bool,
    /// Brush paints the detected quad partner along with the hit face
    pub auto_quads: bool,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            quad_tolerance: DEFAULT_QUAD_TOLERANCE,
            fill_iteration_cap: DEFAULT_FILL_ITERATION_CAP,
            loop_iteration_cap: DEFAULT_LOOP_ITERATION_CAP,
            remap_seek_limit: DEFAULT_REMAP_SEEK_LIMIT,
            restrict_to_selection: false,
            auto_quads: true,
        }
    }
}

impl PaintConfig {
    /// Defaults with environment overrides applied
    ///
    /// Unset or unparsable variables leave the default in place.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(ENV_QUAD_TOLERANCE).ok().as_deref(),
            std::env::var(ENV_RESTRICT_TO_SELECTION).ok().as_deref(),
        )
    }

    /// Apply raw override strings (as read from the environment)
    pub fn with_overrides(mut self, quad_tolerance: Option<&str>, restrict: Option<&str>) -> Self {
        if let Some(tolerance) = quad_tolerance.and_then(parse_tolerance) {
            self.quad_tolerance = tolerance;
        }
        if let Some(restrict) = restrict.and_then(parse_flag) {
            self.restrict_to_selection = restrict;
        }
        self
    }

    /// Set the quad tolerance
    pub fn with_quad_tolerance(mut self, tolerance: f32) -> Self {
        self.quad_tolerance = tolerance;
        self
    }

    /// Set the flood fill round cap
    pub fn with_fill_iteration_cap(mut self, cap: usize) -> Self {
        self.fill_iteration_cap = cap;
        self
    }

    /// Set the loop walk step cap
    pub fn with_loop_iteration_cap(mut self, cap: usize) -> Self {
        self.loop_iteration_cap = cap;
        self
    }

    /// Enable or disable restrict-to-selection painting
    pub fn with_restrict_to_selection(mut self, restrict: bool) -> Self {
        self.restrict_to_selection = restrict;
        self
    }
}

fn parse_tolerance(raw: &str) -> Option<f32> {
    raw.trim()
        .parse::<f32>()
        .ok()
        .filter(|t| t.is_finite() && *t > 0.0)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
