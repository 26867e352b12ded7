// Settings ///////////////////////////////////////////////////////////////////
// Settings for the shapes tool. Defaults live here; a JSON file passed with
// `--config` overrides any subset of them.

use crate::core::errors::{ShapeContext, ShapeResult};
use crate::editing::undo::DEFAULT_UNDO_STACK_SIZE;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

// Preview ////////////////////////////////////////////////////////////////////

/// Preview stroke color
pub const PREVIEW_STROKE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Preview stroke color while drawing with reversed direction
pub const REVERSED_STROKE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Dash and gap length of quadratic previews, in screen pixels
pub const QUADRATIC_DASH: [f32; 2] = [5.0, 3.0];
/// Size of the star marking the center origin
pub const ORIGIN_MARKER_SIZE: f32 = 15.0;

// Input //////////////////////////////////////////////////////////////////////

/// Two presses closer together than this count as a double click
pub const DOUBLE_CLICK_SECONDS: f32 = 0.4;

// Snap to Grid ///////////////////////////////////////////////////////////////

/// The size of the grid to snap to
pub const SNAP_TO_GRID_VALUE: f32 = 2.0;

/// User-tunable settings of the shapes tool
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeToolSettings {
    pub stroke_color: [f32; 4],
    pub reversed_stroke_color: [f32; 4],
    pub quadratic_dash: [f32; 2],
    pub origin_marker_size: f32,
    pub double_click_seconds: f32,
    pub snap_to_grid: bool,
    pub snap_to_grid_value: f32,
    pub undo_stack_size: usize,
}

impl Default for ShapeToolSettings {
    fn default() -> Self {
        Self {
            stroke_color: PREVIEW_STROKE_COLOR,
            reversed_stroke_color: REVERSED_STROKE_COLOR,
            quadratic_dash: QUADRATIC_DASH,
            origin_marker_size: ORIGIN_MARKER_SIZE,
            double_click_seconds: DOUBLE_CLICK_SECONDS,
            snap_to_grid: false,
            snap_to_grid_value: SNAP_TO_GRID_VALUE,
            undo_stack_size: DEFAULT_UNDO_STACK_SIZE,
        }
    }
}

impl ShapeToolSettings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> ShapeResult<Self> {
        let text = std::fs::read_to_string(path).with_file_context("read", path)?;
        Self::from_json(&text).with_file_context("parse", path)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Preview color for the current direction
    pub fn preview_color(&self, reversed: bool) -> Color {
        let [r, g, b, a] = if reversed {
            self.reversed_stroke_color
        } else {
            self.stroke_color
        };
        Color::srgba(r, g, b, a)
    }

    /// Snap a design-space position to the grid when enabled
    pub fn snap(&self, position: Vec2) -> Vec2 {
        if !self.snap_to_grid || self.snap_to_grid_value <= 0.0 {
            return position;
        }
        let grid = self.snap_to_grid_value;
        Vec2::new(
            (position.x / grid).round() * grid,
            (position.y / grid).round() * grid,
        )
    }
}
