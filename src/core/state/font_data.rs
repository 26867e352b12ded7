//! Font data structures
//!
//! This module contains the font data structures the editor works on.
//! norad is only used to load and save; while editing, glyphs live in
//! these plain structures so they can be cloned into undo snapshots.

use std::collections::HashMap;
use std::path::PathBuf;

/// Font data
#[derive(Clone, Default, Debug)]
pub struct FontData {
    /// All glyphs of the default layer, by name
    pub glyphs: HashMap<String, GlyphData>,
    /// Path to the UFO file (for saving)
    pub path: Option<PathBuf>,
}

/// Glyph data
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphData {
    /// Glyph name
    pub name: String,
    /// Advance width
    pub advance_width: f64,
    /// Advance height (optional)
    pub advance_height: Option<f64>,
    /// Unicode codepoints for this glyph
    pub unicode_values: Vec<char>,
    /// Glyph outline data
    pub outline: Option<OutlineData>,
    /// Component references for composite glyphs
    pub components: Vec<ComponentData>,
}

/// Component data for composite glyphs
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentData {
    /// Name of the base glyph being referenced
    pub base_glyph: String,
    /// Transformation matrix (6 values: xx, xy, yx, yy, x, y)
    pub transform: [f64; 6],
}

impl Default for ComponentData {
    fn default() -> Self {
        Self {
            base_glyph: String::new(),
            transform: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0], // Identity matrix
        }
    }
}

/// Outline data
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutlineData {
    /// Contour data
    pub contours: Vec<ContourData>,
}

/// Contour data
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContourData {
    /// Points in this contour
    pub points: Vec<PointData>,
}

/// Point data
#[derive(Clone, Debug, PartialEq)]
pub struct PointData {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Point type
    pub point_type: PointTypeData,
    /// Smooth flag of on-curve points
    pub smooth: bool,
}

/// Point type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointTypeData {
    Move,
    Line,
    OffCurve,
    Curve,
    QCurve,
}

impl PointTypeData {
    pub fn is_on_curve(self) -> bool {
        !matches!(self, PointTypeData::OffCurve)
    }
}

impl FontData {
    /// Get a glyph by name
    pub fn get_glyph(&self, name: &str) -> Option<&GlyphData> {
        self.glyphs.get(name)
    }

    /// Get a glyph by name for editing
    pub fn get_glyph_mut(&mut self, name: &str) -> Option<&mut GlyphData> {
        self.glyphs.get_mut(name)
    }
}

impl GlyphData {
    /// An empty glyph with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            advance_width: 0.0,
            advance_height: None,
            unicode_values: Vec::new(),
            outline: None,
            components: Vec::new(),
        }
    }

    /// Number of contours in the outline
    pub fn contour_count(&self) -> usize {
        self.outline.as_ref().map_or(0, |outline| outline.contours.len())
    }

    /// Append contours to the outline, creating it if needed
    pub fn append_contours(&mut self, contours: impl IntoIterator<Item = ContourData>) {
        self.outline
            .get_or_insert_with(OutlineData::default)
            .contours
            .extend(contours);
    }
}
