//! Core application state structures
//!
//! This module contains the main AppState and Workspace structures
//! that manage the overall font editing session.

use anyhow::Context;
use bevy::prelude::*;
use std::path::PathBuf;

use crate::core::errors::{validate_ufo_path, ShapeContext, ShapeResult};
use crate::core::state::font_data::{FontData, GlyphData};
use crate::glyph_not_found;

/// Default advance width of glyphs created by the editor
const NEW_GLYPH_ADVANCE: f64 = 600.0;

/// The main application state
#[derive(Resource, Default, Clone)]
pub struct AppState {
    /// The current font editing workspace
    pub workspace: Workspace,
}

/// Represents a font editing session
#[derive(Clone, Default)]
pub struct Workspace {
    /// Glyph data of the default layer
    pub font: FontData,
    /// The UFO as loaded; saving writes edited outlines back into it
    pub ufo: norad::Font,
    /// The glyph the shapes tool draws into
    pub selected: Option<String>,
}

impl AppState {
    /// Load a font from a UFO file path
    pub fn load_font_from_path(&mut self, path: PathBuf) -> ShapeResult<()> {
        validate_ufo_path(&path)?;

        let font = norad::Font::load(&path).with_file_context("load", &path)?;

        self.workspace.font = FontData::from_norad_font(&font, Some(path));
        self.workspace.ufo = font;

        info!(
            "Successfully loaded UFO font with {} glyphs",
            self.workspace.font.glyphs.len()
        );
        Ok(())
    }

    /// An in-memory font holding a single empty glyph
    pub fn untitled(glyph_name: &str) -> Self {
        let mut state = AppState::default();
        let info = &mut state.workspace.ufo.font_info;
        info.family_name = Some("Untitled".to_string());
        info.style_name = Some("Regular".to_string());
        state.ensure_glyph(glyph_name);
        state.workspace.selected = Some(glyph_name.to_string());
        state
    }

    /// Create an empty glyph if the font doesn't have one with this name
    fn ensure_glyph(&mut self, glyph_name: &str) {
        self.workspace
            .font
            .glyphs
            .entry(glyph_name.to_string())
            .or_insert_with(|| {
                let mut glyph = GlyphData::new(glyph_name);
                glyph.advance_width = NEW_GLYPH_ADVANCE;
                let mut chars = glyph_name.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    glyph.unicode_values.push(ch);
                }
                glyph
            });
    }

    /// Make `glyph_name` the glyph that shapes are drawn into
    pub fn select_glyph(&mut self, glyph_name: &str) -> ShapeResult<()> {
        if !self.workspace.font.glyphs.contains_key(glyph_name) {
            let mut available: Vec<&str> =
                self.workspace.font.glyphs.keys().map(String::as_str).collect();
            available.sort_unstable();
            return Err(glyph_not_found!(glyph_name, available.join(", ")));
        }
        self.workspace.selected = Some(glyph_name.to_string());
        Ok(())
    }

    /// The selected glyph
    pub fn current_glyph(&self) -> Option<&GlyphData> {
        let name = self.workspace.selected.as_deref()?;
        self.workspace.font.get_glyph(name)
    }

    /// The selected glyph, for editing
    pub fn current_glyph_mut(&mut self) -> Option<&mut GlyphData> {
        let name = self.workspace.selected.as_deref()?;
        self.workspace.font.glyphs.get_mut(name)
    }

    /// Save the current font to its file path
    pub fn save_font(&mut self) -> ShapeResult<()> {
        let path = self
            .workspace
            .font
            .path
            .clone()
            .context("No file path set, the font was not loaded from a UFO")?;

        let written = self.workspace.font.write_outlines(&mut self.workspace.ufo)?;
        self.workspace.ufo.save(&path).with_file_context("save", &path)?;

        info!("Saved font to {:?} ({} glyphs updated)", path, written);
        Ok(())
    }

    /// Get a display name for the current font
    pub fn get_font_display_name(&self) -> String {
        let info = &self.workspace.ufo.font_info;
        let family = info.family_name.as_deref().unwrap_or("Untitled");
        let style = info.style_name.as_deref().unwrap_or("Regular");
        format!("{family} {style}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_font_has_selected_empty_glyph() {
        let state = AppState::untitled("a");
        let glyph = state.current_glyph().unwrap();
        assert_eq!(glyph.name, "a");
        assert_eq!(glyph.unicode_values, vec!['a']);
        assert_eq!(glyph.contour_count(), 0);
        assert_eq!(state.get_font_display_name(), "Untitled Regular");
    }

    #[test]
    fn selecting_a_missing_glyph_lists_available_names() {
        let mut state = AppState::untitled("a");
        state.ensure_glyph("b");
        let err = state.select_glyph("zz").unwrap_err();
        assert!(err.to_string().contains("a, b"));
        assert!(state.select_glyph("b").is_ok());
        assert_eq!(state.current_glyph().map(|g| g.name.as_str()), Some("b"));
    }

    #[test]
    fn save_without_path_fails() {
        let mut state = AppState::untitled("a");
        assert!(state.save_font().is_err());
    }
}
