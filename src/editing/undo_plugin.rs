use bevy::prelude::*;

use crate::core::state::AppState;
use crate::editing::undo::{GlyphEdit, UndoState};

/// Resource that holds the undo/redo stack
#[derive(Resource, Debug, Default)]
pub struct UndoStateResource {
    /// Glyph edits, oldest first
    pub undos: UndoState<GlyphEdit>,
}

impl UndoStateResource {
    pub fn sized(max_undo_count: usize) -> Self {
        Self {
            undos: UndoState::new_sized(max_undo_count),
        }
    }
}

/// Whether an edit is being reverted or reapplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryStep {
    Undo,
    Redo,
}

/// Write the outline an undo or redo step leads to back into the font
pub fn apply_history_step(app_state: &mut AppState, edit: &GlyphEdit, step: HistoryStep) -> bool {
    let Some(glyph) = app_state.workspace.font.get_glyph_mut(&edit.glyph_name) else {
        warn!("Glyph '{}' of undo entry is gone", edit.glyph_name);
        return false;
    };
    glyph.outline = match step {
        HistoryStep::Undo => edit.before.clone(),
        HistoryStep::Redo => edit.after.clone(),
    };
    true
}

/// Whether Command (macOS) or Control is held
pub fn command_pressed(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.any_pressed([
        KeyCode::SuperLeft,
        KeyCode::SuperRight,
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
    ])
}

/// System to handle undo/redo keyboard shortcuts
pub fn handle_undo_redo_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut undo_state: ResMut<UndoStateResource>,
    mut app_state: ResMut<AppState>,
) {
    if !command_pressed(&keyboard) || !keyboard.just_pressed(KeyCode::KeyZ) {
        return;
    }

    let shift_pressed = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
    let (step, edit) = if shift_pressed {
        debug!("Redo shortcut detected (Cmd+Shift+Z)");
        (HistoryStep::Redo, undo_state.undos.redo())
    } else {
        debug!("Undo shortcut detected (Cmd+Z)");
        (HistoryStep::Undo, undo_state.undos.undo())
    };

    match edit {
        Some(edit) => {
            if apply_history_step(&mut app_state, edit, step) {
                info!("{:?} '{}' in glyph '{}'", step, edit.label, edit.glyph_name);
            }
        }
        None => debug!("Nothing to {:?}", step),
    }
}

/// System to save the font to the path it was loaded from
pub fn handle_save_shortcut(keyboard: Res<ButtonInput<KeyCode>>, mut app_state: ResMut<AppState>) {
    if !command_pressed(&keyboard) || !keyboard.just_pressed(KeyCode::KeyS) {
        return;
    }
    if let Err(e) = app_state.save_font() {
        error!("Failed to save font: {e:#}");
    }
}

/// Plugin to set up the undo/redo and save shortcuts
pub struct UndoPlugin;

impl Plugin for UndoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UndoStateResource>().add_systems(
            Update,
            (handle_undo_redo_shortcuts, handle_save_shortcut),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CurveKind, NormalizedRect, ShapeKind};
    use crate::tools::shapes::commit::draw_shape_in_glyph;
    use crate::tools::shapes::gesture::ShapeRequest;

    fn draw_square(app_state: &mut AppState, undo: &mut UndoStateResource, x: f64) {
        let request = ShapeRequest {
            kind: ShapeKind::Rect,
            rect: NormalizedRect::new(x, 0.0, 10.0, 10.0),
            curve: CurveKind::Cubic,
            reverse: false,
        };
        let glyph = app_state.current_glyph_mut().unwrap();
        draw_shape_in_glyph(glyph, &request, &mut undo.undos).unwrap();
    }

    #[test]
    fn undo_restores_previous_outline_and_redo_reapplies() {
        let mut app_state = AppState::untitled("a");
        let mut undo = UndoStateResource::default();
        draw_square(&mut app_state, &mut undo, 0.0);
        draw_square(&mut app_state, &mut undo, 20.0);
        let drawn = app_state.current_glyph().unwrap().outline.clone();

        let edit = undo.undos.undo().cloned().unwrap();
        assert!(apply_history_step(&mut app_state, &edit, HistoryStep::Undo));
        assert_eq!(app_state.current_glyph().unwrap().contour_count(), 1);

        let edit = undo.undos.undo().cloned().unwrap();
        apply_history_step(&mut app_state, &edit, HistoryStep::Undo);
        assert_eq!(app_state.current_glyph().unwrap().outline, None);

        for _ in 0..2 {
            let edit = undo.undos.redo().cloned().unwrap();
            apply_history_step(&mut app_state, &edit, HistoryStep::Redo);
        }
        assert_eq!(app_state.current_glyph().unwrap().outline, drawn);
    }

    #[test]
    fn edits_of_missing_glyphs_are_skipped() {
        let mut app_state = AppState::untitled("a");
        let edit = GlyphEdit {
            label: "Drawing Shapes",
            glyph_name: "missing".to_string(),
            before: None,
            after: None,
        };
        assert!(!apply_history_step(&mut app_state, &edit, HistoryStep::Undo));
    }
}
