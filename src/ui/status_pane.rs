//! The pane showing the shapes tool status
//!
//! Lower left corner of the window: the glyph being drawn into, what a
//! drag would draw right now, and the manual entry form while it is open.

use crate::core::state::AppState;
use crate::geometry::{CurveKind, ShapeKind};
use crate::tools::shapes::{ManualEntry, ShapeGesture};
use crate::ui::theme::*;
use bevy::prelude::*;

/// Component marker for the status pane
#[derive(Component, Default)]
pub struct StatusPane;

/// Component marker for the tool mode text
#[derive(Component)]
pub struct ToolModeText;

/// Component marker for the manual entry text
#[derive(Component)]
pub struct ManualEntryText;

/// Plugin that adds the status pane
pub struct StatusPanePlugin;

impl Plugin for StatusPanePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_status_pane)
            .add_systems(Update, (update_tool_mode_text, update_manual_entry_text));
    }
}

fn spawn_status_pane(mut commands: Commands) {
    let text_font = TextFont {
        font_size: WIDGET_TEXT_FONT_SIZE,
        ..default()
    };

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(WIDGET_MARGIN),
                bottom: Val::Px(WIDGET_MARGIN),
                padding: UiRect::all(Val::Px(WIDGET_PADDING)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(WIDGET_PADDING / 2.0),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND_COLOR),
            StatusPane,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                text_font.clone(),
                TextColor(TEXT_COLOR),
                ToolModeText,
            ));
            parent.spawn((
                Text::new(""),
                text_font,
                TextColor(FOCUS_TEXT_COLOR),
                ManualEntryText,
            ));
        });
}

/// One-line description of the tool mode
pub fn tool_mode_line(glyph_name: &str, gesture: &ShapeGesture) -> String {
    let modifiers = gesture.modifiers();
    let shape = match (modifiers.shape_kind, modifiers.constrain_square) {
        (ShapeKind::Rect, false) => "rect",
        (ShapeKind::Rect, true) => "square",
        (ShapeKind::Oval, false) => "oval",
        (ShapeKind::Oval, true) => "circle",
    };
    let mut parts = vec![format!("glyph '{glyph_name}'"), shape.to_string()];
    if modifiers.shape_kind == ShapeKind::Oval && modifiers.curve_kind == CurveKind::Quadratic {
        parts.push("quadratic".to_string());
    }
    if modifiers.center_origin {
        parts.push("from center".to_string());
    }
    if modifiers.locked_size.is_some() {
        parts.push("size locked".to_string());
    }
    if gesture.is_reversed() {
        parts.push("reversed".to_string());
    }
    parts.join(" | ")
}

fn update_tool_mode_text(
    app_state: Res<AppState>,
    gesture: Res<ShapeGesture>,
    mut text_query: Query<&mut Text, With<ToolModeText>>,
) {
    if !gesture.is_changed() && !app_state.is_changed() {
        return;
    }
    let glyph_name = app_state.workspace.selected.as_deref().unwrap_or("none");
    let line = tool_mode_line(glyph_name, &gesture);
    for mut text in &mut text_query {
        *text = Text::new(line.clone());
    }
}

fn update_manual_entry_text(
    manual_entry: Res<ManualEntry>,
    mut text_query: Query<&mut Text, With<ManualEntryText>>,
) {
    if !manual_entry.is_changed() {
        return;
    }
    let line = manual_entry
        .0
        .as_ref()
        .map(|form| form.summary())
        .unwrap_or_default();
    for mut text in &mut text_query {
        *text = Text::new(line.clone());
    }
}
