//! Shapes tool
//!
//! Drag to draw a rectangle. While dragging:
//! - Shift constrains to a square or circle
//! - Option/Alt draws an oval
//! - Cmd/Super draws from the center
//! - Caps Lock draws quadratic ovals
//! - Control keeps the size and moves the shape instead
//! - Tab toggles the contour direction, Escape cancels
//!
//! Double click opens a form for typing the shape's position and size.

pub mod commit;
pub mod gesture;
pub mod manual_entry;

pub use commit::{draw_shape_in_glyph, UNDO_LABEL};
pub use gesture::{
    GestureAction, GestureEvent, ModifierKeys, ModifierState, ShapeGesture, ShapePreview,
    ShapeRequest,
};
pub use manual_entry::{ManualEntry, ManualEntryForm};

use crate::core::cursor::CursorInfo;
use crate::core::settings::ShapeToolSettings;
use crate::core::state::AppState;
use crate::editing::UndoStateResource;
use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use manual_entry::{apply_entry_key, EntryOutcome};

/// Presses further apart than this, in screen pixels, never form a double click
const DOUBLE_CLICK_DISTANCE: f32 = 5.0;

/// Ordering of the shapes tool systems within `Update`
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShapeToolSet {
    Input,
    Commit,
    Preview,
}

/// Request to draw a shape into the selected glyph
#[derive(Event, Debug, Clone, Copy)]
pub struct DrawShapeEvent(pub ShapeRequest);

/// Preview of the current drag, rebuilt whenever the gesture changes
#[derive(Resource, Debug, Default)]
pub struct ShapePreviewState(pub Option<ShapePreview>);

/// Counts consecutive presses to detect double clicks
#[derive(Debug, Default)]
pub struct ClickCounter {
    last_press: Option<(f32, Vec2)>,
    count: u32,
}

impl ClickCounter {
    /// Register a press at `now` seconds, returning the click count
    pub fn press(&mut self, now: f32, position: Vec2, interval: f32) -> u32 {
        let continues = self.last_press.is_some_and(|(time, pos)| {
            now - time <= interval && pos.distance(position) <= DOUBLE_CLICK_DISTANCE
        });
        self.count = if continues { self.count + 1 } else { 1 };
        self.last_press = Some((now, position));
        self.count
    }
}

pub struct ShapesToolPlugin;

impl Plugin for ShapesToolPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShapeGesture>()
            .init_resource::<ManualEntry>()
            .init_resource::<ShapePreviewState>()
            .add_event::<DrawShapeEvent>()
            .configure_sets(
                Update,
                (
                    ShapeToolSet::Input,
                    ShapeToolSet::Commit,
                    ShapeToolSet::Preview,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (
                        track_modifier_keys,
                        handle_shape_mouse,
                        handle_shape_keys,
                        handle_manual_entry_input,
                    )
                        .chain()
                        .in_set(ShapeToolSet::Input),
                    apply_shape_requests.in_set(ShapeToolSet::Commit),
                    update_shape_preview.in_set(ShapeToolSet::Preview),
                ),
            );
    }
}

/// Read modifier keys and feed changes to the gesture
pub fn track_modifier_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut caps_lock: Local<bool>,
    mut last_keys: Local<ModifierKeys>,
    mut gesture: ResMut<ShapeGesture>,
) {
    // Bevy reports Caps Lock presses, not the lock state
    if keyboard.just_pressed(KeyCode::CapsLock) {
        *caps_lock = !*caps_lock;
    }

    let keys = ModifierKeys {
        shift: keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        command: keyboard.any_pressed([KeyCode::SuperLeft, KeyCode::SuperRight]),
        option: keyboard.any_pressed([KeyCode::AltLeft, KeyCode::AltRight]),
        control: keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]),
        caps_lock: *caps_lock,
    };
    if keys != *last_keys {
        *last_keys = keys;
        gesture.handle(GestureEvent::ModifiersChanged(keys));
    }
}

/// Turn left mouse button input into press, drag and release events
#[allow(clippy::too_many_arguments)]
pub fn handle_shape_mouse(
    buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorInfo>,
    time: Res<Time>,
    settings: Res<ShapeToolSettings>,
    mut clicks: Local<ClickCounter>,
    mut last_position: Local<Option<Vec2>>,
    mut gesture: ResMut<ShapeGesture>,
    mut manual_entry: ResMut<ManualEntry>,
    mut draw_events: EventWriter<DrawShapeEvent>,
) {
    if manual_entry.is_open() {
        return;
    }
    let position = cursor.design_position.map(|pos| settings.snap(pos));
    let to_point = |pos: Vec2| kurbo::Point::new(pos.x as f64, pos.y as f64);

    let mut actions = Vec::with_capacity(2);
    if let Some(position) = position {
        if buttons.just_pressed(MouseButton::Left) {
            let screen = cursor.screen_position.unwrap_or(position);
            let click_count =
                clicks.press(time.elapsed_secs(), screen, settings.double_click_seconds);
            *last_position = Some(position);
            actions.extend(gesture.handle(GestureEvent::Press {
                point: to_point(position),
                click_count,
            }));
        } else if buttons.pressed(MouseButton::Left)
            && gesture.is_dragging()
            && *last_position != Some(position)
        {
            *last_position = Some(position);
            actions.extend(gesture.handle(GestureEvent::Drag {
                point: to_point(position),
            }));
        }
    }

    if buttons.just_released(MouseButton::Left) {
        // Outside the window there is no cursor position; release where it was last seen
        let event = match position.or(*last_position) {
            Some(pos) => GestureEvent::Release { point: to_point(pos) },
            None => GestureEvent::Cancel,
        };
        *last_position = None;
        actions.extend(gesture.handle(event));
    }

    for action in actions {
        match action {
            GestureAction::Commit(request) => {
                draw_events.write(DrawShapeEvent(request));
            }
            GestureAction::OpenManualEntry { at } => {
                // The form replaces the drag that the press started
                gesture.handle(GestureEvent::Cancel);
                manual_entry.0 = Some(ManualEntryForm::at(at));
                debug!("Opened manual shape entry at ({}, {})", at.x, at.y);
            }
        }
    }
}

/// Tab reverses the contour direction, Escape cancels the drag
pub fn handle_shape_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    manual_entry: Res<ManualEntry>,
    mut gesture: ResMut<ShapeGesture>,
) {
    // The form takes the keyboard while open
    if manual_entry.is_open() {
        return;
    }
    if keyboard.just_pressed(KeyCode::Tab) {
        gesture.handle(GestureEvent::ToggleReverse);
        info!(
            "Shapes are drawn {}",
            if gesture.is_reversed() { "reversed" } else { "in the default direction" }
        );
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        gesture.handle(GestureEvent::Cancel);
    }
}

/// Typing into the manual entry form
pub fn handle_manual_entry_input(
    mut keyboard_events: EventReader<KeyboardInput>,
    mut manual_entry: ResMut<ManualEntry>,
    gesture: Res<ShapeGesture>,
    mut draw_events: EventWriter<DrawShapeEvent>,
) {
    let Some(form) = manual_entry.0.as_mut() else {
        keyboard_events.clear();
        return;
    };

    let mut close = false;
    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        match apply_entry_key(form, &event.logical_key) {
            EntryOutcome::Editing => {}
            EntryOutcome::Cancel => {
                debug!("Manual shape entry cancelled");
                close = true;
                break;
            }
            EntryOutcome::Submit => match form.submit() {
                Ok((kind, rect)) => {
                    draw_events.write(DrawShapeEvent(ShapeRequest {
                        kind,
                        rect,
                        curve: gesture.modifiers().curve_kind,
                        reverse: gesture.is_reversed(),
                    }));
                    close = true;
                    break;
                }
                Err(e) => warn!("Shape not drawn: {e}"),
            },
        }
    }

    if close {
        manual_entry.0 = None;
    }
}

/// Draw requested shapes into the selected glyph
pub fn apply_shape_requests(
    mut draw_events: EventReader<DrawShapeEvent>,
    mut app_state: ResMut<AppState>,
    mut undo_state: ResMut<UndoStateResource>,
) {
    for DrawShapeEvent(request) in draw_events.read() {
        let Some(glyph) = app_state.current_glyph_mut() else {
            warn!("No glyph selected, shape not drawn");
            continue;
        };
        let glyph_name = glyph.name.clone();
        match draw_shape_in_glyph(glyph, request, &mut undo_state.undos) {
            Ok(contours) => info!(
                "Drew {} ({} contour{}) in glyph '{}'",
                request.kind.display_name(),
                contours,
                if contours == 1 { "" } else { "s" },
                glyph_name
            ),
            Err(e) => error!(
                "Failed to draw {} in glyph '{}': {e:#}",
                request.kind.display_name(),
                glyph_name
            ),
        }
    }
}

/// Rebuild the preview after the gesture changed
pub fn update_shape_preview(gesture: Res<ShapeGesture>, mut preview: ResMut<ShapePreviewState>) {
    if !gesture.is_changed() {
        return;
    }
    preview.0 = gesture.preview().unwrap_or_else(|e| {
        error!("Failed to build shape preview: {e:#}");
        None
    });
}
