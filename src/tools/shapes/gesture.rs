//! Drag gesture of the shapes tool
//!
//! The gesture is a small state machine fed with press, drag, release,
//! modifier and key events. It knows nothing about Bevy input; the
//! systems in the parent module translate raw input into
//! [`GestureEvent`]s and act on the returned [`GestureAction`]s.

use crate::core::errors::ShapeResult;
use crate::geometry::{
    draw_shape, BezPathPen, CurveKind, DragConstraints, NormalizedRect, ReverseContourPointPen,
    ShapeKind,
};
use bevy::prelude::*;
use kurbo::{BezPath, Point, Vec2 as KVec2};

// ==================== MODIFIERS ====================

/// Raw modifier keys as read from the keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierKeys {
    pub shift: bool,
    /// Cmd on macOS, the Super/Windows key elsewhere
    pub command: bool,
    /// Option on macOS, Alt elsewhere
    pub option: bool,
    pub control: bool,
    pub caps_lock: bool,
}

/// What the current modifiers mean for the shape being drawn
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModifierState {
    pub constrain_square: bool,
    pub center_origin: bool,
    pub shape_kind: ShapeKind,
    pub curve_kind: CurveKind,
    /// Size kept fixed while control is held; the drag moves the shape
    pub locked_size: Option<KVec2>,
}

impl ModifierState {
    pub fn constraints(&self) -> DragConstraints {
        DragConstraints {
            constrain_square: self.constrain_square,
            center_origin: self.center_origin,
        }
    }
}

// ==================== STATE ====================

/// Press point and latest drag point of an active gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub start: Point,
    pub current: Option<Point>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragState),
}

/// Input to the gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Press { point: Point, click_count: u32 },
    Drag { point: Point },
    Release { point: Point },
    ModifiersChanged(ModifierKeys),
    ToggleReverse,
    Cancel,
}

/// A shape ready to be drawn into the glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeRequest {
    pub kind: ShapeKind,
    pub rect: NormalizedRect,
    pub curve: CurveKind,
    pub reverse: bool,
}

/// Something the gesture asks its host to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    Commit(ShapeRequest),
    OpenManualEntry { at: Point },
}

/// What the tool would draw right now
#[derive(Debug, Clone)]
pub struct ShapePreview {
    /// The exact contour a release would commit
    pub path: BezPath,
    pub rect: NormalizedRect,
    pub kind: ShapeKind,
    pub curve: CurveKind,
    pub reversed: bool,
    /// Center marker, shown while drawing from the center
    pub origin_marker: Option<Point>,
}

impl ShapePreview {
    pub fn is_dashed(&self) -> bool {
        self.curve == CurveKind::Quadratic
    }
}

// ==================== GESTURE ====================

/// Gesture state of the shapes tool
#[derive(Resource, Debug, Clone, Default)]
pub struct ShapeGesture {
    state: GestureState,
    modifiers: ModifierState,
    reverse: bool,
}

impl ShapeGesture {
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn modifiers(&self) -> &ModifierState {
        &self.modifiers
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging(_))
    }

    /// Feed one event, returning what the host has to do in response
    pub fn handle(&mut self, event: GestureEvent) -> Option<GestureAction> {
        let mut action = None;
        let state = std::mem::take(&mut self.state);
        self.state = self.transition(state, event, &mut action);
        action
    }

    fn transition(
        &mut self,
        state: GestureState,
        event: GestureEvent,
        action: &mut Option<GestureAction>,
    ) -> GestureState {
        match (state, event) {
            // A press while dragging means the release was missed; start over
            (_, GestureEvent::Press { point, click_count }) => {
                if click_count == 2 {
                    *action = Some(GestureAction::OpenManualEntry { at: point });
                }
                GestureState::Dragging(DragState {
                    start: point,
                    current: None,
                })
            }
            (GestureState::Dragging(drag), GestureEvent::Drag { point }) => {
                GestureState::Dragging(self.moved(drag, point))
            }
            (GestureState::Dragging(drag), GestureEvent::Release { point }) => {
                if drag.current.is_some() {
                    let drag = self.moved(drag, point);
                    if let Some(request) = self.request(&drag) {
                        *action = Some(GestureAction::Commit(request));
                    }
                }
                GestureState::Idle
            }
            (state, GestureEvent::ModifiersChanged(keys)) => {
                self.update_modifiers(keys, &state);
                state
            }
            (state, GestureEvent::ToggleReverse) => {
                self.reverse = !self.reverse;
                debug!("Shape direction reversed: {}", self.reverse);
                state
            }
            (GestureState::Dragging(_), GestureEvent::Cancel) => {
                debug!("Shape drag cancelled");
                GestureState::Idle
            }
            (state, _) => state,
        }
    }

    fn moved(&self, drag: DragState, point: Point) -> DragState {
        let start = match self.modifiers.locked_size {
            Some(size) => point - size,
            None => drag.start,
        };
        DragState {
            start,
            current: Some(point),
        }
    }

    fn update_modifiers(&mut self, keys: ModifierKeys, state: &GestureState) {
        let locked_size = match (keys.control, self.modifiers.locked_size, state) {
            (false, _, _) => None,
            (true, Some(size), _) => Some(size),
            (true, None, GestureState::Dragging(DragState { start, current: Some(current) })) => {
                Some(*current - *start)
            }
            (true, None, _) => None,
        };

        self.modifiers = ModifierState {
            constrain_square: keys.shift,
            center_origin: keys.command,
            shape_kind: if keys.option { ShapeKind::Oval } else { ShapeKind::Rect },
            curve_kind: if keys.caps_lock {
                CurveKind::Quadratic
            } else {
                CurveKind::Cubic
            },
            locked_size,
        };
    }

    fn request(&self, drag: &DragState) -> Option<ShapeRequest> {
        let current = drag.current?;
        Some(ShapeRequest {
            kind: self.modifiers.shape_kind,
            rect: NormalizedRect::from_drag(drag.start, current, self.modifiers.constraints()),
            curve: self.modifiers.curve_kind,
            reverse: self.reverse,
        })
    }

    /// The rect a release would draw, if a drag is under way
    pub fn current_request(&self) -> Option<ShapeRequest> {
        match &self.state {
            GestureState::Dragging(drag) => self.request(drag),
            GestureState::Idle => None,
        }
    }

    /// Build the preview of the shape under the cursor
    pub fn preview(&self) -> ShapeResult<Option<ShapePreview>> {
        let Some(request) = self.current_request() else {
            return Ok(None);
        };
        let path = request_to_bezpath(&request)?;
        let origin_marker = self
            .modifiers
            .center_origin
            .then(|| request.rect.center());

        Ok(Some(ShapePreview {
            path,
            rect: request.rect,
            kind: request.kind,
            curve: request.curve,
            reversed: request.reverse,
            origin_marker,
        }))
    }
}

/// The outline a request would produce, as a path
pub fn request_to_bezpath(request: &ShapeRequest) -> ShapeResult<BezPath> {
    let mut pen = BezPathPen::new();
    if request.reverse {
        let mut reversed = ReverseContourPointPen::new(&mut pen);
        draw_shape(&mut reversed, request.kind, &request.rect, request.curve)?;
    } else {
        draw_shape(&mut pen, request.kind, &request.rect, request.curve)?;
    }
    Ok(pen.into_path())
}
