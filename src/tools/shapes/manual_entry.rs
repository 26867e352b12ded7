//! Numeric entry of a shape
//!
//! A double click opens a small form with x, y, width and height fields,
//! prefilled with the clicked position. Submitting it draws the shape
//! without any drag.

use crate::core::errors::{ShapeError, ShapeResult};
use crate::geometry::{NormalizedRect, ShapeKind};
use bevy::input::keyboard::Key;
use bevy::prelude::*;
use kurbo::Point;

/// Fields of the manual entry form, in focus order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryField {
    #[default]
    X,
    Y,
    Width,
    Height,
}

impl EntryField {
    pub fn label(self) -> &'static str {
        match self {
            EntryField::X => "x",
            EntryField::Y => "y",
            EntryField::Width => "w",
            EntryField::Height => "h",
        }
    }

    pub fn next(self) -> Self {
        match self {
            EntryField::X => EntryField::Y,
            EntryField::Y => EntryField::Width,
            EntryField::Width => EntryField::Height,
            EntryField::Height => EntryField::X,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManualEntryForm {
    pub x: String,
    pub y: String,
    pub w: String,
    pub h: String,
    pub shape: ShapeKind,
    pub focus: EntryField,
}

impl ManualEntryForm {
    /// Open the form at a design-space position; width and height start empty
    pub fn at(point: Point) -> Self {
        Self {
            x: format!("{}", point.x.trunc() as i64),
            y: format!("{}", point.y.trunc() as i64),
            w: String::new(),
            h: String::new(),
            shape: ShapeKind::Rect,
            focus: EntryField::Width,
        }
    }

    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::X => &self.x,
            EntryField::Y => &self.y,
            EntryField::Width => &self.w,
            EntryField::Height => &self.h,
        }
    }

    fn field_mut(&mut self, field: EntryField) -> &mut String {
        match field {
            EntryField::X => &mut self.x,
            EntryField::Y => &mut self.y,
            EntryField::Width => &mut self.w,
            EntryField::Height => &mut self.h,
        }
    }

    pub fn push_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.field_mut(self.focus).push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.field_mut(self.focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn toggle_shape(&mut self) {
        self.shape = self.shape.toggled();
    }

    /// Parse the four fields into the shape to draw
    pub fn submit(&self) -> ShapeResult<(ShapeKind, NormalizedRect)> {
        let x = parse_field(EntryField::X, &self.x)?;
        let y = parse_field(EntryField::Y, &self.y)?;
        let w = parse_field(EntryField::Width, &self.w)?;
        let h = parse_field(EntryField::Height, &self.h)?;
        Ok((self.shape, NormalizedRect::as_entered(x, y, w, h)))
    }

    /// One-line summary for the status display
    pub fn summary(&self) -> String {
        let fields = [
            EntryField::X,
            EntryField::Y,
            EntryField::Width,
            EntryField::Height,
        ]
        .map(|field| {
            let marker = if field == self.focus { ">" } else { " " };
            format!("{marker}{}: {}", field.label(), self.field(field))
        });
        format!(
            "{}  [{}]  (Tab next, Alt rect/oval, Enter draw, Esc cancel)",
            fields.join("  "),
            self.shape.display_name()
        )
    }
}

fn parse_field(field: EntryField, text: &str) -> ShapeResult<f64> {
    text.trim()
        .parse::<i64>()
        .map(|value| value as f64)
        .map_err(|_| {
            ShapeError::NotANumber {
                field: field.label(),
                text: text.to_string(),
            }
            .into()
        })
}

/// What a key press asks of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    Editing,
    Submit,
    Cancel,
}

/// Apply one pressed key to the form
pub fn apply_entry_key(form: &mut ManualEntryForm, key: &Key) -> EntryOutcome {
    match key {
        Key::Enter => return EntryOutcome::Submit,
        Key::Escape => return EntryOutcome::Cancel,
        Key::Tab => form.focus_next(),
        Key::Alt => form.toggle_shape(),
        Key::Backspace => form.backspace(),
        Key::Space => form.push_char(' '),
        Key::Character(text) => text.chars().for_each(|ch| form.push_char(ch)),
        _ => {}
    }
    EntryOutcome::Editing
}

/// The open manual entry form, if any
#[derive(Resource, Debug, Default)]
pub struct ManualEntry(pub Option<ManualEntryForm>);

impl ManualEntry {
    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CurveKind;
    use crate::tools::shapes::commit::build_contours;
    use crate::tools::shapes::gesture::ShapeRequest;

    fn form(x: &str, y: &str, w: &str, h: &str) -> ManualEntryForm {
        ManualEntryForm {
            x: x.to_string(),
            y: y.to_string(),
            w: w.to_string(),
            h: h.to_string(),
            shape: ShapeKind::Rect,
            focus: EntryField::X,
        }
    }

    #[test]
    fn opens_with_truncated_press_point() {
        let form = ManualEntryForm::at(Point::new(12.7, -3.2));
        assert_eq!(form.x, "12");
        assert_eq!(form.y, "-3");
        assert!(form.w.is_empty());
        assert_eq!(form.focus, EntryField::Width);
    }

    #[test]
    fn valid_fields_give_a_rect() {
        let (kind, rect) = form("10", " 20 ", "30", "+40").submit().unwrap();
        assert_eq!(kind, ShapeKind::Rect);
        assert_eq!(rect, NormalizedRect::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn non_integer_text_aborts() {
        let err = form("10", "twenty", "30", "40").submit().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ShapeError>(),
            Some(&ShapeError::NotANumber {
                field: "y",
                text: "twenty".to_string(),
            })
        );
        assert!(form("10", "20", "1.5", "40").submit().is_err());
        assert!(form("10", "20", "", "40").submit().is_err());
    }

    #[test]
    fn negative_sizes_draw_from_the_typed_corner() {
        let (kind, rect) = form("10", "20", "-30", "40").submit().unwrap();
        assert_eq!(rect, NormalizedRect::as_entered(10.0, 20.0, -30.0, 40.0));

        let request = ShapeRequest {
            kind,
            rect,
            curve: CurveKind::Cubic,
            reverse: false,
        };
        let contours = build_contours(&request).unwrap();
        let corners: Vec<_> = contours[0].points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(corners, vec![(10.0, 20.0), (-20.0, 20.0), (-20.0, 60.0), (10.0, 60.0)]);
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut form = ManualEntryForm::at(Point::new(0.0, 0.0));
        form.push_char('5');
        form.push_char('0');
        form.focus_next();
        form.push_char('8');
        form.push_char('9');
        form.backspace();
        form.push_char('\r');
        form.toggle_shape();
        assert_eq!(form.w, "50");
        assert_eq!(form.h, "8");
        assert_eq!(form.shape, ShapeKind::Oval);

        form.focus_next();
        assert_eq!(form.focus, EntryField::X);
    }

    #[test]
    fn keys_edit_and_finish_the_form() {
        let mut form = ManualEntryForm::at(Point::new(10.0, 20.0));
        for key in [
            Key::Character("3".into()),
            Key::Character("0".into()),
            Key::Tab,
            Key::Character("4".into()),
            Key::Alt,
        ] {
            assert_eq!(apply_entry_key(&mut form, &key), EntryOutcome::Editing);
        }
        assert_eq!(apply_entry_key(&mut form, &Key::Enter), EntryOutcome::Submit);
        assert_eq!(apply_entry_key(&mut form, &Key::Escape), EntryOutcome::Cancel);

        let (kind, rect) = form.submit().unwrap();
        assert_eq!(kind, ShapeKind::Oval);
        assert_eq!(rect, NormalizedRect::new(10.0, 20.0, 30.0, 4.0));
    }

    #[test]
    fn summary_marks_the_focused_field() {
        let form = form("1", "2", "3", "4");
        let summary = form.summary();
        assert!(summary.contains(">x: 1"));
        assert!(summary.contains(" y: 2"));
        assert!(summary.contains("[rect]"));
    }
}
