use bevy::prelude::*;

// Window ////////////////////////////////////////////////////////////////////

pub const WINDOW_TITLE: &str = "Shape Tool";
pub const BACKGROUND_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);

// Status pane ///////////////////////////////////////////////////////////////

pub const WIDGET_TEXT_FONT_SIZE: f32 = 16.0;
pub const WIDGET_MARGIN: f32 = 24.0;
pub const WIDGET_PADDING: f32 = 8.0;
pub const PANEL_BACKGROUND_COLOR: Color = Color::srgba(0.15, 0.15, 0.15, 0.9);
pub const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub const FOCUS_TEXT_COLOR: Color = Color::srgb(1.0, 0.5, 0.0);

// Glyph outline /////////////////////////////////////////////////////////////

pub const PATH_LINE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 1.0);
pub const HANDLE_LINE_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.3);
pub const METRICS_GUIDE_COLOR: Color = Color::srgba(0.3, 1.0, 0.5, 0.5);

pub const ON_CURVE_POINT_RADIUS: f32 = 4.0;
pub const OFF_CURVE_POINT_RADIUS: f32 = 4.0;
pub const ON_CURVE_POINT_COLOR: Color = Color::srgb(0.3, 1.0, 0.5);
pub const OFF_CURVE_POINT_COLOR: Color = Color::srgb(0.6, 0.4, 1.0);
pub const ON_CURVE_INNER_CIRCLE_RATIO: f32 = 0.5;
pub const OFF_CURVE_INNER_CIRCLE_RATIO: f32 = 0.5;
