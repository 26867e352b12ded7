//! The cursor resource and plugin.
//!
//! `CursorInfo` holds the cursor position in screen space and in design
//! space. It is refreshed in `PreUpdate` so the tool systems in `Update`
//! always see the position of the current frame.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::rendering::cameras::DesignCamera;

pub struct CursorPlugin;

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorInfo>()
            .add_systems(PreUpdate, update_cursor_info_system);
    }
}

#[derive(Resource, Default, Debug)]
pub struct CursorInfo {
    pub screen_position: Option<Vec2>,
    pub design_position: Option<Vec2>,
}

impl CursorInfo {
    /// Design-space position as a kurbo point
    pub fn design_point(&self) -> Option<kurbo::Point> {
        self.design_position
            .map(|pos| kurbo::Point::new(pos.x as f64, pos.y as f64))
    }
}

fn update_cursor_info_system(
    mut cursor: ResMut<CursorInfo>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform), With<DesignCamera>>,
) {
    let (Ok(window), Ok((camera, camera_transform))) = (windows.single(), camera_q.single())
    else {
        cursor.screen_position = None;
        cursor.design_position = None;
        return;
    };

    cursor.screen_position = window.cursor_position();
    cursor.design_position = cursor
        .screen_position
        .and_then(|screen_pos| camera.viewport_to_world_2d(camera_transform, screen_pos).ok());
}
