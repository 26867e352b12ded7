//! Camera for the design space
//!
//! A single 2D camera looks at the glyph. PanCam pans it with the middle
//! mouse button and zooms with the scroll wheel; the left button is left
//! to the shapes tool.

use bevy::prelude::*;
use bevy_pancam::{PanCam, PanCamPlugin};

const MIN_ZOOM_SCALE: f32 = 0.05;
const MAX_ZOOM_SCALE: f32 = 20.0;
/// Initial view is centered on the middle of a typical glyph
const INITIAL_CENTER: Vec2 = Vec2::new(300.0, 350.0);

/// Component that marks the main design camera
#[derive(Component)]
pub struct DesignCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PanCamPlugin::default())
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    spawn_design_camera(&mut commands);
}

/// Spawns the camera for the design space, with PanCam for panning and zooming
pub fn spawn_design_camera(commands: &mut Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_translation(INITIAL_CENTER.extend(0.0)),
        DesignCamera,
        PanCam {
            grab_buttons: vec![MouseButton::Middle],
            min_scale: MIN_ZOOM_SCALE,
            max_scale: MAX_ZOOM_SCALE,
            ..default()
        },
    ));
}
