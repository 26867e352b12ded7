//! Application initialization and configuration

use crate::core::cli::CliArgs;
use crate::core::cursor::CursorPlugin;
use crate::core::errors::ShapeResult;
use crate::core::settings::ShapeToolSettings;
use crate::core::state::AppState;
use crate::editing::undo_plugin::{UndoPlugin, UndoStateResource};
use crate::rendering::{cameras::CameraPlugin, RenderingPlugin};
use crate::tools::shapes::ShapesToolPlugin;
use crate::ui::theme::{BACKGROUND_COLOR, WINDOW_TITLE};
use crate::ui::StatusPanePlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a fully configured Bevy app ready to run
pub fn create_app(cli_args: CliArgs) -> ShapeResult<App> {
    cli_args.validate()?;

    let app_state = load_app_state(&cli_args)?;
    let settings = match &cli_args.config {
        Some(path) => ShapeToolSettings::load(path)?,
        None => ShapeToolSettings::default(),
    };

    let mut app = App::new();
    configure_app_settings(&mut app, cli_args, app_state, settings);
    add_all_plugins(&mut app);
    Ok(app)
}

/// The font from `--load-ufo`, or an untitled one, with the glyph selected
fn load_app_state(cli_args: &CliArgs) -> ShapeResult<AppState> {
    let mut app_state = match &cli_args.ufo_path {
        Some(path) => {
            let mut state = AppState::default();
            state.load_font_from_path(path.clone())?;
            state
        }
        None => {
            info!("No font given, drawing into an untitled font");
            AppState::untitled(&cli_args.glyph)
        }
    };
    app_state.select_glyph(&cli_args.glyph)?;
    info!(
        "Drawing into glyph '{}' of {}",
        cli_args.glyph,
        app_state.get_font_display_name()
    );
    Ok(app_state)
}

/// Sets up application resources and configuration
fn configure_app_settings(
    app: &mut App,
    cli_args: CliArgs,
    app_state: AppState,
    settings: ShapeToolSettings,
) {
    let undo = UndoStateResource::sized(settings.undo_stack_size);

    app.insert_resource(app_state)
        .insert_resource(undo)
        .insert_resource(settings)
        .insert_resource(cli_args)
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .insert_resource(WinitSettings::desktop_app());
}

/// Adds all plugins to the application in logical groups
fn add_all_plugins(app: &mut App) {
    // Logging is set up by `init_custom_logger` before the app exists
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.to_string(),
                    ..default()
                }),
                ..default()
            })
            .disable::<LogPlugin>(),
    );

    add_rendering_plugins(app);
    add_editor_plugins(app);
}

/// Adds plugins for rendering and visual display
fn add_rendering_plugins(app: &mut App) {
    app.add_plugins((CameraPlugin, RenderingPlugin));
}

/// Adds the tool and editing plugins
fn add_editor_plugins(app: &mut App) {
    app.add_plugins((CursorPlugin, ShapesToolPlugin, UndoPlugin, StatusPanePlugin));
}
