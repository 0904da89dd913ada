use bevy::{log::LogPlugin, prelude::*, window::WindowResolution};
use conway_board::{
    camera::CamPlugin,
    error::GridError,
    life::LifePlugin,
    prelude::{BOARD_HEIGHT, BOARD_WIDTH, RANDOMIZE_PROBABILITY},
    session::Session,
    state::GameState,
};

fn main() -> Result<(), GridError> {
    let session = Session::new(BOARD_WIDTH, BOARD_HEIGHT)?.with_probability(RANDOMIZE_PROBABILITY)?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(LogPlugin {
                    filter: "info,wgpu=error,naga=warn,conway_board=debug".into(),
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Game of Life".into(),
                        resizable: true,
                        focused: true,
                        mode: bevy::window::WindowMode::Windowed,
                        resolution: WindowResolution::new(800., 800.),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(MeshPickingPlugin)
        .init_state::<GameState>()
        .add_plugins((CamPlugin, LifePlugin::new(session)))
        .run();

    Ok(())
}
