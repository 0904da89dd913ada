use bevy::{prelude::*, render::camera::ScalingMode};
use bevy_pancam::{PanCam, PanCamPlugin};

use crate::{
    life::BoardLayout,
    prelude::{BG_COLOR, BORDER_WIDTH_PX, VIEW_MARGIN_PX},
    state::GameState,
};

pub struct CamPlugin;

impl Plugin for CamPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PanCamPlugin)
            .insert_resource(ClearColor(BG_COLOR))
            .add_systems(OnEnter(GameState::Load), spawn_cam);
    }
}

/// World-space area the camera keeps visible: the board, its border and a margin.
fn view_size(layout: &BoardLayout) -> Vec2 {
    layout.pixel_size() + Vec2::splat(2.0 * (BORDER_WIDTH_PX + VIEW_MARGIN_PX))
}

// Init
fn spawn_cam(mut commands: Commands, layout: Res<BoardLayout>) {
    let view = view_size(&layout);
    commands.spawn((
        Camera2d,
        // left clicks belong to the cells
        PanCam {
            grab_buttons: vec![MouseButton::Right, MouseButton::Middle],
            ..default()
        },
        OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: view.x,
                min_height: view.y,
            },
            near: -1000.0,
            far: 1000.0,
            ..OrthographicProjection::default_2d()
        },
        Transform::from_translation(layout.center.extend(0.0)),
        Msaa::Off,
    ));
}
