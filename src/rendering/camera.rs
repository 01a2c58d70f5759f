use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::core::config::GameConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// One 2D camera over a fixed logical scene: origin at the bottom-left,
/// y-up, sized from the config regardless of the actual window (letterboxed
/// scaling). Everything else in the crate works in these scene coordinates.
fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    let (w, h) = (cfg.window.width, cfg.window.height);
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: w,
                height: h,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(w * 0.5, h * 0.5, 100.0),
    ));
}
