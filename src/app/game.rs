use bevy::prelude::*;

use crate::app::game_over::GameOverPlugin;
use crate::app::menu::MenuPlugin;
use crate::app::state::AppState;
use crate::gameplay::assets::GameAssets;
use crate::gameplay::{GameplayPlugin, SceneSize};
use crate::rendering::camera::CameraPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>().add_plugins((
            CameraPlugin,
            GameplayPlugin,
            MenuPlugin,
            GameOverPlugin,
        ));
        app.add_systems(Startup, spawn_background);
        #[cfg(feature = "debug")]
        app.add_systems(Update, debug_entity_counts);
    }
}

/// Shared starfield behind every screen, stretched to the logical scene.
fn spawn_background(mut commands: Commands, assets: Res<GameAssets>, scene: Res<SceneSize>) {
    commands.spawn((
        Sprite {
            image: assets.background.clone(),
            custom_size: Some(**scene),
            ..default()
        },
        Transform::from_xyz(scene.x * 0.5, scene.y * 0.5, 0.0),
    ));
}

#[cfg(feature = "debug")]
fn debug_entity_counts(
    time: Res<Time>,
    mut timer: Local<f32>,
    q_enemies: Query<&crate::gameplay::enemies::Enemy>,
    q_bullets: Query<&crate::core::classify::Category>,
) {
    *timer += time.delta_secs();
    if *timer > 1.0 {
        *timer = 0.0;
        info!(
            "entities: enemies={} collidables={}",
            q_enemies.iter().count(),
            q_bullets.iter().count()
        );
    }
}
