//! The engine adapter: Bevy plugins that feed frame, input and contact
//! events into the core and turn the core's directives back into sprites,
//! sounds, HUD updates and state transitions.

use bevy::prelude::*;

pub mod assets;
pub mod audio;
pub mod collisions;
pub mod effects;
pub mod enemies;
pub mod hud;
pub mod motion;
pub mod player;

use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::levels::LevelTable;
use crate::core::session::GameSession;
use crate::core::spawner::Playfield;

/// All per-frame gameplay systems live in this set.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct GameplaySet;

/// Marker for everything spawned for one playthrough; cleared on leaving
/// Playing.
#[derive(Component)]
pub struct GameplayEntity;

/// Logical scene size, fixed from the config (the camera letterboxes the
/// actual window onto it).
#[derive(Resource, Debug, Clone, Copy, Deref)]
pub struct SceneSize(pub Vec2);

pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSession>()
            .add_plugins((
                assets::AssetsPlugin,
                audio::AudioPlugin,
                motion::MotionPlugin,
                player::PlayerPlugin,
                enemies::EnemyPlugin,
                collisions::CollisionPlugin,
                hud::HudPlugin,
                effects::EffectsPlugin,
            ))
            .add_systems(PreStartup, setup_scene_space)
            .add_systems(OnEnter(AppState::Playing), start_session)
            .add_systems(OnExit(AppState::Playing), despawn_gameplay_entities);
    }
}

fn setup_scene_space(mut commands: Commands, cfg: Res<GameConfig>) {
    let screen = Vec2::new(cfg.window.width, cfg.window.height);
    commands.insert_resource(SceneSize(screen));
    commands.insert_resource(Playfield::from_screen(
        screen,
        cfg.playfield.max_aspect_ratio,
    ));
}

/// Fresh session on every entry into Playing (from the menu or a restart),
/// then the state machine kicks off level-1 spawning.
fn start_session(
    mut session: ResMut<GameSession>,
    levels: Res<LevelTable>,
    mut timer: ResMut<enemies::EnemySpawnTimer>,
    mut banner: EventWriter<hud::ShowBanner>,
) {
    *session = GameSession::new();
    if let Some(start) = session.start_game(&levels) {
        timer.restart(start.spawn_interval_secs);
        banner.write(hud::ShowBanner::level(start.level));
        info!(
            target: "session",
            "game started: level {} spawning every {:.2}s",
            start.level,
            start.spawn_interval_secs
        );
    }
}

fn despawn_gameplay_entities(mut commands: Commands, q: Query<Entity, With<GameplayEntity>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
