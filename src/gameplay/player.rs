use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::classify::Category;
use crate::core::config::GameConfig;
use crate::core::spawner::{self, Playfield};
use crate::gameplay::assets::GameAssets;
use crate::gameplay::audio::{PlaySfx, Sfx};
use crate::gameplay::collisions::collision_groups;
use crate::gameplay::motion::PathMotion;
use crate::gameplay::{GameplayEntity, GameplaySet, SceneSize};

#[derive(Component)]
pub struct Player;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), spawn_player)
            .add_systems(
                Update,
                (drag_player, fire_on_press)
                    .in_set(GameplaySet)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

fn spawn_player(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Res<GameAssets>,
    scene: Res<SceneSize>,
) {
    let pos = Vec2::new(scene.x * 0.5, scene.y * cfg.player.start_y_frac);
    commands.spawn((
        Sprite {
            image: assets.player.clone(),
            custom_size: Some(Vec2::new(cfg.player.width, cfg.player.height)),
            ..default()
        },
        Transform::from_xyz(pos.x, pos.y, 2.0),
        RigidBody::KinematicPositionBased,
        Collider::cuboid(cfg.player.width * 0.5, cfg.player.height * 0.5),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::KINEMATIC_KINEMATIC,
        collision_groups(Category::Player),
        Category::Player,
        Player,
        GameplayEntity,
    ));
}

fn pointer_scene_pos(
    window: &Window,
    touches: &Touches,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    let screen_pos = touches
        .iter()
        .next()
        .map(|t| t.position())
        .or_else(|| window.cursor_position())?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

/// Horizontal drag while the pointer is held, clamped to the playfield by
/// half the ship width. Only the x delta matters; the ship never leaves its
/// rest height.
fn drag_player(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    area: Res<Playfield>,
    cfg: Res<GameConfig>,
    mut last_x: Local<Option<f32>>,
    mut q_player: Query<&mut Transform, With<Player>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let held = buttons.pressed(MouseButton::Left) || touches.iter().next().is_some();
    if !held {
        *last_x = None;
        return;
    }
    let Some(pos) = pointer_scene_pos(window, &touches, &camera_q) else {
        *last_x = None;
        return;
    };
    if let (Some(prev_x), Ok(mut tf)) = (*last_x, q_player.single_mut()) {
        let dragged = pos.x - prev_x;
        tf.translation.x = area.clamp_x(tf.translation.x + dragged, cfg.player.width * 0.5);
    }
    *last_x = Some(pos.x);
}

/// Press (click, tap or space) fires one bullet straight up from the ship.
fn fire_on_press(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    cfg: Res<GameConfig>,
    assets: Res<GameAssets>,
    scene: Res<SceneSize>,
    q_player: Query<&Transform, With<Player>>,
    mut sfx: EventWriter<PlaySfx>,
) {
    let pressed = buttons.just_pressed(MouseButton::Left)
        || keys.just_pressed(KeyCode::Space)
        || touches.any_just_pressed();
    if !pressed {
        return;
    }
    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let req = spawner::fire_bullet(player_tf.translation.truncate(), scene.y);
    commands.spawn((
        Sprite {
            image: assets.bullet.clone(),
            custom_size: Some(Vec2::new(cfg.bullet.width, cfg.bullet.height)),
            ..default()
        },
        Transform::from_xyz(req.start.x, req.start.y, 1.0),
        PathMotion::new(req.start, req.end, req.duration_secs),
        RigidBody::KinematicPositionBased,
        Collider::cuboid(cfg.bullet.width * 0.5, cfg.bullet.height * 0.5),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::KINEMATIC_KINEMATIC,
        collision_groups(Category::Bullet),
        Category::Bullet,
        GameplayEntity,
    ));
    sfx.write(PlaySfx(Sfx::Shoot));
}
