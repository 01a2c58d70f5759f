use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::classify::Category;
use crate::core::config::{GameConfig, LevelConfig};
use crate::core::session::{BottomOutcome, GameSession};
use crate::core::spawner::{self, Playfield, SpawnKind};
use crate::gameplay::assets::GameAssets;
use crate::gameplay::collisions::collision_groups;
use crate::gameplay::motion::{drive_paths, PathCompleted, PathMotion};
use crate::gameplay::{GameplayEntity, GameplaySet, SceneSize};

#[derive(Component)]
pub struct Enemy;

/// Repeating spawn cadence timer. "Cancel the pending spawn timer" on a
/// level change means replacing this in place with the new interval.
#[derive(Resource, Deref, DerefMut)]
pub struct EnemySpawnTimer(Timer);

impl EnemySpawnTimer {
    pub fn restart(&mut self, interval_secs: f32) {
        self.0 = Timer::from_seconds(interval_secs, TimerMode::Repeating);
    }
}

impl Default for EnemySpawnTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(
            LevelConfig::default().default_spawn_interval,
            TimerMode::Repeating,
        ))
    }
}

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemySpawnTimer>().add_systems(
            Update,
            (
                spawn_enemies,
                handle_enemy_breakthrough.after(drive_paths),
            )
                .in_set(GameplaySet)
                .run_if(in_state(AppState::Playing)),
        );
    }
}

/// Each timer tick drops one enemy on a fresh random descent path.
fn spawn_enemies(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<EnemySpawnTimer>,
    cfg: Res<GameConfig>,
    assets: Res<GameAssets>,
    area: Res<Playfield>,
    scene: Res<SceneSize>,
) {
    timer.tick(time.delta());
    let mut rng = rand::thread_rng();
    for _ in 0..timer.times_finished_this_tick() {
        let req = spawner::spawn_enemy(&area, scene.y, &mut rng);
        // Enemy art faces +x at zero rotation, so the heading angle rotates
        // the nose onto the travel direction.
        commands.spawn((
            Sprite {
                image: assets.enemy.clone(),
                custom_size: Some(Vec2::new(cfg.enemy.width, cfg.enemy.height)),
                ..default()
            },
            Transform::from_xyz(req.start.x, req.start.y, 2.0)
                .with_rotation(Quat::from_rotation_z(req.heading_radians)),
            PathMotion::new(req.start, req.end, req.duration_secs),
            RigidBody::KinematicPositionBased,
            Collider::cuboid(cfg.enemy.width * 0.5, cfg.enemy.height * 0.5),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            ActiveCollisionTypes::KINEMATIC_KINEMATIC,
            collision_groups(Category::Enemy),
            Category::Enemy,
            Enemy,
            GameplayEntity,
        ));
    }
}

/// An enemy finished its descent without being shot: it slips off the
/// bottom edge and costs a life.
fn handle_enemy_breakthrough(
    mut commands: Commands,
    mut completed: EventReader<PathCompleted>,
    mut session: ResMut<GameSession>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for ev in completed.read() {
        if ev.kind != SpawnKind::Enemy {
            continue;
        }
        commands.entity(ev.entity).try_despawn();
        match session.on_enemy_reached_bottom() {
            BottomOutcome::LifeLost { lives } => {
                info!(target: "session", "enemy broke through, {lives} lives left");
            }
            BottomOutcome::GameOver => {
                info!(target: "session", "out of lives: game over with score {}", session.score());
                next_state.set(AppState::GameOver);
            }
            BottomOutcome::Ignored => {}
        }
    }
}
