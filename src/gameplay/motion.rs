use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::classify::Category;
use crate::core::spawner::SpawnKind;
use crate::gameplay::GameplaySet;

/// Scripted straight-line move: lerp from `start` to `end` over `duration`,
/// then report completion. The explicit-path replacement for the engine
/// "move then remove" action sequence; collision response may despawn the
/// entity mid-flight without this ever noticing.
#[derive(Component, Debug, Clone)]
pub struct PathMotion {
    pub start: Vec2,
    pub end: Vec2,
    pub duration_secs: f32,
    pub elapsed_secs: f32,
}

impl PathMotion {
    pub fn new(start: Vec2, end: Vec2, duration_secs: f32) -> Self {
        Self {
            start,
            end,
            duration_secs,
            elapsed_secs: 0.0,
        }
    }
}

/// An entity reached the end of its scripted path unharmed.
#[derive(Event, Debug, Clone, Copy)]
pub struct PathCompleted {
    pub entity: Entity,
    pub kind: SpawnKind,
}

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PathCompleted>().add_systems(
            Update,
            (drive_paths, despawn_finished_bullets)
                .chain()
                .in_set(GameplaySet)
                .run_if(in_state(AppState::Playing)),
        );
    }
}

pub(crate) fn drive_paths(
    time: Res<Time>,
    mut q: Query<(Entity, &mut PathMotion, &mut Transform, &Category)>,
    mut completed: EventWriter<PathCompleted>,
) {
    let dt = time.delta_secs();
    for (entity, mut path, mut tf, category) in &mut q {
        path.elapsed_secs += dt;
        let t = (path.elapsed_secs / path.duration_secs).min(1.0);
        let pos = path.start.lerp(path.end, t);
        tf.translation.x = pos.x;
        tf.translation.y = pos.y;
        if t >= 1.0 {
            let kind = match category {
                Category::Bullet => SpawnKind::Bullet,
                _ => SpawnKind::Enemy,
            };
            completed.write(PathCompleted { entity, kind });
        }
    }
}

/// Bullets that fly off the top edge are simply removed; enemy completions
/// are handled by the enemy plugin (life loss).
fn despawn_finished_bullets(
    mut commands: Commands,
    mut completed: EventReader<PathCompleted>,
) {
    for ev in completed.read() {
        if ev.kind == SpawnKind::Bullet {
            // The same bullet may have been consumed by a collision this
            // frame already.
            commands.entity(ev.entity).try_despawn();
        }
    }
}
