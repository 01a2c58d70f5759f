use std::collections::HashSet;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::AppState;
use crate::core::classify::{classify, Category, CollisionKind};
use crate::core::config::GameConfig;
use crate::core::levels::LevelTable;
use crate::core::session::GameSession;
use crate::gameplay::assets::GameAssets;
use crate::gameplay::audio::{PlaySfx, Sfx};
use crate::gameplay::effects;
use crate::gameplay::enemies::EnemySpawnTimer;
use crate::gameplay::hud::ShowBanner;
use crate::gameplay::{GameplaySet, SceneSize};

const PLAYER_GROUP: Group = Group::GROUP_1;
const BULLET_GROUP: Group = Group::GROUP_2;
const ENEMY_GROUP: Group = Group::GROUP_3;

/// Category tags double as rapier group memberships; the filters already
/// drop bullet/bullet and enemy/enemy pairs before they reach the
/// classifier.
pub fn collision_groups(category: Category) -> CollisionGroups {
    match category {
        Category::Player => CollisionGroups::new(PLAYER_GROUP, ENEMY_GROUP),
        Category::Bullet => CollisionGroups::new(BULLET_GROUP, ENEMY_GROUP),
        Category::Enemy => CollisionGroups::new(ENEMY_GROUP, PLAYER_GROUP | BULLET_GROUP),
    }
}

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_systems(
                Update,
                handle_collisions
                    .in_set(GameplaySet)
                    .run_if(in_state(AppState::Playing)),
            );
    }
}

/// Feed rapier contact pairs through the classifier and resolve the result
/// against the session: kills score (and may advance the level), ship hits
/// end the game outright.
#[allow(clippy::too_many_arguments)]
fn handle_collisions(
    mut commands: Commands,
    mut ev_collisions: EventReader<CollisionEvent>,
    q_tagged: Query<(&Category, &Transform)>,
    scene: Res<SceneSize>,
    cfg: Res<GameConfig>,
    levels: Res<LevelTable>,
    assets: Res<GameAssets>,
    mut session: ResMut<GameSession>,
    mut timer: ResMut<EnemySpawnTimer>,
    mut next_state: ResMut<NextState<AppState>>,
    mut sfx: EventWriter<PlaySfx>,
    mut banner: EventWriter<ShowBanner>,
) {
    // A bullet can start contacts with two enemies in one frame; the first
    // resolved pair consumes both entities.
    let mut consumed: HashSet<Entity> = HashSet::new();

    for ev in ev_collisions.read() {
        let CollisionEvent::Started(e1, e2, _flags) = ev else {
            continue;
        };
        if consumed.contains(e1) || consumed.contains(e2) {
            continue;
        }
        let Ok((tag_a, tf_a)) = q_tagged.get(*e1) else {
            continue;
        };
        let Ok((tag_b, tf_b)) = q_tagged.get(*e2) else {
            continue;
        };
        let pos_a = tf_a.translation.truncate();
        let pos_b = tf_b.translation.truncate();

        match classify(*tag_a, pos_a, *tag_b, pos_b, scene.y) {
            CollisionKind::EnemyPlayer => {
                consumed.insert(*e1);
                consumed.insert(*e2);
                commands.entity(*e1).try_despawn();
                commands.entity(*e2).try_despawn();
                effects::spawn_explosion(&mut commands, &assets, &cfg, (pos_a + pos_b) * 0.5);
                sfx.write(PlaySfx(Sfx::Explosion));
                session.on_enemy_player_collision();
                info!(target: "session", "ship destroyed: game over with score {}", session.score());
                next_state.set(AppState::GameOver);
            }
            CollisionKind::EnemyBullet => {
                consumed.insert(*e1);
                consumed.insert(*e2);
                commands.entity(*e1).try_despawn();
                commands.entity(*e2).try_despawn();
                let enemy_pos = if *tag_a == Category::Enemy { pos_a } else { pos_b };
                effects::spawn_explosion(&mut commands, &assets, &cfg, enemy_pos);
                sfx.write(PlaySfx(Sfx::Explosion));
                if let Some(start) = session.on_enemy_bullet_collision(&levels) {
                    timer.restart(start.spawn_interval_secs);
                    banner.write(ShowBanner::level(start.level));
                    info!(
                        target: "session",
                        "level {} reached at score {}, spawning every {:.2}s",
                        start.level,
                        session.score(),
                        start.spawn_interval_secs
                    );
                }
            }
            CollisionKind::None => {}
        }
    }
}
