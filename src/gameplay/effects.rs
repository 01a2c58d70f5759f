use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::gameplay::assets::GameAssets;

/// Short scale-up / fade-out burst at a destroyed entity's position.
/// Explosions outlive the session on purpose so the ship's final blast is
/// still visible over the game-over screen.
#[derive(Component)]
pub struct Explosion {
    timer: Timer,
    base_size: f32,
}

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, animate_explosions);
    }
}

pub fn spawn_explosion(
    commands: &mut Commands,
    assets: &GameAssets,
    cfg: &GameConfig,
    pos: Vec2,
) {
    let size = cfg.effects.explosion_size;
    commands.spawn((
        Sprite {
            image: assets.explosion.clone(),
            custom_size: Some(Vec2::splat(size * 0.5)),
            ..default()
        },
        Transform::from_xyz(pos.x, pos.y, 3.0),
        Explosion {
            timer: Timer::from_seconds(cfg.effects.explosion_secs, TimerMode::Once),
            base_size: size,
        },
    ));
}

fn animate_explosions(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut Explosion, &mut Sprite)>,
) {
    for (entity, mut explosion, mut sprite) in &mut q {
        explosion.timer.tick(time.delta());
        if explosion.timer.finished() {
            commands.entity(entity).despawn();
            continue;
        }
        let t = explosion.timer.fraction();
        sprite.custom_size = Some(Vec2::splat(explosion.base_size * (0.5 + t)));
        sprite.color = sprite.color.with_alpha(1.0 - t);
    }
}
