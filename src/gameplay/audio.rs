use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::gameplay::assets::GameAssets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    Shoot,
    Explosion,
}

/// Fire-and-forget sound directive from gameplay systems.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlaySfx(pub Sfx);

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlaySfx>()
            .add_systems(Startup, start_music)
            .add_systems(Update, play_sfx);
    }
}

/// Background track loops for the whole run, across every screen.
fn start_music(mut commands: Commands, cfg: Res<GameConfig>, assets: Res<GameAssets>) {
    if !cfg.audio.enabled {
        return;
    }
    commands.spawn((AudioPlayer::new(assets.music.clone()), PlaybackSettings::LOOP));
}

fn play_sfx(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    assets: Res<GameAssets>,
    mut ev: EventReader<PlaySfx>,
) {
    if !cfg.audio.enabled {
        ev.clear();
        return;
    }
    for PlaySfx(sfx) in ev.read() {
        let source = match sfx {
            Sfx::Shoot => assets.shoot_sfx.clone(),
            Sfx::Explosion => assets.explosion_sfx.clone(),
        };
        commands.spawn((AudioPlayer::new(source), PlaybackSettings::DESPAWN));
    }
}
