use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Handles for every sprite and sound the game uses, loaded once at startup
/// from the paths in the config. Bevy keeps serving placeholder data until
/// the files arrive, so nothing here blocks.
#[derive(Resource)]
pub struct GameAssets {
    pub background: Handle<Image>,
    pub player: Handle<Image>,
    pub enemy: Handle<Image>,
    pub bullet: Handle<Image>,
    pub explosion: Handle<Image>,
    pub music: Handle<AudioSource>,
    pub shoot_sfx: Handle<AudioSource>,
    pub explosion_sfx: Handle<AudioSource>,
}

pub struct AssetsPlugin;

impl Plugin for AssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_assets);
    }
}

fn load_assets(mut commands: Commands, asset_server: Res<AssetServer>, cfg: Res<GameConfig>) {
    commands.insert_resource(GameAssets {
        background: asset_server.load(cfg.effects.background_sprite.as_str()),
        player: asset_server.load(cfg.player.sprite.as_str()),
        enemy: asset_server.load(cfg.enemy.sprite.as_str()),
        bullet: asset_server.load(cfg.bullet.sprite.as_str()),
        explosion: asset_server.load(cfg.effects.explosion_sprite.as_str()),
        music: asset_server.load(cfg.audio.music.as_str()),
        shoot_sfx: asset_server.load(cfg.audio.shoot.as_str()),
        explosion_sfx: asset_server.load(cfg.audio.explosion.as_str()),
    });
}
