use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 768.0,
            height: 1024.0,
            title: "Space Intruders".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayfieldConfig {
    /// Playable width = screen height / this ratio, centered horizontally.
    pub max_aspect_ratio: f32,
}
impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            max_aspect_ratio: 16.0 / 9.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub sprite: String,
    pub width: f32,
    pub height: f32,
    /// Ship rest position as a fraction of screen height from the bottom.
    pub start_y_frac: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            sprite: "sprites/player_ship.png".into(),
            width: 88.0,
            height: 100.0,
            start_y_frac: 0.2,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BulletConfig {
    pub sprite: String,
    pub width: f32,
    pub height: f32,
}
impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            sprite: "sprites/bullet.png".into(),
            width: 18.0,
            height: 56.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnemyConfig {
    pub sprite: String,
    pub width: f32,
    pub height: f32,
}
impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            sprite: "sprites/enemy_ship.png".into(),
            width: 88.0,
            height: 110.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LevelConfig {
    /// Enemy spawn interval per level, index 0 = level 1.
    pub spawn_intervals: Vec<f32>,
    /// Fallback interval for levels past the table.
    pub default_spawn_interval: f32,
    /// Exact scores at which the level advances.
    pub advance_scores: Vec<u32>,
}
impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            spawn_intervals: vec![1.2, 0.8, 0.5, 0.3],
            default_spawn_interval: 4.0,
            advance_scores: vec![5, 10, 15],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    pub background_sprite: String,
    pub explosion_sprite: String,
    pub explosion_size: f32,
    pub explosion_secs: f32,
    /// How long the "Starting Level N" banner stays up.
    pub banner_secs: f32,
}
impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            background_sprite: "sprites/background.png".into(),
            explosion_sprite: "sprites/explosion.png".into(),
            explosion_size: 140.0,
            explosion_secs: 0.4,
            banner_secs: 1.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub music: String,
    pub shoot: String,
    pub explosion: String,
}
impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            music: "audio/bg_music.ogg".into(),
            shoot: "audio/bullet.ogg".into(),
            explosion: "audio/explosion.ogg".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub playfield: PlayfieldConfig,
    pub player: PlayerConfig,
    pub bullet: BulletConfig,
    pub enemy: EnemyConfig,
    pub levels: LevelConfig,
    pub effects: EffectsConfig,
    pub audio: AudioConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Missing or broken config falls back to defaults; startup logs the
    /// error instead of failing.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Non-fatal sanity pass; each warning is logged once at startup.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be positive".into());
        }
        if self.playfield.max_aspect_ratio <= 0.0 {
            w.push("playfield.max_aspect_ratio must be positive".into());
        } else if self.window.height / self.playfield.max_aspect_ratio < self.player.width {
            w.push("playable column is narrower than the player sprite; the ship will be pinned to its center".into());
        }
        if !(0.0..=1.0).contains(&self.player.start_y_frac) {
            w.push("player.start_y_frac outside 0..=1".into());
        }
        if self.levels.default_spawn_interval <= 0.0 {
            w.push("levels.default_spawn_interval must be positive".into());
        }
        for (i, secs) in self.levels.spawn_intervals.iter().enumerate() {
            if *secs <= 0.0 {
                w.push(format!("levels.spawn_intervals[{i}] must be positive"));
            }
        }
        if self.levels.advance_scores.windows(2).any(|p| p[0] >= p[1]) {
            w.push("levels.advance_scores must be strictly increasing".into());
        }
        if self.effects.banner_secs <= 0.0 {
            w.push("effects.banner_secs must be positive".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 1536.0, height: 2048.0, title: "Test"),
            playfield: (max_aspect_ratio: 1.7777778),
            player: (sprite: "sprites/ship.png", width: 90.0, height: 96.0, start_y_frac: 0.2),
            bullet: (width: 16.0, height: 50.0),
            enemy: (width: 80.0, height: 104.0),
            levels: (
                spawn_intervals: [1.2, 0.8, 0.5, 0.3],
                default_spawn_interval: 4.0,
                advance_scores: [5, 10, 15],
            ),
            effects: (banner_secs: 2.0),
            audio: (enabled: false),
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 1536.0);
        assert_eq!(cfg.player.sprite, "sprites/ship.png");
        assert_eq!(cfg.levels.spawn_intervals.len(), 4);
        assert_eq!(cfg.effects.banner_secs, 2.0);
        assert!(!cfg.audio.enabled);
        // Partial sections keep their defaults.
        assert_eq!(cfg.bullet.sprite, "sprites/bullet.png");
        assert!(
            cfg.validate().is_empty(),
            "expected no validation warnings for sample config"
        );
    }

    #[test]
    fn defaults_validate_clean() {
        assert!(GameConfig::default().validate().is_empty());
    }

    #[test]
    fn validate_detects_warnings() {
        let mut cfg = GameConfig::default();
        cfg.window.width = -1.0;
        cfg.levels.spawn_intervals[1] = 0.0;
        cfg.levels.advance_scores = vec![10, 5];
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 3, "{warnings:?}");
    }

    #[test]
    fn validate_flags_playfield_narrower_than_ship() {
        let mut cfg = GameConfig::default();
        cfg.window.width = 2000.0;
        cfg.window.height = 100.0;
        let warnings = cfg.validate();
        assert!(
            warnings.iter().any(|w| w.contains("narrower than the player")),
            "{warnings:?}"
        );
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let (cfg, err) = GameConfig::load_or_default("no/such/config.ron");
        assert_eq!(cfg, GameConfig::default());
        assert!(err.is_some());
    }
}
