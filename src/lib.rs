pub mod app;
pub mod core;
pub mod gameplay;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::classify::{classify, Category, CollisionKind};
pub use crate::core::config::GameConfig;
pub use crate::core::levels::LevelTable;
pub use crate::core::session::{GameSession, LevelStart, Phase};
pub use crate::core::spawner::{fire_bullet, spawn_enemy, Playfield, SpawnKind, SpawnRequest};
