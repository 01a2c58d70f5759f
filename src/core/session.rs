use bevy::prelude::*;

use crate::core::levels::LevelTable;

/// Lifecycle phase of one playthrough.
///
/// StartScreen -> Playing -> GameOver, monotonic; GameOver is terminal for
/// the session (a restart builds a fresh `GameSession`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    StartScreen,
    Playing,
    GameOver,
}

/// Directive returned when a level (re)starts: the adapter replaces the
/// repeating spawn timer with the new interval and shows the level banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelStart {
    pub level: u32,
    pub spawn_interval_secs: f32,
}

/// Outcome of an enemy slipping past the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomOutcome {
    /// Not in Playing phase; nothing happened.
    Ignored,
    LifeLost { lives: u32 },
    GameOver,
}

pub const STARTING_LIVES: u32 = 3;

/// Per-playthrough state: score, lives, level and phase. Owned exclusively
/// by the running app as a resource; mutated only through the operations
/// below, all of which are total.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    score: u32,
    lives: u32,
    level: u32,
    phase: Phase,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            phase: Phase::StartScreen,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Enter Playing and kick off level-1 spawning. Valid only from the
    /// start screen; any other phase is a no-op.
    pub fn start_game(&mut self, levels: &LevelTable) -> Option<LevelStart> {
        if self.phase != Phase::StartScreen {
            return None;
        }
        self.phase = Phase::Playing;
        Some(LevelStart {
            level: self.level,
            spawn_interval_secs: levels.spawn_interval_for(self.level),
        })
    }

    /// Direct enemy/ship contact: instant game over, no lives decrement.
    /// The "missed enemy" life-loss path is separate.
    pub fn on_enemy_player_collision(&mut self) {
        if self.phase == Phase::Playing {
            self.phase = Phase::GameOver;
        }
    }

    /// A bullet destroyed an on-screen enemy: score one point, and advance
    /// the level when the new score sits on an advance threshold.
    pub fn on_enemy_bullet_collision(&mut self, levels: &LevelTable) -> Option<LevelStart> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.score += 1;
        if levels.should_advance(self.score) {
            Some(self.advance_level(levels))
        } else {
            None
        }
    }

    /// An enemy reached the bottom edge unharmed. Only counts in Playing;
    /// lives saturate at zero and hitting zero ends the session.
    pub fn on_enemy_reached_bottom(&mut self) -> BottomOutcome {
        if self.phase != Phase::Playing {
            return BottomOutcome::Ignored;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = Phase::GameOver;
            BottomOutcome::GameOver
        } else {
            BottomOutcome::LifeLost { lives: self.lives }
        }
    }

    fn advance_level(&mut self, levels: &LevelTable) -> LevelStart {
        self.level += 1;
        LevelStart {
            level: self.level,
            spawn_interval_secs: levels.spawn_interval_for(self.level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_game_only_from_start_screen() {
        let levels = LevelTable::default();
        let mut s = GameSession::new();
        let start = s.start_game(&levels).expect("valid from start screen");
        assert_eq!(start.level, 1);
        assert!((start.spawn_interval_secs - 1.2).abs() < 1e-6);
        assert_eq!(s.phase(), Phase::Playing);
        // Second call is a no-op.
        assert!(s.start_game(&levels).is_none());
    }

    #[test]
    fn enemy_player_collision_is_instant_game_over() {
        let levels = LevelTable::default();
        let mut s = GameSession::new();
        s.start_game(&levels);
        s.on_enemy_player_collision();
        assert_eq!(s.phase(), Phase::GameOver);
        // Lives untouched on the direct-collision path.
        assert_eq!(s.lives(), STARTING_LIVES);
    }

    #[test]
    fn score_advances_level_at_five() {
        let levels = LevelTable::default();
        let mut s = GameSession::new();
        s.start_game(&levels);
        let mut advances = 0;
        for _ in 0..5 {
            if let Some(start) = s.on_enemy_bullet_collision(&levels) {
                advances += 1;
                assert_eq!(start.level, 2);
                assert!((start.spawn_interval_secs - 0.8).abs() < 1e-6);
            }
        }
        assert_eq!(advances, 1);
        assert_eq!(s.score(), 5);
        assert_eq!(s.level(), 2);
    }

    #[test]
    fn lives_count_down_to_game_over() {
        let levels = LevelTable::default();
        let mut s = GameSession::new();
        s.start_game(&levels);
        assert_eq!(
            s.on_enemy_reached_bottom(),
            BottomOutcome::LifeLost { lives: 2 }
        );
        assert_eq!(
            s.on_enemy_reached_bottom(),
            BottomOutcome::LifeLost { lives: 1 }
        );
        assert_eq!(s.on_enemy_reached_bottom(), BottomOutcome::GameOver);
        assert_eq!(s.phase(), Phase::GameOver);
        // Further events are ignored and lives never go negative.
        assert_eq!(s.on_enemy_reached_bottom(), BottomOutcome::Ignored);
        assert_eq!(s.lives(), 0);
    }

    #[test]
    fn scoring_ignored_outside_playing() {
        let levels = LevelTable::default();
        let mut s = GameSession::new();
        assert!(s.on_enemy_bullet_collision(&levels).is_none());
        assert_eq!(s.score(), 0);
        s.start_game(&levels);
        s.on_enemy_player_collision();
        assert!(s.on_enemy_bullet_collision(&levels).is_none());
        assert_eq!(s.score(), 0);
    }
}
