use bevy::prelude::*;

use crate::core::config::LevelConfig;

/// Ordered level -> enemy spawn interval mapping.
///
/// `intervals[0]` is level 1. Levels past the tabulated entries fall back to
/// `default_interval`. Spawn cadence is the only thing that scales with
/// level; enemy travel speed stays fixed.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LevelTable {
    intervals: Vec<f32>,
    default_interval: f32,
    advance_scores: Vec<u32>,
}

impl LevelTable {
    pub fn new(intervals: Vec<f32>, default_interval: f32, advance_scores: Vec<u32>) -> Self {
        Self {
            intervals,
            default_interval,
            advance_scores,
        }
    }

    pub fn from_config(cfg: &LevelConfig) -> Self {
        Self::new(
            cfg.spawn_intervals.clone(),
            cfg.default_spawn_interval,
            cfg.advance_scores.clone(),
        )
    }

    /// Seconds between enemy spawns at `level` (1-based).
    pub fn spawn_interval_for(&self, level: u32) -> f32 {
        level
            .checked_sub(1)
            .and_then(|i| self.intervals.get(i as usize))
            .copied()
            .unwrap_or(self.default_interval)
    }

    /// True exactly at the tabulated advance scores (a fixed set, checked on
    /// every increment; deliberately not an "every N points" formula).
    pub fn should_advance(&self, score: u32) -> bool {
        self.advance_scores.contains(&score)
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::from_config(&LevelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabulated_levels_use_table() {
        let t = LevelTable::default();
        assert!((t.spawn_interval_for(1) - 1.2).abs() < 1e-6);
        assert!((t.spawn_interval_for(2) - 0.8).abs() < 1e-6);
        assert!((t.spawn_interval_for(3) - 0.5).abs() < 1e-6);
        assert!((t.spawn_interval_for(4) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn untabulated_levels_fall_back_to_default() {
        let t = LevelTable::default();
        assert!((t.spawn_interval_for(5) - 4.0).abs() < 1e-6);
        assert!((t.spawn_interval_for(99) - 4.0).abs() < 1e-6);
        // Level 0 never occurs but must not panic either.
        assert!((t.spawn_interval_for(0) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn advance_exactly_at_thresholds() {
        let t = LevelTable::default();
        for score in 0..30 {
            let expected = matches!(score, 5 | 10 | 15);
            assert_eq!(t.should_advance(score), expected, "score {score}");
        }
    }
}
