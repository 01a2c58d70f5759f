use bevy::prelude::*;
use rand::Rng;

/// Horizontal extent of the playable area, scene coordinates.
///
/// The playfield is the screen clamped to a 16:9 column (playable width =
/// screen height / max aspect), centered; on wide windows this leaves dead
/// margins the player and enemies never enter.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub min_x: f32,
    pub max_x: f32,
}

/// Floor for the playable width so a degenerate window config (zero or
/// inverted dimensions) can never produce an empty spawn range.
const MIN_PLAYABLE_WIDTH: f32 = 1.0;

impl Playfield {
    pub fn from_screen(screen: Vec2, max_aspect_ratio: f32) -> Self {
        let raw = screen.y / max_aspect_ratio;
        let playable_width = if raw.is_finite() {
            raw.max(MIN_PLAYABLE_WIDTH)
        } else {
            MIN_PLAYABLE_WIDTH
        };
        let margin = (screen.x - playable_width) * 0.5;
        Self {
            min_x: margin,
            max_x: margin + playable_width,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn clamp_x(&self, x: f32, half_width: f32) -> f32 {
        let lo = self.min_x + half_width;
        let hi = self.max_x - half_width;
        if lo >= hi {
            // Sprite wider than the field: pin it to the center.
            self.min_x + self.width() * 0.5
        } else {
            x.clamp(lo, hi)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Enemy,
    Bullet,
}

/// Ephemeral spawn command, produced here and consumed immediately by the
/// adapter (sprite + collider + scripted path). Positions are scene
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub kind: SpawnKind,
    pub start: Vec2,
    pub end: Vec2,
    pub heading_radians: f32,
    pub duration_secs: f32,
}

/// Enemy descent time, fixed at every level: difficulty scales spawn
/// cadence, not travel speed.
pub const ENEMY_DESCENT_SECS: f32 = 1.5;
/// Bullet flight time from the ship to past the top edge.
pub const BULLET_FLIGHT_SECS: f32 = 1.0;
/// How far past the top edge a bullet travels before despawning, roughly a
/// sprite height.
pub const BULLET_EXIT_MARGIN: f32 = 60.0;

/// Pick a descent path for a new enemy: independent uniform random x for
/// start and end (slight horizontal drift), start just above the visible
/// top edge, end just below the bottom. The heading is the angle of the
/// start->end vector so the sprite points along its travel direction.
pub fn spawn_enemy(area: &Playfield, screen_height: f32, rng: &mut impl Rng) -> SpawnRequest {
    let start = Vec2::new(rng.gen_range(area.min_x..area.max_x), screen_height * 1.2);
    let end = Vec2::new(rng.gen_range(area.min_x..area.max_x), -screen_height * 0.2);
    let delta = end - start;
    SpawnRequest {
        kind: SpawnKind::Enemy,
        start,
        end,
        heading_radians: delta.y.atan2(delta.x),
        duration_secs: ENEMY_DESCENT_SECS,
    }
}

/// A bullet always flies straight up from the ship's current position to
/// just above the top edge, at fixed duration.
pub fn fire_bullet(player_pos: Vec2, screen_height: f32) -> SpawnRequest {
    let end = Vec2::new(player_pos.x, screen_height + BULLET_EXIT_MARGIN);
    SpawnRequest {
        kind: SpawnKind::Bullet,
        start: player_pos,
        end,
        heading_radians: std::f32::consts::FRAC_PI_2,
        duration_secs: BULLET_FLIGHT_SECS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SCREEN: Vec2 = Vec2::new(768.0, 1024.0);

    fn playfield() -> Playfield {
        Playfield::from_screen(SCREEN, 16.0 / 9.0)
    }

    #[test]
    fn playfield_is_centered_aspect_column() {
        let area = playfield();
        // 1024 / (16/9) = 576 wide, centered in 768.
        assert!((area.width() - 576.0).abs() < 1e-3);
        assert!((area.min_x - 96.0).abs() < 1e-3);
        assert!((area.max_x - 672.0).abs() < 1e-3);
    }

    #[test]
    fn clamp_keeps_ship_inside_margins() {
        let area = playfield();
        assert_eq!(area.clamp_x(0.0, 44.0), area.min_x + 44.0);
        assert_eq!(area.clamp_x(5000.0, 44.0), area.max_x - 44.0);
        assert_eq!(area.clamp_x(300.0, 44.0), 300.0);
    }

    #[test]
    fn oversized_ship_pins_to_playfield_center() {
        // 2000x100: playable column is 56.25 wide, narrower than the ship.
        let area = Playfield::from_screen(Vec2::new(2000.0, 100.0), 16.0 / 9.0);
        assert!(area.width() < 88.0);
        let center = area.min_x + area.width() * 0.5;
        assert!((area.clamp_x(0.0, 44.0) - center).abs() < 1e-3);
        assert!((area.clamp_x(5000.0, 44.0) - center).abs() < 1e-3);
    }

    #[test]
    fn degenerate_screen_still_yields_spawnable_field() {
        for screen in [
            Vec2::new(768.0, 0.0),
            Vec2::new(768.0, -1024.0),
            Vec2::new(0.0, 0.0),
        ] {
            let area = Playfield::from_screen(screen, 16.0 / 9.0);
            assert!(area.width() > 0.0, "{screen:?}");
            let mut rng = StdRng::seed_from_u64(3);
            let req = spawn_enemy(&area, screen.y, &mut rng);
            assert!(req.start.x >= area.min_x && req.start.x < area.max_x);
        }
    }

    #[test]
    fn enemy_paths_stay_in_bounds() {
        let area = playfield();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let req = spawn_enemy(&area, SCREEN.y, &mut rng);
            assert_eq!(req.kind, SpawnKind::Enemy);
            assert!(req.start.x >= area.min_x && req.start.x < area.max_x);
            assert!(req.end.x >= area.min_x && req.end.x < area.max_x);
            assert!((req.start.y - SCREEN.y * 1.2).abs() < 1e-3);
            assert!((req.end.y + SCREEN.y * 0.2).abs() < 1e-3);
            assert!((req.duration_secs - ENEMY_DESCENT_SECS).abs() < 1e-6);
        }
    }

    #[test]
    fn enemy_heading_points_along_travel() {
        let area = playfield();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let req = spawn_enemy(&area, SCREEN.y, &mut rng);
            let delta = req.end - req.start;
            let expected = delta.y.atan2(delta.x);
            assert!((req.heading_radians - expected).abs() < 1e-6);
            // Descending, so the heading always points downward.
            assert!(req.heading_radians < 0.0);
        }
    }

    #[test]
    fn bullets_fly_straight_up() {
        let req = fire_bullet(Vec2::new(384.0, 204.8), SCREEN.y);
        assert_eq!(req.kind, SpawnKind::Bullet);
        assert_eq!(req.start.x, req.end.x);
        assert!(req.end.y > SCREEN.y);
        assert!((req.duration_secs - BULLET_FLIGHT_SECS).abs() < 1e-6);
        assert!((req.heading_radians - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}
