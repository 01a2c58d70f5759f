use bevy::prelude::*;

/// Collision-category tag carried by every collidable entity. Mirrored onto
/// the rapier `CollisionGroups` membership bits on the adapter side; the
/// classifier itself only looks at the tags.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Player,
    Bullet,
    Enemy,
}

/// Semantic meaning of a contact pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// An enemy reached the player ship.
    EnemyPlayer,
    /// A bullet hit an enemy that is already on screen.
    EnemyBullet,
    /// Everything else (bullet/bullet, enemy/enemy, off-screen hits).
    None,
}

/// Classify a contact pair. Symmetric in its two tagged operands; positions
/// are scene coordinates (y-up, 0 at the bottom edge).
///
/// A bullet hit only counts while the enemy's y is strictly below
/// `screen_height`: enemies spawn above the visible top edge and must not be
/// shot before they have really entered play.
pub fn classify(
    tag_a: Category,
    pos_a: Vec2,
    tag_b: Category,
    pos_b: Vec2,
    screen_height: f32,
) -> CollisionKind {
    use Category::*;
    match (tag_a, tag_b) {
        (Enemy, Player) | (Player, Enemy) => CollisionKind::EnemyPlayer,
        (Enemy, Bullet) if pos_a.y < screen_height => CollisionKind::EnemyBullet,
        (Bullet, Enemy) if pos_b.y < screen_height => CollisionKind::EnemyBullet,
        _ => CollisionKind::None,
    }
}
