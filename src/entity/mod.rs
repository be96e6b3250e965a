//! Game entities: the player, bullets, chasers, pickups, and falling obstacles.
//!
//! Each entity is a plain struct with an `update` rule called once per tick by
//! the simulation. Entities never touch each other directly; pairwise
//! interaction happens in the collision phase of the tick.

use glam::Vec2;

use crate::map::Maze;

pub mod bullet;
pub mod chaser;
pub mod collision;
pub mod obstacle;
pub mod pickup;
pub mod player;

pub use bullet::Bullet;
pub use chaser::Chaser;
pub use obstacle::Obstacle;
pub use pickup::Pickup;
pub use player::Player;

/// Moves a position by `delta`, one axis at a time.
///
/// The x step is tested against the old y, then the y step against the
/// (possibly updated) x. A blocked axis simply drops out, which is what lets
/// entities slide along walls instead of sticking to them. Both checks must
/// stay independent; a single combined passability test loses the slide.
pub(crate) fn slide_move(maze: &Maze, position: Vec2, delta: Vec2) -> Vec2 {
    let mut next = position;
    if maze.is_passable(Vec2::new(position.x + delta.x, position.y)) {
        next.x = position.x + delta.x;
    }
    if maze.is_passable(Vec2::new(next.x, position.y + delta.y)) {
        next.y = position.y + delta.y;
    }
    next
}
