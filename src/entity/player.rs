//! The player avatar: heading-based movement driven by held-key intents.

use glam::Vec2;

use crate::constants::{
    BULLET_LIFE_TICKS, MUZZLE_OFFSET, PLAYER_RADIUS, PLAYER_START_CELL, PLAYER_STEP,
    TURN_STEP_DEGREES,
};
use crate::entity::collision::Collidable;
use crate::entity::{slide_move, Bullet};
use crate::map::Maze;

/// Forward/backward movement intent, held while a key is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveIntent {
    Reverse,
    #[default]
    Idle,
    Forward,
}

impl MoveIntent {
    fn sign(self) -> f32 {
        match self {
            MoveIntent::Reverse => -1.0,
            MoveIntent::Idle => 0.0,
            MoveIntent::Forward => 1.0,
        }
    }
}

/// Turning intent, held while a key is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnIntent {
    Left,
    #[default]
    Idle,
    Right,
}

impl TurnIntent {
    fn sign(self) -> f32 {
        match self {
            TurnIntent::Left => -1.0,
            TurnIntent::Idle => 0.0,
            TurnIntent::Right => 1.0,
        }
    }
}

pub struct Player {
    pub position: Vec2,
    /// Heading angle in degrees; 0° points along +x.
    pub yaw: f32,
    pub movement: MoveIntent,
    pub turning: TurnIntent,
}

impl Player {
    pub fn new() -> Self {
        Player {
            position: Maze::cell_to_world(PLAYER_START_CELL),
            yaw: 0.0,
            movement: MoveIntent::default(),
            turning: TurnIntent::default(),
        }
    }

    /// Unit vector the player is facing along.
    pub fn heading(&self) -> Vec2 {
        let radians = self.yaw.to_radians();
        Vec2::new(radians.cos(), radians.sin())
    }

    /// Applies turn and movement intents for one tick. Turning is always
    /// free; translation slides along walls one axis at a time.
    pub fn update(&mut self, maze: &Maze, speed_multiplier: f32) {
        self.yaw += self.turning.sign() * TURN_STEP_DEGREES;

        let step = PLAYER_STEP * speed_multiplier * self.movement.sign();
        let delta = self.heading() * step;
        self.position = slide_move(maze, self.position, delta);
    }

    /// Spawns a bullet just outside the player's body.
    ///
    /// With `toward` set, the bullet flies along that (not necessarily
    /// normalized) vector; otherwise it flies straight ahead.
    pub fn fire(&self, toward: Option<Vec2>) -> Bullet {
        let direction = match toward {
            // The epsilon keeps a zero-length target vector from producing NaN.
            Some(target) => target / (target.length() + 1e-6),
            None => self.heading(),
        };
        Bullet::new(
            self.position + direction * MUZZLE_OFFSET,
            direction,
            BULLET_LIFE_TICKS,
        )
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Collidable for Player {
    fn center(&self) -> Vec2 {
        self.position
    }

    fn radius(&self) -> f32 {
        PLAYER_RADIUS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turning_changes_yaw_only() {
        let maze = Maze::new();
        let mut player = Player::new();
        player.turning = TurnIntent::Right;

        let start = player.position;
        player.update(&maze, 1.0);

        assert_eq!(player.yaw, TURN_STEP_DEGREES);
        assert_eq!(player.position, start);
    }

    #[test]
    fn test_forward_movement_follows_heading() {
        let maze = Maze::new();
        let mut player = Player::new();
        player.movement = MoveIntent::Forward;

        let start = player.position;
        player.update(&maze, 1.0);

        // Yaw 0° points along +x, and the start cell has open floor to the right.
        assert_eq!(player.position, start + Vec2::new(PLAYER_STEP, 0.0));
    }

    #[test]
    fn test_speed_multiplier_scales_step() {
        let maze = Maze::new();
        let mut player = Player::new();
        player.movement = MoveIntent::Forward;

        let start = player.position;
        player.update(&maze, 1.75);

        assert_eq!(player.position.x, start.x + PLAYER_STEP * 1.75);
    }

    #[test]
    fn test_fire_straight_ahead() {
        let player = Player::new();
        let bullet = player.fire(None);

        assert_eq!(bullet.position, player.position + Vec2::new(MUZZLE_OFFSET, 0.0));
        assert!((bullet.direction - Vec2::X).length() < 1e-6);
    }

    #[test]
    fn test_fire_at_target_normalizes_direction() {
        let player = Player::new();
        let bullet = player.fire(Some(Vec2::new(0.0, 300.0)));

        assert!((bullet.direction.length() - 1.0).abs() < 1e-3);
        assert!(bullet.direction.y > 0.99);
    }
}
