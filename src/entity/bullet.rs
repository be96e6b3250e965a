//! Bullets: short-lived projectiles that die on walls, on targets, or of old age.

use glam::Vec2;

use crate::constants::{BULLET_RADIUS, BULLET_STEP};
use crate::entity::collision::Collidable;
use crate::map::Maze;

pub struct Bullet {
    pub position: Vec2,
    /// Unit flight direction, fixed at fire time.
    pub direction: Vec2,
    /// Remaining ticks of flight.
    pub life: u32,
    pub alive: bool,
}

impl Bullet {
    pub fn new(position: Vec2, direction: Vec2, life: u32) -> Self {
        Bullet {
            position,
            direction,
            life,
            alive: true,
        }
    }

    /// Advances the bullet one tick. Returns true when the bullet just
    /// expired without hitting anything, so the caller can count the miss.
    /// Wall impacts kill the bullet but are not misses.
    pub fn update(&mut self, maze: &Maze) -> bool {
        if !self.alive {
            return false;
        }

        self.position += self.direction * BULLET_STEP;
        if !maze.is_passable(self.position) {
            self.alive = false;
        }

        self.life = self.life.saturating_sub(1);
        if self.life == 0 && self.alive {
            self.alive = false;
            return true;
        }
        false
    }
}

impl Collidable for Bullet {
    fn center(&self) -> Vec2 {
        self.position
    }

    fn radius(&self) -> f32 {
        BULLET_RADIUS
    }
}
