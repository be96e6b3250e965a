//! Chasers: enemies that walk straight toward the player, clipped by walls.

use glam::{IVec2, Vec2};

use crate::constants::{CHASER_RADIUS, CHASER_STEP};
use crate::entity::collision::Collidable;
use crate::entity::slide_move;
use crate::map::Maze;

pub struct Chaser {
    pub position: Vec2,
    pub alive: bool,
}

impl Chaser {
    pub fn at_cell(cell: IVec2) -> Self {
        Chaser {
            position: Maze::cell_to_world(cell),
            alive: true,
        }
    }

    /// Takes one fixed-speed step toward `target`, sliding along walls.
    /// There is no pathfinding; a chaser on the wrong side of a wall just
    /// presses against it.
    pub fn update(&mut self, maze: &Maze, target: Vec2) {
        if !self.alive {
            return;
        }

        let offset = target - self.position;
        // Epsilon keeps the normalization finite when standing exactly on the target.
        let direction = offset / (offset.length() + 1e-6);
        self.position = slide_move(maze, self.position, direction * CHASER_STEP);
    }
}

impl Collidable for Chaser {
    fn center(&self) -> Vec2 {
        self.position
    }

    fn radius(&self) -> f32 {
        CHASER_RADIUS
    }
}
