//! Falling obstacles: accelerate straight down, land once, and carve the
//! floor beneath them into a crater.

use glam::{IVec2, Vec2};

use crate::constants::{OBSTACLE_DROP_HEIGHT, OBSTACLE_GRAVITY};
use crate::map::Maze;

pub struct Obstacle {
    pub cell: IVec2,
    pub position: Vec2,
    /// Height above the floor.
    pub height: f32,
    /// Vertical velocity; negative while falling.
    pub velocity: f32,
    pub landed: bool,
}

impl Obstacle {
    pub fn at_cell(cell: IVec2) -> Self {
        Obstacle {
            cell,
            position: Maze::cell_to_world(cell),
            height: OBSTACLE_DROP_HEIGHT,
            velocity: 0.0,
            landed: false,
        }
    }

    /// One tick of free fall. On touchdown the obstacle is permanently landed
    /// and converts an open cell below it into a crater; landing is
    /// idempotent and never fires twice.
    pub fn update(&mut self, maze: &mut Maze) {
        if self.landed {
            return;
        }

        self.velocity -= OBSTACLE_GRAVITY;
        self.height += self.velocity;

        if self.height <= 0.0 {
            self.height = 0.0;
            self.landed = true;
            maze.carve_crater(self.cell);
        }
    }
}
