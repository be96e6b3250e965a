//! Extra-life pickups. Stationary; the only motion is a render-time pulse.

use glam::{IVec2, Vec2};

use crate::constants::PICKUP_GRAB_RADIUS;
use crate::entity::collision::Collidable;
use crate::map::Maze;

pub struct Pickup {
    pub cell: IVec2,
    pub position: Vec2,
}

impl Pickup {
    pub fn at_cell(cell: IVec2) -> Self {
        Pickup {
            cell,
            position: Maze::cell_to_world(cell),
        }
    }

    /// Render-time size pulse, driven by the global frame counter.
    pub fn pulse(frame: u64) -> f32 {
        1.0 + 0.25 * (frame as f32 * 0.2).sin()
    }
}

impl Collidable for Pickup {
    fn center(&self) -> Vec2 {
        self.position
    }

    fn radius(&self) -> f32 {
        PICKUP_GRAB_RADIUS
    }
}
