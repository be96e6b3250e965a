//! Timed entity spawning and spawn-cell sampling.

use glam::{IVec2, Vec2};
use rand::Rng;
use smallvec::SmallVec;

use crate::constants::{
    CHASER_SPAWN_PERIOD, FALLBACK_SPAWN_CELL, GRID_HEIGHT, GRID_WIDTH, OBSTACLE_SPAWN_PERIOD,
    PICKUP_SPAWN_PERIOD, SPAWN_CLEARANCE, SPAWN_SAMPLE_ATTEMPTS,
};
use crate::map::{Maze, Tile};

/// What a spawn timer produced this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum SpawnKind {
    Chaser,
    Pickup,
    Obstacle,
}

/// Three independent frame counters, one per spawnable entity type.
///
/// Counters only advance while the simulation is running; the game simply
/// does not call [`SpawnTimers::tick`] while paused or game over.
#[derive(Debug, Default)]
pub struct SpawnTimers {
    chaser: u32,
    pickup: u32,
    obstacle: u32,
}

impl SpawnTimers {
    /// Advances all three counters and returns the kinds whose period
    /// elapsed this tick (each such counter resets to zero).
    pub fn tick(&mut self) -> SmallVec<[SpawnKind; 3]> {
        let mut due = SmallVec::new();

        self.chaser += 1;
        if self.chaser >= CHASER_SPAWN_PERIOD {
            self.chaser = 0;
            due.push(SpawnKind::Chaser);
        }

        self.pickup += 1;
        if self.pickup >= PICKUP_SPAWN_PERIOD {
            self.pickup = 0;
            due.push(SpawnKind::Pickup);
        }

        self.obstacle += 1;
        if self.obstacle >= OBSTACLE_SPAWN_PERIOD {
            self.obstacle = 0;
            due.push(SpawnKind::Obstacle);
        }

        due
    }

    pub fn reset(&mut self) {
        *self = SpawnTimers::default();
    }
}

/// Picks a random open, non-border cell at least two tile-widths away from
/// the player.
///
/// Rejection sampling with a hard attempt budget: after
/// [`SPAWN_SAMPLE_ATTEMPTS`] failed draws the fixed fallback cell is
/// returned, so this always terminates even on a saturated maze.
pub fn random_floor_cell(maze: &Maze, player_position: Vec2, rng: &mut impl Rng) -> IVec2 {
    for _ in 0..SPAWN_SAMPLE_ATTEMPTS {
        let cell = IVec2::new(
            rng.random_range(1..GRID_WIDTH - 1),
            rng.random_range(1..GRID_HEIGHT - 1),
        );
        if maze.tile(cell) != Some(Tile::Open) {
            continue;
        }
        let world = Maze::cell_to_world(cell);
        if world.distance_squared(player_position) > SPAWN_CLEARANCE * SPAWN_CLEARANCE {
            return cell;
        }
    }
    FALLBACK_SPAWN_CELL
}
