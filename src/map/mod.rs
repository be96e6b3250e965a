//! This module defines the maze grid and provides functions for interacting with it.

use glam::{IVec2, Vec2};

use crate::constants::{GRID_HEIGHT, GRID_WIDTH, TILE_SIZE};

pub mod builder;
pub mod render;

/// The state of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Walkable floor.
    Open,
    /// Solid wall.
    Wall,
    /// Floor carved out by a landed obstacle. Walkable, drawn scorched.
    Crater,
}

impl Tile {
    /// Whether an entity may stand on this tile.
    pub fn walkable(self) -> bool {
        matches!(self, Tile::Open | Tile::Crater)
    }
}

/// One wall cell, flattened out of the grid for rendering.
///
/// Outer (border) walls are drawn taller and darker than inner walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallSegment {
    pub cell: IVec2,
    pub outer: bool,
}

/// The maze: a fixed-size grid of tiles plus the derived wall-segment list.
///
/// Cells are addressed as `IVec2 { x: column, y: row }`. The grid is centered
/// on the world origin, so world coordinates run from `-GRID_WIDTH/2 * TILE_SIZE`
/// to `+GRID_WIDTH/2 * TILE_SIZE`.
pub struct Maze {
    tiles: [[Tile; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    wall_segments: Vec<WallSegment>,
}

impl Maze {
    /// Builds the standard cross-pattern maze. Deterministic, no randomness.
    pub fn new() -> Self {
        let mut maze = Maze {
            tiles: [[Tile::Open; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            wall_segments: Vec::new(),
        };
        builder::carve_layout(&mut maze.tiles);
        maze.rebuild_wall_segments();
        maze
    }

    pub fn in_bounds(cell: IVec2) -> bool {
        cell.x >= 0 && cell.x < GRID_WIDTH && cell.y >= 0 && cell.y < GRID_HEIGHT
    }

    /// Returns the tile at the given cell, or `None` when out of bounds.
    pub fn tile(&self, cell: IVec2) -> Option<Tile> {
        if Self::in_bounds(cell) {
            Some(self.tiles[cell.y as usize][cell.x as usize])
        } else {
            None
        }
    }

    /// Sets the tile at the given cell. Returns false when out of bounds.
    ///
    /// The wall-segment list is rebuilt whenever a wall appears or disappears,
    /// keeping the derived list in sync with the grid.
    pub fn set_tile(&mut self, cell: IVec2, tile: Tile) -> bool {
        if !Self::in_bounds(cell) {
            return false;
        }
        let old = std::mem::replace(&mut self.tiles[cell.y as usize][cell.x as usize], tile);
        if (old == Tile::Wall) != (tile == Tile::Wall) {
            self.rebuild_wall_segments();
        }
        true
    }

    /// The center of a cell, in world coordinates.
    pub fn cell_to_world(cell: IVec2) -> Vec2 {
        Vec2::new(
            (cell.x as f32 - GRID_WIDTH as f32 / 2.0) * TILE_SIZE + TILE_SIZE / 2.0,
            (cell.y as f32 - GRID_HEIGHT as f32 / 2.0) * TILE_SIZE + TILE_SIZE / 2.0,
        )
    }

    /// The cell containing a world position. Exact left-inverse of
    /// [`Maze::cell_to_world`] for cell centers. May return an out-of-bounds
    /// cell for positions outside the grid.
    pub fn world_to_cell(position: Vec2) -> IVec2 {
        IVec2::new(
            (position.x / TILE_SIZE + GRID_WIDTH as f32 / 2.0 - 0.5).round() as i32,
            (position.y / TILE_SIZE + GRID_HEIGHT as f32 / 2.0 - 0.5).round() as i32,
        )
    }

    /// Whether the cell under a world position can be walked on.
    ///
    /// Out-of-bounds positions are impassable. Craters are passable: they are
    /// destroyed floor, not walls.
    pub fn is_passable(&self, position: Vec2) -> bool {
        self.tile(Self::world_to_cell(position))
            .is_some_and(Tile::walkable)
    }

    /// Turns an `Open` cell into a `Crater`. One-shot: landing on an existing
    /// crater (or a wall) changes nothing.
    pub fn carve_crater(&mut self, cell: IVec2) {
        if self.tile(cell) == Some(Tile::Open) {
            self.set_tile(cell, Tile::Crater);
        }
    }

    /// Restores every crater back to open floor.
    pub fn clear_craters(&mut self) {
        for row in self.tiles.iter_mut() {
            for tile in row.iter_mut() {
                if *tile == Tile::Crater {
                    *tile = Tile::Open;
                }
            }
        }
    }

    /// All crater cells, for rendering.
    pub fn crater_cells(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.tiles.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .filter(|(_, tile)| **tile == Tile::Crater)
                .map(move |(col, _)| IVec2::new(col as i32, row as i32))
        })
    }

    pub fn wall_segments(&self) -> &[WallSegment] {
        &self.wall_segments
    }

    fn rebuild_wall_segments(&mut self) {
        self.wall_segments.clear();
        for (row, tiles) in self.tiles.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                if *tile == Tile::Wall {
                    let outer = row == 0
                        || row == GRID_HEIGHT as usize - 1
                        || col == 0
                        || col == GRID_WIDTH as usize - 1;
                    self.wall_segments.push(WallSegment {
                        cell: IVec2::new(col as i32, row as i32),
                        outer,
                    });
                }
            }
        }
    }
}

impl Default for Maze {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_cell_inverts_cell_to_world() {
        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                let cell = IVec2::new(col, row);
                assert_eq!(Maze::world_to_cell(Maze::cell_to_world(cell)), cell);
            }
        }
    }

    #[test]
    fn test_grid_centered_on_origin() {
        let first = Maze::cell_to_world(IVec2::new(0, 0));
        let last = Maze::cell_to_world(IVec2::new(GRID_WIDTH - 1, GRID_HEIGHT - 1));
        assert_eq!(first, -last);
    }

    #[test]
    fn test_border_is_wall() {
        let maze = Maze::new();
        for col in 0..GRID_WIDTH {
            assert_eq!(maze.tile(IVec2::new(col, 0)), Some(Tile::Wall));
            assert_eq!(maze.tile(IVec2::new(col, GRID_HEIGHT - 1)), Some(Tile::Wall));
        }
        for row in 0..GRID_HEIGHT {
            assert_eq!(maze.tile(IVec2::new(0, row)), Some(Tile::Wall));
            assert_eq!(maze.tile(IVec2::new(GRID_WIDTH - 1, row)), Some(Tile::Wall));
        }
    }

    #[test]
    fn test_out_of_bounds_is_impassable() {
        let maze = Maze::new();
        assert!(!maze.is_passable(Vec2::new(GRID_WIDTH as f32 * TILE_SIZE, 0.0)));
        assert!(!maze.is_passable(Vec2::new(0.0, -(GRID_HEIGHT as f32) * TILE_SIZE)));
    }

    #[test]
    fn test_crater_is_passable() {
        let mut maze = Maze::new();
        let cell = IVec2::new(1, 1);
        assert_eq!(maze.tile(cell), Some(Tile::Open));

        maze.carve_crater(cell);
        assert_eq!(maze.tile(cell), Some(Tile::Crater));
        assert!(maze.is_passable(Maze::cell_to_world(cell)));
    }

    #[test]
    fn test_carve_crater_ignores_walls() {
        let mut maze = Maze::new();
        maze.carve_crater(IVec2::new(0, 0));
        assert_eq!(maze.tile(IVec2::new(0, 0)), Some(Tile::Wall));
    }

    #[test]
    fn test_clear_craters() {
        let mut maze = Maze::new();
        maze.carve_crater(IVec2::new(1, 1));
        maze.carve_crater(IVec2::new(2, 1));
        assert_eq!(maze.crater_cells().count(), 2);

        maze.clear_craters();
        assert_eq!(maze.crater_cells().count(), 0);
        assert_eq!(maze.tile(IVec2::new(1, 1)), Some(Tile::Open));
    }

    #[test]
    fn test_wall_segments_follow_mutation() {
        let mut maze = Maze::new();
        let before = maze.wall_segments().len();

        let cell = IVec2::new(1, 1);
        maze.set_tile(cell, Tile::Wall);
        assert_eq!(maze.wall_segments().len(), before + 1);

        maze.set_tile(cell, Tile::Open);
        assert_eq!(maze.wall_segments().len(), before);
    }

    #[test]
    fn test_crater_does_not_touch_wall_segments() {
        let mut maze = Maze::new();
        let before = maze.wall_segments().len();
        maze.carve_crater(IVec2::new(1, 1));
        assert_eq!(maze.wall_segments().len(), before);
    }
}
