//! Deterministic construction of the cross-pattern maze layout.

use crate::constants::{GRID_HEIGHT, GRID_WIDTH};
use crate::map::Tile;

/// Fills the grid with the standard layout: a solid border, a centered cross
/// with four openings, and a regular lattice of 1×2 wall blocks.
pub(super) fn carve_layout(tiles: &mut [[Tile; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
    let width = GRID_WIDTH as usize;
    let height = GRID_HEIGHT as usize;

    for row in tiles.iter_mut() {
        row.fill(Tile::Open);
    }

    // Border.
    for row in 0..height {
        tiles[row][0] = Tile::Wall;
        tiles[row][width - 1] = Tile::Wall;
    }
    for col in 0..width {
        tiles[0][col] = Tile::Wall;
        tiles[height - 1][col] = Tile::Wall;
    }

    // Centered cross.
    let mid_row = height / 2;
    let mid_col = width / 2;
    for row in tiles.iter_mut().take(height - 1).skip(1) {
        row[mid_col] = Tile::Wall;
    }
    for col in 1..width - 1 {
        tiles[mid_row][col] = Tile::Wall;
    }

    // Openings two cells out from the center, on each arm.
    for delta in [-2i32, 2] {
        let col = mid_col as i32 + delta;
        if col > 0 && col < GRID_WIDTH - 1 {
            tiles[mid_row][col as usize] = Tile::Open;
        }
        let row = mid_row as i32 + delta;
        if row > 0 && row < GRID_HEIGHT - 1 {
            tiles[row as usize][mid_col] = Tile::Open;
        }
    }

    // Lattice of 1×2 blocks, skipped where the cross already sits.
    for row in (3..height - 3).step_by(4) {
        for col in (3..width - 3).step_by(6) {
            if tiles[row][col] == Tile::Open {
                tiles[row][col] = Tile::Wall;
                if col + 1 < width - 1 {
                    tiles[row][col + 1] = Tile::Wall;
                }
            }
        }
    }
}
