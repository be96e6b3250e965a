//! Maze drawing: floor slab, wall blocks, and crater patches.

use macroquad::color::Color;
use macroquad::math::vec3;
use macroquad::models::draw_cube;

use crate::constants::{GRID_HEIGHT, GRID_WIDTH, INNER_WALL_HEIGHT, OUTER_WALL_HEIGHT, TILE_SIZE};
use crate::map::Maze;

const FLOOR_COLOR: Color = Color::new(0.05, 0.05, 0.05, 1.0);
const OUTER_WALL_COLOR: Color = Color::new(0.0, 0.6, 0.0, 1.0);
const INNER_WALL_COLOR: Color = Color::new(0.6, 0.9, 0.6, 1.0);
const CRATER_COLOR: Color = Color::new(0.25, 0.25, 0.25, 1.0);

/// Draws the whole maze: floor, wall blocks, crater patches.
///
/// Outer walls are taller and darker than inner ones, with a brick-like
/// checkerboard shade on top.
pub fn draw_maze(maze: &Maze) {
    let floor_side = GRID_WIDTH.max(GRID_HEIGHT) as f32 * TILE_SIZE;
    draw_cube(
        vec3(0.0, 0.0, -0.5),
        vec3(floor_side, floor_side, 1.0),
        None,
        FLOOR_COLOR,
    );

    for segment in maze.wall_segments() {
        let (height, base) = if segment.outer {
            (OUTER_WALL_HEIGHT, OUTER_WALL_COLOR)
        } else {
            (INNER_WALL_HEIGHT, INNER_WALL_COLOR)
        };
        let shade = if (segment.cell.x + segment.cell.y) % 2 == 0 {
            0.85
        } else {
            0.65
        };
        let color = Color::new(base.r * shade, base.g * shade, base.b * shade, 1.0);

        let center = Maze::cell_to_world(segment.cell);
        draw_cube(
            vec3(center.x, center.y, height / 2.0),
            vec3(TILE_SIZE, TILE_SIZE, height),
            None,
            color,
        );
    }

    for cell in maze.crater_cells() {
        let center = Maze::cell_to_world(cell);
        draw_cube(
            vec3(center.x, center.y, 0.5),
            vec3(TILE_SIZE * 0.9, TILE_SIZE * 0.9, 1.0),
            None,
            CRATER_COLOR,
        );
    }
}
