use glam::{IVec2, Vec2};
use pacblast::constants::{GRID_HEIGHT, GRID_WIDTH, TILE_SIZE};
use pacblast::map::{Maze, Tile};
use pretty_assertions::assert_eq;

#[test]
fn world_to_cell_is_left_inverse_of_cell_to_world() {
    for row in 0..GRID_HEIGHT {
        for col in 0..GRID_WIDTH {
            let cell = IVec2::new(col, row);
            assert_eq!(Maze::world_to_cell(Maze::cell_to_world(cell)), cell);
        }
    }
}

#[test]
fn cell_transform_is_tile_aligned() {
    let a = Maze::cell_to_world(IVec2::new(3, 7));
    let b = Maze::cell_to_world(IVec2::new(4, 7));
    assert_eq!(b - a, Vec2::new(TILE_SIZE, 0.0));
}

#[test]
fn every_border_cell_is_impassable() {
    let maze = Maze::new();
    for col in 0..GRID_WIDTH {
        assert!(!maze.is_passable(Maze::cell_to_world(IVec2::new(col, 0))));
        assert!(!maze.is_passable(Maze::cell_to_world(IVec2::new(col, GRID_HEIGHT - 1))));
    }
    for row in 0..GRID_HEIGHT {
        assert!(!maze.is_passable(Maze::cell_to_world(IVec2::new(0, row))));
        assert!(!maze.is_passable(Maze::cell_to_world(IVec2::new(GRID_WIDTH - 1, row))));
    }
}

#[test]
fn every_open_cell_is_passable_after_build() {
    let maze = Maze::new();
    for row in 0..GRID_HEIGHT {
        for col in 0..GRID_WIDTH {
            let cell = IVec2::new(col, row);
            if maze.tile(cell) == Some(Tile::Open) {
                assert!(maze.is_passable(Maze::cell_to_world(cell)));
            }
        }
    }
}

#[test]
fn craters_are_passable_but_distinct_from_open() {
    let mut maze = Maze::new();
    let cell = IVec2::new(2, 2);
    maze.carve_crater(cell);

    assert_eq!(maze.tile(cell), Some(Tile::Crater));
    assert!(maze.is_passable(Maze::cell_to_world(cell)));
}

#[test]
fn wall_segments_match_grid_after_mutations() {
    let mut maze = Maze::new();

    let count_walls = |maze: &Maze| -> usize {
        (0..GRID_HEIGHT)
            .flat_map(|row| (0..GRID_WIDTH).map(move |col| IVec2::new(col, row)))
            .filter(|&cell| maze.tile(cell) == Some(Tile::Wall))
            .count()
    };

    assert_eq!(maze.wall_segments().len(), count_walls(&maze));

    maze.set_tile(IVec2::new(2, 2), Tile::Wall);
    assert_eq!(maze.wall_segments().len(), count_walls(&maze));

    maze.set_tile(IVec2::new(2, 2), Tile::Open);
    assert_eq!(maze.wall_segments().len(), count_walls(&maze));
}
