//! This module contains all the constants used in the game.

use glam::IVec2;

/// The size of the window, in pixels.
pub const WINDOW_WIDTH: u32 = 1000;
pub const WINDOW_HEIGHT: u32 = 800;

/// The size of the maze, in cells.
pub const GRID_WIDTH: i32 = 21;
pub const GRID_HEIGHT: i32 = 21;

/// The width of one cell, in world units.
pub const TILE_SIZE: f32 = 40.0;

/// Heights of the wall blocks, in world units.
pub const OUTER_WALL_HEIGHT: f32 = 60.0;
pub const INNER_WALL_HEIGHT: f32 = 40.0;

/// The cell the player starts in after a reset (one in from the bottom-left corner).
pub const PLAYER_START_CELL: IVec2 = IVec2::new(1, GRID_HEIGHT - 2);

/// The cell used when rejection sampling fails to find a floor cell.
pub const FALLBACK_SPAWN_CELL: IVec2 = IVec2::new(1, 1);

/// Attempt budget for rejection-sampling a spawn cell.
pub const SPAWN_SAMPLE_ATTEMPTS: u32 = 500;

/// Spawn candidates must be further than this from the player.
pub const SPAWN_CLEARANCE: f32 = TILE_SIZE * 2.0;

// Per-tick movement rates.
pub const PLAYER_STEP: f32 = 3.0;
pub const TURN_STEP_DEGREES: f32 = 2.5;
pub const CHASER_STEP: f32 = 2.2;
pub const BULLET_STEP: f32 = 9.0;

// Collision radii.
pub const PLAYER_RADIUS: f32 = 10.0;
pub const CHASER_RADIUS: f32 = 10.0;
pub const BULLET_RADIUS: f32 = 3.0;
pub const PICKUP_RADIUS: f32 = 6.0;
/// Pickups are collected with a slightly generous radius.
pub const PICKUP_GRAB_RADIUS: f32 = PICKUP_RADIUS + 2.0;

/// How far ahead of the player a bullet is spawned.
pub const MUZZLE_OFFSET: f32 = PLAYER_RADIUS + 4.0;

/// Bullets expire after this many ticks of flight.
pub const BULLET_LIFE_TICKS: u32 = 120;

// Spawn timer periods, in ticks.
pub const CHASER_SPAWN_PERIOD: u32 = 240;
pub const PICKUP_SPAWN_PERIOD: u32 = 420;
pub const OBSTACLE_SPAWN_PERIOD: u32 = 300;

// Falling obstacles.
pub const OBSTACLE_DROP_HEIGHT: f32 = 220.0;
pub const OBSTACLE_GRAVITY: f32 = 2.5;
pub const OBSTACLE_SIDE: f32 = 16.0;

// Abilities: active duration, cooldown duration, both in ticks.
pub const SPEED_BOOST_TICKS: u32 = 300;
pub const SPEED_BOOST_COOLDOWN_TICKS: u32 = 600;
pub const SPEED_BOOST_FACTOR: f32 = 1.75;

pub const RAPID_FIRE_TICKS: u32 = 300;
pub const RAPID_FIRE_COOLDOWN_TICKS: u32 = 720;
/// One auto-shot every this many ticks while rapid fire is active.
pub const RAPID_FIRE_SHOT_PERIOD: u32 = 18;

// Lives.
pub const STARTING_LIVES: u32 = 3;
/// Pickups cannot raise the life count past this.
pub const PICKUP_LIFE_CAP: u32 = 5;
/// The extra-life cheat cannot raise the life count past this.
pub const CHEAT_LIFE_CAP: u32 = 9;

pub const KILL_SCORE: u32 = 10;
pub const CHEAT_SCORE_BONUS: u32 = 50;

// Camera parameter defaults, clamps, and adjustment steps.
pub const CAM_TOP_HEIGHT: f32 = 600.0;
pub const CAM_TOP_HEIGHT_RANGE: (f32, f32) = (200.0, 1500.0);
pub const CAM_TOP_HEIGHT_STEP: f32 = 30.0;

pub const CAM_THIRD_DISTANCE: f32 = 120.0;
pub const CAM_THIRD_DISTANCE_RANGE: (f32, f32) = (60.0, 300.0);
pub const CAM_THIRD_DISTANCE_STEP: f32 = 8.0;

pub const CAM_THIRD_HEIGHT: f32 = 90.0;
pub const CAM_THIRD_HEIGHT_RANGE: (f32, f32) = (30.0, 220.0);
pub const CAM_THIRD_HEIGHT_STEP: f32 = 6.0;

pub const CAM_ORBIT_STEP_DEGREES: f32 = 4.0;
