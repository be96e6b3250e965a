//! Scene rendering: the 3D world through the active camera pose, then the HUD
//! as a 2D overlay.

use macroquad::camera::{set_camera, set_default_camera, Camera3D};
use macroquad::color::Color;
use macroquad::math::vec3;
use macroquad::models::{draw_cube, draw_sphere};
use macroquad::window::clear_background;

use crate::constants::{
    BULLET_RADIUS, CHASER_RADIUS, OBSTACLE_SIDE, PICKUP_RADIUS, PLAYER_RADIUS,
};
use crate::entity::Pickup;
use crate::game::Game;
use crate::map;

pub mod hud;

const CLEAR_COLOR: Color = Color::new(0.02, 0.02, 0.05, 1.0);
const PLAYER_COLOR: Color = Color::new(1.0, 0.6, 0.0, 1.0);
const CHASER_COLOR: Color = Color::new(0.6, 0.0, 0.8, 1.0);
const BULLET_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);
const PICKUP_COLOR: Color = Color::new(0.0, 0.9, 1.0, 1.0);
const OBSTACLE_COLOR: Color = Color::new(0.4, 0.0, 0.0, 1.0);
const EYE_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Draws one frame. The simulation is read-only here.
pub fn draw_scene(game: &Game) {
    clear_background(CLEAR_COLOR);

    let pose = game.camera.pose(&game.player);
    set_camera(&Camera3D {
        position: vec3(pose.eye.x, pose.eye.y, pose.eye.z),
        target: vec3(pose.target.x, pose.target.y, pose.target.z),
        up: vec3(pose.up.x, pose.up.y, pose.up.z),
        ..Default::default()
    });

    map::render::draw_maze(&game.maze);

    for obstacle in &game.obstacles {
        // Landed blocks rest on the floor instead of sinking halfway into it.
        let z = obstacle.height.max(OBSTACLE_SIDE / 2.0);
        draw_cube(
            vec3(obstacle.position.x, obstacle.position.y, z),
            vec3(OBSTACLE_SIDE, OBSTACLE_SIDE, OBSTACLE_SIDE),
            None,
            OBSTACLE_COLOR,
        );
    }

    for pickup in &game.pickups {
        let radius = PICKUP_RADIUS * Pickup::pulse(game.frame);
        draw_sphere(
            vec3(pickup.position.x, pickup.position.y, PICKUP_RADIUS + 2.0),
            radius,
            None,
            PICKUP_COLOR,
        );
    }

    for chaser in &game.chasers {
        if !chaser.alive {
            continue;
        }
        draw_sphere(
            vec3(chaser.position.x, chaser.position.y, CHASER_RADIUS),
            CHASER_RADIUS,
            None,
            CHASER_COLOR,
        );
    }

    for bullet in &game.bullets {
        if !bullet.alive {
            continue;
        }
        draw_sphere(
            vec3(bullet.position.x, bullet.position.y, PLAYER_RADIUS),
            BULLET_RADIUS,
            None,
            BULLET_COLOR,
        );
    }

    draw_player(game);

    set_default_camera();
    hud::draw(game);
}

/// The player: a sphere with two eye dots tracking the heading, so the
/// facing reads from every camera mode.
fn draw_player(game: &Game) {
    let player = &game.player;
    let center = vec3(player.position.x, player.position.y, PLAYER_RADIUS);
    draw_sphere(center, PLAYER_RADIUS, None, PLAYER_COLOR);

    let heading = player.heading();
    let forward = vec3(heading.x, heading.y, 0.0) * (PLAYER_RADIUS * 0.6);
    let side = vec3(-heading.y, heading.x, 0.0) * (PLAYER_RADIUS * 0.3);
    let lift = vec3(0.0, 0.0, PLAYER_RADIUS * 0.4);
    for eye in [center + forward + side + lift, center + forward - side + lift] {
        draw_sphere(eye, 2.0, None, EYE_COLOR);
    }
}
