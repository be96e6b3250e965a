//! The application shell: owns the game and drives the frame loop.

use macroquad::input::{is_key_pressed, KeyCode};
use macroquad::window::next_frame;
use tracing::info;

use crate::game::Game;
use crate::input::{self, Bindings};
use crate::render;

pub struct App {
    game: Game,
    bindings: Bindings,
}

impl App {
    pub fn new() -> Self {
        App {
            game: Game::new(),
            bindings: Bindings::default(),
        }
    }

    /// Runs until the player quits. One simulation tick per rendered frame;
    /// macroquad's frame pacing holds the tick rate to the display rate.
    pub async fn run(&mut self) {
        info!("starting game loop");
        loop {
            if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
                info!("exit requested");
                break;
            }

            for command in input::poll(&self.bindings) {
                self.game.apply(command);
            }

            self.game.tick();
            render::draw_scene(&self.game);

            next_frame().await;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
