//! Text HUD, drawn as a 2D overlay after the 3D pass.

use macroquad::color::Color;
use macroquad::text::draw_text;
use thousands::Separable;

use crate::game::Game;

const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const FONT_SIZE: f32 = 26.0;
const LINE_HEIGHT: f32 = 28.0;

pub fn draw(game: &Game) {
    let status = format!(
        "LIVES {}   SCORE {}   MISSED {}   CAM {}",
        game.lives,
        game.score.separate_with_commas(),
        game.missed_shots,
        game.camera.mode,
    );

    let mut line = 0.0;
    let mut write = |text: &str| {
        line += 1.0;
        draw_text(text, 10.0, 10.0 + line * LINE_HEIGHT, FONT_SIZE, TEXT_COLOR);
    };

    write(&status);

    if game.paused {
        write("PAUSED (P)");
    }
    if game.game_over {
        write("GAME OVER - PRESS R TO RESTART");
    }

    if game.speed_boost.is_active() {
        write(&format!("SPEED BOOST {}f", game.speed_boost.active_remaining()));
    }
    if game.rapid_fire.is_active() {
        write(&format!("RAPID FIRE {}f", game.rapid_fire.active_remaining()));
    }
    if game.speed_boost.cooldown_remaining() > 0 {
        write(&format!("SPEED CD {}f", game.speed_boost.cooldown_remaining()));
    }
    if game.rapid_fire.cooldown_remaining() > 0 {
        write(&format!("RAPID CD {}f", game.rapid_fire.cooldown_remaining()));
    }
    if game.no_damage {
        write("NO-DAMAGE MODE");
    }
}
