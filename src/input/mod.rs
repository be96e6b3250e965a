//! Input polling: macroquad key/mouse state → game commands.

use std::collections::HashMap;

use macroquad::input::{
    is_key_down, is_key_pressed, is_mouse_button_pressed, KeyCode, MouseButton,
};
use smallvec::SmallVec;

use crate::camera::CameraMode;
use crate::entity::player::{MoveIntent, TurnIntent};
use crate::input::commands::GameCommand;

pub mod commands;

/// Press-edge key table. Movement, turning, and camera adjustment are held
/// keys and are polled separately in [`poll`].
#[derive(Debug, Clone)]
pub struct Bindings {
    pressed: HashMap<KeyCode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut pressed = HashMap::new();

        // Game actions
        pressed.insert(KeyCode::F, GameCommand::Fire);
        pressed.insert(KeyCode::P, GameCommand::TogglePause);
        pressed.insert(KeyCode::R, GameCommand::Restart);

        // Camera
        pressed.insert(KeyCode::Key1, GameCommand::SetCamera(CameraMode::Top));
        pressed.insert(KeyCode::Key2, GameCommand::SetCamera(CameraMode::Third));
        pressed.insert(KeyCode::Key3, GameCommand::SetCamera(CameraMode::First));
        pressed.insert(KeyCode::V, GameCommand::CycleCamera);

        // Abilities
        pressed.insert(KeyCode::Space, GameCommand::SpeedBoost);
        pressed.insert(KeyCode::C, GameCommand::RapidFire);

        // Cheats
        pressed.insert(KeyCode::L, GameCommand::ExtraLife);
        pressed.insert(KeyCode::K, GameCommand::KillAllChasers);
        pressed.insert(KeyCode::G, GameCommand::ToggleNoDamage);
        pressed.insert(KeyCode::Equal, GameCommand::ScoreBonus);
        pressed.insert(KeyCode::E, GameCommand::ForceSpawnChaser);
        pressed.insert(KeyCode::U, GameCommand::ForceSpawnPickup);
        pressed.insert(KeyCode::O, GameCommand::ForceSpawnObstacle);
        pressed.insert(KeyCode::X, GameCommand::ClearCraters);

        Self { pressed }
    }
}

impl Bindings {
    pub fn command_for(&self, key: KeyCode) -> Option<GameCommand> {
        self.pressed.get(&key).copied()
    }
}

/// Polls this frame's input. Held-key intents are re-derived every frame so
/// releasing a key drops the intent back to idle; everything in the binding
/// table fires on its press edge only.
pub fn poll(bindings: &Bindings) -> SmallVec<[GameCommand; 8]> {
    let mut commands = SmallVec::new();

    commands.push(GameCommand::Move(held_move_intent()));
    commands.push(GameCommand::Turn(held_turn_intent()));

    for (&key, &command) in bindings.pressed.iter() {
        if is_key_pressed(key) {
            commands.push(command);
        }
    }

    // Camera adjustment repeats while the arrow keys are held.
    if is_key_down(KeyCode::Left) {
        commands.push(GameCommand::OrbitLeft);
    }
    if is_key_down(KeyCode::Right) {
        commands.push(GameCommand::OrbitRight);
    }
    if is_key_down(KeyCode::Up) {
        commands.push(GameCommand::RaiseCamera);
    }
    if is_key_down(KeyCode::Down) {
        commands.push(GameCommand::LowerCamera);
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        commands.push(GameCommand::Fire);
    }
    if is_mouse_button_pressed(MouseButton::Right) {
        commands.push(GameCommand::SetCamera(CameraMode::First));
    }

    commands
}

fn held_move_intent() -> MoveIntent {
    if is_key_down(KeyCode::W) {
        MoveIntent::Forward
    } else if is_key_down(KeyCode::S) {
        MoveIntent::Reverse
    } else {
        MoveIntent::Idle
    }
}

fn held_turn_intent() -> TurnIntent {
    if is_key_down(KeyCode::A) {
        TurnIntent::Left
    } else if is_key_down(KeyCode::D) {
        TurnIntent::Right
    } else {
        TurnIntent::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_keys_are_bound() {
        let bindings = Bindings::default();
        assert_eq!(bindings.command_for(KeyCode::P), Some(GameCommand::TogglePause));
        assert_eq!(bindings.command_for(KeyCode::Space), Some(GameCommand::SpeedBoost));
        assert_eq!(bindings.command_for(KeyCode::C), Some(GameCommand::RapidFire));
        assert_eq!(
            bindings.command_for(KeyCode::Key1),
            Some(GameCommand::SetCamera(CameraMode::Top))
        );
    }

    #[test]
    fn test_held_intent_keys_are_not_in_the_edge_table() {
        let bindings = Bindings::default();
        for key in [KeyCode::W, KeyCode::A, KeyCode::S, KeyCode::D] {
            assert_eq!(bindings.command_for(key), None);
        }
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let bindings = Bindings::default();
        assert_eq!(bindings.command_for(KeyCode::Z), None);
    }
}
