use crate::camera::CameraMode;
use crate::entity::player::{MoveIntent, TurnIntent};

/// Everything the presentation layer can ask the simulation to do.
///
/// Intents (`Move`, `Turn`) are emitted on both key press and key release;
/// all other commands are press-only edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameCommand {
    Move(MoveIntent),
    Turn(TurnIntent),
    Fire,
    TogglePause,
    Restart,
    SetCamera(CameraMode),
    CycleCamera,
    OrbitLeft,
    OrbitRight,
    RaiseCamera,
    LowerCamera,
    SpeedBoost,
    RapidFire,
    // Debug/cheat surface.
    ExtraLife,
    KillAllChasers,
    ToggleNoDamage,
    ScoreBonus,
    ForceSpawnChaser,
    ForceSpawnPickup,
    ForceSpawnObstacle,
    ClearCraters,
}
