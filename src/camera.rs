//! Camera modes and the view pose fed to the renderer.
//!
//! The camera never mutates the simulation; it consumes the player's position
//! and heading and produces an eye/target/up pose the renderer aims the 3D
//! view with.

use glam::{Vec2, Vec3};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::constants::{
    CAM_ORBIT_STEP_DEGREES, CAM_THIRD_DISTANCE, CAM_THIRD_DISTANCE_RANGE,
    CAM_THIRD_DISTANCE_STEP, CAM_THIRD_HEIGHT, CAM_THIRD_HEIGHT_RANGE, CAM_THIRD_HEIGHT_STEP,
    CAM_TOP_HEIGHT, CAM_TOP_HEIGHT_RANGE, CAM_TOP_HEIGHT_STEP, PLAYER_RADIUS,
};
use crate::entity::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum CameraMode {
    Top,
    Third,
    First,
}

impl CameraMode {
    /// The next mode in display order, wrapping around. Bound to the
    /// view-cycling key.
    pub fn next(self) -> CameraMode {
        CameraMode::iter()
            .cycle()
            .skip_while(|mode| *mode != self)
            .nth(1)
            .unwrap_or(CameraMode::Top)
    }
}

/// Everything the renderer needs to aim the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

/// Camera state: the active mode plus its adjustable parameters.
pub struct Camera {
    pub mode: CameraMode,
    /// Top-down eye height; higher means more of the maze on screen.
    pub top_height: f32,
    /// Third-person follow distance and height behind/above the player.
    pub third_distance: f32,
    pub third_height: f32,
    /// Extra orbit around the player in third person, degrees.
    pub orbit_degrees: f32,
}

impl Camera {
    pub fn new() -> Self {
        Camera {
            mode: CameraMode::Third,
            top_height: CAM_TOP_HEIGHT,
            third_distance: CAM_THIRD_DISTANCE,
            third_height: CAM_THIRD_HEIGHT,
            orbit_degrees: 0.0,
        }
    }

    pub fn orbit_left(&mut self) {
        self.orbit_degrees = (self.orbit_degrees - CAM_ORBIT_STEP_DEGREES).rem_euclid(360.0);
    }

    pub fn orbit_right(&mut self) {
        self.orbit_degrees = (self.orbit_degrees + CAM_ORBIT_STEP_DEGREES).rem_euclid(360.0);
    }

    /// Moves the active mode's eye up/out. No-op in first person.
    pub fn raise(&mut self) {
        match self.mode {
            CameraMode::Top => {
                self.top_height = (self.top_height + CAM_TOP_HEIGHT_STEP).min(CAM_TOP_HEIGHT_RANGE.1);
            }
            CameraMode::Third => {
                self.third_height =
                    (self.third_height + CAM_THIRD_HEIGHT_STEP).min(CAM_THIRD_HEIGHT_RANGE.1);
                self.third_distance =
                    (self.third_distance + CAM_THIRD_DISTANCE_STEP).min(CAM_THIRD_DISTANCE_RANGE.1);
            }
            CameraMode::First => {}
        }
    }

    /// Moves the active mode's eye down/in. No-op in first person.
    pub fn lower(&mut self) {
        match self.mode {
            CameraMode::Top => {
                self.top_height = (self.top_height - CAM_TOP_HEIGHT_STEP).max(CAM_TOP_HEIGHT_RANGE.0);
            }
            CameraMode::Third => {
                self.third_height =
                    (self.third_height - CAM_THIRD_HEIGHT_STEP).max(CAM_THIRD_HEIGHT_RANGE.0);
                self.third_distance =
                    (self.third_distance - CAM_THIRD_DISTANCE_STEP).max(CAM_THIRD_DISTANCE_RANGE.0);
            }
            CameraMode::First => {}
        }
    }

    /// The eye/target/up pose for the current mode.
    pub fn pose(&self, player: &Player) -> ViewPose {
        let p = player.position;
        match self.mode {
            CameraMode::Top => ViewPose {
                eye: Vec3::new(p.x, p.y, self.top_height),
                target: Vec3::new(p.x, p.y, 0.0),
                // Up must not be parallel to the view direction when looking
                // straight down; +y keeps the maze north-up on screen.
                up: Vec3::Y,
            },
            CameraMode::Third => {
                let heading = heading_from_degrees(player.yaw + self.orbit_degrees);
                ViewPose {
                    eye: Vec3::new(
                        p.x - heading.x * self.third_distance,
                        p.y - heading.y * self.third_distance,
                        self.third_height,
                    ),
                    target: Vec3::new(p.x, p.y, PLAYER_RADIUS),
                    up: Vec3::Z,
                }
            }
            CameraMode::First => {
                let heading = heading_from_degrees(player.yaw);
                let eye = Vec3::new(
                    p.x + heading.x * 10.0,
                    p.y + heading.y * 10.0,
                    PLAYER_RADIUS * 1.6,
                );
                ViewPose {
                    eye,
                    target: eye + Vec3::new(heading.x * 30.0, heading.y * 30.0, 0.0),
                    up: Vec3::Z,
                }
            }
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

fn heading_from_degrees(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}
