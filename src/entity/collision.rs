//! Circle-based collision testing.

use glam::Vec2;

/// Trait for entities that can participate in collision detection.
///
/// Every entity type is a circle of fixed radius; overlap is a plain
/// distance test. With entity counts this small there is no need for any
/// broad-phase structure.
pub trait Collidable {
    /// The center of this entity's collision circle.
    fn center(&self) -> Vec2;

    /// The radius of this entity's collision circle.
    fn radius(&self) -> f32;

    /// Checks if this entity is colliding with another entity.
    fn collides_with(&self, other: &dyn Collidable) -> bool {
        circles_overlap(self.center(), self.radius(), other.center(), other.radius())
    }
}

/// True iff two circles touch or overlap. Symmetric in its arguments.
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance_squared(b) <= (a_radius + b_radius) * (a_radius + b_radius)
}
