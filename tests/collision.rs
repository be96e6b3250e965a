use glam::Vec2;
use pacblast::constants::{BULLET_RADIUS, CHASER_RADIUS, PICKUP_GRAB_RADIUS, PLAYER_RADIUS};
use pacblast::entity::collision::{circles_overlap, Collidable};
use pacblast::entity::{Bullet, Chaser, Pickup, Player};
use speculoos::prelude::*;

#[test]
fn overlap_is_symmetric_across_radius_pairs() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(12.0, 5.0);

    for (ra, rb) in [(3.0, 10.0), (10.0, 3.0), (6.5, 6.5), (0.0, 13.0)] {
        assert_that(&circles_overlap(a, ra, b, rb)).is_equal_to(circles_overlap(b, rb, a, ra));
    }
}

#[test]
fn touching_circles_count_as_overlap() {
    // |(12, 5)| == 13, exactly the radius sum.
    assert_that(&circles_overlap(Vec2::ZERO, 10.0, Vec2::new(12.0, 5.0), 3.0)).is_true();
    assert_that(&circles_overlap(Vec2::ZERO, 10.0, Vec2::new(12.0, 5.0), 2.99)).is_false();
}

#[test]
fn entity_radii_are_the_tuned_constants() {
    let player = Player::new();
    let chaser = Chaser::at_cell(glam::IVec2::new(2, 2));
    let bullet = Bullet::new(Vec2::ZERO, Vec2::X, 1);
    let pickup = Pickup::at_cell(glam::IVec2::new(2, 3));

    assert_that(&player.radius()).is_equal_to(PLAYER_RADIUS);
    assert_that(&chaser.radius()).is_equal_to(CHASER_RADIUS);
    assert_that(&bullet.radius()).is_equal_to(BULLET_RADIUS);
    assert_that(&pickup.radius()).is_equal_to(PICKUP_GRAB_RADIUS);
}

#[test]
fn collides_with_uses_both_radii() {
    let mut player = Player::new();
    let chaser = Chaser::at_cell(glam::IVec2::new(2, 2));

    // Just inside the radius sum.
    player.position = chaser.position + Vec2::new(PLAYER_RADIUS + CHASER_RADIUS - 0.5, 0.0);
    assert_that(&player.collides_with(&chaser)).is_true();

    // Just outside.
    player.position = chaser.position + Vec2::new(PLAYER_RADIUS + CHASER_RADIUS + 0.5, 0.0);
    assert_that(&player.collides_with(&chaser)).is_false();
}
