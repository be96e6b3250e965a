use pacblast::constants::{
    RAPID_FIRE_COOLDOWN_TICKS, RAPID_FIRE_TICKS, SPEED_BOOST_COOLDOWN_TICKS, SPEED_BOOST_TICKS,
};
use pacblast::game::abilities::{AbilityState, AbilityTimer};
use speculoos::prelude::*;

#[test]
fn speed_boost_is_active_for_exactly_its_duration() {
    let mut timer = AbilityTimer::new(SPEED_BOOST_TICKS, SPEED_BOOST_COOLDOWN_TICKS);
    assert_that(&timer.trigger()).is_true();

    for _ in 0..SPEED_BOOST_TICKS {
        assert_that(&timer.is_active()).is_true();
        timer.tick();
    }
    assert_that(&timer.is_active()).is_false();
    assert_that(&timer.cooldown_remaining()).is_equal_to(SPEED_BOOST_COOLDOWN_TICKS);
}

#[test]
fn cooldown_blocks_retrigger_until_exactly_zero() {
    let mut timer = AbilityTimer::new(SPEED_BOOST_TICKS, SPEED_BOOST_COOLDOWN_TICKS);
    timer.trigger();
    for _ in 0..SPEED_BOOST_TICKS {
        timer.tick();
    }

    for _ in 0..SPEED_BOOST_COOLDOWN_TICKS {
        assert_that(&timer.trigger()).is_false();
        timer.tick();
    }
    assert_that(&timer.state()).is_equal_to(AbilityState::Idle);
    assert_that(&timer.trigger()).is_true();
}

#[test]
fn idle_to_idle_cycle_is_active_plus_cooldown() {
    for (active, cooldown) in [
        (SPEED_BOOST_TICKS, SPEED_BOOST_COOLDOWN_TICKS),
        (RAPID_FIRE_TICKS, RAPID_FIRE_COOLDOWN_TICKS),
        (1, 1),
    ] {
        let mut timer = AbilityTimer::new(active, cooldown);
        timer.trigger();

        let mut ticks = 0u32;
        while timer.state() != AbilityState::Idle {
            timer.tick();
            ticks += 1;
        }
        assert_that(&ticks).is_equal_to(active + cooldown);
    }
}

#[test]
fn active_ability_cannot_be_retriggered() {
    let mut timer = AbilityTimer::new(RAPID_FIRE_TICKS, RAPID_FIRE_COOLDOWN_TICKS);
    assert_that(&timer.trigger()).is_true();

    let before = timer.state();
    assert_that(&timer.trigger()).is_false();
    assert_that(&timer.state()).is_equal_to(before);
}

#[test]
fn untriggered_timer_stays_idle_forever() {
    let mut timer = AbilityTimer::new(10, 10);
    for _ in 0..100 {
        timer.tick();
    }
    assert_that(&timer.state()).is_equal_to(AbilityState::Idle);
}
