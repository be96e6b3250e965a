//! Timed player abilities: an `Idle → Active → Cooldown → Idle` state machine.
//!
//! Both abilities (speed boost, rapid fire) share this shape and differ only
//! in their durations and in what the game does while they are active.

/// Current phase of an ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityState {
    Idle,
    Active { remaining: u32 },
    Cooldown { remaining: u32 },
}

#[derive(Debug, Clone, Copy)]
pub struct AbilityTimer {
    active_ticks: u32,
    cooldown_ticks: u32,
    state: AbilityState,
}

impl AbilityTimer {
    pub fn new(active_ticks: u32, cooldown_ticks: u32) -> Self {
        AbilityTimer {
            active_ticks,
            cooldown_ticks,
            state: AbilityState::Idle,
        }
    }

    /// Arms the ability. Only succeeds from `Idle`; an active or cooling-down
    /// ability ignores the request and returns false.
    pub fn trigger(&mut self) -> bool {
        match self.state {
            AbilityState::Idle => {
                self.state = AbilityState::Active {
                    remaining: self.active_ticks,
                };
                true
            }
            AbilityState::Active { .. } | AbilityState::Cooldown { .. } => false,
        }
    }

    /// Advances the state machine by one tick. The full Idle-to-Idle cycle
    /// takes exactly `active_ticks + cooldown_ticks` calls.
    pub fn tick(&mut self) {
        self.state = match self.state {
            AbilityState::Idle => AbilityState::Idle,
            AbilityState::Active { remaining } => {
                let remaining = remaining - 1;
                if remaining == 0 {
                    AbilityState::Cooldown {
                        remaining: self.cooldown_ticks,
                    }
                } else {
                    AbilityState::Active { remaining }
                }
            }
            AbilityState::Cooldown { remaining } => {
                let remaining = remaining - 1;
                if remaining == 0 {
                    AbilityState::Idle
                } else {
                    AbilityState::Cooldown { remaining }
                }
            }
        };
    }

    pub fn state(&self) -> AbilityState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, AbilityState::Active { .. })
    }

    /// Ticks left in the active phase; 0 outside it. For the HUD.
    pub fn active_remaining(&self) -> u32 {
        match self.state {
            AbilityState::Active { remaining } => remaining,
            _ => 0,
        }
    }

    /// Ticks left in the cooldown phase; 0 outside it. For the HUD.
    pub fn cooldown_remaining(&self) -> u32 {
        match self.state {
            AbilityState::Cooldown { remaining } => remaining,
            _ => 0,
        }
    }

    pub fn reset(&mut self) {
        self.state = AbilityState::Idle;
    }
}
