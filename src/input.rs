//! Button handling for the menu
//!
//! Buttons are sampled once per menu tick. Each button keeps its own debounce
//! timestamp, so several buttons can be accepted in the same tick.

use embassy_time::{Duration, Instant};

use crate::peripherals::ButtonInput;
use crate::state::GameState;

const BUTTON_COUNT: usize = 4;

/// Logical game buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Button {
    IncreaseBet = 0,
    DecreaseBet = 1,
    Confirm = 2,
    CycleColor = 3,
}

impl Button {
    /// Evaluation order within a tick
    pub const ALL: [Self; BUTTON_COUNT] = [
        Self::IncreaseBet,
        Self::DecreaseBet,
        Self::CycleColor,
        Self::Confirm,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    /// Apply the button's effect to the game state
    fn apply(self, state: &mut GameState) {
        match self {
            Self::IncreaseBet => state.raise_bet(),
            Self::DecreaseBet => state.lower_bet(),
            Self::CycleColor => state.cycle_color(),
            Self::Confirm => state.start_spin(),
        }
    }
}

/// Set of buttons accepted during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressSet {
    bits: u8,
}

impl PressSet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn insert(&mut self, button: Button) {
        self.bits |= 1 << button.index();
    }

    pub const fn contains(self, button: Button) -> bool {
        self.bits & (1 << button as u8) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }
}

/// Per-button debounce timestamps
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    last_accepted: [Instant; BUTTON_COUNT],
}

impl Debouncer {
    /// All buttons start as if accepted at time zero
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: [Instant::from_millis(0); BUTTON_COUNT],
        }
    }

    /// Accept a press of `button` at `now` if the interval has passed since
    /// its last accepted press. Accepting stamps `now`.
    pub fn accept(&mut self, button: Button, now: Instant) -> bool {
        let last = &mut self.last_accepted[button.index()];
        if now.saturating_duration_since(*last) < self.interval {
            return false;
        }
        *last = now;
        true
    }

    pub fn last_accepted(&self, button: Button) -> Instant {
        self.last_accepted[button.index()]
    }
}

/// Turns raw button levels into game state changes
#[derive(Debug, Clone)]
pub struct InputController {
    debouncer: Debouncer,
}

impl InputController {
    pub const fn new(debounce: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(debounce),
        }
    }

    /// Sample every button and apply all accepted presses.
    ///
    /// Does nothing while the wheel is spinning; presses held during a spin are
    /// neither applied nor stamped.
    pub fn poll<B: ButtonInput>(
        &mut self,
        state: &mut GameState,
        buttons: &mut B,
        now: Instant,
    ) -> PressSet {
        let mut accepted = PressSet::empty();
        if state.is_spinning() {
            return accepted;
        }

        for button in Button::ALL {
            if buttons.is_pressed(button) && self.debouncer.accept(button, now) {
                button.apply(state);
                accepted.insert(button);
            }
        }

        accepted
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }
}
