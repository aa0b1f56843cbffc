//! Dispatch loop
//!
//! One [`Game::tick`] is one pass of the main loop: in menu mode it redraws
//! the menu and samples the buttons, in spin mode it plays the wheel and the
//! settlement to completion before returning.

use embedded_hal::delay::DelayNs;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::RingDriver;
use crate::color::PocketColor;
use crate::config::{GameConfig, SpinProfile};
use crate::input::{InputController, PressSet};
use crate::menu::render_menu;
use crate::peripherals::{ButtonInput, Buzzer, Clock, TextDisplay};
use crate::ring::Ring;
use crate::settlement::{Outcome, Settlement};
use crate::spin::{SpinEngine, SpinPlan};
use crate::state::{GameState, Mode};

/// Seed the wheel's random source.
///
/// Pass something that differs between power-ups, such as a free-running
/// timer read at boot. `SmallRng` is not cryptographically secure and the
/// outcome is only as unpredictable as the seed.
pub fn seed_from_entropy(entropy: u64) -> SmallRng {
    SmallRng::seed_from_u64(entropy)
}

/// Board peripherals owned by the game
pub struct Peripherals<R: RingDriver, D, B, I, C, T> {
    pub ring: Ring<R>,
    pub display: D,
    pub buzzer: B,
    pub buttons: I,
    pub clock: C,
    pub delay: T,
}

impl<R: RingDriver, D, B, I, C, T> Peripherals<R, D, B, I, C, T> {
    pub const fn new(ring: R, display: D, buzzer: B, buttons: I, clock: C, delay: T) -> Self {
        Self {
            ring: Ring::new(ring),
            display,
            buzzer,
            buttons,
            clock,
            delay,
        }
    }
}

/// Summary of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub plan: SpinPlan,
    pub final_color: PocketColor,
    pub outcome: Outcome,
    pub bet: i32,
    pub balance: i32,
}

/// What a single pass of the loop did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickReport {
    /// Menu was drawn; contains the presses accepted this pass
    Menu(PressSet),
    /// A full round was played
    Round(RoundReport),
}

/// Roulette game - owns the state and all peripherals
pub struct Game<R, D, B, I, C, T, G>
where
    R: RingDriver,
{
    peripherals: Peripherals<R, D, B, I, C, T>,
    rng: G,
    state: GameState,
    input: InputController,
    engine: SpinEngine,
    settlement: Settlement,
}

impl<R, D, B, I, C, T, G> Game<R, D, B, I, C, T, G>
where
    R: RingDriver,
    D: TextDisplay,
    B: Buzzer,
    I: ButtonInput,
    C: Clock,
    T: DelayNs,
    G: RngCore,
{
    pub fn new(
        peripherals: Peripherals<R, D, B, I, C, T>,
        rng: G,
        config: &GameConfig,
        profile: SpinProfile,
    ) -> Self {
        let mut game = Self {
            peripherals,
            rng,
            state: GameState::new(config),
            input: InputController::new(config.debounce),
            engine: SpinEngine::new(profile),
            settlement: Settlement::new(config.result_dwell),
        };
        game.peripherals.ring.blank();
        render_menu(&mut game.peripherals.display, &game.state);
        game
    }

    /// Run the loop forever
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
        }
    }

    /// One pass of the dispatch loop
    pub fn tick(&mut self) -> TickReport {
        match self.state.mode {
            Mode::Menu => TickReport::Menu(self.menu_tick()),
            Mode::Spinning => {
                let plan = self.engine.plan(&mut self.rng);
                TickReport::Round(self.play_round(plan))
            }
        }
    }

    fn menu_tick(&mut self) -> PressSet {
        let now = self.peripherals.clock.now();
        render_menu(&mut self.peripherals.display, &self.state);
        self.input
            .poll(&mut self.state, &mut self.peripherals.buttons, now)
    }

    /// Play a round with a predetermined plan. Returns to menu mode when done.
    pub fn play_round(&mut self, plan: SpinPlan) -> RoundReport {
        self.state.start_spin();
        let p = &mut self.peripherals;

        let spin = self.engine.run(&mut p.ring, &mut p.buzzer, &mut p.delay, plan);
        let outcome = self.settlement.run(
            &mut self.state,
            spin.final_color,
            &mut p.display,
            &mut p.buzzer,
            &mut p.delay,
        );

        RoundReport {
            plan,
            final_color: spin.final_color,
            outcome,
            bet: self.state.bet(),
            balance: self.state.balance,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn peripherals(&self) -> &Peripherals<R, D, B, I, C, T> {
        &self.peripherals
    }

    pub fn peripherals_mut(&mut self) -> &mut Peripherals<R, D, B, I, C, T> {
        &mut self.peripherals
    }
}
