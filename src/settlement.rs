use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::PocketColor;
use crate::menu::render_result;
use crate::peripherals::{Buzzer, TextDisplay};
use crate::sound::{LOSE_MELODY, Melody, WIN_MELODY, play_melody, wait};
use crate::state::GameState;

/// Result of a round for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Prefix printed before the bet amount
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "WIN +",
            Self::Lose => "LOSE -",
        }
    }

    pub fn melody(self) -> &'static Melody {
        match self {
            Self::Win => &WIN_MELODY,
            Self::Lose => &LOSE_MELODY,
        }
    }
}

/// Pays out or collects the bet and shows the result
#[derive(Debug, Clone, Copy)]
pub struct Settlement {
    dwell: Duration,
}

impl Settlement {
    pub const fn new(dwell: Duration) -> Self {
        Self { dwell }
    }

    /// Settle the round, show the result for the dwell time, then hand
    /// control back to the menu. Blocks for the whole sequence.
    pub fn run<D, B, T>(
        &self,
        state: &mut GameState,
        final_color: PocketColor,
        display: &mut D,
        buzzer: &mut B,
        delay: &mut T,
    ) -> Outcome
    where
        D: TextDisplay,
        B: Buzzer,
        T: DelayNs,
    {
        let outcome = state.settle(final_color);

        #[cfg(feature = "esp32-log")]
        println!(
            "[Settlement.run] {:?} on {} bet={} balance={}",
            outcome,
            final_color.as_str(),
            state.bet(),
            state.balance
        );

        render_result(display, final_color, outcome, state.bet());
        play_melody(buzzer, delay, outcome.melody());
        wait(delay, self.dwell);

        state.finish_spin();
        outcome
    }
}
