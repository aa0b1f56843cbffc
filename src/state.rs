use crate::color::PocketColor;
use crate::config::GameConfig;
use crate::settlement::Outcome;

/// Top-level mode of the dispatch loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Menu is shown and buttons are live
    #[default]
    Menu,
    /// Wheel owns the ring; buttons are ignored until settlement ends
    Spinning,
}

/// Everything the player can see or change
///
/// The balance has no floor and can go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub balance: i32,
    bet: i32,
    pub selected: PocketColor,
    pub mode: Mode,
    bet_step: i32,
    min_bet: i32,
}

impl GameState {
    pub const fn new(config: &GameConfig) -> Self {
        Self {
            balance: config.starting_balance,
            bet: config.starting_bet,
            selected: PocketColor::Red,
            mode: Mode::Menu,
            bet_step: config.bet_step,
            min_bet: config.min_bet,
        }
    }

    /// Same state with the bet replaced, clamped to the minimum bet
    #[must_use]
    pub fn with_bet(mut self, bet: i32) -> Self {
        self.bet = bet.max(self.min_bet);
        self
    }

    /// Stake of the next spin, never below the minimum bet
    pub const fn bet(&self) -> i32 {
        self.bet
    }

    pub fn raise_bet(&mut self) {
        self.bet = self.bet.saturating_add(self.bet_step);
    }

    /// Lower the bet by one step, never below the minimum bet
    pub fn lower_bet(&mut self) {
        self.bet = self.bet.saturating_sub(self.bet_step).max(self.min_bet);
    }

    pub fn cycle_color(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn start_spin(&mut self) {
        self.mode = Mode::Spinning;
    }

    pub fn finish_spin(&mut self) {
        self.mode = Mode::Menu;
    }

    pub const fn is_spinning(&self) -> bool {
        matches!(self.mode, Mode::Spinning)
    }

    /// Resolve the current bet against the color the wheel stopped on
    pub fn settle(&mut self, final_color: PocketColor) -> Outcome {
        if final_color == self.selected {
            self.balance = self.balance.saturating_add(self.bet);
            Outcome::Win
        } else {
            self.balance = self.balance.saturating_sub(self.bet);
            Outcome::Lose
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::DEFAULT)
    }
}
