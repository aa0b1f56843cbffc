//! Tunable game and animation parameters.

use core::ops::Range;

use embassy_time::Duration;

/// Rules and timings of the betting game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Balance at power-on
    pub starting_balance: i32,
    /// Bet at power-on
    pub starting_bet: i32,
    /// Amount a single bet button press adds or removes
    pub bet_step: i32,
    /// Lowest bet the player can lower to
    pub min_bet: i32,
    /// Minimum time between two accepted presses of the same button
    pub debounce: Duration,
    /// How long the result screen stays up before returning to the menu
    pub result_dwell: Duration,
}

impl GameConfig {
    pub const DEFAULT: Self = Self {
        starting_balance: 500,
        starting_bet: 100,
        bet_step: 100,
        min_bet: 100,
        debounce: Duration::from_millis(150),
        result_dwell: Duration::from_millis(3000),
    };
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Shape of the wheel animation.
///
/// Thresholds are percentages of the total step count. Once a step index is
/// past `slow_threshold` the interval grows by `slow_increment` after every
/// step; past `slower_threshold` it grows by `slower_increment` on top of that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinProfile {
    /// Full rotations before stopping, upper bound exclusive
    pub rounds: Range<u16>,
    /// Interval of a cruising step
    pub base_interval: Duration,
    /// Steps spent speeding up before cruising, zero disables the launch
    pub launch_steps: u16,
    /// Interval removed per launch step
    pub launch_increment: Duration,
    pub slow_threshold: u8,
    pub slow_increment: Duration,
    pub slower_threshold: u8,
    pub slower_increment: Duration,
    /// Number of off/on blinks on the final position
    pub blink_count: u8,
    pub blink_on: Duration,
    pub blink_off: Duration,
}

impl SpinProfile {
    pub const DEFAULT: Self = Self {
        rounds: 4..9,
        base_interval: Duration::from_millis(10),
        launch_steps: 0,
        launch_increment: Duration::from_millis(3),
        slow_threshold: 60,
        slow_increment: Duration::from_millis(3),
        slower_threshold: 80,
        slower_increment: Duration::from_millis(6),
        blink_count: 4,
        blink_on: Duration::from_millis(150),
        blink_off: Duration::from_millis(150),
    };
}

impl Default for SpinProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}
