#![no_std]

pub mod color;
pub mod config;
pub mod game;
pub mod input;
pub mod menu;
pub mod peripherals;
pub mod ring;
pub mod settlement;
pub mod sound;
pub mod spin;
pub mod state;

pub use config::{GameConfig, SpinProfile};
pub use game::{Game, Peripherals, RoundReport, TickReport, seed_from_entropy};
pub use input::{Button, Debouncer, InputController, PressSet};
pub use peripherals::{ButtonInput, Buzzer, Clock, SmartLedsRing, SystemClock, TextDisplay};
pub use ring::{RING_SIZE, Ring};
pub use settlement::{Outcome, Settlement};
pub use spin::{SpinAnimation, SpinEngine, SpinFrame, SpinPhase, SpinPlan, SpinResult};
pub use state::{GameState, Mode};

pub use color::{PocketColor, Rgb, color_of};
pub use embassy_time::{Duration, Instant};

/// Abstract light ring driver trait
///
/// Implement this trait to support different hardware platforms.
/// The spin engine is generic over this trait.
pub trait RingDriver {
    /// Push a full frame to the ring
    fn write(&mut self, colors: &[Rgb]);
}
