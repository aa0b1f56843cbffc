//! Spin engine
//!
//! A spin is drawn up front as a [`SpinPlan`] (full rounds plus the stopping
//! position), expanded into frames by [`SpinAnimation`], and played against the
//! ring, buzzer and delay by [`SpinEngine::run`]. The run blocks until the
//! wheel has stopped and cannot be interrupted.

mod animation;

use embedded_hal::delay::DelayNs;
use rand::Rng;

#[cfg(feature = "esp32-log")]
use esp_println::println;

pub use animation::{SpinAnimation, SpinFrame, SpinPhase};

use crate::RingDriver;
use crate::color::{PocketColor, color_of};
use crate::config::SpinProfile;
use crate::peripherals::Buzzer;
use crate::ring::{RING_SIZE, Ring};
use crate::sound::{SPIN_TICK, wait};

/// Where the wheel will stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinPlan {
    /// Full rotations before the final partial one
    pub rounds: u16,
    /// Stopping position, always below [`RING_SIZE`]
    pub final_position: usize,
}

impl SpinPlan {
    /// Build a plan from drawn values.
    ///
    /// `final_position` must be below [`RING_SIZE`]. Debug builds panic on a
    /// larger value; release builds wrap it onto the ring.
    pub const fn new(rounds: u16, final_position: usize) -> Self {
        debug_assert!(
            final_position < RING_SIZE,
            "final_position must be below RING_SIZE"
        );
        Self {
            rounds,
            final_position: final_position % RING_SIZE,
        }
    }

    /// Draw rounds and stopping position uniformly
    pub fn draw<R: Rng>(rng: &mut R, profile: &SpinProfile) -> Self {
        let rounds = if profile.rounds.is_empty() {
            profile.rounds.start
        } else {
            rng.gen_range(profile.rounds.clone())
        };
        let final_position = rng.gen_range(0..RING_SIZE);
        Self::new(rounds, final_position)
    }

    /// Position advances from position 0 to the stopping position
    #[allow(clippy::cast_possible_truncation)]
    pub const fn total_steps(&self) -> u32 {
        self.rounds as u32 * RING_SIZE as u32 + self.final_position as u32
    }

    pub const fn final_color(&self) -> PocketColor {
        color_of(self.final_position)
    }
}

/// What a finished spin resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinResult {
    pub plan: SpinPlan,
    pub final_color: PocketColor,
    /// Position advances the wheel made
    pub steps: u32,
    /// Frames pushed to the ring, blink frames included
    pub frames: u32,
}

/// Drives spin animations on real peripherals
#[derive(Debug, Clone, Default)]
pub struct SpinEngine {
    profile: SpinProfile,
}

impl SpinEngine {
    pub const fn new(profile: SpinProfile) -> Self {
        Self { profile }
    }

    pub fn plan<R: Rng>(&self, rng: &mut R) -> SpinPlan {
        SpinPlan::draw(rng, &self.profile)
    }

    pub fn animation(&self, plan: SpinPlan) -> SpinAnimation {
        SpinAnimation::new(plan, &self.profile)
    }

    /// Play a whole spin, blocking until the final position is left lit.
    ///
    /// Every step frame starts the tick click and then waits the step
    /// interval, so the click is the frame's pacing.
    pub fn run<D, B, T>(
        &self,
        ring: &mut Ring<D>,
        buzzer: &mut B,
        delay: &mut T,
        plan: SpinPlan,
    ) -> SpinResult
    where
        D: RingDriver,
        B: Buzzer,
        T: DelayNs,
    {
        #[cfg(feature = "esp32-log")]
        println!(
            "[SpinEngine.run] rounds={} final_position={} total_steps={}",
            plan.rounds,
            plan.final_position,
            plan.total_steps()
        );

        ring.blank();

        let mut frames: u32 = 0;
        let mut step_frames: u32 = 0;
        for frame in self.animation(plan) {
            match frame.lit {
                Some(position) => ring.light_only(position),
                None => ring.blank(),
            }
            if frame.tick {
                buzzer.tone(SPIN_TICK.frequency_hz, SPIN_TICK.duration);
                step_frames += 1;
            }
            wait(delay, frame.dwell);
            frames += 1;
        }

        SpinResult {
            plan,
            final_color: plan.final_color(),
            steps: step_frames.saturating_sub(1),
            frames,
        }
    }
}
