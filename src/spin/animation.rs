//! Wheel animation as a frame state machine
//!
//! The animation knows nothing about hardware or real time: it yields one
//! [`SpinFrame`] per ring update, each carrying how long it must stay up.

use embassy_time::Duration;

use crate::color::{PocketColor, color_of};
use crate::config::SpinProfile;
use crate::ring::RING_SIZE;

use super::SpinPlan;

/// Phase of the wheel a frame belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpinPhase {
    /// Wheel is picking up speed
    Accelerate,
    /// Constant interval
    Cruise,
    /// First slowdown stage
    DecelerateOne,
    /// Second, steeper slowdown stage
    DecelerateTwo,
    /// Wheel stopped, final position blinking
    Blink,
}

/// One ring update of the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinFrame {
    pub phase: SpinPhase,
    /// Only lit position, `None` for a dark ring
    pub lit: Option<usize>,
    /// Whether the step click sounds with this frame
    pub tick: bool,
    /// How long the frame stays up
    pub dwell: Duration,
}

impl SpinFrame {
    /// Color of the lit position
    pub fn color(&self) -> Option<PocketColor> {
        self.lit.map(color_of)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Steps,
    Blink(u16),
    Done,
}

/// Iterator over the frames of one spin
///
/// The wheel starts at position 0 and advances one position per step frame,
/// so after `plan.total_steps()` advances it rests on `plan.final_position`.
#[derive(Debug, Clone)]
pub struct SpinAnimation {
    profile: SpinProfile,
    total: u32,
    /// Launch steps, cut off where the first slowdown begins
    launch: u32,
    final_position: usize,
    step: u32,
    interval: Duration,
    stage: Stage,
}

impl SpinAnimation {
    pub fn new(plan: SpinPlan, profile: &SpinProfile) -> Self {
        let total = plan.total_steps();
        let slow_start = u64::from(total) * u64::from(profile.slow_threshold) / 100 + 1;
        #[allow(clippy::cast_possible_truncation)]
        let launch = u64::from(profile.launch_steps).min(slow_start) as u32;
        Self {
            profile: profile.clone(),
            total,
            launch,
            final_position: plan.final_position,
            step: 0,
            interval: profile.base_interval + profile.launch_increment * launch,
            stage: Stage::Steps,
        }
    }

    /// Number of position advances before the wheel stops
    pub const fn total_steps(&self) -> u32 {
        self.total
    }

    /// Frames yielded over the whole animation
    pub fn frame_count(&self) -> u32 {
        self.total + 1 + 2 * u32::from(self.profile.blink_count)
    }

    /// Interval the next step frame will use
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Phase of the step with the given index
    pub fn phase_of(&self, step: u32) -> SpinPhase {
        if step < self.launch {
            SpinPhase::Accelerate
        } else if self.is_past(step, self.profile.slower_threshold) {
            SpinPhase::DecelerateTwo
        } else if self.is_past(step, self.profile.slow_threshold) {
            SpinPhase::DecelerateOne
        } else {
            SpinPhase::Cruise
        }
    }

    /// True once `step` is strictly beyond `percent` of the total
    fn is_past(&self, step: u32, percent: u8) -> bool {
        u64::from(step) * 100 > u64::from(self.total) * u64::from(percent)
    }

    /// Interval change applied after a step of the given phase
    fn advance_interval(&mut self, phase: SpinPhase) {
        let profile = &self.profile;
        self.interval = match phase {
            SpinPhase::Accelerate => self
                .interval
                .checked_sub(profile.launch_increment)
                .unwrap_or(profile.base_interval)
                .max(profile.base_interval),
            SpinPhase::Cruise | SpinPhase::Blink => self.interval,
            SpinPhase::DecelerateOne => self.interval + profile.slow_increment,
            SpinPhase::DecelerateTwo => {
                self.interval + profile.slow_increment + profile.slower_increment
            }
        };
    }

    fn next_step(&mut self) -> SpinFrame {
        let step = self.step;
        let phase = self.phase_of(step);
        let frame = SpinFrame {
            phase,
            lit: Some(step as usize % RING_SIZE),
            tick: true,
            dwell: self.interval,
        };

        self.advance_interval(phase);
        if step >= self.total {
            self.stage = Stage::Blink(0);
        } else {
            self.step += 1;
        }

        frame
    }

    fn next_blink(&mut self, half: u16) -> Option<SpinFrame> {
        if half >= 2 * u16::from(self.profile.blink_count) {
            self.stage = Stage::Done;
            return None;
        }
        self.stage = Stage::Blink(half + 1);

        // Off first, so the animation always ends on a lit frame
        let frame = if half.is_multiple_of(2) {
            SpinFrame {
                phase: SpinPhase::Blink,
                lit: None,
                tick: false,
                dwell: self.profile.blink_off,
            }
        } else {
            SpinFrame {
                phase: SpinPhase::Blink,
                lit: Some(self.final_position),
                tick: false,
                dwell: self.profile.blink_on,
            }
        };
        Some(frame)
    }
}

impl Iterator for SpinAnimation {
    type Item = SpinFrame;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stage {
            Stage::Steps => Some(self.next_step()),
            Stage::Blink(half) => self.next_blink(half),
            Stage::Done => None,
        }
    }
}
