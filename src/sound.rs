//! Sound cues

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;

use crate::peripherals::Buzzer;

/// Single tone of a melody
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub frequency_hz: u32,
    /// How long the tone sounds
    pub duration: Duration,
    /// Time from this note's onset to the next one
    pub spacing: Duration,
}

impl Note {
    pub const fn new(frequency_hz: u32, duration_ms: u64, spacing_ms: u64) -> Self {
        Self {
            frequency_hz,
            duration: Duration::from_millis(duration_ms),
            spacing: Duration::from_millis(spacing_ms),
        }
    }
}

pub type Melody = [Note];

/// Four ascending tones
pub const WIN_MELODY: [Note; 4] = [
    Note::new(1000, 150, 180),
    Note::new(1400, 150, 180),
    Note::new(1800, 150, 180),
    Note::new(2200, 150, 180),
];

/// Three descending tones
pub const LOSE_MELODY: [Note; 3] = [
    Note::new(800, 200, 230),
    Note::new(600, 200, 230),
    Note::new(400, 200, 230),
];

/// Click played on every wheel step. Its spacing is the step interval, set per step.
pub const SPIN_TICK: Note = Note::new(1200, 20, 0);

/// Play a melody, blocking until the last note's spacing has elapsed
pub fn play_melody<B: Buzzer, T: DelayNs>(buzzer: &mut B, delay: &mut T, melody: &Melody) {
    for note in melody {
        buzzer.tone(note.frequency_hz, note.duration);
        wait(delay, note.spacing);
    }
    buzzer.no_tone();
}

/// Block for a duration with millisecond resolution
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn wait<T: DelayNs>(delay: &mut T, duration: Duration) {
    let ms = duration.as_millis().min(u64::from(u32::MAX)) as u32;
    if ms > 0 {
        delay.delay_ms(ms);
    }
}
