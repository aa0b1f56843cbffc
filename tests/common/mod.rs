#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use ring_roulette::{
    Button, ButtonInput, Buzzer, Clock, Duration, Instant, RING_SIZE, Rgb, RingDriver,
    TextDisplay,
};

/// Simulated time shared by the clock and the delay
#[derive(Clone, Default)]
pub struct SimTime {
    nanos: Rc<Cell<u64>>,
}

impl SimTime {
    pub fn set_millis(&self, ms: u64) {
        self.nanos.set(ms * 1_000_000);
    }

    pub fn advance_millis(&self, ms: u64) {
        self.nanos.set(self.nanos.get() + ms * 1_000_000);
    }

    pub fn millis(&self) -> u64 {
        self.nanos.get() / 1_000_000
    }
}

pub struct SimClock(pub SimTime);

impl Clock for SimClock {
    fn now(&self) -> Instant {
        Instant::from_millis(self.0.millis())
    }
}

/// Delay that advances simulated time and records every wait
pub struct SimDelay {
    pub time: SimTime,
    pub waits_ms: Vec<u32>,
}

impl SimDelay {
    pub fn new(time: SimTime) -> Self {
        Self {
            time,
            waits_ms: Vec::new(),
        }
    }

    pub fn total_ms(&self) -> u64 {
        self.waits_ms.iter().map(|&ms| u64::from(ms)).sum()
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.time.nanos.set(self.time.nanos.get() + u64::from(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
        self.time.advance_millis(u64::from(ms));
    }
}

/// Ring driver keeping every pushed frame
#[derive(Default)]
pub struct RecordingRing {
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingRing {
    /// Lit positions of a recorded frame
    pub fn lit(&self, frame: usize) -> Vec<usize> {
        self.frames[frame]
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != Rgb::default())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn last_frame(&self) -> &[Rgb] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl RingDriver for RecordingRing {
    fn write(&mut self, colors: &[Rgb]) {
        assert_eq!(colors.len(), RING_SIZE);
        self.frames.push(colors.to_vec());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Printed {
    pub size: u8,
    pub x: u8,
    pub y: u8,
    pub text: String,
}

/// Display keeping the last presented screen
#[derive(Default)]
pub struct RecordingDisplay {
    size: u8,
    cursor: (u8, u8),
    buffer: Vec<Printed>,
    pub screens: Vec<Vec<Printed>>,
}

impl RecordingDisplay {
    pub fn last_screen(&self) -> &[Printed] {
        self.screens.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Texts of the last screen, in print order
    pub fn last_texts(&self) -> Vec<&str> {
        self.last_screen().iter().map(|p| p.text.as_str()).collect()
    }
}

impl TextDisplay for RecordingDisplay {
    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn set_text_size(&mut self, size: u8) {
        self.size = size;
    }

    fn set_cursor(&mut self, x: u8, y: u8) {
        self.cursor = (x, y);
    }

    fn print(&mut self, text: &str) {
        self.buffer.push(Printed {
            size: self.size,
            x: self.cursor.0,
            y: self.cursor.1,
            text: text.to_string(),
        });
    }

    fn present(&mut self) {
        self.screens.push(self.buffer.clone());
    }
}

#[derive(Default)]
pub struct RecordingBuzzer {
    pub tones: Vec<(u32, Duration)>,
    pub silenced: usize,
}

impl Buzzer for RecordingBuzzer {
    fn tone(&mut self, frequency_hz: u32, duration: Duration) {
        self.tones.push((frequency_hz, duration));
    }

    fn no_tone(&mut self) {
        self.silenced += 1;
    }
}

/// Buttons held down until released by the test
#[derive(Default)]
pub struct HeldButtons {
    pub held: Vec<Button>,
}

impl HeldButtons {
    pub fn hold(&mut self, button: Button) {
        if !self.held.contains(&button) {
            self.held.push(button);
        }
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl ButtonInput for HeldButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.held.contains(&button)
    }
}
