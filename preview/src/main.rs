//! Desktop simulator for the light-ring roulette
//!
//! Runs the real game loop on a worker thread against simulated peripherals
//! and draws the ring, the text display and the four buttons in a window.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration as StdDuration, SystemTime, UNIX_EPOCH};

use eframe::egui::{self};
use embedded_hal::delay::DelayNs;
use ring_roulette::{
    Button, ButtonInput, Buzzer, Duration, Game, GameConfig, Peripherals, RING_SIZE, Rgb,
    RingDriver, SpinProfile, SystemClock, TextDisplay, TickReport, seed_from_entropy,
};

/// Display size of the simulated OLED
const SCREEN_WIDTH: f32 = 128.0;
const SCREEN_HEIGHT: f32 = 64.0;

/// Pixel scale of the simulated OLED
const SCREEN_SCALE: f32 = 3.0;

/// Base glyph size of a size-1 font, in display pixels
const GLYPH_WIDTH: f32 = 6.0;
const GLYPH_HEIGHT: f32 = 8.0;

/// Pause between menu ticks, well under the 150 ms debounce window
const MENU_POLL_INTERVAL: StdDuration = StdDuration::from_millis(5);

/// Radius of the drawn ring
const RING_RADIUS: f32 = 110.0;

/// Size of each LED circle in pixels
const LED_RADIUS: f32 = 9.0;

const BUTTON_LABELS: [(Button, &str); 4] = [
    (Button::IncreaseBet, "Bet +"),
    (Button::DecreaseBet, "Bet -"),
    (Button::CycleColor, "Color"),
    (Button::Confirm, "Spin"),
];

#[derive(Debug, Clone, PartialEq)]
struct TextItem {
    size: u8,
    x: u8,
    y: u8,
    text: String,
}

/// State shared between the game thread and the UI
#[derive(Default)]
struct Shared {
    leds: Mutex<Vec<Rgb>>,
    screen: Mutex<Vec<TextItem>>,
    tone: Mutex<Option<(u32, std::time::Instant)>>,
    buttons: [AtomicBool; 4],
}

impl Shared {
    fn button(&self, button: Button) -> &AtomicBool {
        &self.buttons[button as usize]
    }
}

struct SimRing(Arc<Shared>);

impl RingDriver for SimRing {
    fn write(&mut self, colors: &[Rgb]) {
        let mut leds = self.0.leds.lock().unwrap_or_else(PoisonError::into_inner);
        leds.clear();
        leds.extend_from_slice(colors);
    }
}

struct SimDisplay {
    shared: Arc<Shared>,
    size: u8,
    cursor: (u8, u8),
    buffer: Vec<TextItem>,
}

impl TextDisplay for SimDisplay {
    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn set_text_size(&mut self, size: u8) {
        self.size = size;
    }

    fn set_cursor(&mut self, x: u8, y: u8) {
        self.cursor = (x, y);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn print(&mut self, text: &str) {
        self.buffer.push(TextItem {
            size: self.size,
            x: self.cursor.0,
            y: self.cursor.1,
            text: text.to_string(),
        });
        let advance = text.len() as f32 * GLYPH_WIDTH * f32::from(self.size);
        self.cursor.0 = (f32::from(self.cursor.0) + advance).min(255.0) as u8;
    }

    fn present(&mut self) {
        let mut screen = self.shared.screen.lock().unwrap_or_else(PoisonError::into_inner);
        if *screen != self.buffer {
            screen.clone_from(&self.buffer);
        }
    }
}

struct SimBuzzer(Arc<Shared>);

impl Buzzer for SimBuzzer {
    fn tone(&mut self, frequency_hz: u32, duration: Duration) {
        let until = std::time::Instant::now() + StdDuration::from_millis(duration.as_millis());
        *self.0.tone.lock().unwrap_or_else(PoisonError::into_inner) = Some((frequency_hz, until));
    }

    fn no_tone(&mut self) {
        *self.0.tone.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

struct SimButtons(Arc<Shared>);

impl ButtonInput for SimButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        self.0.button(button).load(Ordering::Relaxed)
    }
}

struct ThreadDelay;

impl DelayNs for ThreadDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(StdDuration::from_nanos(u64::from(ns)));
    }
}

fn main() -> eframe::Result<()> {
    let shared = Arc::new(Shared::default());
    spawn_game(Arc::clone(&shared));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_title("Ring Roulette Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "ring-roulette-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp { shared }))),
    )
}

/// How long the game thread sleeps after a tick
///
/// A menu tick returns at once, so the thread yields between polls. A round
/// has already paced itself through the delay.
fn idle_after(report: &TickReport) -> Option<StdDuration> {
    match report {
        TickReport::Menu(_) => Some(MENU_POLL_INTERVAL),
        TickReport::Round(_) => None,
    }
}

/// Start the game loop; it never returns, the thread dies with the process
fn spawn_game(shared: Arc<Shared>) {
    std::thread::spawn(move || {
        #[allow(clippy::cast_possible_truncation)]
        let entropy = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();

        let peripherals = Peripherals::new(
            SimRing(Arc::clone(&shared)),
            SimDisplay {
                shared: Arc::clone(&shared),
                size: 1,
                cursor: (0, 0),
                buffer: Vec::new(),
            },
            SimBuzzer(Arc::clone(&shared)),
            SimButtons(Arc::clone(&shared)),
            SystemClock,
            ThreadDelay,
        );
        let mut game = Game::new(
            peripherals,
            seed_from_entropy(entropy),
            &GameConfig::DEFAULT,
            SpinProfile::DEFAULT,
        );
        loop {
            if let Some(pause) = idle_after(&game.tick()) {
                std::thread::sleep(pause);
            }
        }
    });
}

struct PreviewApp {
    shared: Arc<Shared>,
}

impl PreviewApp {
    fn draw_ring(&self, ui: &mut egui::Ui) {
        let leds = self
            .shared
            .leds
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let size = 2.0 * (RING_RADIUS + LED_RADIUS) + 4.0;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(size, size), egui::Sense::hover());
        let center = response.rect.center();

        #[allow(clippy::cast_precision_loss)]
        for index in 0..RING_SIZE {
            // position 0 at twelve o'clock, clockwise
            let angle = index as f32 / RING_SIZE as f32 * std::f32::consts::TAU
                - std::f32::consts::FRAC_PI_2;
            let pos = center + RING_RADIUS * egui::vec2(angle.cos(), angle.sin());
            let pixel = leds.get(index).copied().unwrap_or_default();
            let fill = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
            painter.circle_filled(pos, LED_RADIUS, fill);
            painter.circle_stroke(pos, LED_RADIUS, egui::Stroke::new(1.0, egui::Color32::DARK_GRAY));
        }

        let tone = *self.shared.tone.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((hz, until)) = tone {
            if std::time::Instant::now() < until {
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    format!("♪ {hz} Hz"),
                    egui::FontId::monospace(14.0),
                    egui::Color32::LIGHT_GRAY,
                );
            }
        }
    }

    fn draw_screen(&self, ui: &mut egui::Ui) {
        let screen = self
            .shared
            .screen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let (response, painter) = ui.allocate_painter(
            egui::vec2(SCREEN_WIDTH * SCREEN_SCALE, SCREEN_HEIGHT * SCREEN_SCALE),
            egui::Sense::hover(),
        );
        let origin = response.rect.min;
        painter.rect_filled(response.rect, 4.0, egui::Color32::BLACK);

        for item in &screen {
            let pos = origin
                + SCREEN_SCALE * egui::vec2(f32::from(item.x), f32::from(item.y));
            painter.text(
                pos,
                egui::Align2::LEFT_TOP,
                &item.text,
                egui::FontId::monospace(GLYPH_HEIGHT * SCREEN_SCALE * f32::from(item.size)),
                egui::Color32::WHITE,
            );
        }
    }

    fn draw_buttons(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (button, label) in BUTTON_LABELS {
                // Buttons are level-triggered: held while the pointer is down
                let response = ui.add(egui::Button::new(label).sense(egui::Sense::drag()));
                let held = response.is_pointer_button_down_on();
                self.shared.button(button).store(held, Ordering::Relaxed);
            }
        });
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.draw_ring(ui);
                ui.add_space(16.0);
                ui.vertical(|ui| {
                    self.draw_screen(ui);
                    ui.add_space(12.0);
                    self.draw_buttons(ui);
                });
            });
        });
    }
}
