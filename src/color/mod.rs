//! Pocket colors and the position-to-color mapping of the ring.

use smart_leds::RGB8;

pub type Rgb = RGB8;

const COLOR_NAME_RED: &str = "RED";
const COLOR_NAME_BLUE: &str = "BLUE";
const COLOR_NAME_GREEN: &str = "GREEN";

const COLOR_ID_RED: u8 = 0;
const COLOR_ID_BLUE: u8 = 1;
const COLOR_ID_GREEN: u8 = 2;

/// Number of distinct pocket colors.
pub const COLOR_COUNT: u8 = 3;

/// Multiplier of the position-to-color mapping. Must stay coprime to [`COLOR_COUNT`].
const POSITION_MULTIPLIER: usize = 7;

/// Color a player can bet on and a ring position can resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PocketColor {
    #[default]
    Red = COLOR_ID_RED,
    Blue = COLOR_ID_BLUE,
    Green = COLOR_ID_GREEN,
}

impl PocketColor {
    pub const ALL: [Self; COLOR_COUNT as usize] = [Self::Red, Self::Blue, Self::Green];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            COLOR_ID_RED => Self::Red,
            COLOR_ID_BLUE => Self::Blue,
            COLOR_ID_GREEN => Self::Green,
            _ => return None,
        })
    }

    /// Display name shown on the menu and result screens
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => COLOR_NAME_RED,
            Self::Blue => COLOR_NAME_BLUE,
            Self::Green => COLOR_NAME_GREEN,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            COLOR_NAME_RED => Some(Self::Red),
            COLOR_NAME_BLUE => Some(Self::Blue),
            COLOR_NAME_GREEN => Some(Self::Green),
            _ => None,
        }
    }

    /// Next color in the selection cycle (RED -> BLUE -> GREEN -> RED)
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Green,
            Self::Green => Self::Red,
        }
    }

    /// LED color used to light a pocket of this color
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => Rgb { r: 255, g: 0, b: 0 },
            Self::Blue => Rgb { r: 0, g: 0, b: 255 },
            Self::Green => Rgb { r: 0, g: 255, b: 0 },
        }
    }
}

/// Color of a ring position.
///
/// Linear in the position modulo [`COLOR_COUNT`], so on a ring whose size is a
/// multiple of three every color owns the same number of positions.
#[allow(clippy::cast_possible_truncation)]
pub const fn color_of(position: usize) -> PocketColor {
    match ((position * POSITION_MULTIPLIER) % COLOR_COUNT as usize) as u8 {
        COLOR_ID_RED => PocketColor::Red,
        COLOR_ID_BLUE => PocketColor::Blue,
        _ => PocketColor::Green,
    }
}
