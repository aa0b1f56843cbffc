//! Screens drawn on the text display
//!
//! Screens are redrawn from state on every call; nothing is cached.

use crate::color::PocketColor;
use crate::peripherals::TextDisplay;
use crate::settlement::Outcome;
use crate::state::GameState;

const MENU_TEXT_SIZE: u8 = 1;
const RESULT_COLOR_TEXT_SIZE: u8 = 2;
const RESULT_TEXT_SIZE: u8 = 1;

const BALANCE_ROW: u8 = 0;
const BET_ROW: u8 = 20;
const COLOR_ROW: u8 = 40;
const RESULT_ROW: u8 = 40;

const BALANCE_VALUE_X: u8 = 70;
const BET_VALUE_X: u8 = 30;
const COLOR_VALUE_X: u8 = 50;

/// Draw balance, bet and selected color
pub fn render_menu<D: TextDisplay>(display: &mut D, state: &GameState) {
    display.clear();
    display.set_text_size(MENU_TEXT_SIZE);

    display.set_cursor(0, BALANCE_ROW);
    display.print("Balance:");
    display.set_cursor(BALANCE_VALUE_X, BALANCE_ROW);
    display.print_int(state.balance);

    display.set_cursor(0, BET_ROW);
    display.print("Bet:");
    display.set_cursor(BET_VALUE_X, BET_ROW);
    display.print_int(state.bet());

    display.set_cursor(0, COLOR_ROW);
    display.print("Color:");
    display.set_cursor(COLOR_VALUE_X, COLOR_ROW);
    display.print(state.selected.as_str());

    display.present();
}

/// Draw the color the wheel stopped on and the bet won or lost
pub fn render_result<D: TextDisplay>(
    display: &mut D,
    final_color: PocketColor,
    outcome: Outcome,
    bet: i32,
) {
    display.clear();
    display.set_text_size(RESULT_COLOR_TEXT_SIZE);
    display.set_cursor(0, 0);
    display.print(final_color.as_str());

    display.set_text_size(RESULT_TEXT_SIZE);
    display.set_cursor(0, RESULT_ROW);
    display.print(outcome.label());
    display.print_int(bet);

    display.present();
}
