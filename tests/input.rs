mod common;

mod tests {
    use super::common::HeldButtons;
    use ring_roulette::{
        Button, Debouncer, Duration, GameConfig, GameState, Instant, InputController, Mode,
        PocketColor,
    };

    const DEBOUNCE: Duration = Duration::from_millis(150);

    fn press(
        input: &mut InputController,
        state: &mut GameState,
        button: Button,
        at_ms: u64,
    ) -> bool {
        let mut buttons = HeldButtons::default();
        buttons.hold(button);
        input
            .poll(state, &mut buttons, Instant::from_millis(at_ms))
            .contains(button)
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(&GameConfig::DEFAULT);
        assert_eq!(state.balance, 500);
        assert_eq!(state.bet(), 100);
        assert_eq!(state.selected, PocketColor::Red);
        assert_eq!(state.mode, Mode::Menu);
    }

    #[test]
    fn test_bet_never_below_minimum() {
        let mut state = GameState::default();
        let mut input = InputController::new(DEBOUNCE);

        assert!(press(&mut input, &mut state, Button::IncreaseBet, 1000));
        assert_eq!(state.bet(), 200);

        for i in 0..10 {
            press(&mut input, &mut state, Button::DecreaseBet, 2000 + i * 200);
            assert!(state.bet() >= 100);
        }
        assert_eq!(state.bet(), 100);
    }

    #[test]
    fn test_with_bet_clamps_to_minimum() {
        assert_eq!(GameState::default().with_bet(0).bet(), 100);
        assert_eq!(GameState::default().with_bet(-50).bet(), 100);
        assert_eq!(GameState::default().with_bet(400).bet(), 400);
    }

    #[test]
    fn test_debounce_same_button() {
        let mut state = GameState::default();
        let mut input = InputController::new(DEBOUNCE);

        assert!(press(&mut input, &mut state, Button::IncreaseBet, 1000));
        assert!(!press(&mut input, &mut state, Button::IncreaseBet, 1100));
        assert!(!press(&mut input, &mut state, Button::IncreaseBet, 1149));
        assert_eq!(state.bet(), 200);

        assert!(press(&mut input, &mut state, Button::IncreaseBet, 1150));
        assert_eq!(state.bet(), 300);
    }

    #[test]
    fn test_debounce_is_per_button() {
        let mut state = GameState::default();
        let mut input = InputController::new(DEBOUNCE);

        assert!(press(&mut input, &mut state, Button::IncreaseBet, 1000));
        assert!(press(&mut input, &mut state, Button::CycleColor, 1010));
        assert_eq!(state.bet(), 200);
        assert_eq!(state.selected, PocketColor::Blue);
    }

    #[test]
    fn test_presses_right_after_boot_are_ignored() {
        let mut debouncer = Debouncer::new(DEBOUNCE);
        assert!(!debouncer.accept(Button::Confirm, Instant::from_millis(100)));
        assert!(debouncer.accept(Button::Confirm, Instant::from_millis(150)));
        assert_eq!(
            debouncer.last_accepted(Button::Confirm),
            Instant::from_millis(150)
        );
    }

    #[test]
    fn test_simultaneous_presses_apply_together() {
        let mut state = GameState::default();
        let mut input = InputController::new(DEBOUNCE);
        let mut buttons = HeldButtons::default();
        buttons.hold(Button::IncreaseBet);
        buttons.hold(Button::CycleColor);
        buttons.hold(Button::Confirm);

        let accepted = input.poll(&mut state, &mut buttons, Instant::from_millis(500));

        assert_eq!(accepted.len(), 3);
        assert!(!accepted.contains(Button::DecreaseBet));
        assert_eq!(state.bet(), 200);
        assert_eq!(state.selected, PocketColor::Blue);
        assert_eq!(state.mode, Mode::Spinning);
    }

    #[test]
    fn test_color_cycle_closure() {
        let mut state = GameState::default();
        let mut input = InputController::new(DEBOUNCE);
        for i in 0..3 {
            press(&mut input, &mut state, Button::CycleColor, 1000 + i * 200);
        }
        assert_eq!(state.selected, PocketColor::Red);
    }

    #[test]
    fn test_no_effect_while_spinning() {
        let mut state = GameState::default();
        state.start_spin();
        let before = state;
        let mut input = InputController::new(DEBOUNCE);
        let mut buttons = HeldButtons::default();
        for button in Button::ALL {
            buttons.hold(button);
        }

        let accepted = input.poll(&mut state, &mut buttons, Instant::from_millis(5000));

        assert!(accepted.is_empty());
        assert_eq!(state, before);
        assert_eq!(
            input.debouncer().last_accepted(Button::IncreaseBet),
            Instant::from_millis(0)
        );
    }
}
