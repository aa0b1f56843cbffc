mod common;

mod tests {
    use super::common::{
        HeldButtons, RecordingBuzzer, RecordingDisplay, RecordingRing, SimClock, SimDelay,
        SimTime,
    };
    use rand::rngs::SmallRng;
    use ring_roulette::{
        Button, Game, GameConfig, Mode, Outcome, Peripherals, PocketColor, SpinPlan,
        SpinProfile, TickReport, color_of, seed_from_entropy,
    };

    type TestGame = Game<
        RecordingRing,
        RecordingDisplay,
        RecordingBuzzer,
        HeldButtons,
        SimClock,
        SimDelay,
        SmallRng,
    >;

    fn new_game(seed: u64) -> (TestGame, SimTime) {
        let time = SimTime::default();
        let peripherals = Peripherals::new(
            RecordingRing::default(),
            RecordingDisplay::default(),
            RecordingBuzzer::default(),
            HeldButtons::default(),
            SimClock(time.clone()),
            SimDelay::new(time.clone()),
        );
        let game = Game::new(
            peripherals,
            seed_from_entropy(seed),
            &GameConfig::DEFAULT,
            SpinProfile::DEFAULT,
        );
        (game, time)
    }

    /// Hold a button for one menu tick, then let go and wait past the debounce
    fn tap(game: &mut TestGame, time: &SimTime, button: Button) -> TickReport {
        game.peripherals_mut().buttons.hold(button);
        let report = game.tick();
        game.peripherals_mut().buttons.release_all();
        time.advance_millis(200);
        report
    }

    #[test]
    fn test_menu_screen() {
        let (mut game, time) = new_game(1);
        time.set_millis(1000);
        game.tick();

        let display = &game.peripherals().display;
        assert_eq!(
            display.last_texts(),
            ["Balance:", "500", "Bet:", "100", "Color:", "RED"]
        );
        let screen = display.last_screen();
        assert_eq!((screen[1].x, screen[1].y), (70, 0));
        assert_eq!((screen[3].x, screen[3].y), (30, 20));
        assert_eq!((screen[5].x, screen[5].y), (50, 40));
    }

    #[test]
    fn test_end_to_end_green_win() {
        let (mut game, time) = new_game(7);
        time.set_millis(1000);

        tap(&mut game, &time, Button::CycleColor);
        tap(&mut game, &time, Button::CycleColor);
        assert_eq!(game.state().selected, PocketColor::Green);

        tap(&mut game, &time, Button::IncreaseBet);
        assert_eq!(game.state().bet(), 200);

        let report = tap(&mut game, &time, Button::Confirm);
        assert!(matches!(report, TickReport::Menu(p) if p.contains(Button::Confirm)));
        assert_eq!(game.state().mode, Mode::Spinning);

        let plan = SpinPlan::new(6, 2);
        assert_eq!(color_of(2), PocketColor::Green);
        let round = game.play_round(plan);

        assert_eq!(round.outcome, Outcome::Win);
        assert_eq!(round.final_color, PocketColor::Green);
        assert_eq!(game.state().balance, 700);
        assert_eq!(game.state().mode, Mode::Menu);
        assert_eq!(
            game.peripherals().display.last_texts(),
            ["GREEN", "WIN +", "200"]
        );
    }

    #[test]
    fn test_spinning_tick_plays_a_full_round() {
        let (mut game, time) = new_game(99);
        time.set_millis(1000);
        tap(&mut game, &time, Button::Confirm);
        assert_eq!(game.state().mode, Mode::Spinning);

        let before = time.millis();
        let TickReport::Round(round) = game.tick() else {
            panic!("expected a round");
        };

        assert_eq!(round.final_color, color_of(round.plan.final_position));
        assert!((4..9).contains(&round.plan.rounds));
        let expected = match round.outcome {
            Outcome::Win => 600,
            Outcome::Lose => 400,
        };
        assert_eq!(round.balance, expected);
        assert_eq!(game.state().mode, Mode::Menu);
        // result dwell alone is three seconds
        assert!(time.millis() - before > 3000);

        let ring = &game.peripherals().ring.driver();
        assert_eq!(
            ring.lit(ring.frames.len() - 1),
            [round.plan.final_position]
        );
    }

    #[test]
    fn test_buttons_ignored_during_round() {
        let (mut game, time) = new_game(3);
        time.set_millis(1000);
        tap(&mut game, &time, Button::Confirm);

        for button in Button::ALL {
            game.peripherals_mut().buttons.hold(button);
        }
        let TickReport::Round(round) = game.tick() else {
            panic!("expected a round");
        };

        assert_eq!(round.bet, 100);
        assert_eq!(game.state().bet(), 100);
        assert_eq!(game.state().selected, PocketColor::Red);
        assert_eq!(game.state().mode, Mode::Menu);
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let plans = |seed| {
            let (mut game, time) = new_game(seed);
            time.set_millis(1000);
            (0..3)
                .map(|_| {
                    tap(&mut game, &time, Button::Confirm);
                    match game.tick() {
                        TickReport::Round(round) => round.plan,
                        TickReport::Menu(_) => panic!("expected a round"),
                    }
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(plans(1234), plans(1234));
    }
}
