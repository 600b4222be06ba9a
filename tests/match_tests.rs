//! Match integration tests.
//!
//! These drive full turn cycles through the public API with scripted
//! dice, the way a console shell would.

use parchis::core::{Color, PlayerId, TokenRef};
use parchis::events::{EventLog, MatchEvent, NullPresenter};
use parchis::game::{Match, MatchBuilder, ScriptedInput, TurnOutcome};

fn two_players() -> Match {
    MatchBuilder::new()
        .player("Ana", Color::Yellow)
        .player("Luis", Color::Blue)
        .build()
        .unwrap()
}

fn token_ref(game: &Match, player: u8, slot: usize) -> TokenRef {
    let id = PlayerId::new(player);
    TokenRef::new(id, game.player(id).tokens()[slot].id())
}

/// Drive `n` turn cycles with the given input, collecting events.
fn drive(game: &mut Match, input: &mut ScriptedInput, n: usize) -> EventLog {
    let mut log = EventLog::new();
    for _ in 0..n {
        game.play_turn(input, &mut log);
    }
    log
}

#[test]
fn exit_on_five_lands_on_each_colors_offset() {
    let mut game = MatchBuilder::new()
        .player("P0", Color::Yellow)
        .player("P1", Color::Blue)
        .player("P2", Color::Red)
        .player("P3", Color::Green)
        .build()
        .unwrap();

    // Every player rolls a five and exits their first token.
    let mut input = ScriptedInput::new([5, 5, 5, 5]);
    drive(&mut game, &mut input, 4);

    let expected = [(0u8, 5u8), (1, 22), (2, 39), (3, 56)];
    for (player, square) in expected {
        let token = &game.player(PlayerId::new(player)).tokens()[0];
        assert_eq!(token.position(), Some(square));
        assert_eq!(
            game.board().position_of(token_ref(&game, player, 0)),
            Some(square)
        );
    }
}

#[test]
fn non_five_with_all_home_loses_the_turn() {
    let mut game = two_players();
    let mut input = ScriptedInput::new([3]);
    let log = drive(&mut game, &mut input, 1);

    assert!(log.any(|e| matches!(e, MatchEvent::NoEligibleTokens { .. })));
    assert_eq!(game.active_player(), PlayerId::new(1));
    assert_eq!(game.player(PlayerId::new(0)).at_home_count(), 4);
}

#[test]
fn advance_moves_by_the_rolled_value() {
    let mut game = two_players();
    // Exit at 5, pass, then advance 3.
    let mut input = ScriptedInput::new([5, 1, 3]);
    drive(&mut game, &mut input, 3);

    let token = &game.player(PlayerId::new(0)).tokens()[0];
    assert_eq!(token.position(), Some(8));
}

#[test]
fn landing_on_a_rival_captures_it() {
    let mut game = two_players();
    // Yellow exits at 5 and works its way to 24; Blue exits at 22 and
    // steps to 24 first. Yellow's final 4 lands on Blue's square.
    let mut input = ScriptedInput::new([5, 5, 6, 6, 3, 2, 4]);
    let log = drive(&mut game, &mut input, 7);

    let yellow = token_ref(&game, 0, 0);
    let blue = token_ref(&game, 1, 0);

    assert!(log.any(|e| {
        *e == MatchEvent::TokenCaptured {
            captured: blue,
            by: yellow,
        }
    }));
    assert!(game.player(PlayerId::new(1)).tokens()[0].is_at_home());
    assert_eq!(game.player(PlayerId::new(0)).tokens()[0].position(), Some(24));
    assert_eq!(game.board().position_of(blue), None);
}

#[test]
fn safe_square_suppresses_capture() {
    let mut game = two_players();
    // Blue sits on its own exit square 22, which is safe. Yellow lands
    // on 22 as well: both stay.
    let mut input = ScriptedInput::new([5, 5, 6, 6, 5]);
    let log = drive(&mut game, &mut input, 5);

    assert!(!log.any(|e| matches!(e, MatchEvent::TokenCaptured { .. })));
    assert_eq!(game.player(PlayerId::new(0)).tokens()[0].position(), Some(22));
    assert_eq!(game.player(PlayerId::new(1)).tokens()[0].position(), Some(22));
    assert_eq!(game.board().occupants(22).len(), 2);
}

#[test]
fn two_same_color_tokens_form_a_barrier() {
    let mut game = two_players();
    // Yellow exits twice onto square 5: second exit picks the first
    // token still at home (index 1 of the eligible set).
    let mut input = ScriptedInput::new([5, 1, 5]).with_selections([0, 1]);
    let log = drive(&mut game, &mut input, 3);

    assert!(log.any(|e| {
        *e == MatchEvent::BarrierFormed {
            square: 5,
            color: Color::Yellow,
        }
    }));
    assert!(game.board().is_barrier(5));
}

#[test]
fn reaching_the_threshold_finishes_the_token() {
    let mut game = MatchBuilder::new()
        .player("Ana", Color::Yellow)
        .player("Bea", Color::Green)
        .build()
        .unwrap();

    // Green exits at 56, advances 6 to 62 (extra turn), then 5 to 67.
    let mut input = ScriptedInput::new([1, 5, 1, 6, 5]);
    let log = drive(&mut game, &mut input, 5);

    let green = token_ref(&game, 1, 0);
    assert!(log.any(|e| *e == MatchEvent::TokenFinished { token: green }));
    assert!(game.player(PlayerId::new(1)).tokens()[0].is_finished());
    assert_eq!(game.board().position_of(green), None);
    assert_eq!(game.standings(), vec![(PlayerId::new(0), 0), (PlayerId::new(1), 1)]);
}

#[test]
fn a_six_grants_one_extra_turn() {
    let mut game = two_players();
    let mut input = ScriptedInput::new([6]);

    let outcome = game.play_turn(&mut input, &mut NullPresenter);

    assert_eq!(outcome, TurnOutcome::ExtraTurn);
    assert_eq!(game.active_player(), PlayerId::new(0));
    assert_eq!(game.six_streak(), 1);
}

#[test]
fn six_streak_resets_when_the_turn_passes() {
    let mut game = two_players();
    // Two sixes for player 0, then a 3 passes the turn; player 1's six
    // starts a fresh streak.
    let mut input = ScriptedInput::new([6, 6, 3, 6]);
    let log = drive(&mut game, &mut input, 4);

    assert!(!log.any(|e| matches!(e, MatchEvent::TripleSixPenalty { .. })));
    assert_eq!(game.active_player(), PlayerId::new(1));
    assert_eq!(game.six_streak(), 1);
}

#[test]
fn triple_six_sends_the_last_moved_token_home() {
    let mut game = two_players();
    // Roll sequence [5, 3, 6, 6, 6] for player 0, padded with
    // no-eligible rolls for player 1: exit on the 5, advance 3, then
    // three sixes. The token moved on the third six goes home even
    // though each six also granted an extra turn.
    let mut input = ScriptedInput::new([5, 1, 3, 1, 6, 6, 6]);

    let mut log = EventLog::new();
    let mut last = TurnOutcome::TurnPassed;
    for _ in 0..7 {
        last = game.play_turn(&mut input, &mut log);
    }

    let yellow = token_ref(&game, 0, 0);
    assert_eq!(last, TurnOutcome::PenaltyApplied);
    assert!(log.any(|e| {
        *e == MatchEvent::TripleSixPenalty {
            returned: Some(yellow),
        }
    }));
    assert!(game.player(PlayerId::new(0)).tokens()[0].is_at_home());
    assert_eq!(game.board().position_of(yellow), None);
    assert_eq!(game.six_streak(), 0);
    assert_eq!(game.active_player(), PlayerId::new(1));
    assert_eq!(game.last_moved(), None);
}

#[test]
fn triple_six_with_nothing_moved_still_passes_the_turn() {
    let mut game = two_players();
    // All tokens at home: three unusable sixes in a row.
    let mut input = ScriptedInput::new([6, 6, 6]);

    let mut log = EventLog::new();
    let mut last = TurnOutcome::TurnPassed;
    for _ in 0..3 {
        last = game.play_turn(&mut input, &mut log);
    }

    assert_eq!(last, TurnOutcome::PenaltyApplied);
    assert!(log.any(|e| *e == MatchEvent::TripleSixPenalty { returned: None }));
    assert_eq!(game.active_player(), PlayerId::new(1));
    assert_eq!(game.six_streak(), 0);
}

#[test]
fn finishing_all_four_tokens_wins_the_match() {
    let mut game = MatchBuilder::new()
        .player("Ana", Color::Yellow)
        .player("Bea", Color::Green)
        .build()
        .unwrap();

    // Yellow never rolls a five; Green walks each token through
    // exit (5), +6 with the extra turn, +5 to finish.
    let mut rolls = vec![1u8];
    for _ in 0..4 {
        rolls.extend([5, 1, 6, 5, 1]);
    }
    let mut input = ScriptedInput::new(rolls);

    let mut log = EventLog::new();
    let mut outcome = TurnOutcome::TurnPassed;
    while !game.is_over() {
        outcome = game.play_turn(&mut input, &mut log);
    }

    let winner = PlayerId::new(1);
    assert_eq!(outcome, TurnOutcome::MatchWon(winner));
    assert_eq!(game.winner(), Some(winner));
    assert!(log.any(|e| *e == MatchEvent::MatchWon { player: winner }));
    assert_eq!(game.standings(), vec![(PlayerId::new(0), 0), (winner, 4)]);
    assert!(game.player(winner).has_won());
}

#[test]
#[should_panic(expected = "the match is already won")]
fn no_turns_after_the_match_is_won() {
    let mut game = MatchBuilder::new()
        .player("Ana", Color::Yellow)
        .player("Bea", Color::Green)
        .build()
        .unwrap();

    let mut rolls = vec![1u8];
    for _ in 0..4 {
        rolls.extend([5, 1, 6, 5, 1]);
    }
    // One extra roll for the turn attempted after the win.
    rolls.push(1);
    let mut input = ScriptedInput::new(rolls);

    while !game.is_over() {
        game.play_turn(&mut input, &mut NullPresenter);
    }
    game.play_turn(&mut input, &mut NullPresenter);
}

#[test]
fn shell_can_step_the_phases_itself() {
    let mut game = two_players();
    let mut log = EventLog::new();

    game.start_turn(&mut log);
    let roll = parchis::core::DieRoll::new(5);
    let eligible = game.resolve_roll(roll, &mut log);
    assert_eq!(eligible.len(), 4);
    game.select_and_move(0, roll, &mut log);
    let outcome = game.resolve_turn_outcome(roll, &mut log);

    assert_eq!(outcome, TurnOutcome::TurnPassed);
    let kinds: Vec<&MatchEvent> = log.events().iter().collect();
    assert!(matches!(kinds[0], MatchEvent::TurnStarted { .. }));
    assert!(matches!(kinds[1], MatchEvent::RollResult { .. }));
    assert!(matches!(kinds[2], MatchEvent::TokenExitedHome { .. }));
    assert!(matches!(kinds[3], MatchEvent::TurnAdvanced { .. }));
}

#[test]
fn history_replays_the_console_transcript() {
    let mut game = two_players();
    let mut input = ScriptedInput::new([5, 2, 6, 3]);
    drive(&mut game, &mut input, 4);

    let history = game.history();
    assert_eq!(history.len(), 4);

    // Turn 1: Ana exits. Turn 2: Luis has nothing. Turn 3: Ana's six
    // grants an extra turn. Turn 4: Ana moves again and passes.
    assert_eq!(history[0].player, PlayerId::new(0));
    assert_eq!(history[0].outcome, TurnOutcome::TurnPassed);
    assert_eq!(history[1].player, PlayerId::new(1));
    assert_eq!(history[1].moved, None);
    assert_eq!(history[2].outcome, TurnOutcome::ExtraTurn);
    assert_eq!(history[3].player, PlayerId::new(0));
    assert_eq!(history[3].outcome, TurnOutcome::TurnPassed);
}
