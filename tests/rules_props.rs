//! Property tests for the pure rule predicates and token operations.
//!
//! These exercise the rules in isolation, without a full match, plus a
//! couple of driven checks where eligibility depends on match state.

use proptest::prelude::*;

use parchis::board::FINISH_THRESHOLD;
use parchis::core::{Color, DieRoll, PlayerId, Token, TokenId};
use parchis::events::NullPresenter;
use parchis::game::{MatchBuilder, ScriptedInput};
use parchis::rules;

fn any_color() -> impl Strategy<Value = Color> {
    (0usize..4).prop_map(|i| Color::ALL[i])
}

proptest! {
    #[test]
    fn only_a_five_exits_home(roll in 1u8..=6) {
        prop_assert_eq!(rules::can_exit_with_five(DieRoll::new(roll)), roll == 5);
    }

    #[test]
    fn only_a_six_grants_an_extra_turn(roll in 1u8..=6) {
        prop_assert_eq!(rules::grants_extra_turn(DieRoll::new(roll)), roll == 6);
    }

    #[test]
    fn penalty_exactly_from_three_sixes(streak in 0u8..=10) {
        prop_assert_eq!(rules::is_triple_six_penalty(streak), streak >= 3);
    }

    #[test]
    fn finish_exactly_at_or_past_the_threshold(position in 0u8..=120) {
        prop_assert_eq!(rules::reaches_finish(position), position >= FINISH_THRESHOLD);
    }

    #[test]
    fn exit_lands_on_the_colors_offset(color in any_color()) {
        let mut token = Token::new(TokenId::for_slot(PlayerId::new(0), 0), color);
        token.exit_home(color.exit_square());
        prop_assert_eq!(token.position(), Some(color.exit_square()));
    }

    #[test]
    fn advance_adds_exactly_the_rolled_steps(start in 0u8..=60, steps in 1u8..=6) {
        let mut token = Token::new(TokenId::for_slot(PlayerId::new(0), 0), Color::Yellow);
        token.exit_home(start);
        token.advance(steps);
        prop_assert_eq!(token.position(), Some(start + steps));
    }

    #[test]
    fn tokens_at_home_need_a_five(roll in 1u8..=6) {
        prop_assume!(roll != 5);

        let game = MatchBuilder::new()
            .player("Ana", Color::Yellow)
            .player("Luis", Color::Blue)
            .build()
            .unwrap();

        // Fresh match: everything is at home.
        let eligible =
            rules::eligible_tokens(game.player(PlayerId::new(0)), DieRoll::new(roll));
        prop_assert!(eligible.is_empty());
    }
}

#[test]
fn finished_tokens_are_never_eligible() {
    let mut game = MatchBuilder::new()
        .player("Ana", Color::Yellow)
        .player("Bea", Color::Green)
        .build()
        .unwrap();

    // Walk Green's first token to the finish.
    let mut input = ScriptedInput::new([1, 5, 1, 6, 5]);
    for _ in 0..5 {
        game.play_turn(&mut input, &mut NullPresenter);
    }

    let green = game.player(PlayerId::new(1));
    let finished = green.tokens()[0].id();
    assert!(green.tokens()[0].is_finished());

    for roll in 1..=6u8 {
        let eligible = rules::eligible_tokens(green, DieRoll::new(roll));
        assert!(!eligible.contains(&finished));
    }
}
