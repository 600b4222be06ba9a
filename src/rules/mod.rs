//! Rule predicates and post-move effect application.
//!
//! Every rule is a pure function over explicit inputs: the turn state
//! machine in `game` owns no rule knowledge, it only asks. The
//! predicates are deliberately tiny so each can be tested in isolation
//! without constructing a match.
//!
//! Rule summary:
//! - A five lets a token leave home; it enters at its color's exit square.
//! - A token on the track advances by the rolled value, any roll.
//! - A six grants the same player an extra turn; three consecutive sixes
//!   send the last moved token home instead.
//! - Landing on a non-safe square captures every rival token there.
//! - Two same-color tokens sharing a square form a barrier.
//! - Reaching position 67 or beyond finishes the token.

use smallvec::SmallVec;

use crate::board::{is_safe_square, Board, FINISH_THRESHOLD};
use crate::core::{DieRoll, Player, PlayerId, Token, TokenId, TokenRef};
use crate::events::MatchEvent;

/// Only a five brings a token out of home.
#[must_use]
pub fn can_exit_with_five(roll: DieRoll) -> bool {
    roll.is_five()
}

/// A six grants the same player another turn.
#[must_use]
pub fn grants_extra_turn(roll: DieRoll) -> bool {
    roll.is_six()
}

/// Three consecutive sixes trigger the penalty.
#[must_use]
pub fn is_triple_six_penalty(six_streak: u8) -> bool {
    six_streak >= 3
}

/// Whether a track position has reached the finish.
#[must_use]
pub fn reaches_finish(position: u8) -> bool {
    position >= FINISH_THRESHOLD
}

/// Whether a token is done, either already transitioned or standing at
/// or past the finish threshold.
#[must_use]
pub fn is_finished(token: &Token) -> bool {
    token.is_finished() || token.position().is_some_and(reaches_finish)
}

/// Tokens the player may move with this roll, in slot order.
///
/// A token at home is eligible only on a five; a token in transit is
/// eligible on any roll; a finished token never is.
#[must_use]
pub fn eligible_tokens(player: &Player, roll: DieRoll) -> SmallVec<[TokenId; 4]> {
    player
        .tokens()
        .iter()
        .filter(|t| t.is_in_transit() || (t.is_at_home() && can_exit_with_five(roll)))
        .map(Token::id)
        .collect()
}

/// Apply the consequences of a just-applied move: captures, barrier
/// signal, finish transition. Reads the occupancy the move produced, so
/// a token that just exited home is evaluated at its entry square like
/// any other arrival.
///
/// Events are appended in rule order: one `TokenCaptured` per rival
/// removed, then `BarrierFormed` if the square now holds two or more
/// of the mover's color, then `TokenFinished`. A safe square suppresses
/// capture but not barrier formation. Re-applying to a token that has
/// already finished is a no-op.
pub fn apply_post_move_effects(
    mover: PlayerId,
    token_id: TokenId,
    players: &mut [Player],
    board: &mut Board,
    events: &mut Vec<MatchEvent>,
) {
    let token = players[mover.index()].token(token_id);
    if token.is_finished() {
        return;
    }
    let color = token.color();
    let position = token
        .position()
        .expect("post-move effects on a token with no position");
    let token_ref = TokenRef::new(mover, token_id);

    // Captures first: every rival sharing a non-safe square goes home.
    if !is_safe_square(position) {
        for rival in board.rivals_at(position, color) {
            board.remove(rival);
            players[rival.player.index()]
                .token_mut(rival.token)
                .return_home();
            events.push(MatchEvent::TokenCaptured {
                captured: rival,
                by: token_ref,
            });
        }
    }

    // Barrier: two of the mover's color on one square block rivals.
    if board.same_color_at(position, color) >= 2 {
        events.push(MatchEvent::BarrierFormed {
            square: position,
            color,
        });
    }

    // Finish: at or past the threshold the token leaves the board.
    if reaches_finish(position) {
        board.remove(token_ref);
        players[mover.index()].token_mut(token_id).arrive_finish();
        events.push(MatchEvent::TokenFinished { token: token_ref });
    }
}
