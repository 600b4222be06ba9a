//! Match orchestration: setup, the turn state machine, and the input
//! boundary.

pub mod builder;
pub mod input;
pub mod turn;

pub use builder::MatchBuilder;
pub use input::{InputSource, RandomInput, ScriptedInput};
pub use turn::{Match, TurnOutcome, TurnPhase, TurnRecord};
