//! # parchis
//!
//! Turn and rule-application engine for a console Parchís variant,
//! for 2-4 players.
//!
//! ## Design Principles
//!
//! 1. **Core only**: the crate owns the turn state machine and the
//!    rules. Rendering and prompting live in the driving shell, behind
//!    the [`events::Presenter`] and [`game::InputSource`] boundaries.
//!
//! 2. **Validated values in, events out**: the core never reads input or
//!    prints; it consumes validated rolls and selections and reports
//!    everything observable as [`events::MatchEvent`] values.
//!
//! 3. **Loud failures**: bad match configuration is a typed error;
//!    phase misuse and illegal token transitions are caller bugs and
//!    panic at the violation site.
//!
//! ## Modules
//!
//! - `core`: colors, tokens, players, dice, errors
//! - `board`: the shared track and its occupancy
//! - `rules`: pure rule predicates and post-move effects
//! - `events`: match events and the presenter boundary
//! - `game`: match setup, the turn state machine, input sources
//!
//! ## Example
//!
//! ```
//! use parchis::core::Color;
//! use parchis::events::NullPresenter;
//! use parchis::game::{MatchBuilder, RandomInput};
//!
//! let mut game = MatchBuilder::new()
//!     .player("Ana", Color::Yellow)
//!     .player("Luis", Color::Blue)
//!     .build()
//!     .unwrap();
//!
//! let mut input = RandomInput::new(42);
//! let mut presenter = NullPresenter;
//!
//! // The shell owns the loop and the turn cap.
//! for _ in 0..100 {
//!     if game.is_over() {
//!         break;
//!     }
//!     game.play_turn(&mut input, &mut presenter);
//! }
//! ```

pub mod board;
pub mod core;
pub mod events;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Color, DiceRng, DieRoll, Player, PlayerId, SetupError, Token, TokenId, TokenRef, TokenStatus,
};

pub use crate::board::{Board, Occupant, Square, FINISH_THRESHOLD, SAFE_SQUARES, TRACK_LEN};

pub use crate::events::{EventLog, MatchEvent, NullPresenter, Presenter};

pub use crate::game::{
    InputSource, Match, MatchBuilder, RandomInput, ScriptedInput, TurnOutcome, TurnPhase,
    TurnRecord,
};
