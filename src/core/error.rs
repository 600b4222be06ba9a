//! Setup errors.
//!
//! Only match configuration is recoverable; everything else that can go
//! wrong mid-match (phase misuse, moving a finished token, out-of-range
//! selection) is a caller bug and panics at the violation site.

use thiserror::Error;

use super::color::Color;

/// Reasons a match refuses to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A match needs between 2 and 4 players.
    #[error("a match needs 2 to 4 players, got {0}")]
    PlayerCount(usize),

    /// Each player needs a distinct color.
    #[error("color {0} is already taken")]
    DuplicateColor(Color),
}
