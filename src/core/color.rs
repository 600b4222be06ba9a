//! Seat colors and their track geometry.
//!
//! A match assigns each player a distinct color from a fixed set of four.
//! Each color enters the shared track at its own exit square; the exit
//! squares double as the track's safe squares.

use serde::{Deserialize, Serialize};

/// Seat color. Unique per player within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Yellow,
    Blue,
    Red,
    Green,
}

impl Color {
    /// All colors, in seat order.
    pub const ALL: [Color; 4] = [Color::Yellow, Color::Blue, Color::Red, Color::Green];

    /// The square where this color's tokens enter the shared track.
    ///
    /// ```
    /// use parchis::core::Color;
    ///
    /// assert_eq!(Color::Yellow.exit_square(), 5);
    /// assert_eq!(Color::Green.exit_square(), 56);
    /// ```
    #[must_use]
    pub const fn exit_square(self) -> u8 {
        match self {
            Color::Yellow => 5,
            Color::Blue => 22,
            Color::Red => 39,
            Color::Green => 56,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Yellow => "Yellow",
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Green => "Green",
        };
        write!(f, "{}", name)
    }
}
