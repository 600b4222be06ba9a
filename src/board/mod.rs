//! Board: the shared track and its occupancy.
//!
//! The track is finite and linear: squares `0..=66` are occupiable, and
//! any position at or past [`FINISH_THRESHOLD`] counts as finished.
//! Finished tokens have no board presence. Each color enters at its own
//! exit square; the four exit squares are the safe squares, where capture
//! cannot occur.
//!
//! The board tracks *where tokens are*, nothing else. Token state lives
//! with the owning player; the board holds non-owning [`TokenRef`]s plus
//! the color needed for rival and barrier queries. It is mutated only
//! through [`Board::enter`], [`Board::advance`], and [`Board::remove`],
//! which keep the per-square lists and the reverse index consistent.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Color, TokenRef};

/// Number of squares on the shared track.
pub const TRACK_LEN: u8 = 68;

/// Positions at or past this threshold have finished the course.
pub const FINISH_THRESHOLD: u8 = 67;

/// Capture-immune squares: the four color exits.
pub const SAFE_SQUARES: [u8; 4] = [5, 22, 39, 56];

/// Whether a square suppresses capture.
#[must_use]
pub const fn is_safe_square(index: u8) -> bool {
    matches!(index, 5 | 22 | 39 | 56)
}

/// A token standing on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupant {
    pub token: TokenRef,
    pub color: Color,
}

/// One addressable square of the track.
#[derive(Clone, Debug)]
pub struct Square {
    index: u8,
    safe: bool,
    occupants: SmallVec<[Occupant; 4]>,
}

impl Square {
    fn new(index: u8) -> Self {
        Self {
            index,
            safe: is_safe_square(index),
            occupants: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn index(&self) -> u8 {
        self.index
    }

    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.safe
    }

    /// Tokens currently standing here, in arrival order.
    #[must_use]
    pub fn occupants(&self) -> &[Occupant] {
        &self.occupants
    }

    /// Two or more same-color occupants form a barrier. Returns the
    /// blocking color, if any.
    #[must_use]
    pub fn barrier_color(&self) -> Option<Color> {
        for occ in &self.occupants {
            let same = self
                .occupants
                .iter()
                .filter(|o| o.color == occ.color)
                .count();
            if same >= 2 {
                return Some(occ.color);
            }
        }
        None
    }
}

/// The full track. Squares materialize on first occupancy.
#[derive(Clone, Debug, Default)]
pub struct Board {
    /// Square index -> square, for squares that have ever been occupied.
    squares: FxHashMap<u8, Square>,

    /// Reverse index: token -> square it stands on.
    locations: FxHashMap<TokenRef, u8>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a token entering the track from home.
    ///
    /// # Panics
    ///
    /// Panics if the token is already on the board, or if `square` is not
    /// an occupiable track square.
    pub fn enter(&mut self, token: TokenRef, color: Color, square: u8) {
        assert!(
            square < FINISH_THRESHOLD,
            "{} cannot enter at {}, past the finish threshold",
            token,
            square
        );
        assert!(
            !self.locations.contains_key(&token),
            "{} is already on the board",
            token
        );
        self.locations.insert(token, square);
        self.square_mut(square).occupants.push(Occupant { token, color });
    }

    /// Move a token already on the board to `to`.
    ///
    /// Positions at or past the finish threshold have no square, so such
    /// a move clears the token's board presence; the finish transition
    /// itself is the rules layer's job. Returns the square left behind.
    ///
    /// # Panics
    ///
    /// Panics if the token is not on the board.
    pub fn advance(&mut self, token: TokenRef, to: u8) -> u8 {
        let from = self
            .locations
            .remove(&token)
            .unwrap_or_else(|| panic!("{} is not on the board", token));
        let occupant = self.take_occupant(token, from);

        if to < FINISH_THRESHOLD {
            self.locations.insert(token, to);
            self.square_mut(to).occupants.push(occupant);
        }
        from
    }

    /// Remove a token from the board (capture, penalty, finish).
    ///
    /// Returns the square it was removed from, or `None` if it had no
    /// board presence.
    pub fn remove(&mut self, token: TokenRef) -> Option<u8> {
        let square = self.locations.remove(&token)?;
        self.take_occupant(token, square);
        Some(square)
    }

    /// The square a token stands on, if any.
    #[must_use]
    pub fn position_of(&self, token: TokenRef) -> Option<u8> {
        self.locations.get(&token).copied()
    }

    /// The square at `index`, if it has ever been occupied.
    #[must_use]
    pub fn square(&self, index: u8) -> Option<&Square> {
        self.squares.get(&index)
    }

    /// Tokens standing on `index`, in arrival order.
    #[must_use]
    pub fn occupants(&self, index: u8) -> &[Occupant] {
        self.squares.get(&index).map_or(&[], |s| s.occupants())
    }

    /// Rival tokens (any color but `color`) standing on `index`.
    #[must_use]
    pub fn rivals_at(&self, index: u8, color: Color) -> SmallVec<[TokenRef; 4]> {
        self.occupants(index)
            .iter()
            .filter(|o| o.color != color)
            .map(|o| o.token)
            .collect()
    }

    /// Same-color tokens standing on `index`.
    #[must_use]
    pub fn same_color_at(&self, index: u8, color: Color) -> usize {
        self.occupants(index)
            .iter()
            .filter(|o| o.color == color)
            .count()
    }

    /// Whether `index` currently holds a barrier.
    #[must_use]
    pub fn is_barrier(&self, index: u8) -> bool {
        self.squares
            .get(&index)
            .and_then(Square::barrier_color)
            .is_some()
    }

    /// Total tokens on the board.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.locations.len()
    }

    /// Occupied squares, unordered.
    pub fn occupied_squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.values().filter(|s| !s.occupants.is_empty())
    }

    fn square_mut(&mut self, index: u8) -> &mut Square {
        self.squares
            .entry(index)
            .or_insert_with(|| Square::new(index))
    }

    fn take_occupant(&mut self, token: TokenRef, square: u8) -> Occupant {
        let sq = self
            .squares
            .get_mut(&square)
            .unwrap_or_else(|| panic!("square {} has no occupancy entry", square));
        let pos = sq
            .occupants
            .iter()
            .position(|o| o.token == token)
            .unwrap_or_else(|| panic!("{} missing from square {}", token, square));
        sq.occupants.remove(pos)
    }
}
