//! The attacker/defender model: a bounded, insertion-ordered collection of
//! black pieces and the query for the ones a white piece can capture.

use std::fmt;

use arrayvec::ArrayVec;

use crate::chess::attacks::moves_for;
use crate::chess::core::{Piece, Square};

/// Black can not have more than 16 pieces on the board.
pub const MAX_DEFENDERS: usize = 16;

/// Decides when a new defender clashes with an already collected one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Only the identical piece on the identical square is a duplicate. A
    /// pawn and a rook can share a square.
    #[default]
    SamePiece,
    /// Any piece on an already occupied square is a duplicate.
    SameSquare,
}

/// Reason for [`Defenders::insert`] to refuse a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The square is already taken, see [`DuplicatePolicy`].
    Duplicate(Square),
    /// The collection has reached its limit.
    Full,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate(square) => write!(f, "The black piece at {square} is already added."),
            Self::Full => write!(f, "No more black pieces can be added."),
        }
    }
}

impl std::error::Error for Rejection {}

/// Black pieces in the order they were entered. The collection only grows.
#[derive(Clone, Debug)]
pub struct Defenders {
    pieces: ArrayVec<Piece, MAX_DEFENDERS>,
    limit: usize,
    policy: DuplicatePolicy,
}

impl Defenders {
    /// Creates an empty collection holding at most `limit` pieces. The limit
    /// is clamped to `1..=MAX_DEFENDERS`.
    #[must_use]
    pub fn new(limit: usize, policy: DuplicatePolicy) -> Self {
        Self {
            pieces: ArrayVec::new(),
            limit: limit.clamp(1, MAX_DEFENDERS),
            policy,
        }
    }

    /// Appends the piece unless it is a duplicate or there is no room left.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] reason; the collection is left unchanged.
    pub fn insert(&mut self, piece: Piece) -> Result<(), Rejection> {
        if self.is_full() {
            return Err(Rejection::Full);
        }
        let clashes = |other: &Piece| match self.policy {
            DuplicatePolicy::SamePiece => *other == piece,
            DuplicatePolicy::SameSquare => other.square == piece.square,
        };
        if self.pieces.iter().any(clashes) {
            return Err(Rejection::Duplicate(piece.square));
        }
        self.pieces
            .try_push(piece)
            .map_err(|_| Rejection::Full)
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.pieces.len() >= self.limit
    }

    /// Iterates over the pieces in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }
}

impl Default for Defenders {
    fn default() -> Self {
        Self::new(MAX_DEFENDERS, DuplicatePolicy::default())
    }
}

/// Returns the defenders standing on the squares the attacker can capture on,
/// keeping the order in which they were entered.
#[must_use]
pub fn capturable(attacker: Piece, defenders: &Defenders) -> Vec<Piece> {
    let targets = moves_for(attacker.kind, attacker.square);
    defenders
        .iter()
        .filter(|defender| targets.contains(defender.square))
        .copied()
        .collect()
}
