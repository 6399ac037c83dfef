//! Chess primitives commonly used within [`crate::chess`]: squares, pieces and
//! the parser turning user input into them.

use std::fmt::{self, Write};
use std::mem;

use anyhow::bail;
use itertools::{iproduct, Itertools};

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Board squares: from left to right, from bottom to the top:
///
/// ```
/// use captures::chess::core::Square;
///
/// assert_eq!(Square::A1 as u8, 0);
/// assert_eq!(Square::E1 as u8, 4);
/// assert_eq!(Square::H1 as u8, 7);
/// assert_eq!(Square::A4 as u8, 8 * 3);
/// assert_eq!(Square::H8 as u8, 63);
/// ```
///
/// Square is a compact representation using only one byte.
///
/// ```
/// use captures::chess::core::Square;
///
/// assert_eq!(std::mem::size_of::<Square>(), 1);
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        unsafe { mem::transmute(file as u8 + (rank as u8) * BOARD_WIDTH) }
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        unsafe { mem::transmute(self as u8 % BOARD_WIDTH) }
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        unsafe { mem::transmute(self as u8 / BOARD_WIDTH) }
    }

    /// Iterates over all squares of the board, rank by rank, starting from A1
    /// and ending with H8.
    pub fn iter() -> impl Iterator<Item = Self> {
        iproduct!(Rank::ALL, File::ALL).map(|(rank, file)| Self::new(file, rank))
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses a square in algebraic notation. Only lowercase files are
    /// accepted: "e4" is a square, "E4" is not.
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let Some((file, rank)) = square.chars().collect_tuple() else {
            bail!(
                "square should be two-char, got '{square}' with {} chars",
                square.chars().count()
            );
        };
        Ok(Self::new(file.try_into()?, rank.try_into()?))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Checks whether the token is a square in algebraic notation: exactly two
/// characters, a file within `a..=h` followed by a rank within `1..=8`.
///
/// ```
/// use captures::chess::core::is_valid_coordinate;
///
/// assert!(is_valid_coordinate("e4"));
/// assert!(!is_valid_coordinate("E4"));
/// assert!(!is_valid_coordinate("e9"));
/// assert!(!is_valid_coordinate("e44"));
/// ```
#[must_use]
pub fn is_valid_coordinate(token: &str) -> bool {
    Square::try_from(token).is_ok()
}

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files from the queenside (A) to the kingside (H).
    pub const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + *self as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;

    fn try_from(file: char) -> anyhow::Result<Self> {
        match file {
            'a'..='h' => Ok(unsafe { mem::transmute::<u8, Self>(file as u8 - b'a') }),
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        }
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    /// All ranks from White's backrank to Black's.
    pub const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
    ];
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: char) -> anyhow::Result<Self> {
        match rank {
            '1'..='8' => Ok(unsafe { mem::transmute::<u8, Self>(rank as u8 - b'1') }),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// Pieces supported by the capture finder. Adding a new kind means adding a
/// variant here and its attack pattern in [`crate::chess::attacks`].
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
}

impl TryFrom<&str> for PieceKind {
    type Error = anyhow::Error;

    /// Matches the piece name case-insensitively.
    fn try_from(kind: &str) -> anyhow::Result<Self> {
        match kind.to_lowercase().as_str() {
            "pawn" => Ok(Self::Pawn),
            "rook" => Ok(Self::Rook),
            _ => bail!("piece should be 'pawn' or 'rook', got '{kind}'"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match &self {
            Self::Pawn => "pawn",
            Self::Rook => "rook",
        })
    }
}

/// A piece standing on a specific square. The owner is implied by the role
/// the piece plays: there is one white attacker and a number of black
/// defenders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub kind: PieceKind,
    #[allow(missing_docs)]
    pub square: Square,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(kind: PieceKind, square: Square) -> Self {
        Self { kind, square }
    }

    /// Parses user input in `<piece> <square>` format, e.g. "pawn a5".
    /// Returns [`None`] for anything else, see [`Piece::try_from`] for the
    /// reason of the rejection.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        Self::try_from(input).ok()
    }
}

impl TryFrom<&str> for Piece {
    type Error = anyhow::Error;

    /// Parses user input in `<piece> <square>` format.
    ///
    /// Both tokens are case-insensitive: "ROOK A1" is the same as "rook a1".
    /// The square is lowercased before it is validated.
    ///
    /// # Errors
    ///
    /// If the input does not consist of exactly two whitespace-separated
    /// tokens, the piece is neither a pawn nor a rook or the square is not
    /// within the board.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        let Some((kind, square)) = input.split_whitespace().collect_tuple() else {
            bail!(
                "expected '<piece> <square>', got {} tokens in '{}'",
                input.split_whitespace().count(),
                input.trim()
            );
        };
        Ok(Self::new(
            PieceKind::try_from(kind)?,
            Square::try_from(square.to_lowercase().as_str())?,
        ))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.square)
    }
}
