//! Mappings of a piece's square to the squares it can capture on. The board is
//! assumed to be empty apart from the attacking piece: there is no blocking,
//! no check and no special moves, only the raw capture patterns.

use crate::chess::bitboard::Bitboard;
use crate::chess::core::{File, PieceKind, Square};

/// Every square sharing the rank or the file with the rook. A rook always
/// attacks exactly 14 squares on an empty board.
#[must_use]
pub fn rook_attacks(square: Square) -> Bitboard {
    (Bitboard::file_mask(square.file()) | Bitboard::rank_mask(square.rank()))
        - Bitboard::from(square)
}

/// Diagonal-forward squares of a white pawn. Pawns never capture straight
/// ahead and have nothing to capture from the eighth rank; the A and H files
/// leave a single capture.
#[must_use]
pub fn pawn_attacks(square: Square) -> Bitboard {
    let pawn = Bitboard::from(square);
    let up = pawn.shift_rank_up();
    ((up - Bitboard::file_mask(File::A)) >> 1) | ((up - Bitboard::file_mask(File::H)) << 1)
}

/// Squares the piece of given kind standing on `square` can capture on.
#[must_use]
pub fn moves_for(kind: PieceKind, square: Square) -> Bitboard {
    match kind {
        PieceKind::Pawn => pawn_attacks(square),
        PieceKind::Rook => rook_attacks(square),
    }
}
