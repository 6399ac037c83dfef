use captures::chess::attacks::{moves_for, pawn_attacks, rook_attacks};
use captures::chess::bitboard::Bitboard;
use captures::chess::core::{Piece, PieceKind, Square};
use itertools::Itertools;
use pretty_assertions::assert_eq;

fn to_shakmaty(square: Square) -> shakmaty::Square {
    shakmaty::Square::new(u32::from(square as u8))
}

fn sorted_squares(squares: &[&str]) -> Vec<String> {
    squares
        .iter()
        .map(|square| (*square).to_string())
        .sorted()
        .collect::<Vec<_>>()
}

fn get_moves(input: &str) -> Vec<String> {
    let piece = Piece::parse(input).unwrap_or_else(|| panic!("parsing valid piece: {input}"));
    moves_for(piece.kind, piece.square)
        .iter()
        .map(|square| square.to_string())
        .sorted()
        .collect::<Vec<_>>()
}

// Empty-board rook attacks are exactly the sliding attacks without blockers.
#[test]
fn rook_matches_shakmaty() {
    for square in Square::iter() {
        let expected = shakmaty::attacks::rook_attacks(to_shakmaty(square), shakmaty::Bitboard(0));
        assert_eq!(rook_attacks(square).bits(), expected.0, "{square}");
    }
}

#[test]
fn pawn_matches_shakmaty() {
    for square in Square::iter() {
        let expected = shakmaty::attacks::pawn_attacks(shakmaty::Color::White, to_shakmaty(square));
        assert_eq!(pawn_attacks(square).bits(), expected.0, "{square}");
    }
}

#[test]
fn rook_moves() {
    assert_eq!(
        get_moves("rook d4"),
        sorted_squares(&[
            "a4", "b4", "c4", "e4", "f4", "g4", "h4", "d1", "d2", "d3", "d5", "d6", "d7", "d8"
        ])
    );
    assert_eq!(
        get_moves("ROOK H8"),
        sorted_squares(&[
            "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h1", "h2", "h3", "h4", "h5", "h6", "h7"
        ])
    );
}

#[test]
fn pawn_moves() {
    assert_eq!(get_moves("pawn e4"), sorted_squares(&["d5", "f5"]));
    assert_eq!(get_moves("pawn a5"), sorted_squares(&["b6"]));
    assert_eq!(get_moves("pawn h2"), sorted_squares(&["g3"]));
    assert_eq!(get_moves("pawn c8"), sorted_squares(&[]));
}

#[test]
fn move_set_sizes() {
    let rook_total: u32 = Square::iter()
        .map(|square| moves_for(PieceKind::Rook, square).len())
        .sum();
    assert_eq!(rook_total, 64 * 14);
    // 6 inner files with 2 captures and 2 edge files with 1, on 7 ranks.
    let pawn_total: u32 = Square::iter()
        .map(|square| moves_for(PieceKind::Pawn, square).len())
        .sum();
    assert_eq!(pawn_total, 7 * (6 * 2 + 2));
}

#[test]
fn union_of_pawn_attacks() {
    let all: Bitboard = Square::iter().flat_map(pawn_attacks).collect();
    // Nothing can be captured by a white pawn on the first rank.
    assert_eq!(
        format!("{all:?}"),
        "1 1 1 1 1 1 1 1\n\
         1 1 1 1 1 1 1 1\n\
         1 1 1 1 1 1 1 1\n\
         1 1 1 1 1 1 1 1\n\
         1 1 1 1 1 1 1 1\n\
         1 1 1 1 1 1 1 1\n\
         1 1 1 1 1 1 1 1\n\
         . . . . . . . ."
    );
}
