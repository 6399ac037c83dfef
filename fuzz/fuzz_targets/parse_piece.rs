#![no_main]
use captures::chess::attacks::moves_for;
use captures::chess::core::{is_valid_coordinate, Piece};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(piece) = Piece::parse(s) {
            assert!(is_valid_coordinate(&piece.square.to_string()));
            assert!(!moves_for(piece.kind, piece.square).contains(piece.square));
        }
    }
});
