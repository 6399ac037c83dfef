//! Chess primitives and capture-only move generation on an empty board.

pub mod attacks;
pub mod bitboard;
pub mod core;
