//! Finds which black pieces a single white piece can capture. Only pawns and
//! rooks are supported and the captures are computed on an otherwise empty
//! board: a rook "sees" its whole rank and file, a pawn captures diagonally
//! towards the eighth rank.
//!
//! The crate is split into the pure move generation ([`chess`]), the
//! attacker/defender model ([`capture`]) and a line-oriented interactive
//! [`Session`] that drives both from any input stream.

pub mod capture;
pub mod chess;

mod session;
pub use session::{Config, Session};
use shadow_rs::shadow;

shadow!(build);

/// Target triple and build profile. Produced by `build.rs`.
const TARGET: &str = include_str!(concat!(env!("OUT_DIR"), "/target"));

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints the version and the repository declared in the manifest on
/// startup.
pub fn print_version_info() {
    println!("Captures {}", version());
    println!("<{}>", env!("CARGO_PKG_REPOSITORY"));
}

/// Prints information about the build type, target and whether the build is
/// clean on startup.
pub fn print_binary_info() {
    println!("Release build: {}", !shadow_rs::is_debug());
    println!("Target: {TARGET}");
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
    println!();
}
