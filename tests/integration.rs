use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "captures";

#[test]
fn rook_captures() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("rook d4\npawn d8\npawn h4\npawn a1\ndone\n")
            .assert()
            .success()
            .stdout(
                contains("White piece added: rook at d4")
                    .and(contains("The white piece can take these black pieces:\npawn at d8\npawn at h4\n"))
                    .and(contains("\npawn at a1\n").not()),
            ),
    );
}

#[test]
fn pawn_captures() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("pawn e4\nrook d5\nrook f5\nrook e5\ndone\n")
            .assert()
            .success()
            .stdout(contains(
                "The white piece can take these black pieces:\nrook at d5\nrook at f5\n",
            )),
    );
}

#[test]
fn nothing_to_capture() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("pawn a8\nrook b8\ndone\n")
            .assert()
            .success()
            .stdout(contains("The white piece cannot take any black pieces.")),
    );
}

#[test]
fn invalid_input() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("knight b1\nrook a1\ndone\nrook a1 extra\npawn b2\ndone\n")
            .assert()
            .success()
            .stdout(
                contains("Your input is Invalid. Enter a valid piece and position.")
                    .and(contains(
                        "There must be at least one black piece added before finishing.",
                    ))
                    .and(contains("The white piece cannot take any black pieces.")),
            ),
    );
}

#[test]
fn premature_end_of_input() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("rook a1\n")
            .assert()
            .failure()
            .stderr(contains("input ended before any black piece was entered")),
    );
}

#[test]
fn verbose_banner() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.arg("--verbose");

    drop(
        cmd.write_stdin("rook a1\nrook a8\ndone\n")
            .assert()
            .success()
            .stdout(
                contains("Captures")
                    .and(contains(concat!("<", env!("CARGO_PKG_REPOSITORY"), ">")))
                    .and(contains("Release build:"))
                    .and(contains("info string rook at a1 can capture on:")),
            ),
    );
}

#[test]
fn defender_limit() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.args(["--max-defenders", "1"]);

    drop(
        cmd.write_stdin("rook a1\nrook a8\n")
            .assert()
            .success()
            .stdout(contains("The white piece can take these black pieces:\nrook at a8\n")),
    );
}
