//! Command-line tests for the nogo binary: argument checks, exit codes and a
//! complete computer game on stdout.

use std::io::Write;
use std::process::{Command, Output, Stdio};

// =============================================================================
// Helper functions
// =============================================================================

fn nogo(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_nogo"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // The process may exit before reading its input.
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

// =============================================================================
// Argument errors
// =============================================================================

#[test]
fn test_wrong_argument_count() {
    for args in [&["h", "c"][..], &["h", "c", "4", "4", "4"], &[]] {
        let out = nogo(args, "");
        assert_eq!(out.status.code(), Some(1), "{args:?}");
        assert_eq!(stderr(&out), "Usage: nogo p1type p2type [height width | filename]\n");
    }
}

#[test]
fn test_invalid_player_type() {
    for args in [["x", "c", "4", "4"], ["h", "cc", "4", "4"], ["H", "c", "4", "4"]] {
        let out = nogo(&args, "");
        assert_eq!(out.status.code(), Some(2), "{args:?}");
        assert_eq!(stderr(&out), "Invalid player type\n");
    }
}

#[test]
fn test_invalid_dimension() {
    for args in [["h", "c", "3", "4"], ["h", "c", "4", "1001"], ["h", "c", "four", "4"]] {
        let out = nogo(&args, "");
        assert_eq!(out.status.code(), Some(3), "{args:?}");
        assert_eq!(stderr(&out), "Invalid board dimension\n");
    }
}

#[test]
fn test_player_type_checked_before_dimension() {
    let out = nogo(&["q", "c", "2", "2"], "");
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_hyphenated_arguments_are_validated_in_order() {
    let cases: [(&[&str], i32); 7] = [
        (&["-x", "c", "4", "4"], 2),
        (&["-h", "c", "4", "4"], 2),
        (&["h", "-c", "4", "4"], 2),
        (&["-1", "c", "4", "4"], 2),
        (&["h", "c", "--", "4"], 3),
        (&["h", "c", "4", "-4"], 3),
        (&["-h", "c"], 1),
    ];
    for (args, code) in cases {
        let out = nogo(args, "");
        assert_eq!(out.status.code(), Some(code), "{args:?}");
    }
}

#[test]
fn test_long_help_flag() {
    let out = nogo(&["--help"], "");
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("nogo p1type p2type [height width | filename]"));
}

#[test]
fn test_missing_save_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-game");
    let out = nogo(&["c", "c", path.to_str().unwrap()], "");
    assert_eq!(out.status.code(), Some(4));
    assert_eq!(stderr(&out), "Unable to open file\n");
}

#[test]
fn test_malformed_save_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad");
    for contents in [
        "4 4 0 1 0 0 2 2 0\n....\n....\n",
        "4 4 0 1 0 0 2 2 0 \n....\n....\n....\n....\n",
    ] {
        std::fs::write(&path, contents).unwrap();
        let out = nogo(&["c", "c", path.to_str().unwrap()], "");
        assert_eq!(out.status.code(), Some(5), "{contents:?}");
        assert_eq!(stderr(&out), "Incorrect file contents\n");
    }
}

// =============================================================================
// Play
// =============================================================================

#[test]
fn test_end_of_input() {
    let out = nogo(&["h", "h", "4", "4"], "");
    assert_eq!(out.status.code(), Some(6));
    assert_eq!(stderr(&out), "End of input from user\n");
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.ends_with("\\----/\nPlayer O> "));
}

#[test]
fn test_computer_game_transcript() {
    let out = nogo(&["c", "c", "4", "4"], "");
    assert_eq!(out.status.code(), Some(0));
    let expected = concat!(
        "/----\\\n|....|\n|....|\n|....|\n|....|\n\\----/\n",
        "Player O: 1 0\n",
        "/----\\\n|....|\n|O...|\n|....|\n|....|\n\\----/\n",
        "Player X: 2 2\n",
        "/----\\\n|....|\n|O...|\n|..X.|\n|....|\n\\----/\n",
        "Player O: 2 1\n",
        "/----\\\n|....|\n|O...|\n|.OX.|\n|....|\n\\----/\n",
        "Player X: 3 3\n",
        "/----\\\n|....|\n|O...|\n|.OX.|\n|...X|\n\\----/\n",
        "Player O: 0 2\n",
        "/----\\\n|..O.|\n|O...|\n|.OX.|\n|...X|\n\\----/\n",
        "Player X: 2 0\n",
        "/----\\\n|..O.|\n|O...|\n|XOX.|\n|...X|\n\\----/\n",
        "Player O: 1 2\n",
        "/----\\\n|..O.|\n|O.O.|\n|XOX.|\n|...X|\n\\----/\n",
        "Player X: 0 3\n",
        "/----\\\n|..OX|\n|O.O.|\n|XOX.|\n|...X|\n\\----/\n",
        "Player O: 1 3\n",
        "/----\\\n|..OX|\n|O.OO|\n|XOX.|\n|...X|\n\\----/\n",
        "Player O wins\n",
    );
    assert_eq!(String::from_utf8(out.stdout).unwrap(), expected);
}

#[test]
fn test_save_and_resume_from_command_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved");

    // O moves, X saves and then hits end of input.
    let input = format!("0 0\nw{}\n", path.display());
    let out = nogo(&["h", "h", "5", "5"], &input);
    assert_eq!(out.status.code(), Some(6));
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "5 5 1 1 4 0 2 0 0\nO....\n.....\n.....\n.....\n.....\n");

    // X resumes and walls in the O stone.
    let out = nogo(&["h", "h", path.to_str().unwrap()], "0 1\n4 4\n1 0\n");
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("/-----\\\n|O....|\n"));
    assert!(stdout.ends_with("Player X wins\n"));
}
