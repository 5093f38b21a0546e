use assert_cmd::prelude::*;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn run_one_way() {
    let expected_solution = r"Found solution:
Initial:
A
.
a

1: Ad
.
.
a

1 steps
Moves: Ad
Pieces moved: 1
";

    let output = Command::main_binary()
        .unwrap()
        .arg("levels/one-way.txt")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let stdout = stdout(&output);
    assert!(stdout.starts_with("Solving levels/one-way.txt...\n"));
    assert!(stdout.contains("Visited new depth: 1\n"));
    assert!(stdout.contains("States created total: 2\n"));
    assert!(stdout.contains("States visited total: 2\n"));
    assert!(stdout.contains("Unique visited total: 2\n"));
    assert!(stdout.ends_with(expected_solution));
}

#[test]
fn run_classic_quiet() {
    let output = Command::main_binary()
        .unwrap()
        .arg("--classic")
        .arg("--quiet")
        .arg("levels/one-way.txt")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(!stdout.contains("Visited new depth"));
    assert!(stdout.contains("Initial:\nP\n.\nG\n\n1: Ad\n.\n.\nG\n\n"));
}

#[test]
fn run_no_solution() {
    let output = Command::main_binary()
        .unwrap()
        .arg("--quiet")
        .arg("--trace")
        .arg("levels/enclosed.txt")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("No solution\n"));
    assert!(!stdout.contains("Found solution:"));
    assert!(stdout.ends_with("Visited states (1):\n.#.\n#A#\n.#a\n\n"));
}

#[test]
fn run_missing_level() {
    let output = Command::main_binary()
        .unwrap()
        .arg("levels/does-not-exist.txt")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stdout(&output).starts_with("Can't load level levels/does-not-exist.txt"));
}

#[test]
fn run_bad_formatting_args() {
    // stderr is clap's usage message, only check that nothing got solved
    Command::main_binary()
        .unwrap()
        .arg("--classic")
        .arg("--letters")
        .arg("levels/one-way.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_play() {
    let mut child = Command::main_binary()
        .unwrap()
        .arg("--play")
        .arg("--delay")
        .arg("0")
        .arg("levels/one-way.txt")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"x\ns\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("Wrong! Please enter W, A, S, or D.\n"));
    assert!(stdout.ends_with("Step 1:\n.\n.\na\n\nYou Won!\n"));
}
