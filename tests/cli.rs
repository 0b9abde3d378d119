use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_game(args: &[&str], input: &str) -> Output {
    let exe = env!("CARGO_BIN_EXE_connect_m");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn game binary");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("game binary did not exit")
}

#[test]
fn missing_arguments_print_usage() {
    let output = run_game(&[], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn board_size_out_of_range() {
    let output = run_game(&["2", "3", "1"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout)
        .contains("Board size N must be between 3 and 10."));
}

#[test]
fn connect_length_out_of_range() {
    let output = run_game(&["5", "6", "1"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout)
        .contains("Parameter M must be higher than 1 and no higher than N."));
}

#[test]
fn first_player_flag_out_of_range() {
    let output = run_game(&["5", "4", "2"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Parameter H must be 0 or 1."));
}

#[test]
fn computer_wins_against_a_careless_human() {
    // the human stacks column 1 while the computer completes a line of two
    let output = run_game(&["3", "2", "0", "--depth", "2"], "1\n1\n1\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Computer places disk in column"));
    assert!(stdout.contains("Computer wins!"));
}

#[test]
fn bad_input_reprompts() {
    let output = run_game(&["3", "3", "1"], "x\n9\n");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Invalid input. Please enter a number."));
    assert!(stdout.contains("Column out of range."));
}
