/// Smoke tests driving the compiled binary
use std::process::{Command, Output};

fn termlife(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_termlife"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute termlife")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn with_generations<'a>(args: &[&'a str], n: &'a str) -> Vec<&'a str> {
    let mut args = args.to_vec();
    args.extend(["--generations", n]);
    args
}

#[test]
fn binary_shows_help() {
    let output = termlife(&["--help"]);
    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("termlife"), "Help output should mention termlife");
}

#[test]
fn binary_shows_version() {
    let output = termlife(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn invalid_subcommand_fails_gracefully() {
    let output = termlife(&["nonexistent-command"]);
    assert!(!output.status.success(), "Invalid subcommand should return error status");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked at"), "Invalid subcommand should not cause panic");
}

#[test]
fn blinker_flips_after_one_generation() {
    let args = ["print", "-W", "6", "-H", "6", "--pattern", "blinker"];

    let start = termlife(&args);
    assert!(start.status.success());
    assert_eq!(
        stdout_lines(&start),
        ["......", "......", ".###..", "......", "......", "......"]
    );

    let output = termlife(&with_generations(&args, "1"));
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["......", "..#...", "..#...", "..#...", "......", "......"]
    );

    let output = termlife(&with_generations(&args, "2"));
    assert_eq!(stdout_lines(&output), stdout_lines(&start));
}

#[test]
fn block_survives() {
    let output = termlife(&["print", "-W", "4", "-H", "4", "-p", "block", "-g", "25", "--alive", "o", "--dead", " "]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["    ", " oo ", " oo ", "    "]);
}

#[test]
fn seeded_print_is_reproducible() {
    let args = ["print", "-W", "30", "-H", "10", "--seed", "2024", "-g", "3"];
    let first = termlife(&args);
    let second = termlife(&args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(stdout_lines(&first).len(), 10);
}

#[test]
fn zero_dimensions_are_rejected() {
    let output = termlife(&["print", "-W", "0", "-H", "5"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("dimensions must be positive"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked at"));
}

#[test]
fn unknown_pattern_is_rejected() {
    let output = termlife(&["print", "-W", "5", "-H", "5", "-p", "spaceship"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown pattern"));
}

#[test]
fn pattern_with_bad_density_is_rejected() {
    let output = termlife(&["print", "-W", "6", "-H", "6", "-p", "blinker", "--density", "7.5"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("density must be between"), "stderr: {stderr}");
}

#[test]
fn patterns_are_listed() {
    let output = termlife(&["patterns"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["block", "blinker", "glider", "gosper-gun"] {
        assert!(stdout.contains(name), "missing {name}");
    }
}
