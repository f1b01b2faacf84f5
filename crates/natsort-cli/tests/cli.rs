//! Integration tests for the natsort CLI.

use std::fs;
use std::io::Cursor;

use clap::Parser;
use natsort::Dir;
use natsort_cli::{run, Cli};
use tempfile::TempDir;

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("natsort").chain(args.iter().copied())).unwrap()
}

fn run_with_stdin(cli: &Cli, input: &str) -> String {
    let mut out = Vec::new();
    run(cli, Cursor::new(input.as_bytes()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn sorts_stdin() {
    let output = run_with_stdin(&cli(&[]), "img12.png\nimg2.png\nimg1.png\nimg10.png\n");
    assert_eq!(output, "img1.png\nimg2.png\nimg10.png\nimg12.png\n");
}

#[test]
fn reverse_flag() {
    let output = run_with_stdin(&cli(&["-r"]), "a1\na10\na2\n");
    assert_eq!(output, "a10\na2\na1\n");
}

#[test]
fn direction_flag() {
    let output = run_with_stdin(&cli(&["--direction", "DESC"]), "a1\na10\na2\n");
    assert_eq!(output, "a10\na2\na1\n");
}

#[test]
fn invalid_direction_flag_is_rejected() {
    let result = Cli::try_parse_from(["natsort", "--direction", "UP"]);
    assert!(result.is_err());
}

#[test]
fn unique_flag_drops_equal_lines() {
    let output = run_with_stdin(&cli(&["-u"]), "B\nb\na\n");
    assert_eq!(output, "a\nB\n");
}

#[test]
fn case_sensitive_flag() {
    let output = run_with_stdin(&cli(&["-c", "-u"]), "b\nB\na\n");
    assert_eq!(output, "B\na\nb\n");
}

#[test]
fn ascii_collation_flag() {
    let input = "zebra\nélan\neagle\n";
    assert_eq!(run_with_stdin(&cli(&[]), input), "eagle\nélan\nzebra\n");
    assert_eq!(
        run_with_stdin(&cli(&["--ascii-collation"]), input),
        "eagle\nzebra\nélan\n"
    );
}

#[test]
fn reads_files_and_stdin_marker() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    fs::write(&first, "track10\ntrack2\n").unwrap();

    let first = first.to_str().unwrap();
    let output = run_with_stdin(&cli(&[first, "-"]), "track1\n");
    assert_eq!(output, "track1\ntrack2\ntrack10\n");
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let cli = cli(&[missing.to_str().unwrap()]);

    let err = run(&cli, Cursor::new(Vec::new()), Vec::new()).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn config_file_sets_options() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("natsort.json");
    fs::write(&config, r#"{ "direction": "DESC", "caseSensitive": true }"#).unwrap();

    let cli = cli(&["--config", config.to_str().unwrap()]);
    let options = cli.options().unwrap();
    assert_eq!(options.direction, Dir::Desc);
    assert!(options.case_sensitive);

    assert_eq!(run_with_stdin(&cli, "x1\nx3\nx2\n"), "x3\nx2\nx1\n");
}

#[test]
fn flags_override_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("natsort.json");
    fs::write(&config, r#"{ "direction": "DESC" }"#).unwrap();

    let cli = cli(&["--config", config.to_str().unwrap(), "--direction", "asc"]);
    assert_eq!(cli.options().unwrap().direction, Dir::Asc);
}

#[test]
fn invalid_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("natsort.json");
    fs::write(&config, r#"{ "direction": 7 }"#).unwrap();

    let err = cli(&["--config", config.to_str().unwrap()])
        .options()
        .unwrap_err();
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn sorts_mixed_timestamp_lines() {
    let input: String = (0..300)
        .map(|i| {
            let day = 1 + (i * 7) % 28;
            let hour = (i * 5) % 24;
            match i % 3 {
                0 => format!("2024-01-{day:02}T{hour:02}:00:00+09:00\n"),
                1 => format!("2024-01-{day:02}T{hour:02}:00:00Z\n"),
                _ => format!("2024-01-{day:02}x\n"),
            }
        })
        .collect();

    let output = run_with_stdin(&cli(&[]), &input);

    let mut expected: Vec<&str> = input.lines().collect();
    let mut actual: Vec<&str> = output.lines().collect();
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(actual, expected);
}
