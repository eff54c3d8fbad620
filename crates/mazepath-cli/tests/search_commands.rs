use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const SOLVABLE: &str = "\
%%%%%%
%P  .%
% %% %
%    %
%%%%%%
";

const SEALED: &str = "\
%%%%%%
%P %.%
%  %%%
%%%%%%
";

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("mazepath-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn text_format_reports_path() {
    let dir = tempdir().expect("create temp dir");
    let maze = write_file(&dir, "maze.txt", SOLVABLE);

    cli()
        .arg("search")
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: (1, 1) -> (1, 4) (3 moves"))
        .stdout(predicate::str::contains("  3: (1, 4)"));
}

#[test]
fn basic_format_outputs_minimal_path() {
    let dir = tempdir().expect("create temp dir");
    let maze = write_file(&dir, "maze.txt", SOLVABLE);

    cli()
        .arg("--format")
        .arg("basic")
        .arg("search")
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("+ (1, 1)"))
        .stdout(predicate::str::contains("- (1, 4)"));
}

#[test]
fn json_format_outputs_summary() {
    let dir = tempdir().expect("create temp dir");
    let maze = write_file(&dir, "maze.txt", SOLVABLE);

    let output = cli()
        .arg("--format")
        .arg("json")
        .arg("search")
        .arg(&maze)
        .arg("--heuristic")
        .arg("sum-of-all-goals")
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["method"], "astar");
    assert_eq!(value["heuristic"], "sum-of-all-goals");
    assert_eq!(value["moves"], 3);
    assert_eq!(value["outcome"]["status"], "succeeded");
}

#[test]
fn sealed_objective_fails_with_friendly_message() {
    let dir = tempdir().expect("create temp dir");
    let maze = write_file(&dir, "sealed.txt", SEALED);

    cli()
        .arg("search")
        .arg(&maze)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No path found from (1, 1) after exploring 4 states.",
        ));
}

#[test]
fn expansion_budget_suggests_raising_it() {
    let dir = tempdir().expect("create temp dir");
    let maze = write_file(&dir, "maze.txt", SOLVABLE);

    cli()
        .arg("search")
        .arg(&maze)
        .arg("--max-expansions")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Try a larger --max-expansions"));
}

#[test]
fn flags_override_config_file() {
    let dir = tempdir().expect("create temp dir");
    let maze = write_file(&dir, "maze.txt", SOLVABLE);
    let config = write_file(&dir, "search.json", r#"{ "max_expansions": 1 }"#);

    cli()
        .arg("--config")
        .arg(&config)
        .arg("search")
        .arg(&maze)
        .assert()
        .failure()
        .stderr(predicate::str::contains("stopped after exploring 1 states"));

    cli()
        .arg("--config")
        .arg(&config)
        .arg("search")
        .arg(&maze)
        .arg("--max-expansions")
        .arg("100")
        .assert()
        .success();
}

#[test]
fn invalid_config_file_is_reported() {
    let dir = tempdir().expect("create temp dir");
    let maze = write_file(&dir, "maze.txt", SOLVABLE);
    let config = write_file(&dir, "search.json", r#"{ "heuristic": "telepathy" }"#);

    cli()
        .arg("--config")
        .arg(&config)
        .arg("search")
        .arg(&maze)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load search config"));
}

#[test]
fn unsupported_method_is_rejected() {
    let dir = tempdir().expect("create temp dir");
    let maze = write_file(&dir, "maze.txt", SOLVABLE);

    cli()
        .arg("search")
        .arg(&maze)
        .arg("--method")
        .arg("bfs")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "search method bfs is not supported yet",
        ));
}

#[test]
fn unknown_heuristic_is_rejected_by_parser() {
    let dir = tempdir().expect("create temp dir");
    let maze = write_file(&dir, "maze.txt", SOLVABLE);

    cli()
        .arg("search")
        .arg(&maze)
        .arg("--heuristic")
        .arg("euclidean")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown heuristic: euclidean"));
}

#[test]
fn missing_maze_file_is_reported() {
    let dir = tempdir().expect("create temp dir");

    cli()
        .arg("search")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load maze from"));
}
