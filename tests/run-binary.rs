use assert_cmd::prelude::*;
use std::process::{Command, Output};

fn run(args: &[&str]) -> (Output, String) {
    let output = Command::main_binary().unwrap().args(args).output().unwrap();
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    (output, stdout)
}

#[test]
fn run_bfs_free_run() {
    // stats include the time so only check the deterministic parts
    let (output, stdout) = run(&["--method", "bfs", "levels/01-free-run.txt"]);
    assert!(output.status.success());
    assert!(stdout.starts_with(
        "Solved levels/01-free-run.txt using bfs (breadth-first search, fewest moves)\n"
    ));
    assert!(stdout.contains(
        r"Found solution:
0+ 0+ 0+
Moves: 3
Nodes expanded: 5
States created: 5
Reached duplicates: 3
"
    ));
    assert!(!stdout.contains("Cost:"));

    let last_step = r"Step 3: vehicle R moves > (cost: 2)
. . . . . .
. . . . . .
. . . . R R
. . . . . .
. . . . . .
. . . . . .

";
    assert!(stdout.ends_with(last_step));
}

#[test]
fn run_default_method_quiet() {
    let (output, stdout) = run(&["-q", "levels/02-one-blocker.txt"]);
    assert!(output.status.success());
    assert!(stdout.contains("using astar"));
    assert!(stdout.contains("Moves: 5\nCost: 10\n"));
    assert!(!stdout.contains("Step 1"));
}

#[test]
fn run_cost_only_for_cost_aware() {
    for method in &["bfs", "dfs", "ids"] {
        let (output, stdout) = run(&["-q", "-m", method, "levels/02-one-blocker.txt"]);
        assert!(output.status.success());
        assert!(stdout.contains("Moves: 5\n"), "{}", method);
        assert!(!stdout.contains("Cost:"), "{}", method);
    }
    for method in &["ucs", "astar", "astar-gap"] {
        let (output, stdout) = run(&["-q", "-m", method, "levels/02-one-blocker.txt"]);
        assert!(output.status.success());
        assert!(stdout.contains("Moves: 5\nCost: 10\n"), "{}", method);
    }
}

#[test]
fn run_walled_in() {
    for method in &["bfs", "dfs", "ids", "ucs", "astar", "astar-gap"] {
        let (output, stdout) = run(&["-m", method, "levels/03-walled-in.txt"]);
        assert!(output.status.success());
        assert!(stdout.contains("\nNo solution\n"), "{}", method);
    }
}

#[test]
fn run_ids_depth_limit() {
    let (output, stdout) = run(&["-m", "ids", "-d", "2", "levels/01-free-run.txt"]);
    assert!(output.status.success());
    assert!(stdout.contains("No solution within depth limit of 2 moves\n"));
    assert!(stdout.contains("Passes: 3\n"));
}

#[test]
fn run_compare_all() {
    let (output, stdout) = run(&["--method", "all", "levels/04-beginner.txt"]);
    assert!(output.status.success());
    assert!(stdout.starts_with("Comparing methods on levels/04-beginner.txt\n"));
    for method in &["bfs", "dfs", "ids", "ucs", "astar", "astar-gap"] {
        assert!(stdout.contains(&format!("| {} ", method)), "{}", method);
    }
    assert!(stdout.contains("| 1072 "));
    assert!(stdout.contains("| 40 "));
}

#[test]
fn run_unknown_method() {
    Command::main_binary()
        .unwrap()
        .args(&["--method", "greedy", "levels/01-free-run.txt"])
        .assert()
        .failure()
        .stdout("")
        .stderr("Unknown method: greedy (expected one of bfs, dfs, ids, ucs, astar, astar-gap)\n");
}

#[test]
fn run_missing_file() {
    let (output, stdout) = run(&["levels/does-not-exist.txt"]);
    assert!(!output.status.success());
    assert_eq!(stdout, "");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Can't read level file levels/does-not-exist.txt"));
}
