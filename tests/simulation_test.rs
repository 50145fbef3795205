use std::process::{Command, Output};

fn run_headless(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_elevator_sim"))
        .args(args)
        .env("RUST_LOG", "warn,elevator_sim=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Extract the number logged after `label`
fn logged_count(stderr: &str, label: &str) -> usize {
    let line = stderr
        .lines()
        .find(|line| line.contains(label))
        .unwrap_or_else(|| panic!("Could not find '{}' line", label));

    // Format: "[2025-11-17T17:10:52Z INFO  elevator_sim] Requests submitted: 40"
    let parts: Vec<&str> = line.split(label).collect();
    parts
        .get(1)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| panic!("Could not parse count from line: {}", line))
}

/// Test that the simulation runs in headless mode without crashing
#[test]
fn test_headless_simulation_runs() {
    let output = run_headless(&["--seed", "7", "--steps", "40"]);

    assert!(
        output.status.success(),
        "Simulation failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Final State ==="));
}

/// Test that simulation statistics are logged
#[test]
fn test_simulation_statistics_logged() {
    let output = run_headless(&["--seed", "7", "--steps", "40", "--requests-per-step", "2"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    for label in [
        "Steps taken:",
        "Requests submitted:",
        "Requests rejected:",
        "Requests dispatched:",
        "Requests pending:",
        "Final status:",
    ] {
        assert!(stderr.contains(label), "Missing '{}' statistic", label);
    }

    assert_eq!(logged_count(&stderr, "Steps taken:"), 40);
    assert_eq!(logged_count(&stderr, "Requests submitted:"), 80);
    assert_eq!(logged_count(&stderr, "Requests rejected:"), 0);
    assert!(logged_count(&stderr, "Requests dispatched:") > 0);
}

/// Test that a stop request brings the fleet home
#[test]
fn test_stop_settles_out_of_service() {
    let output = run_headless(&[
        "--seed",
        "3",
        "--floors",
        "6",
        "--steps",
        "80",
        "--stop-at",
        "20",
    ]);
    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let status_line = stderr
        .lines()
        .find(|line| line.contains("Final status:"))
        .expect("Could not find 'Final status' line");
    assert!(
        status_line.contains("out of service"),
        "Fleet did not settle: {}",
        status_line
    );
}

/// Test that invalid dimensions are reported as an error
#[test]
fn test_invalid_configuration_fails() {
    let output = run_headless(&["--elevators", "0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("num_elevators"),
        "Error did not name the bad dimension: {}",
        stderr
    );
}
