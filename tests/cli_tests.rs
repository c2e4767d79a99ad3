//! Integration tests for the fruity binary
//!
//! Every run points FRUITY_API_URL at a loopback stub, so no network is needed.


use std::process::{Command, Output};
use test_helpers::*;

/// Run the CLI against `server` with the given args and capture output
fn run_cli(server: &StubServer, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fruity"))
        .args(args)
        .env("FRUITY_API_URL", server.base_url())
        .env("FRUITY_TIMEOUT_SECS", "5")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute fruity")
}

fn stub() -> StubServer {
    StubServer::start(
        Routes::new()
            .with("apple", 200, APPLE_JSON)
            .with("banana", 200, BANANA_JSON)
            .with("all", 200, &format!("[{APPLE_JSON},{BANANA_JSON},{PEAR_JSON}]"))
            .with("family/Rosaceae", 200, &format!("[{APPLE_JSON},{PEAR_JSON}]"))
            .with("durian", 503, ""),
    )
}

#[test]
fn test_help_flag_exits_successfully() {
    let server = stub();
    let output = run_cli(&server, &["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("family"), "Help should list the family command");
    assert!(stdout.contains("--format"), "Help should list --format");
    assert!(stdout.contains("--output"), "Help should list --output");
}

#[test]
fn test_single_fruit_user_format() {
    let server = stub();
    let output = run_cli(&server, &["apple"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Apple"));
    assert!(stdout.contains("6"));
    assert!(stdout.contains("Rosaceae"));
    assert!(stdout.contains("10.3g"));
    assert!(stdout.contains("11.4g"));
}

#[test]
fn test_unknown_fruit_is_reported_inline() {
    let server = stub();
    let output = run_cli(&server, &["kiwano"]);

    assert!(
        output.status.success(),
        "Unknown fruit must not fail the process: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("kiwano not in FruityVice database"), "{stdout}");
}

#[test]
fn test_reserved_name_is_reported_without_request() {
    let server = stub();
    let output = run_cli(&server, &["sugar"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("sugar not in"));
    assert!(server.requests().is_empty());
}

#[test]
fn test_multiple_fruits_keep_order_and_continue_past_misses() {
    let server = stub();
    let output = run_cli(&server, &["banana", "kiwano", "apple"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let banana_at = stdout.find("Name: Banana").unwrap();
    let missing_at = stdout.find("kiwano not in").unwrap();
    let apple_at = stdout.find("Name: Apple").unwrap();
    assert!(banana_at < missing_at && missing_at < apple_at, "{stdout}");
}

#[test]
fn test_unavailable_fruit_is_skipped_with_warning() {
    let server = stub();
    let output = run_cli(&server, &["durian", "apple"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("durian"));
    assert!(stdout.contains("Name: Apple"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("durian"), "{stderr}");
}

#[test]
fn test_json_format_flag() {
    let server = stub();
    let output = run_cli(&server, &["apple", "--format", "Json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), APPLE_JSON);
}

#[test]
fn test_unknown_format_is_rejected_by_parser() {
    let server = stub();
    let output = run_cli(&server, &["apple", "-f", "yaml"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("yaml"));
    assert!(server.requests().is_empty());
}

#[test]
fn test_family_subcommand() {
    let server = stub();
    let output = run_cli(&server, &["family", "Rosaceae", "-f", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, [APPLE_JSON, PEAR_JSON]);
}

#[test]
fn test_unknown_family_prints_nothing_and_succeeds() {
    let server = stub();
    let output = run_cli(&server, &["family", "Nonexistaceae"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_all_subcommand() {
    let server = stub();
    let output = run_cli(&server, &["all"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["Name: Apple", "Name: Banana", "Name: Pear"] {
        assert!(stdout.contains(name), "{stdout}");
    }
}

#[test]
fn test_output_file() {
    let server = stub();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fruit.txt");

    let output = run_cli(
        &server,
        &["apple", "kiwano", "-o", path.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "Records should go to the file only");

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Name: Apple"));
    assert!(written.contains("kiwano not in FruityVice database"));
}

#[test]
fn test_output_path_is_relative_to_working_directory() {
    let server = stub();
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_fruity"))
        .args(["all", "--output", "catalog.json", "--format", "json"])
        .current_dir(dir.path())
        .env("FRUITY_API_URL", server.base_url())
        .output()
        .expect("Failed to execute fruity");
    assert!(output.status.success());

    let written = std::fs::read_to_string(dir.path().join("catalog.json")).unwrap();
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn test_no_arguments_prints_hint() {
    let server = stub();
    let output = run_cli(&server, &[]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("fruity --help"));
}

#[test]
fn test_completions_subcommand() {
    let server = stub();
    let output = run_cli(&server, &["completions", "bash"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("fruity"));
}
