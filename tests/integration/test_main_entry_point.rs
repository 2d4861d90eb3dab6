// main.rsとエントリーポイントのテスト
use crate::fixtures::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_edge_batch"))
}

#[test]
fn test_cli_help() {
    let output = binary().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--workers"));
    assert!(stdout.contains("INPUT_DIR"));
}

#[test]
fn test_cli_processes_directory() {
    let input = TempDir::new().unwrap();
    let output = input.path().join("edges");
    setup_mixed_input(input.path());

    let result = binary()
        .arg(input.path())
        .arg(&output)
        .args(["--workers", "2"])
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Found 6 images to process."));
    assert!(stdout.contains("Failed to load"));
    assert!(stdout.contains("Processing complete!"));
    assert_eq!(list_file_names(&output).len(), 4);
}

#[test]
fn test_cli_empty_directory() {
    let input = TempDir::new().unwrap();
    let output = input.path().join("edges");
    fs::write(input.path().join("readme.txt"), b"no images").unwrap();

    let result = binary().arg(input.path()).arg(&output).output().unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("No images found in the input directory!"));
    assert!(!stdout.contains("Processing complete!"));
    assert!(output.is_dir());
}

#[test]
fn test_cli_quiet_prints_nothing() {
    let input = TempDir::new().unwrap();
    let output = input.path().join("edges");
    write_square(input.path(), "a.png", 16, 16);

    let result = binary()
        .arg(input.path())
        .arg(&output)
        .arg("--quiet")
        .output()
        .unwrap();

    assert!(result.status.success());
    assert!(result.stdout.is_empty());
    assert!(output.join("a_edges.png").is_file());
}

#[test]
fn test_cli_missing_input_fails() {
    let temp = TempDir::new().unwrap();

    let result = binary()
        .arg(temp.path().join("missing"))
        .arg(temp.path().join("out"))
        .output()
        .unwrap();

    assert!(!result.status.success());
}

#[test]
fn test_cli_zero_workers_fails() {
    let input = TempDir::new().unwrap();

    let result = binary()
        .arg(input.path())
        .arg(input.path().join("out"))
        .args(["-w", "0"])
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("worker count must be at least 1"));
}

#[test]
fn test_cli_failures_reported_once_on_stdout_only() {
    let input = TempDir::new().unwrap();
    let output = input.path().join("edges");
    fs::write(input.path().join("zero.jpg"), b"").unwrap();

    for quiet in [false, true] {
        let mut command = binary();
        command
            .env_remove("RUST_LOG")
            .arg(input.path())
            .arg(&output)
            .args(["-w", "1"]);
        if quiet {
            command.arg("--quiet");
        }
        let result = command.output().unwrap();

        assert!(result.status.success());
        assert!(
            result.stderr.is_empty(),
            "unexpected stderr (quiet={quiet}): {}",
            String::from_utf8_lossy(&result.stderr)
        );

        let stdout = String::from_utf8_lossy(&result.stdout);
        let expected = if quiet { 0 } else { 1 };
        assert_eq!(stdout.matches("Failed to load").count(), expected);
    }
}

#[test]
fn test_cli_verbose_log_has_no_ansi_when_redirected() {
    let input = TempDir::new().unwrap();
    write_square(input.path(), "a.png", 16, 16);

    let result = binary()
        .env_remove("RUST_LOG")
        .arg(input.path())
        .arg(input.path().join("edges"))
        .args(["--quiet", "--verbose"])
        .output()
        .unwrap();

    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("DEBUG"));
    assert!(!stderr.contains('\u{1b}'));
}
