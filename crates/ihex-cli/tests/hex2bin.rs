//! End-to-end tests for the `hex2bin` binary: arguments, exit codes, and
//! the all-or-nothing output file.

use std::path::Path;
use std::process::{Command, Output};

const VALID: &str = ":0300300002337A1E\n:00000001FF\n";

fn hex2bin(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hex2bin"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn hex2bin")
}

#[test]
fn converts_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("app.hex");
    let output = dir.path().join("app.bin");
    std::fs::write(&input, VALID).unwrap();

    let out = hex2bin(&[&input, &output]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        std::fs::read(&output).unwrap(),
        vec![
            0x01, 0x03, 0x00, 0x30, 0x00, 0x02, 0x33, 0x7A, 0x1E, 0x04, // data record
            0x01, 0x00, 0x00, 0x00, 0x10, 0x01, 0xFF, 0x04, // eof record
        ]
    );
}

#[test]
fn missing_arguments_print_usage_and_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let only = dir.path().join("app.hex");

    for args in [vec![], vec![only.as_path()]] {
        let out = hex2bin(&args);
        assert_eq!(out.status.code(), Some(0));
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.starts_with("usage:"), "stdout: {stdout}");
        assert!(stdout.contains("hex2bin <hex> <bin>"));
    }
}

#[test]
fn extra_argument_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");
    let out = hex2bin(&[&a, &a, &a]);

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("usage:"));
}

#[test]
fn checksum_error_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.hex");
    let output = dir.path().join("bad.bin");
    std::fs::write(&input, ":0300300002337A1F\n:00000001FF\n").unwrap();

    let out = hex2bin(&[&input, &output]);

    assert_eq!(out.status.code(), Some(2));
    assert!(!output.exists(), "output must not be created on failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid checksum"), "stderr: {stderr}");
}

#[test]
fn non_utf8_byte_is_invalid_record() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("binary.hex");
    let output = dir.path().join("binary.bin");
    std::fs::write(&input, b":0300300002337A1E\n:00\xFF0001FF\n:00000001FF\n").unwrap();

    let out = hex2bin(&[&input, &output]);

    assert_eq!(out.status.code(), Some(2));
    assert!(!output.exists());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("record 2"), "stderr: {stderr}");
    assert!(stderr.contains("invalid hex digit"), "stderr: {stderr}");
}

#[test]
fn failed_conversion_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("noeof.hex");
    let output = dir.path().join("keep.bin");
    std::fs::write(&input, ":0300300002337A1E\n").unwrap();
    std::fs::write(&output, b"previous").unwrap();

    let out = hex2bin(&[&input, &output]);

    assert_eq!(out.status.code(), Some(3));
    assert_eq!(std::fs::read(&output).unwrap(), b"previous");
}

#[test]
fn data_after_eof_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("twice.hex");
    let output = dir.path().join("twice.bin");
    std::fs::write(&input, ":00000001FF\n:00000001FF\n").unwrap();

    let out = hex2bin(&[&input, &output]);

    assert_eq!(out.status.code(), Some(3));
    assert!(!output.exists());
}

#[test]
fn unreadable_input_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.hex");
    let output = dir.path().join("out.bin");

    let out = hex2bin(&[&input, &output]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot read"));
}

#[test]
fn unwritable_output_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("app.hex");
    let output = dir.path().join("no-such-dir").join("app.bin");
    std::fs::write(&input, VALID).unwrap();

    let out = hex2bin(&[&input, &output]);

    assert_eq!(out.status.code(), Some(1));
}
