//! The `fuzztrie` binary, run as a subprocess.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::common::UNIVERSITIES;

fn fuzztrie(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fuzztrie"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fuzztrie")
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_scan_prints_records() {
    let dir = TempDir::new().unwrap();
    let dict = write(dir.path(), "dict.txt", "hello\nworld\n");
    let text = write(dir.path(), "text.txt", "say helo wrold\nHello!\n");

    let output = fuzztrie(&[
        "scan",
        text.to_str().unwrap(),
        "-d",
        dict.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        stdout(&output),
        "1,5,4,helo,hello\n1,10,9,wrold,world\n2,1,15,Hello,hello\n"
    );
}

#[test]
fn test_scan_parallel_same_output() {
    let dir = TempDir::new().unwrap();
    let dict = write(dir.path(), "dict.txt", UNIVERSITIES);
    let text = write(
        dir.path(),
        "text.txt",
        &"Stanfrod University, then CMU. ".repeat(20),
    );
    let base = [
        "scan",
        text.to_str().unwrap(),
        "-d",
        dict.to_str().unwrap(),
    ];

    let sequential = fuzztrie(&base);
    let mut parallel_args = base.to_vec();
    parallel_args.extend(["--parallel", "--shard-size", "16"]);
    let parallel = fuzztrie(&parallel_args);

    assert!(sequential.status.success());
    assert!(parallel.status.success());
    assert_eq!(stdout(&sequential).lines().count(), 40);
    assert_eq!(stdout(&parallel), stdout(&sequential));
}

#[test]
fn test_words_flag() {
    let dir = TempDir::new().unwrap();
    let dict = write(dir.path(), "dict.txt", "hello world");
    let text = write(dir.path(), "text.txt", "hello world");

    let lines = fuzztrie(&["scan", text.to_str().unwrap(), "-d", dict.to_str().unwrap()]);
    // one pattern "hello world" spanning both words
    assert_eq!(stdout(&lines), "1,1,0,hello world,hello world\n");

    let words = fuzztrie(&[
        "scan",
        text.to_str().unwrap(),
        "-d",
        dict.to_str().unwrap(),
        "--words",
    ]);
    assert_eq!(
        stdout(&words),
        "1,1,0,hello,hello\n1,7,6,world,world\n"
    );
}

#[test]
fn test_report_all_from_config() {
    let dir = TempDir::new().unwrap();
    let dict = write(dir.path(), "dict.txt", "cat\ncar\n");
    let text = write(dir.path(), "text.txt", "ca.\n");
    let config = write(dir.path(), "config.json", r#"{ "policy": "report-all" }"#);

    let suppressed = fuzztrie(&["scan", text.to_str().unwrap(), "-d", dict.to_str().unwrap()]);
    assert!(suppressed.status.success());
    assert_eq!(stdout(&suppressed), "");

    let all = fuzztrie(&[
        "scan",
        text.to_str().unwrap(),
        "-d",
        dict.to_str().unwrap(),
        "-c",
        config.to_str().unwrap(),
    ]);
    assert_eq!(stdout(&all), "1,1,0,ca,car\n1,1,0,ca,cat\n");

    // the flag overrides the file
    let flagged = fuzztrie(&[
        "scan",
        text.to_str().unwrap(),
        "-d",
        dict.to_str().unwrap(),
        "-c",
        config.to_str().unwrap(),
        "--policy",
        "suppress",
    ]);
    assert_eq!(stdout(&flagged), "");
}

#[test]
fn test_bad_dictionary_skipped() {
    let dir = TempDir::new().unwrap();
    let dict = write(dir.path(), "dict.txt", "hello\n");
    let missing = dir.path().join("missing.txt");
    let text = write(dir.path(), "text.txt", "helo\n");

    let output = fuzztrie(&[
        "scan",
        text.to_str().unwrap(),
        "-d",
        missing.to_str().unwrap(),
        "-d",
        dict.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout(&output), "1,1,0,helo,hello\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));
}

#[test]
fn test_no_dictionary_loaded_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let text = write(dir.path(), "text.txt", "helo\n");

    let output = fuzztrie(&["scan", text.to_str().unwrap(), "-d", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no patterns loaded"));
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let dict = write(dir.path(), "dict.txt", "hello\n");
    let missing = dir.path().join("nope.txt");

    let output = fuzztrie(&["scan", missing.to_str().unwrap(), "-d", dict.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.txt"));
}

#[test]
fn test_unknown_config_field_fails() {
    let dir = TempDir::new().unwrap();
    let dict = write(dir.path(), "dict.txt", "hello\n");
    let text = write(dir.path(), "text.txt", "hello\n");
    let config = write(dir.path(), "config.json", r#"{ "polcy": "report-all" }"#);

    let output = fuzztrie(&[
        "scan",
        text.to_str().unwrap(),
        "-d",
        dict.to_str().unwrap(),
        "-c",
        config.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("config.json"));
}

#[test]
fn test_variants_json() {
    let dir = TempDir::new().unwrap();
    let dict = write(dir.path(), "dict.txt", "Hello\n");

    let output = fuzztrie(&["variants", "-d", dict.to_str().unwrap(), "--json"]);
    assert!(output.status.success(), "{:?}", output);

    let table: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let hello = table["hello"].as_array().expect("hello maps to a list");
    let variants: Vec<&str> = hello.iter().filter_map(|v| v.as_str()).collect();
    assert_eq!(variants.len(), 14);
    assert!(variants.contains(&"hal"));
    assert!(variants.contains(&"hll"));
}

#[test]
fn test_variants_plain() {
    let dir = TempDir::new().unwrap();
    let dict = write(dir.path(), "dict.txt", "ab\n");

    let output = fuzztrie(&["variants", "-d", dict.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "ab: aab OR ab OR abb OR ba\n");
}
