use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn mini_dict_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../test-resources/resources/mini-dict")
}

fn token_align() -> Command {
    let mut cmd = Command::cargo_bin("token-align").unwrap();
    cmd.env_remove("TOKEN_ALIGN_TOKENIZER")
        .env_remove("TOKEN_ALIGN_DICT_PATH")
        .env_remove("TOKEN_ALIGN_USER_LEXICON");
    cmd
}

#[test]
fn test_unicode_tokenize_from_stdin() {
    token_align()
        .args(["tokenize", "--tokenizer", "unicode"])
        .write_stdin("Hello, world.")
        .assert()
        .success()
        .stdout("text\tstart\twhitespace_after\nHello\t0\tfalse\n,\t5\ttrue\nworld\t7\tfalse\n.\t12\ttrue\n");
}

#[test]
fn test_unsupported_tokenizer_fails() {
    token_align()
        .args(["tokenize", "--tokenizer", "janome"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported tokenizer `janome`"));
}

#[test]
fn test_vibrato_without_dictionary_fails() {
    token_align()
        .args(["tokenize"])
        .write_stdin("東京")
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs a dictionary path"));
}

#[test]
fn test_build_dict_then_tokenize_json() {
    let dir = tempfile::tempdir().unwrap();
    let dict = dir.path().join("system.dic.zst");

    token_align()
        .arg("build-dict")
        .arg("--sources")
        .arg(mini_dict_dir())
        .arg("--output")
        .arg(&dict)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dictionary available at"));
    assert!(dict.is_file());

    let input = dir.path().join("input.txt");
    std::fs::write(&input, "東京都に行く。").unwrap();

    let output = token_align()
        .arg("tokenize")
        .arg("--dict")
        .arg(&dict)
        .arg("--input")
        .arg(&input)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let tokens: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        tokens,
        serde_json::json!([
            {"text": "東京都", "start_offset": 0, "whitespace_after": false},
            {"text": "に", "start_offset": 3, "whitespace_after": false},
            {"text": "行く", "start_offset": 4, "whitespace_after": false},
            {"text": "。", "start_offset": 6, "whitespace_after": true},
        ])
    );
}

#[test]
fn test_build_dict_missing_sources() {
    let dir = tempfile::tempdir().unwrap();
    token_align()
        .arg("build-dict")
        .arg("--sources")
        .arg(dir.path())
        .arg("--output")
        .arg(dir.path().join("system.dic.zst"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("lex.csv"));
}

#[test]
fn test_byte_offsets() {
    token_align()
        .args(["tokenize", "--tokenizer", "unicode", "--unit", "byte"])
        .write_stdin("Hé x")
        .assert()
        .success()
        .stdout("text\tstart\twhitespace_after\nHé\t0\ttrue\nx\t4\ttrue\n");
}

#[test]
fn test_build_dict_reuses_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let dict = dir.path().join("system.dic.zst");
    std::fs::write(&dict, b"stale").unwrap();

    let build = |force: bool| {
        let mut cmd = token_align();
        cmd.arg("build-dict")
            .arg("--sources")
            .arg(mini_dict_dir())
            .arg("--output")
            .arg(&dict);
        if force {
            cmd.arg("--force");
        }
        cmd.assert().success();
    };

    build(false);
    assert_eq!(std::fs::read(&dict).unwrap(), b"stale");

    build(true);
    assert_ne!(std::fs::read(&dict).unwrap(), b"stale");
}
