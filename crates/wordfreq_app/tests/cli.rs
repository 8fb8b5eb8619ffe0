use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn wordfreq() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wordfreq"))
}

#[test]
fn default_paths_are_relative_to_working_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("enwik6.txt"), "to be or not to be").unwrap();

    let status = wordfreq().current_dir(temp.path()).status().unwrap();

    assert!(status.success());
    let written = fs::read_to_string(temp.path().join("word_freqs.json")).unwrap();
    assert_eq!(written.trim(), r#"{"be":2,"not":1,"or":1,"to":2}"#);
}

#[test]
fn positional_paths_override_defaults() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out").join("counts.json");
    fs::write(&input, "a a a").unwrap();

    let out = wordfreq().arg(&input).arg(&output).output().unwrap();

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap().trim(),
        output.display().to_string()
    );
    assert_eq!(fs::read_to_string(&output).unwrap().trim(), r#"{"a":3}"#);
}

#[test]
fn missing_input_exits_non_zero() {
    let temp = TempDir::new().unwrap();

    let out = wordfreq().current_dir(temp.path()).output().unwrap();

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("input file not found"));
    assert!(!temp.path().join("word_freqs.json").exists());
}

#[test]
fn extra_arguments_exit_non_zero() {
    let out = wordfreq().args(["a", "b", "c"]).output().unwrap();
    assert!(!out.status.success());
}
