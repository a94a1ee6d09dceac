use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

fn command(dir: &Path, text: &str, args: &str) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_textsmith"));
    command
        .current_dir(dir)
        .env_remove("TEXTSMITH_LOG")
        .arg("--text")
        .arg(text)
        .args(args.split_whitespace());
    command
}

fn run(command: &mut Command) -> Output {
    command.output().expect("run textsmith")
}

fn textsmith(text: &str, args: &str) -> Output {
    let dir = tempfile::tempdir().expect("tempdir");
    run(&mut command(dir.path(), text, args))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn log_events(path: &Path) -> Vec<Value> {
    let log = std::fs::read_to_string(path).expect("read log");
    log.lines()
        .map(|line| serde_json::from_str(line).expect("json log line"))
        .collect()
}

fn applied(events: &[Value]) -> Option<&Value> {
    events
        .iter()
        .find(|entry| entry["fields"]["event"] == "operation_applied")
}

#[test]
fn generate_into_empty_buffer() {
    let output = textsmith("", "--seed 3 generate --classes digits --count 12");
    assert!(output.status.success(), "{}", stderr(&output));

    let buffer = stdout(&output);
    assert_eq!(buffer.chars().count(), 12);
    assert!(buffer.chars().all(|ch| ch.is_ascii_digit()));
    let summary = "Generation successful: 12 characters added.";
    assert!(stderr(&output).contains(summary));
}

#[test]
fn seeded_runs_are_reproducible() {
    let args = "--seed 99 generate --classes upper,lower --count 20";
    assert_eq!(stdout(&textsmith("", args)), stdout(&textsmith("", args)));
}

#[test]
fn conflict_aborts_by_default() {
    let output = textsmith("AB!!", "generate --classes upper --count 2");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error[conflict_unresolved]"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn append_policy_keeps_existing_content() {
    let args = "generate --classes upper --count 2 --on-conflict append";
    let output = textsmith("AB!!", args);
    assert!(output.status.success(), "{}", stderr(&output));

    let buffer = stdout(&output);
    assert!(buffer.starts_with("AB!!"));
    assert_eq!(buffer.chars().count(), 6);
}

#[test]
fn remove_custom_characters() {
    let output = textsmith("a-b-c", "remove --chars -");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "abc");
    let summary = "Removal successful: 2 characters removed.";
    assert!(stderr(&output).contains(summary));
}

#[test]
fn replace_pairs_in_order() {
    let output = textsmith("aab", "replace --pair a=b --pair b=c");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "ccc");
    let summary = "Replace successful: 5 replacements made.";
    assert!(stderr(&output).contains(summary));
}

#[test]
fn zero_effect_replace_fails() {
    let output = textsmith("xyz", "replace --pair q=r");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error[no_replacements_made]"));
}

#[test]
fn resolve_reports_blocked_buffer() {
    let output = textsmith("AB12", "resolve --classes upper --full-length 4");
    assert!(output.status.success(), "{}", stderr(&output));

    let report: Value = serde_json::from_str(&stdout(&output)).expect("json report");
    assert_eq!(report["resolution"]["state"], "blocked");
}

#[test]
fn apply_script_from_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let script = r#"[
        {"op": "remove", "mode": "custom", "classes": [], "literal_chars": " "},
        {"op": "replace", "mode": "custom", "pairs": [{"from": "a", "to": "b"}]}
    ]"#;
    std::fs::write(dir.path().join("script.json"), script).expect("write script");

    let mut apply = command(dir.path(), "a a a", "apply --script script.json");
    let output = run(&mut apply);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "bbb");
}

#[test]
fn unknown_class_is_rejected_by_parser() {
    let output = textsmith("", "generate --classes emoji --count 1");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("emoji"));
}

#[test]
fn stats_counts_classes() {
    let output = textsmith("Ab1 !", "stats");
    assert!(output.status.success(), "{}", stderr(&output));

    let stats: Value = serde_json::from_str(&stdout(&output)).expect("json stats");
    assert_eq!(stats["length"], 5);
}

#[test]
fn file_logging_writes_json_events() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = "log_level = \"info\"\nlog_file = \"textsmith.log\"\n";
    std::fs::write(dir.path().join("textsmith.toml"), settings).expect("write settings");

    let args = "generate --classes digits --count 4";
    let output = run(&mut command(dir.path(), "", args));
    assert!(output.status.success(), "{}", stderr(&output));

    let events = log_events(&dir.path().join("textsmith.log"));
    let event = applied(&events).expect("operation_applied event");
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["operation"], "generate");
    assert_eq!(event["fields"]["affected"], 4);

    let timestamp = event["timestamp"].as_str().expect("timestamp");
    assert!(timestamp.ends_with('Z'), "{timestamp}");
}

#[test]
fn log_env_overrides_settings_level() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = "log_level = \"error\"\nlog_file = \"textsmith.log\"\n";
    std::fs::write(dir.path().join("textsmith.toml"), settings).expect("write settings");
    let log_path = dir.path().join("textsmith.log");
    let args = "generate --classes digits --count 4";

    let output = run(&mut command(dir.path(), "", args));
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(applied(&log_events(&log_path)).is_none());

    let output = run(command(dir.path(), "", args).env("TEXTSMITH_LOG", "info"));
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(applied(&log_events(&log_path)).is_some());
}
