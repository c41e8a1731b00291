//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::{Command, Output};

fn run_switch(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_rspec-switch");
    Command::new(bin)
        .args(args)
        .env_remove("TM_PROJECT_DIRECTORY")
        .env_remove("TM_FILEPATH")
        .env_remove("RSPEC_SWITCH_DIALOG")
        .env_remove("RSPEC_SWITCH_RECORD")
        .output()
        .expect("failed to run rspec-switch binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn twin_prints_spec_path_for_library_file() {
    let output = run_switch(&["twin", "--file", "/proj/lib/foo/bar.rb"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "/proj/spec/foo/bar_spec.rb\n");
}

#[test]
fn twin_prints_nothing_without_a_twin() {
    let output = run_switch(&["twin", "--file", "/tmp/notes.txt"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn twin_reads_file_from_environment() {
    let bin = env!("CARGO_BIN_EXE_rspec-switch");
    let output = Command::new(bin)
        .arg("twin")
        .env("TM_FILEPATH", "/proj/spec/foo_spec.rb")
        .output()
        .expect("failed to run rspec-switch binary");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "/proj/lib/foo.rb\n");
}

#[test]
fn twin_without_file_is_an_error() {
    let output = run_switch(&["twin"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("TM_FILEPATH"));
}

#[test]
fn switch_without_project_dir_is_an_error() {
    let output = run_switch(&["switch", "--file", "/proj/lib/a.rb"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("TM_PROJECT_DIRECTORY"));
}

#[test]
fn classify_prints_type_and_label() {
    let output = run_switch(&["classify", "--file", "/proj/app/views/users/show.html.erb"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "view\tusers/show.html\n");
}

#[test]
fn scaffold_prints_model_skeleton() {
    let output = run_switch(&["scaffold", "--file", "/proj/app/models/user_account.rb"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "class UserAccount < ActiveRecord::Base\nend\n");
}

#[test]
fn switch_creates_and_opens_missing_spec() {
    let project = tempfile::tempdir().unwrap();
    let root = project.path().to_str().unwrap();
    let file = project.path().join("lib/widget.rb");

    let output = run_switch(&[
        "switch",
        "--project-dir",
        root,
        "--file",
        file.to_str().unwrap(),
        "--dialog",
        "echo 1",
        "--editor",
        "true",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let spec = project.path().join("spec/widget_spec.rb");
    let content = std::fs::read_to_string(spec).unwrap();
    assert!(content.starts_with("require 'spec_helper'\n\ndescribe "));
}

#[test]
fn switch_records_a_session_when_asked() {
    let project = tempfile::tempdir().unwrap();
    let cassettes = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(project.path().join("spec")).unwrap();
    std::fs::write(project.path().join("spec/widget_spec.rb"), "").unwrap();
    let file = project.path().join("lib/widget.rb");

    let output = run_switch(&[
        "switch",
        "--project-dir",
        project.path().to_str().unwrap(),
        "--file",
        file.to_str().unwrap(),
        "--editor",
        "true",
        "--record",
        cassettes.path().to_str().unwrap(),
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Recording saved to:"));
    let session = std::fs::read_dir(cassettes.path()).unwrap().next().unwrap().unwrap().path();
    for port in ["fs", "prompt", "opener"] {
        assert!(Path::new(&session).join(format!("{port}.cassette.yaml")).is_file());
    }
}

#[test]
fn help_exits_successfully() {
    let output = run_switch(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("switch"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_switch(&["nonsense"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unrecognized subcommand"));
}
