//! Switch flows replayed from cassettes.
//!
//! Each test builds the cassette a live run would have recorded, then drives
//! the switcher over a replaying context so no real file, dialog or editor
//! is touched.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::json;

use rspec_switch::cassette::config::CassetteConfig;
use rspec_switch::cassette::recorder::CassetteRecorder;
use rspec_switch::cassette::Port;
use rspec_switch::context::ServiceContext;
use rspec_switch::switcher::{Outcome, Switcher};
use rspec_switch::Error;

const SNIPPET: &str = "<plist><dict><key>content</key>\
    <string>describe ${1:Type} do\n  $0\nend</string></dict></plist>";

fn plain_root(recorder: &mut CassetteRecorder) {
    recorder.record(Port::Fs, "exists", json!({"path": "/proj/config/boot.rb"}), json!(false));
    recorder.record(Port::Fs, "exists", json!({"path": "/proj/config/init.rb"}), json!(false));
}

fn switch(cassette: &Path, file: &str) -> Result<Outcome, Error> {
    let ctx = ServiceContext::replaying(cassette).unwrap();
    let snippets = PathBuf::from("/snippets");
    Switcher::new(&ctx, Path::new("/proj"), &snippets).go_to_twin(Path::new(file))
}

#[test]
fn missing_spec_is_created_then_opened() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("create.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&path, "create-spec");
    plain_root(&mut recorder);
    recorder.record(Port::Fs, "is_file", json!({"path": "/proj/spec/foo/bar_spec.rb"}), json!(false));
    recorder.record(
        Port::Prompt,
        "confirm",
        json!({"relative_path": "spec/foo/bar_spec.rb", "description": "spec"}),
        json!({"ok": true}),
    );
    recorder.record(
        Port::Fs,
        "read_to_string",
        json!({"path": "/snippets/Describe_type.tmSnippet"}),
        json!({"ok": SNIPPET}),
    );
    recorder.record(
        Port::Fs,
        "write",
        json!({
            "path": "/proj/spec/foo/bar_spec.rb",
            "contents": "require 'spec_helper'\n\ndescribe ${1:Type} do\n  $0\nend\n"
        }),
        json!({"ok": null}),
    );
    recorder.record(Port::Opener, "open", json!({"path": "/proj/spec/foo/bar_spec.rb"}), json!({"ok": null}));
    recorder.finish().unwrap();

    let expected = Outcome::Opened { twin: PathBuf::from("/proj/spec/foo/bar_spec.rb"), created: true };
    assert_eq!(switch(&path, "/proj/lib/foo/bar.rb").unwrap(), expected);

    // A second replay of the same cassette is identical.
    assert_eq!(switch(&path, "/proj/lib/foo/bar.rb").unwrap(), expected);
}

fn declined(path: &Path, open_output: serde_json::Value) {
    let mut recorder = CassetteRecorder::new(path, "decline");
    plain_root(&mut recorder);
    recorder.record(Port::Fs, "is_file", json!({"path": "/proj/lib/foo/bar.rb"}), json!(false));
    recorder.record(Port::Prompt, "confirm", json!({}), json!({"ok": false}));
    recorder.record(Port::Opener, "open", json!({"path": "/proj/lib/foo/bar.rb"}), open_output);
    recorder.finish().unwrap();
}

#[test]
fn declined_creation_opens_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("decline.cassette.yaml");
    declined(&path, json!({"ok": null}));

    // Any write would exhaust the cassette and panic.
    assert_eq!(
        switch(&path, "/proj/spec/foo/bar_spec.rb").unwrap(),
        Outcome::Declined { twin: PathBuf::from("/proj/lib/foo/bar.rb") }
    );
}

#[test]
fn declined_creation_still_reaches_the_editor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("decline-open-fails.cassette.yaml");
    declined(&path, json!({"err": "mate: not found"}));

    let err = switch(&path, "/proj/spec/foo/bar_spec.rb").unwrap_err();
    assert!(matches!(err, Error::Open { ref path, .. } if path == Path::new("/proj/lib/foo/bar.rb")));
}

#[test]
fn rails_model_spec_opens_existing_model() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rails.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&path, "rails");
    recorder.record(Port::Fs, "exists", json!({"path": "/proj/config/boot.rb"}), json!(true));
    recorder.record(Port::Fs, "is_file", json!({"path": "/proj/app/models/widget.rb"}), json!(true));
    recorder.record(Port::Opener, "open", json!({"path": "/proj/app/models/widget.rb"}), json!({"ok": null}));
    recorder.finish().unwrap();

    assert_eq!(
        switch(&path, "/proj/spec/models/widget_spec.rb").unwrap(),
        Outcome::Opened { twin: PathBuf::from("/proj/app/models/widget.rb"), created: false }
    );
}

#[test]
fn write_failure_is_reported_and_nothing_is_opened() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readonly.cassette.yaml");

    let mut recorder = CassetteRecorder::new(&path, "readonly");
    plain_root(&mut recorder);
    recorder.record(Port::Fs, "is_file", json!({}), json!(false));
    recorder.record(Port::Prompt, "confirm", json!({}), json!({"ok": true}));
    recorder.record(Port::Fs, "write", json!({}), json!({"err": "Permission denied (os error 13)"}));
    recorder.finish().unwrap();

    let err = switch(&path, "/proj/spec/foo/bar_spec.rb").unwrap_err();
    match err {
        Error::WriteFailure { path, message } => {
            assert_eq!(path, PathBuf::from("/proj/lib/foo/bar.rb"));
            assert!(message.contains("Permission denied"));
        }
        other => panic!("expected WriteFailure, got {other:?}"),
    }
}

#[test]
fn per_port_cassettes_replay_a_recorded_session() {
    let dir = tempfile::tempdir().unwrap();

    let fs_path = dir.path().join("fs.cassette.yaml");
    let mut fs = CassetteRecorder::new(&fs_path, "fs-port");
    plain_root(&mut fs);
    fs.record(Port::Fs, "is_file", json!({"path": "/proj/spec/a_spec.rb"}), json!(true));
    fs.finish().unwrap();

    let opener_path = dir.path().join("opener.cassette.yaml");
    let mut opener = CassetteRecorder::new(&opener_path, "opener-port");
    opener.record(Port::Opener, "open", json!({"path": "/proj/spec/a_spec.rb"}), json!({"ok": null}));
    opener.finish().unwrap();

    // The prompt is never consulted; leaving it unconfigured proves that.
    let config = CassetteConfig::from_session_dir(dir.path());
    assert!(config.prompt.is_none());

    let ctx = ServiceContext::replaying_from(&config).unwrap();
    let snippets = PathBuf::from("/snippets");
    let outcome = Switcher::new(&ctx, Path::new("/proj"), &snippets)
        .go_to_twin(Path::new("/proj/lib/a.rb"))
        .unwrap();
    assert_eq!(outcome, Outcome::Opened { twin: PathBuf::from("/proj/spec/a_spec.rb"), created: false });
}
