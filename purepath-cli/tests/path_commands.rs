//! Integration tests for the path commands.
//!
//! Each test drives the binary with one command and checks the printed
//! path, in text mode and, where it matters, in JSON mode.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// inspect
// ============================================================================

#[test]
fn test_inspect_text() {
    let env = TestEnv::new();
    env.command()
        .args(["inspect", "/path/to/.file.tar.gz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path      /path/to/.file.tar.gz"))
        .stdout(predicate::str::contains("stem      .file.tar"))
        .stdout(predicate::str::contains("suffixes  [\".tar\", \".gz\"]"))
        .stdout(predicate::str::contains("uri       file:///path/to/.file.tar.gz"));
}

#[test]
fn test_inspect_json_single() {
    let env = TestEnv::new();
    let report = env.json_of(&["inspect", "/usr/local/../bin/"]);

    assert_eq!(report["path"], "/usr/bin");
    assert_eq!(report["root"], "/");
    assert_eq!(report["parts"], serde_json::json!(["/", "usr", "bin"]));
    assert_eq!(report["parent"], "/usr");
    assert_eq!(report["name"], "bin");
    assert_eq!(report["absolute"], true);
}

#[test]
fn test_inspect_json_many() {
    let env = TestEnv::new();
    let reports = env.json_of(&["inspect", "/", "a/b.txt"]);

    let reports = reports.as_array().expect("expected a JSON array");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["parts"], serde_json::json!(["/"]));
    assert_eq!(reports[0]["name"], "");
    assert_eq!(reports[1]["root"], "");
    assert_eq!(reports[1]["suffix"], ".txt");
    assert_eq!(reports[1]["absolute"], false);
}

#[test]
fn test_inspect_requires_a_path() {
    let env = TestEnv::new();
    env.command().arg("inspect").assert().failure().code(2);
}

// ============================================================================
// join / parent
// ============================================================================

#[test]
fn test_join() {
    let env = TestEnv::new();
    assert_eq!(
        env.stdout_of(&["join", "/path/to", "dir", "file.txt"]),
        "/path/to/dir/file.txt"
    );
    assert_eq!(env.stdout_of(&["join", "/a", "/b"]), "/a/b");
    assert_eq!(env.stdout_of(&["join", "a/b", "../../.."]), "..");
}

#[test]
fn test_join_json_reports_result() {
    let env = TestEnv::new();
    let report = env.json_of(&["join", "/srv", "site.conf"]);
    assert_eq!(report["path"], "/srv/site.conf");
    assert_eq!(report["suffix"], ".conf");
}

#[test]
fn test_parent() {
    let env = TestEnv::new();
    assert_eq!(env.stdout_of(&["parent", "/path/to/file.txt"]), "/path/to");
    assert_eq!(env.stdout_of(&["parent", "/"]), "/");
    assert_eq!(env.stdout_of(&["parent", "file.txt"]), ".");
}

// ============================================================================
// with-name / with-stem
// ============================================================================

#[test]
fn test_with_name() {
    let env = TestEnv::new();
    assert_eq!(
        env.stdout_of(&["with-name", "/path/to/file.txt", "file.md"]),
        "/path/to/file.md"
    );
}

#[test]
fn test_with_stem() {
    let env = TestEnv::new();
    assert_eq!(
        env.stdout_of(&["with-stem", "/path/to/file.tar.gz", "backup"]),
        "/path/to/backup.gz"
    );
    assert_eq!(
        env.stdout_of(&["with-stem", "/path/to/.file", ".other"]),
        "/path/to/.other"
    );
}

// ============================================================================
// with-suffix / with-suffixes
// ============================================================================

#[test]
fn test_with_suffix() {
    let env = TestEnv::new();
    assert_eq!(
        env.stdout_of(&["with-suffix", "/path/to/file.tar.gz", ".zip"]),
        "/path/to/file.tar.zip"
    );
    assert_eq!(
        env.stdout_of(&["with-suffix", "/path/to/file.txt", ""]),
        "/path/to/file"
    );
}

#[test]
fn test_with_suffixes() {
    let env = TestEnv::new();
    assert_eq!(
        env.stdout_of(&["with-suffixes", "/path/to/file.txt.tar.gz", ".md", ".zip"]),
        "/path/to/file.md.zip"
    );
    assert_eq!(
        env.stdout_of(&["with-suffixes", "/path/to/.file.tar.gz"]),
        "/path/to/.file"
    );
}

#[test]
fn test_with_suffixes_json_array() {
    let env = TestEnv::new();
    assert_eq!(
        env.stdout_of(&["with-suffixes", "/path/to/file.sql", "--json", r#"[".sql", ".j2"]"#]),
        "/path/to/file.sql.j2"
    );
}

// ============================================================================
// relative-to / uri
// ============================================================================

#[test]
fn test_relative_to() {
    let env = TestEnv::new();
    assert_eq!(
        env.stdout_of(&["relative-to", "/usr/local/etc", "/usr"]),
        "local/etc"
    );
    assert_eq!(env.stdout_of(&["relative-to", "/usr", "/usr"]), ".");
}

#[test]
fn test_relative_to_string_prefix_mode() {
    let env = TestEnv::new();
    assert_eq!(
        env.stdout_of(&[
            "relative-to",
            "/usr/local-old/bin",
            "/usr/local",
            "--mode",
            "string-prefix"
        ]),
        "-old/bin"
    );
}

#[test]
fn test_relative_to_invalid_mode() {
    let env = TestEnv::new();
    env.command()
        .args(["relative-to", "/a/b", "/a", "--mode", "fuzzy"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid relative mode"));
}

#[test]
fn test_uri() {
    let env = TestEnv::new();
    assert_eq!(
        env.stdout_of(&["uri", "/path/to/file.txt"]),
        "file:///path/to/file.txt"
    );

    let value = env.json_of(&["uri", "/srv"]);
    assert_eq!(value["uri"], "file:///srv");
}

#[test]
fn test_uri_relative_warns() {
    let env = TestEnv::new();
    env.command()
        .args(["uri", "docs/index.md"])
        .assert()
        .success()
        .stdout("file://docs/index.md\n")
        .stderr(predicate::str::contains("WARN"));
}
