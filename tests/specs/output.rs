//! Behavioral specs for stdout output.
//!
//! Reference: `-o text|json`, NO_COLOR, COLOR

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Text output names the check, status, message, and report path
#[test]
fn text_output_on_failure() {
    let temp = Project::with_revisions(
        r#"{"timeout": 5, "targets": []}"#,
        r#"{"timeout": 10, "targets": []}"#,
    );

    changes()
        .pwd(temp.path())
        .args(&["--old", "old.json"])
        .env("NO_COLOR", "1")
        .fails()
        .stdout_eq(
            "changes: FAIL\n  config.prod.json: Changes outside of \"targets\" or no changes detected.\n    - timeout : 5\n    + timeout : 10\n  report: log.md\n",
        );
}

/// > NO_COLOR disables ANSI escapes
#[test]
fn no_color_disables_color() {
    let temp = Project::with_revisions(r#"{"targets": []}"#, r#"{"targets": [1]}"#);

    changes()
        .pwd(temp.path())
        .args(&["--old", "old.json"])
        .env("NO_COLOR", "1")
        .env("COLOR", "1")
        .passes()
        .stdout_lacks("\x1b[");
}

/// > COLOR forces ANSI escapes even when stdout is not a terminal
#[test]
fn color_forces_color() {
    let temp = Project::with_revisions(r#"{"targets": []}"#, r#"{"targets": [1]}"#);

    changes()
        .pwd(temp.path())
        .args(&["--old", "old.json"])
        .env("COLOR", "1")
        .passes()
        .stdout_has("\x1b[");
}

/// > JSON output carries the verdict and envelope fields
#[test]
fn json_output_for_changes() {
    let temp = Project::with_revisions(
        r#"{"targets": [{"name": "a"}]}"#,
        r#"{"targets": [{"name": "b"}]}"#,
    );

    let json = changes()
        .pwd(temp.path())
        .args(&["--old", "old.json"])
        .json()
        .fails();

    assert_eq!(json["check"], "changes");
    assert_eq!(json["passed"], false);
    assert_eq!(json["log"], "log.md");
    assert_eq!(json["result"]["status"], "ERROR");
    assert_eq!(
        json["result"]["disallowed_target_changes"][0]["path"],
        serde_json::json!(["targets", 0, "name"])
    );
}

/// > JSON output for the schema guard lists violations
#[test]
fn json_output_for_schema() {
    let temp = Project::empty();
    let schema_path = fixture("schema/targets.schema.json");
    let data_path = fixture("schema/missing-name.json");

    let json = schema()
        .pwd(temp.path())
        .args(&[schema_path.to_str().unwrap(), data_path.to_str().unwrap()])
        .json()
        .fails();

    assert_eq!(json["check"], "schema");
    assert_eq!(json["result"]["violations"][0]["instance_path"], "/targets/1");
}
