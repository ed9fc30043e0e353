//! Integration tests for `rsw init`
//!
//! - Creates a loadable .rswrc.json in an empty directory
//! - Refuses to overwrite an existing config without --force
//! - Overwrites with --force

mod common;

use common::TestProject;

#[test]
fn test_init_creates_config() {
    let project = TestProject::new();

    let output = project.run(&["init"]);

    assert!(
        output.status.success(),
        "rsw init should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let content = project.read_file(".rswrc.json");
    let json: serde_json::Value = serde_json::from_str(&content).expect("config should be JSON");
    assert_eq!(json["root"], ".");
    assert!(json["crates"].as_array().is_some_and(Vec::is_empty));
}

#[test]
fn test_init_does_not_overwrite() {
    let project = TestProject::new();
    project.write_config(r#"{"crates":["keep-me"]}"#);

    let output = project.run(&["init"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));
    assert!(project.read_file(".rswrc.json").contains("keep-me"));
}

#[test]
fn test_init_force_overwrites() {
    let project = TestProject::new();
    project.write_config(r#"{"crates":["old"]}"#);

    let output = project.run(&["init", "--force"]);

    assert!(output.status.success());
    assert!(!project.read_file(".rswrc.json").contains("old"));
}

#[test]
fn test_init_then_build_with_no_crates_succeeds() {
    let project = TestProject::new();
    #[cfg(unix)]
    project.install_tools();

    assert!(project.run(&["init"]).status.success());
    #[cfg(unix)]
    {
        let output = project.run(&[]);
        assert!(
            output.status.success(),
            "{}",
            String::from_utf8_lossy(&output.stderr)
        );
        assert!(project.calls().is_empty());
    }
}
