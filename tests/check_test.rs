//! Integration tests for `jarforge check`

#![cfg(unix)]

mod common;

use common::TestProject;

#[test]
fn test_check_passes_for_complete_project() {
    let project = TestProject::new();
    project.sample_application();

    let output = project.run(&["check"]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stdout)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("plug.beta.BetaPlugin"));
    assert!(!project.file_exists("build"));
}

#[test]
fn test_check_fails_on_missing_entry_point() {
    let project = TestProject::new();
    project.sample_application();
    std::fs::remove_file(project.path().join("src/plug/alpha/AlphaPlugin.java")).unwrap();

    let output = project.run(&["check"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("AlphaPlugin.java"));
}

#[test]
fn test_check_reports_invalid_configuration() {
    let project = TestProject::new();
    project.sample_application();
    let config = project
        .read_file("jarforge.toml")
        .replace("archive = \"app.jar\"", "archive = \"app.zip\"");
    project.create_file("jarforge.toml", &config);

    let output = project.run(&["check"]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration has errors"));
    assert!(stdout.contains("app.zip"));
}
