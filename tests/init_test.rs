//! Integration tests for `jarforge init`

mod common;

use common::TestProject;
use jarforge::core::project::ProjectConfig;

#[test]
fn test_init_creates_valid_project_file() {
    let project = TestProject::new();

    let output = project.run(&["init", "--name", "EDLed"]);
    assert!(output.status.success());

    let config = ProjectConfig::from_toml(&project.read_file("jarforge.toml")).unwrap();
    assert_eq!(config.project.name, "EDLed");
    assert!(config.validate().is_ok());
    assert!(project.read_file(".gitignore").contains("build/"));
}

#[test]
fn test_init_refuses_existing_project_without_force() {
    let project = TestProject::new();
    project.create_file("jarforge.toml", "# mine");

    let output = project.run(&["init"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));
    assert_eq!(project.read_file("jarforge.toml"), "# mine");

    let output = project.run(&["init", "--force"]);
    assert!(output.status.success());
    assert!(project.read_file("jarforge.toml").contains("[application]"));
}

#[test]
fn test_init_appends_to_gitignore_once() {
    let project = TestProject::new();
    project.create_file(".gitignore", "*.class\n");

    project.run(&["init"]);
    project.run(&["init", "--force"]);

    let gitignore = project.read_file(".gitignore");
    assert!(gitignore.starts_with("*.class\n"));
    assert_eq!(gitignore.matches("build/").count(), 1);
}
