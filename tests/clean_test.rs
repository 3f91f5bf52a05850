//! Integration tests for `jarforge clean`

mod common;

use common::TestProject;

fn setup_project() -> TestProject {
    let project = TestProject::new();
    let output = project.run(&["init"]);
    assert!(
        output.status.success(),
        "Failed to initialize project: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    project
}

#[test]
fn test_clean_removes_build_directory() {
    let project = setup_project();
    project.create_file("build/app/Main.class", "class");
    project.create_file("build/dist/app.jar", "jar");

    let output = project.run(&["clean"]);
    assert!(output.status.success());
    assert!(!project.file_exists("build"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Cleaned build artifacts"));
}

#[test]
fn test_clean_leaves_sources_alone() {
    let project = setup_project();
    project.create_file("src/app/Main.java", "class Main {}");
    project.create_dir("build");

    project.run(&["clean"]);
    assert!(project.file_exists("src/app/Main.java"));
    assert!(project.file_exists("jarforge.toml"));
}

#[test]
fn test_clean_with_nothing_to_clean() {
    let project = setup_project();

    let output = project.run(&["clean"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Nothing to clean"));
}

#[test]
fn test_clean_requires_project_file() {
    let project = TestProject::new();
    project.create_dir("build");

    let output = project.run(&["clean"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(project.file_exists("build"));
}

#[test]
fn test_clean_never_removes_project_directory() {
    for build in ["", ".", "src"] {
        let project = setup_project();
        project.create_file("src/app/Main.java", "class Main {}");
        let config = project
            .read_file("jarforge.toml")
            .replace("build = \"build\"", &format!("build = \"{build}\""));
        project.create_file("jarforge.toml", &config);

        let output = project.run(&["clean"]);

        assert_eq!(output.status.code(), Some(1), "{build}");
        assert!(project.file_exists("jarforge.toml"), "{build}");
        assert!(project.file_exists("src/app/Main.java"), "{build}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("paths.build"), "{build}: {stderr}");
    }
}
