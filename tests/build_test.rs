//! Integration tests for `jarforge build`
//!
//! Drives the compiled binary against a sample project that uses a fake
//! compiler script, so these tests only run on Unix.

#![cfg(unix)]

mod common;

use assert_fs::prelude::*;
use common::TestProject;
use jarforge::infra::archive::{list_entries, read_entry, MANIFEST_ENTRY};
use predicates::prelude::*;

fn build_ok(project: &TestProject) -> String {
    let output = project.run(&["build"]);
    assert!(
        output.status.success(),
        "build failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_build_assembles_distribution() {
    let project = TestProject::new();
    project.sample_application();

    let stdout = build_ok(&project);
    assert!(stdout.contains("Build complete. Location:"));

    let dist = assert_fs::fixture::ChildPath::new(project.path().join("build/Sample"));
    dist.child("app.jar").assert(predicate::path::is_file());
    dist.child("plugin/plug.alpha.AlphaPlugin.jar")
        .assert(predicate::path::is_file());
    dist.child("plugin/plug.beta.BetaPlugin.jar")
        .assert(predicate::path::is_file());
    dist.child("plugin/README").assert("plugin support");
    dist.child("res/lib/x.jar").assert("library");
    dist.child("res/images/logo.png").assert(predicate::path::is_file());
    dist.child("changelog.txt").assert("0.1: first");

    // Staged source and class trees are transient
    assert!(!project.file_exists("build/app"));
    assert!(!project.file_exists("build/plug"));
    assert!(!project.file_exists("build/app.jar"));
}

#[test]
fn test_archive_contents_follow_package_directories() {
    let project = TestProject::new();
    project.sample_application();
    build_ok(&project);

    let dist = project.path().join("build/Sample");
    let app = list_entries(&dist.join("app.jar")).unwrap();
    assert_eq!(app[0], "META-INF/");
    assert_eq!(app[1], MANIFEST_ENTRY);
    assert!(app.contains(&"app/core/Launcher.class".to_string()));
    assert!(app.iter().all(|e| e.starts_with("META-INF/") || e.starts_with("app/core/")));

    let alpha = list_entries(&dist.join("plugin/plug.alpha.AlphaPlugin.jar")).unwrap();
    assert!(alpha.contains(&"plug/alpha/AlphaPlugin.class".to_string()));
    assert!(!alpha.iter().any(|e| e.starts_with("plug/beta/")));

    let manifest = read_entry(&dist.join("app.jar"), MANIFEST_ENTRY).unwrap();
    assert!(manifest.starts_with("Manifest-Version: 1.0\r\n"));
    assert!(manifest.contains("Main-Class: app.core.Launcher\r\n"));
}

#[test]
fn test_compiler_receives_classpath_for_every_entry_point() {
    let project = TestProject::new();
    project.sample_application();
    build_ok(&project);

    let log = project.read_file("tools/compiler.log");
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert!(line.contains("-classpath res/lib/x.jar"), "{line}");
    }
    assert!(lines[0].ends_with("app/core/Launcher.java"));
    assert!(lines[1].ends_with("plug/alpha/AlphaPlugin.java"));
    assert!(lines[2].ends_with("plug/beta/BetaPlugin.java"));
}

#[test]
fn test_rebuild_produces_identical_archives() {
    let project = TestProject::new();
    project.sample_application();

    build_ok(&project);
    let first = std::fs::read(project.path().join("build/Sample/app.jar")).unwrap();
    project.create_file("build/stale.txt", "left over");

    build_ok(&project);
    let second = std::fs::read(project.path().join("build/Sample/app.jar")).unwrap();

    assert_eq!(first, second);
    assert!(!project.file_exists("build/stale.txt"));
}

#[test]
fn test_compile_failure_exits_with_stage() {
    let project = TestProject::new();
    project.sample_application();
    project.create_file("src/plug/beta/BetaPlugin.java", "BROKEN");

    let output = project.run(&["build"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Compilation failed"), "{stderr}");
    assert!(stderr.contains("plug.beta.BetaPlugin"), "{stderr}");
    assert!(stderr.contains("cannot find symbol"), "{stderr}");
    assert!(!project.file_exists("build/Sample"));
}

#[test]
fn test_empty_classpath_aborts_before_compiling() {
    let project = TestProject::new();
    project.sample_application();
    project.create_file(
        ".classpath",
        "<classpath>\n\t<classpathentry kind=\"src\" path=\"src\"/>\n</classpath>\n",
    );

    let output = project.run(&["build"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Classpath formatting failed"), "{stderr}");
    assert!(!project.file_exists("tools/compiler.log"));
}

#[test]
fn test_malformed_entry_aborts_by_default() {
    let project = TestProject::new();
    project.sample_application();
    project.create_file(
        ".classpath",
        "<classpath>\n\t<classpathentry path=\"res/lib/x.jar\"/>\n</classpath>\n",
    );

    let output = project.run(&["build"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "{stderr}");
}

#[test]
fn test_dry_run_touches_nothing() {
    let project = TestProject::new();
    project.sample_application();

    let output = project.run(&["build", "--dry-run"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("res/lib/x.jar"));
    assert!(stdout.contains("jar cmf"));
    assert!(stdout.contains("plug.alpha.AlphaPlugin.jar plug/alpha/"));
    assert!(!project.file_exists("build"));
    assert!(!project.file_exists("tools/compiler.log"));
}

#[test]
fn test_quiet_build_prints_nothing() {
    let project = TestProject::new();
    project.sample_application();

    let output = project.run(&["-q", "build"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_build_dir_at_project_root_is_rejected() {
    let project = TestProject::new();
    project.sample_application();
    let config = project
        .read_file("jarforge.toml")
        .replace("[paths]\n", "[paths]\nbuild = \".\"\n");
    project.create_file("jarforge.toml", &config);

    let output = project.run(&["build"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(project.file_exists("jarforge.toml"));
    assert!(project.file_exists(".classpath"));
    assert!(project.file_exists("src/app/core/Launcher.java"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("paths.build"), "{stderr}");
}

#[test]
fn test_build_without_project_file_fails() {
    let project = TestProject::new();

    let output = project.run(&["build"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("jarforge init"), "{stderr}");
}
