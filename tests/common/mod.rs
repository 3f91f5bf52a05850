//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the test project
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Run jarforge with the given arguments inside the project
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_jarforge"))
            .current_dir(self.path())
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute jarforge")
    }

    /// Install the fake compiler under `tools/` and return its absolute path
    #[cfg(unix)]
    pub fn install_fake_compiler(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        self.create_file("tools/fakejavac", FAKE_COMPILER);
        let path = self.path().join("tools/fakejavac");
        let mut perms = std::fs::metadata(&path)
            .expect("Failed to stat fake compiler")
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).expect("Failed to make fake compiler executable");
        path
    }

    /// Lay out the sample application with two plugins, compiled by the fake compiler
    #[cfg(unix)]
    pub fn sample_application(&self) {
        let compiler = self.install_fake_compiler();
        self.create_file(
            "jarforge.toml",
            &SAMPLE_PROJECT.replace("{compiler}", &compiler.display().to_string()),
        );
        self.create_file(".classpath", SAMPLE_CLASSPATH);
        self.create_file("MANIFEST.MF", "Main-Class: app.core.Launcher\n");
        self.create_file("src/app/core/Launcher.java", "class Launcher {}");
        self.create_file("src/app/core/Util.java", "class Util {}");
        self.create_file("src/plug/alpha/AlphaPlugin.java", "class AlphaPlugin {}");
        self.create_file("src/plug/beta/BetaPlugin.java", "class BetaPlugin {}");
        self.create_file("res/lib/x.jar", "library");
        self.create_file("res/images/logo.png", "png");
        self.create_file("plugin/README", "plugin support");
        self.create_file("changelog.txt", "0.1: first");
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Stand-in for javac.
///
/// Writes a `.class` file next to the entry-point source, logs its
/// arguments to `compiler.log` beside the script and fails when the
/// source contains `BROKEN`.
pub const FAKE_COMPILER: &str = r#"#!/bin/sh
log="$(dirname "$0")/compiler.log"
echo "$@" >> "$log"
for arg in "$@"; do
    last="$arg"
done
if grep -q BROKEN "$last"; then
    echo "$last:1: error: cannot find symbol" >&2
    exit 1
fi
touch "${last%.java}.class"
"#;

/// Sample project file; `{compiler}` is replaced with the fake compiler path
pub const SAMPLE_PROJECT: &str = r#"
plugins = ["plug.alpha.AlphaPlugin", "plug.beta.BetaPlugin"]

[project]
name = "Sample"

[paths]
dist = "Sample"
docs = ["changelog.txt"]

[compiler]
command = "{compiler}"
separator = ":"

[application]
main = "app.core.Launcher"
archive = "app.jar"
manifest = "MANIFEST.MF"
"#;

/// Sample descriptor with one library among other entry kinds
pub const SAMPLE_CLASSPATH: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<classpath>
	<classpathentry kind="src" path="src"/>
	<classpathentry kind="con" path="org.eclipse.jdt.launching.JRE_CONTAINER"/>
	<classpathentry kind="lib" path="res/lib/x.jar"/>
	<classpathentry kind="output" path="bin"/>
</classpath>
"#;
