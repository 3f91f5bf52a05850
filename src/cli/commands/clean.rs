//! CLI implementation for `jarforge clean` command
//!
//! This module handles the CLI interface for cleaning build artifacts.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::commands::load_project;
use crate::cli::output::{print_detail, print_success};
use crate::core::clean::{clean_project, has_build_artifacts};

/// Execute the clean command
pub fn execute(path: &Path) -> Result<()> {
    let config = load_project(path)?;
    config
        .validate()
        .with_context(|| "Refusing to clean with an invalid project file")?;

    if !has_build_artifacts(path, &config) {
        print_success("Nothing to clean");
        return Ok(());
    }

    let result = clean_project(path, &config).with_context(|| "Failed to clean build artifacts")?;

    if result.removed.is_empty() {
        print_success("Nothing to clean");
    } else {
        print_success("Cleaned build artifacts");
        for dir in &result.removed {
            print_detail(&format!("Removed {dir}/"));
        }
    }

    Ok(())
}
