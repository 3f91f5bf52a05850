//! CLI implementation for `jarforge init` command
//!
//! This module handles the CLI interface for project initialization.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{print_detail, print_success};
use crate::config::defaults::PROJECT_FILE;
use crate::core::init::{init_project, InitOptions};

/// Execute the init command
pub fn execute(path: &Path, name: Option<String>, force: bool) -> Result<()> {
    let options = InitOptions { name, force };
    let result = init_project(path, &options).with_context(|| "Failed to initialize project")?;

    print_success(&format!(
        "Initialized jarforge project '{}' in {}",
        result.name,
        path.display()
    ));
    print_detail(&format!("Created {PROJECT_FILE}"));
    if result.gitignore_updated {
        print_detail("Updated .gitignore");
    }
    Ok(())
}
