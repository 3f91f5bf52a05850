//! Check command implementation
//!
//! Implements `jarforge check` to validate configuration without building.

use std::path::Path;

use anyhow::{bail, Result};

use crate::cli::commands::load_project;
use crate::cli::output::{is_quiet, status};
use crate::core::check;

/// Execute the check command
pub fn execute(project_dir: &Path) -> Result<()> {
    let config = load_project(project_dir)?;
    tracing::info!("Checking project: {}", config.project.name);

    let result = check::check(project_dir, &config);

    if !is_quiet() {
        print_report(&config.compiler.command, &result);
    }

    if !result.is_valid() {
        bail!("Project check failed");
    }
    Ok(())
}

fn print_report(compiler: &str, result: &check::CheckResult) {
    println!("Checking project configuration...\n");

    if result.config_errors.is_empty() {
        println!("{} Configuration is valid", status::SUCCESS);
    } else {
        println!("{} Configuration has errors", status::ERROR);
        for error in &result.config_errors {
            println!("  - {error}");
        }
    }

    match &result.classpath_error {
        None => println!(
            "{} Classpath has {} libraries",
            status::SUCCESS,
            result.libraries.len()
        ),
        Some(error) => println!("{} {error}", status::ERROR),
    }

    if result.missing_paths.is_empty() {
        println!("{} All input paths exist", status::SUCCESS);
    } else {
        println!("{} Missing input paths", status::ERROR);
        for path in &result.missing_paths {
            println!("  - {path}");
        }
    }

    if result.compiler_available {
        println!("{} Compiler '{compiler}' is available", status::SUCCESS);
    } else {
        println!("{} Compiler '{compiler}' not found in PATH", status::ERROR);
    }

    if !result.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &result.warnings {
            println!("  {} {warning}", status::WARNING);
        }
    }

    println!("\nEntry points that would be compiled:");
    for entry in &result.entry_points {
        println!("  • {entry}");
    }

    println!("\nArchives that would be written:");
    for archive in &result.archives {
        println!("  • {archive}");
    }
}
