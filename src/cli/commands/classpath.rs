//! Classpath command implementation
//!
//! Implements `jarforge classpath`, printing the classpath the compiler
//! would receive. The classpath goes to stdout even with `--quiet` so it
//! can be captured by scripts.

use std::path::Path;

use anyhow::Result;

use crate::cli::commands::load_project;
use crate::cli::output::print_detail;
use crate::core::builder::BuildOrchestrator;

/// Execute the classpath command
pub fn execute(project_dir: &Path) -> Result<()> {
    let config = load_project(project_dir)?;
    let (libraries, joined) = BuildOrchestrator::new(&config, project_dir).classpath()?;

    for lib in &libraries {
        print_detail(lib);
    }
    println!("{joined}");
    Ok(())
}
