//! Build command implementation
//!
//! Implements `jarforge build` to compile the application and its plugins,
//! package each into a jar and assemble the distribution.

use std::path::Path;

use anyhow::{Context, Result};
use indicatif::ProgressBar;

use crate::cli::commands::load_project;
use crate::cli::output::{create_spinner, print_detail, print_line, print_success};
use crate::core::builder::{build_project, BuildObserver, BuildOrchestrator, BuildReport};
use crate::core::plugin::ClassId;
use crate::error::Stage;

/// Prints stage progress and shows a spinner per entry point
#[derive(Default)]
struct ProgressObserver {
    spinner: Option<ProgressBar>,
}

impl ProgressObserver {
    fn clear_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl BuildObserver for ProgressObserver {
    fn stage_started(&mut self, stage: Stage) {
        self.clear_spinner();
        print_line(&format!("{stage}..."));
    }

    fn compiling(&mut self, entry: &ClassId) {
        self.spinner = Some(create_spinner(&format!("Compiling {entry}")));
    }

    fn compiled(&mut self, entry: &ClassId) {
        self.clear_spinner();
        print_success(&format!("Compiled {entry}"));
    }
}

/// Execute the build command
pub fn execute(project_dir: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        return print_plan(project_dir);
    }

    let mut observer = ProgressObserver::default();
    let result = build_project(project_dir, &mut observer);
    observer.clear_spinner();
    let report = result.with_context(|| "Build failed")?;

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &BuildReport) {
    for (archive, entries) in &report.archives {
        print_success(&format!("Packaged {archive} ({} entries)", entries.len()));
    }
    print_detail(&format!(
        "Copied {} resource files and {} plugin support files",
        report.layout.resource_files, report.layout.plugin_files
    ));
    for removed in &report.layout.removed {
        print_detail(&format!("Removed transient {removed}/"));
    }
    print_success(&format!(
        "Build complete. Location: {}",
        report.layout.dist.display()
    ));
}

fn print_plan(project_dir: &Path) -> Result<()> {
    let config = load_project(project_dir)?;
    config.validate()?;

    let plan = BuildOrchestrator::new(&config, project_dir).plan()?;

    println!("Build plan for {}:\n", config.project.name);
    println!("Classpath:");
    println!("  {}", plan.classpath);

    println!("\nCompile:");
    for (_, invocation) in &plan.compilations {
        println!(
            "  {} {}",
            config.compiler.command,
            invocation.args().join(" ")
        );
    }

    println!("\nPackage:");
    for archive in &plan.archives {
        println!("  {archive}");
    }

    println!("\nDistribution: {}", plan.paths.dist.display());
    Ok(())
}
