//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;
pub mod classpath;
pub mod clean;
pub mod init;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::core::project::ProjectConfig;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new jarforge project
    Init {
        /// Project name (defaults to the directory name)
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing jarforge.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Compile, package and assemble the distribution
    Build {
        /// Print the build plan without running it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the classpath built from the descriptor
    Classpath,

    /// Validate configuration without building
    Check,

    /// Remove build artifacts
    Clean,
}

impl Commands {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        match self {
            Self::Init { name, force } => init::execute(&current_dir, name, force),
            Self::Build { dry_run } => build::execute(&current_dir, dry_run),
            Self::Classpath => classpath::execute(&current_dir),
            Self::Check => check::execute(&current_dir),
            Self::Clean => clean::execute(&current_dir),
        }
    }
}

/// Load jarforge.toml from a project directory
pub(crate) fn load_project(project_dir: &Path) -> Result<ProjectConfig> {
    let config = ProjectConfig::load(project_dir).with_context(|| {
        format!("Failed to load project from {}", project_dir.display())
    })?;
    tracing::debug!("Loaded project: {}", config.project.name);
    Ok(config)
}
