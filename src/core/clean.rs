//! Clean logic
//!
//! Removes the build tree, including the distribution inside it.

use std::path::Path;

use crate::core::project::ProjectConfig;
use crate::error::JarforgeError;
use crate::infra::filesystem;

/// Result of clean operation
#[derive(Debug, Default)]
pub struct CleanResult {
    /// Directories that were removed
    pub removed: Vec<String>,
    /// Directories that didn't exist (skipped)
    pub skipped: Vec<String>,
}

/// Remove the configured build directory if it exists.
///
/// The configuration is validated first so that a build directory naming
/// the project root or one of its inputs is never deleted.
pub fn clean_project(
    project_path: &Path,
    config: &ProjectConfig,
) -> Result<CleanResult, JarforgeError> {
    config.validate()?;
    let mut result = CleanResult::default();
    let build_dir = project_path.join(&config.paths.build);
    let name = config.paths.build.display().to_string();

    if build_dir.exists() {
        filesystem::remove_dir_all(&build_dir)?;
        result.removed.push(name);
    } else {
        result.skipped.push(name);
    }

    Ok(result)
}

/// Check if a project has any build artifacts
pub fn has_build_artifacts(project_path: &Path, config: &ProjectConfig) -> bool {
    project_path.join(&config.paths.build).exists()
}
