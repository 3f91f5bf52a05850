//! Project initialization logic
//!
//! Writes a template jarforge.toml and makes sure the build tree is
//! ignored by git.

use std::path::{Path, PathBuf};

use crate::config::defaults::{DEFAULT_BUILD_DIR, PROJECT_FILE};
use crate::core::project::ProjectConfig;
use crate::error::{ConfigError, InitError};
use crate::infra::filesystem;

/// Marker comment for the jarforge section in .gitignore
pub const GITIGNORE_MARKER: &str = "# jarforge";

/// Options for project initialization
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Project name (directory name if unset)
    pub name: Option<String>,
    /// Overwrite an existing project file
    pub force: bool,
}

/// Result of initialization
#[derive(Debug)]
pub struct InitResult {
    /// Path to the created project file
    pub project_file: PathBuf,
    /// Project name written
    pub name: String,
    /// Whether .gitignore was created or updated
    pub gitignore_updated: bool,
}

/// Derive a project name from the directory name
pub fn derive_project_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("app")
        .to_string()
}

/// Append the build directory to existing .gitignore content if missing
pub fn append_gitignore_entries(existing: &str) -> Option<String> {
    let entry = format!("{DEFAULT_BUILD_DIR}/");
    if existing.lines().any(|line| line.trim() == entry) {
        return None;
    }
    let mut content = existing.to_string();
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&format!("{GITIGNORE_MARKER}\n{entry}\n"));
    Some(content)
}

/// Initialize a project in `path`
pub fn init_project(path: &Path, options: &InitOptions) -> Result<InitResult, InitError> {
    if !path.is_dir() {
        return Err(InitError::DirectoryNotFound {
            path: path.to_path_buf(),
        });
    }

    let project_file = path.join(PROJECT_FILE);
    if project_file.exists() && !options.force {
        return Err(InitError::AlreadyExists { path: project_file });
    }

    let name = options
        .name
        .clone()
        .unwrap_or_else(|| derive_project_name(path));
    let content = ProjectConfig::template(&name);
    ProjectConfig::from_toml(&content)
        .map_err(|source| ConfigError::Parse { source })?
        .validate()?;
    filesystem::write_file(&project_file, &content)?;

    let gitignore = path.join(".gitignore");
    let existing = if gitignore.exists() {
        filesystem::read_file(&gitignore)?
    } else {
        String::new()
    };
    let gitignore_updated = match append_gitignore_entries(&existing) {
        Some(content) => {
            filesystem::write_file(&gitignore, &content)?;
            true
        }
        None => false,
    };

    Ok(InitResult {
        project_file,
        name,
        gitignore_updated,
    })
}
