//! Distribution layout
//!
//! Builds the final distribution tree inside the build directory once all
//! archives exist:
//!
//! ```text
//! build/<dist>/
//! ├── <application>.jar
//! ├── <docs...>
//! ├── plugin/   plugin support files + plugin archives
//! └── res/      resource tree
//! ```

use std::path::{Path, PathBuf};

use crate::config::defaults::{DIST_PLUGIN_DIR, DIST_RESOURCE_DIR};
use crate::core::package::ArchiveReport;
use crate::core::project::ResolvedPaths;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// What the layout step produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutReport {
    /// Distribution root
    pub dist: PathBuf,
    /// Final archive locations, application first
    pub archives: Vec<PathBuf>,
    /// Number of resource files copied
    pub resource_files: usize,
    /// Number of plugin support files copied
    pub plugin_files: usize,
    /// Transient trees removed from the build directory
    pub removed: Vec<String>,
}

/// Assemble the distribution tree.
///
/// `archives` must list the application archive first. `staged` names the
/// top-level source entries staged into the build tree; they are deleted
/// after the archives are moved.
pub fn assemble(
    paths: &ResolvedPaths,
    archives: &[ArchiveReport],
    staged: &[String],
) -> Result<LayoutReport, FilesystemError> {
    let dist = &paths.dist;
    let plugin_dir = dist.join(DIST_PLUGIN_DIR);
    let resource_dir = dist.join(DIST_RESOURCE_DIR);

    filesystem::create_dir_all(dist)?;
    filesystem::create_dir_all(&plugin_dir)?;
    filesystem::create_dir_all(&resource_dir)?;

    tracing::info!("Copying resources from {}", paths.resources.display());
    let resource_files = filesystem::copy_dir_contents(&paths.resources, &resource_dir)?;

    tracing::info!("Copying plugin support from {}", paths.plugin_support.display());
    let plugin_files = filesystem::copy_dir_contents(&paths.plugin_support, &plugin_dir)?;

    let mut placed = Vec::with_capacity(archives.len());
    for (index, report) in archives.iter().enumerate() {
        let target = if index == 0 {
            dist.join(&report.archive)
        } else {
            plugin_dir.join(&report.archive)
        };
        tracing::debug!("Moving {} to {}", report.path.display(), target.display());
        filesystem::move_file(&report.path, &target)?;
        placed.push(target);
    }

    let removed = remove_staged(&paths.build, dist, staged)?;

    for doc in &paths.docs {
        let Some(name) = doc.file_name() else {
            return Err(FilesystemError::NotFound { path: doc.clone() });
        };
        filesystem::copy_file(doc, &dist.join(name))?;
    }

    Ok(LayoutReport {
        dist: dist.clone(),
        archives: placed,
        resource_files,
        plugin_files,
        removed,
    })
}

/// Delete staged source/class trees from the build directory.
///
/// Never removes the distribution root itself, even if a staged entry
/// shares its name.
fn remove_staged(
    build: &Path,
    dist: &Path,
    staged: &[String],
) -> Result<Vec<String>, FilesystemError> {
    let mut removed = Vec::new();
    for name in staged {
        let path = build.join(name);
        if dist.starts_with(&path) {
            tracing::warn!("Keeping {} because it contains the distribution", path.display());
            continue;
        }
        if path.exists() {
            filesystem::remove_path(&path)?;
            removed.push(name.clone());
        }
    }
    Ok(removed)
}
