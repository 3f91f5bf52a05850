//! Packaging driver
//!
//! Plans one archive for the application and one per plugin, then writes
//! them into the build tree. Each plan entry also renders as the equivalent
//! `jar` tool instruction, which `build --dry-run` prints.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::defaults::DEFAULT_ARCHIVE_MANIFEST;
use crate::core::project::ProjectConfig;
use crate::error::PackageError;
use crate::infra::archive;

/// One archive to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSpec {
    /// Archive file name, written to the build root
    pub archive: String,
    /// Member directory relative to the build root, with a trailing `/`
    pub member_dir: String,
    /// Manifest merged into the archive, if any
    pub manifest: Option<PathBuf>,
    /// Whether this is the application archive
    pub is_application: bool,
}

impl fmt::Display for ArchiveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.manifest {
            Some(manifest) => {
                let name = manifest
                    .file_name()
                    .map_or_else(|| manifest.display().to_string(), |n| n.to_string_lossy().into_owned());
                write!(f, "jar cmf {name} {} {}", self.archive, self.member_dir)
            }
            None => write!(f, "jar cf {} {}", self.archive, self.member_dir),
        }
    }
}

/// Result of writing one archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    /// Archive file name
    pub archive: String,
    /// Path of the written archive
    pub path: PathBuf,
    /// Entry names in stored order
    pub entries: Vec<String>,
}

/// Plan all archives: the application first, then plugins in list order
pub fn plan_archives(config: &ProjectConfig, project_dir: &Path) -> Vec<ArchiveSpec> {
    let application = ArchiveSpec {
        archive: config.application.archive.clone(),
        member_dir: config.application.member_dir(),
        manifest: config
            .application
            .manifest
            .as_ref()
            .map(|m| project_dir.join(m)),
        is_application: true,
    };

    std::iter::once(application)
        .chain(config.plugins.iter().map(|plugin| ArchiveSpec {
            archive: plugin.archive_name(),
            member_dir: plugin.package_dir(),
            manifest: None,
            is_application: false,
        }))
        .collect()
}

/// Manifest text for an archive.
///
/// A configured manifest gets `Manifest-Version: 1.0` prepended when it
/// lacks one and is always terminated by a blank line.
fn manifest_text(spec: &ArchiveSpec) -> Result<String, PackageError> {
    let Some(path) = &spec.manifest else {
        return Ok(DEFAULT_ARCHIVE_MANIFEST.to_string());
    };

    let content = std::fs::read_to_string(path).map_err(|_| PackageError::MissingManifest {
        archive: spec.archive.clone(),
        path: path.clone(),
    })?;

    let mut text = String::new();
    if !content
        .lines()
        .any(|line| line.trim_start().starts_with("Manifest-Version:"))
    {
        text.push_str("Manifest-Version: 1.0\r\n");
    }
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        text.push_str(line.trim_end());
        text.push_str("\r\n");
    }
    text.push_str("\r\n");
    Ok(text)
}

/// Write one archive into `build`
pub fn write_archive(spec: &ArchiveSpec, build: &Path) -> Result<ArchiveReport, PackageError> {
    let manifest = manifest_text(spec)?;
    let path = build.join(&spec.archive);
    tracing::info!("Packaging {} from {}", spec.archive, spec.member_dir);

    let entries = archive::write_jar(&path, build, &spec.member_dir, &manifest)?;
    tracing::debug!("{} holds {} entries", spec.archive, entries.len());

    Ok(ArchiveReport {
        archive: spec.archive.clone(),
        path,
        entries,
    })
}

/// Write every planned archive, stopping at the first failure
pub fn write_archives(
    specs: &[ArchiveSpec],
    build: &Path,
) -> Result<Vec<ArchiveReport>, PackageError> {
    specs.iter().map(|spec| write_archive(spec, build)).collect()
}
