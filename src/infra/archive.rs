//! Jar archive writing
//!
//! Writes jar files directly with the `zip` crate instead of shelling out to
//! the `jar` tool. Entry order and timestamps are fixed so identical inputs
//! produce identical archives.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

use crate::error::PackageError;

/// Directory holding the manifest inside a jar
pub const META_INF_DIR: &str = "META-INF/";

/// Manifest entry name inside a jar
pub const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";

/// Write a jar at `output` containing `manifest` and every file below
/// `base/member_dir`.
///
/// Entry names are relative to `base` and use `/` separators, so a member
/// directory of `a/b/` yields entries `a/b/`, `a/b/C.class`, and so on.
/// Returns the entry names in the order written.
pub fn write_jar(
    output: &Path,
    base: &Path,
    member_dir: &str,
    manifest: &str,
) -> Result<Vec<String>, PackageError> {
    let write_err = |e: &dyn std::fmt::Display| PackageError::Write {
        path: output.to_path_buf(),
        error: e.to_string(),
    };

    let members = collect_members(base, member_dir, output)?;

    let file = File::create(output).map_err(|e| write_err(&e))?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut written = Vec::with_capacity(members.len() + 2);

    zip.add_directory(META_INF_DIR, options)
        .map_err(|e| write_err(&e))?;
    written.push(META_INF_DIR.to_string());
    zip.start_file(MANIFEST_ENTRY, options)
        .map_err(|e| write_err(&e))?;
    zip.write_all(manifest.as_bytes())
        .map_err(|e| write_err(&e))?;
    written.push(MANIFEST_ENTRY.to_string());

    for (name, path) in members {
        match path {
            None => {
                zip.add_directory(name.as_str(), options)
                    .map_err(|e| write_err(&e))?;
            }
            Some(path) => {
                let mut content = Vec::new();
                File::open(&path)
                    .and_then(|mut f| f.read_to_end(&mut content))
                    .map_err(|e| PackageError::Write {
                        path: path.clone(),
                        error: e.to_string(),
                    })?;
                zip.start_file(name.as_str(), options)
                    .map_err(|e| write_err(&e))?;
                zip.write_all(&content).map_err(|e| write_err(&e))?;
            }
        }
        tracing::trace!("Added {name} to {}", output.display());
        written.push(name);
    }

    let mut writer = zip.finish().map_err(|e| write_err(&e))?;
    writer.flush().map_err(|e| write_err(&e))?;

    Ok(written)
}

/// Enumerate the member tree as `(entry name, file path)` pairs.
///
/// Directories carry `None` and end with `/`.
fn collect_members(
    base: &Path,
    member_dir: &str,
    output: &Path,
) -> Result<Vec<(String, Option<PathBuf>)>, PackageError> {
    let root = base.join(member_dir.trim_end_matches('/'));
    if !root.is_dir() {
        return Err(PackageError::MissingMemberDir {
            archive: output
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: root,
        });
    }

    let mut members = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.map_err(|e| PackageError::Write {
            path: e.path().unwrap_or(&root).to_path_buf(),
            error: e.to_string(),
        })?;
        let Ok(relative) = entry.path().strip_prefix(base) else {
            continue;
        };
        let mut name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if entry.file_type().is_dir() {
            name.push('/');
            members.push((name, None));
        } else {
            members.push((name, Some(entry.path().to_path_buf())));
        }
    }

    Ok(members)
}

/// List the entry names of an existing archive, in stored order
pub fn list_entries(path: &Path) -> Result<Vec<String>, PackageError> {
    let read_err = |e: &dyn std::fmt::Display| PackageError::Write {
        path: path.to_path_buf(),
        error: e.to_string(),
    };
    let file = File::open(path).map_err(|e| read_err(&e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| read_err(&e))?;

    let mut names = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(|e| read_err(&e))?;
        names.push(entry.name().to_string());
    }
    Ok(names)
}

/// Read a single entry of an existing archive as text
pub fn read_entry(path: &Path, name: &str) -> Result<String, PackageError> {
    let read_err = |e: &dyn std::fmt::Display| PackageError::Write {
        path: path.to_path_buf(),
        error: e.to_string(),
    };
    let file = File::open(path).map_err(|e| read_err(&e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| read_err(&e))?;
    let mut entry = archive.by_name(name).map_err(|e| read_err(&e))?;
    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .map_err(|e| read_err(&e))?;
    Ok(content)
}
