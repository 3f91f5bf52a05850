//! Filesystem operations
//!
//! Handles file and directory operations. Every error names the path
//! involved.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a directory and all its contents
pub fn remove_dir_all(path: &Path) -> Result<(), FilesystemError> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}

/// Remove a file or a directory tree, whichever `path` is
pub fn remove_path(path: &Path) -> Result<(), FilesystemError> {
    if path.is_dir() {
        remove_dir_all(path)
    } else if path.exists() {
        std::fs::remove_file(path).map_err(|e| FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Write content to a file
pub fn write_file(path: &Path, content: &str) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Copy a single file, creating the destination's parent directories
pub fn copy_file(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    if !from.is_file() {
        return Err(FilesystemError::NotFound {
            path: from.to_path_buf(),
        });
    }
    if let Some(parent) = to.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(from, to).map_err(|e| FilesystemError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error: e.to_string(),
    })?;
    Ok(())
}

/// Recursively copy the contents of `from` into `to`.
///
/// Existing files in `to` are overwritten. Returns the number of files copied.
pub fn copy_dir_contents(from: &Path, to: &Path) -> Result<usize, FilesystemError> {
    if !from.is_dir() {
        return Err(FilesystemError::NotFound {
            path: from.to_path_buf(),
        });
    }
    create_dir_all(to)?;

    let mut copied = 0;
    for entry in WalkDir::new(from).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| FilesystemError::ReadDir {
            path: e.path().unwrap_or(from).to_path_buf(),
            error: e.to_string(),
        })?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| FilesystemError::ReadDir {
                path: entry.path().to_path_buf(),
                error: e.to_string(),
            })?;
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Move a file, replacing any existing destination.
///
/// Falls back to copy-and-delete when a rename is not possible, e.g. across
/// filesystems.
pub fn move_file(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    if !from.is_file() {
        return Err(FilesystemError::NotFound {
            path: from.to_path_buf(),
        });
    }
    if let Some(parent) = to.parent() {
        create_dir_all(parent)?;
    }
    if to.exists() {
        remove_path(to)?;
    }
    if std::fs::rename(from, to).is_ok() {
        return Ok(());
    }

    tracing::debug!("Rename failed, copying {} instead", from.display());
    std::fs::copy(from, to).map_err(|e| FilesystemError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error: e.to_string(),
    })?;
    std::fs::remove_file(from).map_err(|e| FilesystemError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error: e.to_string(),
    })
}

/// Names of the immediate children of a directory, sorted
pub fn list_dir_names(path: &Path) -> Result<Vec<String>, FilesystemError> {
    let read_err = |e: std::io::Error| FilesystemError::ReadDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    };
    let mut names = Vec::new();
    for entry in std::fs::read_dir(path).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}
