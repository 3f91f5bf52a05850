//! Compiler invocation
//!
//! Locates the Java compiler and runs it as a blocking child process.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::CompileError;

/// Java compiler wrapper
#[derive(Debug, Clone)]
pub struct JavaCompiler {
    /// Command name or path
    command: String,
}

/// Arguments of a single compiler run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Source search path
    pub source_path: PathBuf,
    /// Joined classpath
    pub classpath: String,
    /// Output directory for class files
    pub destination: PathBuf,
    /// Extra arguments placed before the source file
    pub extra_args: Vec<String>,
    /// Entry-point source file
    pub source_file: PathBuf,
}

impl Invocation {
    /// Command-line arguments in the order the compiler receives them
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-sourcepath".to_string(),
            self.source_path.display().to_string(),
            "-classpath".to_string(),
            self.classpath.clone(),
            "-d".to_string(),
            self.destination.display().to_string(),
        ];
        args.extend(self.extra_args.iter().cloned());
        args.push(self.source_file.display().to_string());
        args
    }
}

impl JavaCompiler {
    /// Create a new compiler wrapper
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Get the compiler command
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Resolve the compiler on `PATH` (or as a direct path)
    pub fn locate(&self) -> Option<PathBuf> {
        let as_path = Path::new(&self.command);
        if as_path.components().count() > 1 {
            return as_path.is_file().then(|| as_path.to_path_buf());
        }
        which::which(&self.command).ok()
    }

    /// Run one compilation.
    ///
    /// `entry` names the entry point in error messages. A non-zero exit
    /// status is returned as [`CompileError::Failed`] with the captured
    /// stderr (or stdout when stderr is empty).
    pub fn compile(
        &self,
        entry: &str,
        invocation: &Invocation,
        working_dir: &Path,
    ) -> Result<(), CompileError> {
        let args = invocation.args();
        tracing::debug!("Running {} {}", self.command, args.join(" "));

        let output = Command::new(&self.command)
            .args(&args)
            .current_dir(working_dir)
            .output()
            .map_err(|e| CompileError::Spawn {
                compiler: self.command.clone(),
                error: e.to_string(),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            let diagnostics = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout).into_owned()
            } else {
                stderr.into_owned()
            };
            return Err(CompileError::Failed {
                entry: entry.to_string(),
                status: output.status.to_string(),
                stderr: diagnostics,
            });
        }

        if !stderr.trim().is_empty() {
            tracing::warn!("Compiler output for {entry}:\n{}", stderr.trim_end());
        }
        Ok(())
    }
}

impl Default for JavaCompiler {
    fn default() -> Self {
        Self::new(crate::config::defaults::DEFAULT_COMPILER)
    }
}
