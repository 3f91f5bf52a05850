//! Error types for jarforge
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Dependency descriptor (`.classpath`) errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// Descriptor file could not be read
    #[error("Failed to read descriptor '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// A classpath entry line could not be parsed
    #[error("Malformed classpath entry on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Classpath formatting errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClasspathError {
    /// No library entries were found
    #[error("No library entries found; refusing to build with an empty classpath")]
    Empty,
}

/// Project configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Project file not found
    #[error("Project file not found at '{path}'. Run 'jarforge init' to create one.")]
    NotFound { path: PathBuf },

    /// Project file could not be read
    #[error("Failed to read project file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Project file could not be parsed
    #[error("Failed to parse project file: {source}")]
    Parse { source: toml::de::Error },

    /// Environment substitution failed
    #[error("Failed to substitute environment variables: {0}")]
    Substitution(String),

    /// Invalid plugin or class identifier
    #[error("Invalid class identifier '{id}': {reason}")]
    InvalidIdentifier { id: String, reason: String },

    /// One or more validation problems
    #[error("Invalid project configuration:\n  - {}", problems.join("\n  - "))]
    Invalid { problems: Vec<String> },
}

/// Project initialization errors
#[derive(Error, Debug)]
pub enum InitError {
    /// Directory not found
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Project file already present
    #[error("{path} already exists. Use --force to overwrite it.")]
    AlreadyExists { path: PathBuf },

    /// Generated project file failed to parse or validate
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Filesystem error while writing files
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Compilation errors
#[derive(Error, Debug)]
pub enum CompileError {
    /// Entry-point source file missing from the staged tree
    #[error("Entry point '{entry}' not found at '{path}'")]
    MissingEntryPoint { entry: String, path: PathBuf },

    /// Compiler could not be started
    #[error("Failed to run compiler '{compiler}': {error}")]
    Spawn { compiler: String, error: String },

    /// Compiler exited with a failure status
    #[error("Compilation of '{entry}' failed ({status}):\n{stderr}")]
    Failed {
        entry: String,
        status: String,
        stderr: String,
    },
}

/// Archive packaging errors
#[derive(Error, Debug)]
pub enum PackageError {
    /// Member directory missing from the build tree
    #[error("Archive '{archive}' member directory not found: {path}")]
    MissingMemberDir { archive: String, path: PathBuf },

    /// Manifest file missing
    #[error("Manifest for '{archive}' not found: {path}")]
    MissingManifest { archive: String, path: PathBuf },

    /// Archive could not be written
    #[error("Failed to write archive '{path}': {error}")]
    Write { path: PathBuf, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to list directory
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to copy
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to move
    #[error("Failed to move '{from}' to '{to}': {error}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Expected path does not exist
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },
}

/// Build pipeline stages, used to label failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Removing and recreating the build directory
    Clean,
    /// Copying sources into the build directory
    StageSources,
    /// Reading library entries from the descriptor
    ExtractClasspath,
    /// Joining library entries into a classpath
    FormatClasspath,
    /// Running the compiler
    Compile,
    /// Writing archives
    Package,
    /// Building the distribution tree
    AssembleLayout,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clean => write!(f, "Clean"),
            Self::StageSources => write!(f, "Stage sources"),
            Self::ExtractClasspath => write!(f, "Classpath extraction"),
            Self::FormatClasspath => write!(f, "Classpath formatting"),
            Self::Compile => write!(f, "Compilation"),
            Self::Package => write!(f, "Packaging"),
            Self::AssembleLayout => write!(f, "Layout assembly"),
        }
    }
}

/// Error raised by a pipeline stage
#[derive(Error, Debug)]
pub enum BuildError {
    /// Configuration rejected before anything is deleted
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Descriptor error
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Classpath error
    #[error(transparent)]
    Classpath(#[from] ClasspathError),

    /// Compile error
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Package error
    #[error(transparent)]
    Package(#[from] PackageError),

    /// Filesystem error
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Stage-labeled pipeline failure
#[derive(Error, Debug)]
#[error("{stage} failed: {source}")]
pub struct PipelineError {
    /// Stage that failed
    pub stage: Stage,
    /// Underlying cause
    #[source]
    pub source: BuildError,
}

impl PipelineError {
    /// Attach a stage label to a stage error
    pub fn new(stage: Stage, source: impl Into<BuildError>) -> Self {
        Self {
            stage,
            source: source.into(),
        }
    }
}

/// Top-level jarforge error type
#[derive(Error, Debug)]
pub enum JarforgeError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline error
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Init error
    #[error("Init error: {0}")]
    Init(#[from] InitError),

    /// Filesystem error
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}
