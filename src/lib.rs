//! Jarforge - build orchestrator for plugin-based Java applications
//!
//! This library turns a Java source tree, an Eclipse-style `.classpath`
//! descriptor and a `jarforge.toml` project file into a distribution
//! directory holding the application jar, one jar per plugin and the
//! resources they need.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Build pipeline and project logic
//! - [`infra`] - Infrastructure layer (filesystem, archives, processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
