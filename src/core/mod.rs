//! Core business logic module
//!
//! This module contains the build pipeline for jarforge. Filesystem,
//! archive and process helpers live in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`project`] - Project file (jarforge.toml) parsing and validation
//! - [`plugin`] - Dotted class identifiers and their derived paths
//! - [`descriptor`] - Library extraction from the `.classpath` descriptor
//! - [`classpath`] - Classpath formatting
//! - [`compile`] - Source staging and per-entry-point compilation
//! - [`package`] - Archive planning and packaging
//! - [`layout`] - Distribution layout assembly
//! - [`builder`] - Build orchestration logic
//! - [`init`] - Project initialization logic
//! - [`clean`] - Clean build artifacts logic
//! - [`check`] - Configuration validation logic

pub mod builder;
pub mod check;
pub mod classpath;
pub mod clean;
pub mod compile;
pub mod descriptor;
pub mod init;
pub mod layout;
pub mod package;
pub mod plugin;
pub mod project;
