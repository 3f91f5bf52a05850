//! Infrastructure layer
//!
//! Filesystem operations, jar archive I/O and compiler processes.

pub mod archive;
pub mod filesystem;
pub mod toolchain;
