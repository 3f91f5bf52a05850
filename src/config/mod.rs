//! Configuration constants
//!
//! - [`defaults`] - Default paths, names and tool settings

pub mod defaults;
