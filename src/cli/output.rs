//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying spinners, status
//! lines and formatted errors to the user.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSITY: AtomicU8 = AtomicU8::new(0);

/// Output settings taken from the global CLI flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress everything except errors
    pub quiet: bool,
    /// Verbosity level (0 = normal, 1 = info, 2+ = debug)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create an output configuration; `quiet` wins over `verbose`
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self {
            quiet,
            verbose: if quiet { 0 } else { verbose },
        }
    }

    /// Make this configuration visible to every output helper
    pub fn apply_global(&self) {
        QUIET.store(self.quiet, Ordering::Relaxed);
        VERBOSITY.store(self.verbose, Ordering::Relaxed);
    }

    /// Currently applied configuration
    pub fn global() -> Self {
        Self {
            quiet: QUIET.load(Ordering::Relaxed),
            verbose: VERBOSITY.load(Ordering::Relaxed),
        }
    }
}

/// Whether normal output is suppressed
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether detail lines should be shown
pub fn is_verbose() -> bool {
    VERBOSITY.load(Ordering::Relaxed) > 0
}

/// Print a line unless quiet
pub fn print_line(message: &str) {
    if !is_quiet() {
        println!("{message}");
    }
}

/// Print a success line unless quiet
pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{} {message}", status::SUCCESS);
    }
}

/// Print an indented detail line in verbose mode
pub fn print_detail(message: &str) {
    if is_verbose() && !is_quiet() {
        println!("  {message}");
    }
}

/// Print a warning to stderr unless quiet
pub fn print_warning(message: &str) {
    if !is_quiet() {
        eprintln!("{} {message}", status::WARNING);
    }
}

/// Print an error and its causes to stderr
///
/// Causes whose text already appears in the previous line are skipped so
/// that transparent wrappers don't repeat themselves.
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error}", status::ERROR);
    let mut previous = error.to_string();
    for cause in error.chain().skip(1) {
        let message = cause.to_string();
        if previous.contains(&message) {
            continue;
        }
        eprintln!("  Caused by: {message}");
        previous = message;
    }
}

/// Create a spinner for operations with unknown duration
///
/// Returns a hidden bar when quiet or when stdout is not a terminal.
pub fn create_spinner(message: &str) -> ProgressBar {
    if is_quiet() || !std::io::stdout().is_terminal() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}
