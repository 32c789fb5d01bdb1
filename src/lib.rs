//! Side-by-side line diff viewer
//!
//! The library is organised the way the binary uses it:
//!
//! - `artifacts`: the diff engine, row projection, scroll mirroring and rendering
//! - `areas`: the stateful viewer (configuration, session, input reading)
//! - `commands`: `compare`, `stat` and `example`, implemented on `Viewer`
//!
//! The engine itself is two pure functions:
//!
//! ```
//! use sidediff::{Side, compute_diff, project};
//!
//! let diff = compute_diff("a\nb\nc", "a\nx\nc");
//! let old_rows = project(&diff, Side::Old);
//! assert_eq!(old_rows.len(), 3);
//! ```

use clap::ValueEnum;

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::diff::segment::{
    Algorithm, DiffResult, DiffStats, Segment, SegmentKind, compute_diff, compute_diff_with,
    split_lines,
};
pub use artifacts::projection::{Highlight, Row, Side, project, project_both};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => colored::control::unset_override(),
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}
