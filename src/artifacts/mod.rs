//! Diff data structures and algorithms
//!
//! - `core`: shared utilities (pager wrapper)
//! - `diff`: the line diff engine (Myers' diff, LCS fallback, segments)
//! - `projection`: per-side numbered rows
//! - `render`: side-by-side layout, themes and terminal output
//! - `scroll`: scroll mirroring between panels and viewports

pub mod core;
pub mod diff;
pub mod projection;
pub mod render;
pub mod scroll;
