//! Line diff engine
//!
//! This module turns two texts into an ordered list of change segments:
//!
//! - `diff_algorithm`: the `DiffAlgorithm` trait, `Edit` scripts and Myers' diff
//! - `lcs`: quadratic LCS table, kept as a fallback for small inputs
//! - `segment`: line splitting and grouping of edits into `Segment`s
//!
//! `segment::compute_diff` is the entry point; it is a pure function of its two
//! inputs and never fails.

pub mod diff_algorithm;
pub mod lcs;
pub mod segment;
