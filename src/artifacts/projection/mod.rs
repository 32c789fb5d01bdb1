//! Per-side row projection
//!
//! Turns a `DiffResult` into the numbered rows one panel renders. Each side
//! numbers its own rows from 1, so an added line never consumes an old-side
//! number and a removed line never consumes a new-side number.

use crate::artifacts::diff::segment::{DiffResult, SegmentKind};
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Old,
    New,
}

impl Side {
    /// Whether lines of this segment kind exist on this side.
    pub fn shows(self, kind: SegmentKind) -> bool {
        match self {
            Side::Old => kind != SegmentKind::Added,
            Side::New => kind != SegmentKind::Removed,
        }
    }

    pub fn highlight_for(self, kind: SegmentKind) -> Highlight {
        match (self, kind) {
            (Side::Old, SegmentKind::Removed) => Highlight::Removed,
            (Side::New, SegmentKind::Added) => Highlight::Added,
            _ => Highlight::None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Highlight {
    #[default]
    None,
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Row {
    pub side: Side,
    pub line_number: usize,
    pub text: String,
    pub highlight: Highlight,
}

pub fn project(diff: &DiffResult, side: Side) -> Vec<Row> {
    diff.segments()
        .iter()
        .filter(|segment| side.shows(segment.kind()))
        .flat_map(|segment| {
            let highlight = side.highlight_for(segment.kind());
            segment.lines().iter().map(move |line| (line, highlight))
        })
        .enumerate()
        .map(|(idx, (line, highlight))| Row::new(side, idx + 1, line.clone(), highlight))
        .collect()
}

/// Old-side and new-side rows, in that order.
pub fn project_both(diff: &DiffResult) -> (Vec<Row>, Vec<Row>) {
    (project(diff, Side::Old), project(diff, Side::New))
}
