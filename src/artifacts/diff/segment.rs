use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, Edit, MyersDiff};
use crate::artifacts::diff::lcs::LcsDiff;
use clap::ValueEnum;
use derive_new::new;

/// Which edit-script algorithm backs a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Algorithm {
    /// Myers' O(ND) greedy algorithm
    #[default]
    Myers,
    /// Quadratic LCS table, for small inputs
    Lcs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

impl<T> From<&Edit<T>> for SegmentKind {
    fn from(edit: &Edit<T>) -> Self {
        match edit {
            Edit::Equal { .. } => SegmentKind::Unchanged,
            Edit::Insert { .. } => SegmentKind::Added,
            Edit::Delete { .. } => SegmentKind::Removed,
        }
    }
}

/// A maximal run of lines sharing one classification.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Segment {
    kind: SegmentKind,
    lines: Vec<String>,
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn edit_distance(&self) -> usize {
        self.added + self.removed
    }
}

/// Ordered segments covering both texts.
///
/// Old text = Unchanged + Removed lines in order, new text = Unchanged + Added
/// lines in order. Two neighbouring segments never share a kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    segments: Vec<Segment>,
}

impl DiffResult {
    pub fn from_edits<'l>(edits: impl IntoIterator<Item = Edit<&'l str>>) -> Self {
        let mut segments: Vec<Segment> = Vec::new();

        for edit in edits {
            let kind = SegmentKind::from(&edit);
            let line = edit.into_value().to_string();

            match segments.last_mut() {
                Some(segment) if segment.kind == kind => segment.lines.push(line),
                _ => segments.push(Segment::new(kind, vec![line])),
            }
        }

        DiffResult { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when neither text has a line the other lacks.
    pub fn is_identical(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| segment.kind == SegmentKind::Unchanged)
    }

    pub fn stats(&self) -> DiffStats {
        self.segments
            .iter()
            .fold(DiffStats::default(), |mut stats, segment| {
                match segment.kind {
                    SegmentKind::Unchanged => stats.unchanged += segment.len(),
                    SegmentKind::Added => stats.added += segment.len(),
                    SegmentKind::Removed => stats.removed += segment.len(),
                }
                stats
            })
    }

    pub fn old_lines(&self) -> usize {
        let stats = self.stats();
        stats.unchanged + stats.removed
    }

    pub fn new_lines(&self) -> usize {
        let stats = self.stats();
        stats.unchanged + stats.added
    }
}

/// Splits on `\n`, dropping the empty element a trailing newline leaves behind.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = text.split('\n').collect::<Vec<_>>();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

pub fn compute_diff(old_text: &str, new_text: &str) -> DiffResult {
    compute_diff_with(old_text, new_text, Algorithm::Myers)
}

pub fn compute_diff_with(old_text: &str, new_text: &str, algorithm: Algorithm) -> DiffResult {
    let a = split_lines(old_text);
    let b = split_lines(new_text);

    let edits = match algorithm {
        Algorithm::Myers => MyersDiff::new(&a, &b).diff(),
        Algorithm::Lcs => LcsDiff::new(&a, &b).diff(),
    };
    let result = DiffResult::from_edits(edits);

    tracing::debug!(
        ?algorithm,
        old_lines = a.len(),
        new_lines = b.len(),
        edit_distance = result.stats().edit_distance(),
        segments = result.segments().len(),
        "computed line diff"
    );

    result
}
