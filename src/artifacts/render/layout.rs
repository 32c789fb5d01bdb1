use crate::artifacts::diff::segment::{DiffResult, SegmentKind};
use crate::artifacts::projection::{Highlight, Row, project_both};
use clap::ValueEnum;
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LayoutMode {
    /// Pair old and new rows so matching lines share a display line
    #[default]
    Aligned,
    /// List each side in its own order, like two independent panels
    Panels,
}

/// How a cell is styled and which sign it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Context,
    Added,
    Removed,
    /// A removed row displayed next to the added row that replaced it
    Modified,
}

impl Mark {
    pub fn sign(self) -> char {
        match self {
            Mark::Context => ' ',
            Mark::Added => '+',
            Mark::Removed => '-',
            Mark::Modified => '~',
        }
    }
}

impl From<Highlight> for Mark {
    fn from(highlight: Highlight) -> Self {
        match highlight {
            Highlight::None => Mark::Context,
            Highlight::Added => Mark::Added,
            Highlight::Removed => Mark::Removed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Cell {
    pub row: Row,
    pub mark: Mark,
}

impl From<Row> for Cell {
    fn from(row: Row) -> Self {
        let mark = Mark::from(row.highlight);
        Cell::new(row, mark)
    }
}

/// One line of the side-by-side view; either side may be blank.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DisplayLine {
    pub old: Option<Cell>,
    pub new: Option<Cell>,
}

/// Pairs the rows of both projections by segment.
///
/// Unchanged lines share a display line. A removed run directly followed by an
/// added run is zipped into `Modified` pairs; whichever run is longer leaves
/// its surplus one-sided.
pub fn align(diff: &DiffResult) -> Vec<DisplayLine> {
    let (old_rows, new_rows) = project_both(diff);
    let mut old_rows = old_rows.into_iter();
    let mut new_rows = new_rows.into_iter();

    let mut lines = Vec::with_capacity(old_rows.len().max(new_rows.len()));
    let mut segments = diff.segments().iter().peekable();

    while let Some(segment) = segments.next() {
        match segment.kind() {
            SegmentKind::Unchanged => {
                for _ in 0..segment.len() {
                    lines.push(DisplayLine::new(
                        old_rows.next().map(Cell::from),
                        new_rows.next().map(Cell::from),
                    ));
                }
            }
            SegmentKind::Removed => {
                let removed = old_rows.by_ref().take(segment.len()).collect::<Vec<_>>();
                let added = match segments.next_if(|next| next.kind() == SegmentKind::Added) {
                    Some(next) => new_rows.by_ref().take(next.len()).collect::<Vec<_>>(),
                    None => Vec::new(),
                };
                pair_replacements(&mut lines, removed, added);
            }
            SegmentKind::Added => {
                for row in new_rows.by_ref().take(segment.len()) {
                    lines.push(DisplayLine::new(None, Some(Cell::from(row))));
                }
            }
        }
    }

    lines
}

fn pair_replacements(lines: &mut Vec<DisplayLine>, removed: Vec<Row>, added: Vec<Row>) {
    let mut removed = removed.into_iter();
    let mut added = added.into_iter();

    loop {
        let line = match (removed.next(), added.next()) {
            (Some(old), Some(new)) => DisplayLine::new(
                Some(Cell::new(old, Mark::Modified)),
                Some(Cell::new(new, Mark::Modified)),
            ),
            (Some(old), None) => DisplayLine::new(Some(Cell::from(old)), None),
            (None, Some(new)) => DisplayLine::new(None, Some(Cell::from(new))),
            (None, None) => break,
        };
        lines.push(line);
    }
}

/// Zips two independently scrolled panels line by line.
pub fn panels(old_rows: &[Row], new_rows: &[Row]) -> Vec<DisplayLine> {
    let len = old_rows.len().max(new_rows.len());

    (0..len)
        .map(|idx| {
            DisplayLine::new(
                old_rows.get(idx).cloned().map(Cell::from),
                new_rows.get(idx).cloned().map(Cell::from),
            )
        })
        .collect()
}
