//! Side-by-side terminal rendering
//!
//! - `layout`: pairing rows of both sides into display lines
//! - `theme`: light/dark palettes for the change marks
//!
//! `SideBySide` writes display lines as two fixed-width columns separated by
//! `│`. Long lines wrap inside their column; tabs expand to four spaces.

pub mod layout;
pub mod theme;

use crate::artifacts::render::layout::{Cell, DisplayLine, Mark};
use crate::artifacts::render::theme::Theme;
use std::io::{self, Write};

pub const SEPARATOR: &str = " │ ";
pub const DEFAULT_WIDTH: usize = 120;
pub const MIN_WIDTH: usize = 20;
pub const MAX_WIDTH: usize = 1000;

const TAB: &str = "    ";
const MIN_NUMBER_WIDTH: usize = 3;
// number, space, sign, space
const GUTTER_PADDING: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideBySide {
    theme: Theme,
    number_width: usize,
    text_width: usize,
}

/// One terminal line worth of a cell.
struct Piece {
    gutter: String,
    sign: char,
    text: String,
    mark: Mark,
}

impl SideBySide {
    pub fn new(theme: Theme, width: usize, max_line_number: usize) -> Self {
        let number_width = max_line_number.to_string().len().max(MIN_NUMBER_WIDTH);
        let cell_width = width.saturating_sub(SEPARATOR.chars().count()) / 2;
        let text_width = cell_width
            .saturating_sub(number_width + GUTTER_PADDING)
            .max(1);

        SideBySide {
            theme,
            number_width,
            text_width,
        }
    }

    pub fn column_width(&self) -> usize {
        self.number_width + GUTTER_PADDING + self.text_width
    }

    pub fn write_header(
        &self,
        out: &mut dyn Write,
        old_label: &str,
        new_label: &str,
    ) -> io::Result<()> {
        let column_width = self.column_width();
        let old_label = old_label.chars().take(column_width).collect::<String>();

        writeln!(
            out,
            "{}{}{}",
            self.theme.title(&format!("{old_label:<column_width$}")),
            SEPARATOR,
            self.theme.title(new_label)
        )?;
        writeln!(
            out,
            "{}─┼─{}",
            "─".repeat(column_width),
            "─".repeat(column_width)
        )
    }

    pub fn write_lines(&self, out: &mut dyn Write, lines: &[DisplayLine]) -> io::Result<()> {
        for line in lines {
            self.write_line(out, line)?;
        }
        Ok(())
    }

    pub fn write_line(&self, out: &mut dyn Write, line: &DisplayLine) -> io::Result<()> {
        let left = line.old.as_ref().map(|cell| self.pieces(cell)).unwrap_or_default();
        let right = line.new.as_ref().map(|cell| self.pieces(cell)).unwrap_or_default();

        for idx in 0..left.len().max(right.len()) {
            match left.get(idx) {
                Some(piece) => self.write_piece(out, piece, true)?,
                None => write!(out, "{}", " ".repeat(self.column_width()))?,
            }
            match right.get(idx) {
                Some(piece) => {
                    write!(out, "{SEPARATOR}")?;
                    self.write_piece(out, piece, false)?;
                    writeln!(out)?;
                }
                None => writeln!(out, "{}", SEPARATOR.trim_end())?,
            }
        }

        Ok(())
    }

    pub fn write_legend(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(
            out,
            "{} Added  {} Removed  {} Modified",
            self.theme.paint(" + ", Mark::Added),
            self.theme.paint(" - ", Mark::Removed),
            self.theme.paint(" ~ ", Mark::Modified),
        )
    }

    fn write_piece(&self, out: &mut dyn Write, piece: &Piece, pad: bool) -> io::Result<()> {
        let text = if pad {
            format!("{:<width$}", piece.text, width = self.text_width)
        } else {
            piece.text.clone()
        };

        write!(
            out,
            "{} {} {}",
            self.theme.gutter(&piece.gutter),
            self.theme.paint(&piece.sign.to_string(), piece.mark),
            self.theme.paint(&text, piece.mark)
        )
    }

    fn pieces(&self, cell: &Cell) -> Vec<Piece> {
        let text = cell.row.text.replace('\t', TAB);
        let chars = text.chars().collect::<Vec<_>>();
        let chunks = if chars.is_empty() {
            vec![String::new()]
        } else {
            chars
                .chunks(self.text_width)
                .map(|chunk| chunk.iter().collect::<String>())
                .collect()
        };

        chunks
            .into_iter()
            .enumerate()
            .map(|(idx, text)| {
                let (gutter, sign) = if idx == 0 {
                    (
                        format!("{:>width$}", cell.row.line_number, width = self.number_width),
                        cell.mark.sign(),
                    )
                } else {
                    (" ".repeat(self.number_width), ' ')
                };
                Piece {
                    gutter,
                    sign,
                    text,
                    mark: cell.mark,
                }
            })
            .collect()
    }
}
