use crate::areas::viewer::Viewer;
use crate::areas::workspace::TextSource;
use crate::artifacts::diff::segment::DiffStats;
use colored::Colorize;
use std::io::Write;

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

pub fn format_stats(stats: &DiffStats) -> String {
    format!(
        "{}, {}, {} unchanged",
        format!("{}(+)", plural(stats.added, "addition")).green(),
        format!("{}(-)", plural(stats.removed, "deletion")).red(),
        stats.unchanged
    )
}

impl Viewer {
    pub fn stat(&self, old: &TextSource, new: &TextSource) -> anyhow::Result<()> {
        let (old_text, new_text) = self.workspace().read_pair(old, new)?;
        self.session().set_texts(old_text, new_text);

        let stats = self.session().diff().stats();
        writeln!(self.writer(), "{}", format_stats(&stats))?;

        Ok(())
    }
}
