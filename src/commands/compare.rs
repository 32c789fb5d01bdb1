use crate::areas::viewer::Viewer;
use crate::areas::workspace::TextSource;
use crate::artifacts::projection::project_both;
use crate::artifacts::render::SideBySide;
use crate::artifacts::render::layout::{LayoutMode, align, panels};

impl Viewer {
    pub fn compare(&self, old: &TextSource, new: &TextSource) -> anyhow::Result<()> {
        let (old_text, new_text) = self.workspace().read_pair(old, new)?;
        self.session().set_texts(old_text, new_text);

        self.render(&old.label(), &new.label())
    }

    /// Renders the session's current diff with the configured layout.
    pub fn render(&self, old_label: &str, new_label: &str) -> anyhow::Result<()> {
        let config = self.config();
        let viewport = config.viewport();
        let mut session = self.session();
        let diff = session.diff();

        let renderer = SideBySide::new(
            config.theme,
            config.width,
            diff.old_lines().max(diff.new_lines()),
        );
        let lines = match config.layout {
            LayoutMode::Aligned => viewport.window(&align(diff)).to_vec(),
            LayoutMode::Panels => {
                let (old_rows, new_rows) = project_both(diff);
                let (old_rows, new_rows) = viewport.paired_windows(&old_rows, &new_rows);
                panels(old_rows, new_rows)
            }
        };

        tracing::debug!(
            layout = ?config.layout,
            identical = diff.is_identical(),
            display_lines = lines.len(),
            "rendering comparison"
        );

        let mut writer = self.writer();
        renderer.write_header(&mut **writer, old_label, new_label)?;
        renderer.write_lines(&mut **writer, &lines)?;
        if config.legend {
            renderer.write_legend(&mut **writer)?;
        }

        Ok(())
    }
}
