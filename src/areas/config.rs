use crate::artifacts::diff::segment::Algorithm;
use crate::artifacts::render::layout::LayoutMode;
use crate::artifacts::render::theme::Theme;
use crate::artifacts::render::{DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH};
use crate::artifacts::scroll::Viewport;
use derive_new::new;

/// How the viewer lays out, colors and windows its output.
#[derive(Debug, Clone, PartialEq, new)]
pub struct ViewConfig {
    pub layout: LayoutMode,
    pub theme: Theme,
    pub width: usize,
    pub height: Option<usize>,
    pub scroll: f64,
    pub algorithm: Algorithm,
    pub legend: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            layout: LayoutMode::default(),
            theme: Theme::default(),
            width: DEFAULT_WIDTH,
            height: None,
            scroll: 0.0,
            algorithm: Algorithm::default(),
            legend: true,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.width < MIN_WIDTH {
            anyhow::bail!(
                "width must be at least {} columns, got {}",
                MIN_WIDTH,
                self.width
            );
        }
        if self.width > MAX_WIDTH {
            anyhow::bail!(
                "width must be at most {} columns, got {}",
                MAX_WIDTH,
                self.width
            );
        }
        if self.height == Some(0) {
            anyhow::bail!("height must be at least 1 line");
        }
        if !(0.0..=1.0).contains(&self.scroll) {
            anyhow::bail!("scroll must be a fraction between 0 and 1, got {}", self.scroll);
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.height, self.scroll)
    }
}
