use crate::artifacts::render::layout::Mark;
use clap::ValueEnum;
use colored::{ColoredString, Colorize};

type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    fn foreground(self) -> Rgb {
        match self {
            Theme::Light => (17, 24, 39),
            Theme::Dark => (243, 244, 246),
        }
    }

    /// Background swatch for a mark; context cells keep the terminal default.
    pub fn background(self, mark: Mark) -> Option<Rgb> {
        match (self, mark) {
            (_, Mark::Context) => None,
            (Theme::Light, Mark::Added) => Some((220, 252, 231)),
            (Theme::Light, Mark::Removed) => Some((254, 226, 226)),
            (Theme::Light, Mark::Modified) => Some((254, 249, 195)),
            (Theme::Dark, Mark::Added) => Some((20, 83, 45)),
            (Theme::Dark, Mark::Removed) => Some((127, 29, 29)),
            (Theme::Dark, Mark::Modified) => Some((113, 63, 18)),
        }
    }

    pub fn paint(self, text: &str, mark: Mark) -> ColoredString {
        match self.background(mark) {
            Some((r, g, b)) => {
                let (fr, fg, fb) = self.foreground();
                text.on_truecolor(r, g, b).truecolor(fr, fg, fb)
            }
            None => text.normal(),
        }
    }

    pub fn gutter(self, text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn title(self, text: &str) -> ColoredString {
        text.bold()
    }
}
