use anyhow::Context;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const STDIN_MARKER: &str = "-";

/// Where one side of the comparison comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Stdin,
    File(PathBuf),
}

impl TextSource {
    pub fn is_stdin(&self) -> bool {
        matches!(self, TextSource::Stdin)
    }

    pub fn label(&self) -> String {
        match self {
            TextSource::Stdin => "(stdin)".to_string(),
            TextSource::File(path) => path.display().to_string(),
        }
    }
}

impl From<&str> for TextSource {
    fn from(arg: &str) -> Self {
        if arg == STDIN_MARKER {
            TextSource::Stdin
        } else {
            TextSource::File(PathBuf::from(arg))
        }
    }
}

/// Reads input texts, resolving relative paths against `path`.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_text(&self, source: &TextSource) -> anyhow::Result<String> {
        let bytes = match source {
            TextSource::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .context("failed to read text from stdin")?;
                buf
            }
            TextSource::File(file_path) => std::fs::read(self.path.join(file_path))
                .with_context(|| format!("failed to read text from {}", file_path.display()))?,
        };

        String::from_utf8(bytes)
            .map_err(|_| anyhow::anyhow!("{} is not valid UTF-8 text", source.label()))
    }

    /// Reads both sides; stdin can back at most one of them.
    pub fn read_pair(
        &self,
        old: &TextSource,
        new: &TextSource,
    ) -> anyhow::Result<(String, String)> {
        if old.is_stdin() && new.is_stdin() {
            anyhow::bail!("stdin can only be used for one side of the comparison");
        }

        let old_text = self.read_text(old)?;
        let new_text = self.read_text(new)?;
        tracing::debug!(
            old = %old.label(),
            new = %new.label(),
            old_bytes = old_text.len(),
            new_bytes = new_text.len(),
            "read input texts"
        );

        Ok((old_text, new_text))
    }
}
