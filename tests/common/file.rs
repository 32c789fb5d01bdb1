use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }

    std::fs::write(&file_spec.path, file_spec.content).expect("Failed to write file");
}

/// Writes `old.txt` and `new.txt` into `dir`.
pub fn write_pair(dir: &Path, old: &str, new: &str) {
    write_file(FileSpec::new(dir.join("old.txt"), old.to_string()));
    write_file(FileSpec::new(dir.join("new.txt"), new.to_string()));
}

/// Lorem ipsum lines, one sentence per line.
pub fn generate_text(lines: usize) -> String {
    use fake::{Fake, faker::lorem::en::Sentence};

    (0..lines)
        .map(|_| Sentence(3..8).fake::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
