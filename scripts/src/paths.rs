//! Fixed dataset locations.
//!
//! Everything is resolved from the repository root (the directory above this
//! crate), so the tools behave the same from any working directory.

use std::path::{Path, PathBuf};

/// Directory holding the datasets, relative to the repository root.
pub const DATA_DIR: &str = "data";

/// Titanic passenger list read by the extractor.
pub const TITANIC_INPUT: &str = "titanic-data.csv";

/// File written by the extractor.
pub const TITANIC_OUTPUT: &str = "titanic_passengerid_age.csv";

/// Coffee review dataset rewritten by the year splitter.
pub const COFFEE_ANALYSIS: &str = "coffee_analysis.csv";

/// Repository root: one level above the `scripts` crate.
pub fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// `<root>/data`
pub fn data_dir() -> PathBuf {
    data_dir_under(&project_root())
}

/// `<root>/data` for an arbitrary root.
pub fn data_dir_under(root: &Path) -> PathBuf {
    root.join(DATA_DIR)
}

/// Path of a dataset file inside [`data_dir`].
pub fn data_file(name: &str) -> PathBuf {
    data_dir().join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_parent_of_crate() {
        let root = project_root();
        assert!(Path::new(env!("CARGO_MANIFEST_DIR")).starts_with(&root));
        assert!(root.join("scripts").join("Cargo.toml").exists());
    }

    #[test]
    fn test_data_file_layout() {
        let path = data_file(TITANIC_INPUT);
        assert!(path.ends_with("data/titanic-data.csv"));
        assert_eq!(data_dir_under(Path::new("/repo")), PathBuf::from("/repo/data"));
    }
}
