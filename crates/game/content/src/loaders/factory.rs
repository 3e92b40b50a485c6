//! Content factory for building the catalog from a data directory.

use std::path::{Path, PathBuf};

use synergy_core::SynergyCatalog;

use crate::loaders::{LoadResult, SynergyLoader};

/// Content factory that loads synergy content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// └── synergies.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the synergy catalog from `synergies.ron`.
    pub fn load_synergies(&self) -> LoadResult<SynergyCatalog> {
        let path = self.data_dir.join("synergies.ron");
        SynergyLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_synergies_from_well_known_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("synergies.ron"),
            r#"SynergyTable(rows: [SynergyRow(name: "baseline")])"#,
        )
        .expect("write table");

        let factory = ContentFactory::new(dir.path());
        let catalog = factory.load_synergies().expect("catalog should load");
        assert_eq!(catalog.len(), 1);
    }
}
