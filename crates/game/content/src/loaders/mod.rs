//! Content loaders for reading synergy data from files.
//!
//! Loaders convert the RON synergy table into catalog types from
//! `synergy-core`.

pub mod factory;
pub mod synergies;

pub use factory::ContentFactory;
pub use synergies::{SynergyLoader, SynergyRow, SynergyTable};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
