//! Loaders for script configuration and binding tables.
//!
//! Both files are TOML. Bindings use one `[[binding]]` table per row:
//!
//! ```toml
//! [[binding]]
//! spell = 5308
//! script = "spell_warrior_execute"
//! ```

pub mod bindings;
pub mod config;

pub use bindings::BindingsLoader;
pub use config::ConfigLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
