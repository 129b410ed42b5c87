//! Script binding table loader.

use std::path::Path;

use spell_core::ScriptBindings;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`ScriptBindings`] from TOML files.
pub struct BindingsLoader;

impl BindingsLoader {
    pub fn load(path: &Path) -> LoadResult<ScriptBindings> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ScriptBindings> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse script bindings TOML: {}", e))
    }
}
