//! Warrior configuration loader.

use std::path::Path;

use crate::config::WarriorConfig;
use crate::loaders::{LoadResult, read_file};

/// Loader for [`WarriorConfig`] from TOML files.
///
/// Missing keys keep their defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<WarriorConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<WarriorConfig> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse warrior config TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spell_core::SpellId;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            devastate_threat_per_stack = 20.0
            retaliation_strike_spell = 22858
            "#,
        )
        .unwrap();

        assert_eq!(config.devastate_threat_per_stack, 20.0);
        assert_eq!(config.retaliation_strike_spell, SpellId(22858));
        assert_eq!(config.execute_damage_spell, SpellId(20647));
        assert_eq!(config.hamstring_icon_id, 15);
    }

    #[test]
    fn malformed_config_is_rejected() {
        let err = ConfigLoader::parse("hamstring_icon_id = \"fifteen\"").unwrap_err();
        assert!(err.to_string().contains("warrior config"));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warrior.toml");
        std::fs::write(&path, "sunder_armor_first_rank = 7405\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.sunder_armor_first_rank, SpellId(7405));

        assert!(ConfigLoader::load(&dir.path().join("missing.toml")).is_err());
    }
}
