//! Ability behaviors built on `spell-core`.
//!
//! This crate houses concrete [`spell_core::SpellScript`] implementations and
//! the startup glue that binds them to ability identifiers:
//! - Warrior behaviors ([`warrior`])
//! - Tunables ([`WarriorConfig`])
//! - TOML loaders for config and binding tables (`loaders` feature)

pub mod config;
pub mod warrior;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use config::WarriorConfig;
pub use warrior::{default_bindings, register_warrior_scripts};

#[cfg(feature = "loaders")]
pub use loaders::{BindingsLoader, ConfigLoader, LoadResult};

use spell_core::{RegistryError, ScriptBindings, ScriptCatalog, ScriptRegistry};

/// Builds the frozen registry for `bindings` from every behavior in this crate.
///
/// # Errors
///
/// Any `RegistryError` aborts startup; nothing is partially registered.
pub fn build_registry(
    config: &WarriorConfig,
    bindings: &ScriptBindings,
) -> Result<ScriptRegistry, RegistryError> {
    let mut catalog = ScriptCatalog::new();
    register_warrior_scripts(&mut catalog, config)?;

    let mut builder = ScriptRegistry::builder();
    builder.bind_all(&catalog, bindings)?;
    Ok(builder.build())
}

/// Registry with the stock warrior bindings.
pub fn warrior_registry(config: &WarriorConfig) -> Result<ScriptRegistry, RegistryError> {
    build_registry(config, &default_bindings(config))
}
