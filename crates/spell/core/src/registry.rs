//! Startup-time binding of ability identifiers to behaviors.
//!
//! Registration happens once, single-threaded, through [`ScriptRegistryBuilder`].
//! [`ScriptRegistryBuilder::build`] freezes the result into a [`ScriptRegistry`]
//! that has no mutation API and can be shared freely between resolution steps.
//!
//! Behaviors can also be bound indirectly: a [`ScriptCatalog`] names each
//! behavior, and a [`ScriptBindings`] table maps identifiers to those names.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::script::SpellScript;
use crate::types::SpellId;

/// Behaviors available for binding, keyed by script name.
#[derive(Default)]
pub struct ScriptCatalog {
    scripts: HashMap<String, Arc<dyn SpellScript>>,
}

impl ScriptCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named behavior.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateScriptName` if `name` is already taken.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        script: Arc<dyn SpellScript>,
    ) -> Result<(), RegistryError> {
        match self.scripts.entry(name.into()) {
            Entry::Occupied(entry) => Err(RegistryError::DuplicateScriptName(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(script);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn SpellScript>> {
        self.scripts.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scripts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

/// One row of the binding table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptBinding {
    pub spell: SpellId,
    pub script: String,
}

impl ScriptBinding {
    pub fn new(spell: SpellId, script: impl Into<String>) -> Self {
        Self {
            spell,
            script: script.into(),
        }
    }
}

/// Identifier → script name table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptBindings {
    #[cfg_attr(feature = "serde", serde(default, rename = "binding"))]
    pub bindings: Vec<ScriptBinding>,
}

impl ScriptBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, spell: SpellId, script: impl Into<String>) -> Self {
        self.bindings.push(ScriptBinding::new(spell, script));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScriptBinding> {
        self.bindings.iter()
    }
}

/// Mutable registry used during the startup phase.
#[derive(Default)]
pub struct ScriptRegistryBuilder {
    scripts: HashMap<SpellId, Arc<dyn SpellScript>>,
}

impl ScriptRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `script` to `spell`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateRegistration` if `spell` is already bound.
    /// The existing binding is left untouched.
    pub fn register(
        &mut self,
        spell: SpellId,
        script: Arc<dyn SpellScript>,
    ) -> Result<&mut Self, RegistryError> {
        match self.scripts.entry(spell) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateRegistration(spell)),
            Entry::Vacant(entry) => {
                tracing::debug!("Registered script for {} (hooks: {:?})", spell, script.hooks());
                entry.insert(script);
                Ok(self)
            }
        }
    }

    /// Resolves every binding against `catalog` and registers the result.
    ///
    /// # Errors
    ///
    /// Stops at the first unknown script name or duplicate identifier.
    pub fn bind_all(
        &mut self,
        catalog: &ScriptCatalog,
        bindings: &ScriptBindings,
    ) -> Result<&mut Self, RegistryError> {
        for binding in bindings.iter() {
            let script = catalog
                .get(&binding.script)
                .ok_or_else(|| RegistryError::UnknownScript {
                    spell: binding.spell,
                    script: binding.script.clone(),
                })?;
            tracing::debug!("Binding {} -> '{}'", binding.spell, binding.script);
            self.register(binding.spell, Arc::clone(script))?;
        }
        Ok(self)
    }

    /// Freezes the registry.
    pub fn build(self) -> ScriptRegistry {
        tracing::info!("Script registry frozen with {} bindings", self.scripts.len());
        ScriptRegistry {
            scripts: self.scripts,
        }
    }
}

/// Immutable identifier → behavior mapping.
///
/// Reads never block and never mutate, so a registry can be shared between
/// threads resolving independent casts.
pub struct ScriptRegistry {
    scripts: HashMap<SpellId, Arc<dyn SpellScript>>,
}

impl ScriptRegistry {
    pub fn builder() -> ScriptRegistryBuilder {
        ScriptRegistryBuilder::new()
    }

    /// An empty registry: every cast resolves with default behavior only.
    pub fn empty() -> Self {
        Self {
            scripts: HashMap::new(),
        }
    }

    /// Behavior bound to `spell`, if any.
    pub fn lookup(&self, spell: SpellId) -> Option<&Arc<dyn SpellScript>> {
        self.scripts.get(&spell)
    }

    pub fn contains(&self, spell: SpellId) -> bool {
        self.scripts.contains_key(&spell)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

impl core::fmt::Debug for ScriptRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut spells: Vec<_> = self.scripts.keys().collect();
        spells.sort();
        f.debug_struct("ScriptRegistry")
            .field("spells", &spells)
            .finish()
    }
}
