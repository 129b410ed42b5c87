//! Warrior ability behaviors.
//!
//! | Script name                    | Ability              | Hooks                 |
//! |--------------------------------|----------------------|-----------------------|
//! | `spell_warrior_execute`        | Execute              | OnCast                |
//! | `spell_warrior_execute_damage` | Execute (damage)     | OnHit                 |
//! | `spell_warrior_victory_rush`   | Victory Rush         | OnCast, OnEffect      |
//! | `spell_devastate`              | Devastate            | OnEffect (slot 2)     |
//! | `spell_retaliation_warrior`    | Retaliation          | OnProc                |
//! | `spell_heroic_strike`          | Heroic Strike        | OnEffect (slot 0)     |
mod devastate;
mod execute;
mod heroic_strike;
mod retaliation;
mod victory_rush;

use std::sync::Arc;

use spell_core::{RegistryError, ScriptBindings, ScriptCatalog, SpellId};

use crate::config::WarriorConfig;

pub use devastate::Devastate;
pub use execute::{WarriorExecute, WarriorExecuteDamage, execute_base_points};
pub use heroic_strike::HeroicStrike;
pub use retaliation::Retaliation;
pub use victory_rush::{VictoryRush, scale_by_attack_power};

pub const EXECUTE: &str = "spell_warrior_execute";
pub const EXECUTE_DAMAGE: &str = "spell_warrior_execute_damage";
pub const VICTORY_RUSH: &str = "spell_warrior_victory_rush";
pub const DEVASTATE: &str = "spell_devastate";
pub const RETALIATION: &str = "spell_retaliation_warrior";
pub const HEROIC_STRIKE: &str = "spell_heroic_strike";

/// Adds every warrior behavior to `catalog` under its script name.
pub fn register_warrior_scripts(
    catalog: &mut ScriptCatalog,
    config: &WarriorConfig,
) -> Result<(), RegistryError> {
    catalog.add(EXECUTE, Arc::new(WarriorExecute::new(config.execute_damage_spell)))?;
    catalog.add(EXECUTE_DAMAGE, Arc::new(WarriorExecuteDamage))?;
    catalog.add(VICTORY_RUSH, Arc::new(VictoryRush))?;
    catalog.add(
        DEVASTATE,
        Arc::new(Devastate::new(
            config.sunder_armor_first_rank,
            config.sunder_family_flags,
            config.devastate_threat_per_stack,
        )),
    )?;
    catalog.add(
        RETALIATION,
        Arc::new(Retaliation::new(config.retaliation_strike_spell)),
    )?;
    catalog.add(HEROIC_STRIKE, Arc::new(HeroicStrike::new(config.hamstring_icon_id)))?;
    Ok(())
}

/// Stock identifier bindings for the warrior behaviors.
pub fn default_bindings(config: &WarriorConfig) -> ScriptBindings {
    ScriptBindings::new()
        .with(SpellId(5308), EXECUTE)
        .with(config.execute_damage_spell, EXECUTE_DAMAGE)
        .with(SpellId(34428), VICTORY_RUSH)
        .with(SpellId(20243), DEVASTATE)
        .with(SpellId(20230), RETALIATION)
        .with(SpellId(29707), HEROIC_STRIKE)
}
