//! Unit model accessors.

use crate::spell_info::SpellInfo;
use crate::types::{AuraState, EffectIndex, PowerKind, SpellId, UnitId, WeaponAttack};

/// Read/write access to combat units.
pub trait UnitAccess {
    /// Current amount in one of the unit's resource pools.
    fn power(&self, unit: UnitId, kind: PowerKind) -> u32;

    fn set_power(&mut self, unit: UnitId, kind: PowerKind, value: u32);

    /// Total attack power including all modifiers.
    fn total_attack_power(&self, unit: UnitId, attack: WeaponAttack) -> f32;

    /// Returns true if `other` stands within `unit`'s back arc.
    fn has_in_back_arc(&self, unit: UnitId, other: UnitId) -> bool;

    /// Sets (`apply = true`) or clears a combat state flag.
    fn modify_aura_state(&mut self, unit: UnitId, state: AuraState, apply: bool);

    /// Default value the resolution pipeline computes for one effect slot.
    fn calculate_effect_value(
        &self,
        caster: UnitId,
        target: Option<UnitId>,
        spell: &SpellInfo,
        effect: EffectIndex,
    ) -> i32;

    /// Highest rank the unit has learned in the chain starting at `first_rank`.
    fn highest_learned_rank(&self, unit: UnitId, first_rank: SpellId) -> Option<SpellId>;
}
