//! Execute: rage-scaled finisher.
//!
//! The initiating cast never deals damage itself. It folds the caster's rage
//! into the base value of a follow-up damage spell, and that follow-up drains
//! the rage only once it actually lands.

use spell_core::{
    CastContext, CastRequest, EffectIndex, HookSet, PowerKind, SpellId, SpellMissInfo,
    SpellScript, TriggerFlags,
};

/// Base value of the follow-up: default slot-0 value plus `rage × multiplier`.
pub fn execute_base_points(default_value: i32, rage: u32, multiplier: f32) -> i32 {
    default_value.saturating_add((rage as f32 * multiplier) as i32)
}

/// Initiating cast (5308 and ranks).
#[derive(Clone, Copy, Debug)]
pub struct WarriorExecute {
    damage_spell: SpellId,
}

impl WarriorExecute {
    pub fn new(damage_spell: SpellId) -> Self {
        Self { damage_spell }
    }
}

impl SpellScript for WarriorExecute {
    fn hooks(&self) -> HookSet {
        HookSet::ON_CAST
    }

    fn on_cast(&self, ctx: &mut CastContext<'_>) {
        let Some(target) = ctx.target else {
            tracing::debug!("Execute {} cast without a unit target", ctx.spell_id());
            return;
        };

        let default_value =
            ctx.world
                .calculate_effect_value(ctx.caster, Some(target), ctx.spell, EffectIndex::Effect0);
        let rage = ctx.world.power(ctx.caster, PowerKind::Rage);
        let base_points =
            execute_base_points(default_value, rage, ctx.spell.multiplier(EffectIndex::Effect0));

        // The follow-up must still roll to hit so the rage drain can see misses.
        let flags = TriggerFlags::NONE
            .with_skip_reentrancy_guard()
            .with_skip_gcd()
            .with_skip_cost();
        let request = CastRequest::new(self.damage_spell, target, flags)
            .with_base_points(EffectIndex::Effect0, base_points);

        tracing::debug!(
            "Execute: {} rage -> {} base points on {}",
            rage,
            base_points,
            self.damage_spell
        );
        if let Err(err) = ctx.world.cast_spell(ctx.caster, request) {
            tracing::warn!("Execute follow-up {} failed: {}", self.damage_spell, err);
        }
    }
}

/// Damage follow-up (20647): consumes all rage on a clean hit.
#[derive(Clone, Copy, Debug, Default)]
pub struct WarriorExecuteDamage;

impl SpellScript for WarriorExecuteDamage {
    fn hooks(&self) -> HookSet {
        HookSet::ON_HIT
    }

    fn on_hit(&self, ctx: &mut CastContext<'_>, miss: SpellMissInfo) {
        if miss.is_clean_hit() {
            ctx.world.set_power(ctx.caster, PowerKind::Rage, 0);
        } else {
            tracing::debug!("Execute damage {}: rage kept", miss);
        }
    }
}
