//! Victory Rush: consumes its own availability flag and scales with attack power.

use spell_core::{AuraState, CastContext, EffectIndex, HookSet, SpellScript, WeaponAttack};

/// `damage × attack_power / 100`, truncated.
pub fn scale_by_attack_power(damage: u32, attack_power: f32) -> u32 {
    let scaled = f64::from(damage) * f64::from(attack_power) / 100.0;
    scaled.clamp(0.0, f64::from(u32::MAX)) as u32
}

/// Victory Rush (34428).
#[derive(Clone, Copy, Debug, Default)]
pub struct VictoryRush;

impl SpellScript for VictoryRush {
    fn hooks(&self) -> HookSet {
        HookSet::ON_CAST | HookSet::ON_EFFECT_EXECUTE
    }

    fn on_cast(&self, ctx: &mut CastContext<'_>) {
        // Re-armed by the host when the caster next lands a killing blow.
        ctx.world
            .modify_aura_state(ctx.caster, AuraState::VictoryRush, false);
    }

    fn on_effect_execute(&self, ctx: &mut CastContext<'_>, _effect: EffectIndex) {
        let attack_power = ctx.world.total_attack_power(ctx.caster, WeaponAttack::Base);
        let damage = scale_by_attack_power(ctx.damage(), attack_power);
        tracing::debug!(
            "Victory Rush: {} x {} AP -> {}",
            ctx.damage(),
            attack_power,
            damage
        );
        ctx.set_damage(damage);
    }
}
