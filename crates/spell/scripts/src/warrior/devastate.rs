//! Devastate: applies Sunder Armor and scales damage and threat by its stacks.

use spell_core::{
    AuraSignature, AuraType, AuraView, CastContext, CastRequest, EffectIndex, HookSet,
    SpellFamily, SpellId, SpellScript, ThreatContribution, TriggerFlags, UnitId,
};

/// Devastate (20243 and ranks). Only effect slot 2 is scripted.
#[derive(Clone, Copy, Debug)]
pub struct Devastate {
    sunder_first_rank: SpellId,
    sunder_family_flags: u64,
    threat_per_stack: f32,
}

impl Devastate {
    pub fn new(sunder_first_rank: SpellId, sunder_family_flags: u64, threat_per_stack: f32) -> Self {
        Self {
            sunder_first_rank,
            sunder_family_flags,
            threat_per_stack,
        }
    }

    fn sunder_signature(&self, caster: UnitId) -> AuraSignature {
        AuraSignature {
            aura_type: AuraType::ModResistance,
            family: SpellFamily::Warrior,
            family_flags: self.sunder_family_flags,
            caster: Some(caster),
        }
    }

    /// Casts the caster's best Sunder Armor rank as a guaranteed side effect.
    fn apply_sunder(&self, ctx: &mut CastContext<'_>, target: UnitId) {
        let Some(rank) = ctx
            .world
            .highest_learned_rank(ctx.caster, self.sunder_first_rank)
        else {
            tracing::warn!(
                "Devastate: {} has not learned {}",
                ctx.caster,
                self.sunder_first_rank
            );
            return;
        };

        let request = CastRequest::new(rank, target, TriggerFlags::FULL);
        if let Err(err) = ctx.world.cast_spell(ctx.caster, request) {
            tracing::warn!("Devastate: sunder {} failed: {}", rank, err);
        }
    }

    fn scale_by_stacks(&self, ctx: &mut CastContext<'_>, target: UnitId, sunder: AuraView) {
        let stacks = sunder.stack;
        ctx.set_damage(ctx.damage().saturating_mul(stacks));

        let contribution = ThreatContribution {
            attacker: ctx.caster,
            amount: self.threat_per_stack * stacks as f32,
            is_secondary: false,
            school: ctx.spell.school_mask,
            source: ctx.spell.id,
        };
        ctx.world.add_threat(target, contribution);
    }
}

impl SpellScript for Devastate {
    fn hooks(&self) -> HookSet {
        HookSet::ON_EFFECT_EXECUTE
    }

    fn on_effect_execute(&self, ctx: &mut CastContext<'_>, effect: EffectIndex) {
        if effect != EffectIndex::Effect2 {
            return;
        }
        let Some(target) = ctx.target else {
            return;
        };

        let signature = self.sunder_signature(ctx.caster);
        let observed = ctx.world.find_aura(target, &signature);

        // Both steps run on every execution: top the debuff up first, then
        // scale by whatever debuff exists.
        if observed.is_none_or(|sunder| !sunder.is_at_max_stack()) {
            tracing::debug!("Devastate: applying sunder (observed {:?})", observed);
            self.apply_sunder(ctx, target);
        }

        let sunder = match observed {
            Some(sunder) => Some(sunder),
            None => ctx.world.find_aura(target, &signature),
        };
        let Some(sunder) = sunder else {
            tracing::debug!("Devastate: no sunder on {}, no stack bonus", target);
            return;
        };

        if observed.is_some_and(|sunder| sunder.is_at_max_stack()) {
            ctx.world.refresh_holder(sunder.handle);
        }
        self.scale_by_stacks(ctx, target, sunder);
    }
}
