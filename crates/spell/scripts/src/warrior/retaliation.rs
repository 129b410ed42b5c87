//! Retaliation: counter-attacks melee strikes that come from the front.

use spell_core::{CastRequest, HookSet, ProcContext, ProcOutcome, SpellId, SpellScript, TriggerFlags};

/// Retaliation aura (20230).
#[derive(Clone, Copy, Debug)]
pub struct Retaliation {
    strike_spell: SpellId,
}

impl Retaliation {
    pub fn new(strike_spell: SpellId) -> Self {
        Self { strike_spell }
    }
}

impl SpellScript for Retaliation {
    fn hooks(&self) -> HookSet {
        HookSet::ON_PROC
    }

    fn on_proc(&self, ctx: &mut ProcContext<'_>) -> ProcOutcome {
        if ctx.world.has_in_back_arc(ctx.victim, ctx.attacker) {
            tracing::debug!(
                "Retaliation: {} struck {} from behind",
                ctx.attacker,
                ctx.victim
            );
            return ProcOutcome::Suppressed;
        }

        let request = CastRequest::new(self.strike_spell, ctx.attacker, TriggerFlags::FULL);
        if let Err(err) = ctx.world.cast_spell(ctx.victim, request) {
            tracing::warn!("Retaliation strike {} failed: {}", self.strike_spell, err);
        }
        ProcOutcome::Triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spell_core::mock::MockWorld;
    use spell_core::{AuraHandle, UnitId};

    const VICTIM: UnitId = UnitId(1);
    const ATTACKER: UnitId = UnitId(2);
    const AURA: SpellId = SpellId(20230);

    #[test]
    fn attack_from_behind_is_suppressed() {
        let mut world = MockWorld::new().with_in_back_arc(VICTIM, ATTACKER);
        let mut ctx = ProcContext::new(ATTACKER, VICTIM, AURA, AuraHandle(1), &mut world);

        let outcome = Retaliation::new(SpellId(20240)).on_proc(&mut ctx);

        assert_eq!(outcome, ProcOutcome::Suppressed);
        assert!(world.casts().is_empty());
    }

    #[test]
    fn frontal_attack_triggers_one_counter_strike() {
        let mut world = MockWorld::new();
        let script = Retaliation::new(SpellId(20240));

        let mut ctx = ProcContext::new(ATTACKER, VICTIM, AURA, AuraHandle(1), &mut world);
        assert_eq!(script.on_proc(&mut ctx), ProcOutcome::Triggered);

        let casts = world.casts();
        assert_eq!(casts.len(), 1);
        assert_eq!(casts[0].caster, VICTIM);
        assert_eq!(casts[0].request.target, ATTACKER);
        assert_eq!(casts[0].request.spell, SpellId(20240));
        assert_eq!(casts[0].request.flags, TriggerFlags::FULL);
    }

    #[test]
    fn outcome_is_stable_for_identical_inputs() {
        let mut world = MockWorld::new().with_in_back_arc(VICTIM, UnitId(3));
        let script = Retaliation::new(SpellId(20240));

        for _ in 0..3 {
            let mut ctx = ProcContext::new(ATTACKER, VICTIM, AURA, AuraHandle(1), &mut world);
            assert_eq!(script.on_proc(&mut ctx), ProcOutcome::Triggered);
        }
        // Someone else standing behind does not matter.
        assert_eq!(world.casts().len(), 3);
    }
}
