//! Heroic Strike: bonus damage against targets slowed by Hamstring-style effects.

use spell_core::{AuraType, CastContext, DispelType, EffectIndex, HookSet, SpellScript};

/// Heroic Strike (29707). Only effect slot 0 is scripted.
#[derive(Clone, Copy, Debug)]
pub struct HeroicStrike {
    slow_icon_id: u32,
}

impl HeroicStrike {
    pub fn new(slow_icon_id: u32) -> Self {
        Self { slow_icon_id }
    }
}

impl SpellScript for HeroicStrike {
    fn hooks(&self) -> HookSet {
        HookSet::ON_EFFECT_EXECUTE
    }

    fn on_effect_execute(&self, ctx: &mut CastContext<'_>, effect: EffectIndex) {
        if effect != EffectIndex::Effect0 {
            return;
        }
        let Some(target) = ctx.target else {
            return;
        };

        let slowed = ctx
            .world
            .auras_by_type(target, AuraType::ModDecreaseSpeed)
            .iter()
            .any(|aura| aura.spell_icon_id == self.slow_icon_id && aura.dispel == DispelType::None);
        if !slowed {
            return;
        }

        let bonus = ctx.spell.base_points(EffectIndex::Effect0);
        tracing::debug!("Heroic Strike: {} is slowed, +{} damage", target, bonus);
        ctx.set_damage(ctx.damage().saturating_add_signed(bonus));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spell_core::mock::{AuraTemplate, MockWorld};
    use spell_core::{SpellId, SpellInfo, UnitId};

    const WARRIOR: UnitId = UnitId(1);
    const TARGET: UnitId = UnitId(2);

    fn heroic_strike_spell() -> SpellInfo {
        SpellInfo::new(SpellId(29707)).with_effect(EffectIndex::Effect0, 61, 1.0)
    }

    fn hamstring() -> AuraTemplate {
        AuraTemplate::new(AuraType::ModDecreaseSpeed).with_icon(15, DispelType::None)
    }

    fn strike(world: &mut MockWorld, effect: EffectIndex) -> u32 {
        let spell = heroic_strike_spell();
        let mut ctx = CastContext::new(WARRIOR, Some(TARGET), &spell, world);
        ctx.set_damage(200);
        HeroicStrike::new(15).on_effect_execute(&mut ctx, effect);
        ctx.damage()
    }

    #[test]
    fn unslowed_target_takes_normal_damage() {
        let mut world = MockWorld::new();
        assert_eq!(strike(&mut world, EffectIndex::Effect0), 200);
    }

    #[test]
    fn hamstrung_target_takes_bonus_once() {
        let mut world = MockWorld::new();
        world.apply_aura(TARGET, UnitId(3), SpellId(1715), hamstring(), 1);
        assert_eq!(strike(&mut world, EffectIndex::Effect0), 261);

        world.apply_aura(TARGET, UnitId(4), SpellId(7372), hamstring(), 1);
        assert_eq!(strike(&mut world, EffectIndex::Effect0), 261);
    }

    #[test]
    fn other_slows_do_not_qualify() {
        let mut world = MockWorld::new();
        // Dispellable slow with the right icon.
        world.apply_aura(
            TARGET,
            UnitId(3),
            SpellId(116),
            AuraTemplate::new(AuraType::ModDecreaseSpeed).with_icon(15, DispelType::Magic),
            1,
        );
        // Undispellable slow with another icon.
        world.apply_aura(
            TARGET,
            UnitId(3),
            SpellId(12323),
            AuraTemplate::new(AuraType::ModDecreaseSpeed).with_icon(25, DispelType::None),
            1,
        );
        // Right icon, wrong modifier.
        world.apply_aura(
            TARGET,
            UnitId(3),
            SpellId(23694),
            AuraTemplate::new(AuraType::ModRoot).with_icon(15, DispelType::None),
            1,
        );
        assert_eq!(strike(&mut world, EffectIndex::Effect0), 200);
    }

    #[test]
    fn only_slot_zero_is_scripted() {
        let mut world = MockWorld::new();
        world.apply_aura(TARGET, UnitId(3), SpellId(1715), hamstring(), 1);
        assert_eq!(strike(&mut world, EffectIndex::Effect1), 200);
    }
}
