//! Per-invocation contexts handed to behavior hooks.
//!
//! - [`CastContext`]: one per ability invocation, owned by the resolution step
//!   for the duration of the cast and dropped when it completes.
//! - [`ProcContext`]: one per qualifying combat event evaluated against a
//!   passive aura.
//!
//! Hooks receive these by `&mut`, so a context can never be observed by two
//! hooks at once and the dispatcher cannot be re-entered for the same cast.

use crate::error::DispatchError;
use crate::spell_info::SpellInfo;
use crate::types::{AuraHandle, EffectIndex, SpellId, SpellMissInfo, UnitId};
use crate::world::CombatWorld;

/// Lifecycle points of a single cast, in the only order they may be dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifecycleStage {
    /// Context created, nothing dispatched yet.
    Prepared,
    Cast,
    Hit,
    Effect(EffectIndex),
}

/// Transient state of one ability invocation.
pub struct CastContext<'a> {
    /// The unit casting the ability.
    pub caster: UnitId,

    /// Selected unit target, if the ability has one.
    pub target: Option<UnitId>,

    /// Static definition of the ability being resolved.
    pub spell: &'a SpellInfo,

    /// Host collaborators.
    pub world: &'a mut dyn CombatWorld,

    damage: u32,
    miss: Option<SpellMissInfo>,
    stage: LifecycleStage,
}

impl<'a> CastContext<'a> {
    pub fn new(
        caster: UnitId,
        target: Option<UnitId>,
        spell: &'a SpellInfo,
        world: &'a mut dyn CombatWorld,
    ) -> Self {
        Self {
            caster,
            target,
            spell,
            world,
            damage: 0,
            miss: None,
            stage: LifecycleStage::Prepared,
        }
    }

    pub fn spell_id(&self) -> SpellId {
        self.spell.id
    }

    /// Current computed damage/amount for the effect being resolved.
    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn set_damage(&mut self, damage: u32) {
        self.damage = damage;
    }

    /// Hit outcome, once the pipeline has rolled it.
    pub fn miss_info(&self) -> Option<SpellMissInfo> {
        self.miss
    }

    pub fn set_miss_info(&mut self, miss: SpellMissInfo) {
        self.miss = Some(miss);
    }

    /// Effect slot currently being resolved, if effect execution has started.
    pub fn effect_index(&self) -> Option<EffectIndex> {
        match self.stage {
            LifecycleStage::Effect(effect) => Some(effect),
            _ => None,
        }
    }

    /// Last lifecycle stage dispatched for this cast.
    pub fn stage(&self) -> LifecycleStage {
        self.stage
    }

    /// Moves the cast to `stage`, rejecting anything not strictly later.
    pub(crate) fn advance(&mut self, stage: LifecycleStage) -> Result<(), DispatchError> {
        if stage <= self.stage {
            return Err(DispatchError::OutOfOrder {
                spell: self.spell.id,
                stage,
                after: self.stage,
            });
        }
        self.stage = stage;
        Ok(())
    }
}

impl core::fmt::Debug for CastContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CastContext")
            .field("spell", &self.spell.id)
            .field("caster", &self.caster)
            .field("target", &self.target)
            .field("damage", &self.damage)
            .field("miss", &self.miss)
            .field("stage", &self.stage)
            .finish_non_exhaustive()
    }
}

/// Transient state of one passive-aura proc evaluation.
pub struct ProcContext<'a> {
    pub attacker: UnitId,
    pub victim: UnitId,

    /// Ability that applied the triggering aura; used as the registry key.
    pub aura_spell: SpellId,
    pub aura: AuraHandle,

    pub world: &'a mut dyn CombatWorld,
}

impl<'a> ProcContext<'a> {
    pub fn new(
        attacker: UnitId,
        victim: UnitId,
        aura_spell: SpellId,
        aura: AuraHandle,
        world: &'a mut dyn CombatWorld,
    ) -> Self {
        Self {
            attacker,
            victim,
            aura_spell,
            aura,
            world,
        }
    }
}

impl core::fmt::Debug for ProcContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProcContext")
            .field("attacker", &self.attacker)
            .field("victim", &self.victim)
            .field("aura_spell", &self.aura_spell)
            .field("aura", &self.aura)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockWorld;

    #[test]
    fn stages_are_totally_ordered() {
        assert!(LifecycleStage::Prepared < LifecycleStage::Cast);
        assert!(LifecycleStage::Cast < LifecycleStage::Hit);
        assert!(LifecycleStage::Hit < LifecycleStage::Effect(EffectIndex::Effect0));
        assert!(
            LifecycleStage::Effect(EffectIndex::Effect0)
                < LifecycleStage::Effect(EffectIndex::Effect2)
        );
    }

    #[test]
    fn advance_rejects_repeats_and_regressions() {
        let spell = SpellInfo::new(SpellId(7));
        let mut world = MockWorld::new();
        let mut ctx = CastContext::new(UnitId(1), Some(UnitId(2)), &spell, &mut world);

        ctx.advance(LifecycleStage::Cast).unwrap();
        assert!(ctx.advance(LifecycleStage::Cast).is_err());

        ctx.advance(LifecycleStage::Effect(EffectIndex::Effect1)).unwrap();
        assert_eq!(ctx.effect_index(), Some(EffectIndex::Effect1));
        assert!(ctx.advance(LifecycleStage::Hit).is_err());
        assert!(ctx.advance(LifecycleStage::Effect(EffectIndex::Effect0)).is_err());
    }
}
