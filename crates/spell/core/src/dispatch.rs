//! Hook dispatch.
//!
//! The host resolution pipeline calls into [`ScriptDispatcher`] at each
//! lifecycle point. The dispatcher looks up the behavior bound to the ability,
//! checks that it declares the matching capability, and invokes it. A missing
//! behavior or hook is not an error: it tells the host to apply only default
//! resolution.
//!
//! ## Ordering
//!
//! For one cast, hooks run in the fixed order
//! `OnCast → OnHit → OnEffectExecute(0) → OnEffectExecute(1) → …`. Each stage is
//! dispatched at most once; stages may be skipped (interrupted casts, missed
//! hits) but never revisited. Violations are rejected with
//! [`DispatchError::OutOfOrder`] before any behavior runs.
//!
//! There is no rollback: side effects applied by earlier hooks of a cast stay
//! applied if a later stage never happens.

use crate::context::{CastContext, ProcContext};
use crate::error::DispatchError;
use crate::registry::ScriptRegistry;
use crate::script::{CastHook, HookSet, ProcOutcome};
use crate::types::{EffectIndex, SpellMissInfo};

/// Whether a dispatched hook ran behavior code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookStatus {
    /// A behavior hook was invoked.
    Invoked,
    /// No behavior or no matching hook; only default resolution applies.
    Default,
}

/// Host-side resolution steps driven by [`ScriptDispatcher::run_cast`].
pub trait ResolutionSteps {
    /// Rolls hit/miss/avoidance for the cast's unit target.
    fn roll_hit(&mut self, ctx: &mut CastContext<'_>) -> SpellMissInfo;

    /// Default amount for `effect` before any behavior adjusts it.
    fn prepare_effect(&mut self, ctx: &mut CastContext<'_>, effect: EffectIndex) -> u32;

    /// Applies the final amount of `effect` to the world.
    fn apply_effect(&mut self, ctx: &mut CastContext<'_>, effect: EffectIndex, amount: u32);
}

/// Final amount of one executed effect slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectReport {
    pub effect: EffectIndex,
    pub amount: u32,
}

/// Summary of a cast driven through [`ScriptDispatcher::run_cast`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastReport {
    pub miss: SpellMissInfo,
    /// Executed effects in slot order; empty when the hit did not land.
    pub effects: Vec<EffectReport>,
}

impl CastReport {
    pub fn amount(&self, effect: EffectIndex) -> Option<u32> {
        self.effects
            .iter()
            .find(|report| report.effect == effect)
            .map(|report| report.amount)
    }
}

/// Invokes behavior hooks from a frozen registry.
#[derive(Clone, Copy, Debug)]
pub struct ScriptDispatcher<'r> {
    registry: &'r ScriptRegistry,
}

impl<'r> ScriptDispatcher<'r> {
    pub fn new(registry: &'r ScriptRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r ScriptRegistry {
        self.registry
    }

    /// Dispatches one cast-lifecycle hook.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::OutOfOrder` if `hook` is not strictly later than
    /// the last stage dispatched for `ctx`. The behavior is not invoked.
    pub fn dispatch(
        &self,
        hook: CastHook,
        ctx: &mut CastContext<'_>,
    ) -> Result<HookStatus, DispatchError> {
        if let Err(err) = ctx.advance(hook.stage()) {
            tracing::error!("Rejected hook dispatch: {}", err);
            return Err(err);
        }
        if let CastHook::Hit(miss) = hook {
            ctx.set_miss_info(miss);
        }

        let spell = ctx.spell_id();
        let Some(script) = self.registry.lookup(spell) else {
            tracing::trace!("{}: no script, default {:?}", spell, hook);
            return Ok(HookStatus::Default);
        };
        if !script.hooks().contains(hook.capability()) {
            tracing::trace!("{}: script has no {:?} hook", spell, hook);
            return Ok(HookStatus::Default);
        }

        tracing::trace!("{}: invoking {:?}", spell, hook);
        match hook {
            CastHook::Cast => script.on_cast(ctx),
            CastHook::Hit(miss) => script.on_hit(ctx, miss),
            CastHook::EffectExecute(effect) => script.on_effect_execute(ctx, effect),
        }
        Ok(HookStatus::Invoked)
    }

    pub fn on_cast(&self, ctx: &mut CastContext<'_>) -> Result<HookStatus, DispatchError> {
        self.dispatch(CastHook::Cast, ctx)
    }

    pub fn on_hit(
        &self,
        ctx: &mut CastContext<'_>,
        miss: SpellMissInfo,
    ) -> Result<HookStatus, DispatchError> {
        self.dispatch(CastHook::Hit(miss), ctx)
    }

    pub fn on_effect_execute(
        &self,
        ctx: &mut CastContext<'_>,
        effect: EffectIndex,
    ) -> Result<HookStatus, DispatchError> {
        self.dispatch(CastHook::EffectExecute(effect), ctx)
    }

    /// Evaluates the proc hook of the behavior bound to the triggering aura.
    ///
    /// Returns `None` when no behavior with an `OnProc` hook is bound, in which
    /// case the host applies its default proc handling.
    pub fn dispatch_proc(&self, ctx: &mut ProcContext<'_>) -> Option<ProcOutcome> {
        let script = self.registry.lookup(ctx.aura_spell)?;
        if !script.hooks().contains(HookSet::ON_PROC) {
            return None;
        }
        let outcome = script.on_proc(ctx);
        tracing::trace!(
            "{}: proc {} -> {} = {}",
            ctx.aura_spell,
            ctx.attacker,
            ctx.victim,
            outcome
        );
        Some(outcome)
    }

    /// Drives a complete cast through every lifecycle point in order.
    ///
    /// Effects execute only if the hit landed cleanly. Per effect the host
    /// computes the default amount, the behavior may adjust it, and the host
    /// applies the result.
    pub fn run_cast(
        &self,
        ctx: &mut CastContext<'_>,
        steps: &mut impl ResolutionSteps,
    ) -> Result<CastReport, DispatchError> {
        self.on_cast(ctx)?;

        let miss = steps.roll_hit(ctx);
        self.on_hit(ctx, miss)?;

        let mut report = CastReport {
            miss,
            effects: Vec::new(),
        };
        if !miss.is_clean_hit() {
            tracing::debug!("{}: {} on hit, skipping effects", ctx.spell_id(), miss);
            return Ok(report);
        }

        let spell = ctx.spell;
        for effect in spell.active_effects() {
            let amount = steps.prepare_effect(ctx, effect);
            ctx.set_damage(amount);
            self.on_effect_execute(ctx, effect)?;

            let amount = ctx.damage();
            steps.apply_effect(ctx, effect, amount);
            report.effects.push(EffectReport { effect, amount });
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::mock::MockWorld;
    use crate::script::SpellScript;
    use crate::spell_info::SpellInfo;
    use crate::types::{AuraHandle, SpellId, UnitId};

    /// Records every hook it receives.
    struct Recorder {
        hooks: HookSet,
        seen: Mutex<Vec<CastHook>>,
    }

    impl Recorder {
        fn new(hooks: HookSet) -> Arc<Self> {
            Arc::new(Self {
                hooks,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<CastHook> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl SpellScript for Recorder {
        fn hooks(&self) -> HookSet {
            self.hooks
        }

        fn on_cast(&self, _ctx: &mut CastContext<'_>) {
            self.seen.lock().unwrap().push(CastHook::Cast);
        }

        fn on_hit(&self, _ctx: &mut CastContext<'_>, miss: SpellMissInfo) {
            self.seen.lock().unwrap().push(CastHook::Hit(miss));
        }

        fn on_effect_execute(&self, ctx: &mut CastContext<'_>, effect: EffectIndex) {
            self.seen.lock().unwrap().push(CastHook::EffectExecute(effect));
            ctx.set_damage(ctx.damage() + 1);
        }

        fn on_proc(&self, _ctx: &mut ProcContext<'_>) -> ProcOutcome {
            ProcOutcome::Suppressed
        }
    }

    struct FixedSteps {
        miss: SpellMissInfo,
        applied: Vec<(EffectIndex, u32)>,
    }

    impl ResolutionSteps for FixedSteps {
        fn roll_hit(&mut self, _ctx: &mut CastContext<'_>) -> SpellMissInfo {
            self.miss
        }

        fn prepare_effect(&mut self, ctx: &mut CastContext<'_>, effect: EffectIndex) -> u32 {
            ctx.spell.base_points(effect) as u32
        }

        fn apply_effect(&mut self, _ctx: &mut CastContext<'_>, effect: EffectIndex, amount: u32) {
            self.applied.push((effect, amount));
        }
    }

    fn registry_with(spell: SpellId, script: Arc<Recorder>) -> ScriptRegistry {
        let mut builder = ScriptRegistry::builder();
        builder.register(spell, script).unwrap();
        builder.build()
    }

    fn three_effect_spell() -> SpellInfo {
        SpellInfo::new(SpellId(100))
            .with_effect(EffectIndex::Effect0, 10, 1.0)
            .with_effect(EffectIndex::Effect1, 20, 1.0)
            .with_effect(EffectIndex::Effect2, 30, 1.0)
    }

    #[test]
    fn run_cast_invokes_hooks_in_lifecycle_order() {
        let recorder = Recorder::new(HookSet::all());
        let registry = registry_with(SpellId(100), Arc::clone(&recorder));
        let dispatcher = ScriptDispatcher::new(&registry);

        let spell = three_effect_spell();
        let mut world = MockWorld::new();
        let mut ctx = CastContext::new(UnitId(1), Some(UnitId(2)), &spell, &mut world);
        let mut steps = FixedSteps {
            miss: SpellMissInfo::None,
            applied: Vec::new(),
        };

        let report = dispatcher.run_cast(&mut ctx, &mut steps).unwrap();

        assert_eq!(
            recorder.seen(),
            vec![
                CastHook::Cast,
                CastHook::Hit(SpellMissInfo::None),
                CastHook::EffectExecute(EffectIndex::Effect0),
                CastHook::EffectExecute(EffectIndex::Effect1),
                CastHook::EffectExecute(EffectIndex::Effect2),
            ]
        );
        assert_eq!(report.amount(EffectIndex::Effect1), Some(21));
        assert_eq!(
            steps.applied,
            vec![
                (EffectIndex::Effect0, 11),
                (EffectIndex::Effect1, 21),
                (EffectIndex::Effect2, 31),
            ]
        );
    }

    #[test]
    fn missed_cast_skips_effects() {
        let recorder = Recorder::new(HookSet::all());
        let registry = registry_with(SpellId(100), Arc::clone(&recorder));
        let dispatcher = ScriptDispatcher::new(&registry);

        let spell = three_effect_spell();
        let mut world = MockWorld::new();
        let mut ctx = CastContext::new(UnitId(1), Some(UnitId(2)), &spell, &mut world);
        let mut steps = FixedSteps {
            miss: SpellMissInfo::Parry,
            applied: Vec::new(),
        };

        let report = dispatcher.run_cast(&mut ctx, &mut steps).unwrap();

        assert_eq!(report.miss, SpellMissInfo::Parry);
        assert!(report.effects.is_empty());
        assert!(steps.applied.is_empty());
        assert_eq!(ctx.miss_info(), Some(SpellMissInfo::Parry));
        assert_eq!(recorder.seen().len(), 2);
    }

    #[test]
    fn undeclared_hooks_fall_through_to_default() {
        let recorder = Recorder::new(HookSet::ON_HIT);
        let registry = registry_with(SpellId(100), Arc::clone(&recorder));
        let dispatcher = ScriptDispatcher::new(&registry);

        let spell = three_effect_spell();
        let mut world = MockWorld::new();
        let mut ctx = CastContext::new(UnitId(1), Some(UnitId(2)), &spell, &mut world);

        assert_eq!(dispatcher.on_cast(&mut ctx), Ok(HookStatus::Default));
        assert_eq!(
            dispatcher.on_hit(&mut ctx, SpellMissInfo::None),
            Ok(HookStatus::Invoked)
        );
        assert_eq!(recorder.seen(), vec![CastHook::Hit(SpellMissInfo::None)]);
    }

    #[test]
    fn unscripted_spell_resolves_by_default() {
        let registry = ScriptRegistry::empty();
        let dispatcher = ScriptDispatcher::new(&registry);

        let spell = SpellInfo::new(SpellId(5));
        let mut world = MockWorld::new();
        let mut ctx = CastContext::new(UnitId(1), None, &spell, &mut world);

        assert_eq!(dispatcher.on_cast(&mut ctx), Ok(HookStatus::Default));
        assert!(registry.is_empty());
    }

    #[test]
    fn repeated_stage_is_rejected_without_invoking() {
        let recorder = Recorder::new(HookSet::all());
        let registry = registry_with(SpellId(100), Arc::clone(&recorder));
        let dispatcher = ScriptDispatcher::new(&registry);

        let spell = three_effect_spell();
        let mut world = MockWorld::new();
        let mut ctx = CastContext::new(UnitId(1), Some(UnitId(2)), &spell, &mut world);

        dispatcher
            .on_effect_execute(&mut ctx, EffectIndex::Effect1)
            .unwrap();
        let err = dispatcher.on_cast(&mut ctx).unwrap_err();

        assert!(matches!(err, DispatchError::OutOfOrder { .. }));
        assert_eq!(
            recorder.seen(),
            vec![CastHook::EffectExecute(EffectIndex::Effect1)]
        );
    }

    #[test]
    fn proc_dispatch_requires_the_proc_capability() {
        let with_proc = Recorder::new(HookSet::ON_PROC);
        let registry = registry_with(SpellId(7), with_proc);
        let dispatcher = ScriptDispatcher::new(&registry);
        let mut world = MockWorld::new();

        let mut ctx = ProcContext::new(UnitId(1), UnitId(2), SpellId(7), AuraHandle(1), &mut world);
        assert_eq!(dispatcher.dispatch_proc(&mut ctx), Some(ProcOutcome::Suppressed));

        let mut ctx = ProcContext::new(UnitId(1), UnitId(2), SpellId(8), AuraHandle(1), &mut world);
        assert_eq!(dispatcher.dispatch_proc(&mut ctx), None);

        let without_proc = Recorder::new(HookSet::ON_CAST);
        let registry = registry_with(SpellId(7), without_proc);
        let dispatcher = ScriptDispatcher::new(&registry);
        let mut ctx = ProcContext::new(UnitId(1), UnitId(2), SpellId(7), AuraHandle(1), &mut world);
        assert_eq!(dispatcher.dispatch_proc(&mut ctx), None);
    }
}
