//! The behavior contract.
//!
//! A [`SpellScript`] overrides or augments default resolution at up to four
//! fixed lifecycle points. Implementations declare which ones they provide via
//! [`SpellScript::hooks`]; the dispatcher consults that set instead of calling
//! every method and relying on no-op defaults.
//!
//! Scripts are stateless across invocations: everything they read or write
//! belongs to the context or the world behind it.

use bitflags::bitflags;

use crate::context::{CastContext, LifecycleStage, ProcContext};
use crate::types::{EffectIndex, SpellMissInfo};

bitflags! {
    /// Capability set of a behavior.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct HookSet: u8 {
        const ON_CAST           = 1 << 0;
        const ON_HIT            = 1 << 1;
        const ON_EFFECT_EXECUTE = 1 << 2;
        const ON_PROC           = 1 << 3;
    }
}

/// Result of evaluating a proc hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ProcOutcome {
    /// The proc fired and its side effects were applied.
    Triggered,
    /// The event did not qualify.
    NotTriggered,
    /// The event qualified but a behavior condition vetoed it.
    Suppressed,
}

/// Cast-lifecycle hook points, in dispatch order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastHook {
    Cast,
    Hit(SpellMissInfo),
    EffectExecute(EffectIndex),
}

impl CastHook {
    pub const fn stage(&self) -> LifecycleStage {
        match self {
            Self::Cast => LifecycleStage::Cast,
            Self::Hit(_) => LifecycleStage::Hit,
            Self::EffectExecute(effect) => LifecycleStage::Effect(*effect),
        }
    }

    /// Capability a behavior must declare to receive this hook.
    pub const fn capability(&self) -> HookSet {
        match self {
            Self::Cast => HookSet::ON_CAST,
            Self::Hit(_) => HookSet::ON_HIT,
            Self::EffectExecute(_) => HookSet::ON_EFFECT_EXECUTE,
        }
    }
}

/// Ability-specific deviation from default resolution.
///
/// Hooks must not fail: any side effect that cannot be applied degrades to a
/// no-op so the rest of the cast still resolves.
pub trait SpellScript: Send + Sync {
    /// Which hooks this behavior implements.
    fn hooks(&self) -> HookSet;

    /// Cast initiation, before hit determination.
    fn on_cast(&self, _ctx: &mut CastContext<'_>) {}

    /// Hit resolution against the unit target.
    fn on_hit(&self, _ctx: &mut CastContext<'_>, _miss: SpellMissInfo) {}

    /// Execution of one effect slot; `ctx.damage()` holds the amount so far.
    fn on_effect_execute(&self, _ctx: &mut CastContext<'_>, _effect: EffectIndex) {}

    /// Passive aura reaction to a qualifying combat event.
    fn on_proc(&self, _ctx: &mut ProcContext<'_>) -> ProcOutcome {
        ProcOutcome::NotTriggered
    }
}
