//! Ability-behavior extension framework.
//!
//! `spell-core` lets individual abilities override or augment default
//! resolution at fixed lifecycle points (cast initiation, hit resolution,
//! per-effect execution and passive proc evaluation). The host resolution
//! pipeline owns the simulation; this crate only reacts to its calls.
//!
//! - [`ScriptRegistryBuilder`] binds ability identifiers to [`SpellScript`]
//!   behaviors once at startup and freezes into a [`ScriptRegistry`].
//! - [`ScriptDispatcher`] invokes the matching hook at each lifecycle point and
//!   enforces the `OnCast → OnHit → OnEffectExecute(0..)` order per cast.
//! - Behaviors touch units, auras, threat and casting only through the
//!   collaborator traits in [`world`].
pub mod context;
pub mod dispatch;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod registry;
pub mod script;
pub mod spell_info;
pub mod types;
pub mod world;

pub use context::{CastContext, LifecycleStage, ProcContext};
pub use dispatch::{CastReport, EffectReport, HookStatus, ResolutionSteps, ScriptDispatcher};
pub use error::{CastFailure, DispatchError, ErrorSeverity, RegistryError, ScriptFault};
pub use registry::{
    ScriptBinding, ScriptBindings, ScriptCatalog, ScriptRegistry, ScriptRegistryBuilder,
};
pub use script::{CastHook, HookSet, ProcOutcome, SpellScript};
pub use spell_info::SpellInfo;
pub use types::{
    AuraHandle, AuraState, AuraType, DispelType, EffectIndex, PowerKind, SchoolMask,
    SpellFamily, SpellId, SpellMissInfo, UnitId, WeaponAttack,
};
pub use world::{
    AuraAccess, AuraSignature, AuraView, CastRequest, CombatWorld, SpellCasting, ThreatAccess,
    ThreatContribution, TriggerFlags, UnitAccess,
};
