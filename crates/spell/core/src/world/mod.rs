//! Collaborator interfaces consumed by behaviors.
//!
//! The unit model, aura subsystem, threat tables and casting pipeline all live
//! in the host. Behaviors reach them only through these traits, which keeps the
//! framework free of any concrete world representation. [`CombatWorld`]
//! bundles them so hooks receive a single `&mut dyn CombatWorld`.
mod auras;
mod casting;
mod threat;
mod units;

pub use auras::{AuraAccess, AuraSignature, AuraView};
pub use casting::{CastRequest, SpellCasting, TriggerFlags};
pub use threat::{ThreatAccess, ThreatContribution};
pub use units::UnitAccess;

/// Everything a behavior may read or mutate during resolution.
///
/// Implemented automatically for any type providing all four collaborator
/// interfaces. Synchronization, if any, is the host's concern.
pub trait CombatWorld: UnitAccess + AuraAccess + ThreatAccess + SpellCasting {}

impl<T: ?Sized> CombatWorld for T where T: UnitAccess + AuraAccess + ThreatAccess + SpellCasting {}
