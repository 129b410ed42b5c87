//! Aura subsystem accessors.

use crate::types::{AuraHandle, AuraType, DispelType, SpellFamily, SpellId, UnitId};

/// Identifies an applied aura by modifier type, class family and caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuraSignature {
    pub aura_type: AuraType,
    pub family: SpellFamily,
    /// Matches auras whose family flags intersect this mask.
    pub family_flags: u64,
    /// Restricts the match to auras applied by this unit.
    pub caster: Option<UnitId>,
}

/// Snapshot of an aura at the moment it was looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuraView {
    pub handle: AuraHandle,
    pub spell: SpellId,
    pub caster: UnitId,
    pub stack: u32,
    pub max_stack: u32,
    pub spell_icon_id: u32,
    pub dispel: DispelType,
}

impl AuraView {
    pub const fn is_at_max_stack(&self) -> bool {
        self.stack >= self.max_stack
    }
}

pub trait AuraAccess {
    /// First aura on `target` matching `signature`, if any.
    fn find_aura(&self, target: UnitId, signature: &AuraSignature) -> Option<AuraView>;

    /// All auras of one modifier type on `target`, in application order.
    fn auras_by_type(&self, target: UnitId, aura_type: AuraType) -> Vec<AuraView>;

    /// Resets the duration of the aura's holder without changing its stack count.
    fn refresh_holder(&mut self, aura: AuraHandle);
}
