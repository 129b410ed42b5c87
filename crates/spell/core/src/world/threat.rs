//! Threat table accessors.

use crate::types::{SchoolMask, SpellId, UnitId};

/// One threat contribution credited to `attacker` on a victim's table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThreatContribution {
    pub attacker: UnitId,
    pub amount: f32,
    pub is_secondary: bool,
    pub school: SchoolMask,
    pub source: SpellId,
}

pub trait ThreatAccess {
    fn add_threat(&mut self, victim: UnitId, contribution: ThreatContribution);
}
