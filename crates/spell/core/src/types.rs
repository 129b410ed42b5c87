//! Identifiers and enumerations shared by the hook framework and behaviors.
//!
//! These mirror the vocabulary of the host resolution pipeline: units, spells,
//! effect slots, resource kinds and hit outcomes. None of them own any state.

use bitflags::bitflags;

/// Opaque numeric key naming one ability definition.
///
/// Stable for the lifetime of the process and used as the registry key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpellId(pub u32);

impl core::fmt::Display for SpellId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "spell#{}", self.0)
    }
}

/// Handle to a combat unit owned by the host world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitId(pub u64);

impl core::fmt::Display for UnitId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

/// Handle to an aura instance owned by the aura subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuraHandle(pub u64);

/// One of the independently resolved effect slots of an ability.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum EffectIndex {
    Effect0 = 0,
    Effect1 = 1,
    Effect2 = 2,
}

impl EffectIndex {
    /// Number of effect slots an ability definition carries.
    pub const COUNT: usize = 3;

    /// Slot position usable as an index into per-effect tables.
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    pub const fn from_usize(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Effect0),
            1 => Some(Self::Effect1),
            2 => Some(Self::Effect2),
            _ => None,
        }
    }
}

/// Kinds of per-unit resource pools.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PowerKind {
    Mana,
    Rage,
    Focus,
    Energy,
}

/// Combat state flags toggled on a unit to gate ability availability.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AuraState {
    Defense,
    Frozen,
    Judgement,
    VictoryRush,
}

/// Modifier categories used to look up auras on a unit.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AuraType {
    ModResistance,
    ModDecreaseSpeed,
    ModRoot,
    ModStun,
    ProcTriggerSpell,
}

/// Class family an ability definition belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SpellFamily {
    #[default]
    Generic,
    Warrior,
    Rogue,
    Hunter,
}

/// How (if at all) an applied modifier can be removed by dispel effects.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DispelType {
    /// Not dispellable.
    #[default]
    None,
    Magic,
    Curse,
    Disease,
    Poison,
}

/// Weapon attack slot used for attack-power queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum WeaponAttack {
    #[default]
    Base,
    OffHand,
    Ranged,
}

/// Outcome of the hit check for one target of a cast.
///
/// Treated as data: behaviors inspect it, nothing treats it as a failure.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SpellMissInfo {
    /// Clean hit.
    #[default]
    None,
    Miss,
    Resist,
    Dodge,
    Parry,
    Block,
    Evade,
    Immune,
    Deflect,
    Absorb,
    Reflect,
}

impl SpellMissInfo {
    /// Returns true if the hit landed with no avoidance of any kind.
    pub const fn is_clean_hit(&self) -> bool {
        matches!(self, Self::None)
    }
}

bitflags! {
    /// Damage schools an ability deals, used to tag threat contributions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SchoolMask: u8 {
        const PHYSICAL = 1 << 0;
        const HOLY     = 1 << 1;
        const FIRE     = 1 << 2;
        const NATURE   = 1 << 3;
        const FROST    = 1 << 4;
        const SHADOW   = 1 << 5;
        const ARCANE   = 1 << 6;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn effect_slots_iterate_in_order() {
        let slots: Vec<_> = EffectIndex::iter().map(EffectIndex::as_usize).collect();
        assert_eq!(slots, vec![0, 1, 2]);
        assert_eq!(EffectIndex::from_usize(2), Some(EffectIndex::Effect2));
        assert_eq!(EffectIndex::from_usize(EffectIndex::COUNT), None);
    }

    #[test]
    fn only_none_is_a_clean_hit() {
        assert!(SpellMissInfo::None.is_clean_hit());
        for outcome in [
            SpellMissInfo::Miss,
            SpellMissInfo::Dodge,
            SpellMissInfo::Parry,
            SpellMissInfo::Block,
            SpellMissInfo::Absorb,
        ] {
            assert!(!outcome.is_clean_hit(), "{outcome} should not be clean");
        }
    }

    #[test]
    fn power_kind_parses_case_insensitively() {
        assert_eq!("RAGE".parse::<PowerKind>(), Ok(PowerKind::Rage));
        assert_eq!(PowerKind::Energy.as_ref(), "energy");
    }
}
