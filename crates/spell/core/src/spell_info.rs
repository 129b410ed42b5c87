//! Static ability definitions as seen by behaviors.
//!
//! Definitions are loaded by the host from static configuration; this crate
//! only reads them.

use crate::types::{DispelType, EffectIndex, SchoolMask, SpellFamily, SpellId};

/// Static definition of one ability.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellInfo {
    pub id: SpellId,
    pub family: SpellFamily,
    /// Family flags identifying the ability within its family (rank-independent).
    pub family_flags: u64,
    pub school_mask: SchoolMask,
    /// Which effect slots this ability resolves.
    pub effects: [bool; EffectIndex::COUNT],
    /// Base value per effect slot.
    pub effect_base_points: [i32; EffectIndex::COUNT],
    /// Per-effect damage multiplier.
    pub damage_multiplier: [f32; EffectIndex::COUNT],
    /// Maximum stack count when applied as an aura (0 = does not stack).
    pub stack_amount: u32,
    pub spell_icon_id: u32,
    pub dispel: DispelType,
}

impl SpellInfo {
    /// Creates a definition with a single active effect in slot 0.
    pub fn new(id: SpellId) -> Self {
        Self {
            id,
            family: SpellFamily::Generic,
            family_flags: 0,
            school_mask: SchoolMask::PHYSICAL,
            effects: [true, false, false],
            effect_base_points: [0; EffectIndex::COUNT],
            damage_multiplier: [1.0; EffectIndex::COUNT],
            stack_amount: 0,
            spell_icon_id: 0,
            dispel: DispelType::None,
        }
    }

    pub fn base_points(&self, effect: EffectIndex) -> i32 {
        self.effect_base_points[effect.as_usize()]
    }

    pub fn multiplier(&self, effect: EffectIndex) -> f32 {
        self.damage_multiplier[effect.as_usize()]
    }

    pub fn has_effect(&self, effect: EffectIndex) -> bool {
        self.effects[effect.as_usize()]
    }

    /// Iterates the effect slots this ability resolves, in slot order.
    pub fn active_effects(&self) -> impl Iterator<Item = EffectIndex> + '_ {
        (0..EffectIndex::COUNT)
            .filter_map(EffectIndex::from_usize)
            .filter(|effect| self.has_effect(*effect))
    }

    // ===== builder helpers =====

    pub fn with_family(mut self, family: SpellFamily, family_flags: u64) -> Self {
        self.family = family;
        self.family_flags = family_flags;
        self
    }

    pub fn with_school(mut self, school_mask: SchoolMask) -> Self {
        self.school_mask = school_mask;
        self
    }

    /// Enables `effect` with the given base value and multiplier.
    pub fn with_effect(mut self, effect: EffectIndex, base_points: i32, multiplier: f32) -> Self {
        let slot = effect.as_usize();
        self.effects[slot] = true;
        self.effect_base_points[slot] = base_points;
        self.damage_multiplier[slot] = multiplier;
        self
    }

    pub fn with_stack_amount(mut self, stack_amount: u32) -> Self {
        self.stack_amount = stack_amount;
        self
    }

    pub fn with_icon(mut self, spell_icon_id: u32, dispel: DispelType) -> Self {
        self.spell_icon_id = spell_icon_id;
        self.dispel = dispel;
        self
    }
}
