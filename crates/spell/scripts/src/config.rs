use spell_core::SpellId;

/// Tunables and companion ability identifiers used by the warrior behaviors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WarriorConfig {
    /// Damage-dealing follow-up cast by Execute.
    pub execute_damage_spell: SpellId,

    /// First rank of the Sunder Armor chain applied by Devastate.
    pub sunder_armor_first_rank: SpellId,

    /// Family flags identifying Sunder Armor auras across ranks.
    pub sunder_family_flags: u64,

    /// Bonus threat Devastate adds per Sunder Armor stack.
    pub devastate_threat_per_stack: f32,

    /// Counter-attack cast by Retaliation.
    pub retaliation_strike_spell: SpellId,

    /// Spell icon shared by Hamstring-style slows that empower Heroic Strike.
    pub hamstring_icon_id: u32,
}

impl WarriorConfig {
    pub const DEFAULT_EXECUTE_DAMAGE_SPELL: SpellId = SpellId(20647);
    pub const DEFAULT_SUNDER_ARMOR_FIRST_RANK: SpellId = SpellId(7386);
    pub const DEFAULT_SUNDER_FAMILY_FLAGS: u64 = 0x0000_0000_0000_4000;
    pub const DEFAULT_DEVASTATE_THREAT_PER_STACK: f32 = 14.0;
    pub const DEFAULT_RETALIATION_STRIKE_SPELL: SpellId = SpellId(20240);
    pub const DEFAULT_HAMSTRING_ICON_ID: u32 = 15;

    pub fn new() -> Self {
        Self {
            execute_damage_spell: Self::DEFAULT_EXECUTE_DAMAGE_SPELL,
            sunder_armor_first_rank: Self::DEFAULT_SUNDER_ARMOR_FIRST_RANK,
            sunder_family_flags: Self::DEFAULT_SUNDER_FAMILY_FLAGS,
            devastate_threat_per_stack: Self::DEFAULT_DEVASTATE_THREAT_PER_STACK,
            retaliation_strike_spell: Self::DEFAULT_RETALIATION_STRIKE_SPELL,
            hamstring_icon_id: Self::DEFAULT_HAMSTRING_ICON_ID,
        }
    }
}

impl Default for WarriorConfig {
    fn default() -> Self {
        Self::new()
    }
}
