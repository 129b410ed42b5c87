//! Internally generated ability applications.

use crate::error::CastFailure;
use crate::types::{EffectIndex, SpellId, UnitId};

/// Which of the normal cast checks an internally generated application skips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerFlags {
    /// Land without rolling hit/miss/avoidance.
    pub skip_hit_roll: bool,
    /// Do not charge resource costs.
    pub skip_cost: bool,
    /// Ignore (and do not start) the global cooldown.
    pub skip_gcd: bool,
    /// Do not interrupt or wait on the caster's current cast.
    pub skip_reentrancy_guard: bool,
}

impl TriggerFlags {
    /// Regular cast, all checks applied.
    pub const NONE: Self = Self {
        skip_hit_roll: false,
        skip_cost: false,
        skip_gcd: false,
        skip_reentrancy_guard: false,
    };

    /// Guaranteed side effect: every check skipped.
    pub const FULL: Self = Self {
        skip_hit_roll: true,
        skip_cost: true,
        skip_gcd: true,
        skip_reentrancy_guard: true,
    };

    pub const fn with_skip_hit_roll(mut self) -> Self {
        self.skip_hit_roll = true;
        self
    }

    pub const fn with_skip_cost(mut self) -> Self {
        self.skip_cost = true;
        self
    }

    pub const fn with_skip_gcd(mut self) -> Self {
        self.skip_gcd = true;
        self
    }

    pub const fn with_skip_reentrancy_guard(mut self) -> Self {
        self.skip_reentrancy_guard = true;
        self
    }
}

/// Request to apply an ability from inside a hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastRequest {
    pub spell: SpellId,
    pub target: UnitId,
    /// Per-slot overrides of the definition's base values.
    pub base_points: [Option<i32>; EffectIndex::COUNT],
    pub flags: TriggerFlags,
}

impl CastRequest {
    pub fn new(spell: SpellId, target: UnitId, flags: TriggerFlags) -> Self {
        Self {
            spell,
            target,
            base_points: [None; EffectIndex::COUNT],
            flags,
        }
    }

    pub fn with_base_points(mut self, effect: EffectIndex, value: i32) -> Self {
        self.base_points[effect.as_usize()] = Some(value);
        self
    }
}

pub trait SpellCasting {
    /// Applies `request` on behalf of `caster`, resolving it immediately.
    fn cast_spell(&mut self, caster: UnitId, request: CastRequest) -> Result<(), CastFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_single_flags() {
        let flags = TriggerFlags::NONE.with_skip_gcd().with_skip_cost();
        assert!(flags.skip_gcd && flags.skip_cost);
        assert!(!flags.skip_hit_roll && !flags.skip_reentrancy_guard);
        assert_eq!(
            TriggerFlags::NONE
                .with_skip_hit_roll()
                .with_skip_cost()
                .with_skip_gcd()
                .with_skip_reentrancy_guard(),
            TriggerFlags::FULL
        );
    }

    #[test]
    fn base_point_override_targets_one_slot() {
        let request = CastRequest::new(SpellId(20647), UnitId(2), TriggerFlags::NONE)
            .with_base_points(EffectIndex::Effect0, 450);
        assert_eq!(request.base_points, [Some(450), None, None]);
    }
}
