//! In-memory combat world for testing behaviors without a host pipeline.
//!
//! [`MockWorld`] implements every collaborator trait over plain maps and
//! records the side effects behaviors produce (casts, threat, refreshes) so
//! tests can assert on them.

use std::collections::{HashMap, HashSet};

use crate::error::CastFailure;
use crate::spell_info::SpellInfo;
use crate::types::{
    AuraHandle, AuraState, AuraType, DispelType, EffectIndex, PowerKind, SpellFamily, SpellId,
    UnitId, WeaponAttack,
};
use crate::world::{
    AuraAccess, AuraSignature, AuraView, CastRequest, SpellCasting, ThreatAccess,
    ThreatContribution, UnitAccess,
};

/// An aura applied to a unit in the mock world.
#[derive(Clone, Debug, PartialEq)]
pub struct MockAura {
    pub handle: AuraHandle,
    pub target: UnitId,
    pub caster: UnitId,
    pub spell: SpellId,
    pub aura_type: AuraType,
    pub family: SpellFamily,
    pub family_flags: u64,
    pub stack: u32,
    pub max_stack: u32,
    pub spell_icon_id: u32,
    pub dispel: DispelType,
}

impl MockAura {
    fn view(&self) -> AuraView {
        AuraView {
            handle: self.handle,
            spell: self.spell,
            caster: self.caster,
            stack: self.stack,
            max_stack: self.max_stack,
            spell_icon_id: self.spell_icon_id,
            dispel: self.dispel,
        }
    }

    fn matches(&self, target: UnitId, signature: &AuraSignature) -> bool {
        self.target == target
            && self.aura_type == signature.aura_type
            && self.family == signature.family
            && self.family_flags & signature.family_flags != 0
            && signature.caster.is_none_or(|caster| caster == self.caster)
    }
}

/// Aura a spell applies to its target when cast in the mock world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuraTemplate {
    pub aura_type: AuraType,
    pub family: SpellFamily,
    pub family_flags: u64,
    pub max_stack: u32,
    pub spell_icon_id: u32,
    pub dispel: DispelType,
}

impl AuraTemplate {
    pub fn new(aura_type: AuraType) -> Self {
        Self {
            aura_type,
            family: SpellFamily::Generic,
            family_flags: 0,
            max_stack: 1,
            spell_icon_id: 0,
            dispel: DispelType::None,
        }
    }

    pub fn with_family(mut self, family: SpellFamily, family_flags: u64) -> Self {
        self.family = family;
        self.family_flags = family_flags;
        self
    }

    pub fn with_max_stack(mut self, max_stack: u32) -> Self {
        self.max_stack = max_stack;
        self
    }

    pub fn with_icon(mut self, spell_icon_id: u32, dispel: DispelType) -> Self {
        self.spell_icon_id = spell_icon_id;
        self.dispel = dispel;
        self
    }
}

/// Recorded call to [`SpellCasting::cast_spell`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastRecord {
    pub caster: UnitId,
    pub request: CastRequest,
}

#[derive(Debug, Default)]
pub struct MockWorld {
    powers: HashMap<(UnitId, PowerKind), u32>,
    attack_power: HashMap<UnitId, f32>,
    back_arcs: HashSet<(UnitId, UnitId)>,
    aura_states: HashSet<(UnitId, AuraState)>,
    learned: HashMap<(UnitId, SpellId), SpellId>,
    auras: Vec<MockAura>,
    next_aura: u64,
    cast_auras: HashMap<SpellId, AuraTemplate>,
    failing_casts: HashSet<SpellId>,

    casts: Vec<CastRecord>,
    threat: Vec<(UnitId, ThreatContribution)>,
    refreshed: Vec<AuraHandle>,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== setup =====

    pub fn with_power(mut self, unit: UnitId, kind: PowerKind, value: u32) -> Self {
        self.powers.insert((unit, kind), value);
        self
    }

    pub fn with_attack_power(mut self, unit: UnitId, attack_power: f32) -> Self {
        self.attack_power.insert(unit, attack_power);
        self
    }

    /// Places `other` inside `unit`'s back arc.
    pub fn with_in_back_arc(mut self, unit: UnitId, other: UnitId) -> Self {
        self.back_arcs.insert((unit, other));
        self
    }

    pub fn with_aura_state(mut self, unit: UnitId, state: AuraState) -> Self {
        self.aura_states.insert((unit, state));
        self
    }

    pub fn with_learned_rank(mut self, unit: UnitId, first_rank: SpellId, rank: SpellId) -> Self {
        self.learned.insert((unit, first_rank), rank);
        self
    }

    /// Makes casting `spell` apply (or stack) an aura on the target.
    pub fn with_cast_aura(mut self, spell: SpellId, template: AuraTemplate) -> Self {
        self.cast_auras.insert(spell, template);
        self
    }

    /// Makes every cast of `spell` fail.
    pub fn with_failing_cast(mut self, spell: SpellId) -> Self {
        self.failing_casts.insert(spell);
        self
    }

    /// Applies an aura directly and returns its handle.
    pub fn apply_aura(
        &mut self,
        target: UnitId,
        caster: UnitId,
        spell: SpellId,
        template: AuraTemplate,
        stack: u32,
    ) -> AuraHandle {
        self.next_aura += 1;
        let handle = AuraHandle(self.next_aura);
        self.auras.push(MockAura {
            handle,
            target,
            caster,
            spell,
            aura_type: template.aura_type,
            family: template.family,
            family_flags: template.family_flags,
            stack,
            max_stack: template.max_stack,
            spell_icon_id: template.spell_icon_id,
            dispel: template.dispel,
        });
        handle
    }

    // ===== inspection =====

    pub fn casts(&self) -> &[CastRecord] {
        &self.casts
    }

    /// Threat contributions added to `victim`'s table, in order.
    pub fn threat_on(&self, victim: UnitId) -> Vec<ThreatContribution> {
        self.threat
            .iter()
            .filter(|(unit, _)| *unit == victim)
            .map(|(_, contribution)| *contribution)
            .collect()
    }

    pub fn refreshed(&self) -> &[AuraHandle] {
        &self.refreshed
    }

    pub fn has_aura_state(&self, unit: UnitId, state: AuraState) -> bool {
        self.aura_states.contains(&(unit, state))
    }

    pub fn aura(&self, handle: AuraHandle) -> Option<&MockAura> {
        self.auras.iter().find(|aura| aura.handle == handle)
    }

    fn apply_cast_aura(&mut self, caster: UnitId, request: &CastRequest) {
        let Some(template) = self.cast_auras.get(&request.spell).copied() else {
            return;
        };
        let signature = AuraSignature {
            aura_type: template.aura_type,
            family: template.family,
            family_flags: template.family_flags,
            caster: Some(caster),
        };
        let existing = self
            .auras
            .iter_mut()
            .find(|aura| aura.matches(request.target, &signature));
        match existing {
            Some(aura) => {
                aura.stack = (aura.stack + 1).min(aura.max_stack);
                aura.spell = request.spell;
            }
            None => {
                self.apply_aura(request.target, caster, request.spell, template, 1);
            }
        }
    }
}

impl UnitAccess for MockWorld {
    fn power(&self, unit: UnitId, kind: PowerKind) -> u32 {
        self.powers.get(&(unit, kind)).copied().unwrap_or(0)
    }

    fn set_power(&mut self, unit: UnitId, kind: PowerKind, value: u32) {
        self.powers.insert((unit, kind), value);
    }

    fn total_attack_power(&self, unit: UnitId, _attack: WeaponAttack) -> f32 {
        self.attack_power.get(&unit).copied().unwrap_or(0.0)
    }

    fn has_in_back_arc(&self, unit: UnitId, other: UnitId) -> bool {
        self.back_arcs.contains(&(unit, other))
    }

    fn modify_aura_state(&mut self, unit: UnitId, state: AuraState, apply: bool) {
        if apply {
            self.aura_states.insert((unit, state));
        } else {
            self.aura_states.remove(&(unit, state));
        }
    }

    fn calculate_effect_value(
        &self,
        _caster: UnitId,
        _target: Option<UnitId>,
        spell: &SpellInfo,
        effect: EffectIndex,
    ) -> i32 {
        spell.base_points(effect)
    }

    fn highest_learned_rank(&self, unit: UnitId, first_rank: SpellId) -> Option<SpellId> {
        self.learned.get(&(unit, first_rank)).copied()
    }
}

impl AuraAccess for MockWorld {
    fn find_aura(&self, target: UnitId, signature: &AuraSignature) -> Option<AuraView> {
        self.auras
            .iter()
            .find(|aura| aura.matches(target, signature))
            .map(MockAura::view)
    }

    fn auras_by_type(&self, target: UnitId, aura_type: AuraType) -> Vec<AuraView> {
        self.auras
            .iter()
            .filter(|aura| aura.target == target && aura.aura_type == aura_type)
            .map(MockAura::view)
            .collect()
    }

    fn refresh_holder(&mut self, aura: AuraHandle) {
        self.refreshed.push(aura);
    }
}

impl ThreatAccess for MockWorld {
    fn add_threat(&mut self, victim: UnitId, contribution: ThreatContribution) {
        self.threat.push((victim, contribution));
    }
}

impl SpellCasting for MockWorld {
    fn cast_spell(&mut self, caster: UnitId, request: CastRequest) -> Result<(), CastFailure> {
        self.casts.push(CastRecord { caster, request });
        if self.failing_casts.contains(&request.spell) {
            return Err(CastFailure::Refused("scripted failure".into()));
        }
        self.apply_cast_aura(caster, &request);
        Ok(())
    }
}
