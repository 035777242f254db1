use crate::errors::{CreatureDataError, CreatureDataResult};
use crate::stats::{StatBlock, MAX_LEVEL, MAX_STAT, MIN_STAT};
use schema::{CreatureRecord, Element, EvolutionDescriptor, MoveData, StatsRecord};
use serde::{Deserialize, Serialize};

/// A creature as the engine works with it.
///
/// Built once from a [`CreatureRecord`] by [`Creature::from_record`]; after
/// that every stat is present and in range, so no formula needs a fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: String,
    pub name: String,
    pub element: Element,
    pub level: u8,
    pub exp: u32,
    pub stats: StatBlock,
    pub moves: Vec<MoveData>,
    pub description: String,
    pub image_url: Option<String>,
    pub evolution: Option<EvolutionDescriptor>,
    pub evolution_count: u32,
}

impl Creature {
    /// Normalize a record handed over by the generator or the roster store.
    ///
    /// Missing special stats fall back to their physical counterparts, the
    /// level is clamped into 1..=100, current health into 0..=max, and every
    /// other stat is kept within 1..=999.
    pub fn from_record(record: CreatureRecord) -> CreatureDataResult<Self> {
        if record.moves.is_empty() {
            return Err(CreatureDataError::NoMoves(record.name));
        }
        if record.stats.max_hp == 0 {
            return Err(CreatureDataError::ZeroMaxHealth(record.name));
        }

        let stats = normalize_stats(&record.stats);

        Ok(Creature {
            id: record.id,
            name: record.name,
            element: record.element,
            level: record.level.clamp(1, MAX_LEVEL),
            exp: record.exp,
            stats,
            moves: record.moves,
            description: record.description,
            image_url: record.image_url,
            evolution: record.evolution,
            evolution_count: record.evolution_count.unwrap_or(0),
        })
    }

    /// Convert back into the record shape the roster store persists.
    pub fn to_record(&self) -> CreatureRecord {
        CreatureRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            element: self.element,
            level: self.level,
            exp: self.exp,
            stats: StatsRecord {
                max_hp: self.stats.max_hp,
                current_hp: self.stats.current_hp,
                attack: self.stats.attack,
                defense: self.stats.defense,
                sp_attack: Some(self.stats.sp_attack),
                sp_defense: Some(self.stats.sp_defense),
                speed: self.stats.speed,
            },
            moves: self.moves.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            evolution: self.evolution.clone(),
            evolution_count: Some(self.evolution_count),
        }
    }

    pub fn current_hp(&self) -> u16 {
        self.stats.current_hp
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.max_hp
    }

    pub fn is_fainted(&self) -> bool {
        self.stats.current_hp == 0
    }

    /// Apply damage, flooring health at zero. Returns true if the creature fainted.
    pub fn take_damage(&mut self, damage: u16) -> bool {
        self.stats.current_hp = self.stats.current_hp.saturating_sub(damage);
        self.is_fainted()
    }

    /// Restore up to `amount` health, capped at max. Returns the amount actually restored.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let before = self.stats.current_hp;
        self.stats.current_hp = before.saturating_add(amount).min(self.stats.max_hp);
        self.stats.current_hp - before
    }

    pub fn set_hp_to_max(&mut self) {
        self.stats.current_hp = self.stats.max_hp;
    }

    /// Remaining health as a fraction of max health.
    pub fn hp_ratio(&self) -> f64 {
        self.stats.current_hp as f64 / self.stats.max_hp as f64
    }

    pub fn get_move(&self, move_index: usize) -> Option<&MoveData> {
        self.moves.get(move_index)
    }
}

fn normalize_stats(raw: &StatsRecord) -> StatBlock {
    let clamp = |value: u16| value.clamp(MIN_STAT, MAX_STAT);
    let max_hp = clamp(raw.max_hp);

    StatBlock {
        max_hp,
        current_hp: raw.current_hp.min(max_hp),
        attack: clamp(raw.attack),
        defense: clamp(raw.defense),
        sp_attack: clamp(raw.sp_attack.unwrap_or(raw.attack)),
        sp_defense: clamp(raw.sp_defense.unwrap_or(raw.defense)),
        speed: clamp(raw.speed),
    }
}
