//! Stat block and the stat growth model.
//!
//! Growth is deterministic: every level multiplies max health by 1.04 and each
//! other stat by 1.03, floored, then clamped to `[MIN_STAT, MAX_STAT]`.

use crate::battle::state::TurnRng;
use crate::creature::Creature;
use serde::{Deserialize, Serialize};

pub const MAX_LEVEL: u8 = 100;
pub const MIN_STAT: u16 = 1;
pub const MAX_STAT: u16 = 999;

const HP_GROWTH_RATE: f64 = 0.04;
const STAT_GROWTH_RATE: f64 = 0.03;
const EXP_PER_LEVEL: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub max_hp: u16,
    pub current_hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

impl StatBlock {
    pub fn new(
        max_hp: u16,
        attack: u16,
        defense: u16,
        sp_attack: u16,
        sp_defense: u16,
        speed: u16,
    ) -> Self {
        Self {
            max_hp,
            current_hp: max_hp,
            attack,
            defense,
            sp_attack,
            sp_defense,
            speed,
        }
    }
}

fn grow(value: u16, rate: f64) -> u16 {
    let grown = (value as f64 * (1.0 + rate)).floor() as u16;
    grown.clamp(MIN_STAT, MAX_STAT)
}

/// The stat block one level higher. Current health is carried through
/// untouched; callers decide whether to top it up.
pub fn next_level_stats(stats: &StatBlock) -> StatBlock {
    StatBlock {
        max_hp: grow(stats.max_hp, HP_GROWTH_RATE),
        current_hp: stats.current_hp,
        attack: grow(stats.attack, STAT_GROWTH_RATE),
        defense: grow(stats.defense, STAT_GROWTH_RATE),
        sp_attack: grow(stats.sp_attack, STAT_GROWTH_RATE),
        sp_defense: grow(stats.sp_defense, STAT_GROWTH_RATE),
        speed: grow(stats.speed, STAT_GROWTH_RATE),
    }
}

/// Experience needed to advance from `level` to `level + 1`.
pub fn exp_required(level: u8) -> u32 {
    level as u32 * EXP_PER_LEVEL
}

/// Bring a creature from `from_level` to `to_level`.
///
/// Scaling down never shrinks stats: only the level field changes. Scaling up
/// applies one growth step per level and then refills health.
pub fn scale_to_level(creature: &Creature, from_level: u8, to_level: u8) -> Creature {
    let mut scaled = creature.clone();
    scaled.level = to_level.clamp(1, MAX_LEVEL);

    if to_level <= from_level {
        return scaled;
    }

    let mut stats = creature.stats;
    for _ in from_level..to_level {
        stats = next_level_stats(&stats);
    }
    stats.current_hp = stats.max_hp;
    scaled.stats = stats;
    scaled
}

/// The closed level range wild creatures spawn in, relative to the lead's level.
pub fn wild_level_range(lead_level: u8, offset: u8) -> (u8, u8) {
    let min = lead_level.saturating_sub(offset).max(1);
    let max = lead_level.saturating_add(offset).min(MAX_LEVEL);
    (min, max)
}

/// Pick a wild level uniformly within `wild_level_range`.
pub fn pick_wild_level(lead_level: u8, offset: u8, rng: &mut TurnRng) -> u8 {
    let (min, max) = wild_level_range(lead_level, offset);
    let span = (max - min) as usize + 1;
    min + rng.next_index("wild level", span) as u8
}
