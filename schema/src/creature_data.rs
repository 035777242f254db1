use crate::{Element, MoveData};
use serde::{Deserialize, Serialize};

/// Stats exactly as the generator or an older save hands them over.
///
/// Special attack and special defense were added after the first creatures were
/// generated, so they may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub max_hp: u16,
    pub current_hp: u16,
    pub attack: u16,
    pub defense: u16,
    #[serde(default)]
    pub sp_attack: Option<u16>,
    #[serde(default)]
    pub sp_defense: Option<u16>,
    pub speed: u16,
}

/// Describes the next form a creature can grow into. The form itself is
/// produced by the generator when the evolution actually happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionDescriptor {
    pub next_stage: String,
    pub condition: String,
}

/// A creature as it arrives from the generator or the roster store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: String,
    pub name: String,
    pub element: Element,
    pub level: u8,
    #[serde(default)]
    pub exp: u32,
    pub stats: StatsRecord,
    pub moves: Vec<MoveData>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub evolution: Option<EvolutionDescriptor>,
    #[serde(default)]
    pub evolution_count: Option<u32>,
}
