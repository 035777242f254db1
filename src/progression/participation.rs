use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulated combat activity of one roster member during one encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContributionRecord {
    pub roster_index: usize,
    pub damage_dealt: u32,
    pub damage_taken: u32,
    pub turns_active: u32,
}

impl ContributionRecord {
    pub fn new(roster_index: usize) -> Self {
        Self {
            roster_index,
            ..Default::default()
        }
    }

    pub fn has_activity(&self) -> bool {
        self.damage_dealt > 0 || self.damage_taken > 0 || self.turns_active > 0
    }
}

/// Tracks which roster members did what while they were on the field.
///
/// Only the active roster slot is ever credited. Every accumulator is additive;
/// nothing is overwritten during an encounter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContributionLedger {
    records: BTreeMap<usize, ContributionRecord>,
}

impl ContributionLedger {
    /// Start an empty ledger with a zeroed record for every given roster index.
    pub fn new(roster_indices: impl IntoIterator<Item = usize>) -> Self {
        let records = roster_indices
            .into_iter()
            .map(|index| (index, ContributionRecord::new(index)))
            .collect();
        Self { records }
    }

    fn entry(&mut self, roster_index: usize) -> &mut ContributionRecord {
        self.records
            .entry(roster_index)
            .or_insert_with(|| ContributionRecord::new(roster_index))
    }

    pub fn record_attack(&mut self, roster_index: usize, damage_dealt: u16) {
        let record = self.entry(roster_index);
        record.damage_dealt = record.damage_dealt.saturating_add(damage_dealt as u32);
        tracing::debug!(roster_index, damage_dealt, "ledger: damage dealt");
    }

    pub fn record_defense(&mut self, roster_index: usize, damage_taken: u16) {
        let record = self.entry(roster_index);
        record.damage_taken = record.damage_taken.saturating_add(damage_taken as u32);
        tracing::debug!(roster_index, damage_taken, "ledger: damage taken");
    }

    pub fn record_turn(&mut self, roster_index: usize) {
        let record = self.entry(roster_index);
        record.turns_active = record.turns_active.saturating_add(1);
    }

    pub fn get(&self, roster_index: usize) -> Option<&ContributionRecord> {
        self.records.get(&roster_index)
    }

    /// Records with any activity, in roster order.
    pub fn snapshot(&self) -> Vec<ContributionRecord> {
        self.records
            .values()
            .filter(|record| record.has_activity())
            .copied()
            .collect()
    }
}
