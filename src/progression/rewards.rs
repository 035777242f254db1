use crate::progression::participation::ContributionRecord;

// Constants for reward calculations
const EXP_PER_ENEMY_LEVEL: f64 = 12.0;
const CAPTURE_BONUS: f64 = 1.5;
const TURN_WEIGHT: f64 = 5.0;
const DAMAGE_TAKEN_WEIGHT: f64 = 0.5;

/// Calculator for experience awards and their distribution across the roster
#[derive(Debug, Default, Clone, Copy)]
pub struct RewardCalculator;

impl RewardCalculator {
    /// Total experience for a won encounter.
    /// Formula: floor(enemy_level × 12 × (1.5 if captured else 1))
    pub fn compute_experience_award(&self, enemy_level: u8, captured: bool) -> u32 {
        let bonus = if captured { CAPTURE_BONUS } else { 1.0 };
        (enemy_level as f64 * EXP_PER_ENEMY_LEVEL * bonus).floor() as u32
    }

    /// Weight of one contribution:
    /// damage_dealt + turns_active × 5 + damage_taken × 0.5, floored at 0.
    pub fn contribution_weight(&self, record: &ContributionRecord) -> f64 {
        let weight = record.damage_dealt as f64
            + record.turns_active as f64 * TURN_WEIGHT
            + record.damage_taken as f64 * DAMAGE_TAKEN_WEIGHT;
        weight.max(0.0)
    }

    /// Split `total_exp` across the contributors.
    ///
    /// Everyone but the last receives floor(total × weight / sum); the last
    /// receives what is left, so the shares always sum to `total_exp`. When
    /// every weight is 0 the award is split evenly instead.
    pub fn distribute(&self, total_exp: u32, contributions: &[ContributionRecord]) -> Vec<(usize, u32)> {
        if contributions.is_empty() {
            return Vec::new();
        }

        let weights: Vec<f64> = contributions
            .iter()
            .map(|record| self.contribution_weight(record))
            .collect();
        let weight_sum: f64 = weights.iter().sum();

        if weight_sum <= 0.0 {
            let share = total_exp / contributions.len() as u32;
            return contributions
                .iter()
                .map(|record| (record.roster_index, share))
                .collect();
        }

        let last = contributions.len() - 1;
        let mut allocated = 0u32;
        let mut shares = Vec::with_capacity(contributions.len());

        for (position, (record, weight)) in contributions.iter().zip(&weights).enumerate() {
            let share = if position == last {
                total_exp.saturating_sub(allocated)
            } else {
                let share = (total_exp as f64 * weight / weight_sum).floor() as u32;
                allocated += share;
                share
            };
            shares.push((record.roster_index, share));
        }

        shares
    }
}
