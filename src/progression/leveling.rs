use super::RewardCalculator;
use crate::creature::Creature;
use crate::stats::{exp_required, next_level_stats, MAX_LEVEL};

impl RewardCalculator {
    /// Add `exp_delta` to the creature and level it up as far as it goes.
    ///
    /// Each level spends `exp_required(level)` and applies one growth step.
    /// Current health is not topped up, only kept within the new max.
    /// Returns the updated creature and the number of level-ups.
    pub fn apply_experience(&self, creature: &Creature, exp_delta: u32) -> (Creature, u32) {
        let mut updated = creature.clone();
        updated.exp = updated.exp.saturating_add(exp_delta);

        let mut level_ups = 0;
        while updated.level < MAX_LEVEL && updated.exp >= exp_required(updated.level) {
            updated.exp -= exp_required(updated.level);
            updated.level += 1;
            updated.stats = next_level_stats(&updated.stats);
            updated.stats.current_hp = updated.stats.current_hp.min(updated.stats.max_hp);
            level_ups += 1;
        }

        if level_ups > 0 {
            tracing::info!(
                creature = %updated.name,
                new_level = updated.level,
                level_ups,
                "creature leveled up"
            );
        }

        (updated, level_ups)
    }
}

/// Refill every roster member to max health.
pub fn restore_party(roster: &mut [Creature]) {
    for creature in roster.iter_mut() {
        creature.set_hp_to_max();
    }
}
