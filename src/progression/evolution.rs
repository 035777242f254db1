use super::RewardCalculator;
use crate::creature::Creature;
use crate::errors::ProgressionError;

const EVOLUTION_LEVEL_INTERVAL: u32 = 10;

impl RewardCalculator {
    /// Level the creature must reach before its next evolution.
    pub fn next_evolution_level(&self, creature: &Creature) -> u32 {
        (creature.evolution_count + 1) * EVOLUTION_LEVEL_INTERVAL
    }

    /// Check if the creature has an evolution target and has reached the gate level
    pub fn can_evolve(&self, creature: &Creature) -> bool {
        creature.evolution.is_some() && creature.level as u32 >= self.next_evolution_level(creature)
    }

    /// Replace `current` with the form the generator produced for it.
    ///
    /// The new form keeps the old level and experience, counts one more
    /// evolution, and starts at full health.
    pub fn apply_evolution(
        &self,
        current: &Creature,
        evolved_form: Creature,
    ) -> Result<Creature, ProgressionError> {
        if !self.can_evolve(current) {
            return Err(ProgressionError::NotEligible {
                required_level: self.next_evolution_level(current),
            });
        }

        let mut evolved = evolved_form;
        evolved.level = current.level;
        evolved.exp = current.exp;
        evolved.evolution_count = current.evolution_count + 1;
        evolved.set_hp_to_max();

        tracing::info!(
            from = %current.name,
            to = %evolved.name,
            evolution_count = evolved.evolution_count,
            "creature evolved"
        );

        Ok(evolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::TestCreatureBuilder;
    use crate::stats::StatBlock;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{Element, EvolutionDescriptor};

    fn evolving(level: u8, evolution_count: u32) -> Creature {
        let mut creature = TestCreatureBuilder::new("Emberpup", Element::Fire, level)
            .with_evolution(EvolutionDescriptor {
                next_stage: "Blazehound".to_string(),
                condition: "Reach the next level gate".to_string(),
            })
            .build();
        creature.evolution_count = evolution_count;
        creature
    }

    #[rstest]
    #[case(9, 0, false)]
    #[case(10, 0, true)]
    #[case(15, 0, true)]
    #[case(19, 1, false)]
    #[case(20, 1, true)]
    #[case(30, 2, true)]
    #[case(29, 2, false)]
    fn test_evolution_gate(#[case] level: u8, #[case] count: u32, #[case] expected: bool) {
        assert_eq!(RewardCalculator.can_evolve(&evolving(level, count)), expected);
    }

    #[test]
    fn test_no_target_never_evolves() {
        let creature = TestCreatureBuilder::new("Rockling", Element::Rock, 50).build();
        assert!(!RewardCalculator.can_evolve(&creature));
    }

    #[test]
    fn test_next_evolution_level() {
        assert_eq!(RewardCalculator.next_evolution_level(&evolving(1, 0)), 10);
        assert_eq!(RewardCalculator.next_evolution_level(&evolving(1, 3)), 40);
    }

    #[test]
    fn test_apply_evolution_carries_progress() {
        let mut current = evolving(12, 0);
        current.exp = 77;

        let mut form = TestCreatureBuilder::new("Blazehound", Element::Fire, 5)
            .with_stats(StatBlock::new(90, 60, 50, 70, 50, 65))
            .build();
        form.stats.current_hp = 1;

        let evolved = RewardCalculator.apply_evolution(&current, form).unwrap();

        assert_eq!(evolved.name, "Blazehound");
        assert_eq!(evolved.level, 12);
        assert_eq!(evolved.exp, 77);
        assert_eq!(evolved.evolution_count, 1);
        assert_eq!(evolved.stats.current_hp, 90);
    }

    #[test]
    fn test_apply_evolution_rejects_early() {
        let current = evolving(8, 0);
        let form = TestCreatureBuilder::new("Blazehound", Element::Fire, 5).build();

        assert_eq!(
            RewardCalculator.apply_evolution(&current, form),
            Err(ProgressionError::NotEligible { required_level: 10 })
        );
    }
}
