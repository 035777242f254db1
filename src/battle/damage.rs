//! Damage model: one attack's damage and effectiveness.

use crate::battle::state::TurnRng;
use crate::creature::Creature;
use schema::{Effectiveness, Element, MoveCategory, MoveData};

pub const VARIANCE_MIN: f64 = 0.8;
pub const VARIANCE_MAX: f64 = 1.2;

/// Everything an attack resolution reports back to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackOutcome {
    pub damage: u16,
    pub effectiveness: f64,
    pub category: MoveCategory,
}

impl AttackOutcome {
    pub fn tier(&self) -> Effectiveness {
        Effectiveness::from_multiplier(self.effectiveness)
    }
}

/// Attack and defense values the move's category selects.
pub fn attack_stats(attacker: &Creature, defender: &Creature, category: MoveCategory) -> (u16, u16) {
    match category {
        MoveCategory::Special => (attacker.stats.sp_attack, defender.stats.sp_defense),
        MoveCategory::Physical => (attacker.stats.attack, defender.stats.defense),
    }
}

/// Damage before type effectiveness and variance:
/// floor(((2 * level / 5 + 2) * power * (atk / def)) / 50 + 2)
pub fn base_damage(level: u8, power: u16, attack: u16, defense: u16) -> f64 {
    let level_factor = 2.0 * level as f64 / 5.0 + 2.0;
    // Hand-built stat blocks skip ingestion and may carry a zero defense.
    let defense = defense.max(1) as f64;
    let scaled = level_factor * power as f64 * attack as f64 / defense;
    (scaled / 50.0 + 2.0).floor()
}

/// Deterministic damage for a given variance factor.
pub fn calculate_damage(
    attacker: &Creature,
    defender: &Creature,
    move_data: &MoveData,
    variance: f64,
) -> AttackOutcome {
    let effectiveness = Element::type_effectiveness(move_data.element, defender.element);
    let category = move_data.category();
    let (attack, defense) = attack_stats(attacker, defender, category);

    let base = base_damage(attacker.level, move_data.power, attack, defense);
    let damage = (base * effectiveness * variance).floor().max(0.0);

    AttackOutcome {
        damage: damage.min(u16::MAX as f64) as u16,
        effectiveness,
        category,
    }
}

/// Resolve one attack, drawing the variance factor from `rng`.
pub fn resolve_attack(
    attacker: &Creature,
    defender: &Creature,
    move_data: &MoveData,
    rng: &mut TurnRng,
) -> AttackOutcome {
    let variance = rng.next_in_range("damage variance", VARIANCE_MIN, VARIANCE_MAX);
    let outcome = calculate_damage(attacker, defender, move_data, variance);

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        move_name = %move_data.name,
        variance,
        damage = outcome.damage,
        effectiveness = outcome.effectiveness,
        "attack resolved"
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::TestCreatureBuilder;
    use crate::stats::StatBlock;
    use proptest::prelude::*;
    use rstest::rstest;

    fn creature(element: Element, level: u8, stats: StatBlock) -> Creature {
        TestCreatureBuilder::new("Test", element, level)
            .with_stats(stats)
            .build()
    }

    #[test]
    fn test_super_effective_scenario() {
        // Level 10, power 40, atk 60 vs def 50, effectiveness 2.
        let attacker = creature(Element::Rock, 10, StatBlock::new(50, 60, 50, 10, 10, 50));
        let defender = creature(Element::Fire, 10, StatBlock::new(50, 10, 50, 10, 10, 50));
        let rock_throw = MoveData::new("Rock Throw", Element::Rock, 40);

        let outcome = calculate_damage(&attacker, &defender, &rock_throw, 1.0);

        assert_eq!(outcome.effectiveness, 2.0);
        assert_eq!(outcome.category, MoveCategory::Physical);
        // floor(6 * 40 * 1.2 / 50 + 2) = 7, doubled.
        assert_eq!(outcome.damage, 14);
        assert_eq!(outcome.tier(), Effectiveness::SuperEffective);
    }

    #[test]
    fn test_special_move_uses_special_stats() {
        let attacker = creature(Element::Fire, 10, StatBlock::new(50, 1, 1, 60, 1, 50));
        let defender = creature(Element::Normal, 10, StatBlock::new(50, 1, 999, 1, 50, 50));
        let ember = MoveData::new("Ember", Element::Fire, 40);

        let outcome = calculate_damage(&attacker, &defender, &ember, 1.0);

        assert_eq!(outcome.category, MoveCategory::Special);
        assert_eq!(outcome.damage, 7);
    }

    #[test]
    fn test_immune_target_takes_nothing() {
        let attacker = creature(Element::Psychic, 50, StatBlock::new(200, 200, 200, 200, 200, 50));
        let defender = creature(Element::Dark, 5, StatBlock::new(20, 5, 5, 5, 5, 5));
        let confusion = MoveData::new("Confusion", Element::Psychic, 100);

        let outcome = calculate_damage(&attacker, &defender, &confusion, 1.2);

        assert_eq!(outcome.damage, 0);
        assert_eq!(outcome.tier(), Effectiveness::Immune);
    }

    #[rstest]
    #[case(0.0, 11)] // variance 0.8
    #[case(0.25, 12)] // variance 0.9
    #[case(0.999_999, 16)] // variance just under 1.2
    fn test_variance_is_drawn_from_rng(#[case] draw: f64, #[case] expected: u16) {
        let attacker = creature(Element::Rock, 10, StatBlock::new(50, 60, 50, 10, 10, 50));
        let defender = creature(Element::Fire, 10, StatBlock::new(50, 10, 50, 10, 10, 50));
        let rock_throw = MoveData::new("Rock Throw", Element::Rock, 40);
        let mut rng = TurnRng::new_for_test(vec![draw]);

        let outcome = resolve_attack(&attacker, &defender, &rock_throw, &mut rng);

        assert_eq!(outcome.damage, expected);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_base_damage_formula() {
        // floor((2*10/5+2) * 40 * (60/50) / 50 + 2) = floor(7.76)
        assert_eq!(base_damage(10, 40, 60, 50), 7.0);
        // level 1: (2/5+2) = 2.4; 2.4*20*1/50 + 2 = 2.96
        assert_eq!(base_damage(1, 20, 10, 10), 2.0);
    }

    proptest! {
        #[test]
        fn prop_neutral_damage_matches_formula(
            level in 1u8..=100,
            power in 0u16..=150,
            attack in 1u16..=999,
            defense in 1u16..=999,
        ) {
            let attacker = creature(Element::Normal, level, StatBlock::new(100, attack, 1, 1, 1, 10));
            let defender = creature(Element::Normal, level, StatBlock::new(100, 1, defense, 1, 1, 10));
            let tackle = MoveData::new("Tackle", Element::Normal, power);

            let outcome = calculate_damage(&attacker, &defender, &tackle, 1.0);
            let expected = ((2.0 * level as f64 / 5.0 + 2.0) * power as f64 * attack as f64
                / defense as f64 / 50.0 + 2.0).floor();
            prop_assert_eq!(outcome.damage as f64, expected);
        }

        #[test]
        fn prop_damage_bounded_by_variance_and_chart(
            draw in 0.0f64..1.0,
            power in 0u16..=150,
            element_index in 0usize..10,
        ) {
            let elements = Element::all();
            let attacker = creature(elements[element_index], 30, StatBlock::new(100, 40, 40, 40, 40, 10));
            let defender = creature(Element::Rock, 30, StatBlock::new(100, 35, 35, 35, 35, 10));
            let strike = MoveData::new("Strike", elements[element_index], power);
            let mut rng = TurnRng::new_for_test(vec![draw]);

            let outcome = resolve_attack(&attacker, &defender, &strike, &mut rng);
            let ceiling = base_damage(30, power, 40, 35) * outcome.effectiveness * VARIANCE_MAX;
            prop_assert!(outcome.damage as f64 <= ceiling);
        }
    }
}
