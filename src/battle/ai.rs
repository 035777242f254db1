//! A module for defining move-selection behaviors for wild opponents.

use crate::battle::damage::calculate_damage;
use crate::battle::state::TurnRng;
use crate::config::EnemyBehaviorKind;
use crate::creature::Creature;
use ordered_float::OrderedFloat;

/// A trait for any system that can pick the enemy's move.
/// The state machine only needs a move index; how it is chosen is up to the implementation.
pub trait EnemyBehavior: std::fmt::Debug {
    /// Inspects both fielded creatures and returns an index into `enemy.moves`.
    fn choose_move(&self, enemy: &Creature, player: &Creature, rng: &mut TurnRng) -> usize;
}

/// Uniform choice over the enemy's known moves. Consumes one draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomMoveBehavior;

impl EnemyBehavior for RandomMoveBehavior {
    fn choose_move(&self, enemy: &Creature, _player: &Creature, rng: &mut TurnRng) -> usize {
        rng.next_index("enemy move choice", enemy.moves.len())
    }
}

/// Picks the move with the highest expected damage at variance 1.0.
/// Ties go to the lowest index. Consumes no draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyBehavior;

impl GreedyBehavior {
    fn score_move(&self, move_index: usize, enemy: &Creature, player: &Creature) -> f64 {
        match enemy.get_move(move_index) {
            Some(move_data) => calculate_damage(enemy, player, move_data, 1.0).damage as f64,
            None => 0.0,
        }
    }
}

impl EnemyBehavior for GreedyBehavior {
    fn choose_move(&self, enemy: &Creature, player: &Creature, _rng: &mut TurnRng) -> usize {
        // Reversed so max_by_key, which keeps the last maximum, lands on the lowest index.
        (0..enemy.moves.len())
            .rev()
            .max_by_key(|&index| OrderedFloat(self.score_move(index, enemy, player)))
            .unwrap_or(0)
    }
}

/// Build the behavior an encounter was configured with.
pub fn behavior_for(kind: EnemyBehaviorKind) -> Box<dyn EnemyBehavior> {
    match kind {
        EnemyBehaviorKind::Random => Box::new(RandomMoveBehavior),
        EnemyBehaviorKind::Greedy => Box::new(GreedyBehavior),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::TestCreatureBuilder;
    use crate::stats::StatBlock;
    use rstest::rstest;
    use schema::{Element, MoveData};

    fn enemy_with_moves(moves: Vec<MoveData>) -> Creature {
        TestCreatureBuilder::new("Enemy", Element::Fire, 10)
            .with_stats(StatBlock::new(50, 40, 40, 40, 40, 40))
            .with_moves(moves)
            .build()
    }

    fn grass_target() -> Creature {
        TestCreatureBuilder::new("Target", Element::Grass, 10)
            .with_stats(StatBlock::new(50, 40, 40, 40, 40, 40))
            .build()
    }

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.34, 1)]
    #[case(0.67, 2)]
    #[case(0.999, 2)]
    fn test_random_behavior_is_uniform_over_moves(#[case] draw: f64, #[case] expected: usize) {
        let enemy = enemy_with_moves(vec![
            MoveData::new("Tackle", Element::Normal, 40),
            MoveData::new("Ember", Element::Fire, 40),
            MoveData::new("Bite", Element::Dark, 60),
        ]);
        let mut rng = TurnRng::new_for_test(vec![draw]);

        assert_eq!(RandomMoveBehavior.choose_move(&enemy, &grass_target(), &mut rng), expected);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_greedy_prefers_super_effective_move() {
        let enemy = enemy_with_moves(vec![
            MoveData::new("Tackle", Element::Normal, 40),
            MoveData::new("Ember", Element::Fire, 40),
            MoveData::new("Splash", Element::Water, 40),
        ]);
        let mut rng = TurnRng::new_for_test(vec![]);

        assert_eq!(GreedyBehavior.choose_move(&enemy, &grass_target(), &mut rng), 1);
    }

    #[test]
    fn test_greedy_ties_go_to_lowest_index() {
        let enemy = enemy_with_moves(vec![
            MoveData::new("Tackle", Element::Normal, 40),
            MoveData::new("Slam", Element::Normal, 40),
        ]);
        let mut rng = TurnRng::new_for_test(vec![]);

        assert_eq!(GreedyBehavior.choose_move(&enemy, &grass_target(), &mut rng), 0);
    }

    #[test]
    fn test_behavior_for_config() {
        let enemy = enemy_with_moves(vec![
            MoveData::new("Tackle", Element::Normal, 20),
            MoveData::new("Ember", Element::Fire, 90),
        ]);
        let mut rng = TurnRng::new_for_test(vec![0.0]);

        let greedy = behavior_for(EnemyBehaviorKind::Greedy);
        assert_eq!(greedy.choose_move(&enemy, &grass_target(), &mut rng), 1);
        assert_eq!(rng.remaining(), 1);

        let random = behavior_for(EnemyBehaviorKind::Random);
        assert_eq!(random.choose_move(&enemy, &grass_target(), &mut rng), 0);
    }
}
