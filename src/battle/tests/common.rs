use crate::battle::encounter::{start_encounter, Encounter};
use crate::battle::state::{BattleEvent, TurnRng};
use crate::config::BattleConfig;
use crate::creature::Creature;
use crate::errors::BattleResult;
use crate::player::Inventory;
use crate::stats::StatBlock;
use schema::{Element, EvolutionDescriptor, MoveData};

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```ignore
/// let creature = TestCreatureBuilder::new("Sparky", Element::Electric, 10)
///     .with_moves(vec![MoveData::new("Spark", Element::Electric, 40)])
///     .with_hp(12)
///     .build();
/// ```
pub struct TestCreatureBuilder {
    name: String,
    element: Element,
    level: u8,
    stats: StatBlock,
    moves: Option<Vec<MoveData>>,
    evolution: Option<EvolutionDescriptor>,
    current_hp: Option<u16>,
}

impl TestCreatureBuilder {
    /// Creates a new builder for a given name, element and level.
    pub fn new(name: &str, element: Element, level: u8) -> Self {
        Self {
            name: name.to_string(),
            element,
            level,
            stats: StatBlock::new(50, 30, 30, 30, 30, 30),
            moves: None,
            evolution: None,
            current_hp: None,
        }
    }

    /// Sets the full stat block. Current HP follows the block unless `with_hp` is used.
    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = stats;
        self
    }

    /// Sets the moves for the test creature. Defaults to a single Tackle.
    pub fn with_moves(mut self, moves: Vec<MoveData>) -> Self {
        self.moves = Some(moves);
        self
    }

    /// Sets the current HP for the test creature.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn with_speed(mut self, speed: u16) -> Self {
        self.stats.speed = speed;
        self
    }

    pub fn with_evolution(mut self, evolution: EvolutionDescriptor) -> Self {
        self.evolution = Some(evolution);
        self
    }

    /// Builds the `Creature`.
    pub fn build(self) -> Creature {
        let mut stats = self.stats;
        if let Some(hp) = self.current_hp {
            stats.current_hp = hp.min(stats.max_hp);
        }

        Creature {
            id: self.name.to_lowercase(),
            name: self.name,
            element: self.element,
            level: self.level,
            exp: 0,
            stats,
            moves: self
                .moves
                .unwrap_or_else(|| vec![MoveData::new("Tackle", Element::Normal, 40)]),
            description: String::new(),
            image_url: None,
            evolution: self.evolution,
            evolution_count: 0,
        }
    }
}

/// Opens an encounter with every roster member eligible, slot 0 leading,
/// default config and the given inventory.
pub fn create_test_encounter(
    roster: Vec<Creature>,
    enemy: Creature,
    inventory: Inventory,
    rng: &mut TurnRng,
) -> (Encounter, Vec<BattleEvent>) {
    let eligible = (0..roster.len()).collect();
    assert_ok(start_encounter(
        roster,
        eligible,
        0,
        enemy,
        inventory,
        BattleConfig::default(),
        rng,
    ))
}

/// Creates a `TurnRng` with a long run of zero draws.
/// Zero pins variance to 0.8, picks the first enemy move and lands every capture roll.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![0.0; 100])
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}

/// Print all events in debug format with a custom prefix message.
pub fn print_events(message: &str, events: &[BattleEvent]) {
    println!("{}", message);
    for event in events {
        println!("  {:?}", event);
    }
}
