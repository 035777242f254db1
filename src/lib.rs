//! GenMon Battle Engine
//!
//! Turn-based creature battles against wild opponents: type effectiveness,
//! damage, capture, contribution-weighted experience, leveling and evolution
//! gating. Every function is synchronous; randomness comes in through
//! [`TurnRng`] so any encounter can be replayed from its draws.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod creature;
pub mod errors;
pub mod player;
pub mod progression;
pub mod stats;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    CreatureRecord, Effectiveness, Element, EvolutionDescriptor, MoveCategory, MoveData,
    StatsRecord,
};

// --- From this crate's modules (`src/`) ---

// Encounter lifecycle.
pub use battle::encounter::{start_encounter, Encounter, EncounterParts, EncounterResult, TurnResult};
pub use battle::state::{BattleEvent, BattleOutcome, GameState, TurnRng};

// Enemy move selection.
pub use battle::ai::{EnemyBehavior, GreedyBehavior, RandomMoveBehavior};

// Core runtime types.
pub use config::{BattleConfig, EnemyBehaviorKind};
pub use creature::Creature;
pub use player::{Inventory, Item, PlayerAction};
pub use stats::StatBlock;

// Progression.
pub use progression::{restore_party, ContributionLedger, ContributionRecord, RewardCalculator};

// Crate-specific error and result types.
pub use errors::{
    ActionError, BattleEngineError, BattleResult, BattleStateError, ConfigError, ConfigResult,
    CreatureDataError, CreatureDataResult, ProgressionError,
};
