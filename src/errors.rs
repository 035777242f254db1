use thiserror::Error;

/// Main error type for the GenMon battle engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleEngineError {
    /// The submitted action is not legal right now; nothing changed.
    #[error("Action error: {0}")]
    Action(#[from] ActionError),
    /// The encounter cannot accept the request in its current state.
    #[error("Battle state error: {0}")]
    BattleState(#[from] BattleStateError),
    /// Creature data handed over by a collaborator could not be ingested.
    #[error("Creature data error: {0}")]
    CreatureData(#[from] CreatureDataError),
    #[error("Progression error: {0}")]
    Progression(#[from] ProgressionError),
}

/// Errors related to player actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Move index is out of bounds for the active creature
    #[error("Invalid move index: {0}")]
    InvalidMoveIndex(usize),
    /// Roster index is out of bounds
    #[error("Invalid roster index: {0}")]
    InvalidRosterIndex(usize),
    /// Roster member exists but was not brought into this encounter
    #[error("Roster member {0} is not eligible for this encounter")]
    NotEligible(usize),
    /// Switching into a creature with no health left
    #[error("Roster member {0} has fainted")]
    CreatureFainted(usize),
    /// Switching into the creature that is already fielded
    #[error("Roster member {0} is already active")]
    AlreadyActive(usize),
}

/// Errors related to encounter state validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleStateError {
    /// An action was submitted to an encounter that already reached a terminal state
    #[error("Encounter has already finished")]
    EncounterFinished,
    /// The requested lead cannot be fielded
    #[error("No usable lead creature at roster index {0}")]
    NoUsableLead(usize),
    #[error("Player roster is empty")]
    EmptyRoster,
}

/// Errors raised while normalizing a creature record at ingestion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreatureDataError {
    #[error("Creature '{0}' has no moves")]
    NoMoves(String),
    #[error("Creature '{0}' has zero max health")]
    ZeroMaxHealth(String),
}

/// Errors related to level and evolution progression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// The creature has no evolution target or has not reached the gate level
    #[error("Creature is not eligible to evolve (requires level {required_level})")]
    NotEligible { required_level: u32 },
}

/// Errors raised while loading engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Configuration validation error: {0}")]
    Validation(String),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using CreatureDataError
pub type CreatureDataResult<T> = Result<T, CreatureDataError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
