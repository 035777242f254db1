use crate::player::Item;
use rand::Rng;
use schema::{Effectiveness, MoveCategory};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingPlayerAction,
    ResolvingAction,
    AwaitingEnemyAction, // Resolved immediately inside the engine, never observed between calls
    TerminalWin,
    TerminalLose,
    TerminalFled,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameState::TerminalWin | GameState::TerminalLose | GameState::TerminalFled
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Enemy,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Win,
    Lose,
    Fled,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ActionFailureReason {
    NoPotions,
    NoCaptureDevices,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    EncounterStarted {
        player: String,
        enemy: String,
        enemy_moves_first: bool,
    },

    // Creature Actions
    CreatureSwitched {
        old_index: usize,
        new_index: usize,
        new_creature: String,
        forced: bool,
    },
    MoveUsed {
        side: Side,
        attacker: String,
        move_name: String,
        category: MoveCategory,
    },
    AttackTypeEffectiveness {
        effectiveness: Effectiveness,
    },
    DamageDealt {
        side: Side, // Side of the creature taking the damage
        target: String,
        damage: u16,
        remaining_hp: u16,
    },
    CreatureHealed {
        target: String,
        amount: u16,
        new_hp: u16,
    },
    CreatureFainted {
        side: Side,
        creature: String,
    },

    // Items
    ItemUsed {
        item: Item,
        remaining: u32,
    },
    CaptureAttempted {
        target: String,
        catch_chance: f64,
    },
    CaptureSucceeded {
        target: String,
    },
    CaptureFailed {
        target: String,
    },

    // Action Failures
    ActionFailed {
        reason: ActionFailureReason,
    },

    // Progression
    ExperienceGained {
        roster_index: usize,
        creature: String,
        amount: u32,
    },
    LevelUp {
        roster_index: usize,
        creature: String,
        new_level: u8,
    },
    EvolutionReady {
        roster_index: usize,
        creature: String,
    },

    // Battle End
    PlayerFled,
    BattleEnded {
        outcome: BattleOutcome,
    },
}

impl BattleEvent {
    /// Formats the event into a human-readable line.
    /// Returns None for silent events that should not produce user-visible text.
    pub fn format(&self) -> Option<String> {
        match self {
            BattleEvent::EncounterStarted { player, enemy, .. } => Some(format!(
                "A wild {} appeared! Go, {}!",
                enemy, player
            )),
            BattleEvent::CreatureSwitched {
                new_creature,
                forced,
                ..
            } => {
                if *forced {
                    Some(format!("{} was sent out!", new_creature))
                } else {
                    Some(format!("Come back! Go, {}!", new_creature))
                }
            }
            BattleEvent::MoveUsed {
                side,
                attacker,
                move_name,
                ..
            } => match side {
                Side::Player => Some(format!("{} used {}!", attacker, move_name)),
                Side::Enemy => Some(format!("The wild {} used {}!", attacker, move_name)),
            },
            BattleEvent::AttackTypeEffectiveness { effectiveness } => match effectiveness {
                Effectiveness::Neutral => None, // Normal effectiveness, no message
                other => Some(other.to_string()),
            },
            BattleEvent::DamageDealt { target, damage, .. } => {
                Some(format!("{} took {} damage!", target, damage))
            }
            BattleEvent::CreatureHealed { target, amount, .. } => {
                Some(format!("{} recovered {} HP!", target, amount))
            }
            BattleEvent::CreatureFainted { creature, .. } => {
                Some(format!("{} fainted!", creature))
            }
            BattleEvent::ItemUsed { .. } => {
                None // Silent - reported to the inventory collaborator, not the player
            }
            BattleEvent::CaptureAttempted { .. } => Some("You threw a capture device!".to_string()),
            BattleEvent::CaptureSucceeded { target } => {
                Some(format!("Gotcha! {} was caught!", target))
            }
            BattleEvent::CaptureFailed { .. } => Some("Oh no! It broke free!".to_string()),
            BattleEvent::ActionFailed { reason } => Some(match reason {
                ActionFailureReason::NoPotions => "You have no potions left!".to_string(),
                ActionFailureReason::NoCaptureDevices => {
                    "You have no capture devices left!".to_string()
                }
            }),
            BattleEvent::ExperienceGained {
                creature, amount, ..
            } => Some(format!("{} gained {} EXP!", creature, amount)),
            BattleEvent::LevelUp {
                creature,
                new_level,
                ..
            } => Some(format!("{} grew to level {}!", creature, new_level)),
            BattleEvent::EvolutionReady { creature, .. } => {
                Some(format!("{} is ready to evolve!", creature))
            }
            BattleEvent::PlayerFled => Some("Got away safely!".to_string()),
            BattleEvent::BattleEnded { .. } => None,
        }
    }
}

/// Event bus for collecting the events of one submission, in order.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        tracing::trace!(?event, "battle event");
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<BattleEvent> {
        self.events
    }

    /// Human-readable lines for every non-silent event.
    pub fn formatted_lines(&self) -> Vec<String> {
        self.events.iter().filter_map(BattleEvent::format).collect()
    }

    /// Return true if the event bus contains no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Return the number of events in the bus.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for event in &self.events {
            writeln!(f, "  {:?}", event)?;
        }
        Ok(())
    }
}

/// Random oracle for one submission.
///
/// Holds uniform draws in `[0, 1)` consumed in order. Live play pre-generates
/// more draws than any single submission needs; tests script the exact values.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<f64>,
    index: usize,
}

// One submission draws at most four values: player variance or capture roll,
// then enemy move choice and enemy variance.
const DRAWS_PER_SUBMISSION: usize = 16;

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self { outcomes, index: 0 }
    }

    pub fn new_random() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Pre-generate draws from any generator, e.g. a seeded `StdRng` for replays.
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let outcomes = (0..DRAWS_PER_SUBMISSION)
            .map(|_| rng.random::<f64>())
            .collect();
        Self { outcomes, index: 0 }
    }

    /// Next uniform draw in `[0, 1)`.
    pub fn next_outcome(&mut self, reason: &str) -> f64 {
        if self.index >= self.outcomes.len() {
            panic!(
                "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        }
        let outcome = self.outcomes[self.index];
        tracing::trace!(outcome, reason, "rng consumed");

        self.index += 1;
        outcome
    }

    /// Uniform draw scaled into `[low, high]`.
    pub fn next_in_range(&mut self, reason: &str, low: f64, high: f64) -> f64 {
        low + self.next_outcome(reason) * (high - low)
    }

    /// Uniform index into a collection of `len` elements.
    pub fn next_index(&mut self, reason: &str, len: usize) -> usize {
        let scaled = (self.next_outcome(reason) * len as f64).floor() as usize;
        scaled.min(len.saturating_sub(1))
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len().saturating_sub(self.index)
    }
}
