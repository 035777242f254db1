use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    // The index refers to the move's position in the active creature's move list.
    UseMove { move_index: usize },

    // Consumes one potion and heals the active creature.
    UsePotion,

    // Consumes one capture device and rolls to capture the enemy.
    ThrowCaptureDevice,

    // The index refers to the creature's position in the player's roster.
    SwitchCreature { roster_index: usize },

    Flee,
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerAction::UseMove { move_index } => write!(f, "Use move #{}", move_index),
            PlayerAction::UsePotion => write!(f, "Use potion"),
            PlayerAction::ThrowCaptureDevice => write!(f, "Throw capture device"),
            PlayerAction::SwitchCreature { roster_index } => {
                write!(f, "Switch to roster slot {}", roster_index)
            }
            PlayerAction::Flee => write!(f, "Flee"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    Potion,
    CaptureDevice,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Item::Potion => "Potion",
            Item::CaptureDevice => "Capture Device",
        };
        write!(f, "{}", display_name)
    }
}

/// Consumable counts for the duration of one encounter.
///
/// The encounter decrements its own copy and reports every use through
/// `BattleEvent::ItemUsed`; the inventory collaborator mirrors those events.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inventory {
    pub potions: u32,
    pub capture_devices: u32,
}

impl Inventory {
    pub fn new(potions: u32, capture_devices: u32) -> Self {
        Self {
            potions,
            capture_devices,
        }
    }

    pub fn count(&self, item: Item) -> u32 {
        match item {
            Item::Potion => self.potions,
            Item::CaptureDevice => self.capture_devices,
        }
    }

    /// Use one of `item`. Returns false without changing anything when none are left.
    pub fn consume(&mut self, item: Item) -> bool {
        let slot = match item {
            Item::Potion => &mut self.potions,
            Item::CaptureDevice => &mut self.capture_devices,
        };
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}
