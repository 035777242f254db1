//! Tunable engine parameters.
//!
//! Only the values product may want to adjust live here. Formula constants the
//! rules fix stay next to the formulas that use them.

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which enemy move selector an encounter uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyBehaviorKind {
    #[default]
    Random,
    Greedy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Health restored by one potion, capped at max health.
    pub heal_amount: u16,
    /// How much of the enemy's remaining health ratio counts against a capture.
    /// catch chance = 1 - (current / max) * capture_hp_weight
    pub capture_hp_weight: f64,
    /// Wild creatures spawn within lead level +/- this offset.
    pub wild_level_offset: u8,
    pub enemy_behavior: EnemyBehaviorKind,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            heal_amount: 50,
            capture_hp_weight: 0.8,
            wild_level_offset: 2,
            enemy_behavior: EnemyBehaviorKind::Random,
        }
    }
}

impl BattleConfig {
    /// Load a RON config file. Missing fields fall back to the defaults.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_ron(&content)
    }

    pub fn from_ron(content: &str) -> ConfigResult<Self> {
        let config: BattleConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.heal_amount == 0 {
            return Err(ConfigError::Validation(
                "heal_amount must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.capture_hp_weight) {
            return Err(ConfigError::Validation(format!(
                "capture_hp_weight must be within [0, 1], got {}",
                self.capture_hp_weight
            )));
        }
        Ok(())
    }
}
