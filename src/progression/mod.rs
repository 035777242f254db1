pub mod evolution;
pub mod leveling;
pub mod participation;
pub mod rewards;

pub use leveling::restore_party;
pub use participation::{ContributionLedger, ContributionRecord};
pub use rewards::RewardCalculator;
