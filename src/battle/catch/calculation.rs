use crate::battle::state::TurnRng;
use crate::creature::Creature;

/// Calculate the chance to capture `target`.
/// Formula: catch_chance = 1 - (current_hp / max_hp) * hp_weight
///
/// A full-health target at the default weight of 0.8 still has a 20% chance;
/// a target on its last point of health is almost certain.
pub fn calculate_catch_chance(target: &Creature, hp_weight: f64) -> f64 {
    (1.0 - target.hp_ratio() * hp_weight).clamp(0.0, 1.0)
}

/// Roll for capture success. The roll must be strictly below the chance;
/// landing exactly on the boundary fails.
pub fn roll_capture_success(catch_chance: f64, rng: &mut TurnRng) -> bool {
    let roll = rng.next_outcome("capture roll");
    let success = roll < catch_chance;
    tracing::debug!(roll, catch_chance, success, "capture rolled");
    success
}

/// Get a descriptive catch chance category for display purposes
pub fn get_catch_chance_description(catch_chance: f64) -> &'static str {
    match catch_chance {
        c if c >= 0.9 => "Excellent",
        c if c >= 0.7 => "Very Good",
        c if c >= 0.5 => "Good",
        c if c >= 0.35 => "Fair",
        _ => "Poor",
    }
}
