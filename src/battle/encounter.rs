//! One wild encounter, from the opening exchange to a terminal outcome.

use crate::battle::ai::{behavior_for, EnemyBehavior};
use crate::battle::catch::{calculate_catch_chance, roll_capture_success};
use crate::battle::damage::{resolve_attack, AttackOutcome};
use crate::battle::state::{
    ActionFailureReason, BattleEvent, BattleOutcome, EventBus, GameState, Side, TurnRng,
};
use crate::config::BattleConfig;
use crate::creature::Creature;
use crate::errors::{ActionError, BattleResult, BattleStateError};
use crate::player::{Inventory, Item, PlayerAction};
use crate::progression::{ContributionLedger, RewardCalculator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Payload handed back once an encounter reaches a terminal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterResult {
    pub outcome: BattleOutcome,
    pub captured: bool,
    /// Total experience for a win; `None` for defeat and flee.
    pub experience_award: Option<u32>,
    /// (roster index, experience) per rewarded creature, in roster order.
    pub experience_shares: Vec<(usize, u32)>,
    /// Roster index -> number of levels gained. Creatures that did not level are absent.
    pub level_ups: BTreeMap<usize, u32>,
    /// The enemy at full health, ready to join the roster.
    pub captured_creature: Option<Creature>,
}

/// Result of one `submit_action` call
#[derive(Debug, Clone, PartialEq)]
pub struct TurnResult {
    pub events: Vec<BattleEvent>,
    pub state: GameState,
    pub result: Option<EncounterResult>,
}

impl TurnResult {
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}

/// Everything the encounter owned, returned to the roster and inventory collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterParts {
    pub roster: Vec<Creature>,
    pub enemy: Creature,
    pub inventory: Inventory,
}

/// Battle aggregate for a single wild encounter.
///
/// Owns the roster copy, the enemy, the inventory counts and the contribution
/// ledger until `into_parts` hands them back.
#[derive(Debug)]
pub struct Encounter {
    roster: Vec<Creature>,
    eligible: Vec<usize>,
    active: usize,
    enemy: Creature,
    inventory: Inventory,
    ledger: ContributionLedger,
    config: BattleConfig,
    behavior: Box<dyn EnemyBehavior>,
    state: GameState,
    result: Option<EncounterResult>,
}

/// Open an encounter between the player's `lead` and a wild `enemy`.
///
/// If the enemy is strictly faster it acts immediately, so the returned events
/// may already include its opening attack (and, in the worst case, a loss).
pub fn start_encounter(
    roster: Vec<Creature>,
    eligible: Vec<usize>,
    lead: usize,
    enemy: Creature,
    inventory: Inventory,
    config: BattleConfig,
    rng: &mut TurnRng,
) -> BattleResult<(Encounter, Vec<BattleEvent>)> {
    if roster.is_empty() {
        return Err(BattleStateError::EmptyRoster.into());
    }
    if let Some(&bad) = eligible.iter().find(|&&index| index >= roster.len()) {
        return Err(ActionError::InvalidRosterIndex(bad).into());
    }
    let lead_usable = eligible.contains(&lead)
        && roster.get(lead).map_or(false, |creature| !creature.is_fainted());
    if !lead_usable {
        return Err(BattleStateError::NoUsableLead(lead).into());
    }

    let mut eligible = eligible;
    eligible.sort_unstable();
    eligible.dedup();

    let enemy_moves_first = enemy.stats.speed > roster[lead].stats.speed;
    let behavior = behavior_for(config.enemy_behavior);

    tracing::info!(
        lead = %roster[lead].name,
        enemy = %enemy.name,
        enemy_level = enemy.level,
        enemy_moves_first,
        "encounter started"
    );

    let mut encounter = Encounter {
        ledger: ContributionLedger::new(eligible.iter().copied()),
        roster,
        eligible,
        active: lead,
        enemy,
        inventory,
        config,
        behavior,
        state: GameState::AwaitingPlayerAction,
        result: None,
    };

    let mut bus = EventBus::new();
    bus.push(BattleEvent::EncounterStarted {
        player: encounter.roster[lead].name.clone(),
        enemy: encounter.enemy.name.clone(),
        enemy_moves_first,
    });

    if enemy_moves_first {
        encounter.run_enemy_turn(&mut bus, rng);
    }

    Ok((encounter, bus.into_events()))
}

impl Encounter {
    // --- Accessors ---

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_creature(&self) -> &Creature {
        &self.roster[self.active]
    }

    pub fn enemy(&self) -> &Creature {
        &self.enemy
    }

    pub fn roster(&self) -> &[Creature] {
        &self.roster
    }

    pub fn eligible(&self) -> &[usize] {
        &self.eligible
    }

    pub fn inventory(&self) -> Inventory {
        self.inventory
    }

    pub fn ledger(&self) -> &ContributionLedger {
        &self.ledger
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn result(&self) -> Option<&EncounterResult> {
        self.result.as_ref()
    }

    /// Hand the roster, enemy and inventory back to their collaborators.
    pub fn into_parts(self) -> EncounterParts {
        EncounterParts {
            roster: self.roster,
            enemy: self.enemy,
            inventory: self.inventory,
        }
    }

    // --- Player actions ---

    /// Resolve one player action and, where the rules call for it, the enemy's reply.
    ///
    /// Rejected actions return an error and leave the encounter untouched.
    /// Running out of an item is not an error: it produces an `ActionFailed`
    /// event and the player keeps the turn.
    pub fn submit_action(&mut self, action: PlayerAction, rng: &mut TurnRng) -> BattleResult<TurnResult> {
        if self.state.is_terminal() {
            tracing::warn!(%action, state = ?self.state, "action submitted to a finished encounter");
            return Err(BattleStateError::EncounterFinished.into());
        }

        if let Err(error) = self.validate_action(&action) {
            tracing::warn!(%action, %error, "action rejected");
            return Err(error.into());
        }

        tracing::debug!(%action, active = self.active, "resolving player action");

        let mut bus = EventBus::new();
        self.state = GameState::ResolvingAction;

        match action {
            PlayerAction::UseMove { move_index } => self.execute_player_attack(move_index, &mut bus, rng),
            PlayerAction::UsePotion => self.execute_potion(&mut bus, rng),
            PlayerAction::ThrowCaptureDevice => self.execute_capture(&mut bus, rng),
            PlayerAction::SwitchCreature { roster_index } => self.execute_switch(roster_index, &mut bus),
            PlayerAction::Flee => {
                bus.push(BattleEvent::PlayerFled);
                self.finish(BattleOutcome::Fled, false, &mut bus);
            }
        }

        Ok(TurnResult {
            events: bus.into_events(),
            state: self.state,
            result: self.result.clone(),
        })
    }

    /// Validate an action against the current encounter without mutating it.
    pub fn validate_action(&self, action: &PlayerAction) -> Result<(), ActionError> {
        match *action {
            PlayerAction::UseMove { move_index } => {
                if self.active_creature().get_move(move_index).is_none() {
                    return Err(ActionError::InvalidMoveIndex(move_index));
                }
            }
            PlayerAction::SwitchCreature { roster_index } => {
                let target = self
                    .roster
                    .get(roster_index)
                    .ok_or(ActionError::InvalidRosterIndex(roster_index))?;
                if !self.eligible.contains(&roster_index) {
                    return Err(ActionError::NotEligible(roster_index));
                }
                if roster_index == self.active {
                    return Err(ActionError::AlreadyActive(roster_index));
                }
                if target.is_fainted() {
                    return Err(ActionError::CreatureFainted(roster_index));
                }
            }
            PlayerAction::UsePotion | PlayerAction::ThrowCaptureDevice | PlayerAction::Flee => {}
        }
        Ok(())
    }

    /// Every action the player could submit right now.
    pub fn valid_actions(&self) -> Vec<PlayerAction> {
        if self.state.is_terminal() {
            return Vec::new();
        }

        let moves = (0..self.active_creature().moves.len())
            .map(|move_index| PlayerAction::UseMove { move_index });
        let switches = self
            .eligible
            .iter()
            .filter(|&&index| index != self.active && !self.roster[index].is_fainted())
            .map(|&roster_index| PlayerAction::SwitchCreature { roster_index });

        moves
            .chain([PlayerAction::UsePotion, PlayerAction::ThrowCaptureDevice])
            .chain(switches)
            .chain([PlayerAction::Flee])
            .collect()
    }

    fn execute_player_attack(&mut self, move_index: usize, bus: &mut EventBus, rng: &mut TurnRng) {
        let attacker = &self.roster[self.active];
        let Some(move_data) = attacker.get_move(move_index) else {
            return;
        };

        let outcome = resolve_attack(attacker, &self.enemy, move_data, rng);
        push_attack_events(bus, Side::Player, attacker, &move_data.name, &outcome);

        let fainted = self.enemy.take_damage(outcome.damage);
        self.ledger.record_attack(self.active, outcome.damage);
        bus.push(BattleEvent::DamageDealt {
            side: Side::Enemy,
            target: self.enemy.name.clone(),
            damage: outcome.damage,
            remaining_hp: self.enemy.current_hp(),
        });

        if fainted {
            bus.push(BattleEvent::CreatureFainted {
                side: Side::Enemy,
                creature: self.enemy.name.clone(),
            });
            self.finish(BattleOutcome::Win, false, bus);
            return;
        }

        self.run_enemy_turn(bus, rng);
    }

    fn execute_potion(&mut self, bus: &mut EventBus, rng: &mut TurnRng) {
        if !self.inventory.consume(Item::Potion) {
            bus.push(BattleEvent::ActionFailed {
                reason: ActionFailureReason::NoPotions,
            });
            self.state = GameState::AwaitingPlayerAction;
            return;
        }
        bus.push(BattleEvent::ItemUsed {
            item: Item::Potion,
            remaining: self.inventory.potions,
        });

        let heal_amount = self.config.heal_amount;
        let active = &mut self.roster[self.active];
        let restored = active.heal(heal_amount);
        bus.push(BattleEvent::CreatureHealed {
            target: active.name.clone(),
            amount: restored,
            new_hp: active.current_hp(),
        });

        self.run_enemy_turn(bus, rng);
    }

    fn execute_capture(&mut self, bus: &mut EventBus, rng: &mut TurnRng) {
        if !self.inventory.consume(Item::CaptureDevice) {
            bus.push(BattleEvent::ActionFailed {
                reason: ActionFailureReason::NoCaptureDevices,
            });
            self.state = GameState::AwaitingPlayerAction;
            return;
        }
        bus.push(BattleEvent::ItemUsed {
            item: Item::CaptureDevice,
            remaining: self.inventory.capture_devices,
        });

        let catch_chance = calculate_catch_chance(&self.enemy, self.config.capture_hp_weight);
        bus.push(BattleEvent::CaptureAttempted {
            target: self.enemy.name.clone(),
            catch_chance,
        });

        if roll_capture_success(catch_chance, rng) {
            bus.push(BattleEvent::CaptureSucceeded {
                target: self.enemy.name.clone(),
            });
            self.finish(BattleOutcome::Win, true, bus);
        } else {
            bus.push(BattleEvent::CaptureFailed {
                target: self.enemy.name.clone(),
            });
            self.run_enemy_turn(bus, rng);
        }
    }

    /// Switching is free: the enemy does not get a reply.
    fn execute_switch(&mut self, roster_index: usize, bus: &mut EventBus) {
        self.switch_to(roster_index, false, bus);
        self.state = GameState::AwaitingPlayerAction;
    }

    fn switch_to(&mut self, roster_index: usize, forced: bool, bus: &mut EventBus) {
        let old_index = self.active;
        self.active = roster_index;
        tracing::debug!(old_index, new_index = roster_index, forced, "active creature switched");
        bus.push(BattleEvent::CreatureSwitched {
            old_index,
            new_index: roster_index,
            new_creature: self.roster[roster_index].name.clone(),
            forced,
        });
    }

    // --- Enemy turn ---

    /// The enemy always attacks. Damage taken and a turn tick go to the active roster slot.
    fn run_enemy_turn(&mut self, bus: &mut EventBus, rng: &mut TurnRng) {
        self.state = GameState::AwaitingEnemyAction;

        let defender = &self.roster[self.active];
        let move_index = self.behavior.choose_move(&self.enemy, defender, rng);
        let Some(move_data) = self.enemy.get_move(move_index) else {
            self.state = GameState::AwaitingPlayerAction;
            return;
        };

        let outcome = resolve_attack(&self.enemy, defender, move_data, rng);
        push_attack_events(bus, Side::Enemy, &self.enemy, &move_data.name, &outcome);

        let defender = &mut self.roster[self.active];
        let fainted = defender.take_damage(outcome.damage);
        bus.push(BattleEvent::DamageDealt {
            side: Side::Player,
            target: defender.name.clone(),
            damage: outcome.damage,
            remaining_hp: defender.current_hp(),
        });
        self.ledger.record_defense(self.active, outcome.damage);
        self.ledger.record_turn(self.active);

        if !fainted {
            self.state = GameState::AwaitingPlayerAction;
            return;
        }

        bus.push(BattleEvent::CreatureFainted {
            side: Side::Player,
            creature: self.roster[self.active].name.clone(),
        });

        match self.next_usable_index() {
            Some(replacement) => {
                self.switch_to(replacement, true, bus);
                self.state = GameState::AwaitingPlayerAction;
            }
            None => self.finish(BattleOutcome::Lose, false, bus),
        }
    }

    /// First eligible roster member, in roster order, with health left.
    fn next_usable_index(&self) -> Option<usize> {
        self.eligible
            .iter()
            .copied()
            .find(|&index| !self.roster[index].is_fainted())
    }

    // --- Resolution ---

    fn finish(&mut self, outcome: BattleOutcome, captured: bool, bus: &mut EventBus) {
        self.state = match outcome {
            BattleOutcome::Win => GameState::TerminalWin,
            BattleOutcome::Lose => GameState::TerminalLose,
            BattleOutcome::Fled => GameState::TerminalFled,
        };

        let mut result = EncounterResult {
            outcome,
            captured,
            experience_award: None,
            experience_shares: Vec::new(),
            level_ups: BTreeMap::new(),
            captured_creature: None,
        };

        if outcome == BattleOutcome::Win {
            self.award_experience(captured, &mut result, bus);
        }

        if captured {
            let mut caught = self.enemy.clone();
            caught.set_hp_to_max();
            result.captured_creature = Some(caught);
        }

        bus.push(BattleEvent::BattleEnded { outcome });
        tracing::info!(
            ?outcome,
            captured,
            experience = ?result.experience_award,
            "encounter finished"
        );

        self.result = Some(result);
    }

    fn award_experience(&mut self, captured: bool, result: &mut EncounterResult, bus: &mut EventBus) {
        let calculator = RewardCalculator;
        let award = calculator.compute_experience_award(self.enemy.level, captured);

        let contributions = self.ledger.snapshot();
        let shares = if contributions.is_empty() {
            vec![(self.active, award)]
        } else {
            calculator.distribute(award, &contributions)
        };

        for &(roster_index, amount) in &shares {
            let (updated, level_ups) = calculator.apply_experience(&self.roster[roster_index], amount);
            bus.push(BattleEvent::ExperienceGained {
                roster_index,
                creature: updated.name.clone(),
                amount,
            });

            if level_ups > 0 {
                bus.push(BattleEvent::LevelUp {
                    roster_index,
                    creature: updated.name.clone(),
                    new_level: updated.level,
                });
                result.level_ups.insert(roster_index, level_ups);

                if calculator.can_evolve(&updated) {
                    bus.push(BattleEvent::EvolutionReady {
                        roster_index,
                        creature: updated.name.clone(),
                    });
                }
            }

            self.roster[roster_index] = updated;
        }

        result.experience_award = Some(award);
        result.experience_shares = shares;
    }
}

fn push_attack_events(
    bus: &mut EventBus,
    side: Side,
    attacker: &Creature,
    move_name: &str,
    outcome: &AttackOutcome,
) {
    bus.push(BattleEvent::MoveUsed {
        side,
        attacker: attacker.name.clone(),
        move_name: move_name.to_string(),
        category: outcome.category,
    });
    bus.push(BattleEvent::AttackTypeEffectiveness {
        effectiveness: outcome.tier(),
    });
}
