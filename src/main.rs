//! genmon-sim: run one wild encounter from a RON scenario file.
//!
//! The player always uses its first move and flees once `--max-turns` is reached.

use anyhow::{bail, Context, Result};
use clap::Parser;
use genmon_battle::stats::{pick_wild_level, scale_to_level};
use genmon_battle::{
    start_encounter, BattleConfig, Creature, CreatureRecord, Inventory, PlayerAction, TurnRng,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Simulate a single wild encounter
#[derive(Parser)]
#[command(name = "genmon-sim", version, about)]
struct Cli {
    /// Scenario file (RON) with the roster, the enemy and the inventory
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// Engine configuration (RON). Defaults apply when omitted
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Flee after this many player actions
    #[arg(short, long, default_value_t = 50)]
    max_turns: u32,

    /// Print the final result as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Deserialize)]
struct Scenario {
    roster: Vec<CreatureRecord>,
    /// Defaults to every roster member
    #[serde(default)]
    eligible: Option<Vec<usize>>,
    #[serde(default)]
    lead: usize,
    enemy: CreatureRecord,
    #[serde(default)]
    inventory: Inventory,
    /// Bring the enemy from its generated level into the lead's wild level range
    #[serde(default)]
    scale_enemy: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => BattleConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => BattleConfig::default(),
    };

    let content = fs::read_to_string(&cli.scenario)
        .with_context(|| format!("reading scenario {}", cli.scenario.display()))?;
    let scenario: Scenario = ron::from_str(&content).context("parsing scenario")?;

    let roster = scenario
        .roster
        .into_iter()
        .map(Creature::from_record)
        .collect::<Result<Vec<_>, _>>()
        .context("ingesting roster")?;
    let mut enemy = Creature::from_record(scenario.enemy).context("ingesting enemy")?;

    let Some(lead) = roster.get(scenario.lead) else {
        bail!("lead index {} is outside the roster", scenario.lead);
    };

    let mut std_rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    if scenario.scale_enemy {
        let mut rng = TurnRng::from_rng(&mut std_rng);
        let wild_level = pick_wild_level(lead.level, config.wild_level_offset, &mut rng);
        enemy = scale_to_level(&enemy, enemy.level, wild_level);
        tracing::info!(enemy = %enemy.name, wild_level, "enemy scaled");
    }

    let eligible = scenario
        .eligible
        .unwrap_or_else(|| (0..roster.len()).collect());

    let mut rng = TurnRng::from_rng(&mut std_rng);
    let (mut encounter, opening) = start_encounter(
        roster,
        eligible,
        scenario.lead,
        enemy,
        scenario.inventory,
        config,
        &mut rng,
    )?;
    print_lines(&opening);

    let mut turns = 0;
    while !encounter.is_finished() {
        let action = if turns < cli.max_turns {
            PlayerAction::UseMove { move_index: 0 }
        } else {
            PlayerAction::Flee
        };
        let mut rng = TurnRng::from_rng(&mut std_rng);
        let turn = encounter.submit_action(action, &mut rng)?;
        print_lines(&turn.events);
        turns += 1;
    }

    let Some(result) = encounter.result().cloned() else {
        bail!("encounter finished without a result");
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!();
    println!("Outcome: {:?} after {} turn(s)", result.outcome, turns);
    if let Some(award) = result.experience_award {
        println!("Experience: {}", award);
        for (roster_index, share) in &result.experience_shares {
            println!("  slot {}: +{}", roster_index, share);
        }
    }
    let parts = encounter.into_parts();
    for (index, creature) in parts.roster.iter().enumerate() {
        println!(
            "  [{}] {} Lv.{} HP {}/{}",
            index,
            creature.name,
            creature.level,
            creature.current_hp(),
            creature.max_hp()
        );
    }
    println!(
        "Inventory: {} potion(s), {} capture device(s)",
        parts.inventory.potions, parts.inventory.capture_devices
    );

    Ok(())
}

fn print_lines(events: &[genmon_battle::BattleEvent]) {
    for line in events.iter().filter_map(|event| event.format()) {
        println!("{}", line);
    }
}
