//! Command-line front end for the battle engine.
//!
//! Usage:
//!   battle-sim battle Charizard Blastoise --level-a 60 --seed 42
//!   battle-sim predict --a 78,84,78,109,85,100 --b 35,55,40,50,50,90
//!   battle-sim moveset Pikachu

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use pokemon_battle_sim::{
    predict_simple_outcome, validate_level, BaseStats, BattleConfig, BattleEngine, BattleRng,
    CreatureSource, MoveCatalog, Roster, SeededRng,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "battle-sim", version, about = "Simulate a battle between two creatures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full battle between two roster creatures
    Battle(BattleArgs),

    /// Compare two raw stat arrays by total
    Predict(PredictArgs),

    /// Show the moves a creature fights with
    Moveset(MovesetArgs),
}

#[derive(Args)]
struct BattleArgs {
    /// Name of creature A
    a: String,
    /// Name of creature B
    b: String,
    #[arg(long)]
    level_a: Option<u16>,
    #[arg(long)]
    level_b: Option<u16>,
    /// Seed for a reproducible battle; omitted means OS entropy
    #[arg(long)]
    seed: Option<u64>,
    /// RON or JSON roster file (defaults to the bundled roster)
    #[arg(long)]
    roster: Option<PathBuf>,
    /// RON battle config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PredictArgs {
    /// hp,atk,def,spa,spd,spe
    #[arg(long, value_parser = parse_stats)]
    a: BaseStats,
    /// hp,atk,def,spa,spd,spe
    #[arg(long, value_parser = parse_stats)]
    b: BaseStats,
}

#[derive(Args)]
struct MovesetArgs {
    name: String,
    #[arg(long, default_value_t = 50)]
    level: u16,
    #[arg(long)]
    roster: Option<PathBuf>,
}

fn parse_stats(value: &str) -> Result<BaseStats, String> {
    let parts: Vec<u16> = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u16>()
                .map_err(|err| format!("invalid stat '{}': {}", part.trim(), err))
        })
        .collect::<Result<_, _>>()?;
    let stats: [u16; 6] = parts
        .try_into()
        .map_err(|parts: Vec<u16>| format!("expected 6 stats, got {}", parts.len()))?;
    Ok(BaseStats::from(stats))
}

fn load_roster(path: Option<&PathBuf>) -> Result<Roster> {
    match path {
        Some(path) => {
            Roster::load(path).with_context(|| format!("loading roster {}", path.display()))
        }
        None => Roster::bundled().context("loading bundled roster"),
    }
}

fn run_battle_command(args: BattleArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            BattleConfig::load(path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => BattleConfig::default(),
    };
    let roster = load_roster(args.roster.as_ref())?;

    let a = roster
        .find_creature(&args.a)
        .ok_or_else(|| anyhow!("creature '{}' not found in roster", args.a))?;
    let b = roster
        .find_creature(&args.b)
        .ok_or_else(|| anyhow!("creature '{}' not found in roster", args.b))?;

    let mut rng: Box<dyn BattleRng> = match args.seed {
        Some(seed) => Box::new(SeededRng::from_seed(seed)),
        None => Box::new(SeededRng::from_entropy()),
    };

    let engine = BattleEngine::new(MoveCatalog::standard()).with_config(config);
    let result = match (args.level_a, args.level_b) {
        (None, None) => {
            tracing::info!(a = a.name(), b = b.name(), seed = ?args.seed, "running battle at default level");
            engine.run_at_default_level(&a, &b, rng.as_mut())
        }
        (level_a, level_b) => {
            let default_level = u16::from(engine.config().default_level);
            let level_a = validate_level(level_a.unwrap_or(default_level))?;
            let level_b = validate_level(level_b.unwrap_or(default_level))?;
            tracing::info!(a = a.name(), b = b.name(), level_a, level_b, seed = ?args.seed, "running battle");
            engine.run(&a, &b, level_a, level_b, rng.as_mut())
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for line in &result.log {
            println!("{}", line);
        }
        println!();
        println!("{} ({} turns)", result.summary(), result.turns);
    }
    Ok(())
}

fn run_moveset_command(args: MovesetArgs) -> Result<()> {
    let roster = load_roster(args.roster.as_ref())?;
    let creature = roster
        .find_creature(&args.name)
        .ok_or_else(|| anyhow!("creature '{}' not found in roster", args.name))?;
    let level = validate_level(args.level)?;

    let engine = BattleEngine::new(MoveCatalog::standard());
    println!("{} ({} type) at level {}:", creature.name(), creature.type_label(), level);
    for move_data in engine.moveset_for(&creature, level) {
        let power = move_data
            .power
            .map_or_else(|| "-".to_string(), |power| power.to_string());
        println!(
            "  {:<14} {:<8} {:<8} power {:>3}  acc {:>3}",
            move_data.name,
            move_data.move_type.to_string(),
            move_data.category.to_string(),
            power,
            move_data.accuracy
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Battle(args) => run_battle_command(args),
        Commands::Predict(args) => {
            println!("{}", predict_simple_outcome(&args.a, &args.b));
            Ok(())
        }
        Commands::Moveset(args) => run_moveset_command(args),
    }
}
