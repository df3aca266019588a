//! fk_cli
//!
//! Runs matches from the command line: a single match from a request file
//! (or two generated squads), or a seeded batch played in parallel.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use fk_core::{simulate_batch, simulate_match, EngineConfig, MatchRequest, MatchResponse, MatchResult, TeamSetup, SCHEMA_VERSION};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "fk_cli")]
#[command(version = fk_core::VERSION)]
#[command(about = "Simulate football matches", long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match and print the result as JSON
    Play {
        /// Match request JSON file (generated squads when absent)
        #[arg(long)]
        request: Option<PathBuf>,

        /// Seed, overrides the request's seed
        #[arg(long)]
        seed: Option<u64>,

        /// Engine config file (.yaml, .yml or .json)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Cup tie: extra time and penalties on a draw
        #[arg(long, default_value = "false")]
        extra_time: bool,

        /// Pretty-print the JSON output
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Play many generated matches and print a summary
    Batch {
        /// Number of matches
        #[arg(long)]
        matches: u32,

        /// First seed; match i uses seed + i (wrapping)
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Engine config file (.yaml, .yml or .json)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the JSON schema of a match request
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Play { request, seed, config, extra_time, pretty } => {
            let mut req = match request {
                Some(path) => read_request(&path)?,
                None => default_request(seed.unwrap_or(0)),
            };
            if let Some(seed) = seed {
                req.seed = seed;
            }
            req.extra_time |= extra_time;
            if let Some(path) = config {
                req.config = Some(load_config(&path)?);
            } else if req.config.is_none() {
                req.config = Some(EngineConfig::from_env_or_default());
            }

            let result = simulate_match(&req)?;
            print_summary(&result);

            let out = MatchResponse { schema_version: SCHEMA_VERSION, result };
            if pretty {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", serde_json::to_string(&out)?);
            }
        }

        Commands::Batch { matches, seed, config } => {
            if matches == 0 {
                bail!("--matches must be at least 1");
            }
            let engine = match config {
                Some(path) => load_config(&path)?,
                None => EngineConfig::from_env_or_default(),
            };
            let requests: Vec<MatchRequest> = (0..u64::from(matches))
                .map(|i| {
                    let mut req = default_request(batch_seed(seed, i));
                    req.config = Some(engine);
                    req
                })
                .collect();

            info!("playing {} matches from seed {}", matches, seed);
            let mut home_wins = 0u32;
            let mut away_wins = 0u32;
            let mut goals = 0u64;
            for (i, result) in simulate_batch(&requests).into_iter().enumerate() {
                let result = result.with_context(|| format!("match {} failed", i))?;
                match result.winner() {
                    Some(fk_core::TeamSide::First) => home_wins += 1,
                    Some(fk_core::TeamSide::Second) => away_wins += 1,
                    None => {}
                }
                goals += u64::from(result.total_goals());
            }

            println!("Matches:   {}", matches);
            println!("Home wins: {}", home_wins);
            println!("Away wins: {}", away_wins);
            println!("Draws:     {}", matches - home_wins - away_wins);
            println!("Goals/match: {:.2}", goals as f64 / f64::from(matches));
        }

        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&fk_core::match_request_schema())?);
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).with_writer(std::io::stderr).init();
}

fn batch_seed(first: u64, i: u64) -> u64 {
    first.wrapping_add(i)
}

fn default_request(seed: u64) -> MatchRequest {
    MatchRequest::new(seed, TeamSetup::standard("Home", 0.6), TeamSetup::standard("Away", 0.5))
}

fn read_request(path: &Path) -> Result<MatchRequest> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let req = serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(req)
}

fn load_config(path: &Path) -> Result<EngineConfig> {
    EngineConfig::from_path(path).with_context(|| format!("loading config {}", path.display()))
}

fn print_summary(result: &MatchResult) {
    info!(
        "{} {} - {} {}{}",
        result.home_team,
        result.score_home,
        result.score_away,
        result.away_team,
        if result.extra_time { " (a.e.t.)" } else { "" }
    );
    if let Some(pens) = &result.penalty_shootout {
        info!("penalties {}-{}, {:?} side wins", pens.goals_home, pens.goals_away, pens.winner);
    }
    info!(
        "shots {}-{}, tackles {}-{}, {} ticks",
        result.home_stats.shots,
        result.away_stats.shots,
        result.home_stats.tackles,
        result.away_stats.tackles,
        result.ticks
    );
}
