//! Stride CLI - running ladder progress tracker.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use stride_core::{LadderConfig, LevelDescriptor, LevelStatus, PhaseStats, PhaseStatus};
use stride_progress::{ProgressSnapshot, ProgressTracker, ProgressionEngine};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Date-driven running ladder progress tracker", long_about = None)]
struct Cli {
    /// Ladder configuration file (JSON); built-in ladder if omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show progress on a date
    Status {
        /// Query date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List every level of the ladder
    Levels {
        /// Query date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show progress through each phase
    Phases {
        /// Query date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the projected finish date
    Project {
        /// Query date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Move the query date forward by whole runs and show progress there
    Advance {
        /// Starting date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Number of runs to advance
        #[arg(long, default_value = "1")]
        units: u32,
    },
}

#[derive(Serialize)]
struct LevelRow {
    #[serde(flatten)]
    level: LevelDescriptor,
    status: LevelStatus,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => LadderConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LadderConfig::default(),
    };
    let engine = ProgressionEngine::from_config(config).context("Invalid ladder configuration")?;

    match cli.command {
        Commands::Status { date } => {
            let snapshot = engine.snapshot(date.unwrap_or_else(today));
            if cli.json {
                print_json(&snapshot)?;
            } else {
                print_status(&snapshot);
            }
        }
        Commands::Levels { date } => {
            let position = engine.position(date.unwrap_or_else(today));
            let rows: Vec<LevelRow> = engine
                .ladder()
                .level_statuses(&position)
                .into_iter()
                .map(|(level, status)| LevelRow { level, status })
                .collect();

            if cli.json {
                print_json(&rows)?;
            } else {
                println!("Ladder ({} levels)", rows.len());
                for row in rows {
                    let marker = match row.status {
                        LevelStatus::Completed => "done".to_string(),
                        LevelStatus::Current => format!(
                            "{}/{} ({}%)",
                            position.count,
                            row.level.requirement,
                            engine.level_progress_percent(&position)
                        ),
                        LevelStatus::Upcoming => String::new(),
                    };
                    println!(
                        "  {:>3}km | {:>3} runs | {:>5} km | {}",
                        row.level.level, row.level.requirement, row.level.cumulative_units, marker
                    );
                }
            }
        }
        Commands::Phases { date } => {
            let snapshot = engine.snapshot(date.unwrap_or_else(today));
            if cli.json {
                print_json(&snapshot.phases)?;
            } else {
                print_phases(&snapshot.phases);
            }
        }
        Commands::Project { date } => {
            let snapshot = engine.snapshot(date.unwrap_or_else(today));
            if cli.json {
                print_json(&serde_json::json!({
                    "date": snapshot.date,
                    "position": snapshot.position,
                    "units_remaining": snapshot.units_remaining,
                    "projected_finish": snapshot.projected_finish,
                }))?;
            } else if snapshot.is_finished() {
                println!("Ladder finished as of {}", format_date(snapshot.date));
            } else {
                println!(
                    "{} runs left from {}: finish on {}",
                    snapshot.units_remaining,
                    format_date(snapshot.date),
                    format_date(snapshot.projected_finish)
                );
            }
        }
        Commands::Advance { date, units } => {
            let from = date.unwrap_or_else(today);
            let to = engine.next_unit_date(from, i64::from(units));
            info!("Advancing {} runs: {} -> {}", units, from, to);
            let snapshot = engine.snapshot(to);
            if cli.json {
                print_json(&snapshot)?;
            } else {
                print_status(&snapshot);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn today() -> NaiveDate {
    let today = Local::now().date_naive();
    debug!("No date given, using today ({})", today);
    today
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_status(snapshot: &ProgressSnapshot) {
    let position = snapshot.position;

    println!("Progress on {}", format_date(snapshot.date));
    println!("  Current distance: {} km", position.level);
    println!(
        "  Runs completed:   {} / {} ({}%)",
        position.count, snapshot.requirement, snapshot.level_percent
    );
    println!("  {}", level_message(snapshot));
    println!("  Total distance:   {} km", snapshot.cumulative_units_completed);
    println!("  Overall progress: {}%", snapshot.overall_percent);
    println!("  Projected finish: {}", format_date(snapshot.projected_finish));
    println!();
    println!("  Total runs:         {}", snapshot.units_required);
    println!("  Distance goal:      {} km", snapshot.cumulative_units_goal);
    println!("  Runs remaining:     {}", snapshot.units_remaining);
    println!("  Distance remaining: {} km", snapshot.cumulative_units_remaining);
    println!("  Levels in progress: {}", snapshot.levels_touched);
    println!();
    print_phases(&snapshot.phases);
}

fn print_phases(phases: &[PhaseStats]) {
    println!("Phases");
    for phase in phases {
        println!(
            "  {:<14} {:>2}-{:<2}km {:>3}% {}",
            phase.name,
            phase.lo,
            phase.hi,
            phase.whole_percent(),
            format_phase_status(phase.status)
        );
    }
}

fn level_message(snapshot: &ProgressSnapshot) -> String {
    let left = snapshot.units_left_in_level;
    if snapshot.is_finished() {
        "Ladder complete!".to_string()
    } else if left == 0 {
        "Level complete! The next run moves you up a level.".to_string()
    } else {
        format!(
            "{} more run{} of {}km to level up!",
            left,
            if left == 1 { "" } else { "s" },
            snapshot.position.level
        )
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn format_phase_status(status: PhaseStatus) -> &'static str {
    match status {
        PhaseStatus::NotStarted => "",
        PhaseStatus::InProgress => "CURRENT",
        PhaseStatus::Completed => "DONE",
    }
}
