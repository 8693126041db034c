//! `roster` CLI — run the schedule rules against JSON records from the
//! command line.
//!
//! Stands in for the admin UI's controller layer: records are fetched from
//! the backend by other means and piped in here as plain JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Check a candidate schedule against a physician's existing rows
//! roster check-overlap -i overlap-request.json
//!
//! # Resolve today's effective schedule (stdin → stdout)
//! cat roster.json | roster today --date 2026-01-07
//!
//! # Decide whether a queue ticket may still be printed
//! roster print-window --end-time 17:00 --now 17:05 --grace 10
//! ```

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};
use std::process;

use roster_rules::{
    find_overlaps, is_printable, resolve_for_date, timeparse, Physician, PhysicianDirectory,
    WeeklySchedule, DEFAULT_GRACE_MINUTES,
};

#[derive(Parser)]
#[command(name = "roster", version, about = "Physician roster schedule rules")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a candidate weekly schedule for day/time conflicts
    CheckOverlap {
        /// Input file with {"candidate": ..., "existing": [...]} (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Resolve the schedule instances effective on a date
    Today {
        /// Input file with {"schedules": [...], "physicians": [...]} (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Target date, YYYY-MM-DD (defaults to the local current date)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Decide whether a queue ticket may still be printed
    PrintWindow {
        /// Clinic session end time, e.g. "17:00" (omit for no restriction)
        #[arg(long)]
        end_time: Option<String>,
        /// Wall-clock time to evaluate at, e.g. "17:05" (defaults to now)
        #[arg(long)]
        now: Option<String>,
        /// Grace period in minutes after the end time
        #[arg(long, default_value_t = DEFAULT_GRACE_MINUTES)]
        grace: u32,
    },
}

/// Input shape for `check-overlap`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverlapRequest {
    candidate: WeeklySchedule,
    #[serde(default)]
    existing: Vec<WeeklySchedule>,
}

/// Input shape for `today`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodayRequest {
    schedules: Vec<WeeklySchedule>,
    #[serde(default)]
    physicians: Vec<Physician>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::CheckOverlap { input } => {
            let raw = read_input(input.as_deref())?;
            let request: OverlapRequest =
                serde_json::from_str(&raw).context("Failed to parse overlap request JSON")?;

            request
                .candidate
                .validate()
                .context("Candidate schedule is not well-formed")?;

            let overlaps = find_overlaps(&request.candidate, &request.existing);
            let report = serde_json::json!({
                "hasOverlap": !overlaps.is_empty(),
                "overlaps": overlaps,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Today { input, date } => {
            let raw = read_input(input.as_deref())?;
            let request: TodayRequest =
                serde_json::from_str(&raw).context("Failed to parse today request JSON")?;

            let target_date = date.unwrap_or_else(|| Local::now().date_naive());
            let directory = PhysicianDirectory::new(request.physicians);
            let instances = resolve_for_date(target_date, &request.schedules, &directory);
            println!("{}", serde_json::to_string_pretty(&instances)?);
        }
        Commands::PrintWindow {
            end_time,
            now,
            grace,
        } => {
            let now_time = match now.as_deref() {
                Some(raw) => parse_clock(raw)
                    .with_context(|| format!("Invalid --now time: {:?}", raw))?,
                None => Local::now().time(),
            };

            if is_printable(end_time.as_deref(), now_time, grace) {
                println!("printable");
            } else {
                println!("print window closed");
                process::exit(1);
            }
        }
    }

    Ok(())
}

/// Parse a clock-time argument through the library's grammar so the CLI
/// accepts the same "HH:MM" / "HH:MM AM/PM" forms as the records do.
fn parse_clock(raw: &str) -> Result<NaiveTime> {
    let minutes = timeparse::parse_time_strict(raw)?;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
        .context("minutes out of range for a time of day")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
