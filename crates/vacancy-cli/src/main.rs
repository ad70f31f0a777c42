//! `vacancy` CLI — query free campus rooms from a JSON schedule document.
//!
//! ## Usage
//!
//! ```sh
//! # Rooms free on Tuesday at 10:00
//! vacancy --schedule schedules.json free --day Tue --at 10:00
//!
//! # Rooms free on Monday for at least 90 minutes, as JSON
//! vacancy --schedule schedules.json --json free --day Mon --min-duration 90
//!
//! # Rooms free right now (campus time zone)
//! vacancy --schedule schedules.json now
//!
//! # Override the roster and operating window
//! vacancy --schedule schedules.json --rooms 401,402 --window 08:00-18:00 free --day Wed
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use vacancy_engine::clock::ClockTime;
use vacancy_engine::query::{FreeRoomResult, QueryEngine};
use vacancy_engine::schedule::{DayOfWeek, OperatingWindow, ScheduleDocument};

/// The deployed ten-room roster: five rooms each on the 4th and 5th floors.
const DEFAULT_ROSTER: &str = "401,402,403,404,405,501,502,503,504,505";

#[derive(Parser)]
#[command(
    name = "vacancy",
    version,
    about = "Find free campus rooms from weekly occupancy schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the schedule JSON document ({"lastUpdated": ..., "schedules": [...]})
    #[arg(short, long)]
    schedule: String,

    /// Comma-separated room roster
    #[arg(long, default_value = DEFAULT_ROSTER)]
    rooms: String,

    /// Operating window as HH:mm-HH:mm
    #[arg(long, default_value = "09:00-19:30")]
    window: String,

    /// Campus IANA time zone (used by the `now` subcommand)
    #[arg(long, default_value = "Asia/Kolkata")]
    timezone: String,

    /// Print results as a JSON array instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rooms free on a given day, optionally at a time / for a minimum duration
    Free {
        /// Day of week (Mon, Tue, Wed, Thur)
        #[arg(long)]
        day: DayOfWeek,
        /// Clock time the room must be free at (HH:mm)
        #[arg(long)]
        at: Option<ClockTime>,
        /// Minimum free duration in minutes
        #[arg(long)]
        min_duration: Option<i64>,
    },
    /// Rooms free right now, in the campus time zone
    Now,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let document = load_schedule(&cli.schedule)?;
    let engine = QueryEngine::new(
        parse_roster(&cli.rooms),
        parse_window(&cli.window)?,
        cli.timezone
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid IANA time zone: {}", cli.timezone))?,
    );

    let results = match cli.command {
        Commands::Free {
            day,
            at,
            min_duration,
        } => engine.find_free_rooms(&document.schedules, day, at, min_duration),
        Commands::Now => engine.free_now(&document.schedules),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_table(&results);
    }

    Ok(())
}

fn load_schedule(path: &str) -> Result<ScheduleDocument> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule file: {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse schedule file: {}", path))
}

fn parse_roster(rooms: &str) -> Vec<String> {
    rooms
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_window(window: &str) -> Result<OperatingWindow> {
    let (start, end) = window
        .split_once('-')
        .with_context(|| format!("Window must be HH:mm-HH:mm, got: {}", window))?;
    let start: ClockTime = start.trim().parse()?;
    let end: ClockTime = end.trim().parse()?;
    anyhow::ensure!(start < end, "Window start must be before end: {}", window);
    Ok(OperatingWindow { start, end })
}

fn print_table(results: &[FreeRoomResult]) {
    if results.is_empty() {
        println!("No free rooms match.");
        return;
    }
    println!("{:<6} {:<5} {:<7} {:<7} {:>7}", "Room", "Day", "From", "Till", "Minutes");
    for r in results {
        println!(
            "{:<6} {:<5} {:<7} {:<7} {:>7}",
            r.room, r.day, r.free_from, r.free_till, r.duration_minutes
        );
    }
}
