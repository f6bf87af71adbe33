//! Command-line front end: reads a timetabling input file, prints the rows.
//!
//! ```text
//! timetable --input week.json --seed 7 --table
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use serde::de::DeserializeOwned;

use campus_timetable::format::render_table;
use campus_timetable::model::TimetableInput;
use campus_timetable::slots::LabMode;
use campus_timetable::{generate_timetable, SolveOptions};

#[derive(Parser, Debug)]
#[command(name = "timetable", about = "Generate a weekly course timetable")]
struct Args {
    /// JSON file with teachers, courses, rooms, timeslots and constraints
    #[arg(short, long)]
    input: PathBuf,

    /// JSON file with GA, slot and penalty options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Override the input's max teaching hours per day
    #[arg(long)]
    max_hours: Option<u32>,

    /// Stop evolving after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Treat long (95+ minute) slots as standalone lab slots
    #[arg(long)]
    long_slot_labs: bool,

    /// Print a text table instead of JSON
    #[arg(long)]
    table: bool,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Command-line flags win over the files.
fn apply_overrides(args: &Args, input: &mut TimetableInput, options: &mut SolveOptions) {
    if let Some(hours) = args.max_hours {
        input.constraints.max_hours_per_day = hours;
    }
    if let Some(seed) = args.seed {
        options.ga.seed = Some(seed);
    }
    if let Some(ms) = args.time_limit_ms {
        options.ga.time_limit_ms = Some(ms);
    }
    if args.long_slot_labs {
        options.slots.lab_mode = LabMode::LongSlot;
    }
}

fn run(args: &Args) -> Result<String> {
    let mut input: TimetableInput = read_json(&args.input)?;
    let mut options: SolveOptions = match &args.config {
        Some(path) => read_json(path)?,
        None => SolveOptions::default(),
    };
    apply_overrides(args, &mut input, &mut options);

    let output = generate_timetable(&input, &options).context("timetable generation failed")?;
    for miss in &output.missing {
        info!(
            "{} ({}): {} of {} {} sessions placed",
            miss.course, miss.course_id, miss.placed, miss.required, miss.kind
        );
    }

    if args.table {
        Ok(render_table(&output.rows))
    } else {
        Ok(serde_json::to_string_pretty(&output.rows)?)
    }
}

fn error_json(e: &anyhow::Error) -> String {
    serde_json::json!({ "error": format!("{e:#}") }).to_string()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            println!("{}", error_json(&e));
            ExitCode::FAILURE
        }
    }
}
