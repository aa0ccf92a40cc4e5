mod output;

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use output::default_filename;
use serde::Serialize;
use tripcal_core::{extract_days, generate_calendar, synthesize};

#[derive(Parser)]
#[command(name = "tripcal-cli")]
#[command(about = "Turn free-form travel itinerary text into an importable .ics calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an .ics calendar file from itinerary text
    Generate {
        /// Itinerary text file (reads stdin when omitted or "-")
        input: Option<PathBuf>,

        /// First day of the trip (e.g. "2025-06-01"); defaults to today
        #[arg(short, long)]
        start: Option<String>,

        /// Where to write the calendar ("-" for stdout); defaults to {name}_itinerary.ics
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Trip name used for the default output filename
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Preview the day segments extracted from itinerary text
    Days {
        /// Itinerary text file (reads stdin when omitted or "-")
        input: Option<PathBuf>,

        /// First day of the trip (e.g. "2025-06-01"); defaults to today
        #[arg(short, long)]
        start: Option<String>,

        /// Print the preview as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            start,
            output,
            name,
        } => cmd_generate(input, start, output, name),
        Commands::Days { input, start, json } => cmd_days(input, start, json),
    }
}

fn cmd_generate(
    input: Option<PathBuf>,
    start: Option<String>,
    output: Option<PathBuf>,
    name: Option<String>,
) -> Result<()> {
    let text = read_itinerary(input.as_deref())?;
    let start_date = start.as_deref().map(parse_start_date).transpose()?;

    let segments = extract_days(&text);
    if segments.is_empty() {
        println!("No day labels found; generating a single whole-trip event.");
    } else {
        println!("Found {} day segment(s).", segments.len());
    }

    let bytes = generate_calendar(&text, start_date)?;

    match output {
        Some(path) if path.as_os_str() == "-" => {
            std::io::stdout().write_all(&bytes)?;
        }
        Some(path) => write_calendar(&path, &bytes)?,
        None => {
            let filename = default_filename(name.as_deref(), input.as_deref());
            write_calendar(Path::new(&filename), &bytes)?;
        }
    }

    Ok(())
}

/// One row of the `days` preview.
#[derive(Serialize)]
struct DayPreview {
    day_index: u64,
    date: NaiveDate,
    summary: String,
    content: String,
}

fn cmd_days(input: Option<PathBuf>, start: Option<String>, json: bool) -> Result<()> {
    let text = read_itinerary(input.as_deref())?;
    let segments = extract_days(&text);

    if segments.is_empty() {
        if json {
            println!("[]");
        } else {
            println!("No day labels found. `generate` would produce a single whole-trip event.");
        }
        return Ok(());
    }

    let start_date = match start.as_deref() {
        Some(s) => parse_start_date(s)?,
        None => Utc::now().date_naive(),
    };

    let events = synthesize(&text, &segments, start_date)?;
    let previews: Vec<DayPreview> = segments
        .iter()
        .zip(&events)
        .map(|(segment, event)| DayPreview {
            day_index: segment.day_index,
            date: event.start,
            summary: event.summary.clone(),
            content: segment.content.clone(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&previews)?);
        return Ok(());
    }

    for preview in &previews {
        println!("{}  {}", preview.date, preview.summary);
        for line in preview.content.lines() {
            println!("    {}", line);
        }
    }

    Ok(())
}

/// Read itinerary text from a file, or stdin when the path is omitted or "-"
fn read_itinerary(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Parse YYYY-MM-DD as a calendar date
fn parse_start_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

fn write_calendar(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());

    Ok(())
}
