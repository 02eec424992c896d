mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use govcal_core::data_dir::DataDir;

#[derive(Parser)]
#[command(name = "govcal")]
#[command(about = "Query UK public-holiday calendars and export them as iCalendar")]
struct Cli {
    /// Use this data directory instead of the configured one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List topic documents found in the data directory
    Topics,
    /// List divisions and their years for a topic
    Divisions { topic: String },
    /// Show the upcoming event for a division
    Next {
        topic: String,

        /// Division slug (e.g. "scotland")
        #[arg(short, long)]
        division: Option<String>,

        /// Restrict to a single year instead of the merged calendar
        #[arg(short, long)]
        year: Option<String>,
    },
    /// Export a division's calendar as iCalendar text
    Ics {
        topic: String,

        /// Division slug (e.g. "scotland")
        #[arg(short, long)]
        division: Option<String>,

        /// Restrict to a single year instead of the merged calendar
        #[arg(short, long)]
        year: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Dump a topic's grouped structure as JSON
    Show { topic: String },
    /// Show config paths, or persist a default division
    Config {
        /// Save this division as the default for future commands
        #[arg(long, value_name = "DIVISION")]
        set_division: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut data_dir = match cli.data_dir {
        Some(path) => DataDir::with_path(path),
        None => DataDir::load()?,
    };

    match cli.command {
        Commands::Topics => commands::topics::run(&data_dir),
        Commands::Divisions { topic } => commands::divisions::run(&data_dir, &topic),
        Commands::Next {
            topic,
            division,
            year,
        } => {
            let division = resolve_division(&data_dir, division)?;
            commands::next::run(&data_dir, &topic, &division, year.as_deref())
        }
        Commands::Ics {
            topic,
            division,
            year,
            output,
        } => {
            let division = resolve_division(&data_dir, division)?;
            commands::ics::run(&data_dir, &topic, &division, year.as_deref(), output.as_deref())
        }
        Commands::Show { topic } => commands::show::run(&data_dir, &topic),
        Commands::Config { set_division } => {
            commands::config::run(&mut data_dir, set_division.as_deref())
        }
    }
}

fn resolve_division(data_dir: &DataDir, division: Option<String>) -> Result<String> {
    match division.or_else(|| data_dir.default_division().map(str::to_string)) {
        Some(d) => Ok(d),
        None => anyhow::bail!(
            "No division given.\n\n\
            Pass one with --division, or set a default in the config file:\n  \
            default_division = \"england-and-wales\""
        ),
    }
}
