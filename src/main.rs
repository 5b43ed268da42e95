mod clipboard;
mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::Context;

#[derive(Parser)]
#[command(name = "debatecomps")]
#[command(about = "Browse debate tournaments and export them to your calendar")]
struct Cli {
    /// Tournament JSON file (overrides `tournaments_file` in config.toml)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how a free-text tournament date is resolved
    Parse {
        /// e.g. "January 15-17 2025" or "Dec 28 - Jan 4"
        date: String,
    },
    /// List tournaments with their resolved dates
    List {
        /// Only tournaments whose name contains this text
        #[arg(short, long)]
        name: Option<String>,

        /// Only saved tournaments
        #[arg(long)]
        saved: bool,
    },
    /// Print a Google Calendar link for one tournament
    Link {
        /// Tournament name (or unique part of it)
        #[arg(short, long)]
        name: String,

        /// Open the link in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Write tournaments to an .ics file
    Export {
        /// Only tournaments whose name contains this text
        #[arg(short, long)]
        name: Option<String>,

        /// Only saved tournaments
        #[arg(long)]
        saved: bool,

        /// Output file (defaults to `export_file` in config.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Copy tournament details to the clipboard
    Copy {
        /// Only tournaments whose name contains this text
        #[arg(short, long)]
        name: Option<String>,

        /// Only saved tournaments
        #[arg(long)]
        saved: bool,
    },
    /// Save or unsave a tournament
    Save {
        /// Tournament name (or unique part of it)
        #[arg(short, long)]
        name: String,
    },
    /// Show saved tournament ids
    Saved {
        /// Forget every saved tournament
        #[arg(long)]
        clear: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let file = cli.file;

    match cli.command {
        Commands::Parse { date } => commands::parse::run(&date),
        Commands::List { name, saved } => {
            commands::list::run(&Context::load(file)?, name.as_deref(), saved)
        }
        Commands::Link { name, open } => commands::link::run(&Context::load(file)?, &name, open),
        Commands::Export {
            name,
            saved,
            output,
        } => commands::export::run(&Context::load(file)?, name.as_deref(), saved, output),
        Commands::Copy { name, saved } => {
            commands::copy::run(&Context::load(file)?, name.as_deref(), saved)
        }
        Commands::Save { name } => commands::save::toggle(Context::load(file)?, &name),
        Commands::Saved { clear } => commands::save::list(Context::load(file)?, clear),
    }
}
