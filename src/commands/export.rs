use std::path::PathBuf;

use anyhow::{Context as _, Result};
use debatecomps_core::export::build_icalendar;
use owo_colors::OwoColorize;

use crate::commands::Context;

pub fn run(
    ctx: &Context,
    name: Option<&str>,
    saved_only: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let tournaments = ctx.select(name, saved_only)?;

    if tournaments.is_empty() {
        println!("{}", "Nothing to export".dimmed());
        return Ok(());
    }

    let path = output.unwrap_or_else(|| ctx.config.export_path());
    let ics = build_icalendar(&tournaments);

    std::fs::write(&path, ics)
        .with_context(|| format!("Could not write {}", path.display()))?;

    println!(
        "{} {} {} to {}",
        "Exported".green(),
        tournaments.len(),
        if tournaments.len() == 1 { "tournament" } else { "tournaments" },
        path.display()
    );

    Ok(())
}
