use anyhow::{Context as _, Result};
use debatecomps_core::export::google_calendar_url;
use owo_colors::OwoColorize;

use crate::commands::Context;

pub fn run(ctx: &Context, name: &str, open_in_browser: bool) -> Result<()> {
    let tournament = ctx.find_one(name)?;
    let url = google_calendar_url(&tournament);

    println!("{url}");

    if open_in_browser {
        open::that(&url).context("Could not open the browser")?;
        eprintln!("{} {}", "Opened".green(), tournament.competition_name);
    }

    Ok(())
}
