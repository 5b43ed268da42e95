use anyhow::Result;
use debatecomps_core::saved::SavedStore;
use owo_colors::OwoColorize;

use crate::commands::Context;
use crate::render::Render;

pub fn run(ctx: &Context, name: Option<&str>, saved_only: bool) -> Result<()> {
    let tournaments = ctx.select(name, saved_only)?;

    if tournaments.is_empty() {
        println!("{}", "No tournaments found".dimmed());
        return Ok(());
    }

    let saved = ctx.store.saved_ids();
    for (i, tournament) in tournaments.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let marker = if saved.contains(&tournament.id()) { "★ " } else { "" };
        println!("{}{}", marker.yellow(), tournament.render());
    }

    Ok(())
}
