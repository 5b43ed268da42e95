use anyhow::Result;
use debatecomps_core::saved::SavedStore;
use owo_colors::OwoColorize;

use crate::commands::Context;

pub fn toggle(mut ctx: Context, name: &str) -> Result<()> {
    let tournament = ctx.find_one(name)?;
    let id = tournament.id();

    if ctx.store.toggle(&id)? {
        println!("{} {}", "Saved".green(), tournament.competition_name);
    } else {
        println!("{} {}", "Unsaved".yellow(), tournament.competition_name);
    }

    Ok(())
}

pub fn list(mut ctx: Context, clear: bool) -> Result<()> {
    if clear {
        ctx.store.clear()?;
        println!("{}", "Cleared saved tournaments".yellow());
        return Ok(());
    }

    let ids = ctx.store.saved_ids();
    if ids.is_empty() {
        println!("{}", "No saved tournaments".dimmed());
        return Ok(());
    }

    for id in ids {
        println!("{id}");
    }
    println!("{}", ctx.store.path().display().dimmed());

    Ok(())
}
