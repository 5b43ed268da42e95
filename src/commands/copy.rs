use anyhow::Result;
use debatecomps_core::export::copy_tournaments;
use owo_colors::OwoColorize;

use crate::clipboard;
use crate::commands::Context;

pub fn run(ctx: &Context, name: Option<&str>, saved_only: bool) -> Result<()> {
    let tournaments = ctx.select(name, saved_only)?;

    if tournaments.is_empty() {
        println!("{}", "Nothing to copy".dimmed());
        return Ok(());
    }

    let backends = clipboard::backends();
    let writers = clipboard::as_writers(&backends);

    if copy_tournaments(&tournaments, &writers) {
        println!(
            "{} {} {}",
            "Copied".green(),
            tournaments.len(),
            if tournaments.len() == 1 { "tournament" } else { "tournaments" }
        );
        Ok(())
    } else {
        anyhow::bail!(
            "Could not copy to the clipboard.\n\n\
            Install one of: pbcopy, wl-copy, xclip, xsel\n\
            or run inside a terminal that supports OSC 52."
        );
    }
}
