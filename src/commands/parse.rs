use anyhow::Result;
use debatecomps_core::date_range::parse_date_range;
use debatecomps_core::export::text::display_range;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(date: &str) -> Result<()> {
    let range = parse_date_range(date);

    println!("{}", display_range(&range).bold());
    println!("  start {}", range.start);
    println!("  end   {}", range.end);

    let notes = range.assumptions.render();
    if !notes.is_empty() {
        println!("{}", notes.dimmed());
    }

    Ok(())
}
