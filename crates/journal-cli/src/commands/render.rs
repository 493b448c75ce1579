//! Offline rendering of raw values through a format string.

use anyhow::{Result, bail};
use journal_core::{Position, format_game_time, format_local_time, format_player_location};

/// Run the date command
pub fn date(raw: f32, format: &str) -> Result<()> {
    println!("{}", format_game_time(format, Some(raw)));
    Ok(())
}

/// Run the location command
pub fn location(
    raw: [f32; 3],
    world: Option<&str>,
    cell: Option<&str>,
    format: &str,
) -> Result<()> {
    println!("{}", render_location(raw, world, cell, format));
    Ok(())
}

/// Non-finite components render as the unavailable sentinel
fn render_location(raw: [f32; 3], world: Option<&str>, cell: Option<&str>, format: &str) -> String {
    format_player_location(format, Position::from_raw(raw), world, cell)
}

/// Run the local-time command
pub fn local_time(format: &str) -> Result<()> {
    let text = format_local_time(format);
    if text.is_empty() && !format.is_empty() {
        bail!("Invalid time format: {}", format);
    }
    println!("{}", text);
    Ok(())
}
