use anyhow::Result;
use owo_colors::OwoColorize;
use spotup_core::Session;

use crate::config::SpotupConfig;
use crate::render;

/// Print the seeded map once.
pub fn run(config: &SpotupConfig) -> Result<()> {
    let mut session = Session::seeded();
    session.login();

    println!("{}", "📍 SpotUp".bold());
    println!("{}", render::map_grid(&session.markers(), None, config));
    Ok(())
}
