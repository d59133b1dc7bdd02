use anyhow::Result;
use owo_colors::OwoColorize;
use spotup_core::Session;

use crate::render;

/// Print the seeded event list the way the list panel shows it.
pub fn run() -> Result<()> {
    let mut session = Session::seeded();
    session.login();

    println!("{}", "Nearby Events".bold());
    println!(
        "{}",
        format!("{} events around you", session.events().len()).dimmed()
    );

    let viewer = session.current_user().id.clone();
    let events = session.events();
    for (i, event) in events.iter().enumerate() {
        println!();
        println!("{}", render::event_card(event, &viewer));
        // Separator between cards (but not after the last one)
        if i < events.len() - 1 {
            println!("{}", "   ·".dimmed());
        }
    }

    Ok(())
}
