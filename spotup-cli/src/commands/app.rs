//! Interactive demo session.
//!
//! Drives the session state machine from a terminal menu: sign in (any
//! credentials), then map + panels, event selection, joins, event creation
//! and profile editing. The screen is redrawn from the latest session
//! state after every action.

use anyhow::Result;
use chrono::Local;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;
use spotup_core::event::{Category, EventDraft};
use spotup_core::profile::{AGE_RANGES, HOBBY_OPTIONS};
use spotup_core::{Panel, Session};

use crate::config::SpotupConfig;
use crate::render;
use crate::utils::tui::create_spinner;

pub fn run(config: &SpotupConfig) -> Result<()> {
    let mut session = Session::seeded();

    loop {
        sign_in(&mut session)?;
        if main_loop(&mut session, config)? {
            return Ok(());
        }
        // Logged out: back to the sign-in screen. Store contents carry over.
    }
}

/// The sign-in screen. Any input is accepted; this is a demo gate, not
/// authentication.
fn sign_in(session: &mut Session) -> Result<()> {
    println!();
    println!("{}", "📍 SpotUp".bold());
    println!("{}", "Find what's happening around you".dimmed());
    println!();

    let _email: String = Input::new().with_prompt("  Email").interact_text()?;
    let _password = rpassword::prompt_password("  Password: ")?;

    let spinner = create_spinner("  Finding events near you".to_string());
    std::thread::sleep(std::time::Duration::from_millis(600));
    spinner.finish_and_clear();

    session.login();
    println!(
        "{}",
        format!("  Welcome back, {}!", session.current_user().name).green()
    );
    Ok(())
}

enum Action {
    OpenEvent,
    JoinSelected,
    CloseOverlay,
    ToggleList,
    ToggleProfile,
    EditProfile,
    CreateEvent,
    Logout,
    Quit,
}

/// Menu loop while signed in. Returns true to quit the program, false on
/// logout.
fn main_loop(session: &mut Session, config: &SpotupConfig) -> Result<bool> {
    loop {
        draw_screen(session, config);

        let mut items: Vec<(String, Action)> = Vec::new();
        if let Some(event) = session.selected() {
            if !event.is_joined(&session.current_user().id) {
                items.push(("Join this event".to_string(), Action::JoinSelected));
            }
            items.push(("Close event".to_string(), Action::CloseOverlay));
        }
        items.push(("Open an event".to_string(), Action::OpenEvent));
        items.push((
            match session.panel() {
                Panel::List => "Hide event list".to_string(),
                _ => "Show event list".to_string(),
            },
            Action::ToggleList,
        ));
        items.push((
            match session.panel() {
                Panel::Profile => "Hide profile".to_string(),
                _ => "Show profile".to_string(),
            },
            Action::ToggleProfile,
        ));
        if session.panel() == Panel::Profile {
            items.push(("Edit profile".to_string(), Action::EditProfile));
        }
        items.push(("Create an event".to_string(), Action::CreateEvent));
        items.push(("Log out".to_string(), Action::Logout));
        items.push(("Quit".to_string(), Action::Quit));

        let labels: Vec<&str> = items.iter().map(|(label, _)| label.as_str()).collect();
        let choice = Select::new().items(&labels).default(0).interact()?;

        match items[choice].1 {
            Action::OpenEvent => open_event(session)?,
            Action::JoinSelected => {
                if let Err(e) = session.join_selected() {
                    println!("  {}", e.to_string().red());
                } else {
                    println!("  {}", "You're in!".green());
                }
            }
            Action::CloseOverlay => session.deselect_event(),
            Action::ToggleList => session.toggle_panel(Panel::List)?,
            Action::ToggleProfile => session.toggle_panel(Panel::Profile)?,
            Action::EditProfile => edit_profile(session)?,
            Action::CreateEvent => create_event(session)?,
            Action::Logout => {
                session.logout();
                return Ok(false);
            }
            Action::Quit => return Ok(true),
        }
    }
}

/// Redraw the whole screen from the current session state: map, open
/// panel, selected-event overlay.
fn draw_screen(session: &Session, config: &SpotupConfig) {
    let selected_id = session.selected().map(|e| e.id.to_string());

    println!();
    println!(
        "{}",
        render::map_grid(&session.markers(), selected_id.as_deref(), config)
    );

    match session.panel() {
        Panel::List => {
            println!();
            println!("{}", "Nearby Events".bold());
            println!(
                "{}",
                format!("{} events around you", session.events().len()).dimmed()
            );
            let viewer = &session.current_user().id;
            for event in session.events() {
                println!();
                println!("{}", render::event_card(event, viewer));
            }
        }
        Panel::Profile => {
            println!();
            println!("{}", "Profile".bold());
            println!("{}", render::profile_card(session.current_user()));
        }
        Panel::None => {}
    }

    if let Some(event) = session.selected() {
        println!();
        println!("{}", "Selected".bold().underline());
        println!("{}", render::event_card(event, &session.current_user().id));
    }
    println!();
}

/// Pick an event from the list and open its overlay.
fn open_event(session: &mut Session) -> Result<()> {
    if session.events().is_empty() {
        println!("  {}", "No events yet".dimmed());
        return Ok(());
    }

    let viewer = session.current_user().id.clone();
    let lines: Vec<String> = session
        .events()
        .iter()
        .map(|e| render::event_line(e, &viewer))
        .collect();
    let choice = Select::new()
        .with_prompt("  Which event?")
        .items(&lines)
        .default(0)
        .interact()?;

    let id = session.events()[choice].id.clone();
    session.select_event(&id)?;
    Ok(())
}

/// The create-event form. Title and address are required (the prompt
/// re-asks on empty input); everything else may be left blank.
fn create_event(session: &mut Session) -> Result<()> {
    println!();
    println!("{}", "  Create an Event".bold());

    let title: String = Input::new().with_prompt("  Title").interact_text()?;
    let description: String = Input::new()
        .with_prompt("  What's the plan? (skip)")
        .allow_empty(true)
        .interact_text()?;

    let category_labels: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} {}", c.glyph(), c.label()))
        .collect();
    let category_idx = Select::new()
        .with_prompt("  Category")
        .items(&category_labels)
        .default(0)
        .interact()?;

    let address: String = Input::new()
        .with_prompt("  Where? (address or venue)")
        .interact_text()?;
    let date: String = Input::new()
        .with_prompt("  Date")
        .default(Local::now().format("%Y-%m-%d").to_string())
        .interact_text()?;
    let time: String = Input::new()
        .with_prompt("  Time (skip)")
        .allow_empty(true)
        .interact_text()?;
    let price: String = Input::new()
        .with_prompt("  Price (skip)")
        .allow_empty(true)
        .interact_text()?;
    let max_attendees: String = Input::new()
        .with_prompt("  Max attendees")
        .default("6".to_string())
        .interact_text()?;

    let draft = EventDraft {
        title,
        description,
        category: Category::ALL[category_idx],
        address,
        date,
        time,
        price,
        max_attendees,
        image_url: None,
    };

    match session.create_event(draft) {
        Ok(event) => println!("  {}", format!("Posted: {}", event.title).green()),
        Err(e) => println!("  {}", e.to_string().red()),
    }
    Ok(())
}

/// Profile editor: field edits plus the hobby add/remove loop.
fn edit_profile(session: &mut Session) -> Result<()> {
    let mut form = session.current_user().clone();

    form.name = Input::new()
        .with_prompt("  Name")
        .default(form.name)
        .interact_text()?;
    form.bio = Input::new()
        .with_prompt("  Bio")
        .default(form.bio)
        .interact_text()?;

    let age_idx = AGE_RANGES
        .iter()
        .position(|r| *r == form.age_range)
        .unwrap_or(0);
    let age_choice = Select::new()
        .with_prompt("  Age range")
        .items(&AGE_RANGES)
        .default(age_idx)
        .interact()?;
    form.age_range = AGE_RANGES[age_choice].to_string();

    form.occupation = Input::new()
        .with_prompt("  Occupation")
        .default(form.occupation)
        .interact_text()?;

    session.update_profile(form)?;

    // Hobbies
    loop {
        let hobbies = session.current_user().hobbies.clone();
        if !hobbies.is_empty() {
            println!("  {}", hobbies.join(", ").cyan());
        }
        let choice = Select::new()
            .with_prompt("  Hobbies")
            .items(&["Add a hobby", "Remove a hobby", "Done"])
            .default(2)
            .interact()?;

        match choice {
            0 => {
                // Suggestions the user doesn't already have
                let options: Vec<&str> = HOBBY_OPTIONS
                    .iter()
                    .copied()
                    .filter(|option| !hobbies.iter().any(|h| h == option))
                    .collect();
                if options.is_empty() {
                    println!("  {}", "You have them all".dimmed());
                    continue;
                }
                let pick = Select::new()
                    .with_prompt("  Add a hobby")
                    .items(&options)
                    .default(0)
                    .interact()?;
                session.add_hobby(options[pick])?;
            }
            1 => {
                if hobbies.is_empty() {
                    println!("  {}", "No hobbies yet".dimmed());
                    continue;
                }
                let pick = Select::new()
                    .with_prompt("  Remove a hobby")
                    .items(&hobbies)
                    .default(0)
                    .interact()?;
                session.remove_hobby(&hobbies[pick])?;
            }
            _ => break,
        }
    }

    println!("  {}", "Profile saved".green());
    Ok(())
}
