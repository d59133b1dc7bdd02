//! Terminal rendering for spotup types.
//!
//! Colored output for events, profiles and markers using owo_colors, plus
//! the character-grid map that stands in for a tile-based rendering
//! surface: it takes the full marker set and the viewport center and
//! redraws from scratch every time.

use owo_colors::OwoColorize;
use spotup_core::event::{Category, MapEvent};
use spotup_core::map::{Marker, Rgb};
use spotup_core::profile::UserProfile;

use crate::config::SpotupConfig;

/// Degrees of latitude covered by the map grid.
const LAT_SPAN: f64 = 0.08;
/// Degrees of longitude covered by the map grid.
const LNG_SPAN: f64 = 0.10;

fn paint(color: Rgb, text: &str) -> String {
    text.truecolor(color.0, color.1, color.2).to_string()
}

/// Colored category badge, e.g. `[food]`.
pub fn category_badge(category: Category) -> String {
    paint(category.color(), &format!("[{category}]"))
}

/// Full event card, the way the list panel and the overlay show it.
pub fn event_card(event: &MapEvent, viewer_id: &str) -> String {
    let mut lines = Vec::new();

    let mut header = format!(
        "{} {} {}",
        category_badge(event.category),
        event.category.glyph(),
        event.title.bold()
    );
    if event.is_joined(viewer_id) {
        header.push_str(&format!("  {}", "✓ Joined".green()));
    } else if event.is_full() {
        header.push_str(&format!("  {}", "full".dimmed()));
    }
    lines.push(header);

    if !event.description.is_empty() {
        lines.push(format!("   {}", event.description));
    }

    lines.push(format!(
        "   {}",
        format!(
            "📍 {}  🕐 {} {}  💰 {}  👥 {} spots left",
            event.location.address,
            event.date,
            event.time,
            event.price,
            event.spots_left()
        )
        .dimmed()
    ));

    lines.push(format!(
        "   {}",
        format!("Hosted by {}", event.created_by.name).dimmed()
    ));

    lines.join("\n")
}

/// One-line event summary for pick lists.
pub fn event_line(event: &MapEvent, viewer_id: &str) -> String {
    let joined = if event.is_joined(viewer_id) { " ✓" } else { "" };
    format!(
        "{} {} · {} {} · {} spots left{}",
        event.category.glyph(),
        event.title,
        event.date,
        event.time,
        event.spots_left(),
        joined
    )
}

/// Profile panel contents.
pub fn profile_card(user: &UserProfile) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "({})  {}  {}",
        user.initials(),
        user.name.bold(),
        format!("@{}", user.username).dimmed()
    ));
    if !user.bio.is_empty() {
        lines.push(format!("   {}", user.bio));
    }
    lines.push(format!(
        "   {}",
        format!("{} · {}", user.age_range, user.occupation).dimmed()
    ));
    if !user.hobbies.is_empty() {
        let badges: Vec<String> = user
            .hobbies
            .iter()
            .map(|h| format!("[{}]", h).cyan().to_string())
            .collect();
        lines.push(format!("   {}", badges.join(" ")));
    }

    lines.join("\n")
}

/// Draw the marker set onto a character grid around the viewport center.
///
/// Markers are plotted as colored dots (joined events get the success color
/// and bold emphasis, the selected event is ringed); markers outside the
/// viewport are dropped, matching what a panning map would show.
pub fn map_grid(markers: &[Marker], selected: Option<&str>, config: &SpotupConfig) -> String {
    let width = config.map_width.max(16);
    let height = config.map_height.max(8);
    let (center_lat, center_lng) = config.center();

    let lat_max = center_lat + LAT_SPAN / 2.0;
    let lng_min = center_lng - LNG_SPAN / 2.0;

    // Last marker wins a contested cell.
    let mut cells: Vec<Vec<Option<&Marker>>> = vec![vec![None; width]; height];
    for marker in markers {
        let row = ((lat_max - marker.lat) / LAT_SPAN * (height - 1) as f64).round();
        let col = ((marker.lng - lng_min) / LNG_SPAN * (width - 1) as f64).round();
        if row < 0.0 || col < 0.0 {
            continue;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= height || col >= width {
            continue;
        }
        cells[row][col] = Some(marker);
    }

    let mut out = String::new();
    out.push('┌');
    out.push_str(&"─".repeat(width));
    out.push_str("┐\n");

    for row in &cells {
        out.push('│');
        for cell in row {
            match cell {
                Some(marker) => {
                    let is_selected = selected == Some(marker.event_id.as_str());
                    let dot = if is_selected { "◉" } else { "●" };
                    let painted = paint(marker.style.color, dot);
                    if marker.style.joined || is_selected {
                        out.push_str(&painted.bold().to_string());
                    } else {
                        out.push_str(&painted);
                    }
                }
                None => out.push_str(&"·".dimmed().to_string()),
            }
        }
        out.push_str("│\n");
    }

    out.push('└');
    out.push_str(&"─".repeat(width));
    out.push_str("┘\n");

    // Legend
    let legend: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} {}", paint(c.color(), "●"), c.label()))
        .collect();
    out.push_str(&format!(
        "{}   {} joined   {} selected",
        legend.join("  "),
        "●".green().bold(),
        "◉".bold()
    ));

    out
}
