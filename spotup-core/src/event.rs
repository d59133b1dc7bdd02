//! Event domain types.
//!
//! An event is a user-created meetup with a time, a place, a price and a
//! capacity. Coordinates are simulated: the address string is kept verbatim
//! and the position is a jittered offset from a fixed reference point, not
//! a geocoding result.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SpotUpError, SpotUpResult};
use crate::profile::UserProfile;

/// Reference point new events are scattered around.
pub const EVENT_CENTER: (f64, f64) = (40.73, -73.99);

/// Maximum offset per axis applied when synthesizing a location, in degrees.
pub const JITTER_DEGREES: f64 = 0.025;

/// Capacity used when the creator leaves max attendees blank or unparseable.
pub const DEFAULT_MAX_ATTENDEES: u32 = 6;

/// Event category (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Activity,
    Nightlife,
    Outdoors,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Activity,
        Category::Nightlife,
        Category::Outdoors,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Activity => "activity",
            Category::Nightlife => "nightlife",
            Category::Outdoors => "outdoors",
        }
    }

    /// Glyph shown on markers and in the category picker.
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Food => "🍜",
            Category::Activity => "⚡",
            Category::Nightlife => "🌙",
            Category::Outdoors => "🌿",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where an event takes place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    /// Human-readable address or venue name, stored as entered.
    pub address: String,
}

impl Location {
    /// Synthesize a location near [`EVENT_CENTER`]: the address is kept
    /// verbatim and the coordinates are jittered within
    /// ±[`JITTER_DEGREES`] per axis.
    pub fn jittered(address: &str) -> Location {
        let mut rng = rand::thread_rng();
        Location {
            lat: EVENT_CENTER.0 + rng.gen_range(-JITTER_DEGREES..JITTER_DEGREES),
            lng: EVENT_CENTER.1 + rng.gen_range(-JITTER_DEGREES..JITTER_DEGREES),
            address: address.to_string(),
        }
    }
}

/// A meetup event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: Location,
    /// Opaque display string; no calendar arithmetic is performed on it.
    pub date: String,
    /// Opaque display string, like `date`.
    pub time: String,
    /// Always carries a currency prefix (see [`normalize_price`]).
    pub price: String,
    /// Snapshot of the creator at creation time.
    pub created_by: UserProfile,
    /// Snapshots of everyone who joined, in join order. Grows only by append.
    pub attendees: Vec<UserProfile>,
    pub max_attendees: u32,
    pub image_url: Option<String>,
}

impl MapEvent {
    /// Build an event from user-entered form fields.
    ///
    /// `title` and `address` must be non-blank; everything else is taken as
    /// entered, with the price normalized and the capacity defaulted on
    /// unparseable input.
    pub fn from_draft(draft: EventDraft, created_by: &UserProfile) -> SpotUpResult<MapEvent> {
        if draft.title.trim().is_empty() {
            return Err(SpotUpError::EmptyField("title"));
        }
        if draft.address.trim().is_empty() {
            return Err(SpotUpError::EmptyField("address"));
        }

        Ok(MapEvent {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            location: Location::jittered(&draft.address),
            date: draft.date,
            time: draft.time,
            price: normalize_price(&draft.price),
            created_by: created_by.clone(),
            attendees: Vec::new(),
            max_attendees: parse_max_attendees(&draft.max_attendees),
            image_url: draft.image_url,
        })
    }

    /// Whether the given user is on the attendee list.
    ///
    /// Join state is per viewer: it is derived from attendee membership,
    /// never stored as a flag on the event itself.
    pub fn is_joined(&self, user_id: &str) -> bool {
        self.attendees.iter().any(|a| a.id == user_id)
    }

    pub fn is_full(&self) -> bool {
        self.attendees.len() as u32 >= self.max_attendees
    }

    /// Remaining capacity ("spots left" in the UI).
    pub fn spots_left(&self) -> u32 {
        self.max_attendees.saturating_sub(self.attendees.len() as u32)
    }
}

/// User-entered fields of the create-event form, before normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub address: String,
    pub date: String,
    pub time: String,
    pub price: String,
    /// Raw text from the capacity field; parsed by [`parse_max_attendees`].
    pub max_attendees: String,
    pub image_url: Option<String>,
}

impl Default for EventDraft {
    /// Initial form state: food category, capacity prefilled with 6.
    fn default() -> Self {
        EventDraft {
            title: String::new(),
            description: String::new(),
            category: Category::Food,
            address: String::new(),
            date: String::new(),
            time: String::new(),
            price: String::new(),
            max_attendees: DEFAULT_MAX_ATTENDEES.to_string(),
            image_url: None,
        }
    }
}

/// Prefix the price with a currency symbol if the user omitted it.
/// Idempotent: an already-prefixed price is returned unchanged.
pub fn normalize_price(input: &str) -> String {
    if input.starts_with('$') {
        input.to_string()
    } else {
        format!("${input}")
    }
}

/// Parse the capacity field, falling back to [`DEFAULT_MAX_ATTENDEES`] on
/// empty, non-numeric or non-positive input.
pub fn parse_max_attendees(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => DEFAULT_MAX_ATTENDEES,
    }
}
