//! Map marker projection.
//!
//! Pure derivation of marker descriptors from the event list. The rendering
//! surface replaces its whole marker set whenever the list changes; event
//! counts are small, so there is no incremental diffing.

use crate::event::{Category, MapEvent};

/// Default viewport center for the rendering surface.
pub const MAP_CENTER: (f64, f64) = (40.7380, -73.9900);

/// Default viewport zoom for tile-based renderers.
pub const DEFAULT_ZOOM: u8 = 13;

/// Marker color used once the viewer has joined the event.
pub const JOINED_COLOR: Rgb = Rgb(0x2d, 0xb8, 0x7a);

/// sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Category {
    /// Base marker color per category.
    pub fn color(&self) -> Rgb {
        match self {
            Category::Food => Rgb(0xee, 0x67, 0x23),
            Category::Activity => Rgb(0x3b, 0x82, 0xf6),
            Category::Nightlife => Rgb(0xa8, 0x55, 0xf7),
            Category::Outdoors => Rgb(0xf5, 0x9e, 0x0b),
        }
    }
}

/// Visual treatment of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: Rgb,
    pub glyph: &'static str,
    /// The viewer has joined this event; renderers add an emphasis
    /// treatment on top of the color override.
    pub joined: bool,
}

impl MarkerStyle {
    /// Fixed lookup: category picks color and glyph; a joined event gets
    /// the success color instead.
    pub fn resolve(category: Category, joined: bool) -> MarkerStyle {
        MarkerStyle {
            color: if joined { JOINED_COLOR } else { category.color() },
            glyph: category.glyph(),
            joined,
        }
    }
}

/// A positioned, styled marker. Selection is routed back through the event
/// id (the click-handler payload).
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub event_id: String,
    pub lat: f64,
    pub lng: f64,
    pub style: MarkerStyle,
}

/// Project the event list into markers for the given viewer.
pub fn markers(events: &[MapEvent], viewer_id: &str) -> Vec<Marker> {
    events
        .iter()
        .map(|event| Marker {
            event_id: event.id.clone(),
            lat: event.location.lat,
            lng: event.location.lng,
            style: MarkerStyle::resolve(event.category, event.is_joined(viewer_id)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventDraft, MapEvent};
    use crate::profile::UserProfile;

    fn make_test_user(id: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: "Test User".to_string(),
            username: "testuser".to_string(),
            avatar: String::new(),
            age_range: "25-30".to_string(),
            occupation: String::new(),
            hobbies: vec![],
            bio: String::new(),
        }
    }

    fn make_event(category: Category) -> MapEvent {
        let draft = EventDraft {
            title: "Test".to_string(),
            address: "Somewhere".to_string(),
            category,
            ..EventDraft::default()
        };
        MapEvent::from_draft(draft, &make_test_user("u-host")).unwrap()
    }

    #[test]
    fn one_marker_per_event_in_order() {
        let events = vec![make_event(Category::Food), make_event(Category::Outdoors)];
        let markers = markers(&events, "u-viewer");
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].event_id, events[0].id);
        assert_eq!(markers[1].event_id, events[1].id);
        assert_eq!(markers[0].lat, events[0].location.lat);
    }

    #[test]
    fn style_follows_category_table() {
        for category in Category::ALL {
            let style = MarkerStyle::resolve(category, false);
            assert_eq!(style.color, category.color());
            assert_eq!(style.glyph, category.glyph());
            assert!(!style.joined);
        }
    }

    #[test]
    fn joined_overrides_color_for_viewer_only() {
        let viewer = make_test_user("u-viewer");
        let mut event = make_event(Category::Nightlife);
        event.attendees.push(viewer.clone());
        let events = vec![event];

        let for_viewer = markers(&events, "u-viewer");
        assert_eq!(for_viewer[0].style.color, JOINED_COLOR);
        assert!(for_viewer[0].style.joined);
        // Glyph still identifies the category.
        assert_eq!(for_viewer[0].style.glyph, Category::Nightlife.glyph());

        let for_stranger = markers(&events, "u-other");
        assert_eq!(for_stranger[0].style.color, Category::Nightlife.color());
        assert!(!for_stranger[0].style.joined);
    }
}
