//! Fixed demo data used to bootstrap the stores at startup.

use chrono::{Duration, Local};

use crate::event::{Category, Location, MapEvent};
use crate::profile::UserProfile;

/// The signed-in demo user.
pub fn current_user() -> UserProfile {
    UserProfile {
        id: "u-maya".to_string(),
        name: "Maya Chen".to_string(),
        username: "mayaexplores".to_string(),
        avatar: "avatars/maya.png".to_string(),
        age_range: "25-30".to_string(),
        occupation: "Product designer".to_string(),
        hobbies: vec![
            "yoga".to_string(),
            "photography".to_string(),
            "cooking".to_string(),
        ],
        bio: "New to the city, collecting favorite corners of it.".to_string(),
    }
}

fn user(id: &str, name: &str, username: &str, age_range: &str, occupation: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        name: name.to_string(),
        username: username.to_string(),
        avatar: format!("avatars/{username}.png"),
        age_range: age_range.to_string(),
        occupation: occupation.to_string(),
        hobbies: vec![],
        bio: String::new(),
    }
}

/// Date label `days` from today, in the form the date field uses.
fn date_in(days: i64) -> String {
    (Local::now() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// The demo events, most-recent-first. Five events across all four
/// categories; "Omakase Night" ships at capacity so the full-event path is
/// visible in the demo.
pub fn events() -> Vec<MapEvent> {
    let sam = user("u-sam", "Sam Ortiz", "samo", "28-32", "Line cook");
    let priya = user("u-priya", "Priya Nair", "priyakicks", "22-25", "Grad student");
    let jonas = user("u-jonas", "Jonas Weiss", "jweiss", "30-35", "Bartender");
    let dani = user("u-dani", "Dani Park", "danipark", "25-30", "Trail guide");

    vec![
        MapEvent {
            id: "evt-ramen-crawl".to_string(),
            title: "Late Night Ramen Crawl".to_string(),
            description: "Three shops, one night. We rank the broth.".to_string(),
            category: Category::Food,
            location: Location::jittered("St. Marks Place"),
            date: date_in(1),
            time: "21:00".to_string(),
            price: "$30".to_string(),
            created_by: sam.clone(),
            attendees: vec![priya.clone()],
            max_attendees: 6,
            image_url: None,
        },
        MapEvent {
            id: "evt-park-run".to_string(),
            title: "Sunrise Loop Run".to_string(),
            description: "Easy 5k around the park, coffee after.".to_string(),
            category: Category::Activity,
            location: Location::jittered("Washington Square Park"),
            date: date_in(2),
            time: "06:30".to_string(),
            price: "$0".to_string(),
            created_by: priya.clone(),
            attendees: vec![dani.clone(), sam.clone()],
            max_attendees: 10,
            image_url: None,
        },
        MapEvent {
            id: "evt-rooftop-jazz".to_string(),
            title: "Rooftop Jazz & Negronis".to_string(),
            description: "Quartet on the roof, golden hour start.".to_string(),
            category: Category::Nightlife,
            location: Location::jittered("Hotel Chantelle Rooftop"),
            date: date_in(3),
            time: "19:30".to_string(),
            price: "$25".to_string(),
            created_by: jonas.clone(),
            attendees: vec![],
            max_attendees: 8,
            image_url: None,
        },
        MapEvent {
            id: "evt-omakase".to_string(),
            title: "Omakase Night".to_string(),
            description: "Counter seats only, ten courses.".to_string(),
            category: Category::Food,
            location: Location::jittered("Sushi Ishikawa"),
            date: date_in(4),
            time: "20:00".to_string(),
            price: "$120".to_string(),
            created_by: jonas.clone(),
            attendees: vec![sam, priya],
            max_attendees: 2,
            image_url: None,
        },
        MapEvent {
            id: "evt-kayak".to_string(),
            title: "Hudson Kayak Morning".to_string(),
            description: "Free loaner boats, beginners welcome.".to_string(),
            category: Category::Outdoors,
            location: Location::jittered("Pier 40 Boathouse"),
            date: date_in(6),
            time: "09:00".to_string(),
            price: "$0".to_string(),
            created_by: dani,
            attendees: vec![],
            max_attendees: 12,
            image_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EVENT_CENTER, JITTER_DEGREES};

    #[test]
    fn seed_ids_are_unique() {
        let events = events();
        let mut ids: Vec<_> = events.iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn seed_covers_all_categories() {
        let events = events();
        for category in Category::ALL {
            assert!(events.iter().any(|e| e.category == category));
        }
    }

    #[test]
    fn seed_positions_are_near_center() {
        for event in events() {
            assert!((event.location.lat - EVENT_CENTER.0).abs() <= JITTER_DEGREES);
            assert!((event.location.lng - EVENT_CENTER.1).abs() <= JITTER_DEGREES);
        }
    }

    #[test]
    fn seed_includes_a_full_event() {
        assert!(events().iter().any(|e| e.is_full()));
    }

    #[test]
    fn seed_attendees_fit_capacity() {
        for event in events() {
            assert!(event.attendees.len() as u32 <= event.max_attendees);
        }
    }

    #[test]
    fn current_user_is_not_attending_anything_yet() {
        let me = current_user();
        for event in events() {
            assert!(!event.is_joined(&me.id));
        }
    }
}
