//! User profiles and the profile store.

use serde::{Deserialize, Serialize};

/// Age buckets offered by the profile editor.
pub const AGE_RANGES: [&str; 7] = [
    "18-21", "22-25", "25-30", "28-32", "30-35", "35-40", "40+",
];

/// Hobby suggestions offered by the profile editor.
pub const HOBBY_OPTIONS: [&str; 15] = [
    "hiking",
    "photography",
    "cooking",
    "painting",
    "yoga",
    "travel",
    "cycling",
    "music",
    "wine tasting",
    "surfing",
    "reading",
    "gaming",
    "dancing",
    "running",
    "gardening",
];

/// A user profile.
///
/// Events embed profiles by value (`created_by`, `attendees`): a profile
/// attached to an event is a snapshot from the moment of creation or join,
/// and later edits through [`ProfileStore::update`] never rewrite it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    /// Unique handle, shown as `@username`.
    pub username: String,
    pub avatar: String,
    /// One of [`AGE_RANGES`].
    pub age_range: String,
    pub occupation: String,
    /// No duplicates (case-sensitive exact match), insertion-ordered for
    /// display.
    pub hobbies: Vec<String>,
    pub bio: String,
}

impl UserProfile {
    /// Initials used for the avatar fallback (first letter of each name part).
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Holds the current user's profile for the session.
///
/// There is exactly one profile per session; it is created at account setup
/// (out of scope here) and only ever mutated through explicit edits.
pub struct ProfileStore {
    current: UserProfile,
}

impl ProfileStore {
    pub fn new(profile: UserProfile) -> Self {
        ProfileStore { current: profile }
    }

    pub fn current(&self) -> &UserProfile {
        &self.current
    }

    /// Wholesale replace of the profile. No field-level validation: an empty
    /// name is permitted.
    pub fn update(&mut self, profile: UserProfile) {
        self.current = profile;
    }

    /// Add a hobby if it isn't already present. Blank input and exact
    /// duplicates are ignored. Returns the updated hobby list.
    pub fn add_hobby(&mut self, hobby: &str) -> &[String] {
        if !hobby.is_empty() && !self.current.hobbies.iter().any(|h| h == hobby) {
            self.current.hobbies.push(hobby.to_string());
        }
        &self.current.hobbies
    }

    /// Remove a hobby by exact match. Returns the updated hobby list.
    pub fn remove_hobby(&mut self, hobby: &str) -> &[String] {
        self.current.hobbies.retain(|h| h != hobby);
        &self.current.hobbies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_profile() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            name: "Maya Chen".to_string(),
            username: "maya".to_string(),
            avatar: String::new(),
            age_range: "25-30".to_string(),
            occupation: "Designer".to_string(),
            hobbies: vec!["yoga".to_string()],
            bio: String::new(),
        }
    }

    // --- add_hobby / remove_hobby ---

    #[test]
    fn add_hobby_appends_new() {
        let mut store = ProfileStore::new(make_profile());
        let hobbies = store.add_hobby("cycling");
        assert_eq!(hobbies, ["yoga", "cycling"]);
    }

    #[test]
    fn add_hobby_ignores_duplicate() {
        let mut store = ProfileStore::new(make_profile());
        store.add_hobby("yoga");
        assert_eq!(store.current().hobbies, ["yoga"]);
    }

    #[test]
    fn add_hobby_is_case_sensitive() {
        let mut store = ProfileStore::new(make_profile());
        store.add_hobby("Yoga");
        assert_eq!(store.current().hobbies, ["yoga", "Yoga"]);
    }

    #[test]
    fn add_hobby_ignores_blank() {
        let mut store = ProfileStore::new(make_profile());
        store.add_hobby("");
        assert_eq!(store.current().hobbies, ["yoga"]);
    }

    #[test]
    fn remove_hobby_exact_match() {
        let mut store = ProfileStore::new(make_profile());
        store.add_hobby("cycling");
        let hobbies = store.remove_hobby("yoga");
        assert_eq!(hobbies, ["cycling"]);
    }

    #[test]
    fn remove_hobby_missing_is_noop() {
        let mut store = ProfileStore::new(make_profile());
        store.remove_hobby("surfing");
        assert_eq!(store.current().hobbies, ["yoga"]);
    }

    // --- update ---

    #[test]
    fn update_replaces_wholesale() {
        let mut store = ProfileStore::new(make_profile());
        let mut edited = make_profile();
        edited.name = String::new(); // empty name is allowed
        edited.occupation = "Photographer".to_string();
        store.update(edited.clone());
        assert_eq!(store.current(), &edited);
    }

    // --- initials ---

    #[test]
    fn initials_from_name_parts() {
        let profile = make_profile();
        assert_eq!(profile.initials(), "MC");
    }
}
