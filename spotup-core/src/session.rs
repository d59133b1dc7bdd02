//! Session state: the screen machine composed with the stores.
//!
//! The session owns the event store and the profile store and routes user
//! actions to them. Screen state (which panel is open, which event is
//! selected) is independent of store content, with one exception: the
//! selected-event overlay holds a snapshot of its event, and this module is
//! responsible for keeping that snapshot consistent with the store after
//! joins. The stores never know about the overlay.

use crate::error::{SpotUpError, SpotUpResult};
use crate::event::{EventDraft, MapEvent};
use crate::map::{self, Marker};
use crate::profile::{ProfileStore, UserProfile};
use crate::seed;
use crate::store::EventStore;

/// Side panel shown next to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    None,
    List,
    Profile,
}

/// Screen mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    LoggedOut,
    LoggedIn {
        panel: Panel,
        /// Snapshot of the event shown in the overlay, if any.
        selected: Option<MapEvent>,
    },
}

pub struct Session {
    events: EventStore,
    profile: ProfileStore,
    screen: Screen,
}

impl Session {
    /// A logged-out session over the given stores.
    pub fn new(events: EventStore, profile: UserProfile) -> Self {
        Session {
            events,
            profile: ProfileStore::new(profile),
            screen: Screen::LoggedOut,
        }
    }

    /// A logged-out session over the fixed demo seed.
    pub fn seeded() -> Self {
        Session::new(EventStore::seeded(), seed::current_user())
    }

    // READS:

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.screen, Screen::LoggedIn { .. })
    }

    /// Open panel, `Panel::None` while logged out.
    pub fn panel(&self) -> Panel {
        match &self.screen {
            Screen::LoggedIn { panel, .. } => *panel,
            Screen::LoggedOut => Panel::None,
        }
    }

    /// The overlay snapshot, if an event is selected.
    pub fn selected(&self) -> Option<&MapEvent> {
        match &self.screen {
            Screen::LoggedIn { selected, .. } => selected.as_ref(),
            Screen::LoggedOut => None,
        }
    }

    pub fn events(&self) -> &[MapEvent] {
        self.events.events()
    }

    pub fn current_user(&self) -> &UserProfile {
        self.profile.current()
    }

    /// Markers for the current viewer, recomputed from the latest events.
    pub fn markers(&self) -> Vec<Marker> {
        map::markers(self.events.events(), &self.profile.current().id)
    }

    // SCREEN TRANSITIONS:

    /// Sign in. Credentials are accepted upstream without checks; the
    /// session only flips state. Always lands on the list panel with no
    /// selection.
    pub fn login(&mut self) {
        self.screen = Screen::LoggedIn {
            panel: Panel::List,
            selected: None,
        };
    }

    /// Sign out. Store contents are retained for the process lifetime; only
    /// the screen state resets.
    pub fn logout(&mut self) {
        self.screen = Screen::LoggedOut;
    }

    /// Toggle a side panel. Panels are mutually exclusive: toggling the open
    /// panel closes it, opening one closes the other.
    pub fn toggle_panel(&mut self, panel: Panel) -> SpotUpResult<()> {
        let Screen::LoggedIn { panel: current, .. } = &mut self.screen else {
            return Err(SpotUpError::NotSignedIn);
        };
        *current = if *current == panel { Panel::None } else { panel };
        Ok(())
    }

    /// Open the overlay for the event with the given id (marker or list
    /// click). The overlay holds a snapshot taken now.
    pub fn select_event(&mut self, id: &str) -> SpotUpResult<()> {
        let Screen::LoggedIn { selected, .. } = &mut self.screen else {
            return Err(SpotUpError::NotSignedIn);
        };
        let event = self
            .events
            .get(id)
            .ok_or_else(|| SpotUpError::EventNotFound(id.to_string()))?
            .clone();
        *selected = Some(event);
        Ok(())
    }

    /// Close the overlay.
    pub fn deselect_event(&mut self) {
        if let Screen::LoggedIn { selected, .. } = &mut self.screen {
            *selected = None;
        }
    }

    // STORE MUTATIONS:

    /// Join the selected event as the current user.
    pub fn join_selected(&mut self) -> SpotUpResult<()> {
        let id = match &self.screen {
            Screen::LoggedIn {
                selected: Some(event),
                ..
            } => event.id.clone(),
            Screen::LoggedIn { selected: None, .. } => {
                return Err(SpotUpError::NothingSelected);
            }
            Screen::LoggedOut => return Err(SpotUpError::NotSignedIn),
        };
        self.join_event(&id)
    }

    /// Join an event by id as the current user (the list-panel path).
    ///
    /// If the overlay currently shows the same event, its snapshot is
    /// refreshed so both copies agree.
    pub fn join_event(&mut self, id: &str) -> SpotUpResult<()> {
        if !self.is_logged_in() {
            return Err(SpotUpError::NotSignedIn);
        }
        let user = self.profile.current().clone();
        let updated = self.events.join(id, &user)?.clone();

        if let Screen::LoggedIn {
            selected: Some(selected),
            ..
        } = &mut self.screen
        {
            if selected.id == updated.id {
                *selected = updated;
            }
        }
        Ok(())
    }

    /// Create an event with the current user as creator.
    pub fn create_event(&mut self, draft: EventDraft) -> SpotUpResult<&MapEvent> {
        if !self.is_logged_in() {
            return Err(SpotUpError::NotSignedIn);
        }
        let creator = self.profile.current().clone();
        self.events.create(draft, &creator)
    }

    /// Replace the current user's profile (profile-edit submission).
    pub fn update_profile(&mut self, profile: UserProfile) -> SpotUpResult<()> {
        if !self.is_logged_in() {
            return Err(SpotUpError::NotSignedIn);
        }
        self.profile.update(profile);
        Ok(())
    }

    pub fn add_hobby(&mut self, hobby: &str) -> SpotUpResult<&[String]> {
        if !self.is_logged_in() {
            return Err(SpotUpError::NotSignedIn);
        }
        Ok(self.profile.add_hobby(hobby))
    }

    pub fn remove_hobby(&mut self, hobby: &str) -> SpotUpResult<&[String]> {
        if !self.is_logged_in() {
            return Err(SpotUpError::NotSignedIn);
        }
        Ok(self.profile.remove_hobby(hobby))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Category;
    use crate::map::JOINED_COLOR;

    fn make_test_user(id: &str, name: &str) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            name: name.to_string(),
            username: name.to_lowercase().replace(' ', ""),
            avatar: String::new(),
            age_range: "25-30".to_string(),
            occupation: "Tester".to_string(),
            hobbies: vec![],
            bio: String::new(),
        }
    }

    fn make_draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            address: "La Esquina".to_string(),
            category: Category::Food,
            ..EventDraft::default()
        }
    }

    fn logged_in_session() -> Session {
        let mut session = Session::new(EventStore::new(), make_test_user("u-1", "Maya Chen"));
        session.login();
        session
    }

    // --- login / logout ---

    #[test]
    fn login_opens_list_panel_with_no_selection() {
        let mut session = Session::new(EventStore::new(), make_test_user("u-1", "Maya Chen"));
        assert!(!session.is_logged_in());
        session.login();
        assert_eq!(session.panel(), Panel::List);
        assert!(session.selected().is_none());
    }

    #[test]
    fn logout_retains_store_contents() {
        let mut session = logged_in_session();
        session.create_event(make_draft("Picnic")).unwrap();
        session.logout();
        assert!(!session.is_logged_in());
        assert_eq!(session.events().len(), 1);

        // Logging back in resets the screen, not the data.
        session.login();
        assert_eq!(session.panel(), Panel::List);
        assert_eq!(session.events().len(), 1);
    }

    #[test]
    fn mutations_require_login() {
        let mut session = Session::new(EventStore::new(), make_test_user("u-1", "Maya Chen"));
        assert_eq!(
            session.create_event(make_draft("Picnic")).unwrap_err(),
            SpotUpError::NotSignedIn
        );
        assert_eq!(
            session.toggle_panel(Panel::Profile).unwrap_err(),
            SpotUpError::NotSignedIn
        );
        assert_eq!(
            session.join_event("any").unwrap_err(),
            SpotUpError::NotSignedIn
        );
    }

    // --- toggle_panel ---

    #[test]
    fn panels_are_mutually_exclusive() {
        let mut session = logged_in_session();

        session.toggle_panel(Panel::Profile).unwrap();
        assert_eq!(session.panel(), Panel::Profile);

        session.toggle_panel(Panel::List).unwrap();
        assert_eq!(session.panel(), Panel::List);

        // Toggling the open panel closes it.
        session.toggle_panel(Panel::List).unwrap();
        assert_eq!(session.panel(), Panel::None);
    }

    // --- select / join ---

    #[test]
    fn select_unknown_event_errors() {
        let mut session = logged_in_session();
        assert_eq!(
            session.select_event("no-such-id").unwrap_err(),
            SpotUpError::EventNotFound("no-such-id".to_string())
        );
    }

    #[test]
    fn join_from_overlay_refreshes_snapshot() {
        let mut session = logged_in_session();
        let id = session.create_event(make_draft("Picnic")).unwrap().id.clone();

        session.select_event(&id).unwrap();
        assert!(!session.selected().unwrap().is_joined("u-1"));

        session.join_selected().unwrap();

        // Overlay snapshot and store copy agree.
        assert!(session.selected().unwrap().is_joined("u-1"));
        assert!(session.events()[0].is_joined("u-1"));
    }

    #[test]
    fn join_from_list_refreshes_matching_overlay() {
        let mut session = logged_in_session();
        let id = session.create_event(make_draft("Picnic")).unwrap().id.clone();
        session.select_event(&id).unwrap();

        session.join_event(&id).unwrap();
        assert!(session.selected().unwrap().is_joined("u-1"));
    }

    #[test]
    fn join_with_nothing_selected_errors() {
        let mut session = logged_in_session();
        assert_eq!(
            session.join_selected().unwrap_err(),
            SpotUpError::NothingSelected
        );
    }

    #[test]
    fn deselect_clears_overlay() {
        let mut session = logged_in_session();
        let id = session.create_event(make_draft("Picnic")).unwrap().id.clone();
        session.select_event(&id).unwrap();
        session.deselect_event();
        assert!(session.selected().is_none());
    }

    // --- projection ---

    #[test]
    fn markers_reflect_join_state_of_current_user() {
        let mut session = logged_in_session();
        let id = session.create_event(make_draft("Picnic")).unwrap().id.clone();

        assert!(!session.markers()[0].style.joined);
        session.join_event(&id).unwrap();
        let markers = session.markers();
        assert!(markers[0].style.joined);
        assert_eq!(markers[0].style.color, JOINED_COLOR);
    }

    // --- profile ---

    #[test]
    fn profile_edits_flow_through_session() {
        let mut session = logged_in_session();
        session.add_hobby("yoga").unwrap();
        session.add_hobby("yoga").unwrap();
        assert_eq!(session.current_user().hobbies, ["yoga"]);

        let mut edited = session.current_user().clone();
        edited.occupation = "Photographer".to_string();
        session.update_profile(edited).unwrap();
        assert_eq!(session.current_user().occupation, "Photographer");
    }

    #[test]
    fn profile_edit_does_not_rewrite_attendee_snapshots() {
        let mut session = logged_in_session();
        let id = session.create_event(make_draft("Picnic")).unwrap().id.clone();
        session.join_event(&id).unwrap();

        let mut edited = session.current_user().clone();
        edited.name = "Maya C.".to_string();
        session.update_profile(edited).unwrap();

        assert_eq!(session.events()[0].attendees[0].name, "Maya Chen");
    }
}
