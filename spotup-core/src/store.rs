//! In-memory event store.
//!
//! Owns the ordered event collection for the session, most-recent-first.
//! Every mutation either fully applies or returns an error with the
//! collection observably unchanged; reads always see the latest complete
//! snapshot (single-threaded, no partial updates).

use crate::error::{SpotUpError, SpotUpResult};
use crate::event::{EventDraft, MapEvent};
use crate::profile::UserProfile;
use crate::seed;

pub struct EventStore {
    events: Vec<MapEvent>,
}

impl EventStore {
    /// An empty store.
    pub fn new() -> Self {
        EventStore { events: Vec::new() }
    }

    /// A store bootstrapped with the fixed demo events.
    pub fn seeded() -> Self {
        EventStore {
            events: seed::events(),
        }
    }

    /// Full ordered sequence, for list rendering and map projection.
    pub fn events(&self) -> &[MapEvent] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&MapEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Create an event from a form draft and prepend it to the collection.
    ///
    /// Blank `title` or `address` is rejected with
    /// [`SpotUpError::EmptyField`]. Returns the stored event.
    pub fn create(&mut self, draft: EventDraft, creator: &UserProfile) -> SpotUpResult<&MapEvent> {
        let event = MapEvent::from_draft(draft, creator)?;
        self.events.insert(0, event);
        Ok(&self.events[0])
    }

    /// Record `user` as an attendee of the event with the given id.
    ///
    /// Errors: [`SpotUpError::EventNotFound`] for an unknown id,
    /// [`SpotUpError::AlreadyJoined`] if the user is already on the list,
    /// [`SpotUpError::CapacityExceeded`] if the event is full. On success
    /// a snapshot of `user` is appended exactly once and the updated event
    /// is returned.
    pub fn join(&mut self, id: &str, user: &UserProfile) -> SpotUpResult<&MapEvent> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| SpotUpError::EventNotFound(id.to_string()))?;

        if event.is_joined(&user.id) {
            return Err(SpotUpError::AlreadyJoined(id.to_string()));
        }
        if event.is_full() {
            return Err(SpotUpError::CapacityExceeded(id.to_string()));
        }

        event.attendees.push(user.clone());
        Ok(event)
    }
}

impl Default for EventStore {
    fn default() -> Self {
        EventStore::new()
    }
}
