//! In-memory state model for SpotUp, a map-based event discovery demo.
//!
//! This crate provides the shared state used by the spotup front end:
//! - `event` and `profile` for the domain types
//! - `store` for the ordered event collection and its mutations
//! - `map` for deriving marker descriptors from the event list
//! - `session` for the screen state machine composing the stores
//! - `seed` for the fixed demo data loaded at startup
//!
//! Everything here is synchronous and in-memory: there is no persistence,
//! no network, and exactly one actor mutating state at a time.

pub mod error;
pub mod event;
pub mod map;
pub mod profile;
pub mod seed;
pub mod session;
pub mod store;

// Re-export the main types at crate root for convenience
pub use error::{SpotUpError, SpotUpResult};
pub use event::{Category, EventDraft, Location, MapEvent};
pub use map::{Marker, MarkerStyle, markers};
pub use profile::{ProfileStore, UserProfile};
pub use session::{Panel, Screen, Session};
pub use store::EventStore;
