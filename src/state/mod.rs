//! State management module
//!
//! Owning stores for every piece of shared client state: session,
//! event registrations, group memberships and recommendations, plus the
//! alert sink and the application context that wires them together.

pub mod alerts;
pub mod context;
pub mod groups;
pub mod recommendations;
pub mod registrations;
pub mod session;

pub use alerts::{Alert, AlertSink};
pub use context::AppContext;
pub use groups::{derive_joined, GroupsStore};
pub use recommendations::{filter_events, EventFilter, RecommendationsStore};
pub use registrations::{derive_registered, RegisteredEventsStore};
pub use session::{
    PersistedSession, Session, SessionHandle, SessionStorage, SessionStore, SessionUpdate,
};
