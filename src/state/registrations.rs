//! Registered-events store
//!
//! Keeps an eventually-consistent view of "events relevant to me" and
//! "events I've joined". The backend owns the registration relationship;
//! after every mutation the local view is re-derived from a fresh
//! `/auth/me` fetch rather than patched in place. That reconciliation
//! step, not the mutation itself, is what guarantees convergence.

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::api::{self, ApiClient};
use crate::models::{Event, EventData, EventRef, RegistrationData};
use crate::state::alerts::AlertSink;
use crate::utils::dates::{listing_is_upcoming, registration_is_upcoming};
use crate::utils::errors::Result;
use crate::utils::logging::log_registration_action;

/// Pure synchronization contract: resolve the profile's registration
/// references against the cached event list (matching on either
/// identifier field), drop anything unresolvable, keep non-past events.
/// A resolved event without a date is kept.
pub fn derive_registered(refs: &[EventRef], events: &[Event]) -> Vec<Event> {
    refs.iter()
        .filter_map(|reference| events.iter().find(|event| reference.matches(event)))
        .filter(|event| registration_is_upcoming(event.date.as_deref()))
        .cloned()
        .collect()
}

/// Store for the event list and the authenticated user's registrations
#[derive(Debug)]
pub struct RegisteredEventsStore {
    api: ApiClient,
    alerts: AlertSink,
    events: RwLock<Vec<Event>>,
    registered: RwLock<Vec<Event>>,
}

impl RegisteredEventsStore {
    pub fn new(api: ApiClient, alerts: AlertSink) -> Self {
        Self {
            api,
            alerts,
            events: RwLock::new(Vec::new()),
            registered: RwLock::new(Vec::new()),
        }
    }

    /// Cached upcoming events
    pub async fn events(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }

    /// Cached registrations, post-reconciliation
    pub async fn registered_events(&self) -> Vec<Event> {
        self.registered.read().await.clone()
    }

    /// Load all events, keeping only those on or after today's calendar
    /// day.
    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        match api::events::list(&self.api).await {
            Ok(all) => {
                let upcoming: Vec<Event> = all
                    .into_iter()
                    .filter(|event| listing_is_upcoming(event.date.as_deref()))
                    .collect();
                debug!(count = upcoming.len(), "Fetched upcoming events");
                *self.events.write().await = upcoming.clone();
                Ok(upcoming)
            }
            Err(e) => {
                self.alerts.emit("Error", &e.user_message());
                Err(e)
            }
        }
    }

    /// Re-derive the registration list from a fresh profile fetch.
    ///
    /// No token, or a profile with no resolvable registrations, yields
    /// an empty list — never an error.
    pub async fn fetch_registered_events(&self) -> Result<Vec<Event>> {
        if self.api.session().token().is_none() {
            self.registered.write().await.clear();
            return Ok(Vec::new());
        }
        match api::auth::me(&self.api).await {
            Ok(me) => {
                let refs = me
                    .user
                    .map(|user| user.registered_events)
                    .unwrap_or_default();
                let derived = {
                    let events = self.events.read().await;
                    derive_registered(&refs, &events)
                };
                *self.registered.write().await = derived.clone();
                Ok(derived)
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch registered events");
                self.registered.write().await.clear();
                Err(e)
            }
        }
    }

    /// Register for an event, then reconcile. Returns whether the
    /// registration succeeded; failures alert instead of propagating.
    pub async fn register_event(&self, event_id: &str, data: &RegistrationData) -> bool {
        match api::events::register(&self.api, event_id, data).await {
            Ok(_) => {
                let _ = self.fetch_registered_events().await;
                log_registration_action(event_id, "register", true);
                true
            }
            Err(e) => {
                log_registration_action(event_id, "register", false);
                self.alerts.emit("Registration Failed", &e.user_message());
                false
            }
        }
    }

    /// Withdraw from an event, then reconcile. Withdrawing from an event
    /// the user never registered for converges on the same final state.
    pub async fn withdraw_event(&self, event_id: &str) -> bool {
        match api::events::withdraw(&self.api, event_id).await {
            Ok(_) => {
                let _ = self.fetch_registered_events().await;
                log_registration_action(event_id, "withdraw", true);
                true
            }
            Err(e) => {
                log_registration_action(event_id, "withdraw", false);
                self.alerts.emit("Withdrawal Failed", &e.user_message());
                false
            }
        }
    }

    /// Membership predicate over the cached registration list, matching
    /// on either identifier field to tolerate id-shape inconsistency.
    pub async fn is_registered(&self, event_id: &str) -> bool {
        self.registered
            .read()
            .await
            .iter()
            .any(|event| event.has_id(event_id))
    }

    /// Create a new event (organization accounts), then refresh the
    /// listing.
    pub async fn add_event(&self, data: &EventData) -> bool {
        match api::events::create(&self.api, data).await {
            Ok(_) => {
                let _ = self.fetch_events().await;
                self.alerts.emit("Success", "Event added successfully.");
                true
            }
            Err(e) => {
                self.alerts.emit("Add Event Failed", &e.user_message());
                false
            }
        }
    }
}
