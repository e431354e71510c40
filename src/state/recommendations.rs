//! Event recommendations store and client-side filtering
//!
//! Recommendations are advisory: a 404 from the backend means "nothing
//! to recommend" and is not surfaced to the user. The filter below is the
//! pure predicate set behind the discovery screen's narrowing controls.

use tokio::sync::RwLock;
use tracing::debug;

use crate::api::{self, ApiClient};
use crate::models::Event;
use crate::state::alerts::AlertSink;
use crate::utils::errors::Result;

/// Backend message that accompanies an empty recommendation set for
/// users with no registrations; not worth an alert.
const NO_HISTORY_MESSAGE: &str = "No registered events to base recommendations on.";

/// Client-side narrowing predicates. All present predicates must match.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Case-insensitive substring over title, summary and description
    pub query: Option<String>,
    /// Exact event type (`University Event`, `External Event`, ...)
    pub event_type: Option<String>,
    /// Case-insensitive substring over the populated organization name
    pub organization: Option<String>,
}

/// Narrow an in-memory event list by the given filter
pub fn filter_events(events: &[Event], filter: &EventFilter) -> Vec<Event> {
    events
        .iter()
        .filter(|event| matches_filter(event, filter))
        .cloned()
        .collect()
}

fn matches_filter(event: &Event, filter: &EventFilter) -> bool {
    if let Some(query) = &filter.query {
        let needle = query.to_lowercase();
        let haystacks = [
            event.title.as_deref(),
            event.name.as_deref(),
            event.summary.as_deref(),
            event.description.as_deref(),
        ];
        if !haystacks
            .iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(&needle))
        {
            return false;
        }
    }
    if let Some(event_type) = &filter.event_type {
        if event.event_type.as_deref() != Some(event_type.as_str()) {
            return false;
        }
    }
    if let Some(organization) = &filter.organization {
        let needle = organization.to_lowercase();
        let name = event
            .organization
            .as_ref()
            .and_then(|reference| reference.name());
        if !name.is_some_and(|name| name.to_lowercase().contains(&needle)) {
            return false;
        }
    }
    true
}

/// Store for the two recommendation tracks
#[derive(Debug)]
pub struct RecommendationsStore {
    api: ApiClient,
    alerts: AlertSink,
    content_based: RwLock<Vec<Event>>,
    ml_based: RwLock<Vec<Event>>,
}

impl RecommendationsStore {
    pub fn new(api: ApiClient, alerts: AlertSink) -> Self {
        Self {
            api,
            alerts,
            content_based: RwLock::new(Vec::new()),
            ml_based: RwLock::new(Vec::new()),
        }
    }

    pub async fn content_based(&self) -> Vec<Event> {
        self.content_based.read().await.clone()
    }

    pub async fn ml_based(&self) -> Vec<Event> {
        self.ml_based.read().await.clone()
    }

    /// Refresh both recommendation tracks. Requires a session; logged
    /// out means empty sets.
    pub async fn fetch_recommendations(&self) -> Result<()> {
        if self.api.session().token().is_none() {
            self.content_based.write().await.clear();
            self.ml_based.write().await.clear();
            return Ok(());
        }
        match api::events::recommendations(&self.api).await {
            Ok(response) => {
                debug!(
                    content_based = response.content_based.len(),
                    ml_based = response.ml_based.len(),
                    "Fetched recommendations"
                );
                *self.content_based.write().await = response.content_based;
                *self.ml_based.write().await = response.ml_based;
                if let Some(message) = response.message {
                    if message != NO_HISTORY_MESSAGE {
                        self.alerts.emit("Info", &message);
                    }
                }
                Ok(())
            }
            Err(e) => {
                self.alerts.emit("Error", &e.user_message());
                Err(e)
            }
        }
    }
}
