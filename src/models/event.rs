//! Event model

use serde::{Deserialize, Serialize};

use crate::models::organization::Organization;

/// Event document owned by the backend; the client holds read-only
/// cached copies keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub event_id: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// `DD-MM-YYYY` text, compared at calendar-day granularity
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i64>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub subtype: Option<String>,
    #[serde(default)]
    pub registered_users: Vec<String>,
    pub organization: Option<OrganizationRef>,
}

impl Event {
    /// Whether the given identifier names this event, tolerating the
    /// id-shape inconsistency between mobile and admin data paths.
    pub fn has_id(&self, identifier: &str) -> bool {
        self.id == identifier || self.event_id.as_deref() == Some(identifier)
    }

    /// Display title, falling back to the legacy `name` field
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("Untitled event")
    }
}

/// Organization field on an event: a bare object id, or the populated
/// organization document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrganizationRef {
    Id(String),
    Full(Box<Organization>),
}

impl OrganizationRef {
    /// Organization display name when the reference is populated
    pub fn name(&self) -> Option<&str> {
        match self {
            OrganizationRef::Id(_) => None,
            OrganizationRef::Full(org) => Some(org.name.as_str()),
        }
    }
}

/// Payload for `POST /events/:id/register`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub remarks: Option<String>,
}

/// Payload for event creation and updates
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i64>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub subtype: Option<String>,
}

/// Response of `GET /events/recommendations`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub content_based: Vec<Event>,
    #[serde(default)]
    pub ml_based: Vec<Event>,
    pub message: Option<String>,
}
