//! User profile model

use serde::{Deserialize, Serialize};

use crate::models::event::Event;
use crate::models::group::Group;

/// Authenticated user profile as returned by `/auth/login` and `/auth/me`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Internal backend identifier. Login responses use `id`, populated
    /// documents use `_id`.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_pic: Option<String>,
    pub university: Option<String>,
    pub university_year: Option<String>,
    pub degree: Option<String>,
    pub degree_classification: Option<String>,
    pub faculty: Option<String>,
    pub department: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub registered_events: Vec<EventRef>,
    #[serde(default)]
    pub joined_groups: Vec<GroupRef>,
}

/// A registration reference from a user profile.
///
/// The backend is inconsistent here: depending on the data path this is a
/// bare object id string, or a partial/populated event document carrying
/// `_id` and/or the public `eventId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventRef {
    Id(String),
    Entry(EventRefEntry),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventRefEntry {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub event_id: Option<String>,
}

impl EventRef {
    /// Whether this reference resolves to the given cached event,
    /// matching on either identifier field.
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            EventRef::Id(id) => event.id == *id,
            EventRef::Entry(entry) => {
                entry.id.as_deref().is_some_and(|id| event.id == id)
                    || entry
                        .event_id
                        .as_deref()
                        .is_some_and(|public| event.event_id.as_deref() == Some(public))
            }
        }
    }
}

/// A group membership reference from a user profile: a bare id or a
/// populated group document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupRef {
    Id(String),
    Full(Group),
}

impl GroupRef {
    pub fn matches(&self, group: &Group) -> bool {
        match self {
            GroupRef::Id(id) => group.id == *id,
            GroupRef::Full(full) => {
                full.id == group.id
                    || full
                        .group_id
                        .as_deref()
                        .is_some_and(|public| group.group_id.as_deref() == Some(public))
            }
        }
    }
}
