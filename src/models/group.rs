//! Group model

use serde::{Deserialize, Serialize};

/// Course/interest group document
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub group_id: Option<String>,
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub department: Option<String>,
    pub common_core: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub joined_users: Vec<String>,
}

impl Group {
    /// Whether the given identifier names this group, matching either
    /// identifier field.
    pub fn has_id(&self, identifier: &str) -> bool {
        self.id == identifier || self.group_id.as_deref() == Some(identifier)
    }
}

/// Payload for `POST /groups`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupData {
    pub group_id: Option<String>,
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub department: Option<String>,
    pub common_core: Option<String>,
    pub description: Option<String>,
}
