//! Organization model

use serde::{Deserialize, Serialize};

/// Organization profile, used both for event listings and as the
/// authenticated identity of an organization account.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub organization_id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub organization_type: Option<String>,
    pub subtype: Option<String>,
}

/// Payload for organization profile updates
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub organization_type: Option<String>,
    pub subtype: Option<String>,
}
