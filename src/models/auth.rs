//! Authentication request/response payloads

use serde::{Deserialize, Serialize};

use crate::models::organization::Organization;
use crate::models::user::UserProfile;

/// Which kind of account is signed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    User,
    Organization,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::User => write!(f, "user"),
            UserType::Organization => write!(f, "organization"),
        }
    }
}

/// Response of the login and signup endpoints. User endpoints return a
/// `user` field, organization endpoints an `organization` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Option<UserProfile>,
    pub organization: Option<Organization>,
}

/// Response of `GET /auth/me`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MeResponse {
    pub user: Option<UserProfile>,
    pub organization: Option<Organization>,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User signup payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub university: Option<String>,
    pub university_year: Option<String>,
    pub degree: Option<String>,
    pub degree_classification: Option<String>,
    pub faculty: Option<String>,
    pub department: Option<String>,
}

/// Organization signup payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationSignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub organization_type: Option<String>,
    pub subtype: Option<String>,
}

/// Partial profile update payload for `PUT /auth/profile`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_pic: Option<String>,
    pub bio: Option<String>,
    pub university: Option<String>,
    pub university_year: Option<String>,
    pub degree: Option<String>,
    pub faculty: Option<String>,
    pub department: Option<String>,
}

/// Error body shape used by every backend failure response
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
