//! Data models module
//!
//! Typed records for everything crossing the API boundary. Backend
//! documents use camelCase and Mongo-style `_id` fields; absent fields
//! are modeled as `Option` rather than fallback literals.

pub mod auth;
pub mod event;
pub mod group;
pub mod message;
pub mod organization;
pub mod user;

// Re-export commonly used models
pub use auth::{
    AuthResponse, ErrorBody, LoginRequest, MeResponse, OrganizationSignupRequest, SignupRequest,
    UpdateProfileRequest, UserType,
};
pub use event::{Event, EventData, OrganizationRef, RecommendationsResponse, RegistrationData};
pub use group::{Group, GroupData};
pub use message::{ChatMessage, MessageSender};
pub use organization::{Organization, OrganizationData};
pub use user::{EventRef, EventRefEntry, GroupRef, UserProfile};
