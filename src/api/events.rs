//! Event endpoints

use crate::api::client::ApiClient;
use crate::api::Ack;
use crate::models::{Event, EventData, RecommendationsResponse, RegistrationData};
use crate::utils::errors::{CampusHubError, Result};

/// `GET /events`
pub async fn list(client: &ApiClient) -> Result<Vec<Event>> {
    client.get("/events").await
}

/// `GET /events/organization` — events owned by the authenticated
/// organization
pub async fn organization_events(client: &ApiClient) -> Result<Vec<Event>> {
    client.get("/events/organization").await
}

/// `GET /events/:id`
pub async fn get(client: &ApiClient, event_id: &str) -> Result<Event> {
    client.get(&format!("/events/{event_id}")).await
}

/// `POST /events`
pub async fn create(client: &ApiClient, data: &EventData) -> Result<Event> {
    client.post("/events", data).await
}

/// `PUT /events/:id`
pub async fn update(client: &ApiClient, event_id: &str, data: &EventData) -> Result<Event> {
    client.put(&format!("/events/{event_id}"), data).await
}

/// `DELETE /events/:id`
pub async fn delete(client: &ApiClient, event_id: &str) -> Result<Ack> {
    client.delete(&format!("/events/{event_id}")).await
}

/// `POST /events/:id/register`
pub async fn register(client: &ApiClient, event_id: &str, data: &RegistrationData) -> Result<Ack> {
    client.post(&format!("/events/{event_id}/register"), data).await
}

/// `POST /events/:id/withdraw`
pub async fn withdraw(client: &ApiClient, event_id: &str) -> Result<Ack> {
    client.post_empty(&format!("/events/{event_id}/withdraw")).await
}

/// `GET /events/recommendations`. A 404 means "no recommendations", not
/// a failure.
pub async fn recommendations(client: &ApiClient) -> Result<RecommendationsResponse> {
    match client.get("/events/recommendations").await {
        Ok(response) => Ok(response),
        Err(CampusHubError::Api { status: 404, .. }) => Ok(RecommendationsResponse::default()),
        Err(e) => Err(e),
    }
}
