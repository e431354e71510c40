//! Organization endpoints

use crate::api::client::ApiClient;
use crate::api::Ack;
use crate::models::{Organization, OrganizationData};
use crate::utils::errors::Result;

/// `GET /organizations`
pub async fn list(client: &ApiClient) -> Result<Vec<Organization>> {
    client.get("/organizations").await
}

/// `GET /organizations/:id`
pub async fn get(client: &ApiClient, organization_id: &str) -> Result<Organization> {
    client.get(&format!("/organizations/{organization_id}")).await
}

/// `PUT /organizations/:id`
pub async fn update(
    client: &ApiClient,
    organization_id: &str,
    data: &OrganizationData,
) -> Result<Organization> {
    client
        .put(&format!("/organizations/{organization_id}"), data)
        .await
}

/// `DELETE /organizations/:id`
pub async fn delete(client: &ApiClient, organization_id: &str) -> Result<Ack> {
    client
        .delete(&format!("/organizations/{organization_id}"))
        .await
}
