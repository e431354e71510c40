//! Auth endpoints
//!
//! Login and signup are unauthenticated calls; `me` and profile updates
//! carry the bearer token.

use crate::api::client::ApiClient;
use crate::models::{
    AuthResponse, LoginRequest, MeResponse, OrganizationSignupRequest, SignupRequest,
    UpdateProfileRequest,
};
use crate::utils::errors::Result;

/// `POST /auth/login`
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<AuthResponse> {
    client
        .post_unauthenticated(
            "/auth/login",
            &LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
}

/// `POST /auth/organization/login`
pub async fn organization_login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<AuthResponse> {
    client
        .post_unauthenticated(
            "/auth/organization/login",
            &LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
}

/// `POST /auth/signup`
pub async fn signup(client: &ApiClient, request: &SignupRequest) -> Result<AuthResponse> {
    client.post_unauthenticated("/auth/signup", request).await
}

/// `POST /auth/organization/signup`
pub async fn organization_signup(
    client: &ApiClient,
    request: &OrganizationSignupRequest,
) -> Result<AuthResponse> {
    client
        .post_unauthenticated("/auth/organization/signup", request)
        .await
}

/// `GET /auth/me` — current user or organization profile
pub async fn me(client: &ApiClient) -> Result<MeResponse> {
    client.get("/auth/me").await
}

/// `PUT /auth/profile`
pub async fn update_profile(
    client: &ApiClient,
    request: &UpdateProfileRequest,
) -> Result<MeResponse> {
    client.put("/auth/profile", request).await
}
