// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the GoBarber backend.
//!
//! Implements [`SessionApi`] with `reqwest`:
//! - `POST {base_url}/sessions` with a JSON `{ email, password }` body,
//!   answered by `{ user, token }`
//! - `GET {base_url}/profile` with a bearer token, answered by the user

use crate::application::port::auth::{AuthError, SessionApi};
use crate::domain::auth::{Credentials, Session, User};
use futures_util::future::BoxFuture;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const USER_AGENT: &str = concat!("GoBarber/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct SessionRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    id: String,
    name: String,
    email: String,
    #[serde(default)]
    avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SessionPayload {
    user: UserPayload,
    token: String,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        User {
            id: payload.id,
            name: payload.name,
            email: payload.email,
            avatar_url: payload.avatar_url,
        }
    }
}

impl From<SessionPayload> for Session {
    fn from(payload: SessionPayload) -> Self {
        Session {
            user: payload.user.into(),
            token: payload.token,
        }
    }
}

/// `reqwest`-backed session client.
#[derive(Debug, Clone)]
pub struct HttpSessionApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSessionApi {
    /// Builds a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AuthError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Reads a JSON body out of a response, mapping failures to [`AuthError`].
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    what: &'static str,
) -> Result<T, AuthError> {
    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%status, what, "request rejected");
        return Err(classify_status(status));
    }

    response
        .json()
        .await
        .map_err(|e| AuthError::UnexpectedResponse(e.to_string()))
}

/// Maps a non-success status to the matching auth failure.
fn classify_status(status: StatusCode) -> AuthError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            AuthError::InvalidCredentials
        }
        other => AuthError::UnexpectedResponse(format!("HTTP status: {other}")),
    }
}

impl SessionApi for HttpSessionApi {
    fn sign_in(&self, credentials: Credentials) -> BoxFuture<'static, Result<Session, AuthError>> {
        let client = self.client.clone();
        let url = self.endpoint("sessions");

        Box::pin(async move {
            let body = SessionRequest {
                email: credentials.email.as_str(),
                password: &credentials.password,
            };

            let response = client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;

            let payload: SessionPayload = read_json(response, "session").await?;
            Ok(payload.into())
        })
    }

    fn profile(&self, token: &str) -> BoxFuture<'static, Result<User, AuthError>> {
        let request = self.client.get(self.endpoint("profile")).bearer_auth(token);

        Box::pin(async move {
            let response = request
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;

            let payload: UserPayload = read_json(response, "profile").await?;
            Ok(payload.into())
        })
    }
}
