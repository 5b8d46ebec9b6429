// SPDX-License-Identifier: MPL-2.0
//! Authentication port definition.

use crate::domain::auth::{Credentials, Session, User};
use futures_util::future::BoxFuture;
use thiserror::Error;

/// Why a backend request failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend rejected the e-mail/password pair or the session token.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The backend could not be reached.
    #[error("network failure: {0}")]
    Network(String),

    /// The backend answered with something other than a session.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// Creates sessions for valid credentials and reads the signed-in profile.
pub trait SessionApi: Send + Sync {
    /// Exchanges credentials for a session.
    fn sign_in(&self, credentials: Credentials) -> BoxFuture<'static, Result<Session, AuthError>>;

    /// Fetches the current profile of the user owning `token`.
    fn profile(&self, token: &str) -> BoxFuture<'static, Result<User, AuthError>>;
}
