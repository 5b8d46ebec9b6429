// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::AuthError;
use crate::domain::auth::{Session, User};
use crate::ui::dashboard;
use crate::ui::notifications;
use crate::ui::sign_in;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SignIn(sign_in::Message),
    Dashboard(dashboard::Message),
    Toast(notifications::NotificationMessage),
    /// Result of the session request started by the sign-in form.
    SignInCompleted(Result<Session, AuthError>),
    /// Result of refreshing the profile of a restored session, tagged with
    /// the token the request was made with.
    ProfileRefreshed(String, Result<User, AuthError>),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional data directory override (for the saved session).
    /// Takes precedence over `GOBARBER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GOBARBER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional backend URL, overriding `[api] base_url`.
    pub api_url: Option<String>,
}
