// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::session::AuthState;
use super::{Message, Screen};
use crate::application::port::{AuthError, SessionApi};
use crate::domain::auth::{Session, User};
use crate::ui::dashboard::{self, Event as DashboardEvent};
use crate::ui::notifications::{self, ToastContent, ToastHandle};
use crate::ui::sign_in::{self, Event as SignInEvent};
use iced::{window, Task};
use std::sync::Arc;

/// Title of the toast raised when the backend rejects a sign-in.
pub const SIGN_IN_FAILED_TITLE: &str = "Erro na autenticação";

/// Description of the toast raised when the backend rejects a sign-in.
pub const SIGN_IN_FAILED_DESCRIPTION: &str =
    "Ocorreu um erro ao fazer login, cheque as credenciais.";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub sign_in: &'a mut sign_in::State,
    pub dashboard: &'a mut dashboard::State,
    pub auth: &'a mut AuthState,
    pub session_api: &'a Arc<dyn SessionApi>,
    pub toasts: &'a ToastHandle,
}

/// Queues a toast through the handle.
///
/// A handle only fails after the manager shut down, when there is nobody
/// left to show the toast to.
pub fn raise(toasts: &ToastHandle, content: ToastContent) {
    if let Err(err) = toasts.add_toast(content) {
        tracing::debug!(%err, "toast dropped");
    }
}

/// Handles sign-in form messages.
pub fn handle_sign_in_message(
    ctx: &mut UpdateContext<'_>,
    message: sign_in::Message,
) -> Task<Message> {
    match ctx.sign_in.update(message) {
        SignInEvent::None => Task::none(),
        SignInEvent::Submit(credentials) => {
            tracing::debug!(email = %credentials.email, "requesting session");
            let request = ctx.session_api.sign_in(credentials);
            Task::perform(request, Message::SignInCompleted)
        }
    }
}

/// Handles the outcome of a session request.
pub fn handle_sign_in_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<Session, AuthError>,
) -> Task<Message> {
    ctx.sign_in.finish_submit();

    match result {
        Ok(session) => {
            if let Some(warning) = ctx.auth.sign_in(session) {
                raise(ctx.toasts, ToastContent::error(warning));
            }
            *ctx.sign_in = sign_in::State::new();
            *ctx.dashboard = dashboard::State::default();
            *ctx.screen = Screen::Dashboard;
        }
        Err(err) => {
            tracing::warn!(%err, "sign-in failed");
            raise(
                ctx.toasts,
                ToastContent::error(SIGN_IN_FAILED_TITLE)
                    .with_description(SIGN_IN_FAILED_DESCRIPTION),
            );
        }
    }

    Task::none()
}

/// Title of the toast raised when a restored session was rejected.
pub const SESSION_EXPIRED_TITLE: &str = "Sua sessão expirou, faça logon novamente.";

/// Starts refreshing the profile of a restored session, if any.
pub fn refresh_profile(auth: &AuthState, session_api: &Arc<dyn SessionApi>) -> Task<Message> {
    match auth.token() {
        Some(token) => {
            let token = token.to_string();
            Task::perform(session_api.profile(&token), move |result| {
                Message::ProfileRefreshed(token, result)
            })
        }
        None => Task::none(),
    }
}

/// Applies a refreshed profile.
///
/// A rejected token ends the session; any other failure keeps the cached
/// profile. Results for a session that has since ended are dropped.
pub fn handle_profile_refreshed(
    ctx: &mut UpdateContext<'_>,
    token: &str,
    result: Result<User, AuthError>,
) -> Task<Message> {
    if ctx.auth.token() != Some(token) {
        tracing::debug!("dropping profile of a previous session");
        return Task::none();
    }

    match result {
        Ok(user) => {
            if let Some(warning) = ctx.auth.update_user(user) {
                raise(ctx.toasts, ToastContent::error(warning));
            }
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::info!("restored session rejected by backend");
            if let Some(warning) = ctx.auth.sign_out() {
                raise(ctx.toasts, ToastContent::error(warning));
            }
            *ctx.screen = Screen::SignIn;
            raise(ctx.toasts, ToastContent::info(SESSION_EXPIRED_TITLE));
        }
        Err(err) => {
            tracing::warn!(%err, "keeping cached profile");
        }
    }
    Task::none()
}

/// Handles dashboard messages.
pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match ctx.dashboard.update(message) {
        DashboardEvent::None => {}
        DashboardEvent::SignOut => {
            if let Some(warning) = ctx.auth.sign_out() {
                raise(ctx.toasts, ToastContent::error(warning));
            }
            *ctx.screen = Screen::SignIn;
        }
    }
    Task::none()
}

/// Tears the toast manager down, then closes the window.
pub fn handle_window_close(
    notifications: &mut notifications::Manager,
    window_id: window::Id,
) -> Task<Message> {
    notifications.shutdown();
    window::close(window_id)
}
