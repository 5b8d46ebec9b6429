// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the sign-in and
//! dashboard screens.
//!
//! The `App` struct owns the toast manager, the signed-in session and the
//! backend client, and translates messages into side effects like session
//! requests or persistence. Every update ends by applying the toast commands
//! queued through [`ToastHandle`]s.

pub mod config;
mod message;
pub mod paths;
mod screen;
pub mod session;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use update::{SESSION_EXPIRED_TITLE, SIGN_IN_FAILED_DESCRIPTION, SIGN_IN_FAILED_TITLE};

use crate::application::port::{AuthError, SessionApi};
use crate::domain::auth::{Credentials, Session, User};
use crate::infrastructure::HttpSessionApi;
use crate::ui::dashboard;
use crate::ui::notifications::{self, ToastContent, ToastHandle};
use crate::ui::sign_in;
use crate::ui::theming::ThemeMode;
use futures_util::future::BoxFuture;
use iced::{window, Element, Subscription, Task, Theme};
use session::AuthState;
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    theme_mode: ThemeMode,
    sign_in: sign_in::State,
    dashboard: dashboard::State,
    auth: AuthState,
    session_api: Arc<dyn SessionApi>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Handle the update loop raises toasts through.
    toasts: ToastHandle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.auth.is_signed_in())
            .field("toasts", &self.notifications.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
///
/// Close requests are routed through the update loop so the toast manager
/// can shut down before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Stand-in used when no HTTP client could be built.
struct UnavailableSessionApi(AuthError);

impl SessionApi for UnavailableSessionApi {
    fn sign_in(&self, _credentials: Credentials) -> BoxFuture<'static, Result<Session, AuthError>> {
        let err = self.0.clone();
        Box::pin(async move { Err(err) })
    }

    fn profile(&self, _token: &str) -> BoxFuture<'static, Result<User, AuthError>> {
        let err = self.0.clone();
        Box::pin(async move { Err(err) })
    }
}

impl App {
    /// Loads configuration and the saved session, then builds the app.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let (config, config_warning) = config::load();
        let (auth, session_warning) = AuthState::restore(None);

        let base_url = flags.api_url.unwrap_or_else(|| config.api.base_url.clone());
        let session_api: Arc<dyn SessionApi> =
            match HttpSessionApi::new(base_url, config.api.timeout()) {
                Ok(api) => {
                    tracing::info!(base_url = api.base_url(), "backend configured");
                    Arc::new(api)
                }
                Err(err) => {
                    tracing::error!(%err, "failed to build HTTP client");
                    Arc::new(UnavailableSessionApi(err))
                }
            };

        let mut warnings = Vec::new();
        warnings.extend(config_warning.map(ToastContent::info));
        warnings.extend(session_warning.map(ToastContent::error));

        Self::from_parts(&config, auth, session_api, warnings)
    }

    /// Assembles the app from already loaded parts and raises startup toasts.
    fn from_parts(
        config: &config::Config,
        auth: AuthState,
        session_api: Arc<dyn SessionApi>,
        startup_toasts: Vec<ToastContent>,
    ) -> (Self, Task<Message>) {
        let notifications = notifications::Manager::new(config.toast_settings());
        let toasts = notifications.handle();
        let screen = if auth.is_signed_in() {
            Screen::Dashboard
        } else {
            Screen::SignIn
        };

        let mut app = Self {
            screen,
            theme_mode: config.general.theme_mode,
            sign_in: sign_in::State::new(),
            dashboard: dashboard::State::default(),
            auth,
            session_api,
            notifications,
            toasts,
        };

        for content in startup_toasts {
            update::raise(&app.toasts, content);
        }
        let queued = app.notifications.pump().map(Message::Toast);
        let refresh = update::refresh_profile(&app.auth, &app.session_api);

        (app, Task::batch([queued, refresh]))
    }

    fn title(&self) -> String {
        match (self.screen, self.auth.user()) {
            (Screen::Dashboard, Some(user)) => format!("{} - GoBarber", user.first_name()),
            _ => "GoBarber".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_toast_subscription(&self.notifications),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            sign_in: &mut self.sign_in,
            dashboard: &mut self.dashboard,
            auth: &mut self.auth,
            session_api: &self.session_api,
            toasts: &self.toasts,
        };

        let task = match message {
            Message::SignIn(sign_in_message) => {
                update::handle_sign_in_message(&mut ctx, sign_in_message)
            }
            Message::SignInCompleted(result) => update::handle_sign_in_completed(&mut ctx, result),
            Message::ProfileRefreshed(token, result) => {
                update::handle_profile_refreshed(&mut ctx, &token, result)
            }
            Message::Dashboard(dashboard_message) => {
                update::handle_dashboard_message(&mut ctx, dashboard_message)
            }
            Message::Toast(toast_message) => {
                self.notifications.handle_message(&toast_message);
                Task::none()
            }
            Message::WindowCloseRequested(window_id) => {
                update::handle_window_close(&mut self.notifications, window_id)
            }
        };

        let queued = self.notifications.pump().map(Message::Toast);
        Task::batch([task, queued])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            sign_in: &self.sign_in,
            dashboard: &self.dashboard,
            user: self.auth.user(),
            today: chrono::Local::now().date_naive(),
            notifications: &self.notifications,
        })
    }
}
