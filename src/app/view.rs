// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen and layers the toast overlay above it.

use super::{Message, Screen};
use crate::domain::auth::User;
use crate::ui::dashboard::{self, ViewContext as DashboardViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::sign_in;
use chrono::NaiveDate;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub sign_in: &'a sign_in::State,
    pub dashboard: &'a dashboard::State,
    pub user: Option<&'a User>,
    pub today: NaiveDate,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.user) {
        (Screen::Dashboard, Some(user)) => ctx
            .dashboard
            .view(DashboardViewContext {
                user,
                today: ctx.today,
            })
            .map(Message::Dashboard),
        // Without a user there is nothing to show on the dashboard.
        (Screen::Dashboard, None) | (Screen::SignIn, _) => {
            ctx.sign_in.view().map(Message::SignIn)
        }
    };

    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Toast);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}
