// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen: greeting header and the selected schedule date.

use crate::domain::auth::User;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Element, Length, Theme};

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Contextual data needed to render the dashboard.
pub struct ViewContext<'a> {
    pub user: &'a User,
    pub today: NaiveDate,
}

/// Messages emitted by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SignOut,
    SelectDate(NaiveDate),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SignOut,
}

#[derive(Debug, Clone)]
pub struct State {
    selected: NaiveDate,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl State {
    #[must_use]
    pub fn new(selected: NaiveDate) -> Self {
        Self { selected }
    }

    #[must_use]
    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::SignOut => Event::SignOut,
            Message::SelectDate(date) => {
                self.selected = date;
                Event::None
            }
        }
    }

    #[must_use]
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let profile = Column::new()
            .push(
                Text::new("Bem-vindo,")
                    .size(typography::BODY)
                    .color(palette::TEXT_SECONDARY),
            )
            .push(
                Text::new(greeting_name(ctx.user))
                    .size(typography::BODY_LG)
                    .color(palette::ORANGE_500),
            );

        let sign_out = button(icons::tinted(
            icons::power(),
            palette::TEXT_MUTED,
            sizing::ICON_MD,
        ))
        .on_press(Message::SignOut)
        .style(button::text);

        let header = Container::new(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(profile)
                .push(Space::new().width(Length::Fill))
                .push(sign_out),
        )
        .padding([spacing::LG, spacing::XXL])
        .width(Length::Fill)
        .style(header_style);

        let mut date_line = Row::new().spacing(spacing::SM);
        for part in date_parts(self.selected, ctx.today) {
            date_line = date_line.push(
                Text::new(part)
                    .size(typography::BODY)
                    .color(palette::ORANGE_500),
            );
        }

        let schedule = Column::new()
            .spacing(spacing::XS)
            .padding(spacing::XXL)
            .push(
                Text::new("Horários agendados")
                    .size(typography::TITLE_LG)
                    .color(palette::TEXT_PRIMARY),
            )
            .push(date_line);

        Column::new().push(header).push(schedule).into()
    }
}

/// Name shown in the header, with the trailing period of the greeting.
#[must_use]
pub fn greeting_name(user: &User) -> String {
    format!("{}.", user.name)
}

/// Text fragments describing `selected`: an optional "Hoje", the day and
/// month, and the weekday.
#[must_use]
pub fn date_parts(selected: NaiveDate, today: NaiveDate) -> Vec<String> {
    let mut parts = Vec::with_capacity(3);
    if selected == today {
        parts.push("Hoje".to_string());
    }
    parts.push(format_day(selected));
    parts.push(weekday_name(selected.weekday()).to_string());
    parts
}

/// `Dia dd de <mês>`.
#[must_use]
pub fn format_day(date: NaiveDate) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("Dia {:02} de {month}", date.day())
}

#[must_use]
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn header_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_800)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn format_day_pads_and_names_month() {
        assert_eq!(format_day(date(2020, 3, 5)), "Dia 05 de março");
        assert_eq!(format_day(date(2020, 12, 25)), "Dia 25 de dezembro");
    }

    #[test]
    fn today_is_marked() {
        let today = date(2020, 6, 1);
        assert_eq!(
            date_parts(today, today),
            vec!["Hoje", "Dia 01 de junho", "segunda-feira"]
        );
    }

    #[test]
    fn other_days_are_not_marked() {
        let parts = date_parts(date(2020, 6, 6), date(2020, 6, 1));
        assert_eq!(parts, vec!["Dia 06 de junho", "sábado"]);
    }

    #[test]
    fn greeting_ends_with_period() {
        let user = User {
            id: "1".into(),
            name: "John Doe".into(),
            email: "johndoe@example.com".into(),
            avatar_url: None,
        };
        assert_eq!(greeting_name(&user), "John Doe.");
    }

    #[test]
    fn sign_out_is_forwarded() {
        let mut state = State::new(date(2020, 6, 1));
        assert_eq!(state.update(Message::SignOut), Event::SignOut);
    }

    #[test]
    fn selecting_a_date_updates_state() {
        let mut state = State::new(date(2020, 6, 1));
        assert_eq!(state.update(Message::SelectDate(date(2020, 6, 2))), Event::None);
        assert_eq!(state.selected(), date(2020, 6, 2));
    }

    #[test]
    fn view_borrows_user_next_to_icons() {
        let user = User {
            id: "1".into(),
            name: "John Doe".into(),
            email: "johndoe@example.com".into(),
            avatar_url: None,
        };
        let state = State::new(date(2020, 6, 1));

        let _view = state.view(ViewContext {
            user: &user,
            today: date(2020, 6, 1),
        });
    }
}
