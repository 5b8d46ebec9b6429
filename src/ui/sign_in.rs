// SPDX-License-Identifier: MPL-2.0
//! Sign-in screen.
//!
//! Collects e-mail and password, validates them locally and hands valid
//! credentials to the parent as [`Event::Submit`]. The actual request and
//! the failure toast belong to the application.

use crate::domain::auth::{validate_sign_in, Credentials};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::input::{self, Field, InputIcon, InputState};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Element, Length, Theme};

const TITLE: &str = "Faça seu logon";
const SUBMIT_LABEL: &str = "Entrar";
const SUBMITTING_LABEL: &str = "Carregando...";

/// Messages emitted by the sign-in screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submit(Credentials),
}

/// Form state.
#[derive(Debug, Clone, Default)]
pub struct State {
    email: InputState,
    password: InputState,
    submitting: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a sign-in message and return the corresponding event.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(value) => {
                self.email.set_value(value);
                self.password.blur();
                Event::None
            }
            Message::PasswordChanged(value) => {
                self.password.set_value(value);
                self.email.blur();
                Event::None
            }
            Message::Submit => self.submit(),
        }
    }

    fn submit(&mut self) -> Event {
        if self.submitting {
            return Event::None;
        }

        self.email.blur();
        self.password.blur();

        match validate_sign_in(self.email.value(), self.password.value()) {
            Ok(credentials) => {
                self.email.set_error(None);
                self.password.set_error(None);
                self.submitting = true;
                Event::Submit(credentials)
            }
            Err(errors) => {
                self.email.set_error(errors.email.map(str::to_string));
                self.password.set_error(errors.password.map(str::to_string));
                Event::None
            }
        }
    }

    /// Re-enables the form once the request finished.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn email(&self) -> &InputState {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &InputState {
        &self.password
    }

    /// Render the sign-in form.
    #[must_use]
    pub fn view(&self) -> Element<'_, Message> {
        let title = Text::new(TITLE)
            .size(typography::TITLE_MD)
            .color(palette::TEXT_PRIMARY);

        let email = input::view(
            Field {
                placeholder: "E-mail",
                icon: InputIcon::Mail,
                secure: false,
            },
            &self.email,
            Message::EmailChanged,
            Message::Submit,
        );

        let password = input::view(
            Field {
                placeholder: "Senha",
                icon: InputIcon::Lock,
                secure: true,
            },
            &self.password,
            Message::PasswordChanged,
            Message::Submit,
        );

        let label = if self.submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        };
        let submit = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(icons::tinted(icons::log_in(), palette::SURFACE_700, sizing::ICON_SM))
                .push(Text::new(label).size(typography::BODY_LG)),
        )
        .on_press_maybe((!self.submitting).then_some(Message::Submit))
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([0.0, spacing::MD])
        .style(submit_button_style);

        let form = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(email)
            .push(password)
            .push(submit);

        Container::new(form)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

fn submit_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ORANGE_600,
        _ => palette::ORANGE_500,
    };
    let text_color = if matches!(status, button::Status::Disabled) {
        palette::TEXT_MUTED
    } else {
        palette::SURFACE_700
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::{EMAIL_INVALID, PASSWORD_REQUIRED};

    fn fill(state: &mut State, email: &str, password: &str) {
        state.update(Message::EmailChanged(email.to_string()));
        state.update(Message::PasswordChanged(password.to_string()));
    }

    #[test]
    fn valid_form_submits_credentials() {
        let mut state = State::new();
        fill(&mut state, "johndoe@example.com", "123456");

        let event = state.update(Message::Submit);

        match event {
            Event::Submit(credentials) => {
                assert_eq!(credentials.email.as_str(), "johndoe@example.com");
                assert_eq!(credentials.password, "123456");
            }
            Event::None => panic!("expected submit"),
        }
        assert!(state.is_submitting());
    }

    #[test]
    fn invalid_email_does_not_submit() {
        let mut state = State::new();
        fill(&mut state, "non-valid-email", "123456");

        assert_eq!(state.update(Message::Submit), Event::None);
        assert_eq!(state.email().error(), Some(EMAIL_INVALID));
        assert!(!state.is_submitting());
    }

    #[test]
    fn missing_password_does_not_submit() {
        let mut state = State::new();
        state.update(Message::EmailChanged("johndoe@example.com".to_string()));

        assert_eq!(state.update(Message::Submit), Event::None);
        assert_eq!(state.password().error(), Some(PASSWORD_REQUIRED));
        assert_eq!(state.email().error(), None);
    }

    #[test]
    fn pending_submit_ignores_repeats() {
        let mut state = State::new();
        fill(&mut state, "johndoe@example.com", "123456");
        state.update(Message::Submit);

        assert_eq!(state.update(Message::Submit), Event::None);

        state.finish_submit();
        assert!(matches!(state.update(Message::Submit), Event::Submit(_)));
    }

    #[test]
    fn typing_in_one_field_blurs_the_other() {
        let mut state = State::new();
        state.update(Message::EmailChanged("j".to_string()));
        assert!(state.email().is_focused());

        state.update(Message::PasswordChanged("1".to_string()));

        assert!(!state.email().is_focused());
        assert!(state.password().is_focused());
    }

    #[test]
    fn fixing_a_field_clears_its_error() {
        let mut state = State::new();
        state.update(Message::Submit);
        assert!(state.email().error().is_some());

        state.update(Message::EmailChanged("johndoe@example.com".to_string()));

        assert!(state.email().error().is_none());
        assert!(state.password().error().is_some());
    }

    #[test]
    fn form_renders_in_both_button_states() {
        let mut state = State::new();
        drop(state.view());

        fill(&mut state, "johndoe@example.com", "123456");
        state.update(Message::Submit);
        let _pending = state.view();
    }
}
