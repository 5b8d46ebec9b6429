// SPDX-License-Identifier: MPL-2.0
//! Form input with an icon and validation-driven highlight.
//!
//! The highlight rules:
//! - focused: border and icon in brand orange
//! - filled but blurred: icon stays orange, border returns to normal
//! - empty and blurred: nothing highlighted
//! - validation error: red border, which wins over the focus border

use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{container, text_input, Column, Container, Row, Svg, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Colors resolved for one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub border: Color,
    pub icon: Color,
}

/// Interaction and validation state of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    value: String,
    focused: bool,
    error: Option<String>,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value. Typing implies focus and clears a stale error.
    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.focused = true;
        self.error = None;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.value.is_empty()
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Resolves border and icon colors.
    ///
    /// `focused` is passed separately because the widget reports real focus
    /// only while styling.
    #[must_use]
    pub fn visual(&self, focused: bool, idle_border: Color, idle_icon: Color) -> Visual {
        let border = if self.error.is_some() {
            palette::ERROR_500
        } else if focused {
            palette::ORANGE_500
        } else {
            idle_border
        };

        let icon = if focused || self.is_filled() {
            palette::ORANGE_500
        } else {
            idle_icon
        };

        Visual { border, icon }
    }
}

/// Which glyph to show in front of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIcon {
    Mail,
    Lock,
}

impl InputIcon {
    fn svg<'a>(self) -> Svg<'a> {
        match self {
            InputIcon::Mail => icons::mail(),
            InputIcon::Lock => icons::lock(),
        }
    }
}

/// Static description of an input.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub placeholder: &'a str,
    pub icon: InputIcon,
    pub secure: bool,
}

/// Renders an input with its leading icon and, below it, the error text.
pub fn view<'a, Message: Clone + 'a>(
    field: Field<'a>,
    state: &'a InputState,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let idle = Visual {
        border: palette::SURFACE_900,
        icon: palette::TEXT_MUTED,
    };
    let resolved = state.visual(state.is_focused(), idle.border, idle.icon);

    let icon = icons::tinted(field.icon.svg(), resolved.icon, sizing::ICON_SM);

    let style_state = state.clone();
    let input = text_input(field.placeholder, state.value())
        .on_input(on_input)
        .on_submit(on_submit)
        .secure(field.secure)
        .size(typography::BODY_LG)
        .padding(spacing::MD)
        .style(move |theme: &Theme, status: text_input::Status| {
            let focused = matches!(status, text_input::Status::Focused { .. });
            let visual = style_state.visual(focused, idle.border, idle.icon);
            input_style(theme, status, visual)
        });

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(input);

    let mut column = Column::new().spacing(spacing::XXS).push(
        Container::new(row)
            .padding([0.0, spacing::MD])
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .style(field_container_style),
    );

    if let Some(error) = state.error() {
        column = column.push(
            Text::new(error)
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    column.into()
}

fn input_style(theme: &Theme, status: text_input::Status, visual: Visual) -> text_input::Style {
    let base = text_input::default(theme, status);
    text_input::Style {
        background: Background::Color(palette::SURFACE_900),
        border: Border {
            color: visual.border,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        value: palette::TEXT_PRIMARY,
        placeholder: palette::TEXT_MUTED,
        ..base
    }
}

fn field_container_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SURFACE_900)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        text_color: Some(palette::TEXT_PRIMARY),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE_BORDER: Color = palette::SURFACE_900;
    const IDLE_ICON: Color = palette::TEXT_MUTED;

    #[test]
    fn focus_highlights_border_and_icon() {
        let mut state = InputState::new();
        state.focus();

        let visual = state.visual(state.is_focused(), IDLE_BORDER, IDLE_ICON);

        assert_eq!(visual.border, palette::ORANGE_500);
        assert_eq!(visual.icon, palette::ORANGE_500);
    }

    #[test]
    fn filled_blurred_input_keeps_icon_highlight_only() {
        let mut state = InputState::new();
        state.set_value("123456".to_string());
        state.blur();

        let visual = state.visual(state.is_focused(), IDLE_BORDER, IDLE_ICON);

        assert_eq!(visual.border, IDLE_BORDER);
        assert_eq!(visual.icon, palette::ORANGE_500);
    }

    #[test]
    fn empty_blurred_input_has_no_highlight() {
        let mut state = InputState::new();
        state.focus();
        state.blur();

        let visual = state.visual(state.is_focused(), IDLE_BORDER, IDLE_ICON);

        assert_eq!(visual.border, IDLE_BORDER);
        assert_eq!(visual.icon, IDLE_ICON);
    }

    #[test]
    fn error_border_wins_over_focus() {
        let mut state = InputState::new();
        state.focus();
        state.set_error(Some("E-mail obrigatório".to_string()));

        let visual = state.visual(true, IDLE_BORDER, IDLE_ICON);

        assert_eq!(visual.border, palette::ERROR_500);
        assert_eq!(visual.icon, palette::ORANGE_500);
    }

    #[test]
    fn typing_clears_error() {
        let mut state = InputState::new();
        state.set_error(Some("Senha obrigatória".to_string()));

        state.set_value("x".to_string());

        assert!(state.error().is_none());
        assert!(state.is_focused());
    }

    #[test]
    fn style_applies_resolved_border() {
        let visual = Visual {
            border: palette::ORANGE_500,
            icon: palette::ORANGE_500,
        };
        let style = input_style(&Theme::Dark, text_input::Status::Active, visual);
        assert_eq!(style.border.color, palette::ORANGE_500);
    }
}
