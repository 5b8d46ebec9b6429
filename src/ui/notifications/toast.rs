// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards tinted by their kind, with an icon, a bold title,
//! an optional description and a close button. Messages without a
//! description use a compact layout.

use super::manager::{Manager, Message};
use super::notification::{ToastKind, ToastMessage};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use iced::widget::{button, container, text, Column, Container, Row, Svg, Text};
use iced::{alignment, font, Color, Element, Font, Length, Padding, Theme};

/// Meaning conveyed by the leading icon of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Information,
    Checkmark,
    Alert,
}

impl IconKind {
    #[must_use]
    pub fn for_kind(kind: ToastKind) -> Self {
        match kind {
            ToastKind::Info => IconKind::Information,
            ToastKind::Success => IconKind::Checkmark,
            ToastKind::Error => IconKind::Alert,
        }
    }

    fn svg<'a>(self) -> Svg<'a> {
        match self {
            IconKind::Information => icons::info(),
            IconKind::Checkmark => icons::check_circle(),
            IconKind::Alert => icons::alert_circle(),
        }
    }
}

/// Card layout, picked from the presence of a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Title only: tighter padding, icon centered on the title.
    Compact,
    /// Title and description: icon pinned to the top.
    Expanded,
}

impl Layout {
    #[must_use]
    pub fn for_message(message: &ToastMessage) -> Self {
        if message.has_description() {
            Layout::Expanded
        } else {
            Layout::Compact
        }
    }

    fn padding(self) -> Padding {
        match self {
            Layout::Compact => Padding::from([spacing::SM, spacing::MD]),
            Layout::Expanded => Padding::from([spacing::MD, spacing::MD]),
        }
    }

    fn icon_alignment(self) -> alignment::Vertical {
        match self {
            Layout::Compact => alignment::Vertical::Center,
            Layout::Expanded => alignment::Vertical::Top,
        }
    }
}

/// Toast rendering entry points.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(message: &ToastMessage) -> Element<'_, Message> {
        let kind = message.kind();
        let layout = Layout::for_message(message);
        let accent = kind.accent_color();

        let icon = icons::tinted(IconKind::for_kind(kind).svg(), accent, sizing::ICON_MD);

        let title = Text::new(message.title())
            .size(typography::BODY)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            })
            .color(accent);

        let mut body = Column::new().spacing(spacing::XXS).push(title);
        if let Some(description) = message.description() {
            body = body.push(
                Text::new(description)
                    .size(typography::CAPTION)
                    .color(Color {
                        a: opacity::OVERLAY_HOVER,
                        ..accent
                    }),
            );
        }

        let dismiss_button = button(icons::tinted(icons::x_circle(), accent, sizing::ICON_SM))
            .on_press(Message::Dismiss(message.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [title/description] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(layout.icon_alignment())
            .push(icon)
            .push(Container::new(body).width(Length::Fill))
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(layout.padding())
            .style(move |theme: &Theme| toast_container_style(theme, kind))
            .into()
    }

    /// Renders every visible toast, stacked in the top-right corner.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager.visible().map(Self::view).collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::XL)
            .into()
    }
}

/// Style function for the toast card.
fn toast_container_style(_theme: &Theme, kind: ToastKind) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(kind.background_color())),
        border: iced::Border {
            color: kind.accent_color(),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(kind.accent_color()),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| iced::Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: palette::GRAY_900,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::ToastContent;

    #[test]
    fn icons_follow_kind() {
        assert_eq!(IconKind::for_kind(ToastKind::Info), IconKind::Information);
        assert_eq!(IconKind::for_kind(ToastKind::Success), IconKind::Checkmark);
        assert_eq!(IconKind::for_kind(ToastKind::Error), IconKind::Alert);
    }

    #[test]
    fn description_selects_expanded_layout() {
        let with = ToastMessage::new(
            ToastContent::error("Login failed").with_description("Check your credentials"),
        );
        let without = ToastMessage::new(ToastContent::new("Welcome"));

        assert_eq!(Layout::for_message(&with), Layout::Expanded);
        assert_eq!(Layout::for_message(&without), Layout::Compact);
    }

    #[test]
    fn compact_layout_is_tighter() {
        let compact = Layout::Compact.padding();
        let expanded = Layout::Expanded.padding();
        assert!(compact.top < expanded.top);
    }

    #[test]
    fn container_style_uses_kind_colors() {
        let style = toast_container_style(&Theme::Light, ToastKind::Error);

        assert_eq!(style.border.color, palette::ERROR_500);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::ERROR_100))
        );
    }

    #[test]
    fn dismiss_button_only_shows_background_on_interaction() {
        let active = dismiss_button_style(&Theme::Light, button::Status::Active);
        let hovered = dismiss_button_style(&Theme::Light, button::Status::Hovered);

        assert!(active.background.is_none());
        assert!(hovered.background.is_some());
    }

    #[test]
    fn overlay_renders_with_and_without_toasts() {
        let mut manager = Manager::default();
        let _ = Toast::view_overlay(&manager);

        let _ = manager.add_toast(ToastContent::success("Saved"));
        let _ = manager.add_toast(ToastContent::error("Failed").with_description("Try again"));
        let _ = Toast::view_overlay(&manager);
    }

    #[test]
    fn card_borrows_message_alongside_icons() {
        let message = ToastMessage::new(
            ToastContent::error("Erro na autenticação").with_description("cheque as credenciais"),
        );

        let card: Element<'_, Message> = Toast::view(&message);

        drop(card);
    }
}
