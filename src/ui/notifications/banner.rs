// SPDX-License-Identifier: MPL-2.0
//! Banner widget for rendering the active notification.
//!
//! The banner holds no state: it renders whatever notification it is given
//! and emits the caller's dismiss message when the close button is pressed.

use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{button, container, text, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Banner;

impl Banner {
    /// Renders `notification`, or a zero-size element when there is none.
    pub fn view<'a, Message>(
        notification: Option<&Notification>,
        i18n: &I18n,
        on_dismiss: Message,
    ) -> Element<'a, Message>
    where
        Message: Clone + 'a,
    {
        let Some(notification) = notification else {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        };

        let severity = notification.severity();
        let accent_color = severity.color();

        let icon = Text::new(severity.glyph())
            .size(typography::BODY_LG)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message = Text::new(i18n.tr(notification.message_key()))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss = button(Text::new("✕").size(typography::BODY))
            .on_press(on_dismiss)
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss);

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(move |theme: &Theme| banner_container_style(theme, accent_color))
            .into()
    }
}

fn banner_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let background = Color {
        a: opacity::OVERLAY_SUBTLE,
        ..accent_color
    };

    container::Style {
        background: Some(iced::Background::Color(background)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
