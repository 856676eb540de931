// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layout: a centered card holding the heading, the notification banner,
//! the readout, the three controls and the hint line.

use super::{Message, Operation};
use crate::counter::Controller;
use crate::i18n::I18n;
use crate::storage::KeyValueStore;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{self, Banner};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a Controller<Box<dyn KeyValueStore>>,
}

/// Renders the counter card.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let controller = ctx.controller;

    let heading = Text::new(i18n.tr("counter-heading")).size(typography::TITLE_LG);

    let banner = Banner::view(
        controller.notification(),
        i18n,
        Message::Notification(notifications::Message::Dismiss),
    );

    let card = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(banner)
        .push(readout(i18n, controller.value(), controller.is_pulsing()))
        .push(controls(i18n))
        .push(hint(i18n));

    let card = Container::new(card)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::backdrop)
        .into()
}

fn readout<'a>(i18n: &I18n, value: u64, pulsing: bool) -> Element<'a, Message> {
    let label = Text::new(i18n.tr("counter-readout-label"))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    // The pulse enlarges the number and tints it with the brand color
    let size = if pulsing {
        typography::DISPLAY_PULSE
    } else {
        typography::DISPLAY
    };
    let number = Text::new(value.to_string())
        .size(size)
        .style(move |theme: &Theme| text::Style {
            color: Some(if pulsing {
                palette::PRIMARY_500
            } else {
                theme.palette().text
            }),
        });

    Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(label)
        .push(number)
        .into()
}

fn controls<'a>(i18n: &I18n) -> Element<'a, Message> {
    let control = |key: &str,
                   operation: Operation,
                   style: fn(&Theme, button::Status) -> button::Style| {
        button(Text::new(i18n.tr(key)).size(typography::BODY_LG).center())
            .on_press(Message::Counter(operation))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::MD])
            .style(style)
    };

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(control(
            "button-decrement",
            Operation::Decrement,
            styles::button::secondary,
        ))
        .push(control(
            "button-increment",
            Operation::Increment,
            styles::button::primary,
        ))
        .push(control(
            "button-reset",
            Operation::Reset,
            styles::button::danger,
        ))
        .into()
}

fn hint<'a>(i18n: &I18n) -> Element<'a, Message> {
    Text::new(i18n.tr("counter-hint"))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        })
        .into()
}
