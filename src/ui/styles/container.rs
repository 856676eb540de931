// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Card surface holding the counter.
///
/// Derived from the active theme so the card reads well in light and dark mode.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Window backdrop behind the card.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_and_backdrop_differ() {
        let theme = Theme::Light;
        assert_ne!(card(&theme).background, backdrop(&theme).background);
    }
}
