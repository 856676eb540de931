// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles for the counter controls.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Builds a filled button style from its resting and hover fills.
fn filled(
    rest: Color,
    hover: Color,
    edge: Color,
    text_color: Color,
    status: button::Status,
) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Active | button::Status::Pressed => (rest, shadow::SM),
        button::Status::Hovered => (hover, shadow::MD),
        button::Status::Disabled => {
            return button::Style {
                background: Some(Background::Color(palette::GRAY_200)),
                text_color: palette::GRAY_400,
                border: Border {
                    color: palette::GRAY_400,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            };
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: edge,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Increment button (main action).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::PRIMARY_600,
        palette::PRIMARY_500,
        palette::PRIMARY_600,
        WHITE,
        status,
    )
}

/// Decrement button. Adapts to light/dark theme.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (rest, hover, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_200, palette::GRAY_900)
    } else {
        (palette::GRAY_700, Color::from_rgb(0.35, 0.35, 0.35), WHITE)
    };

    filled(rest, hover, palette::GRAY_400, text_color, status)
}

/// Reset button (destructive action).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::ERROR_600,
        palette::ERROR_500,
        palette::ERROR_600,
        WHITE,
        status,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_changes_primary_background() {
        let theme = Theme::Light;
        let active = primary(&theme, button::Status::Active);
        let hovered = primary(&theme, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn danger_uses_error_palette() {
        let style = danger(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ERROR_600))
        );
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn secondary_text_contrasts_with_theme() {
        let light = secondary(&Theme::Light, button::Status::Active);
        let dark = secondary(&Theme::Dark, button::Status::Active);
        assert_eq!(light.text_color, palette::GRAY_900);
        assert_eq!(dark.text_color, WHITE);
    }
}
