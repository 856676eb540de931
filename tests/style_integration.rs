// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use iced_counter::ui::design_tokens::{palette, typography};
    use iced_counter::ui::styles::{button, container};
    use iced_counter::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
                let _ = button::primary(&theme, status);
                let _ = button::secondary(&theme, status);
                let _ = button::danger(&theme, status);
            }
        }
    }

    #[test]
    fn danger_and_primary_are_distinguishable() {
        let theme = Theme::Light;
        let primary = button::primary(&theme, Status::Active);
        let danger = button::danger(&theme, Status::Active);
        assert_ne!(primary.background, danger.background);
        assert_eq!(danger.background, Some(palette::ERROR_600.into()));
    }

    #[test]
    fn containers_follow_theme() {
        let light = container::card(&ThemeMode::Light.theme());
        let dark = container::card(&ThemeMode::Dark.theme());
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn pulse_enlarges_readout() {
        assert!(typography::DISPLAY_PULSE > typography::DISPLAY);
    }
}
