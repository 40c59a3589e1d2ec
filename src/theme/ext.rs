use gpui::{App, Global};

use crate::theme::{Appearance, Brand, Theme};

/// App global holding the resolved theme.
pub struct ActiveTheme(pub Theme);

impl Global for ActiveTheme {}

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme and re-renders every window.
    fn set_theme(&mut self, theme: Theme);

    /// Gets the current theme.
    fn get_theme(&self) -> &Theme;

    /// Whether a theme has been installed.
    fn has_theme(&self) -> bool;

    /// Switches brand, keeping the current appearance.
    fn set_brand(&mut self, brand: Brand);

    /// Switches appearance, keeping the current brand.
    fn set_appearance(&mut self, appearance: Appearance);

    /// Flips between light and dark.
    fn toggle_appearance(&mut self);
}

impl ThemeExt for App {
    fn set_theme(&mut self, theme: Theme) {
        if self.has_theme() && *self.get_theme() == theme {
            return;
        }

        tracing::debug!(
            brand = theme.brand().name(),
            appearance = theme.appearance().name(),
            "switching theme"
        );

        self.set_global(ActiveTheme(theme));
        self.refresh_windows();
    }

    fn get_theme(&self) -> &Theme {
        &self.global::<ActiveTheme>().0
    }

    fn has_theme(&self) -> bool {
        self.has_global::<ActiveTheme>()
    }

    fn set_brand(&mut self, brand: Brand) {
        let theme = self.get_theme().with_brand(brand);
        self.set_theme(theme);
    }

    fn set_appearance(&mut self, appearance: Appearance) {
        let theme = self.get_theme().with_appearance(appearance);
        self.set_theme(theme);
    }

    fn toggle_appearance(&mut self) {
        let appearance = self.get_theme().appearance().toggled();
        self.set_appearance(appearance);
    }
}
