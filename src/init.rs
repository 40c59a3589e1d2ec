use gpui::{App, Window};

use crate::theme::{Theme, ThemeExt, ThemeSettings};

/// Installs the default theme unless one has already been set.
pub fn init(cx: &mut App) {
    if !cx.has_theme() {
        cx.set_theme(Theme::default());
    }
}

/// Installs the theme selected by `settings`, replacing any current theme.
pub fn init_with_settings(settings: ThemeSettings, cx: &mut App) {
    cx.set_theme(settings.resolve());
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().typography().body.size);
}
