#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{App, Pixels, Rgba};

use crate::theme::{TextStyle, ThemeExt};

/// Spacing steps that resolve to the shared spacing scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> Pixels)]
pub enum ThemeSpacingKind {
    #[assoc(resolve = cx.get_theme().spacing().xxs)]
    Xxs,
    #[assoc(resolve = cx.get_theme().spacing().xs)]
    Xs,
    #[default]
    #[assoc(resolve = cx.get_theme().spacing().sm)]
    Sm,
    #[assoc(resolve = cx.get_theme().spacing().md)]
    Md,
    #[assoc(resolve = cx.get_theme().spacing().lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().spacing().xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().spacing().xxl)]
    Xxl,
}

/// Corner radius variants that resolve to the active brand's shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> Pixels)]
pub enum ThemeRadiusKind {
    #[assoc(resolve = cx.get_theme().shapes().corner_radii.sm)]
    Sm,
    #[default]
    #[assoc(resolve = cx.get_theme().shapes().corner_radii.md)]
    Md,
    #[assoc(resolve = cx.get_theme().shapes().corner_radii.lg)]
    Lg,
    /// Fully rounded ends.
    #[assoc(resolve = cx.get_theme().shapes().corner_radii.pill)]
    Pill,
}

/// Text styles from the active brand's type ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> TextStyle)]
pub enum ThemeTextStyleKind {
    /// Page and screen titles.
    #[assoc(resolve = cx.get_theme().typography().title)]
    Title,
    /// Section and card headings.
    #[assoc(resolve = cx.get_theme().typography().headline)]
    Headline,
    /// Running text.
    #[default]
    #[assoc(resolve = cx.get_theme().typography().body)]
    Body,
    /// Buttons, chips and other controls.
    #[assoc(resolve = cx.get_theme().typography().label)]
    Label,
    /// Supporting text.
    #[assoc(resolve = cx.get_theme().typography().caption)]
    Caption,
}

/// Surface colors from the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> Rgba)]
pub enum ThemeBackgroundKind {
    /// Page background.
    #[default]
    #[assoc(resolve = cx.get_theme().colors().background.primary)]
    Primary,
    /// Grouped or tinted content.
    #[assoc(resolve = cx.get_theme().colors().background.secondary)]
    Secondary,
    /// Surfaces raised above the page.
    #[assoc(resolve = cx.get_theme().colors().background.elevated)]
    Elevated,
}

/// Text colors from the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Assoc)]
#[func(pub fn resolve(&self, cx: &App) -> Rgba)]
pub enum ThemeTextColorKind {
    #[default]
    #[assoc(resolve = cx.get_theme().colors().text.primary)]
    Primary,
    #[assoc(resolve = cx.get_theme().colors().text.secondary)]
    Secondary,
    #[assoc(resolve = cx.get_theme().colors().text.on_accent)]
    OnAccent,
    #[assoc(resolve = cx.get_theme().colors().text.disabled)]
    Disabled,
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{Appearance, Brand, Theme, ThemeExt};
    use gpui::{TestAppContext, px};

    #[gpui::test]
    fn test_spacing_kinds_follow_scale(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::default());

            let scale = [
                ThemeSpacingKind::Xxs,
                ThemeSpacingKind::Xs,
                ThemeSpacingKind::Sm,
                ThemeSpacingKind::Md,
                ThemeSpacingKind::Lg,
                ThemeSpacingKind::Xl,
                ThemeSpacingKind::Xxl,
            ]
            .map(|kind| kind.resolve(cx));

            assert_eq!(scale[0], px(2.));
            assert_eq!(scale[6], px(32.));
            assert!(scale.windows(2).all(|pair| pair[0] < pair[1]));
        });
    }

    #[gpui::test]
    fn test_spacing_ignores_brand(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::resolve(Brand::A, Appearance::Light));
            let a = ThemeSpacingKind::Lg.resolve(cx);

            cx.set_theme(Theme::resolve(Brand::B, Appearance::Dark));
            let b = ThemeSpacingKind::Lg.resolve(cx);

            assert_eq!(a, b);
        });
    }

    #[gpui::test]
    fn test_radius_kinds_follow_brand(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::resolve(Brand::A, Appearance::Light));
            let a = ThemeRadiusKind::Lg.resolve(cx);

            cx.set_theme(Theme::resolve(Brand::B, Appearance::Light));
            let b = ThemeRadiusKind::Lg.resolve(cx);

            assert_eq!(a, Brand::A.tokens().shapes.corner_radii.lg);
            assert_eq!(b, Brand::B.tokens().shapes.corner_radii.lg);

            let sm = ThemeRadiusKind::Sm.resolve(cx);
            let pill = ThemeRadiusKind::Pill.resolve(cx);
            assert!(sm <= pill);
        });
    }

    #[gpui::test]
    fn test_text_style_kinds(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::resolve(Brand::B, Appearance::Dark));
            let typography = &Brand::B.tokens().typography;

            assert_eq!(ThemeTextStyleKind::Title.resolve(cx), typography.title);
            assert_eq!(ThemeTextStyleKind::Caption.resolve(cx), typography.caption);
            assert!(
                ThemeTextStyleKind::Title.resolve(cx).size
                    > ThemeTextStyleKind::Body.resolve(cx).size
            );
        });
    }

    #[gpui::test]
    fn test_color_kinds_follow_appearance(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::resolve(Brand::A, Appearance::Light));
            let light = ThemeBackgroundKind::Primary.resolve(cx);
            let light_text = ThemeTextColorKind::Primary.resolve(cx);

            cx.toggle_appearance();
            let dark = ThemeBackgroundKind::Primary.resolve(cx);
            let dark_text = ThemeTextColorKind::Primary.resolve(cx);

            assert_ne!(light, dark);
            assert_ne!(light_text, dark_text);
            assert_eq!(
                dark,
                Brand::A
                    .tokens()
                    .colors(Appearance::Dark)
                    .background
                    .primary
            );
        });
    }
}
