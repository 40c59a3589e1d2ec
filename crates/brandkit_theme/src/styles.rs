#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{Pixels, Rgba, px};

use crate::{RgbaExt, SpacingTokens, TRANSPARENT, TextStyle, Theme, TypographyTokens};

/// The colors and border a component paints with in one visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentStyle {
    pub foreground: Rgba,
    pub background: Rgba,
    pub border: Rgba,
    pub border_width: Pixels,
}

impl ComponentStyle {
    pub fn new(foreground: Rgba, background: Rgba, border: Rgba, border_width: Pixels) -> Self {
        Self {
            foreground,
            background,
            border,
            border_width,
        }
    }

    /// Style without a border.
    pub fn filled(foreground: Rgba, background: Rgba) -> Self {
        Self::new(foreground, background, TRANSPARENT, Pixels::ZERO)
    }

    pub fn has_border(&self) -> bool {
        self.border_width > Pixels::ZERO && !self.border.is_transparent()
    }

    /// Mutes a style for a component that can't be interacted with.
    ///
    /// Filled backgrounds fall back to the secondary surface, transparent ones
    /// stay transparent, and any border keeps its width but uses the subtle
    /// border color.
    pub fn disabled(&self, theme: &Theme) -> Self {
        let colors = theme.colors();

        Self {
            foreground: colors.text.disabled,
            background: if self.background.is_transparent() {
                TRANSPARENT
            } else {
                colors.background.secondary
            },
            border: if self.has_border() {
                colors.border.subtle
            } else {
                TRANSPARENT
            },
            border_width: self.border_width,
        }
    }
}

/// Button emphasis levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Assoc)]
#[func(pub fn style(&self, theme: &Theme) -> ComponentStyle)]
#[func(pub fn pressed_background(&self, theme: &Theme) -> Rgba)]
pub enum ButtonVariant {
    /// Filled with the brand accent.
    #[default]
    #[assoc(style = ComponentStyle::filled(theme.colors().text.on_accent, theme.colors().accent.primary))]
    #[assoc(pressed_background = theme.colors().accent.pressed)]
    Primary,
    /// Outlined in the brand accent.
    #[assoc(style = ComponentStyle::new(
        theme.colors().accent.primary,
        theme.colors().background.primary,
        theme.colors().accent.primary,
        theme.shapes().border_widths.thin,
    ))]
    #[assoc(pressed_background = theme.colors().accent.subtle)]
    Secondary,
    /// Accent text with no chrome until pressed.
    #[assoc(style = ComponentStyle::filled(theme.colors().accent.primary, TRANSPARENT))]
    #[assoc(pressed_background = theme.colors().accent.subtle)]
    Ghost,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 3] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
    ];

    /// Resolves the style for the button's current flags.
    ///
    /// Loading buttons keep their variant's colors; only disabled buttons are muted.
    pub fn resolve(&self, theme: &Theme, disabled: bool) -> ComponentStyle {
        let style = self.style(theme);

        if disabled {
            style.disabled(theme)
        } else {
            style
        }
    }
}

/// Button sizes, mapped onto the shared spacing scale and the brand's type ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Assoc)]
#[func(pub fn padding(&self, spacing: &SpacingTokens) -> (Pixels, Pixels))]
#[func(pub fn text_style(&self, typography: &TypographyTokens) -> TextStyle)]
pub enum ButtonSize {
    #[assoc(padding = (spacing.sm, spacing.xs))]
    #[assoc(text_style = typography.caption)]
    Sm,
    #[default]
    #[assoc(padding = (spacing.lg, spacing.sm))]
    #[assoc(text_style = typography.label)]
    Md,
    #[assoc(padding = (spacing.xl, spacing.md))]
    #[assoc(text_style = typography.body)]
    Lg,
}

/// Drop shadow parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Elevation {
    pub offset_y: Pixels,
    pub blur: Pixels,
    pub spread: Pixels,
}

impl Elevation {
    pub const NONE: Elevation = Elevation {
        offset_y: px(0.),
        blur: px(0.),
        spread: px(0.),
    };

    pub const RAISED: Elevation = Elevation {
        offset_y: px(2.),
        blur: px(12.),
        spread: px(0.),
    };

    pub fn is_none(&self) -> bool {
        self.blur <= Pixels::ZERO && self.offset_y == Pixels::ZERO && self.spread <= Pixels::ZERO
    }
}

/// Card surface treatments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Assoc)]
#[func(pub fn style(&self, theme: &Theme) -> ComponentStyle)]
#[func(pub fn elevation(&self) -> Elevation)]
pub enum CardVariant {
    /// Tinted surface, no border or shadow.
    #[default]
    #[assoc(style = ComponentStyle::filled(theme.colors().text.primary, theme.colors().background.secondary))]
    #[assoc(elevation = Elevation::NONE)]
    Flat,
    /// Page-colored surface with a hairline border.
    #[assoc(style = ComponentStyle::new(
        theme.colors().text.primary,
        theme.colors().background.primary,
        theme.colors().border.subtle,
        theme.shapes().border_widths.thin,
    ))]
    #[assoc(elevation = Elevation::NONE)]
    Outlined,
    /// Raised surface with a drop shadow.
    #[assoc(style = ComponentStyle::filled(theme.colors().text.primary, theme.colors().background.elevated))]
    #[assoc(elevation = Elevation::RAISED)]
    Elevated,
}

impl CardVariant {
    pub const ALL: [CardVariant; 3] = [
        CardVariant::Flat,
        CardVariant::Outlined,
        CardVariant::Elevated,
    ];
}

/// Chip selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Assoc)]
#[func(pub fn style(&self, theme: &Theme) -> ComponentStyle)]
pub enum ChipState {
    #[assoc(style = ComponentStyle::new(
        theme.colors().text.on_accent,
        theme.colors().accent.primary,
        theme.colors().accent.primary,
        theme.shapes().border_widths.thin,
    ))]
    Selected,
    #[default]
    #[assoc(style = ComponentStyle::new(
        theme.colors().text.primary,
        theme.colors().background.secondary,
        theme.colors().border.subtle,
        theme.shapes().border_widths.thin,
    ))]
    Unselected,
}

impl ChipState {
    pub fn is_selected(&self) -> bool {
        matches!(self, ChipState::Selected)
    }
}

impl From<bool> for ChipState {
    fn from(selected: bool) -> Self {
        if selected {
            ChipState::Selected
        } else {
            ChipState::Unselected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Appearance, Brand, SPACING};

    fn all_themes() -> impl Iterator<Item = Theme> {
        Brand::ALL.into_iter().flat_map(|brand| {
            Appearance::ALL
                .into_iter()
                .map(move |appearance| Theme::resolve(brand, appearance))
        })
    }

    #[test]
    fn test_button_styles_come_from_theme() {
        for theme in all_themes() {
            let colors = theme.colors();

            let primary = ButtonVariant::Primary.style(&theme);
            assert_eq!(primary.background, colors.accent.primary);
            assert_eq!(primary.foreground, colors.text.on_accent);
            assert!(!primary.has_border());

            let secondary = ButtonVariant::Secondary.style(&theme);
            assert_eq!(secondary.border, colors.accent.primary);
            assert_eq!(secondary.border_width, theme.shapes().border_widths.thin);

            let ghost = ButtonVariant::Ghost.style(&theme);
            assert!(ghost.background.is_transparent());
            assert_eq!(ghost.foreground, colors.accent.primary);
        }
    }

    #[test]
    fn test_button_variants_are_distinct() {
        let theme = Theme::default();
        let styles: Vec<_> = ButtonVariant::ALL
            .iter()
            .map(|variant| variant.style(&theme))
            .collect();

        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
        assert_ne!(styles[0], styles[2]);
    }

    #[test]
    fn test_pressed_backgrounds() {
        let theme = Theme::resolve(Brand::B, Appearance::Light);
        assert_eq!(
            ButtonVariant::Primary.pressed_background(&theme),
            theme.colors().accent.pressed
        );
        assert_eq!(
            ButtonVariant::Ghost.pressed_background(&theme),
            theme.colors().accent.subtle
        );
    }

    #[test]
    fn test_disabled_buttons_are_muted() {
        for theme in all_themes() {
            let colors = theme.colors();

            for variant in ButtonVariant::ALL {
                let style = variant.resolve(&theme, true);
                assert_eq!(style.foreground, colors.text.disabled);
                assert_eq!(style, variant.style(&theme).disabled(&theme));
            }

            let primary = ButtonVariant::Primary.resolve(&theme, true);
            assert_eq!(primary.background, colors.background.secondary);

            let ghost = ButtonVariant::Ghost.resolve(&theme, true);
            assert!(ghost.background.is_transparent());

            let secondary = ButtonVariant::Secondary.resolve(&theme, true);
            assert_eq!(secondary.border, colors.border.subtle);
        }
    }

    #[test]
    fn test_enabled_resolve_is_plain_style() {
        let theme = Theme::default();
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.resolve(&theme, false), variant.style(&theme));
        }
    }

    #[test]
    fn test_button_sizes_grow() {
        let typography = &Brand::A.tokens().typography;
        let (sm_x, sm_y) = ButtonSize::Sm.padding(&SPACING);
        let (md_x, md_y) = ButtonSize::Md.padding(&SPACING);
        let (lg_x, lg_y) = ButtonSize::Lg.padding(&SPACING);

        assert!(sm_x < md_x && md_x < lg_x);
        assert!(sm_y < md_y && md_y < lg_y);
        assert!(
            ButtonSize::Sm.text_style(typography).size
                <= ButtonSize::Lg.text_style(typography).size
        );
    }

    #[test]
    fn test_card_styles() {
        for theme in all_themes() {
            let colors = theme.colors();

            let flat = CardVariant::Flat.style(&theme);
            assert_eq!(flat.background, colors.background.secondary);
            assert!(!flat.has_border());

            let outlined = CardVariant::Outlined.style(&theme);
            assert!(outlined.has_border());
            assert_eq!(outlined.border, colors.border.subtle);

            let elevated = CardVariant::Elevated.style(&theme);
            assert_eq!(elevated.background, colors.background.elevated);

            for variant in CardVariant::ALL {
                assert_eq!(variant.style(&theme).foreground, colors.text.primary);
            }
        }

        assert!(CardVariant::Flat.elevation().is_none());
        assert!(CardVariant::Outlined.elevation().is_none());
        assert!(!CardVariant::Elevated.elevation().is_none());
    }

    #[test]
    fn test_chip_states() {
        for theme in all_themes() {
            let selected = ChipState::Selected.style(&theme);
            let unselected = ChipState::Unselected.style(&theme);

            assert_eq!(selected.background, theme.colors().accent.primary);
            assert_eq!(unselected.background, theme.colors().background.secondary);
            assert_eq!(selected.border_width, unselected.border_width);
        }

        assert_eq!(ChipState::from(true), ChipState::Selected);
        assert_eq!(ChipState::from(false), ChipState::Unselected);
        assert!(ChipState::Selected.is_selected());
    }
}
