use serde::{Deserialize, Serialize};

use crate::{
    Appearance, Brand, BrandTokens, ColorTokens, ConfigurationError, SPACING, ShapeTokens,
    SpacingTokens, TypographyTokens,
};

/// The resolved token set for one brand in one appearance.
///
/// Themes are immutable. Switching brand or appearance builds a new value,
/// which is cheap since every bundle is borrowed from a static table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    brand: Brand,
    appearance: Appearance,
    tokens: &'static BrandTokens,
}

impl Theme {
    /// Resolves the bundles for a brand and appearance. Total over both enums.
    pub fn resolve(brand: Brand, appearance: Appearance) -> Self {
        tracing::debug!(brand = brand.name(), appearance = appearance.name(), "resolving theme");

        Self {
            brand,
            appearance,
            tokens: brand.tokens(),
        }
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn name(&self) -> &str {
        &self.tokens.name
    }

    pub fn tokens(&self) -> &'static BrandTokens {
        self.tokens
    }

    pub fn colors(&self) -> &'static ColorTokens {
        self.tokens().colors(self.appearance)
    }

    pub fn shapes(&self) -> &'static ShapeTokens {
        &self.tokens().shapes
    }

    pub fn typography(&self) -> &'static TypographyTokens {
        &self.tokens().typography
    }

    pub fn spacing(&self) -> &'static SpacingTokens {
        &SPACING
    }

    pub fn with_brand(&self, brand: Brand) -> Self {
        Self::resolve(brand, self.appearance)
    }

    pub fn with_appearance(&self, appearance: Appearance) -> Self {
        Self::resolve(self.brand, appearance)
    }

    pub fn settings(&self) -> ThemeSettings {
        ThemeSettings {
            brand: self.brand,
            appearance: self.appearance,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemeSettings::default().resolve()
    }
}

/// The user's current theme selection, as persisted in settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    pub brand: Brand,
    pub appearance: Appearance,
}

impl ThemeSettings {
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json.as_ref()).map_err(ConfigurationError::InvalidSettings)
    }

    pub fn resolve(&self) -> Theme {
        Theme::resolve(self.brand, self.appearance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_every_pair() {
        for brand in Brand::ALL {
            for appearance in Appearance::ALL {
                let theme = Theme::resolve(brand, appearance);

                assert_eq!(theme.brand(), brand);
                assert_eq!(theme.appearance(), appearance);
                assert_eq!(theme.colors(), brand.tokens().colors(appearance));
                assert_eq!(theme.shapes(), &brand.tokens().shapes);
                assert_eq!(theme.typography(), &brand.tokens().typography);
            }
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let first = Theme::resolve(Brand::B, Appearance::Dark);
        let second = Theme::resolve(Brand::B, Appearance::Dark);
        assert_eq!(first, second);
        assert!(std::ptr::eq(first.colors(), second.colors()));
    }

    #[test]
    fn test_spacing_is_brand_independent() {
        let a = Theme::resolve(Brand::A, Appearance::Light);
        let b = Theme::resolve(Brand::B, Appearance::Dark);
        assert!(std::ptr::eq(a.spacing(), b.spacing()));
    }

    #[test]
    fn test_shapes_ignore_appearance() {
        let light = Theme::resolve(Brand::B, Appearance::Light);
        let dark = Theme::resolve(Brand::B, Appearance::Dark);
        assert_eq!(light.shapes(), dark.shapes());
        assert_eq!(light.typography(), dark.typography());
        assert_ne!(light.colors(), dark.colors());
    }

    #[test]
    fn test_with_brand_and_appearance_build_new_values() {
        let theme = Theme::default();
        assert_eq!(theme.brand(), Brand::A);
        assert_eq!(theme.appearance(), Appearance::Light);

        let switched = theme.with_brand(Brand::B).with_appearance(Appearance::Dark);
        assert_eq!(switched, Theme::resolve(Brand::B, Appearance::Dark));
        assert_eq!(theme, Theme::resolve(Brand::A, Appearance::Light));
    }

    #[test]
    fn test_settings_from_json() {
        let settings = ThemeSettings::from_json(r#"{ "brand": "b", "appearance": "dark" }"#).unwrap();
        assert_eq!(settings.resolve(), Theme::resolve(Brand::B, Appearance::Dark));

        let partial = ThemeSettings::from_json(r#"{ "appearance": "dark" }"#).unwrap();
        assert_eq!(partial.brand, Brand::A);

        assert_eq!(settings.resolve().settings(), settings);
    }

    #[test]
    fn test_settings_reject_unknown_values() {
        assert!(matches!(
            ThemeSettings::from_json(r#"{ "brand": "c" }"#),
            Err(ConfigurationError::InvalidSettings(_))
        ));
        assert!(ThemeSettings::from_json(r#"{ "apperance": "dark" }"#).is_err());
    }
}
