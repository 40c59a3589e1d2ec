use std::{
    ops::Deref,
    sync::LazyLock,
};

use gpui::{Pixels, Rgba, SharedString, px};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::{de_pixels, de_string_or_non_empty_list};
use crate::{Appearance, ConfigurationError};

/// Every token a brand defines: colors for each appearance plus the
/// brand's shapes and typography.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BrandTokens {
    pub name: String,
    pub colors: AppearanceColors,
    pub shapes: ShapeTokens,
    pub typography: TypographyTokens,
}

impl BrandTokens {
    pub fn from_json<S: AsRef<str>>(name: &str, json: S) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json.as_ref()).map_err(|source| ConfigurationError::InvalidBundle {
            name: name.to_owned(),
            source,
        })
    }

    pub fn colors(&self, appearance: Appearance) -> &ColorTokens {
        match appearance {
            Appearance::Light => &self.colors.light,
            Appearance::Dark => &self.colors.dark,
        }
    }
}

macro_rules! builtin_bundles {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub static $name: BuiltinBundle = BuiltinBundle::new(|| {
                BrandTokens::from_json(stringify!($name), include_str!($path))
                    .expect("built-in token bundles are valid")
            });
        )+
    };
}

builtin_bundles!(
    ["../themes/brand_a.json", BRAND_A],
    ["../themes/brand_b.json", BRAND_B]
);

/// A token bundle embedded in the binary and parsed on first use.
pub struct BuiltinBundle(LazyLock<BrandTokens>);

impl BuiltinBundle {
    #[inline(always)]
    const fn new(f: fn() -> BrandTokens) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for BuiltinBundle {
    type Target = BrandTokens;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<BrandTokens> for BuiltinBundle {
    fn as_ref(&self) -> &BrandTokens {
        &self.0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppearanceColors {
    pub light: ColorTokens,
    pub dark: ColorTokens,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ColorTokens {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub accent: AccentColors,
    pub border: BorderColors,
    pub status: StatusColors,
    pub shadow: Rgba,
}

impl ColorTokens {
    /// Flattens the bundle into `group.key` semantic names, in declaration order.
    pub fn entries(&self) -> IndexMap<&'static str, Rgba> {
        IndexMap::from([
            ("background.primary", self.background.primary),
            ("background.secondary", self.background.secondary),
            ("background.elevated", self.background.elevated),
            ("text.primary", self.text.primary),
            ("text.secondary", self.text.secondary),
            ("text.on_accent", self.text.on_accent),
            ("text.disabled", self.text.disabled),
            ("accent.primary", self.accent.primary),
            ("accent.pressed", self.accent.pressed),
            ("accent.subtle", self.accent.subtle),
            ("border.subtle", self.border.subtle),
            ("border.strong", self.border.strong),
            ("status.success", self.status.success),
            ("status.warning", self.status.warning),
            ("status.error", self.status.error),
            ("shadow", self.shadow),
        ])
    }

    /// Looks a color up by its semantic name, e.g. `"accent.primary"`.
    pub fn get(&self, name: &str) -> Option<Rgba> {
        self.entries().get(name).copied()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BackgroundColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub elevated: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub on_accent: Rgba,
    pub disabled: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AccentColors {
    pub primary: Rgba,
    pub pressed: Rgba,
    pub subtle: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BorderColors {
    pub subtle: Rgba,
    pub strong: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StatusColors {
    pub success: Rgba,
    pub warning: Rgba,
    pub error: Rgba,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ShapeTokens {
    pub corner_radii: CornerRadii,
    pub border_widths: BorderWidths,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CornerRadii {
    #[serde(deserialize_with = "de_pixels")]
    pub sm: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub md: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub lg: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub pill: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BorderWidths {
    #[serde(deserialize_with = "de_pixels")]
    pub thin: Pixels,
    #[serde(deserialize_with = "de_pixels")]
    pub thick: Pixels,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TypographyTokens {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub family: SmallVec<[SharedString; 2]>,
    pub title: TextStyle,
    pub headline: TextStyle,
    pub body: TextStyle,
    pub label: TextStyle,
    pub caption: TextStyle,
}

impl TypographyTokens {
    /// The preferred font family. Later entries are fallbacks.
    pub fn primary_family(&self) -> SharedString {
        self.family[0].clone()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TextStyle {
    #[serde(deserialize_with = "de_pixels")]
    pub size: Pixels,
    pub weight: f32,
    #[serde(deserialize_with = "de_pixels")]
    pub line_height: Pixels,
}

/// Spacing scale shared by every brand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingTokens {
    pub xxs: Pixels,
    pub xs: Pixels,
    pub sm: Pixels,
    pub md: Pixels,
    pub lg: Pixels,
    pub xl: Pixels,
    pub xxl: Pixels,
}

pub static SPACING: SpacingTokens = SpacingTokens {
    xxs: px(2.),
    xs: px(4.),
    sm: px(8.),
    md: px(12.),
    lg: px(16.),
    xl: px(24.),
    xxl: px(32.),
};
