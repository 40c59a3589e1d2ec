#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::{fmt, str::FromStr};

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use crate::{BRAND_A, BRAND_B, BrandTokens, ConfigurationError};

/// A visual identity. Each brand owns one token bundle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize, Assoc,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn tokens(&self) -> &'static BrandTokens)]
pub enum Brand {
    #[default]
    #[assoc(name = "a")]
    #[assoc(tokens = &*BRAND_A)]
    A,
    #[assoc(name = "b")]
    #[assoc(tokens = &*BRAND_B)]
    B,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::A, Brand::B];

    /// The brand after this one, wrapping around.
    pub fn next(&self) -> Brand {
        let index = Self::ALL.iter().position(|brand| brand == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl FromStr for Brand {
    type Err = ConfigurationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let name = string.trim();

        Self::ALL
            .into_iter()
            .find(|brand| {
                brand.name().eq_ignore_ascii_case(name)
                    || brand.tokens().name.eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| ConfigurationError::UnknownBrand(string.to_owned()))
    }
}

impl TryFrom<String> for Brand {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens().name)
    }
}

/// Light or dark display mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize, Assoc,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn toggled(&self) -> Appearance)]
pub enum Appearance {
    #[default]
    #[assoc(name = "light")]
    #[assoc(toggled = Appearance::Dark)]
    Light,
    #[assoc(name = "dark")]
    #[assoc(toggled = Appearance::Light)]
    Dark,
}

impl Appearance {
    pub const ALL: [Appearance; 2] = [Appearance::Light, Appearance::Dark];

    pub fn is_dark(&self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

impl FromStr for Appearance {
    type Err = ConfigurationError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let name = string.trim();

        Self::ALL
            .into_iter()
            .find(|appearance| appearance.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigurationError::UnknownAppearance(string.to_owned()))
    }
}

impl TryFrom<String> for Appearance {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
