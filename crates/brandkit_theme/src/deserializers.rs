use gpui::{Pixels, SharedString, px};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 2]>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(string) => {
            let mut list = SmallVec::new();
            list.push(string);
            Ok(list)
        }

        StringOrVec::Many(list) => {
            if list.is_empty() {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(list)
        }
    }
}

/// Accepts either a bare number or a string ending in `px`.
pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    let pixels = match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let Some(string) = string.strip_suffix("px") else {
                return Err(D::Error::custom("expected string to end with 'px'"));
            };

            string
                .trim()
                .parse::<f32>()
                .map_err(|_| D::Error::custom("could not convert string into pixels"))?
        }

        StringOrFloat::Float(pixels) => pixels,
    };

    if !pixels.is_finite() || pixels < 0. {
        return Err(D::Error::custom("pixels must be a finite, non-negative value"));
    }

    Ok(px(pixels))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
