use gpui::{BoxShadow, Rgba, point, px};

use crate::theme::Elevation;

/// Builds the drop shadow for an elevation, tinted with the theme's shadow color.
pub fn box_shadow(elevation: Elevation, color: Rgba) -> Option<BoxShadow> {
    if elevation.is_none() {
        return None;
    }

    Some(BoxShadow {
        color: color.into(),
        offset: point(px(0.), elevation.offset_y),
        blur_radius: elevation.blur,
        spread_radius: elevation.spread,
    })
}
