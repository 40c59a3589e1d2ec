use gpui::Rgba;

/// Fully transparent black.
pub const TRANSPARENT: Rgba = Rgba {
    r: 0.,
    g: 0.,
    b: 0.,
    a: 0.,
};

/// Extension trait for blending and measuring RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;

    fn is_transparent(&self) -> bool;

    /// Linearly interpolates every channel towards `other`.
    fn mix(&self, other: &Rgba, t: f32) -> Rgba;

    /// WCAG 2.x relative luminance. Alpha is ignored.
    fn relative_luminance(&self) -> f32;

    /// WCAG contrast ratio between two colors, from `1.0` up to `21.0`.
    fn contrast_ratio(&self, other: &Rgba) -> f32;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0., 1.);
        self
    }

    fn is_transparent(&self) -> bool {
        self.a <= 0.
    }

    fn mix(&self, other: &Rgba, t: f32) -> Rgba {
        let t = t.clamp(0., 1.);
        let lerp = |from: f32, to: f32| from + (to - from) * t;

        Rgba {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
            a: lerp(self.a, other.a),
        }
    }

    fn relative_luminance(&self) -> f32 {
        fn linearize(channel: f32) -> f32 {
            if channel <= 0.04045 {
                channel / 12.92
            } else {
                ((channel + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    fn contrast_ratio(&self, other: &Rgba) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };

        (lighter + 0.05) / (darker + 0.05)
    }
}

#[cfg(test)]
mod tests {
    use gpui::rgb;

    use super::*;

    #[test]
    fn test_bundle_colors_are_hex_strings() {
        let color: Rgba = serde_json::from_str("\"#1d4ed8\"").unwrap();
        assert_eq!(color, rgb(0x1d4ed8));
        assert!(serde_json::from_str::<Rgba>("\"blue\"").is_err());
    }

    #[test]
    fn test_mix_endpoints() {
        let from = rgb(0x000000);
        let to = rgb(0xffffff);

        assert_eq!(from.mix(&to, 0.), from);
        assert_eq!(from.mix(&to, 1.), to);
        assert_eq!(from.mix(&to, 0.5).r, 0.5);
        assert_eq!(from.mix(&to, 4.), to);
    }

    #[test]
    fn test_alpha_clamps() {
        assert_eq!(rgb(0xffffff).alpha(2.).a, 1.);
        assert!(rgb(0xffffff).alpha(-1.).is_transparent());
        assert!(TRANSPARENT.is_transparent());
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(rgb(0x000000).relative_luminance(), 0.);
        assert!((rgb(0xffffff).relative_luminance() - 1.).abs() < 1e-6);
    }

    #[test]
    fn test_contrast_ratio() {
        let ratio = rgb(0x000000).contrast_ratio(&rgb(0xffffff));
        assert!((ratio - 21.).abs() < 1e-4);

        let same = rgb(0x2563eb);
        assert!((same.contrast_ratio(&same) - 1.).abs() < 1e-6);

        // Symmetric.
        let a = rgb(0x2563eb);
        let b = rgb(0xffffff);
        assert_eq!(a.contrast_ratio(&b), b.contrast_ratio(&a));
    }
}
