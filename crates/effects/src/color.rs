//! Vertex colors.

/// A linear RGBA color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub a: f32,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a copy of this color with the specified alpha value.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Creates a color from HSV values.
    ///
    /// `h` is a hue in turns and wraps, so `0.0`, `1.0` and `2.0` are all red.
    /// `s` and `v` are clamped to `[0, 1]`.
    pub fn from_hsv(h: f32, s: f32, v: f32, a: f32) -> Self {
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        if s == 0.0 {
            return Self::rgba(v, v, v, a);
        }

        let h = h.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Self::rgba(r, g, b, a)
    }

    /// Converts to 8-bit channels, rounding and clamping.
    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Rgba, b: Rgba) -> bool {
        [a.r - b.r, a.g - b.g, a.b - b.b, a.a - b.a]
            .iter()
            .all(|d| d.abs() < 1e-5)
    }

    #[test]
    fn test_hsv_primaries() {
        assert!(approx(Rgba::from_hsv(0.0, 1.0, 1.0, 1.0), Rgba::rgb(1.0, 0.0, 0.0)));
        assert!(approx(
            Rgba::from_hsv(1.0 / 3.0, 1.0, 1.0, 1.0),
            Rgba::rgb(0.0, 1.0, 0.0)
        ));
        assert!(approx(
            Rgba::from_hsv(2.0 / 3.0, 1.0, 1.0, 1.0),
            Rgba::rgb(0.0, 0.0, 1.0)
        ));
    }

    #[test]
    fn test_hsv_hue_wraps() {
        assert!(approx(
            Rgba::from_hsv(1.25, 1.0, 1.0, 1.0),
            Rgba::from_hsv(0.25, 1.0, 1.0, 1.0)
        ));
        assert!(approx(
            Rgba::from_hsv(-0.5, 1.0, 1.0, 1.0),
            Rgba::from_hsv(0.5, 1.0, 1.0, 1.0)
        ));
    }

    #[test]
    fn test_hsv_gray() {
        assert!(approx(Rgba::from_hsv(0.7, 0.0, 0.5, 0.3), Rgba::rgba(0.5, 0.5, 0.5, 0.3)));
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Rgba::rgba(1.0, 0.5, 0.0, 2.0).to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(Rgba::WHITE.with_alpha(0.0).to_rgba8(), [255, 255, 255, 0]);
    }
}
