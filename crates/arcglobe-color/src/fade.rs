//! Progress-to-color mapping used to fade points and rings out over time.

use serde::{Deserialize, Serialize};

use crate::Rgb;

/// A fixed RGB color whose alpha fades linearly as `1 - t`.
///
/// The color is captured by value when the fade is created and never
/// recomputed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FadeColor {
    rgb: Rgb,
}

impl FadeColor {
    /// Create a fade function over the given color.
    pub const fn new(rgb: Rgb) -> Self {
        Self { rgb }
    }

    /// The captured color.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Alpha at progress `t`. `t` is clamped to `[0, 1]`; NaN reads as `0`.
    pub fn alpha(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        1.0 - t
    }

    /// Render the color at progress `t` as an `rgba(r,g,b,a)` string.
    pub fn at(&self, t: f64) -> String {
        let Rgb { r, g, b } = self.rgb;
        format!("rgba({r},{g},{b},{})", self.alpha(t))
    }
}

impl From<Rgb> for FadeColor {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb)
    }
}
