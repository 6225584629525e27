//! Hex color parsing and time-parameterized fade colors.
//!
//! [`hex_to_rgb`] turns `#rrggbb` / `#rgb` strings into an [`Rgb`] triple, and
//! [`FadeColor`] captures that triple by value so a renderer can sample an
//! `rgba(...)` string at any animation progress `t`.

mod fade;
mod rgb;

pub use fade::FadeColor;
pub use rgb::{ColorError, Rgb, hex_to_rgb};
