//! Conversions between [`ColorValue`] and `palette` color types.
//!
//! `Srgb<u8>` carries the rounded channels. The float types carry the
//! unrounded canonical state rescaled to palette's 0.0-1.0 convention, so
//! nothing is lost to rounding on the way out.

use palette::{Hsl, Hsv, Srgb};

use crate::color::ColorValue;
use crate::convert::{channel_to_unit, percent_to_fraction};

impl From<&ColorValue> for Srgb<u8> {
    fn from(color: &ColorValue) -> Self {
        let [r, g, b] = color.rgb();
        Srgb::new(r, g, b)
    }
}

impl From<&ColorValue> for Srgb {
    fn from(color: &ColorValue) -> Self {
        let [r, g, b] = color.canonical().rgb().map(channel_to_unit);
        Srgb::new(r as f32, g as f32, b as f32)
    }
}

impl From<&ColorValue> for Hsl {
    fn from(color: &ColorValue) -> Self {
        let [h, s, l] = color.canonical().hsl();
        Hsl::new(
            h as f32,
            percent_to_fraction(s) as f32,
            percent_to_fraction(l) as f32,
        )
    }
}

impl From<&ColorValue> for Hsv {
    fn from(color: &ColorValue) -> Self {
        let [h, s, v] = color.canonical().hsv();
        Hsv::new(
            h as f32,
            percent_to_fraction(s) as f32,
            percent_to_fraction(v) as f32,
        )
    }
}

impl From<Srgb<u8>> for ColorValue {
    fn from(color: Srgb<u8>) -> Self {
        ColorValue::from_rgb(color.red, color.green, color.blue)
    }
}
