//! Canonical color state and the RGB, HSL and HSV setters that build it.

use crate::convert::{
    HexTriplet, channel_to_unit, fraction_to_percent, hue_to_rgb, percent_to_fraction,
    rgb_to_hex_triplet,
};

/// One color held in four mutually consistent representations.
///
/// Built whole by [`Canonical::from_rgb`], [`Canonical::from_hsl`] or
/// [`Canonical::from_hsv`] and never updated field by field.
///
/// Triples are unrounded: hue in degrees, saturation, lightness and value in
/// percent, channels on the 8-bit scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Canonical {
    hex_triplet: HexTriplet,
    hsl: [f64; 3],
    hsv: [f64; 3],
    rgb: [f64; 3],
}

impl Canonical {
    /// Builds the state from 8-bit channels, which are stored unchanged.
    pub fn from_rgb(red: f64, green: f64, blue: f64) -> Self {
        let r = channel_to_unit(red);
        let g = channel_to_unit(green);
        let b = channel_to_unit(blue);

        let value = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = value - min;
        let lightness = value - chroma / 2.0;

        let mut hue = if chroma == 0.0 {
            0.0
        } else if r == value {
            60.0 * ((g - b) / chroma)
        } else if g == value {
            60.0 * ((b - r) / chroma + 2.0)
        } else {
            60.0 * ((r - g) / chroma + 4.0)
        };
        if hue < 0.0 {
            hue += 360.0;
        }

        let value_saturation = if value == 0.0 { 0.0 } else { chroma / value };

        Self {
            hex_triplet: rgb_to_hex_triplet(red, green, blue),
            hsl: [
                hue,
                fraction_to_percent(lightness_saturation(value, lightness)),
                fraction_to_percent(lightness),
            ],
            hsv: [
                hue,
                fraction_to_percent(value_saturation),
                fraction_to_percent(value),
            ],
            rgb: [red, green, blue],
        }
    }

    /// Builds the state from hue, saturation % and lightness %, which are stored unchanged.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let s = percent_to_fraction(saturation);
        let l = percent_to_fraction(lightness);

        let value = l + s * l.min(1.0 - l);
        let value_saturation = if value == 0.0 {
            0.0
        } else {
            2.0 * (1.0 - l / value)
        };

        let chroma = 2.0 * (value - l);
        let rgb = hue_to_rgb(hue, chroma, value - chroma);

        Self {
            hex_triplet: rgb_to_hex_triplet(rgb[0], rgb[1], rgb[2]),
            hsl: [hue, saturation, lightness],
            hsv: [
                hue,
                fraction_to_percent(value_saturation),
                fraction_to_percent(value),
            ],
            rgb,
        }
    }

    /// Builds the state from hue, saturation % and value %.
    ///
    /// Reparametrizes to HSL and reuses [`Canonical::from_hsl`]; the HSV input
    /// is kept as given.
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        let v = percent_to_fraction(value);
        let lightness = v * (1.0 - percent_to_fraction(saturation) / 2.0);
        let hsl_saturation = lightness_saturation(v, lightness);

        Self {
            hsv: [hue, saturation, value],
            ..Self::from_hsl(
                hue,
                fraction_to_percent(hsl_saturation),
                fraction_to_percent(lightness),
            )
        }
    }

    /// Returns the hex triplet.
    pub fn hex_triplet(&self) -> HexTriplet {
        self.hex_triplet
    }

    /// Returns unrounded hue, saturation % and lightness %.
    pub fn hsl(&self) -> [f64; 3] {
        self.hsl
    }

    /// Returns unrounded hue, saturation % and value %.
    pub fn hsv(&self) -> [f64; 3] {
        self.hsv
    }

    /// Returns unrounded 8-bit channels.
    pub fn rgb(&self) -> [f64; 3] {
        self.rgb
    }
}

/// HSL saturation (fraction) for a given HSV value and HSL lightness.
fn lightness_saturation(value: f64, lightness: f64) -> f64 {
    if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (value - lightness) / lightness.min(1.0 - lightness)
    }
}
