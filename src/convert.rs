//! Scalar color math: unit conversions, hue-sextant reconstruction, hex
//! formatting and WCAG luminance.
//!
//! Channels are on the 8-bit scale (0.0-255.0), saturation, lightness and
//! value are percentages (0.0-100.0) and hue is in degrees.

/// Luminance of pure white.
pub const WHITE_LUMINANCE: f64 = 1.0;

/// Luminance of pure black.
pub const BLACK_LUMINANCE: f64 = 0.0;

/// Scales an 8-bit channel to the unit interval.
#[inline]
pub fn channel_to_unit(channel: f64) -> f64 {
    channel / 255.0
}

/// Scales a unit-interval channel to 8 bits.
#[inline]
pub fn unit_to_channel(unit: f64) -> f64 {
    unit * 255.0
}

/// Converts a fraction (0.0-1.0) to a percentage.
#[inline]
pub fn fraction_to_percent(fraction: f64) -> f64 {
    fraction * 100.0
}

/// Converts a percentage to a fraction.
#[inline]
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}

/// Rounds an 8-bit channel to the nearest integer, saturating at 0 and 255.
#[inline]
pub fn round_channel(channel: f64) -> u8 {
    libm::round(channel) as u8
}

/// Reconstructs 8-bit RGB from a hue, a chroma and the minimum channel.
///
/// `chroma` and `minimum` are on the unit scale. The hue is split into six
/// 60° sextants; in each one channel is pinned to `chroma`, a second ramps
/// linearly between 0 and `chroma`, and the third is 0. `minimum` is then
/// added to all three. Hues outside 0-360 leave every raw channel at 0.
pub fn hue_to_rgb(hue: f64, chroma: f64, minimum: f64) -> [f64; 3] {
    let sextant = hue / 60.0;
    let ramp = chroma * (1.0 - libm::fabs(libm::fmod(sextant, 2.0) - 1.0));

    let (red, green, blue) = if !(0.0..=6.0).contains(&sextant) {
        (0.0, 0.0, 0.0)
    } else if sextant <= 1.0 {
        (chroma, ramp, 0.0)
    } else if sextant <= 2.0 {
        (ramp, chroma, 0.0)
    } else if sextant <= 3.0 {
        (0.0, chroma, ramp)
    } else if sextant <= 4.0 {
        (0.0, ramp, chroma)
    } else if sextant <= 5.0 {
        (ramp, 0.0, chroma)
    } else {
        (chroma, 0.0, ramp)
    };

    [
        unit_to_channel(red + minimum),
        unit_to_channel(green + minimum),
        unit_to_channel(blue + minimum),
    ]
}

/// Six hex digits of an RGB color, without the leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HexTriplet(pub [u8; 3]);

impl core::fmt::Display for HexTriplet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [red, green, blue] = self.0;
        write!(f, "{:02x}{:02x}{:02x}", red, green, blue)
    }
}

/// Rounds each channel and packs it into a hex triplet.
pub fn rgb_to_hex_triplet(red: f64, green: f64, blue: f64) -> HexTriplet {
    HexTriplet([
        round_channel(red),
        round_channel(green),
        round_channel(blue),
    ])
}

/// Linearizes one sRGB channel with the WCAG 2.0 transfer function.
#[inline]
fn linearize(unit: f64) -> f64 {
    if unit <= 0.03928 {
        unit / 12.92
    } else {
        libm::pow((unit + 0.055) / 1.055, 2.4)
    }
}

/// WCAG relative luminance of an 8-bit RGB color.
pub fn relative_luminance(red: f64, green: f64, blue: f64) -> f64 {
    0.2126 * linearize(channel_to_unit(red))
        + 0.7152 * linearize(channel_to_unit(green))
        + 0.0722 * linearize(channel_to_unit(blue))
}

/// WCAG contrast ratio of `lighter` against `darker`.
///
/// Not symmetric: pass the luminances in the order being compared.
#[inline]
pub fn contrast_ratio(lighter: f64, darker: f64) -> f64 {
    (lighter + 0.05) / (darker + 0.05)
}

/// True when a color of this luminance contrasts no more against white than against black.
pub fn is_light_luminance(luminance: f64) -> bool {
    let against_white = contrast_ratio(WHITE_LUMINANCE, luminance);
    let against_black = contrast_ratio(luminance, BLACK_LUMINANCE);
    against_white <= against_black
}
