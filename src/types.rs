//! Core types shared across the crate.

use crate::color::ColorValue;

/// Color parsing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseColorError {
    /// Input matched none of the supported notations.
    InvalidColorFormat,
}

impl core::fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseColorError::InvalidColorFormat => {
                write!(
                    f,
                    "invalid color format (expected hex, rgb(), hsl() or hsv() notation)"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseColorError {}

/// Derived properties a [`ColorValue`] can compute on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Property {
    /// `#rrggbb`.
    HexTriplet,
    /// Rounded hue, saturation and lightness.
    Hsl,
    /// `hsl(h, s%, l%)`.
    HslString,
    /// Rounded hue, saturation and value.
    Hsv,
    /// `hsv(h, s%, v%)`.
    HsvString,
    /// Rounded 8-bit channels.
    Rgb,
    /// `rgb(r, g, b)`.
    RgbString,
    /// Closer to white than to black.
    IsLight,
    /// Negation of `IsLight`.
    IsDark,
    /// Black or white, whichever contrasts more.
    TextColor,
}

impl Property {
    /// Every property, in declaration order.
    pub const ALL: [Property; 10] = [
        Property::HexTriplet,
        Property::Hsl,
        Property::HslString,
        Property::Hsv,
        Property::HsvString,
        Property::Rgb,
        Property::RgbString,
        Property::IsLight,
        Property::IsDark,
        Property::TextColor,
    ];

    /// Returns the property's accessor name, e.g. `"hsl_string"`.
    pub fn name(self) -> &'static str {
        match self {
            Property::HexTriplet => "hex_triplet",
            Property::Hsl => "hsl",
            Property::HslString => "hsl_string",
            Property::Hsv => "hsv",
            Property::HsvString => "hsv_string",
            Property::Rgb => "rgb",
            Property::RgbString => "rgb_string",
            Property::IsLight => "is_light",
            Property::IsDark => "is_dark",
            Property::TextColor => "text_color",
        }
    }

    /// Looks a property up by its accessor name.
    pub fn from_name(name: &str) -> Option<Property> {
        Property::ALL.into_iter().find(|property| property.name() == name)
    }
}

/// The value of a derived property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue<'a> {
    /// Formatted text (`HexTriplet`, `HslString`, `HsvString`, `RgbString`).
    Text(&'a str),
    /// Rounded hue/saturation/lightness-or-value (`Hsl`, `Hsv`).
    Components([u16; 3]),
    /// Rounded 8-bit channels (`Rgb`).
    Channels([u8; 3]),
    /// Classification (`IsLight`, `IsDark`).
    Flag(bool),
    /// A related color (`TextColor`).
    Color(ColorValue),
}
