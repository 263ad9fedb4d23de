//! The parsed color value and its memoized derived properties.

use core::cell::OnceCell;
use core::fmt::Write;

use heapless::String;

use crate::convert::{is_light_luminance, relative_luminance, round_channel};
use crate::parse::{Notation, parse_notation};
use crate::space::Canonical;
use crate::types::{ParseColorError, Property, PropertyValue};

/// Capacity of formatted strings; fits `hsl(65535, 65535%, 65535%)`.
const TEXT_CAPACITY: usize = 32;

type Text = String<TEXT_CAPACITY>;

/// Types that can be built from a freshly parsed [`ColorValue`].
///
/// Lets [`ColorValue::create_as`] and [`ColorValue::text_color_as`] produce
/// related colors as a wrapping type.
pub trait ColorVariant: Sized {
    /// Wraps a color.
    fn from_color(color: ColorValue) -> Self;
}

impl ColorVariant for ColorValue {
    fn from_color(color: ColorValue) -> Self {
        color
    }
}

/// A color parsed from hex, `rgb()`, `hsl()` or `hsv()` notation.
///
/// Holds one [`Canonical`] state, fixed at construction. Derived properties
/// are computed on first access and cached; the cache makes the type `!Sync`,
/// so clone it to hand it to another thread.
#[derive(Debug, Clone)]
pub struct ColorValue {
    canonical: Canonical,
    hex_triplet: OnceCell<Option<Text>>,
    hsl: OnceCell<[u16; 3]>,
    hsl_string: OnceCell<Option<Text>>,
    hsv: OnceCell<[u16; 3]>,
    hsv_string: OnceCell<Option<Text>>,
    rgb: OnceCell<[u8; 3]>,
    rgb_string: OnceCell<Option<Text>>,
    is_light: OnceCell<bool>,
    text_color: OnceCell<Canonical>,
}

impl ColorValue {
    /// Parses a color.
    ///
    /// Full-width characters are folded to ASCII and anything outside
    /// `[0-9a-zA-Z(.%,)]` is ignored before matching. Components are not
    /// range-checked: `rgb(256, 0, 0)` keeps a red channel of 256 in its
    /// canonical state and reads back as `#ff0000`.
    ///
    /// # Errors
    /// * `InvalidColorFormat` - The text matches no supported notation
    pub fn new(text: &str) -> Result<Self, ParseColorError> {
        let canonical = match parse_notation(text)? {
            Notation::Rgb([r, g, b]) => Canonical::from_rgb(r, g, b),
            Notation::Hsl([h, s, l]) => Canonical::from_hsl(h, s, l),
            Notation::Hsv([h, s, v]) => Canonical::from_hsv(h, s, v),
        };
        Ok(Self::from_canonical(canonical))
    }

    /// Creates a color from 8-bit channels.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_canonical(Canonical::from_rgb(
            f64::from(red),
            f64::from(green),
            f64::from(blue),
        ))
    }

    /// Creates a color from hue degrees, saturation % and lightness %.
    ///
    /// Values are not range-checked; hues outside 0-360 reconstruct as grey.
    /// The canonical state keeps the values as given, while [`ColorValue::hsl`]
    /// and [`ColorValue::hsv`] saturate each rounded component to `0..=65535`
    /// and [`ColorValue::rgb`] saturates channels to `0..=255`.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::from_canonical(Canonical::from_hsl(hue, saturation, lightness))
    }

    /// Creates a color from hue degrees, saturation % and value %.
    ///
    /// Values are not range-checked and are saturated on output the same way
    /// as in [`ColorValue::from_hsl`].
    pub fn from_hsv(hue: f64, saturation: f64, value: f64) -> Self {
        Self::from_canonical(Canonical::from_hsv(hue, saturation, value))
    }

    /// Wraps an existing canonical state with an empty cache.
    pub fn from_canonical(canonical: Canonical) -> Self {
        Self {
            canonical,
            hex_triplet: OnceCell::new(),
            hsl: OnceCell::new(),
            hsl_string: OnceCell::new(),
            hsv: OnceCell::new(),
            hsv_string: OnceCell::new(),
            rgb: OnceCell::new(),
            rgb_string: OnceCell::new(),
            is_light: OnceCell::new(),
            text_color: OnceCell::new(),
        }
    }

    /// Parses another plain color.
    ///
    /// Same as `create_as::<ColorValue>`; the receiver only anchors the call.
    /// Use [`ColorValue::create_as`] to pick a wrapping type.
    ///
    /// # Errors
    /// * `InvalidColorFormat` - The text matches no supported notation
    pub fn create(&self, text: &str) -> Result<ColorValue, ParseColorError> {
        self.create_as::<ColorValue>(text)
    }

    /// Parses another color and wraps it as `V`.
    ///
    /// # Errors
    /// * `InvalidColorFormat` - The text matches no supported notation
    pub fn create_as<V: ColorVariant>(&self, text: &str) -> Result<V, ParseColorError> {
        ColorValue::new(text).map(V::from_color)
    }

    /// Returns the canonical state.
    pub fn canonical(&self) -> &Canonical {
        &self.canonical
    }

    /// Returns `#rrggbb` in lowercase.
    pub fn hex_triplet(&self) -> Option<&str> {
        self.hex_triplet
            .get_or_init(|| {
                let mut text = Text::new();
                write!(text, "#{}", self.canonical.hex_triplet()).ok()?;
                Some(text)
            })
            .as_deref()
    }

    /// Returns hue, saturation and lightness rounded to integers, saturated to `u16`.
    pub fn hsl(&self) -> [u16; 3] {
        *self.hsl.get_or_init(|| round_components(self.canonical.hsl()))
    }

    /// Returns `hsl(h, s%, l%)`.
    pub fn hsl_string(&self) -> Option<&str> {
        self.hsl_string
            .get_or_init(|| cylindrical_text("hsl", self.hsl()))
            .as_deref()
    }

    /// Returns hue, saturation and value rounded to integers, saturated to `u16`.
    pub fn hsv(&self) -> [u16; 3] {
        *self.hsv.get_or_init(|| round_components(self.canonical.hsv()))
    }

    /// Returns `hsv(h, s%, v%)`.
    pub fn hsv_string(&self) -> Option<&str> {
        self.hsv_string
            .get_or_init(|| cylindrical_text("hsv", self.hsv()))
            .as_deref()
    }

    /// Returns the 8-bit channels rounded to integers.
    pub fn rgb(&self) -> [u8; 3] {
        *self.rgb.get_or_init(|| self.canonical.rgb().map(round_channel))
    }

    /// Returns `rgb(r, g, b)`.
    pub fn rgb_string(&self) -> Option<&str> {
        self.rgb_string
            .get_or_init(|| {
                let [r, g, b] = self.rgb();
                let mut text = Text::new();
                write!(text, "rgb({}, {}, {})", r, g, b).ok()?;
                Some(text)
            })
            .as_deref()
    }

    /// Returns the WCAG relative luminance of the rounded channels.
    pub fn relative_luminance(&self) -> f64 {
        let [r, g, b] = self.rgb();
        relative_luminance(f64::from(r), f64::from(g), f64::from(b))
    }

    /// Returns true if the color contrasts no more against white than against black.
    pub fn is_light(&self) -> bool {
        *self
            .is_light
            .get_or_init(|| is_light_luminance(self.relative_luminance()))
    }

    /// Returns true if the color is not light.
    pub fn is_dark(&self) -> bool {
        !self.is_light()
    }

    /// Returns white for dark colors and black for light ones.
    pub fn text_color(&self) -> ColorValue {
        let canonical = *self.text_color.get_or_init(|| {
            let lightness = if self.is_dark() { 100.0 } else { 0.0 };
            Canonical::from_hsl(0.0, 0.0, lightness)
        });
        ColorValue::from_canonical(canonical)
    }

    /// Returns [`ColorValue::text_color`] wrapped as `V`.
    pub fn text_color_as<V: ColorVariant>(&self) -> V {
        V::from_color(self.text_color())
    }

    /// Computes a derived property by tag.
    ///
    /// Returns `None` only if the property could not be produced.
    pub fn property(&self, property: Property) -> Option<PropertyValue<'_>> {
        let value = match property {
            Property::HexTriplet => PropertyValue::Text(self.hex_triplet()?),
            Property::Hsl => PropertyValue::Components(self.hsl()),
            Property::HslString => PropertyValue::Text(self.hsl_string()?),
            Property::Hsv => PropertyValue::Components(self.hsv()),
            Property::HsvString => PropertyValue::Text(self.hsv_string()?),
            Property::Rgb => PropertyValue::Channels(self.rgb()),
            Property::RgbString => PropertyValue::Text(self.rgb_string()?),
            Property::IsLight => PropertyValue::Flag(self.is_light()),
            Property::IsDark => PropertyValue::Flag(self.is_dark()),
            Property::TextColor => PropertyValue::Color(self.text_color()),
        };
        Some(value)
    }

    /// Computes a derived property by accessor name, e.g. `"rgb_string"`.
    ///
    /// Returns `None` for unknown names.
    pub fn property_by_name(&self, name: &str) -> Option<PropertyValue<'_>> {
        self.property(Property::from_name(name)?)
    }
}

// `as` saturates, so negative components read as 0
fn round_components(components: [f64; 3]) -> [u16; 3] {
    components.map(|component| libm::round(component) as u16)
}

fn cylindrical_text(name: &str, [hue, first, second]: [u16; 3]) -> Option<Text> {
    let mut text = Text::new();
    write!(text, "{}({}, {}%, {}%)", name, hue, first, second).ok()?;
    Some(text)
}

impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl core::str::FromStr for ColorValue {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorValue::new(s)
    }
}

impl TryFrom<&str> for ColorValue {
    type Error = ParseColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ColorValue::new(value)
    }
}

impl core::fmt::Display for ColorValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.canonical.hex_triplet())
    }
}
