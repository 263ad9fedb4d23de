#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorValue`**: A color parsed from text, with derived representations computed on demand
//! - **`Canonical`**: The hex, HSL, HSV and RGB forms of one color, always mutually consistent
//! - **`Notation`**: Which input form matched and its components as spelled, unclamped
//! - **`Property`** / **`PropertyValue`**: Tag-based access to every derived property
//! - **`ColorVariant`**: Trait for wrapping types produced by `create_as` and `text_color_as`
//! - **`ParseColorError`**: The single failure mode, `InvalidColorFormat`
//!
//! Canonical state is `f64`: hue in degrees, saturation, lightness and value in
//! percent, channels on the 8-bit scale. Accessors round to integers.

// Re-export palette color types for user convenience
pub use palette::{Hsl, Hsv, Srgb};

pub mod color;
pub mod colors;
pub mod convert;
pub mod parse;
pub mod space;
pub mod types;

pub use color::{ColorValue, ColorVariant};
pub use convert::HexTriplet;
pub use parse::{Notation, parse_notation};
pub use space::Canonical;
pub use types::{ParseColorError, Property, PropertyValue};

/// Input that parses to pure white.
pub const WHITE: &str = "hsl(0, 0%, 100%)";

/// Input that parses to pure black.
pub const BLACK: &str = "hsl(0, 0%, 0%)";
