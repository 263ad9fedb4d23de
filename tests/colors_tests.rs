//! Integration tests for palette interop, using palette's own conversions as a reference

mod common;
use common::*;

use color_value::ColorValue;
use palette::{FromColor, Hsl, Hsv, Srgb};

/// Angular distance between two hues in degrees
fn hue_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

#[test]
fn hsl_matches_palette() {
    for [r, g, b] in rgb_samples() {
        let ours: Hsl = Hsl::from(&ColorValue::from_rgb(r, g, b));
        let theirs: Hsl = Hsl::from_color(Srgb::new(r, g, b).into_format::<f32>());

        assert!(
            hue_distance(
                ours.hue.into_positive_degrees(),
                theirs.hue.into_positive_degrees()
            ) < 0.01
        );
        assert!((ours.saturation - theirs.saturation).abs() < 1e-3);
        assert!((ours.lightness - theirs.lightness).abs() < 1e-3);
    }
}

#[test]
fn hsv_matches_palette() {
    for [r, g, b] in rgb_samples() {
        let ours: Hsv = Hsv::from(&ColorValue::from_rgb(r, g, b));
        let theirs: Hsv = Hsv::from_color(Srgb::new(r, g, b).into_format::<f32>());

        assert!(
            hue_distance(
                ours.hue.into_positive_degrees(),
                theirs.hue.into_positive_degrees()
            ) < 0.01
        );
        assert!((ours.saturation - theirs.saturation).abs() < 1e-3);
        assert!((ours.value - theirs.value).abs() < 1e-3);
    }
}

#[test]
fn hsl_reconstruction_matches_palette() {
    for hue in (0..360).step_by(15) {
        for saturation in (0..=100).step_by(10) {
            for lightness in (0..=100).step_by(10) {
                let ours = color(&format!("hsl({hue}, {saturation}%, {lightness}%)")).rgb();
                let reference: Hsl = Hsl::new(
                    hue as f32,
                    saturation as f32 / 100.0,
                    lightness as f32 / 100.0,
                );
                let theirs: Srgb = Srgb::from_color(reference);
                let theirs: Srgb<u8> = theirs.into_format();

                assert!(
                    channels_within(ours, [theirs.red, theirs.green, theirs.blue], 1),
                    "hsl({hue}, {saturation}%, {lightness}%): {ours:?} vs {theirs:?}"
                );
            }
        }
    }
}

#[test]
fn hsv_reconstruction_matches_palette() {
    for hue in (0..360).step_by(15) {
        for saturation in (0..=100).step_by(10) {
            for value in (0..=100).step_by(10) {
                let ours = color(&format!("hsv({hue}, {saturation}%, {value}%)")).rgb();
                let reference: Hsv = Hsv::new(
                    hue as f32,
                    saturation as f32 / 100.0,
                    value as f32 / 100.0,
                );
                let theirs: Srgb = Srgb::from_color(reference);
                let theirs: Srgb<u8> = theirs.into_format();

                assert!(
                    channels_within(ours, [theirs.red, theirs.green, theirs.blue], 1),
                    "hsv({hue}, {saturation}%, {value}%): {ours:?} vs {theirs:?}"
                );
            }
        }
    }
}

#[test]
fn srgb_conversions() {
    let c = color("hsl(120, 100%, 25%)");

    let rounded = Srgb::<u8>::from(&c);
    assert_eq!(rounded, Srgb::new(0, 128, 0));

    let exact = Srgb::<f32>::from(&c);
    assert!((exact.green - 0.5).abs() < 1e-6);
    assert_eq!(exact.red, 0.0);

    let back = ColorValue::from(Srgb::new(0u8, 128, 0));
    assert_eq!(back.rgb(), [0, 128, 0]);
    assert_eq!(back.hex_triplet(), c.hex_triplet());
}
