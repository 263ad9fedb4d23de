//! Input normalization and notation matching.
//!
//! Input is first folded from full-width to ASCII, then every character
//! outside `[0-9a-zA-Z(.%,)]` is dropped. The remainder is matched against,
//! in order: six hex digits, three hex digits, `hsl()`/`hsla()`,
//! `hsv()`/`hsva()` and `rgb()`/`rgba()`. The first match wins. Alpha is
//! accepted in the function forms and discarded.
//!
//! Matching runs over the filtered character stream, so input length is
//! unbounded and nothing is buffered.

use core::iter::Peekable;

use crate::types::ParseColorError;

/// A successfully matched notation with its components.
///
/// Components are whatever integers the input spelled; only hex input is
/// bounded (0-255).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notation {
    /// Hex triplet or `rgb()`, as 8-bit channels.
    Rgb([f64; 3]),
    /// `hsl()`: hue degrees, saturation %, lightness %.
    Hsl([f64; 3]),
    /// `hsv()`: hue degrees, saturation %, value %.
    Hsv([f64; 3]),
}

/// Parses a color in any supported notation.
///
/// # Errors
/// * `InvalidColorFormat` - No notation matched
pub fn parse_notation(text: &str) -> Result<Notation, ParseColorError> {
    match match_notation(text) {
        Some(notation) => Ok(notation),
        None => {
            #[cfg(feature = "defmt")]
            defmt::debug!("rejected color input ({=usize} bytes)", text.len());
            Err(ParseColorError::InvalidColorFormat)
        }
    }
}

/// Folds full-width characters to ASCII and yields only the color alphabet, as bytes.
fn normalized(text: &str) -> impl Iterator<Item = u8> + Clone + '_ {
    text.chars()
        .map(to_half_width)
        .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, '(' | '.' | '%' | ',' | ')'))
        .map(|c| c as u8)
}

fn to_half_width(c: char) -> char {
    match c {
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        '\u{3000}' => ' ',
        _ => c,
    }
}

fn match_notation(text: &str) -> Option<Notation> {
    let bytes = normalized(text);

    if let Some([r1, r2, g1, g2, b1, b2]) = hex_digits::<6>(bytes.clone()) {
        return Some(Notation::Rgb([
            f64::from((r1 << 4) | r2),
            f64::from((g1 << 4) | g2),
            f64::from((b1 << 4) | b2),
        ]));
    }
    if let Some([r, g, b]) = hex_digits::<3>(bytes.clone()) {
        // abc -> aabbcc
        return Some(Notation::Rgb([
            f64::from(r * 17),
            f64::from(g * 17),
            f64::from(b * 17),
        ]));
    }
    if let Some(components) = function(bytes.clone(), "hsl", true) {
        return Some(Notation::Hsl(components));
    }
    if let Some(components) = function(bytes.clone(), "hsv", true) {
        return Some(Notation::Hsv(components));
    }
    function(bytes, "rgb", false).map(Notation::Rgb)
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Exactly `N` hex digits and nothing else.
///
/// `#` never survives normalization, so the optional prefix needs no handling.
fn hex_digits<const N: usize>(mut bytes: impl Iterator<Item = u8>) -> Option<[u8; N]> {
    let mut digits = [0u8; N];
    for digit in &mut digits {
        *digit = nibble(bytes.next()?)?;
    }
    bytes.next().is_none().then_some(digits)
}

/// Matches `name` `a`? `(` INT `,` INT `%`? `,` INT `%`? (`,` NUM `%`?)? `)`.
///
/// Percent signs after the second and third components are only accepted
/// when `percentages` is set.
fn function(
    bytes: impl Iterator<Item = u8>,
    name: &str,
    percentages: bool,
) -> Option<[f64; 3]> {
    let mut cursor = Cursor::new(bytes);
    cursor.keyword(name)?;
    cursor.optional_ignore_case(b'a');
    cursor.expect(b'(')?;

    let first = cursor.integer()?;
    cursor.expect(b',')?;
    let second = cursor.integer()?;
    if percentages {
        cursor.optional(b'%');
    }
    cursor.expect(b',')?;
    let third = cursor.integer()?;
    if percentages {
        cursor.optional(b'%');
    }

    // alpha, discarded
    if cursor.optional(b',') {
        cursor.number()?;
        cursor.optional(b'%');
    }

    cursor.expect(b')')?;
    cursor.finish()?;
    Some([first, second, third])
}

struct Cursor<I: Iterator<Item = u8>> {
    bytes: Peekable<I>,
}

impl<I: Iterator<Item = u8>> Cursor<I> {
    fn new(bytes: I) -> Self {
        Self {
            bytes: bytes.peekable(),
        }
    }

    fn keyword(&mut self, word: &str) -> Option<()> {
        for expected in word.bytes() {
            self.bytes
                .next_if(|b| b.eq_ignore_ascii_case(&expected))?;
        }
        Some(())
    }

    fn expect(&mut self, byte: u8) -> Option<()> {
        self.optional(byte).then_some(())
    }

    fn optional(&mut self, byte: u8) -> bool {
        self.bytes.next_if_eq(&byte).is_some()
    }

    fn optional_ignore_case(&mut self, byte: u8) -> bool {
        self.bytes
            .next_if(|b| b.eq_ignore_ascii_case(&byte))
            .is_some()
    }

    /// Feeds one or more digits to `each`.
    fn digits(&mut self, mut each: impl FnMut(u8)) -> Option<()> {
        let mut count = 0usize;
        while let Some(digit) = self.bytes.next_if(u8::is_ascii_digit) {
            each(digit - b'0');
            count += 1;
        }
        (count > 0).then_some(())
    }

    /// One or more digits, accumulated as a float so no length overflows.
    fn integer(&mut self) -> Option<f64> {
        let mut value = 0.0;
        self.digits(|digit| value = value * 10.0 + f64::from(digit))?;
        Some(value)
    }

    /// Digits with an optional fractional part.
    fn number(&mut self) -> Option<()> {
        self.digits(|_| ())?;
        if self.optional(b'.') {
            self.digits(|_| ())?;
        }
        Some(())
    }

    fn finish(mut self) -> Option<()> {
        self.bytes.next().is_none().then_some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_strips_separators_and_folds_full_width() {
        assert!(normalized("ｒｇｂ（10, 20,\t30）").eq(b"rgb(10,20,30)".iter().copied()));
        assert!(normalized("#ab c").eq(b"abc".iter().copied()));
    }

    #[test]
    fn hex_forms() {
        assert_eq!(
            parse_notation("#00ff7F"),
            Ok(Notation::Rgb([0.0, 255.0, 127.0]))
        );
        assert_eq!(
            parse_notation("abc"),
            Ok(Notation::Rgb([170.0, 187.0, 204.0]))
        );
        assert_eq!(
            parse_notation("#abcdeg"),
            Err(ParseColorError::InvalidColorFormat)
        );
        assert!(parse_notation("#abcd").is_err());
    }

    #[test]
    fn hsl_and_hsv_forms() {
        assert_eq!(
            parse_notation("hsl(210, 50%, 40%)"),
            Ok(Notation::Hsl([210.0, 50.0, 40.0]))
        );
        assert_eq!(
            parse_notation("HSLA(210,50,40,0.25)"),
            Ok(Notation::Hsl([210.0, 50.0, 40.0]))
        );
        assert_eq!(
            parse_notation("hsv(10, 20%, 30%, 50%)"),
            Ok(Notation::Hsv([10.0, 20.0, 30.0]))
        );
    }

    #[test]
    fn rgb_forms() {
        assert_eq!(
            parse_notation("rgba(10, 20, 30, 0.5)"),
            Ok(Notation::Rgb([10.0, 20.0, 30.0]))
        );
        assert_eq!(
            parse_notation("RGB(10,20,30)"),
            Ok(Notation::Rgb([10.0, 20.0, 30.0]))
        );
        // channels never take percent signs
        assert!(parse_notation("rgb(10%,20,30)").is_err());
    }

    #[test]
    fn decimals_only_allowed_in_alpha() {
        assert!(parse_notation("hsl(10.5,20%,30%)").is_err());
        assert!(parse_notation("rgb(1,2,3,0.)").is_err());
    }

    #[test]
    fn components_beyond_natural_ranges_still_match() {
        assert_eq!(
            parse_notation("rgb(256,0,0)"),
            Ok(Notation::Rgb([256.0, 0.0, 0.0]))
        );
        assert_eq!(
            parse_notation("hsl(400,50%,50%)"),
            Ok(Notation::Hsl([400.0, 50.0, 50.0]))
        );
        assert_eq!(
            parse_notation("hsv(0,150%,50%)"),
            Ok(Notation::Hsv([0.0, 150.0, 50.0]))
        );
        assert_eq!(
            parse_notation("rgb(99999999999,0,0)"),
            Ok(Notation::Rgb([99_999_999_999.0, 0.0, 0.0]))
        );
    }

    #[test]
    fn long_input_is_matched_without_a_length_cap() {
        let alpha = "rgba(10,20,30,0.55555555555555555555555555555555555555555555555555555555555555)";
        assert!(alpha.len() > 64);
        assert_eq!(parse_notation(alpha), Ok(Notation::Rgb([10.0, 20.0, 30.0])));

        let padded = "rgb(000000000000000000000000000000000000000000000000000000000000000010,20,30)";
        assert!(padded.len() > 64);
        assert_eq!(parse_notation(padded), Ok(Notation::Rgb([10.0, 20.0, 30.0])));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_notation("").is_err());
        assert!(parse_notation("not-a-color").is_err());
        assert!(parse_notation("hsl(1,2,3").is_err());
        assert!(parse_notation("hsl(1,2,3))").is_err());
    }
}
