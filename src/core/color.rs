//! Named colours and `#rrggbb` parsing, plus the immutable drawing styles
//! handed to the rasterizer.

use image::Rgb;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit in `{0}`")]
    InvalidHexDigit(String),
    #[error("hex colour must be exactly 6 digits, got `{0}`")]
    InvalidHexLength(String),
}

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
/// Default point interior.
pub const POINT_BLUE: Rgb<u8> = Rgb([142, 185, 255]);

/// Parse colour names or `#rrggbb`.  Falls back to hex parser on miss.
pub fn from_name(s: &str) -> Result<Rgb<u8>, ColorError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "black" => Ok(BLACK),
        "white" => Ok(WHITE),
        "red" => Ok(Rgb([255, 0, 0])),
        "green" => Ok(Rgb([0, 128, 0])),
        "blue" | "point" => Ok(POINT_BLUE),
        "yellow" => Ok(Rgb([255, 255, 0])),
        "orange" => Ok(Rgb([210, 135, 10])),
        "gray" | "grey" => Ok(Rgb([128, 128, 128])),
        _ => from_hex(s),
    }
}

pub fn from_hex(hex: &str) -> Result<Rgb<u8>, ColorError> {
    let h = hex.trim().trim_start_matches('#');
    if h.len() != 6 {
        return Err(ColorError::InvalidHexLength(hex.to_owned()));
    }
    if !h.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHexDigit(hex.to_owned()));
    }
    let byte = |s: Option<&str>| {
        s.and_then(|s| u8::from_str_radix(s, 16).ok())
            .ok_or_else(|| ColorError::InvalidHexDigit(hex.to_owned()))
    };
    Ok(Rgb([
        byte(h.get(..2))?,
        byte(h.get(2..4))?,
        byte(h.get(4..))?,
    ]))
}

/// Outline pen: colour + width in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    pub color: Rgb<u8>,
    pub width: u32,
}

impl Stroke {
    #[must_use]
    pub const fn hairline(color: Rgb<u8>) -> Self {
        Self { color, width: 1 }
    }
}

/// Filled, bordered marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointStyle {
    pub fill: Rgb<u8>,
    pub border: Stroke,
}

/// Every style used for one image.  Passed by value; nothing is shared or
/// mutated between draw calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb<u8>,
    pub point: PointStyle,
    pub circle: Stroke,
    pub line: Stroke,
}

impl Palette {
    #[must_use]
    pub fn with_point_fill(mut self, fill: Rgb<u8>) -> Self {
        self.point.fill = fill;
        self
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: WHITE,
            point: PointStyle {
                fill: POINT_BLUE,
                border: Stroke::hairline(BLACK),
            },
            circle: Stroke::hairline(BLACK),
            line: Stroke::hairline(BLACK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(from_name(" Black "), Ok(BLACK));
        assert_eq!(from_name("BLUE"), Ok(POINT_BLUE));
    }

    #[test]
    fn hex_with_and_without_hash() {
        assert_eq!(from_name("#8eb9ff"), Ok(POINT_BLUE));
        assert_eq!(from_hex("102030"), Ok(Rgb([0x10, 0x20, 0x30])));
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert!(matches!(
            from_hex("#12345"),
            Err(ColorError::InvalidHexLength(_))
        ));
        assert!(matches!(
            from_hex("#12345g"),
            Err(ColorError::InvalidHexDigit(_))
        ));
        // multi-byte text must not panic on slicing
        assert!(from_hex("ééé").is_err());
        // `from_str_radix` alone would take these signs
        assert!(matches!(
            from_hex("+1+2+3"),
            Err(ColorError::InvalidHexDigit(_))
        ));
    }
}
