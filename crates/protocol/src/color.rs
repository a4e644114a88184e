use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A color value as it appears in a theme palette.
///
/// Palettes only ever hold the `#rrggbb` and `rgba(r, g, b, a)` forms, and
/// those are the only forms [`Color::from_str`] accepts. `HexAlpha` is produced
/// by [`Color::with_alpha`] and is output-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Hex { r: u8, g: u8, b: u8 },
    HexAlpha { r: u8, g: u8, b: u8, a: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

impl Color {
    /// Build a hex color from a packed `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self::Hex {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// Whether this color uses one of the two forms a palette may contain.
    pub const fn is_palette_form(self) -> bool {
        matches!(self, Self::Hex { .. } | Self::Rgba { .. })
    }

    /// Replace the alpha channel, keeping the color's notation.
    ///
    /// A hex color gains a two-digit alpha suffix, so `#3B82F6` with `0x20`
    /// prints as `#3B82F620`. An `rgba(...)` color gets `alpha / 255` as its
    /// fractional alpha instead of a suffix.
    pub fn with_alpha(self, alpha: u8) -> Self {
        match self {
            Self::Hex { r, g, b } | Self::HexAlpha { r, g, b, .. } => {
                Self::HexAlpha { r, g, b, a: alpha }
            }
            Self::Rgba { r, g, b, .. } => Self::Rgba {
                r,
                g,
                b,
                a: f32::from(alpha) / 255.0,
            },
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Hex { r, g, b } => write!(f, "#{r:02X}{g:02X}{b:02X}"),
            Self::HexAlpha { r, g, b, a } => write!(f, "#{r:02X}{g:02X}{b:02X}{a:02X}"),
            Self::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("unsupported color format: {0:?}")]
    Unsupported(String),
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
    #[error("invalid rgba component {component:?} in {input:?}")]
    InvalidComponent { input: String, component: String },
    #[error("alpha out of range in {0:?}")]
    AlphaOutOfRange(String),
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(digits) = s.strip_prefix('#') {
            return parse_hex(s, digits);
        }
        if let Some(body) = s.strip_prefix("rgba(").and_then(|rest| rest.strip_suffix(')')) {
            return parse_rgba(s, body);
        }
        Err(ParseColorError::Unsupported(s.to_string()))
    }
}

fn parse_hex(input: &str, digits: &str) -> Result<Color, ParseColorError> {
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHex(input.to_string()));
    }
    let rgb = u32::from_str_radix(digits, 16)
        .map_err(|_| ParseColorError::InvalidHex(input.to_string()))?;
    Ok(Color::hex(rgb))
}

fn parse_rgba(input: &str, body: &str) -> Result<Color, ParseColorError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let [r, g, b, a] = parts.as_slice() else {
        return Err(ParseColorError::Unsupported(input.to_string()));
    };

    let channel = |part: &str| {
        part.parse::<u8>()
            .map_err(|_| ParseColorError::InvalidComponent {
                input: input.to_string(),
                component: part.to_string(),
            })
    };
    let (r, g, b) = (channel(*r)?, channel(*g)?, channel(*b)?);

    let alpha: f32 = a.parse().map_err(|_| ParseColorError::InvalidComponent {
        input: input.to_string(),
        component: (*a).to_string(),
    })?;
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ParseColorError::AlphaOutOfRange(input.to_string()));
    }

    Ok(Color::rgba(r, g, b, alpha))
}

// --- Serde (string form) ---

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
