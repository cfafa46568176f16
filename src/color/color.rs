use std::fmt;

use anyhow::anyhow;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGBA color. Channels are kept as floats so that interpolated colors are only rounded when
/// they are formatted.
///
/// - `r`, `g`, `b`: 0.0 to 255.0.
/// - `a`: 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a,
        }
    }

    /// Parse a CSS color string: hex (`#rgb`, `#rrggbb`, with or without alpha), named colors
    /// such as "darkmagenta", `transparent`, and the `rgb()`, `rgba()`, `hsl()`, `hsla()`,
    /// `hwb()` functions.
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        csscolorparser::parse(input)
            .map(Color::from)
            .map_err(|err| anyhow!("Invalid color '{}': {}", input, err))
    }

    /// Linear interpolation in RGB space. `f == 0.0` gives `self`, `f == 1.0` gives `other`.
    pub fn mix(&self, other: &Color, f: f64) -> Color {
        Color {
            r: self.r + f * (other.r - self.r),
            g: self.g + f * (other.g - self.g),
            b: self.b + f * (other.b - self.b),
            a: self.a + f * (other.a - self.a),
        }
    }

    /// Hex representation, `#rrggbb` for opaque colors and `#rrggbbaa` otherwise.
    pub fn hex(&self) -> String {
        let r = round_channel(self.r);
        let g = round_channel(self.g);
        let b = round_channel(self.b);
        if self.a < 1.0 {
            let a = round_channel(self.a * 255.0);
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        } else {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        }
    }
}

impl From<csscolorparser::Color> for Color {
    fn from(color: csscolorparser::Color) -> Self {
        Self {
            r: color.r as f64 * 255.0,
            g: color.g as f64 * 255.0,
            b: color.b as f64 * 255.0,
            a: color.a as f64,
        }
    }
}

fn round_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

impl std::str::FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Color::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Color::parse(&value).map_err(serde::de::Error::custom)
    }
}
