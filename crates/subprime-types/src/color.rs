use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// 24-bit colour carried by content (`#RRGGBB` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend toward white; `alpha` is the weight of this colour (0.0..=1.0).
    ///
    /// Terminals have no transparency, so the translucent row and band fills
    /// of the dashboard are approximated against a white page.
    pub fn tint(self, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |c: u8| -> u8 {
            let v = f32::from(c) * alpha + 255.0 * (1.0 - alpha);
            v.round() as u8
        };
        Rgb::new(mix(self.r), mix(self.g), mix(self.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| Error::InvalidColor(s.to_string()))?;

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };

        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_hex() {
        let c: Rgb = "#F57C00".parse().unwrap();
        assert_eq!(c, Rgb::new(0xF5, 0x7C, 0x00));
        assert_eq!(c.to_string(), "#F57C00");
    }

    #[test]
    fn rejects_malformed_literals() {
        assert_eq!(
            "F57C00".parse::<Rgb>(),
            Err(Error::InvalidColor("F57C00".to_string()))
        );
        assert!("#F57C0".parse::<Rgb>().is_err());
        assert!("#GGGGGG".parse::<Rgb>().is_err());
    }

    #[test]
    fn tint_moves_toward_white() {
        let c = Rgb::new(0, 100, 255);
        assert_eq!(c.tint(1.0), c);
        assert_eq!(c.tint(0.0), Rgb::new(255, 255, 255));
        assert_eq!(c.tint(0.2), Rgb::new(204, 224, 255));
    }
}
