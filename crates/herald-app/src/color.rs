//! Hex color parsing
//!
//! Colors are cosmetic input: parsing is best-effort and never fails.
//! Malformed strings degrade to zero channels for the unparsed portion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color with implicit full opacity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from explicit channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-hex-digit string such as `"05A3FE"` into a color.
    ///
    /// Scanning is prefix-based: leading whitespace and an optional `0x`
    /// marker are skipped, then hex digits accumulate (saturating at
    /// `u64::MAX`) until the first non-hex character. The channels are the
    /// low three bytes of whatever value was scanned, so short or malformed
    /// input yields zeroed channels rather than an error. There is no alpha
    /// channel.
    pub fn from_hex(hex: &str) -> Self {
        let rest = hex.trim_start();
        let rest = rest
            .strip_prefix("0x")
            .or_else(|| rest.strip_prefix("0X"))
            .unwrap_or(rest);

        let mut value: u64 = 0;
        for c in rest.chars() {
            match c.to_digit(16) {
                Some(digit) => {
                    value = value.saturating_mul(16).saturating_add(u64::from(digit));
                }
                None => break,
            }
        }

        Self {
            r: ((value & 0xff_0000) >> 16) as u8,
            g: ((value & 0x00_ff00) >> 8) as u8,
            b: (value & 0x00_00ff) as u8,
        }
    }

    /// Scale all channels by `factor` in `[0, 1]`, darkening toward black.
    ///
    /// Used by frontends to fake partial opacity on terminals that have no
    /// alpha blending.
    pub fn scaled(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            r: (f32::from(self.r) * factor).round() as u8,
            g: (f32::from(self.g) * factor).round() as u8,
            b: (f32::from(self.b) * factor).round() as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
