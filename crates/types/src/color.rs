//! Foundational color types used throughout cmap-maker.
//!
//! Rgb and ColorStop are the building blocks of every gradient in the
//! system. Channels are canonically 8-bit integers; conversions to
//! normalized floats, packed integers, and hex strings are explicit and
//! happen only at the boundary.

use serde::{Deserialize, Serialize};

/// RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from normalized [0, 1] channels, rounding to the nearest
    /// 8-bit value. Out-of-range inputs are clamped.
    pub fn from_normalized(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_from_normalized(r),
            g: channel_from_normalized(g),
            b: channel_from_normalized(b),
        }
    }

    pub fn to_normalized(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }

    /// Pack as 0xAARRGGBB with opaque alpha (the integer form used by
    /// the colormap file's constructor block).
    pub fn to_packed(&self) -> u32 {
        0xff00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpack from 0xAARRGGBB; the alpha byte is ignored.
    pub fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Lowercase `#rrggbb` form for display.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` or `rrggbb`. Returns None on any malformed input.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

fn channel_from_normalized(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Color stop for gradients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ColorStop {
    pub position: f64, // 0.0 to 1.0
    pub color: Rgb,
}

impl ColorStop {
    pub fn new(position: f64, color: Rgb) -> Self {
        Self { position, color }
    }
}
