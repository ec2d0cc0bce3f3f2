//! Color values and the resolver that turns markup color strings into them.

use crate::error::ColorError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Serializes as its `#RRGGBB` / `#AARRGGBB` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 0xff }
    }

    pub const fn from_argb(argb: u32) -> Self {
        Self {
            alpha: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha == 0xff
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.alpha, self.r, self.g, self.b
            )
        }
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DefaultColorResolver.resolve(s)
    }
}

/// Turns a markup color string into a color.
pub trait ColorResolver {
    fn resolve(&self, color: &str) -> Result<Rgb, ColorError>;
}

/// `#RRGGBB`, `#AARRGGBB`, or one of the named colors below (case-insensitive).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultColorResolver;

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF000000),
    ("darkgray", 0xFF444444),
    ("gray", 0xFF888888),
    ("lightgray", 0xFFCCCCCC),
    ("white", 0xFFFFFFFF),
    ("red", 0xFFFF0000),
    ("green", 0xFF00FF00),
    ("blue", 0xFF0000FF),
    ("yellow", 0xFFFFFF00),
    ("cyan", 0xFF00FFFF),
    ("magenta", 0xFFFF00FF),
    ("aqua", 0xFF00FFFF),
    ("fuchsia", 0xFFFF00FF),
    ("darkgrey", 0xFF444444),
    ("grey", 0xFF888888),
    ("lightgrey", 0xFFCCCCCC),
    ("lime", 0xFF00FF00),
    ("maroon", 0xFF800000),
    ("navy", 0xFF000080),
    ("olive", 0xFF808000),
    ("purple", 0xFF800080),
    ("silver", 0xFFC0C0C0),
    ("teal", 0xFF008080),
];

impl ColorResolver for DefaultColorResolver {
    fn resolve(&self, color: &str) -> Result<Rgb, ColorError> {
        if let Some(hex) = color.strip_prefix('#') {
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ColorError::Invalid(color.to_string()));
            }
            let value =
                u32::from_str_radix(hex, 16).map_err(|_| ColorError::Invalid(color.to_string()))?;
            return match hex.len() {
                6 => Ok(Rgb::from_argb(0xFF00_0000 | value)),
                8 => Ok(Rgb::from_argb(value)),
                _ => Err(ColorError::Invalid(color.to_string())),
            };
        }

        let lower = color.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, argb)| Rgb::from_argb(*argb))
            .ok_or_else(|| ColorError::Invalid(color.to_string()))
    }
}
