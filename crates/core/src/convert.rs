//! Pure conversion functions between RGB, HSL and CMYK.
//!
//! RGB is in the 0–255 domain on both ends; every conversion normalizes
//! internally. None of these functions clamp or validate their input.

use crate::angle::{D120_RAD, D180_RAD, D240_RAD, D300_RAD, D60_RAD};
use crate::color::{Cmyk, Hsl, Rgb};
use crate::error::ColorError;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// All conversion names accepted by [`Conversion::from_name`].
const CONVERSION_NAMES: &[&str] = &["rgb-to-hsl", "hsl-to-rgb", "rgb-to-cmyk", "cmyk-to-rgb"];

/// Converts RGB to HSL.
///
/// Hue is picked in r → g → b priority when channels tie for the maximum.
/// Achromatic input (`r == g == b`) yields `h = 0` and `s = 0`. The red-sector
/// modulo is Euclidean, so hue is never negative.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let n = c.normalize();

    let c_max = n.r.max(n.g).max(n.b);
    let c_min = n.r.min(n.g).min(n.b);
    let delta = c_max - c_min;

    let l = (c_max + c_min) / 2.0;

    let h = if delta == 0.0 {
        0.0
    } else if c_max == n.r {
        D60_RAD * ((n.g - n.b) / delta).rem_euclid(6.0)
    } else if c_max == n.g {
        D60_RAD * ((n.b - n.r) / delta + 2.0)
    } else {
        D60_RAD * ((n.r - n.g) / delta + 4.0)
    };

    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    Hsl { h, s, l }
}

/// Converts HSL (hue in radians) to RGB in the 0–255 domain.
///
/// Sector checks run in order with inclusive bounds, so a hue sitting exactly
/// on a boundary takes the earlier sector. Anything past 300°, including
/// negative or over-wrapped hues, falls through to the last sector.
pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let Hsl { h, s, l } = c;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - ((h / D60_RAD).rem_euclid(2.0) - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = if (0.0..=D60_RAD).contains(&h) {
        (chroma, x, 0.0)
    } else if (D60_RAD..=D120_RAD).contains(&h) {
        (x, chroma, 0.0)
    } else if (D120_RAD..=D180_RAD).contains(&h) {
        (0.0, chroma, x)
    } else if (D180_RAD..=D240_RAD).contains(&h) {
        (0.0, x, chroma)
    } else if (D240_RAD..=D300_RAD).contains(&h) {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    Rgb {
        r: (r + m) * 255.0,
        g: (g + m) * 255.0,
        b: (b + m) * 255.0,
    }
}

/// Converts RGB to CMYK.
///
/// Pure black (`k == 1`) has no defined ink mix; it maps to `(0, 0, 0, 1)`
/// instead of dividing by zero.
pub fn rgb_to_cmyk(c: Rgb) -> Cmyk {
    let n = c.normalize();

    let k = 1.0 - n.r.max(n.g).max(n.b);
    let remaining = 1.0 - k;
    if remaining == 0.0 {
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k,
        };
    }

    Cmyk {
        c: (1.0 - n.r - k) / remaining,
        m: (1.0 - n.g - k) / remaining,
        y: (1.0 - n.b - k) / remaining,
        k,
    }
}

/// Converts CMYK to RGB in the 0–255 domain.
pub fn cmyk_to_rgb(c: Cmyk) -> Rgb {
    let remaining = 1.0 - c.k;
    Rgb {
        r: 255.0 * (1.0 - c.c) * remaining,
        g: 255.0 * (1.0 - c.m) * remaining,
        b: 255.0 * (1.0 - c.y) * remaining,
    }
}

/// A color value in any of the three supported spaces.
///
/// Serializes as the bare inner object (`{"r":…}`, `{"h":…}`, `{"c":…}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyColor {
    Rgb(Rgb),
    Hsl(Hsl),
    Cmyk(Cmyk),
}

impl fmt::Display for AnyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyColor::Rgb(c) => fmt::Display::fmt(c, f),
            AnyColor::Hsl(c) => fmt::Display::fmt(c, f),
            AnyColor::Cmyk(c) => fmt::Display::fmt(c, f),
        }
    }
}

/// A named conversion direction, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    RgbToHsl,
    HslToRgb,
    RgbToCmyk,
    CmykToRgb,
}

impl Conversion {
    /// Looks up a conversion by name (e.g. `"rgb-to-hsl"`).
    ///
    /// Returns `ColorError::UnknownConversion` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "rgb-to-hsl" => Ok(Conversion::RgbToHsl),
            "hsl-to-rgb" => Ok(Conversion::HslToRgb),
            "rgb-to-cmyk" => Ok(Conversion::RgbToCmyk),
            "cmyk-to-rgb" => Ok(Conversion::CmykToRgb),
            _ => Err(ColorError::UnknownConversion(name.to_string())),
        }
    }

    /// Returns a slice of all recognized conversion names.
    pub fn list_names() -> &'static [&'static str] {
        CONVERSION_NAMES
    }

    /// Number of input components this conversion expects.
    pub fn arity(self) -> usize {
        match self {
            Conversion::CmykToRgb => 4,
            _ => 3,
        }
    }

    /// Runs the conversion on positional components, in field order.
    ///
    /// Returns `ColorError::InvalidInput` if the component count does not
    /// match [`Conversion::arity`].
    pub fn apply(self, components: &[f64]) -> Result<AnyColor, ColorError> {
        match (self, components) {
            (Conversion::RgbToHsl, &[r, g, b]) => {
                Ok(AnyColor::Hsl(rgb_to_hsl(Rgb::new(r, g, b))))
            }
            (Conversion::HslToRgb, &[h, s, l]) => {
                Ok(AnyColor::Rgb(hsl_to_rgb(Hsl::new(h, s, l))))
            }
            (Conversion::RgbToCmyk, &[r, g, b]) => {
                Ok(AnyColor::Cmyk(rgb_to_cmyk(Rgb::new(r, g, b))))
            }
            (Conversion::CmykToRgb, &[c, m, y, k]) => {
                Ok(AnyColor::Rgb(cmyk_to_rgb(Cmyk::new(c, m, y, k))))
            }
            _ => Err(ColorError::InvalidInput(format!(
                "expected {} components, got {}",
                self.arity(),
                components.len()
            ))),
        }
    }

    /// Runs the conversion on a JSON object, reading fields with the
    /// missing-is-zero rule of the `from_value` constructors.
    pub fn apply_value(self, value: &Value) -> AnyColor {
        match self {
            Conversion::RgbToHsl => AnyColor::Hsl(rgb_to_hsl(Rgb::from_value(value))),
            Conversion::HslToRgb => AnyColor::Rgb(hsl_to_rgb(Hsl::from_value(value))),
            Conversion::RgbToCmyk => AnyColor::Cmyk(rgb_to_cmyk(Rgb::from_value(value))),
            Conversion::CmykToRgb => AnyColor::Rgb(cmyk_to_rgb(Cmyk::from_value(value))),
        }
    }
}
