//! Color value types: `Rgb`, `Hsl` and `Cmyk`.
//!
//! All three are plain `Copy` records over `f64`. Nominal ranges are
//! documented per type but never enforced: out-of-range values pass through
//! every constructor and conversion untouched.
//!
//! Each type can be built three ways: from components (`new`), by copying
//! fields from a loosely-typed JSON object (`from_value`, where anything
//! missing reads as 0), or by converting from another color space (`From`).

use crate::convert::{cmyk_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hsl};
use crate::params::component;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// RGB color with channels nominally in [0, 255].
///
/// Deserializing fills absent fields with 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// HSL color. `h` is in radians, nominally [0, 2π); `s` and `l` in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// CMYK color with every channel nominally in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Copies `r`, `g`, `b` from a JSON object. Missing or non-numeric fields become 0.
    pub fn from_value(value: &Value) -> Self {
        Self {
            r: component(value, "r"),
            g: component(value, "g"),
            b: component(value, "b"),
        }
    }

    /// Maps the 0–255 domain onto 0–1 by dividing every channel by 255.
    pub fn normalize(self) -> Self {
        Self {
            r: self.r / 255.0,
            g: self.g / 255.0,
            b: self.b / 255.0,
        }
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Copies `h`, `s`, `l` from a JSON object. Missing or non-numeric fields become 0.
    pub fn from_value(value: &Value) -> Self {
        Self {
            h: component(value, "h"),
            s: component(value, "s"),
            l: component(value, "l"),
        }
    }
}

impl Cmyk {
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Copies `c`, `m`, `y`, `k` from a JSON object. Missing or non-numeric fields become 0.
    pub fn from_value(value: &Value) -> Self {
        Self {
            c: component(value, "c"),
            m: component(value, "m"),
            y: component(value, "y"),
            k: component(value, "k"),
        }
    }
}

impl From<Cmyk> for Rgb {
    fn from(value: Cmyk) -> Self {
        cmyk_to_rgb(value)
    }
}

impl From<Hsl> for Rgb {
    fn from(value: Hsl) -> Self {
        hsl_to_rgb(value)
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        rgb_to_hsl(value)
    }
}

impl From<Rgb> for Cmyk {
    fn from(value: Rgb) -> Self {
        rgb_to_cmyk(value)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}, {})", self.h, self.s, self.l)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({}, {}, {}, {})", self.c, self.m, self.y, self.k)
    }
}
