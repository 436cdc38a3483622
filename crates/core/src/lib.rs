#![deny(unsafe_code)]
//! Color conversion between RGB, HSL and CMYK.
//!
//! Provides the color value types (`Rgb`, `Hsl`, `Cmyk`), pure conversion
//! functions between them, single-channel adjustment helpers built on those
//! conversions, and precomputed hue-sector angles in radians.

pub mod adjust;
pub mod angle;
pub mod color;
pub mod convert;
pub mod error;
pub mod params;

pub use adjust::{cyan, hue, lighting, magenta, saturation, yellow, Channel};
pub use angle::{degrees_to_rad, Constants, CONSTANTS};
pub use color::{Cmyk, Hsl, Rgb};
pub use convert::{cmyk_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hsl, AnyColor, Conversion};
pub use error::ColorError;
