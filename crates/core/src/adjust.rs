//! Single-channel adjustment helpers.
//!
//! Each helper converts an RGB color into HSL or CMYK, overwrites exactly one
//! field with the given value, and converts back. The input is never mutated
//! and the new value is not range-checked.

use crate::color::{Cmyk, Hsl, Rgb};
use crate::convert::{cmyk_to_rgb, hsl_to_rgb, rgb_to_cmyk, rgb_to_hsl};
use crate::error::ColorError;

/// All channel names accepted by [`Channel::from_name`].
const CHANNEL_NAMES: &[&str] = &["hue", "saturation", "lighting", "cyan", "magenta", "yellow"];

fn with_hsl(rgb: Rgb, f: impl FnOnce(&mut Hsl)) -> Rgb {
    let mut hsl = rgb_to_hsl(rgb);
    f(&mut hsl);
    hsl_to_rgb(hsl)
}

fn with_cmyk(rgb: Rgb, f: impl FnOnce(&mut Cmyk)) -> Rgb {
    let mut cmyk = rgb_to_cmyk(rgb);
    f(&mut cmyk);
    cmyk_to_rgb(cmyk)
}

/// Replaces the hue (radians) of `rgb`.
pub fn hue(h: f64, rgb: Rgb) -> Rgb {
    with_hsl(rgb, |c| c.h = h)
}

/// Replaces the HSL saturation of `rgb`.
pub fn saturation(s: f64, rgb: Rgb) -> Rgb {
    with_hsl(rgb, |c| c.s = s)
}

/// Replaces the HSL lightness of `rgb`.
pub fn lighting(l: f64, rgb: Rgb) -> Rgb {
    with_hsl(rgb, |c| c.l = l)
}

/// Replaces the cyan ink of `rgb`.
pub fn cyan(c: f64, rgb: Rgb) -> Rgb {
    with_cmyk(rgb, |x| x.c = c)
}

/// Replaces the magenta ink of `rgb`.
pub fn magenta(m: f64, rgb: Rgb) -> Rgb {
    with_cmyk(rgb, |x| x.m = m)
}

/// Replaces the yellow ink of `rgb`.
pub fn yellow(y: f64, rgb: Rgb) -> Rgb {
    with_cmyk(rgb, |x| x.y = y)
}

/// An adjustable channel, for callers that pick one at runtime.
///
/// Use [`Channel::from_name`] for string-based construction (CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Hue,
    Saturation,
    Lighting,
    Cyan,
    Magenta,
    Yellow,
}

impl Channel {
    /// Looks up a channel by name.
    ///
    /// `"lightness"` is accepted as an alias for `"lighting"`. Returns
    /// `ColorError::UnknownChannel` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name {
            "hue" => Ok(Channel::Hue),
            "saturation" => Ok(Channel::Saturation),
            "lighting" | "lightness" => Ok(Channel::Lighting),
            "cyan" => Ok(Channel::Cyan),
            "magenta" => Ok(Channel::Magenta),
            "yellow" => Ok(Channel::Yellow),
            _ => Err(ColorError::UnknownChannel(name.to_string())),
        }
    }

    /// Returns a slice of all recognized channel names.
    pub fn list_names() -> &'static [&'static str] {
        CHANNEL_NAMES
    }

    /// Sets this channel of `rgb` to `value` and returns the resulting color.
    pub fn apply(self, value: f64, rgb: Rgb) -> Rgb {
        match self {
            Channel::Hue => hue(value, rgb),
            Channel::Saturation => saturation(value, rgb),
            Channel::Lighting => lighting(value, rgb),
            Channel::Cyan => cyan(value, rgb),
            Channel::Magenta => magenta(value, rgb),
            Channel::Yellow => yellow(value, rgb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::degrees_to_rad;

    const TOLERANCE: f64 = 0.001;

    fn assert_rgb_near(actual: Rgb, expected: Rgb) {
        assert!(
            (actual.r - expected.r).abs() < TOLERANCE
                && (actual.g - expected.g).abs() < TOLERANCE
                && (actual.b - expected.b).abs() < TOLERANCE,
            "expected {expected:?}, got {actual:?}"
        );
    }

    const RED: Rgb = Rgb::new(255.0, 0.0, 0.0);
    const GREEN: Rgb = Rgb::new(0.0, 255.0, 0.0);
    const BLUE: Rgb = Rgb::new(0.0, 0.0, 255.0);

    #[test]
    fn hue_replacement_is_independent_of_starting_hue() {
        let target = Rgb::new(136.0, 255.0, 0.0);
        let h = degrees_to_rad(88.0);
        assert_rgb_near(hue(h, RED), target);
        assert_rgb_near(hue(h, GREEN), target);
        assert_rgb_near(hue(h, BLUE), target);
    }

    #[test]
    fn saturation_of_red() {
        assert_rgb_near(saturation(0.6, RED), Rgb::new(204.0, 51.0, 51.0));
    }

    #[test]
    fn lighting_of_red() {
        assert_rgb_near(lighting(0.4, RED), Rgb::new(204.0, 0.0, 0.0));
    }

    #[test]
    fn cyan_of_red() {
        assert_rgb_near(cyan(0.4, RED), Rgb::new(153.0, 0.0, 0.0));
    }

    #[test]
    fn magenta_of_red() {
        assert_rgb_near(magenta(0.7, RED), Rgb::new(255.0, 76.5, 0.0));
    }

    #[test]
    fn yellow_of_red() {
        assert_rgb_near(yellow(0.1, RED), Rgb::new(255.0, 0.0, 229.5));
    }

    #[test]
    fn hue_on_gray_stays_gray() {
        // Zero saturation means hue has no visible effect.
        let gray = Rgb::new(100.0, 100.0, 100.0);
        assert_rgb_near(hue(degrees_to_rad(200.0), gray), gray);
    }

    #[test]
    fn cyan_on_black_stays_black() {
        assert_rgb_near(cyan(0.5, Rgb::default()), Rgb::default());
    }

    #[test]
    fn adjustment_does_not_mutate_input() {
        let original = RED;
        let _ = saturation(0.2, original);
        let _ = magenta(0.2, original);
        assert_eq!(original, Rgb::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn setting_current_value_is_identity() {
        let c = Rgb::new(30.0, 140.0, 200.0);
        let hsl = rgb_to_hsl(c);
        assert_rgb_near(lighting(hsl.l, c), c);
        assert_rgb_near(saturation(hsl.s, c), c);
        let cmyk = rgb_to_cmyk(c);
        assert_rgb_near(yellow(cmyk.y, c), c);
    }

    #[test]
    fn out_of_range_value_is_not_clamped() {
        // Lightness above 1 pushes channels past 255.
        let out = lighting(1.2, RED);
        assert!(out.g > 255.0, "expected unclamped channel, got {out:?}");
    }

    // -- Channel dispatch --

    #[test]
    fn channel_from_name_recognizes_all_listed_names() {
        for name in Channel::list_names() {
            assert!(Channel::from_name(name).is_ok(), "{name} not recognized");
        }
    }

    #[test]
    fn channel_from_name_accepts_lightness_alias() {
        assert_eq!(Channel::from_name("lightness").unwrap(), Channel::Lighting);
    }

    #[test]
    fn channel_from_name_rejects_unknown() {
        let err = Channel::from_name("alpha").unwrap_err();
        assert!(err.to_string().contains("alpha"));
    }

    #[test]
    fn channel_apply_matches_helpers() {
        assert_eq!(Channel::Hue.apply(1.0, RED), hue(1.0, RED));
        assert_eq!(Channel::Saturation.apply(0.3, RED), saturation(0.3, RED));
        assert_eq!(Channel::Lighting.apply(0.3, RED), lighting(0.3, RED));
        assert_eq!(Channel::Cyan.apply(0.3, RED), cyan(0.3, RED));
        assert_eq!(Channel::Magenta.apply(0.3, RED), magenta(0.3, RED));
        assert_eq!(Channel::Yellow.apply(0.3, RED), yellow(0.3, RED));
    }
}
