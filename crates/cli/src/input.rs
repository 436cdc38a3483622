//! Resolves the color given on the command line.
//!
//! A color arrives either as positional numbers or as a `--json-color` value
//! (a JSON object read with the missing-is-zero rule, or a JSON array of
//! numbers). Giving both is an input error.

use crate::error::CliError;
use color_prism_core::{degrees_to_rad, params, ColorError, Rgb};
use serde_json::Value;

/// A color as supplied by the user, before it is interpreted in any space.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    Components(Vec<f64>),
    Object(Value),
}

impl ColorInput {
    /// Picks the color source from positional components and an optional JSON string.
    pub fn resolve(components: Vec<f64>, json_color: Option<&str>) -> Result<Self, CliError> {
        let Some(raw) = json_color else {
            return Ok(ColorInput::Components(components));
        };
        if !components.is_empty() {
            return Err(CliError::Input(
                "give either positional components or --json-color, not both".to_string(),
            ));
        }
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| CliError::Input(format!("invalid --json-color JSON: {e}")))?;
        if value.is_array() {
            return params::components(&value)
                .map(ColorInput::Components)
                .ok_or_else(|| {
                    CliError::Input("--json-color array must contain only numbers".to_string())
                });
        }
        Ok(ColorInput::Object(value))
    }

    /// Reinterprets the hue (first component, or the `h` field) from degrees to radians.
    pub fn hue_from_degrees(self) -> Self {
        match self {
            ColorInput::Components(mut c) => {
                if let Some(h) = c.first_mut() {
                    *h = degrees_to_rad(*h);
                }
                ColorInput::Components(c)
            }
            ColorInput::Object(mut v) => {
                let h = v.get("h").and_then(Value::as_f64);
                if let (Some(h), Some(obj)) = (h, v.as_object_mut()) {
                    obj.insert("h".to_string(), Value::from(degrees_to_rad(h)));
                }
                ColorInput::Object(v)
            }
        }
    }

    /// Reads the input as an RGB color.
    pub fn to_rgb(&self) -> Result<Rgb, ColorError> {
        match self {
            ColorInput::Components(c) => match c.as_slice() {
                &[r, g, b] => Ok(Rgb::new(r, g, b)),
                other => Err(ColorError::InvalidInput(format!(
                    "expected 3 components, got {}",
                    other.len()
                ))),
            },
            ColorInput::Object(v) => Ok(Rgb::from_value(v)),
        }
    }
}
