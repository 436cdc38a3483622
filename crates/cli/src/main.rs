#![deny(unsafe_code)]
//! CLI binary for color-prism.
//!
//! Subcommands:
//! - `convert <conversion> <components…>` — convert a color between spaces
//! - `adjust <channel> <value> <r> <g> <b>` — set one channel of an RGB color
//! - `constants` — print the hue-sector angles in radians
//! - `list` — print available conversions and channels

mod error;
mod input;

use clap::{Parser, Subcommand};
use color_prism_core::{degrees_to_rad, AnyColor, Channel, Conversion, CONSTANTS};
use error::CliError;
use input::ColorInput;
use std::process;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "color-prism", about = "RGB / HSL / CMYK color conversion CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Read and print hue in degrees instead of radians.
    #[arg(long, global = true)]
    degrees: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a color from one space to another.
    Convert {
        /// Conversion name (rgb-to-hsl, hsl-to-rgb, rgb-to-cmyk, cmyk-to-rgb).
        conversion: String,

        /// Input components in field order (r g b, h s l, or c m y k).
        #[arg(allow_negative_numbers = true)]
        components: Vec<f64>,

        /// Input color as a JSON object (missing fields read as 0) or array.
        #[arg(long)]
        json_color: Option<String>,
    },
    /// Set a single channel of an RGB color and print the result.
    Adjust {
        /// Channel name (hue, saturation, lighting, cyan, magenta, yellow).
        channel: String,

        /// New channel value.
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// RGB components (0..255).
        #[arg(allow_negative_numbers = true)]
        components: Vec<f64>,

        /// Input RGB color as a JSON object (missing fields read as 0) or array.
        #[arg(long)]
        json_color: Option<String>,
    },
    /// Print the hue-sector angle constants in radians.
    Constants,
    /// List available conversions and channels.
    List,
}

fn hue_to_degrees(color: AnyColor) -> AnyColor {
    match color {
        AnyColor::Hsl(mut hsl) => {
            hsl.h = hsl.h.to_degrees();
            AnyColor::Hsl(hsl)
        }
        other => other,
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let conversions = Conversion::list_names();
            let channels = Channel::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "conversions": conversions,
                    "channels": channels,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Conversions:");
                for name in conversions {
                    println!("  {name}");
                }
                println!("Channels:");
                println!("  {}", channels.join(", "));
            }
        }
        Command::Constants => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&CONSTANTS)?);
            } else {
                println!("d60_rad  = {}", CONSTANTS.d60_rad);
                println!("d120_rad = {}", CONSTANTS.d120_rad);
                println!("d180_rad = {}", CONSTANTS.d180_rad);
                println!("d240_rad = {}", CONSTANTS.d240_rad);
                println!("d300_rad = {}", CONSTANTS.d300_rad);
                println!("d360_rad = {}", CONSTANTS.d360_rad);
            }
        }
        Command::Convert {
            conversion,
            components,
            json_color,
        } => {
            let kind = Conversion::from_name(&conversion)?;
            let mut input = ColorInput::resolve(components, json_color.as_deref())?;
            if cli.degrees && kind == Conversion::HslToRgb {
                input = input.hue_from_degrees();
            }
            debug!(?kind, ?input, "converting");

            let mut output = match &input {
                ColorInput::Components(c) => kind.apply(c)?,
                ColorInput::Object(v) => kind.apply_value(v),
            };
            if cli.degrees {
                output = hue_to_degrees(output);
            }
            debug!(?output, "converted");

            if cli.json {
                let info = serde_json::json!({
                    "conversion": conversion,
                    "output": output,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{output}");
            }
        }
        Command::Adjust {
            channel,
            value,
            components,
            json_color,
        } => {
            let kind = Channel::from_name(&channel)?;
            let value = if cli.degrees && kind == Channel::Hue {
                degrees_to_rad(value)
            } else {
                value
            };
            let rgb = ColorInput::resolve(components, json_color.as_deref())?.to_rgb()?;
            debug!(?kind, value, ?rgb, "adjusting");

            let output = kind.apply(value, rgb);
            debug!(?output, "adjusted");

            if cli.json {
                let info = serde_json::json!({
                    "channel": channel,
                    "value": value,
                    "input": rgb,
                    "output": output,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{output}");
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
