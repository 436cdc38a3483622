//! Error types for color-prism.
//!
//! Conversions themselves never fail; these errors come from name lookups and
//! from decoding caller-supplied input.

use thiserror::Error;

/// Errors produced while resolving names or decoding input.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A channel name did not match any adjustable channel.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    /// A conversion name did not match any known conversion.
    #[error("unknown conversion: {0}")]
    UnknownConversion(String),

    /// Input had the wrong shape (e.g. wrong number of components).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
