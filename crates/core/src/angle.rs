//! Angle helpers and the hue-sector boundaries in radians.
//!
//! Hue is carried in radians throughout this crate. The sector constants are
//! computed with the same expression as [`degrees_to_rad`] so that
//! `degrees_to_rad(120.0) == D120_RAD` holds bit for bit.

use serde::Serialize;
use std::f64::consts::PI;

const RAD_PER_DEGREE: f64 = PI / 180.0;

pub const D60_RAD: f64 = 60.0 * RAD_PER_DEGREE;
pub const D120_RAD: f64 = 120.0 * RAD_PER_DEGREE;
pub const D180_RAD: f64 = 180.0 * RAD_PER_DEGREE;
pub const D240_RAD: f64 = 240.0 * RAD_PER_DEGREE;
pub const D300_RAD: f64 = 300.0 * RAD_PER_DEGREE;
pub const D360_RAD: f64 = 360.0 * RAD_PER_DEGREE;

/// Converts an angle in degrees to radians.
pub fn degrees_to_rad(degrees: f64) -> f64 {
    degrees * RAD_PER_DEGREE
}

/// The six precomputed hue-sector angles, as one serializable collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Constants {
    pub d60_rad: f64,
    pub d120_rad: f64,
    pub d180_rad: f64,
    pub d240_rad: f64,
    pub d300_rad: f64,
    pub d360_rad: f64,
}

pub const CONSTANTS: Constants = Constants {
    d60_rad: D60_RAD,
    d120_rad: D120_RAD,
    d180_rad: D180_RAD,
    d240_rad: D240_RAD,
    d300_rad: D300_RAD,
    d360_rad: D360_RAD,
};
