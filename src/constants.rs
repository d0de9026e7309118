//! # Constants and type definitions for orbframe
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `orbframe` library.
//!
//! ## Overview
//!
//! - The obliquity constant defining the ecliptic target frame
//! - Unit conversions (degrees ↔ radians)
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Earth's mean obliquity of the ecliptic in degrees (J2000).
///
/// The ecliptic frame targeted by the conversion is tilted by this fixed angle with respect
/// to the equatorial frame; precession and nutation are outside the scope of this crate.
pub const OBLIQUITY: Degree = 23.4392911;

/// Numerical epsilon for detecting degenerate rotation geometry.
///
/// Applied to `1 - |m₂₂|` when extracting Euler angles: below this cutoff the z-x-z
/// decomposition is no longer unique and the documented tie-break applies.
pub const EPS: f64 = 1e-12;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
