//! # Constants and type definitions for Reflexfit
//!
//! This module centralizes the **physical constants**, **conversion factors**
//! and **common type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Solar position and motion in the galactocentric frame
//! - Proper-motion unit conversion
//! - Sentinel value substituted for non-finite likelihood totals
//! - Core type aliases shared by the forward model and the likelihood

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Conversion factor between km/s at 1 kpc and mas/yr.
///
/// A tangential velocity of `PM_FACTOR` km/s at a distance of 1 kpc
/// corresponds to a proper motion of 1 mas/yr, so angular velocities are
/// converted with `mu = v_tangential / (PM_FACTOR * distance)`.
pub const PM_FACTOR: f64 = 4.74057;

/// Solar velocity in the galactocentric cartesian frame (km/s)
pub const VSUN_MW: [f64; 3] = [11.1, 244.24, 7.25];

/// Solar position in the galactocentric cartesian frame (kpc)
pub const RSUN_MW: [f64; 3] = [-8.3, 0., 0.02];

/// Value substituted for the total log-likelihood whenever the running sum
/// becomes non-finite (singular proper-motion covariance, catastrophic
/// cancellation).
///
/// The sampling engine only consumes a plain scalar, so a finite replacement
/// is enough to keep it running. The historical value is kept as-is even
/// though it is near-zero rather than large-negative.
pub const SENTINEL_LOG_LIKELIHOOD: f64 = 1e-160;

/// Number of columns expected per catalog row
pub const CATALOG_COLUMNS: usize = 17;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in kiloparsec
pub type Kpc = f64;
/// Speed in km/s
pub type KmPerSec = f64;
/// Proper motion in milliarcseconds per year
pub type MasPerYear = f64;
