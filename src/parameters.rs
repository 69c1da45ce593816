//! # Model parameters
//!
//! The fitted model has nine parameters, always handled in the fixed order
//! expected by the sampling engine and by downstream posterior tooling.

use crate::constants::{KmPerSec, Radian};

/// Number of fitted model parameters
pub const N_PARAMETERS: usize = 9;

/// Canonical parameter names, in cube order, persisted for downstream
/// posterior tooling.
pub const PARAMETER_NAMES: [&str; N_PARAMETERS] = [
    "l", "b", "vtravel", "vr", "vphi", "vth", "sigvlos", "sigmul", "sigmub",
];

/// One hypothesis of the reflex model, built fresh from a transformed
/// hypercube for every likelihood evaluation and never mutated afterwards.
///
/// The three `sig_*` terms are additive variance terms plugged directly into
/// the likelihood covariances. The historical naming suggests inverse
/// variances; the usage here preserves the exact algebra of the likelihood
/// formulas rather than the naming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    /// Apex galactic longitude (radians)
    pub l_apex: Radian,
    /// Cosine of the apex latitude, in [-1, 1]
    pub cos_b_apex: f64,
    /// Travel speed toward the apex (km/s, non-negative)
    pub v_travel: KmPerSec,
    /// Bulk radial velocity (km/s)
    pub v_r: KmPerSec,
    /// Bulk azimuthal velocity (km/s)
    pub v_phi: KmPerSec,
    /// Bulk polar velocity (km/s)
    pub v_theta: KmPerSec,
    /// Additive variance term for the line-of-sight likelihood
    pub sig_vlos: f64,
    /// Additive variance term for the proper motion in longitude
    pub sig_mul: f64,
    /// Additive variance term for the proper motion in latitude
    pub sig_mub: f64,
}

impl ModelParameters {
    /// Read a parameter vector out of an already-transformed hypercube.
    ///
    /// The cube must hold physical values, i.e. the output of
    /// [`crate::prior::transform`].
    pub fn from_cube(cube: &[f64; N_PARAMETERS]) -> Self {
        Self {
            l_apex: cube[0],
            cos_b_apex: cube[1],
            v_travel: cube[2],
            v_r: cube[3],
            v_phi: cube[4],
            v_theta: cube[5],
            sig_vlos: cube[6],
            sig_mul: cube[7],
            sig_mub: cube[8],
        }
    }
}
