//! # Prior transform
//!
//! Deterministic, per-component monotonic map from the unit hypercube to the
//! physical parameter domain, applied in place exactly once per sampler draw.
//!
//! Ranges:
//!
//! | index | parameter    | range            | mapping              |
//! |-------|--------------|------------------|----------------------|
//! | 0     | `l_apex`     | (−π, π]          | affine               |
//! | 1     | `cos b_apex` | [−1, 1]          | affine               |
//! | 2     | `v_travel`   | [0, 150]         | affine               |
//! | 3–5   | bulk `v`     | [−250, 250]      | affine               |
//! | 6–8   | `sig_*`      | [1e-8, 1e-2]     | affine in the squared bounds |
//!
//! The nuisance mapping is `lo² + u·(hi² − lo²)` with `lo = 1e-4` and
//! `hi = 1e-1`: affine in the squared domain, kept exactly as-is rather than
//! replaced by a log-uniform prior.

use std::f64::consts::PI;

use crate::constants::DPI;
use crate::errors::ReflexError;
use crate::parameters::N_PARAMETERS;

/// Upper bound of the travel-speed prior (km/s)
pub const V_TRAVEL_MAX: f64 = 150.;

/// Half-width of the bulk-velocity priors (km/s)
pub const V_BULK_MAX: f64 = 250.;

/// Lower bound entering the squared nuisance prior
pub const SIG_LO: f64 = 1e-4;

/// Upper bound entering the squared nuisance prior
pub const SIG_HI: f64 = 1e-1;

/// Map a unit hypercube draw to the physical parameter domain, in place.
///
/// Every component is transformed independently and monotonically; outputs
/// always lie inside the documented bounds for inputs in `[0, 1)`.
///
/// Errors
/// ------
/// * [`ReflexError::HypercubeOutOfRange`] if any input coordinate falls
///   outside `[0, 1)`; the cube may be partially transformed in that case
///   and must be discarded.
pub fn transform(cube: &mut [f64; N_PARAMETERS]) -> Result<(), ReflexError> {
    for (index, &value) in cube.iter().enumerate() {
        if !(0. ..1.).contains(&value) {
            return Err(ReflexError::HypercubeOutOfRange { index, value });
        }
    }

    cube[0] = -PI + cube[0] * DPI;
    cube[1] = -1. + cube[1] * 2.;
    cube[2] = cube[2] * V_TRAVEL_MAX;
    cube[3] = -V_BULK_MAX + cube[3] * 2. * V_BULK_MAX;
    cube[4] = -V_BULK_MAX + cube[4] * 2. * V_BULK_MAX;
    cube[5] = -V_BULK_MAX + cube[5] * 2. * V_BULK_MAX;

    let sig_lo2 = SIG_LO * SIG_LO;
    let sig_hi2 = SIG_HI * SIG_HI;
    cube[6] = sig_lo2 + cube[6] * (sig_hi2 - sig_lo2);
    cube[7] = sig_lo2 + cube[7] * (sig_hi2 - sig_lo2);
    cube[8] = sig_lo2 + cube[8] * (sig_hi2 - sig_lo2);

    Ok(())
}

#[cfg(test)]
mod prior_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_midpoint_values() {
        let mut cube = [0.5; N_PARAMETERS];
        transform(&mut cube).unwrap();

        assert_relative_eq!(cube[0], 0., epsilon = 1e-15);
        assert_relative_eq!(cube[1], 0., epsilon = 1e-15);
        assert_relative_eq!(cube[2], 75., epsilon = 1e-12);
        assert_relative_eq!(cube[3], 0., epsilon = 1e-12);
        assert_relative_eq!(cube[4], 0., epsilon = 1e-12);
        assert_relative_eq!(cube[5], 0., epsilon = 1e-12);
        assert_relative_eq!(cube[6], 5.000005e-3, epsilon = 1e-15);
        assert_relative_eq!(cube[7], 5.000005e-3, epsilon = 1e-15);
        assert_relative_eq!(cube[8], 5.000005e-3, epsilon = 1e-15);
    }

    #[test]
    fn test_lower_edge() {
        let mut cube = [0.; N_PARAMETERS];
        transform(&mut cube).unwrap();

        assert_relative_eq!(cube[0], -PI, epsilon = 1e-15);
        assert_eq!(cube[1], -1.);
        assert_eq!(cube[2], 0.);
        assert_eq!(cube[3], -V_BULK_MAX);
        assert_relative_eq!(cube[6], SIG_LO * SIG_LO, epsilon = 1e-20);
    }

    #[test]
    fn test_rejects_out_of_range_input() {
        let mut cube = [0.5; N_PARAMETERS];
        cube[4] = 1.;
        assert_eq!(
            transform(&mut cube),
            Err(ReflexError::HypercubeOutOfRange { index: 4, value: 1. })
        );

        let mut cube = [0.5; N_PARAMETERS];
        cube[0] = -0.25;
        assert!(transform(&mut cube).is_err());
    }
}
