//! # Travel velocity field
//!
//! In the apex-aligned frame the observer's travel motion appears as a
//! uniform velocity along −z. Projected on the local spherical basis of a
//! star at polar angle α this is a purely radial/polar field: every star
//! appears to move away from (or toward) the apex at the travel speed.

use nalgebra::Matrix3xX;

use crate::constants::KmPerSec;

/// Synthesize the travel velocity field in the rotated frame.
///
/// Arguments
/// ---------
/// * `v_travel`: travel speed shared by the whole batch (km/s).
/// * `rotated_coords`: 3×N spherical coordinates `(r, phi, theta)` of the
///   stars in the apex-aligned frame; only the polar-angle row is used.
///
/// Return
/// ------
/// * 3×N spherical velocity components `(vr, vphi, vtheta)` with
///   `vr = −v_travel · cos θ`, `vphi = 0` and `vtheta = +v_travel · sin θ`.
pub fn travel_field(v_travel: KmPerSec, rotated_coords: &Matrix3xX<f64>) -> Matrix3xX<f64> {
    Matrix3xX::from_fn(rotated_coords.ncols(), |i, j| {
        let theta = rotated_coords[(2, j)];
        match i {
            0 => -v_travel * theta.cos(),
            1 => 0.,
            2 => v_travel * theta.sin(),
            _ => unreachable!(),
        }
    })
}
