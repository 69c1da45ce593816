//! # Batched cartesian ↔ spherical conversions
//!
//! All conversions operate on structure-of-arrays batches: a
//! [`Matrix3xX`] holds one star per column, with cartesian rows `(x, y, z)`
//! or spherical rows `(r, phi, theta)`.
//!
//! ## Conventions
//!
//! - `phi` is the azimuthal angle, `atan2(y, x)`, in `(-π, π]`
//! - `theta` is the polar angle, `acos(z/r)`, in `[0, π]`
//! - velocity rows follow the same ordering: `(vr, vphi, vtheta)`
//!
//! ## Preconditions
//!
//! The spherical basis is degenerate at the coordinate origin (`r = 0`) and
//! on the polar axis (`sin θ = 0`). Callers must keep stars away from those
//! configurations; the conversions do not defend against them and NaN/Inf
//! propagate untouched.

use nalgebra::{Matrix3xX, Vector3};

use crate::constants::Radian;

/// Convert a batch of cartesian position/velocity pairs to spherical
/// coordinates and spherical velocity components.
///
/// Arguments
/// ---------
/// * `positions`: 3×N matrix with rows `(x, y, z)`, one star per column.
/// * `velocities`: 3×N matrix with rows `(vx, vy, vz)`.
///
/// Return
/// ------
/// * A pair of 3×N matrices: spherical coordinates with rows
///   `(r, phi, theta)` and spherical velocities with rows
///   `(vr, vphi, vtheta)`.
///
/// # See also
/// * [`spherical_to_cartesian`] – exact inverse of this conversion.
pub fn cartesian_to_spherical(
    positions: &Matrix3xX<f64>,
    velocities: &Matrix3xX<f64>,
) -> (Matrix3xX<f64>, Matrix3xX<f64>) {
    let n = positions.ncols();
    let mut coords = Matrix3xX::zeros(n);
    let mut vels = Matrix3xX::zeros(n);

    for j in 0..n {
        let (x, y, z) = (positions[(0, j)], positions[(1, j)], positions[(2, j)]);
        let (vx, vy, vz) = (velocities[(0, j)], velocities[(1, j)], velocities[(2, j)]);

        let r = (x * x + y * y + z * z).sqrt();
        let phi = y.atan2(x);
        let theta = (z / r).acos();

        let cost = z / r;
        let sint = (1. - cost * cost).sqrt();
        let (sinp, cosp) = phi.sin_cos();

        coords[(0, j)] = r;
        coords[(1, j)] = phi;
        coords[(2, j)] = theta;

        vels[(0, j)] = sint * (cosp * vx + sinp * vy) + cost * vz;
        vels[(1, j)] = -sinp * vx + cosp * vy;
        vels[(2, j)] = cost * (cosp * vx + sinp * vy) - sint * vz;
    }

    (coords, vels)
}

/// Convert a batch of cartesian positions to spherical coordinates, ignoring
/// velocities.
///
/// Convenience used where only the angular position of each star is needed
/// (the forward model converts the rotated and heliocentric positions this
/// way before projecting velocities).
pub fn cartesian_position_to_spherical(positions: &Matrix3xX<f64>) -> Matrix3xX<f64> {
    let n = positions.ncols();
    let mut coords = Matrix3xX::zeros(n);

    for j in 0..n {
        let (x, y, z) = (positions[(0, j)], positions[(1, j)], positions[(2, j)]);
        let r = (x * x + y * y + z * z).sqrt();

        coords[(0, j)] = r;
        coords[(1, j)] = y.atan2(x);
        coords[(2, j)] = (z / r).acos();
    }

    coords
}

/// Convert a batch of spherical position/velocity pairs back to cartesian
/// coordinates.
///
/// Arguments
/// ---------
/// * `coords`: 3×N matrix with rows `(r, phi, theta)`.
/// * `vels`: 3×N matrix with rows `(vr, vphi, vtheta)`.
///
/// Return
/// ------
/// * A pair of 3×N matrices with rows `(x, y, z)` and `(vx, vy, vz)`.
///
/// # See also
/// * [`cartesian_to_spherical`] – exact inverse of this conversion.
/// * [`spherical_unit_vectors`] – the basis used for the velocity projection.
pub fn spherical_to_cartesian(
    coords: &Matrix3xX<f64>,
    vels: &Matrix3xX<f64>,
) -> (Matrix3xX<f64>, Matrix3xX<f64>) {
    let n = coords.ncols();
    let mut positions = Matrix3xX::zeros(n);
    let mut velocities = Matrix3xX::zeros(n);

    for j in 0..n {
        let (r, phi, theta) = (coords[(0, j)], coords[(1, j)], coords[(2, j)]);
        let (vr, vphi, vtheta) = (vels[(0, j)], vels[(1, j)], vels[(2, j)]);

        let (e_r, e_phi, e_theta) = spherical_unit_vectors(phi, theta);

        let pos = r * e_r;
        let vel = vr * e_r + vtheta * e_theta + vphi * e_phi;

        positions.set_column(j, &pos);
        velocities.set_column(j, &vel);
    }

    (positions, velocities)
}

/// Orthonormal spherical basis vectors at the direction `(phi, theta)`.
///
/// Return
/// ------
/// * `(e_r, e_phi, e_theta)`: the radial, azimuthal and polar unit vectors,
///   expressed in the cartesian frame.
pub fn spherical_unit_vectors(
    phi: Radian,
    theta: Radian,
) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    let (sinp, cosp) = phi.sin_cos();
    let (sint, cost) = theta.sin_cos();

    let e_r = Vector3::new(sint * cosp, sint * sinp, cost);
    let e_phi = Vector3::new(-sinp, cosp, 0.);
    let e_theta = Vector3::new(cost * cosp, cost * sinp, -sint);

    (e_r, e_phi, e_theta)
}
