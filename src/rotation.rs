//! # Apex-alignment rotation matrices
//!
//! The forward model works in a rotated frame whose polar axis points at the
//! hypothesized apex direction. This module builds that rotation from an
//! (azimuth, inclination, roll) angle triple and provides its inverse.

use nalgebra::Matrix3;

use crate::constants::Radian;

/// Build the rotation matrix aligning the direction `(phi, theta)` with the
/// +z axis.
///
/// The matrix is the composite of sequential intrinsic rotations about the
/// x, y and z axes. Only two of the three angles are fitted by the reflex
/// model, so the roll `psi` is zero in practice; it is kept as an argument
/// for generality.
///
/// Arguments
/// ---------
/// * `phi`: azimuthal angle of the target direction (radians).
/// * `theta`: polar angle of the target direction (radians).
/// * `psi`: roll about the final axis (radians).
///
/// Return
/// ------
/// * A 3×3 orthonormal matrix `R` such that `R · u(phi, theta) = +z`, where
///   `u(phi, theta)` is the unit vector at the given direction.
///
/// Non-finite inputs propagate into the matrix without being trapped.
///
/// # See also
/// * [`invert`] – inverse rotation back to the original frame.
pub fn apex_rotation(phi: Radian, theta: Radian, psi: Radian) -> Matrix3<f64> {
    let (sinp, cosp) = phi.sin_cos();
    let (sint, cost) = theta.sin_cos();
    let (sins, coss) = psi.sin_cos();

    Matrix3::new(
        cost * cosp,
        cost * sinp,
        -sint,
        sins * sint * cosp - coss * sinp,
        sins * sint * sinp + coss * cosp,
        cost * sins,
        coss * sint * cosp + sins * sinp,
        coss * sint * sinp - sins * cosp,
        cost * coss,
    )
}

/// Inverse of an apex rotation.
///
/// The matrices built by [`apex_rotation`] are orthonormal, so the inverse
/// equals the transpose; the transpose is used directly, which is both exact
/// and cheaper than a general matrix inversion.
pub fn invert(rotation: &Matrix3<f64>) -> Matrix3<f64> {
    rotation.transpose()
}

#[cfg(test)]
mod rotation_test {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_orthonormality() {
        let rot = apex_rotation(0.7, 1.2, 0.);

        assert_relative_eq!(rot * rot.transpose(), Matrix3::identity(), epsilon = 1e-14);
        assert_relative_eq!(rot.determinant(), 1., epsilon = 1e-14);
    }

    #[test]
    fn test_invert_is_transpose() {
        let rot = apex_rotation(-2.1, 0.4, 0.3);
        assert_eq!(invert(&rot), rot.transpose());
        assert_relative_eq!(invert(&rot) * rot, Matrix3::identity(), epsilon = 1e-14);
    }

    #[test]
    fn test_apex_maps_to_pole() {
        let (phi, theta): (f64, f64) = (1.9, 0.8);
        let apex = Vector3::new(
            theta.sin() * phi.cos(),
            theta.sin() * phi.sin(),
            theta.cos(),
        );

        let rot = apex_rotation(phi, theta, 0.);
        assert_relative_eq!(rot * apex, Vector3::z(), epsilon = 1e-14);
    }

    #[test]
    fn test_zero_angles_identity() {
        assert_relative_eq!(apex_rotation(0., 0., 0.), Matrix3::identity(), epsilon = 1e-15);
    }
}
