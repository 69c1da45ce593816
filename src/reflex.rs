//! # Reflex-motion forward model
//!
//! Maps one 9-parameter hypothesis onto the predicted heliocentric
//! observables of every star in the catalog: line-of-sight velocity and the
//! two proper-motion components. The chain is:
//!
//! 1. rotate the galactocentric positions so the apex direction becomes the
//!    polar axis,
//! 2. inject the travel velocity field as a function of each star's polar
//!    angle in that frame,
//! 3. rotate the field back to the galactocentric frame,
//! 4. add the bulk velocity, whose fixed spherical components are evaluated
//!    at each star's own galactocentric direction,
//! 5. translate positions and velocities to the observer,
//! 6. project the heliocentric velocity on the local spherical basis and
//!    convert the tangential components to proper motions.
//!
//! Every evaluation is a pure function of the parameters and the (shared,
//! read-only) catalog; nothing is cached between sampler calls.

use nalgebra::{DVector, Matrix3xX, Vector3};

use crate::catalog::StarCatalog;
use crate::constants::{Kpc, KmPerSec, PM_FACTOR, RSUN_MW, VSUN_MW};
use crate::coordinates::{
    cartesian_position_to_spherical, spherical_to_cartesian, spherical_unit_vectors,
};
use crate::parameters::ModelParameters;
use crate::rotation::{apex_rotation, invert};
use crate::travel::travel_field;

/// Observer-frame configuration injected into the forward model.
///
/// Modeled as an explicit value rather than hidden globals so tests can run
/// the model in alternate observer frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverFrame {
    /// Observer position in the galactocentric cartesian frame (kpc)
    pub position: Vector3<Kpc>,
    /// Observer velocity in the galactocentric cartesian frame (km/s)
    pub velocity: Vector3<KmPerSec>,
    /// Conversion factor from km/s per kpc to mas/yr
    pub pm_factor: f64,
}

impl Default for ObserverFrame {
    /// The canonical solar frame: position and motion of the Sun in the
    /// Milky Way, and the standard proper-motion conversion factor.
    fn default() -> Self {
        Self {
            position: Vector3::from(RSUN_MW),
            velocity: Vector3::from(VSUN_MW),
            pm_factor: PM_FACTOR,
        }
    }
}

/// Predicted observables, one entry per catalog star.
#[derive(Debug, Clone, PartialEq)]
pub struct Observables {
    /// Predicted line-of-sight velocity (km/s)
    pub vlos: DVector<f64>,
    /// Predicted proper motion in longitude (mas/yr)
    pub mu_l: DVector<f64>,
    /// Predicted proper motion in latitude (mas/yr)
    pub mu_b: DVector<f64>,
}

/// The full forward map from model parameters to predicted observables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflexModel {
    observer: ObserverFrame,
}

impl ReflexModel {
    pub fn new(observer: ObserverFrame) -> Self {
        Self { observer }
    }

    pub fn observer(&self) -> &ObserverFrame {
        &self.observer
    }

    /// Predict `(vlos, mu_l, mu_b)` for every star in the catalog under the
    /// given parameters.
    ///
    /// Division by the heliocentric distance is unguarded: stars must not
    /// coincide with the observer position (load-time validation keeps the
    /// catalog away from that configuration).
    pub fn predict(&self, params: &ModelParameters, catalog: &StarCatalog) -> Observables {
        let n = catalog.len();

        // Apex-aligned frame: the fitted cos(b_apex) fixes the inclination.
        let b_apex = params.cos_b_apex.acos();
        let rot = apex_rotation(params.l_apex, b_apex, 0.);

        let rotated_pos = &rot * catalog.positions();
        let rotated_sph = cartesian_position_to_spherical(&rotated_pos);

        // Travel field in the rotated frame, expressed back in cartesian
        // components and undone into the galactocentric frame.
        let travel_sph = travel_field(params.v_travel, &rotated_sph);
        let (_, travel_cart) = spherical_to_cartesian(&rotated_sph, &travel_sph);
        let reflex_vel = invert(&rot) * travel_cart;

        // Bulk motion: one spherical triple shared by all stars, converted to
        // a per-star cartesian vector at each star's own direction.
        let bulk_sph = Matrix3xX::from_fn(n, |i, _| match i {
            0 => params.v_r,
            1 => params.v_phi,
            2 => params.v_theta,
            _ => unreachable!(),
        });
        let (_, bulk_cart) = spherical_to_cartesian(catalog.galactic_spherical(), &bulk_sph);

        // Heliocentric translation
        let mut helio_pos = catalog.positions().clone();
        let mut helio_vel = reflex_vel + bulk_cart;
        for j in 0..n {
            let mut pos = helio_pos.column_mut(j);
            pos -= self.observer.position;
            let mut vel = helio_vel.column_mut(j);
            vel -= self.observer.velocity;
        }

        // Projection on the local spherical basis at each heliocentric
        // position, then angular conversion for the tangential components.
        let helio_sph = cartesian_position_to_spherical(&helio_pos);

        let mut vlos = DVector::zeros(n);
        let mut mu_l = DVector::zeros(n);
        let mut mu_b = DVector::zeros(n);

        for j in 0..n {
            let (e_r, e_phi, e_theta) =
                spherical_unit_vectors(helio_sph[(1, j)], helio_sph[(2, j)]);
            let vel = helio_vel.column(j);
            let fac = self.observer.pm_factor * helio_sph[(0, j)];

            vlos[j] = vel.dot(&e_r);
            mu_l[j] = vel.dot(&e_phi) / fac;
            // Latitude increases opposite to the polar angle
            mu_b[j] = -vel.dot(&e_theta) / fac;
        }

        Observables { vlos, mu_l, mu_b }
    }
}

impl Default for ReflexModel {
    fn default() -> Self {
        Self::new(ObserverFrame::default())
    }
}

#[cfg(test)]
mod reflex_test {
    use super::*;
    use crate::catalog::StarRecord;
    use crate::constants::CATALOG_COLUMNS;
    use approx::assert_relative_eq;

    fn catalog_from_kinematics(stars: &[([f64; 3], [f64; 3])]) -> StarCatalog {
        let records: Vec<StarRecord> = stars
            .iter()
            .map(|(pos, vel)| {
                let mut row = [0.; CATALOG_COLUMNS];
                row[..3].copy_from_slice(pos);
                row[3..6].copy_from_slice(vel);
                row[8] = 1.; // distance, unused by the forward model
                StarRecord::from_row(&row, 1).unwrap()
            })
            .collect();
        StarCatalog::from_records(&records).unwrap()
    }

    #[test]
    fn test_static_star_sees_minus_solar_motion() {
        // A motionless star with all model parameters at zero: the predicted
        // heliocentric velocity is exactly the negated solar motion projected
        // on the local basis at the star's heliocentric position.
        let catalog = catalog_from_kinematics(&[([0., 8.3, 0.], [0., 0., 0.])]);
        let params = ModelParameters::from_cube(&[0., 0., 0., 0., 0., 0., 1e-4, 1e-4, 1e-4]);

        let obs = ReflexModel::default().predict(&params, &catalog);

        assert_relative_eq!(obs.vlos[0], -1.805400303680788e2, epsilon = 1e-6);
        assert_relative_eq!(obs.mu_l[0], -2.962630638580408e0, epsilon = 1e-6);
        assert_relative_eq!(obs.mu_b[0], -1.358192109208100e-1, epsilon = 1e-6);
    }

    #[test]
    fn test_forward_model_regression() {
        let catalog = catalog_from_kinematics(&[
            ([12., -3., 7.5], [40., -85., 15.]),
            ([-4.5, 20., -11.], [-120., 30., 60.]),
        ]);
        let params =
            ModelParameters::from_cube(&[0.7, -0.3, 42., 25., -110., 13., 1e-3, 1e-3, 1e-3]);

        let obs = ReflexModel::default().predict(&params, &catalog);

        assert_relative_eq!(obs.vlos[0], 1.691041898212278e1, epsilon = 1e-9);
        assert_relative_eq!(obs.mu_l[0], -3.723004302352984e0, epsilon = 1e-9);
        assert_relative_eq!(obs.mu_b[0], 1.443650855441199e-2, epsilon = 1e-9);

        assert_relative_eq!(obs.vlos[1], -1.803405955545419e2, epsilon = 1e-9);
        assert_relative_eq!(obs.mu_l[1], -9.477332053584385e-1, epsilon = 1e-9);
        assert_relative_eq!(obs.mu_b[1], -1.075311418096973e0, epsilon = 1e-9);
    }

    #[test]
    fn test_alternate_observer_frame() {
        // With the observer at rest at the origin, the galactocentric and
        // heliocentric bases coincide: a purely radial bulk velocity lands
        // entirely on the line of sight and leaves the proper motions empty.
        let observer = ObserverFrame {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            pm_factor: PM_FACTOR,
        };
        let catalog = catalog_from_kinematics(&[([3., 4., 12.], [0., 0., 0.])]);
        let params = ModelParameters::from_cube(&[0., 0., 0., 5., 0., 0., 1e-4, 1e-4, 1e-4]);

        let obs = ReflexModel::new(observer).predict(&params, &catalog);

        assert_relative_eq!(obs.vlos[0], 5., epsilon = 1e-12);
        assert_relative_eq!(obs.mu_l[0], 0., epsilon = 1e-12);
        assert_relative_eq!(obs.mu_b[0], 0., epsilon = 1e-12);
    }
}
