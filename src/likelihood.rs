//! # Gaussian log-likelihood of the reflex model
//!
//! Each star contributes two terms: a 1-D Gaussian for the line-of-sight
//! velocity and a correlated 2-D Gaussian for the proper-motion pair. The
//! nuisance parameters of the model enter as *additive variance terms*,
//! plugged directly into the covariances.
//!
//! Degenerate covariances are not trapped per term: NaN/Inf are allowed to
//! propagate into the catalog sum, and a single post-sum check replaces a
//! non-finite total with [`SENTINEL_LOG_LIKELIHOOD`]. The sampling engine
//! only ever sees a finite scalar.

use crate::catalog::StarCatalog;
use crate::constants::{KmPerSec, Kpc, MasPerYear, PM_FACTOR, SENTINEL_LOG_LIKELIHOOD};
use crate::parameters::ModelParameters;
use crate::reflex::ReflexModel;

/// Log-density of one observed line-of-sight velocity under the model
/// prediction.
///
/// The variance is the observational variance plus the additive nuisance
/// term: `var = vlos_error² + sig_vlos`.
pub fn vlos_log_likelihood(
    sig_vlos: f64,
    observed: KmPerSec,
    predicted: KmPerSec,
    vlos_error: KmPerSec,
) -> f64 {
    let variance = vlos_error * vlos_error + sig_vlos;
    let residual = observed - predicted;

    -0.5 * (2. * std::f64::consts::PI * variance).ln() - 0.5 * residual * residual / variance
}

/// Log-density of one observed proper-motion pair under the model
/// prediction, with correlated errors.
///
/// The 2×2 covariance has diagonal terms built from three contributions:
/// the observational variance, the distance uncertainty propagated through
/// the angular conversion (`distance_error² · mu² / distance²`), and the
/// additive nuisance term scaled to angular units
/// (`sig / (4.74057 · distance)²`). The off-diagonal term is the correlated
/// observational part only, `mu_l_error · mu_b_error · correlation`, left
/// unscaled by the nuisance.
///
/// The determinant and inverse of the covariance are written out explicitly;
/// a singular covariance yields a non-finite value that the caller's sentinel
/// check absorbs.
#[allow(clippy::too_many_arguments)]
pub fn proper_motion_log_likelihood(
    sig_mul: f64,
    sig_mub: f64,
    observed_mu_l: MasPerYear,
    observed_mu_b: MasPerYear,
    distance: Kpc,
    correlation: f64,
    mu_l_error: MasPerYear,
    mu_b_error: MasPerYear,
    distance_error: Kpc,
    predicted_mu_l: MasPerYear,
    predicted_mu_b: MasPerYear,
) -> f64 {
    let fac = PM_FACTOR * distance;

    let var_l = mu_l_error * mu_l_error
        + distance_error * distance_error * (observed_mu_l.abs().powi(2) / (distance * distance))
        + sig_mul / (fac * fac);
    let var_b = mu_b_error * mu_b_error
        + distance_error * distance_error * (observed_mu_b.abs().powi(2) / (distance * distance))
        + sig_mub / (fac * fac);
    let off_diagonal = mu_l_error * mu_b_error * correlation;

    let det = var_l * var_b - off_diagonal * off_diagonal;

    let residual_l = observed_mu_l - predicted_mu_l;
    let residual_b = observed_mu_b - predicted_mu_b;

    // residual · Σ⁻¹ · residual with the 2×2 adjugate inverse
    let quadratic = (var_b * residual_l * residual_l
        - 2. * off_diagonal * residual_l * residual_b
        + var_l * residual_b * residual_b)
        / det;

    let two_pi = 2. * std::f64::consts::PI;
    -0.5 * (two_pi * two_pi * det).ln() - 0.5 * quadratic
}

/// The full catalog log-likelihood evaluated by the sampling engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LikelihoodModel {
    model: ReflexModel,
}

impl LikelihoodModel {
    pub fn new(model: ReflexModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &ReflexModel {
        &self.model
    }

    /// Sum the line-of-sight and proper-motion log-likelihoods over every
    /// star in the catalog.
    ///
    /// If the sum comes out non-finite, the documented sentinel value is
    /// returned instead so the sampler never receives NaN/Inf.
    pub fn total_log_likelihood(&self, params: &ModelParameters, catalog: &StarCatalog) -> f64 {
        let predicted = self.model.predict(params, catalog);

        let mut total = 0.;
        for j in 0..catalog.len() {
            total += vlos_log_likelihood(
                params.sig_vlos,
                catalog.vlos()[j],
                predicted.vlos[j],
                catalog.vlos_error()[j],
            );
            total += proper_motion_log_likelihood(
                params.sig_mul,
                params.sig_mub,
                catalog.mu_l()[j],
                catalog.mu_b()[j],
                catalog.distance()[j],
                catalog.pm_correlation()[j],
                catalog.mu_l_error()[j],
                catalog.mu_b_error()[j],
                catalog.distance_error()[j],
                predicted.mu_l[j],
                predicted.mu_b[j],
            );
        }

        if !total.is_finite() {
            return SENTINEL_LOG_LIKELIHOOD;
        }
        total
    }
}

impl Default for LikelihoodModel {
    fn default() -> Self {
        Self::new(ReflexModel::default())
    }
}
