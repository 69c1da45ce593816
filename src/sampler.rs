//! # Sampling-engine interface
//!
//! The nested-sampling engine is an external collaborator: it owns the
//! live-point loop and only ever calls back into two pure functions, the
//! prior transform and the total log-likelihood. This module defines that
//! contract ([`ReflexProblem`], [`NestedSampler`]), the engine configuration
//! and result types, and the persistence of the parameter-name list consumed
//! by downstream posterior tooling.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::StarCatalog;
use crate::errors::ReflexError;
use crate::likelihood::LikelihoodModel;
use crate::parameters::{ModelParameters, N_PARAMETERS, PARAMETER_NAMES};
use crate::prior;
use crate::reflex::ReflexModel;

/// Engine configuration: dimensionality and live-point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerConfig {
    pub n_dims: usize,
    pub n_live_points: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            n_dims: N_PARAMETERS,
            n_live_points: 1000,
        }
    }
}

/// Evidence estimate returned by the engine, `log Z ± log Z_err`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvidenceEstimate {
    pub log_z: f64,
    pub log_z_err: f64,
}

/// Posterior-equal-weight samples plus the evidence estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingResult {
    pub samples: Vec<[f64; N_PARAMETERS]>,
    pub evidence: EvidenceEstimate,
}

/// The two pure functions the engine repeatedly evaluates, bound to a fixed
/// catalog.
///
/// Both functions are free of shared mutable state, so a parallelizing
/// engine may invoke them concurrently from several live points at once.
pub struct ReflexProblem<'a> {
    likelihood: LikelihoodModel,
    catalog: &'a StarCatalog,
}

impl<'a> ReflexProblem<'a> {
    pub fn new(model: ReflexModel, catalog: &'a StarCatalog) -> Self {
        Self {
            likelihood: LikelihoodModel::new(model),
            catalog,
        }
    }

    pub fn n_dims(&self) -> usize {
        N_PARAMETERS
    }

    /// Total catalog log-likelihood of an already-transformed parameter
    /// vector. Always finite (sentinel substitution included).
    pub fn log_likelihood(&self, cube: &[f64; N_PARAMETERS]) -> f64 {
        let params = ModelParameters::from_cube(cube);
        self.likelihood.total_log_likelihood(&params, self.catalog)
    }

    /// In-place prior transform of a unit hypercube draw.
    pub fn prior_transform(&self, cube: &mut [f64; N_PARAMETERS]) -> Result<(), ReflexError> {
        prior::transform(cube)
    }
}

/// Contract implemented by a nested-sampling engine.
///
/// The engine evolves its live points however it likes; this crate only
/// relies on the returned posterior samples and evidence estimate.
pub trait NestedSampler {
    fn run(
        &mut self,
        problem: &ReflexProblem<'_>,
        config: &SamplerConfig,
    ) -> Result<SamplingResult, ReflexError>;
}

/// Persist the canonical parameter-name list as JSON for downstream
/// posterior tooling.
pub fn write_parameter_names(path: &Path) -> Result<(), ReflexError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &PARAMETER_NAMES)?;
    Ok(())
}
