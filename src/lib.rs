//! # Reflexfit: kinematic reflex-motion fitting for stellar catalogs
//!
//! This crate fits a 9-parameter "travel velocity" model to a catalog of
//! stellar positions and velocities: a bulk translational motion of the
//! observer's frame toward an apex direction on the sky, a residual bulk
//! velocity field in spherical components, and three nuisance variance terms.
//! The fit is driven by an external Bayesian nested-sampling engine to which
//! the crate exposes exactly two pure functions: a prior transform from the
//! unit hypercube to the physical parameter domain, and a log-likelihood over
//! the whole catalog.
//!
//! ## Module map
//!
//! - [`coordinates`] — batched cartesian ↔ spherical conversions and local
//!   spherical unit vectors.
//! - [`rotation`] — apex-alignment rotation matrices.
//! - [`travel`] — the radially-directed travel velocity field in the rotated
//!   frame.
//! - [`reflex`] — the full forward model mapping parameters and star
//!   positions to predicted heliocentric observables.
//! - [`likelihood`] — Gaussian log-likelihood of the predictions against the
//!   observed catalog, with a correlated 2-D proper-motion term.
//! - [`prior`] — unit-hypercube → physical-domain prior transform.
//! - [`catalog`] — the immutable star table and its 17-column loader.
//! - [`sampler`] — the interface consumed by the nested-sampling engine.
pub mod catalog;
pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod likelihood;
pub mod parameters;
pub mod prior;
pub mod reflex;
pub mod rotation;
pub mod sampler;
pub mod travel;
