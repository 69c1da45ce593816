//! # Star catalog
//!
//! The input catalog is a whitespace-separated table with 17 columns per row,
//! in fixed order:
//!
//! | columns | content                                              | units  |
//! |---------|------------------------------------------------------|--------|
//! | 1–6     | galactocentric `x, y, z, vx, vy, vz`                 | kpc, km/s |
//! | 7–12    | `l`, `b`, heliocentric distance, `vlos`, `mu_l`, `mu_b` | rad, kpc, km/s, mas/yr |
//! | 13–17   | distance, `vlos`, `mu_l`, `mu_b` errors, pm correlation | kpc, km/s, mas/yr |
//!
//! Rows are validated at load time: every value must be finite and the
//! heliocentric distance strictly positive, so the likelihood loop never has
//! to defend against malformed input. Once built, a [`StarCatalog`] is
//! immutable and may be shared freely across concurrent likelihood
//! evaluations.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nalgebra::{DVector, Matrix3xX, Vector3};

use crate::constants::{KmPerSec, Kpc, MasPerYear, Radian, CATALOG_COLUMNS};
use crate::coordinates::cartesian_position_to_spherical;
use crate::errors::ReflexError;

/// One catalog entry, as read from a single input row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRecord {
    /// Galactocentric cartesian position (kpc)
    pub position: Vector3<f64>,
    /// Galactocentric cartesian velocity (km/s)
    pub velocity: Vector3<f64>,
    /// Galactic longitude (radians)
    pub longitude: Radian,
    /// Galactic latitude (radians)
    pub latitude: Radian,
    /// Heliocentric distance (kpc, strictly positive)
    pub distance: Kpc,
    /// Observed line-of-sight velocity (km/s)
    pub vlos: KmPerSec,
    /// Observed proper motion in longitude (mas/yr)
    pub mu_l: MasPerYear,
    /// Observed proper motion in latitude (mas/yr)
    pub mu_b: MasPerYear,
    /// Distance uncertainty (kpc)
    pub distance_error: Kpc,
    /// Line-of-sight velocity uncertainty (km/s)
    pub vlos_error: KmPerSec,
    /// Proper-motion uncertainty in longitude (mas/yr)
    pub mu_l_error: MasPerYear,
    /// Proper-motion uncertainty in latitude (mas/yr)
    pub mu_b_error: MasPerYear,
    /// Correlation coefficient between the two proper-motion errors
    pub pm_correlation: f64,
}

impl StarRecord {
    /// Build a record from one parsed 17-column row.
    ///
    /// `line` is the 1-based input line number, used for error reporting.
    pub fn from_row(values: &[f64; CATALOG_COLUMNS], line: usize) -> Result<Self, ReflexError> {
        for (column, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(ReflexError::CatalogNonFiniteValue { line, column });
            }
        }
        if values[8] <= 0. {
            return Err(ReflexError::CatalogNonPositiveDistance {
                line,
                value: values[8],
            });
        }

        Ok(Self {
            position: Vector3::new(values[0], values[1], values[2]),
            velocity: Vector3::new(values[3], values[4], values[5]),
            longitude: values[6],
            latitude: values[7],
            distance: values[8],
            vlos: values[9],
            mu_l: values[10],
            mu_b: values[11],
            distance_error: values[12],
            vlos_error: values[13],
            mu_l_error: values[14],
            mu_b_error: values[15],
            pm_correlation: values[16],
        })
    }
}

/// The immutable, structure-of-arrays star table the fit runs against.
///
/// Positions and velocities are stored one star per column so the forward
/// model can apply frame rotations to the whole batch at once. The
/// galactocentric spherical coordinates are computed once at construction;
/// they only depend on the (fixed) positions, not on the sampled parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct StarCatalog {
    positions: Matrix3xX<f64>,
    velocities: Matrix3xX<f64>,
    galactic_spherical: Matrix3xX<f64>,
    longitude: DVector<f64>,
    latitude: DVector<f64>,
    distance: DVector<f64>,
    vlos: DVector<f64>,
    mu_l: DVector<f64>,
    mu_b: DVector<f64>,
    distance_error: DVector<f64>,
    vlos_error: DVector<f64>,
    mu_l_error: DVector<f64>,
    mu_b_error: DVector<f64>,
    pm_correlation: DVector<f64>,
}

impl StarCatalog {
    /// Assemble a catalog from validated records.
    ///
    /// Errors with [`ReflexError::EmptyCatalog`] if no records are given.
    pub fn from_records(records: &[StarRecord]) -> Result<Self, ReflexError> {
        if records.is_empty() {
            return Err(ReflexError::EmptyCatalog);
        }

        let n = records.len();
        let positions = Matrix3xX::from_fn(n, |i, j| records[j].position[i]);
        let velocities = Matrix3xX::from_fn(n, |i, j| records[j].velocity[i]);
        let galactic_spherical = cartesian_position_to_spherical(&positions);

        Ok(Self {
            positions,
            velocities,
            galactic_spherical,
            longitude: DVector::from_fn(n, |j, _| records[j].longitude),
            latitude: DVector::from_fn(n, |j, _| records[j].latitude),
            distance: DVector::from_fn(n, |j, _| records[j].distance),
            vlos: DVector::from_fn(n, |j, _| records[j].vlos),
            mu_l: DVector::from_fn(n, |j, _| records[j].mu_l),
            mu_b: DVector::from_fn(n, |j, _| records[j].mu_b),
            distance_error: DVector::from_fn(n, |j, _| records[j].distance_error),
            vlos_error: DVector::from_fn(n, |j, _| records[j].vlos_error),
            mu_l_error: DVector::from_fn(n, |j, _| records[j].mu_l_error),
            mu_b_error: DVector::from_fn(n, |j, _| records[j].mu_b_error),
            pm_correlation: DVector::from_fn(n, |j, _| records[j].pm_correlation),
        })
    }

    /// Load a catalog from a whitespace-separated table on disk.
    ///
    /// Blank lines and lines starting with `#` are skipped. Every other line
    /// must carry exactly 17 numeric columns; malformed rows fail the whole
    /// load rather than being dropped silently.
    pub fn from_path(path: &Path) -> Result<Self, ReflexError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let line_number = index + 1;
            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            if fields.len() != CATALOG_COLUMNS {
                return Err(ReflexError::CatalogColumnCount {
                    line: line_number,
                    expected: CATALOG_COLUMNS,
                    found: fields.len(),
                });
            }

            let mut values = [0.; CATALOG_COLUMNS];
            for (i, field) in fields.iter().enumerate() {
                values[i] = field.parse().map_err(|_| ReflexError::CatalogInvalidNumber {
                    line: line_number,
                    value: field.to_string(),
                })?;
            }

            records.push(StarRecord::from_row(&values, line_number)?);
        }

        Self::from_records(&records)
    }

    /// Number of stars in the catalog
    pub fn len(&self) -> usize {
        self.positions.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Galactocentric cartesian positions, one star per column (kpc)
    pub fn positions(&self) -> &Matrix3xX<f64> {
        &self.positions
    }

    /// Galactocentric cartesian velocities, one star per column (km/s)
    pub fn velocities(&self) -> &Matrix3xX<f64> {
        &self.velocities
    }

    /// Galactocentric spherical coordinates `(r, phi, theta)`, precomputed
    /// once at construction
    pub fn galactic_spherical(&self) -> &Matrix3xX<f64> {
        &self.galactic_spherical
    }

    pub fn longitude(&self) -> &DVector<f64> {
        &self.longitude
    }

    pub fn latitude(&self) -> &DVector<f64> {
        &self.latitude
    }

    pub fn distance(&self) -> &DVector<f64> {
        &self.distance
    }

    pub fn vlos(&self) -> &DVector<f64> {
        &self.vlos
    }

    pub fn mu_l(&self) -> &DVector<f64> {
        &self.mu_l
    }

    pub fn mu_b(&self) -> &DVector<f64> {
        &self.mu_b
    }

    pub fn distance_error(&self) -> &DVector<f64> {
        &self.distance_error
    }

    pub fn vlos_error(&self) -> &DVector<f64> {
        &self.vlos_error
    }

    pub fn mu_l_error(&self) -> &DVector<f64> {
        &self.mu_l_error
    }

    pub fn mu_b_error(&self) -> &DVector<f64> {
        &self.mu_b_error
    }

    pub fn pm_correlation(&self) -> &DVector<f64> {
        &self.pm_correlation
    }
}
