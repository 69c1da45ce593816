use thiserror::Error;

/// Error type covering catalog loading and the sampler-facing surfaces.
///
/// Everything inside the likelihood loop itself is infallible by design:
/// numerical degeneracies are handled by the sentinel substitution in
/// [`crate::likelihood`], not by error values.
#[derive(Error, Debug)]
pub enum ReflexError {
    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Catalog line {line}: expected {expected} columns, found {found}")]
    CatalogColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Catalog line {line}: cannot parse '{value}' as a number")]
    CatalogInvalidNumber { line: usize, value: String },

    #[error("Catalog line {line}: non-finite value in column {column}")]
    CatalogNonFiniteValue { line: usize, column: usize },

    #[error("Catalog line {line}: heliocentric distance must be strictly positive, got {value}")]
    CatalogNonPositiveDistance { line: usize, value: f64 },

    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Hypercube coordinate {index} outside [0, 1): {value}")]
    HypercubeOutOfRange { index: usize, value: f64 },
}

impl PartialEq for ReflexError {
    fn eq(&self, other: &Self) -> bool {
        use ReflexError::*;
        match (self, other) {
            // Wrapped errors are not comparable: equal if same variant
            (IoError(_), IoError(_)) => true,
            (JsonError(_), JsonError(_)) => true,

            (
                CatalogColumnCount {
                    line: l1,
                    expected: e1,
                    found: f1,
                },
                CatalogColumnCount {
                    line: l2,
                    expected: e2,
                    found: f2,
                },
            ) => l1 == l2 && e1 == e2 && f1 == f2,
            (
                CatalogInvalidNumber { line: l1, value: v1 },
                CatalogInvalidNumber { line: l2, value: v2 },
            ) => l1 == l2 && v1 == v2,
            (
                CatalogNonFiniteValue {
                    line: l1,
                    column: c1,
                },
                CatalogNonFiniteValue {
                    line: l2,
                    column: c2,
                },
            ) => l1 == l2 && c1 == c2,
            (
                CatalogNonPositiveDistance { line: l1, value: v1 },
                CatalogNonPositiveDistance { line: l2, value: v2 },
            ) => l1 == l2 && v1 == v2,
            (EmptyCatalog, EmptyCatalog) => true,
            (
                HypercubeOutOfRange {
                    index: i1,
                    value: v1,
                },
                HypercubeOutOfRange {
                    index: i2,
                    value: v2,
                },
            ) => i1 == i2 && v1 == v2,

            _ => false,
        }
    }
}
