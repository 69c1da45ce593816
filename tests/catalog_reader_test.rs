use std::io::Write;
use std::path::PathBuf;

use approx::assert_relative_eq;

use reflexfit::catalog::StarCatalog;
use reflexfit::errors::ReflexError;

fn write_table(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_whitespace_table() {
    let path = write_table(
        "reflexfit_catalog_ok.txt",
        "# x y z vx vy vz l b dist vlos mul mub edist evlos emul emub corr\n\
         12.0 -3.0 7.5   40.0 -85.0 15.0  0.2 -0.1  16.0 -50.0  0.8 -0.5  1.5 4.0 0.06 0.05 0.2\n\
         \n\
         -4.5 20.0 -11.0 -120.0 30.0 60.0 1.1 0.3 24.0 110.0 -0.3  0.4  2.0 6.0 0.08 0.09 -0.3\n",
    );

    let catalog = StarCatalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_relative_eq!(catalog.positions()[(1, 0)], -3.0);
    assert_relative_eq!(catalog.velocities()[(0, 1)], -120.0);
    assert_relative_eq!(catalog.distance()[1], 24.0);
    assert_relative_eq!(catalog.pm_correlation()[0], 0.2);

    // Precomputed spherical radius matches the cartesian norm
    let r0 = (12.0_f64.powi(2) + 3.0_f64.powi(2) + 7.5_f64.powi(2)).sqrt();
    assert_relative_eq!(catalog.galactic_spherical()[(0, 0)], r0, epsilon = 1e-12);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_reject_short_row() {
    let path = write_table(
        "reflexfit_catalog_short.txt",
        "12.0 -3.0 7.5 40.0 -85.0 15.0 0.2 -0.1 16.0 -50.0 0.8 -0.5 1.5 4.0 0.06 0.05\n",
    );

    let result = StarCatalog::from_path(&path);
    assert_eq!(
        result.unwrap_err(),
        ReflexError::CatalogColumnCount {
            line: 1,
            expected: 17,
            found: 16
        }
    );

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_reject_non_numeric_field() {
    let path = write_table(
        "reflexfit_catalog_nan.txt",
        "12.0 -3.0 7.5 40.0 -85.0 abc 0.2 -0.1 16.0 -50.0 0.8 -0.5 1.5 4.0 0.06 0.05 0.2\n",
    );

    let result = StarCatalog::from_path(&path);
    assert_eq!(
        result.unwrap_err(),
        ReflexError::CatalogInvalidNumber {
            line: 1,
            value: "abc".to_string()
        }
    );

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_reject_negative_distance() {
    let path = write_table(
        "reflexfit_catalog_dist.txt",
        "12.0 -3.0 7.5 40.0 -85.0 15.0 0.2 -0.1 -16.0 -50.0 0.8 -0.5 1.5 4.0 0.06 0.05 0.2\n",
    );

    let result = StarCatalog::from_path(&path);
    assert_eq!(
        result.unwrap_err(),
        ReflexError::CatalogNonPositiveDistance {
            line: 1,
            value: -16.0
        }
    );

    std::fs::remove_file(&path).unwrap();
}
