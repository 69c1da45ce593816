use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use reflexfit::parameters::N_PARAMETERS;
use reflexfit::prior::{transform, SIG_HI, SIG_LO, V_BULK_MAX, V_TRAVEL_MAX};

fn bounds(index: usize) -> (f64, f64) {
    match index {
        0 => (-PI, PI),
        1 => (-1., 1.),
        2 => (0., V_TRAVEL_MAX),
        3..=5 => (-V_BULK_MAX, V_BULK_MAX),
        6..=8 => (SIG_LO * SIG_LO, SIG_HI * SIG_HI),
        _ => unreachable!(),
    }
}

#[test]
fn test_transformed_draws_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(20240917);

    for _ in 0..10_000 {
        let mut cube = [0.; N_PARAMETERS];
        for value in cube.iter_mut() {
            *value = rng.gen::<f64>();
        }

        transform(&mut cube).unwrap();

        for (index, &value) in cube.iter().enumerate() {
            let (lo, hi) = bounds(index);
            assert!(
                (lo..=hi).contains(&value),
                "parameter {index} out of bounds: {value}"
            );
        }
    }
}

#[test]
fn test_transform_is_monotonic_per_coordinate() {
    let mut rng = StdRng::seed_from_u64(4740);

    for _ in 0..1_000 {
        let a: f64 = rng.gen();
        let b: f64 = rng.gen();
        let (u1, u2) = if a <= b { (a, b) } else { (b, a) };

        for index in 0..N_PARAMETERS {
            let mut lo_cube = [0.5; N_PARAMETERS];
            let mut hi_cube = [0.5; N_PARAMETERS];
            lo_cube[index] = u1;
            hi_cube[index] = u2;

            transform(&mut lo_cube).unwrap();
            transform(&mut hi_cube).unwrap();

            assert!(
                lo_cube[index] <= hi_cube[index],
                "parameter {index} not monotonic: u {u1} -> {}, u {u2} -> {}",
                lo_cube[index],
                hi_cube[index]
            );
        }
    }
}
