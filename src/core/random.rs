use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use super::error::{Result, SimulationError, ensure_finite, ensure_stdev};
use super::types::SimulationMatrix;

/// A reproducible generator for `Some(seed)`, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// `rows x cols` independent draws from `Normal(mean, stdev)`, filled row by row.
pub fn generate_noise_matrix<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    mean: f64,
    stdev: f64,
    rng: &mut R,
) -> Result<SimulationMatrix> {
    if rows < 1 || cols < 1 {
        return Err(SimulationError::InvalidDimension(format!(
            "noise matrix must be at least 1x1, got {rows}x{cols}"
        )));
    }
    ensure_finite("mean", mean)?;
    ensure_stdev("stdev", stdev)?;

    let data = (0..rows * cols)
        .map(|_| {
            let z: f64 = StandardNormal.sample(&mut *rng);
            mean + z * stdev
        })
        .collect();
    Ok(SimulationMatrix::from_row_major(rows, cols, data))
}
