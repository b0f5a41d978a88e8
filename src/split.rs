//! Seeded train/test partitioning
//!
//! A fixed seed over unchanged input always yields the same partition, so
//! repeated runs reproduce identical evaluation numbers.

use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split `n` row indices into (train, test) partitions
///
/// Indices are shuffled with a seeded generator; the test partition takes the
/// first `ceil(n * test_fraction)` shuffled indices, the train partition the
/// rest.
///
/// # Example
///
/// ```
/// use calificar::split::train_test_split;
///
/// let (train, test) = train_test_split(10, 0.2, 42).unwrap();
/// assert_eq!(train.len(), 8);
/// assert_eq!(test.len(), 2);
/// ```
pub fn train_test_split(n: usize, test_fraction: f64, seed: u64) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(Error::Split(format!(
            "test_fraction must be in (0, 1), got {test_fraction}"
        )));
    }

    let n_test = ((n as f64) * test_fraction).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(Error::Split(format!(
            "cannot split {n} rows into non-empty partitions with test_fraction {test_fraction}"
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train = indices.split_off(n_test);
    let test = indices;

    Ok((train, test))
}

/// Select records at the given indices, preserving index order
pub fn take<T: Clone>(records: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| records[i].clone()).collect()
}
