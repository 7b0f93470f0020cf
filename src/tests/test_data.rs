use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::LabeledItem;

/// Uniform noise in [-1, 1) per coordinate, scaled per dimension.
///
/// Decreasing `scales` give well-separated principal directions.
pub fn make_anisotropic(n_items: usize, scales: &[f64], seed: u64) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n_items)
        .map(|_| {
            scales
                .iter()
                .map(|s| s * rng.random_range(-1.0..1.0) + 0.5)
                .collect()
        })
        .collect()
}

/// Non-negative keyword-like items with labels "item-{i}".
pub fn make_items(n_items: usize, dims: usize, seed: u64) -> Vec<LabeledItem> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n_items)
        .map(|i| {
            let v = (0..dims).map(|_| rng.random_range(0.0..1.0)).collect();
            LabeledItem::new(format!("item-{i}"), v)
        })
        .collect()
}

pub fn shuffled_indices(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut idx: Vec<usize> = (0..n).collect();
    idx.shuffle(&mut rng);
    idx
}
