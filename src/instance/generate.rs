use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::PackError;
use crate::packing::{DimensionBounds, RectFactory};

use super::PackingInstance;

/// Parameters for random instance generation.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorParams {
    pub count: usize,
    pub bin_side: u32,
    pub bounds: DimensionBounds,
    /// Fixed seed for a reproducible instance; `None` seeds from the OS
    pub seed: Option<u64>,
}

/// Generate an instance with dimensions drawn uniformly from the bounds.
pub fn generate(params: &GeneratorParams) -> Result<PackingInstance, PackError> {
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let bounds = params.bounds;
    let mut factory = RectFactory::with_bounds(bounds);
    let mut rects = Vec::with_capacity(params.count);

    for _ in 0..params.count {
        let width = rng.gen_range(bounds.min_width()..=bounds.max_width());
        let height = rng.gen_range(bounds.min_height()..=bounds.max_height());
        rects.push(factory.create(width, height)?);
    }

    Ok(PackingInstance {
        bin_side: params.bin_side,
        bounds,
        rects,
    })
}
