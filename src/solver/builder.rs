use anyhow::Result;
use log::{debug, info};

use crate::cli::RectOrdering;
use crate::error::PackError;
use crate::packing::local_search::{self, CompactionStats, DEFAULT_MAX_PASSES};
use crate::packing::{Rect, first_fit};

use super::PackingSolution;

/// Configuration for a packing run.
pub struct Solver {
    bin_side: u32,
    ordering: RectOrdering,
    optimize: bool,
    max_passes: usize,
}

impl Solver {
    pub fn new(bin_side: u32) -> Self {
        Self {
            bin_side,
            ordering: RectOrdering::default(),
            optimize: true,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    pub fn ordering(mut self, ordering: RectOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Enable or disable the local-search compaction pass.
    pub fn optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Pack the rectangles into bins.
    pub fn solve(&self, rects: Vec<Rect>) -> Result<PackingSolution> {
        if rects.is_empty() {
            return Err(PackError::EmptyInstance.into());
        }

        debug!(
            "packing {} rectangles into {}x{} bins ({:?} ordering)",
            rects.len(),
            self.bin_side,
            self.bin_side,
            self.ordering
        );

        let mut bins = first_fit::pack(rects, self.bin_side, self.ordering)?;
        let initial_bins = bins.len();
        info!("first-fit placed into {} bin(s)", initial_bins);

        let stats = if self.optimize {
            let stats = local_search::compact(&mut bins, self.max_passes);
            info!(
                "local search removed {} bin(s) in {} move(s) over {} pass(es)",
                initial_bins - bins.len(),
                stats.moves,
                stats.passes
            );
            stats
        } else {
            CompactionStats::default()
        };

        Ok(PackingSolution {
            bins,
            initial_bins,
            moves: stats.moves,
            passes: stats.passes,
            capped: stats.capped,
        })
    }
}
