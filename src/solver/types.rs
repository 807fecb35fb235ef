use crate::packing::Bin;

/// A completed packing.
#[derive(Debug)]
pub struct PackingSolution {
    /// Final bins, in creation order
    pub bins: Vec<Bin>,
    /// Bin count straight out of first-fit, before compaction
    pub initial_bins: usize,
    /// Accepted relocations during compaction
    pub moves: usize,
    /// Compaction passes, including the final moveless pass
    pub passes: usize,
    /// True if compaction hit its pass cap
    pub capped: bool,
}

impl PackingSolution {
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Sum of occupied area across all bins.
    pub fn total_occupied(&self) -> u64 {
        self.bins.iter().map(Bin::occupied_area).sum()
    }

    /// Smallest bin count any packing could reach, by area alone.
    pub fn lower_bound(&self) -> usize {
        match self.bins.first() {
            Some(bin) => {
                let bound = self.total_occupied().div_ceil(bin.capacity());
                usize::try_from(bound).unwrap_or(usize::MAX)
            }
            None => 0,
        }
    }

    /// Fill ratio over all bins, 0.0 to 1.0.
    pub fn utilization(&self) -> f64 {
        let capacity: u64 = self.bins.iter().map(Bin::capacity).sum();
        if capacity == 0 {
            return 0.0;
        }
        self.total_occupied() as f64 / capacity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::{DimensionBounds, RectFactory};

    fn solution_with_two_bins() -> PackingSolution {
        let bounds = DimensionBounds::new(1, 1, 10, 10).expect("valid bounds");
        let mut factory = RectFactory::with_bounds(bounds);

        let mut first = Bin::new(10).expect("valid side");
        first.add(factory.create(6, 10).expect("in range"));
        let mut second = Bin::new(10).expect("valid side");
        second.add(factory.create(10, 9).expect("in range"));

        PackingSolution {
            bins: vec![first, second],
            initial_bins: 2,
            moves: 0,
            passes: 1,
            capped: false,
        }
    }

    #[test]
    fn test_totals_and_lower_bound() {
        let solution = solution_with_two_bins();

        assert_eq!(solution.bin_count(), 2);
        assert_eq!(solution.total_occupied(), 150);
        // ceil(150 / 100)
        assert_eq!(solution.lower_bound(), 2);
    }

    #[test]
    fn test_utilization_is_fill_over_capacity() {
        let solution = solution_with_two_bins();
        let utilization = solution.utilization();
        assert!((utilization - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_empty_solution_degenerates_to_zero() {
        let solution = PackingSolution {
            bins: Vec::new(),
            initial_bins: 0,
            moves: 0,
            passes: 0,
            capped: false,
        };

        assert_eq!(solution.lower_bound(), 0);
        assert!(solution.utilization().abs() < 1e-9);
    }
}
