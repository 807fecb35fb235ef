use std::fmt::Write as _;

use crate::packing::Bin;
use crate::solver::PackingSolution;

/// Render a per-bin summary with the contained rectangles.
pub fn render_summary(solution: &PackingSolution) -> String {
    let mut out = String::new();

    for (index, bin) in solution.bins.iter().enumerate() {
        let _ = writeln!(
            out,
            "bin {}: {} rect(s), occupied {}/{}, free {}",
            index,
            bin.len(),
            bin.occupied_area(),
            bin.capacity(),
            bin.free_area()
        );
        for rect in bin.rects() {
            let _ = writeln!(
                out,
                "  [{}] {}x{} (area {})",
                rect.id(),
                rect.width(),
                rect.height(),
                rect.area()
            );
        }
    }

    out
}

/// Draw the outline of a bin as an ASCII square, one character per unit.
pub fn draw_bin(bin: &Bin) -> String {
    #[expect(clippy::cast_possible_truncation, reason = "bin sides are small")]
    let side = bin.side() as usize;
    let mut out = String::with_capacity((side + 1) * side);

    for row in 0..side {
        for col in 0..side {
            if row == 0 || row == side - 1 || col == 0 || col == side - 1 {
                out.push('*');
            } else {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::{DimensionBounds, RectFactory};
    use crate::solver::PackingSolution;

    #[test]
    fn test_draw_bin_outlines_the_square() {
        let bin = Bin::new(3).expect("valid side");
        assert_eq!(draw_bin(&bin), "***\n* *\n***\n");
    }

    #[test]
    fn test_draw_bin_single_cell() {
        let bin = Bin::new(1).expect("valid side");
        assert_eq!(draw_bin(&bin), "*\n");
    }

    #[test]
    fn test_summary_lists_bins_and_rects() {
        let bounds = DimensionBounds::new(1, 1, 10, 10).expect("valid bounds");
        let mut factory = RectFactory::with_bounds(bounds);

        let mut bin = Bin::new(10).expect("valid side");
        bin.add(factory.create(3, 4).expect("in range"));

        let solution = PackingSolution {
            bins: vec![bin],
            initial_bins: 1,
            moves: 0,
            passes: 1,
            capped: false,
        };

        let summary = render_summary(&solution);
        assert!(summary.contains("bin 0: 1 rect(s), occupied 12/100, free 88"));
        assert!(summary.contains("3x4 (area 12)"));
    }
}
