use log::debug;

use crate::cli::RectOrdering;
use crate::error::PackError;

use super::{Bin, Rect};

/// Create placement order indices for the given ordering strategy.
///
/// All sorts are stable, so rectangles with equal keys keep their input
/// order and placement is fully deterministic for a given input sequence.
pub fn sorted_order(rects: &[Rect], ordering: RectOrdering) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rects.len()).collect();

    match ordering {
        RectOrdering::AreaDesc => {
            indices.sort_by(|&a, &b| rects[b].area().cmp(&rects[a].area()));
        }
        RectOrdering::HeightDesc => {
            indices.sort_by(|&a, &b| rects[b].height().cmp(&rects[a].height()));
        }
        RectOrdering::PerimeterDesc => {
            indices.sort_by(|&a, &b| {
                let perim_a = u64::from(rects[a].width()) + u64::from(rects[a].height());
                let perim_b = u64::from(rects[b].width()) + u64::from(rects[b].height());
                perim_b.cmp(&perim_a)
            });
        }
    }

    indices
}

/// Place rectangles into bins with first-fit in the given order.
///
/// Each rectangle goes into the first existing bin with enough free area,
/// scanning bins in creation order; a new bin is appended when none fits.
/// Fails up front if any rectangle could never fit an empty bin, so no bin
/// is ever filled past its capacity.
pub fn pack(rects: Vec<Rect>, side: u32, ordering: RectOrdering) -> Result<Vec<Bin>, PackError> {
    if side == 0 {
        return Err(PackError::InvalidBinSide);
    }
    let capacity = u64::from(side) * u64::from(side);

    for rect in &rects {
        if rect.area() > capacity {
            return Err(PackError::RectTooLarge {
                id: rect.id(),
                width: rect.width(),
                height: rect.height(),
                side,
            });
        }
    }

    let order = sorted_order(&rects, ordering);
    let mut slots: Vec<Option<Rect>> = rects.into_iter().map(Some).collect();
    let mut bins: Vec<Bin> = Vec::new();

    for idx in order {
        // Each index appears exactly once in the order
        #[expect(clippy::expect_used, reason = "order indices are unique")]
        let rect = slots[idx].take().expect("rectangle already placed");

        match bins.iter_mut().find(|bin| bin.can_fit(&rect)) {
            Some(bin) => bin.add(rect),
            None => {
                let mut bin = Bin::new(side)?;
                bin.add(rect);
                bins.push(bin);
            }
        }
    }

    debug!("first-fit produced {} bin(s)", bins.len());
    Ok(bins)
}
