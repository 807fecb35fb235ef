use log::{debug, warn};

use super::Bin;

/// Default cap on compaction passes.
pub const DEFAULT_MAX_PASSES: usize = 10_000;

/// Outcome of a compaction run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactionStats {
    /// Accepted relocations
    pub moves: usize,
    /// Scans over the bin list, including the final scan that found no move
    pub passes: usize,
    /// True if the pass cap stopped the search before a moveless scan
    pub capped: bool,
}

/// Relocate rectangles between bins until no move is possible.
///
/// First-improvement hill climbing: bins are scanned in list order, each
/// rectangle is offered to every other bin in list order, and the first fit
/// wins. An accepted move restarts the scan from the front; a source bin
/// left empty is dropped from the list. A scan that accepts nothing ends the
/// search.
///
/// Relocations can oscillate between bins without ever emptying one, so the
/// pass cap is a hard stop, not just a safety margin. Hitting it leaves a
/// valid packing and sets `capped`.
///
/// Total occupied area is conserved and no bin is filled past capacity at
/// any point; the bin count only ever shrinks.
pub fn compact(bins: &mut Vec<Bin>, max_passes: usize) -> CompactionStats {
    let mut stats = CompactionStats::default();

    loop {
        if stats.passes >= max_passes {
            warn!("compaction stopped at the {max_passes}-pass cap");
            stats.capped = true;
            break;
        }
        stats.passes += 1;

        match find_move(bins) {
            Some((source, id, target)) => {
                #[expect(clippy::expect_used, reason = "find_move saw this id in this bin")]
                let rect = bins[source].remove(id).expect("rectangle vanished mid-move");
                bins[target].add(rect);
                stats.moves += 1;

                if bins[source].is_empty() {
                    bins.remove(source);
                    debug!("emptied a bin, {} remaining", bins.len());
                }
            }
            None => break,
        }
    }

    stats
}

/// First (source bin, rectangle id, target bin) in scan order, if any.
fn find_move(bins: &[Bin]) -> Option<(usize, u64, usize)> {
    for (source, bin) in bins.iter().enumerate() {
        for rect in bin.rects() {
            let target = bins
                .iter()
                .enumerate()
                .find(|&(other, candidate)| other != source && candidate.can_fit(rect));

            if let Some((target, _)) = target {
                return Some((source, rect.id(), target));
            }
        }
    }

    None
}
