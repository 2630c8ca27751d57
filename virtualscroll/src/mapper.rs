//! Scroll offset → visible index range mapping.
//!
//! The host lays the list out in reverse flow (newest row anchored at the visible bottom), so
//! the raw scroll offset it reports is zero-or-negative and grows more negative as the user
//! scrolls back through history. [`effective_top`] inverts it into a distance from the start of
//! the measured content; [`locate`] maps that distance to data indices via binary search over
//! the ledger's cumulative bottoms.

use crate::RenderRange;

/// Inverts a raw reverse-flow scroll offset into a non-negative distance from the content start.
pub fn effective_top(scroll_offset: i64) -> u64 {
    scroll_offset.min(0).unsigned_abs()
}

/// Maps a raw scroll offset to the visible index range `[start, end)`.
///
/// `start` is the first index whose cumulative bottom is `>= effective_top` (lower bound, binary
/// search, O(log n)). `end` is the first index at or after `start` whose cumulative bottom
/// strictly exceeds the visible bottom edge, found by a forward scan bounded by how many rows
/// fit on screen.
///
/// An empty ledger yields `[0, 0)`. An offset past all measured rows yields the empty range
/// `[len, len)`; that is expected, and resolved by the planner extending the render range so the
/// missing rows get measured.
pub fn locate(bottoms: &[u64], scroll_offset: i64, viewport_height: u32) -> RenderRange {
    if bottoms.is_empty() {
        return RenderRange::EMPTY;
    }

    let top = effective_top(scroll_offset);
    let bottom = top.saturating_add(viewport_height as u64);

    let start = lower_bound(bottoms, top);
    let mut end = start;
    while end < bottoms.len() && bottoms[end] <= bottom {
        end += 1;
    }

    RenderRange { start, end }
}

/// First index whose value is `>= target`, or `bottoms.len()` when none is.
fn lower_bound(bottoms: &[u64], target: u64) -> usize {
    let mut lo = 0usize;
    let mut hi = bottoms.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if bottoms[mid] < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
