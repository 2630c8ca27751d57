use alloc::vec::Vec;

use crate::RenderRange;

/// Cumulative row heights discovered through measurement.
///
/// `bottoms[i]` is the cumulative height, in layout pixels, of rows `0..=i` measured from the
/// start of the data set. The sequence is non-decreasing and only contains entries for rows that
/// have been rendered and measured at least once, so `len() <= data_len` always.
///
/// Entries inside the currently rendered range are authoritative; entries above it may be stale
/// until [`Self::remeasure`] shifts them. Entries below the rendered range are never revisited:
/// rows are appended, not reordered.
///
/// The buffer is exclusively owned here; callers only get read-only views.
#[derive(Clone, Debug, Default)]
pub struct HeightLedger {
    bottoms: Vec<u64>,
}

impl HeightLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bottoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bottoms.is_empty()
    }

    /// Read-only view of the cumulative bottoms, for offset → index mapping.
    pub fn bottoms(&self) -> &[u64] {
        &self.bottoms
    }

    /// Drops every measurement. Used by the reset rule when the data set shrinks.
    pub fn clear(&mut self) {
        self.bottoms.clear();
    }

    /// The measured scrollable extent: the bottom of the last measured row.
    pub fn rendered_height(&self) -> u64 {
        self.bottoms.last().copied().unwrap_or(0)
    }

    /// Cumulative height of all rows before `start`: the positioning transform that aligns the
    /// windowed subset within the full scrollable extent.
    pub fn top_of(&self, start: usize) -> u64 {
        if start > 0 && start < self.bottoms.len() {
            self.bottoms[start - 1]
        } else {
            0
        }
    }

    /// The bottom edge (pixels) of the row just before `end`, i.e. of the render range
    /// `[_, end)`. Zero for an empty range or an empty ledger.
    pub fn bottom_of(&self, end: usize) -> u64 {
        if end == 0 {
            return 0;
        }
        self.bottoms
            .get(end - 1)
            .copied()
            .unwrap_or_else(|| self.rendered_height())
    }

    /// Re-measures every row in `range`, recomputing cumulative bottoms and shifting everything
    /// after the changed window by the accumulated delta, so untouched rows keep their relative
    /// positions without being re-measured.
    ///
    /// `measure(i)` must return the current rendered height of row `i`; calling it for a row
    /// that is not currently mounted is a caller bug (the adapter layer asserts the range).
    /// `range.start` must not exceed the ledger's length: rows are measured contiguously, a gap
    /// would leave unmeasured holes.
    ///
    /// Heights are floored to whole pixels before comparison, so sub-pixel jitter from the
    /// layout engine can never register as a change and trigger an endless re-measurement loop.
    /// Negative and non-finite measurements clamp to zero: transient zero-height rows during
    /// mount are expected, not an error.
    ///
    /// Returns whether any stored bottom changed (or was appended); callers use this to decide
    /// whether a dependent re-plan pass is required.
    pub fn remeasure(&mut self, range: RenderRange, mut measure: impl FnMut(usize) -> f64) -> bool {
        debug_assert!(
            range.start <= self.bottoms.len(),
            "remeasure range starts past the measured rows (start={}, measured={})",
            range.start,
            self.bottoms.len()
        );

        let mut changed = false;
        let known = range.end.min(self.bottoms.len());

        // Recompute rows the ledger already knows about, each from the (already recomputed)
        // previous bottom.
        let tail_before = if known > 0 { self.bottoms[known - 1] } else { 0 };
        for i in range.start..known {
            let height = px_floor(measure(i));
            let prev = if i > 0 { self.bottoms[i - 1] } else { 0 };
            let next = prev.saturating_add(height);
            if next != self.bottoms[i] {
                vs_trace!(index = i, old = self.bottoms[i], new = next, "row bottom changed");
                self.bottoms[i] = next;
                changed = true;
            }
        }
        let tail_after = if known > 0 { self.bottoms[known - 1] } else { 0 };

        // Shift the stale entries above the recomputed window by the net delta.
        let delta = tail_after as i64 - tail_before as i64;
        if delta != 0 {
            vs_debug!(delta, from = known, "shifting bottoms after remeasured window");
            for b in &mut self.bottoms[known..] {
                *b = (*b as i64).saturating_add(delta).max(0) as u64;
            }
        }

        // First-time measurements: rows newly covered by the render range.
        for i in self.bottoms.len()..range.end {
            let top = self.bottoms.last().copied().unwrap_or(0);
            self.bottoms.push(top.saturating_add(px_floor(measure(i))));
            changed = true;
        }

        changed
    }
}

/// Rounding policy: heights enter the ledger floored to whole layout pixels, clamped to zero.
fn px_floor(height: f64) -> u64 {
    if height.is_finite() && height > 0.0 {
        height as u64
    } else {
        0
    }
}
