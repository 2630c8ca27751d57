use crate::{HeightLedger, OptionsError, PlanOutcome, RenderRange, WindowOptions};

/// Owns the render range and decides when to move it, grow it, or ask for more data.
///
/// The range lifecycle is `[0,0)` → growing (end extended by chunk, possibly interleaved with
/// load requests) → repositioned (jump on far scroll) → growing…, with `[0,0)` re-entered on
/// external reset. There is no terminal state.
#[derive(Clone, Debug)]
pub struct RangePlanner {
    options: WindowOptions,
    range: RenderRange,
}

impl RangePlanner {
    /// Creates a planner from validated options.
    pub fn new(options: WindowOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            options,
            range: RenderRange::EMPTY,
        })
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// The currently rendered index range `[start, end)`.
    pub fn range(&self) -> RenderRange {
        self.range
    }

    /// Applies the reset rule, then clamps the range into the data bounds.
    ///
    /// A data length below the ledger's recorded length is the sole signal that the external
    /// data source was reset: the ledger is cleared and the range collapses to `[0,0)` before
    /// any other planning logic runs. Returns whether a reset occurred.
    pub fn sync_data_len(&mut self, ledger: &mut HeightLedger, data_len: usize) -> bool {
        if data_len < ledger.len() {
            vs_debug!(
                data_len,
                measured = ledger.len(),
                "data shrank; resetting ledger and render range"
            );
            ledger.clear();
            self.range = RenderRange::EMPTY;
            return true;
        }
        self.range.clamp_to(data_len);
        false
    }

    /// Scroll-driven reposition check.
    ///
    /// Fires when the visible window is about to exit the rendered window: it has moved above
    /// `range.start`, or past `range.end` minus the `shift_gap` early-warning margin. The new
    /// range is the visible window padded by `overscroll` rows on both sides, clamped to the
    /// data bounds.
    ///
    /// The new range is applied when it differs from the current one, or when the viewport is at
    /// the scroll end (`at_scroll_end`): at the boundary, an unchanged range must still force a
    /// validation pass so data-loading checks re-run.
    ///
    /// Returns whether the caller needs a follow-up measurement/validation pass.
    pub fn reposition(
        &mut self,
        visible: RenderRange,
        data_len: usize,
        at_scroll_end: bool,
    ) -> bool {
        let cur = self.range;
        let leaving = visible.start < cur.start
            || visible.end > cur.end.saturating_sub(self.options.shift_gap);
        if !leaving {
            return false;
        }

        let mut next = RenderRange {
            start: visible.start.saturating_sub(self.options.overscroll),
            end: visible.end.saturating_add(self.options.overscroll),
        };
        next.clamp_to(data_len);

        if next != cur || at_scroll_end {
            vs_debug!(
                start = next.start,
                end = next.end,
                at_scroll_end,
                "repositioning render range"
            );
            self.range = next;
            return true;
        }
        false
    }

    /// Load-driven extension check, run after every measurement pass.
    ///
    /// `effective_bottom` is the visible bottom edge in content pixels (inverted scroll offset
    /// plus viewport height). When the rendered range's bottom edge comes within `load_gap`
    /// pixels of it and no load is in flight:
    ///
    /// - unrendered-but-loaded rows exist → extend `end` by a chunk, capped at `data_len`; the
    ///   extension is applied first so the UI immediately shows rows it already has. If the cap
    ///   cut the extension short, additionally request more data starting at `data_len`.
    /// - no unrendered data at all → request more data directly.
    ///
    /// `loading` is trusted as the sole backpressure signal; while it is set no request is
    /// issued.
    pub fn validate(
        &mut self,
        ledger: &HeightLedger,
        effective_bottom: u64,
        data_len: usize,
        loading: bool,
    ) -> PlanOutcome {
        let range_bottom = ledger.bottom_of(self.range.end);
        if range_bottom.saturating_sub(self.options.load_gap as u64) > effective_bottom || loading
        {
            return PlanOutcome::NONE;
        }

        if data_len > self.range.end {
            let end = self.range.end.saturating_add(self.options.chunk).min(data_len);
            let grew = end - self.range.end;
            vs_debug!(start = self.range.start, end, "extending render range");
            self.range.end = end;
            PlanOutcome {
                extended: true,
                load_more: (grew < self.options.chunk).then_some(data_len),
            }
        } else {
            vs_trace!(start_index = data_len, "requesting more data");
            PlanOutcome {
                extended: false,
                load_more: Some(data_len),
            }
        }
    }
}
