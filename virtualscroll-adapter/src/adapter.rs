use alloc::vec::Vec;

use virtualscroll::{HeightLedger, OptionsError, RangePlanner, RenderRange, mapper};

use crate::{AdapterOptions, RenderPlan, RowSlot};

/// An external trigger delivered to [`ViewportAdapter::handle_event`].
///
/// This replaces the host scheduler's implicit wiring (layout effects, resize observers, scroll
/// handlers) with one explicit entry point, so the ordering guarantee (a measurement pass for a
/// render completes, and its re-plan decision is applied, before the next trigger is processed)
/// is enforced by the adapter itself rather than relied upon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The scroll container was mounted; measure everything currently rendered.
    Mounted,
    /// The container was resized. A width change can reflow text and change row heights, so it
    /// re-measures the rendered range; a height-only change just updates viewport geometry.
    Resized { width: u32, height: u32 },
    /// The external data set was replaced; `len` is its new length. A shrinking length is the
    /// reset signal.
    DataChanged { len: usize },
    /// The external `loading` flag changed.
    LoadingChanged(bool),
    /// The host reported a scroll. Only the reposition check runs in this stage; measurement
    /// and load checks are deferred to the follow-up pass.
    ScrollMoved { offset: i64 },
    /// Explicit request for a re-measure → re-plan pass, for renders the adapter did not
    /// trigger itself.
    MeasurementDue,
}

/// Pending follow-up work after the current trigger's own stage.
///
/// `Measure` subsumes `Plan`: a measurement pass always re-plans afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pass {
    Plan,
    Measure,
}

/// The external-facing shell of the windowing engine.
///
/// Owns the Height Ledger and Range Planner, runs the Scroll Mapper, and is the only mutation
/// path for either: single-threaded, cooperative, nothing here blocks. Long-running work
/// (fetching data) belongs entirely to the host, represented only by the `loading` flag.
///
/// The host drives it with [`Self::handle_event`], supplying a measurement capability
/// `measure(index) -> height` that must be able to report the current height of any row inside
/// the render range. Heights of rows outside the range are never requested; asking the ledger to
/// measure an unmounted row is a programming error on the adapter's side and is asserted.
#[derive(Clone)]
pub struct ViewportAdapter<K = u64> {
    options: AdapterOptions<K>,
    ledger: HeightLedger,
    planner: RangePlanner,
    viewport_width: u32,
    viewport_height: u32,
    scroll_offset: i64,
    data_len: usize,
    loading: bool,
    pending: Option<Pass>,
    // Within one trigger's drain, at most one load-more request is emitted: the synchronous
    // `on_load_more` callback cannot flip `loading` while the adapter is borrowed, so the flag
    // alone cannot dedupe here. Re-armed on every external trigger.
    load_requested: bool,
}

impl<K> ViewportAdapter<K> {
    /// Creates an adapter from validated options.
    pub fn new(options: AdapterOptions<K>) -> Result<Self, OptionsError> {
        let planner = RangePlanner::new(options.window)?;
        Ok(Self {
            options,
            ledger: HeightLedger::new(),
            planner,
            viewport_width: 0,
            viewport_height: 0,
            scroll_offset: 0,
            data_len: 0,
            loading: false,
            pending: None,
            load_requested: false,
        })
    }

    pub fn options(&self) -> &AdapterOptions<K> {
        &self.options
    }

    /// The rows currently expected to be mounted by the host.
    pub fn range(&self) -> RenderRange {
        self.planner.range()
    }

    /// Read-only view of the measured cumulative bottoms.
    pub fn ledger(&self) -> &HeightLedger {
        &self.ledger
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }

    pub fn scroll_offset(&self) -> i64 {
        self.scroll_offset
    }

    /// Feeds one external trigger through the engine and drains every follow-up pass before
    /// returning.
    ///
    /// `measure(i)` must return the current rendered height of row `i`, in layout pixels, for
    /// any `i` inside the render range; it is consulted only during measurement passes.
    pub fn handle_event(&mut self, event: Event, mut measure: impl FnMut(usize) -> f64) {
        va_trace!(?event, "handle_event");
        self.load_requested = false;

        match event {
            Event::Mounted => self.schedule(Pass::Measure),
            Event::Resized { width, height } => {
                let width_changed = width != self.viewport_width && self.viewport_width != 0;
                let height_changed = height != self.viewport_height;
                self.viewport_width = width;
                self.viewport_height = height;
                if width_changed {
                    va_debug!(width, "viewport width changed; re-measuring rendered rows");
                    self.schedule(Pass::Measure);
                } else if height_changed {
                    self.schedule(Pass::Plan);
                }
            }
            Event::DataChanged { len } => {
                self.data_len = len;
                if self.planner.sync_data_len(&mut self.ledger, len) {
                    va_debug!(len, "external reset detected");
                }
                self.schedule(Pass::Measure);
            }
            Event::LoadingChanged(loading) => {
                if self.loading != loading {
                    self.loading = loading;
                    self.schedule(Pass::Plan);
                }
            }
            Event::ScrollMoved { offset } => {
                self.scroll_offset = offset;
                let visible =
                    mapper::locate(self.ledger.bottoms(), offset, self.viewport_height);
                if self
                    .planner
                    .reposition(visible, self.data_len, self.at_scroll_end())
                {
                    self.schedule(Pass::Measure);
                }
            }
            Event::MeasurementDue => self.schedule(Pass::Measure),
        }

        self.pump(&mut measure);
    }

    /// What the host should render right now.
    pub fn render_plan(&self) -> RenderPlan<K> {
        let range = self.planner.range();
        let mut rows = Vec::with_capacity(range.len());
        self.for_each_row(|slot| rows.push(slot));
        RenderPlan {
            rows,
            translate_y: self.ledger.top_of(range.start),
            content_height: self.ledger.rendered_height(),
            overlay: self
                .loading
                .then(|| self.options.loading_overlay.clone()),
        }
    }

    /// Visits each rendered row in ascending data order without allocating.
    pub fn for_each_row(&self, mut f: impl FnMut(RowSlot<K>)) {
        let range = self.planner.range();
        for index in range.start..range.end {
            f(RowSlot {
                index,
                key: (self.options.get_row_key)(index),
            });
        }
    }

    /// Distance-to-bottom rule: the viewport is at the scroll end when the visible bottom edge
    /// is within one pixel of the rendered content extent.
    fn at_scroll_end(&self) -> bool {
        self.ledger.rendered_height() <= self.effective_bottom()
    }

    /// The visible bottom edge in content pixels: inverted scroll offset plus viewport height.
    fn effective_bottom(&self) -> u64 {
        mapper::effective_top(self.scroll_offset).saturating_add(self.viewport_height as u64)
    }

    fn schedule(&mut self, pass: Pass) {
        self.pending = Some(match (self.pending, pass) {
            (Some(Pass::Measure), _) | (_, Pass::Measure) => Pass::Measure,
            _ => Pass::Plan,
        });
    }

    /// Drains pending passes: re-measure the rendered range, then re-plan. An extension
    /// schedules another measurement pass (the newly covered rows must be measured before the
    /// next load check), so each trigger settles completely before `handle_event` returns.
    ///
    /// Terminates: every extension strictly grows the range end, which is capped at the data
    /// length, and a settled ledger stops producing follow-up work.
    fn pump(&mut self, measure: &mut impl FnMut(usize) -> f64) {
        while let Some(pass) = self.pending.take() {
            if pass == Pass::Measure {
                let range = self.planner.range();
                debug_assert!(
                    range.end <= self.data_len,
                    "render range must stay inside the data set ({range:?}, len={})",
                    self.data_len
                );
                self.ledger.remeasure(range, &mut *measure);
            }

            let outcome = self.planner.validate(
                &self.ledger,
                self.effective_bottom(),
                self.data_len,
                self.loading || self.load_requested,
            );
            if outcome.extended {
                self.schedule(Pass::Measure);
            }
            if let Some(start) = outcome.load_more {
                va_debug!(start, "requesting more data");
                self.load_requested = true;
                if let Some(cb) = &self.options.on_load_more {
                    cb(start);
                }
            }
        }
    }
}

impl<K> core::fmt::Debug for ViewportAdapter<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewportAdapter")
            .field("range", &self.planner.range())
            .field("measured", &self.ledger.len())
            .field("data_len", &self.data_len)
            .field("loading", &self.loading)
            .field("viewport", &(self.viewport_width, self.viewport_height))
            .field("scroll_offset", &self.scroll_offset)
            .finish_non_exhaustive()
    }
}
