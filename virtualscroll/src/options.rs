/// Configuration for the windowing engine.
///
/// All values are in the units of the scroll axis: `chunk`, `overscroll` and `shift_gap` are row
/// counts; `load_gap` is layout pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowOptions {
    /// Granularity (row count) by which the render range is extended and by which more data is
    /// requested.
    pub chunk: usize,
    /// Extra rows rendered beyond the strictly visible window on reposition, to hide mount
    /// latency during fast scrolling.
    pub overscroll: usize,
    /// Early-warning margin (rows): the range is repositioned when the visible window comes
    /// within this many rows of the rendered window's end.
    pub shift_gap: usize,
    /// Proximity threshold (pixels) between the rendered range's bottom edge and the visible
    /// bottom edge that triggers extension / load-more.
    pub load_gap: u32,
}

impl WindowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunk(mut self, chunk: usize) -> Self {
        self.chunk = chunk;
        self
    }

    pub fn with_overscroll(mut self, overscroll: usize) -> Self {
        self.overscroll = overscroll;
        self
    }

    pub fn with_shift_gap(mut self, shift_gap: usize) -> Self {
        self.shift_gap = shift_gap;
        self
    }

    pub fn with_load_gap(mut self, load_gap: u32) -> Self {
        self.load_gap = load_gap;
        self
    }

    /// Validates the configuration.
    ///
    /// A zero `chunk` would stall range growth and a zero `overscroll` would reposition the
    /// range to exactly the visible window on every scroll tick; both are rejected.
    /// `shift_gap` and `load_gap` may be zero.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.chunk == 0 {
            return Err(OptionsError::ZeroChunk);
        }
        if self.overscroll == 0 {
            return Err(OptionsError::ZeroOverscroll);
        }
        Ok(())
    }
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            chunk: 20,
            overscroll: 10,
            shift_gap: 3,
            load_gap: 30,
        }
    }
}

/// An invalid [`WindowOptions`] value, reported at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionsError {
    ZeroChunk,
    ZeroOverscroll,
}

impl core::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroChunk => f.write_str("chunk must be at least 1 row"),
            Self::ZeroOverscroll => f.write_str("overscroll must be at least 1 row"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OptionsError {}
