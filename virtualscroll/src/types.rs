/// A half-open interval `[start, end)` over data indices.
///
/// Used both for the *render range* (rows currently mounted by the host) and for the *visible
/// range* computed by [`crate::mapper::locate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl RenderRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "RenderRange start must not exceed end");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Clamps the range into `[0, len]`, preserving `start <= end`.
    pub fn clamp_to(&mut self, len: usize) {
        self.end = self.end.min(len);
        self.start = self.start.min(self.end);
    }
}

/// The result of a load-driven validation pass ([`crate::RangePlanner::validate`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanOutcome {
    /// The render range's `end` was extended; the newly covered rows must be rendered and
    /// measured before the next validation pass.
    pub extended: bool,
    /// More data should be fetched starting at this index.
    pub load_more: Option<usize>,
}

impl PlanOutcome {
    pub const NONE: Self = Self {
        extended: false,
        load_more: None,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}
