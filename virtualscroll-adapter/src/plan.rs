use alloc::vec::Vec;

use crate::OverlayContent;

/// One rendered row in a [`RenderPlan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowSlot<K> {
    /// The row's data index: the stable tag the host must attach so the row can be measured
    /// back by index.
    pub index: usize,
    /// The caller's stable unique key for this row.
    pub key: K,
}

/// What the host should render right now.
///
/// Rows are listed in ascending data order; the host stacks them in reverse, so the lowest
/// index anchors at the visible end of the viewport and ascending indices stack away from it
/// (reverse flow: the scroll direction interpretation and the visual stacking order are both
/// inverted, consistently).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderPlan<K> {
    pub rows: Vec<RowSlot<K>>,
    /// Cumulative height of all rows before the first rendered row: the positioning transform
    /// that visually aligns the windowed subset within the full scrollable extent.
    pub translate_y: u64,
    /// The measured scrollable extent (bottom of the last measured row).
    pub content_height: u64,
    /// Present while `loading` is set.
    pub overlay: Option<OverlayContent>,
}
