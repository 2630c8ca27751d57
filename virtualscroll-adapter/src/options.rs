use alloc::sync::Arc;

use virtualscroll::WindowOptions;

use crate::OverlayContent;

/// A callback fired when more data should be fetched starting at the given index.
///
/// The adapter does not await anything: the host is responsible for flipping the `loading` flag
/// (via [`crate::Event::LoadingChanged`]) before starting the fetch and clearing it afterwards,
/// and the planner trusts that flag as its sole backpressure signal.
pub type LoadMoreCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Maps a data index to the row's stable unique key.
pub type RowKeyFn<K> = Arc<dyn Fn(usize) -> K + Send + Sync>;

/// Configuration for [`crate::ViewportAdapter`].
///
/// Cheap to clone: closures are stored in `Arc`s.
pub struct AdapterOptions<K = u64> {
    /// Core windowing configuration (chunk, overscroll, shift gap, load gap).
    pub window: WindowOptions,
    /// Stable key per data index, carried on each [`crate::RowSlot`] so hosts can key their
    /// rendering tree. The adapter never diffs keys.
    pub get_row_key: RowKeyFn<K>,
    /// Invoked when more data should be fetched starting at the given index.
    pub on_load_more: Option<LoadMoreCallback>,
    /// Overlay surfaced while `loading` is set. A default is provided.
    pub loading_overlay: OverlayContent,
}

impl AdapterOptions<u64> {
    /// Creates options for a list keyed by index (`K = u64`).
    pub fn new() -> Self {
        Self {
            window: WindowOptions::default(),
            get_row_key: Arc::new(|i| i as u64),
            on_load_more: None,
            loading_overlay: OverlayContent::default(),
        }
    }
}

impl Default for AdapterOptions<u64> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> AdapterOptions<K> {
    /// Creates options with a custom key mapping.
    pub fn new_with_key(get_row_key: impl Fn(usize) -> K + Send + Sync + 'static) -> Self {
        Self {
            window: WindowOptions::default(),
            get_row_key: Arc::new(get_row_key),
            on_load_more: None,
            loading_overlay: OverlayContent::default(),
        }
    }

    pub fn with_window(mut self, window: WindowOptions) -> Self {
        self.window = window;
        self
    }

    pub fn with_get_row_key(
        mut self,
        get_row_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_row_key = Arc::new(get_row_key);
        self
    }

    pub fn with_on_load_more(
        mut self,
        on_load_more: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_load_more = on_load_more.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_loading_overlay(mut self, loading_overlay: OverlayContent) -> Self {
        self.loading_overlay = loading_overlay;
        self
    }
}

impl<K> Clone for AdapterOptions<K> {
    fn clone(&self) -> Self {
        Self {
            window: self.window,
            get_row_key: Arc::clone(&self.get_row_key),
            on_load_more: self.on_load_more.clone(),
            loading_overlay: self.loading_overlay.clone(),
        }
    }
}

impl<K> core::fmt::Debug for AdapterOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdapterOptions")
            .field("window", &self.window)
            .field("loading_overlay", &self.loading_overlay)
            .finish_non_exhaustive()
    }
}
