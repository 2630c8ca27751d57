use alloc::string::String;
use alloc::string::ToString;

/// A replaceable description of the overlay shown while a fetch is outstanding.
///
/// The adapter never renders anything itself; it only surfaces this value through
/// [`crate::RenderPlan::overlay`] while `loading` is set. Hosts draw it however they like;
/// the default describes a centered "Loading..." label over a dimmed backdrop.
///
/// If the external fetch never completes, the overlay stays visible indefinitely; that is
/// intentional, the adapter has no timeout of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayContent {
    pub message: String,
    pub dim_backdrop: bool,
}

impl OverlayContent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            dim_backdrop: true,
        }
    }

    pub fn with_dim_backdrop(mut self, dim_backdrop: bool) -> Self {
        self.dim_backdrop = dim_backdrop;
        self
    }
}

impl Default for OverlayContent {
    fn default() -> Self {
        Self {
            message: "Loading...".to_string(),
            dim_backdrop: true,
        }
    }
}
