//! Viewport adapter for the `virtualscroll` windowing engine.
//!
//! The `virtualscroll` crate is UI-agnostic and focuses on the core math and state. This crate
//! provides the external-facing shell around it:
//!
//! - an explicit [`Event`] enum for the host's triggers (mount, resize, data change, scroll)
//! - a single [`ViewportAdapter::handle_event`] entry point that invokes the ledger, mapper and
//!   planner in the correct order, with measurement always completing before re-planning
//! - a host-agnostic [`RenderPlan`] (rows + positioning transform + loading overlay)
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings): the host
//! supplies row heights through a measurement callback and applies the render plan however it
//! renders.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod options;
mod overlay;
mod plan;


pub use adapter::{Event, ViewportAdapter};
pub use options::{AdapterOptions, LoadMoreCallback, RowKeyFn};
pub use overlay::OverlayContent;
pub use plan::{RenderPlan, RowSlot};
