//! A headless windowing engine for incrementally loaded lists.
//!
//! For the event-driven orchestration shell (triggers, render plans, loading overlay), see the
//! `virtualscroll-adapter` crate.
//!
//! This crate solves the "virtual list" problem for lists whose row heights are only knowable
//! after a row has been rendered once, and whose data arrives in pages from an external source:
//! cumulative row heights discovered through measurement, fast offset → index lookup over them,
//! and a render-range policy that extends the window and requests more data before the user
//! outruns what has been loaded.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size (height/width)
//! - raw scroll offset (negative in reverse-flow layouts)
//! - a way to measure a currently rendered row's height
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod ledger;
pub mod mapper;
mod options;
mod planner;
mod types;

#[cfg(test)]
mod tests;

pub use ledger::HeightLedger;
pub use options::{OptionsError, WindowOptions};
pub use planner::RangePlanner;
pub use types::{PlanOutcome, RenderRange};
