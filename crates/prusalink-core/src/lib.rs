//! Domain layer between `prusalink-api` and consumers.
//!
//! This crate owns the stable printer model and the status normalization
//! logic for the workspace:
//!
//! - **[`Monitor`]** — Thin facade over [`prusalink_api::LinkClient`]
//!   exposing the one high-level operation: fetch the current
//!   [`Printer`] snapshot. Immutable after construction; one network
//!   round-trip per call, no background tasks, no caching.
//!
//! - **Domain model** ([`model`]) — [`Printer`] snapshot with a single
//!   classified [`PrinterState`], per-sensor temperatures split into bed
//!   and tool channels, active material, and print speed.
//!
//! - **Normalization** ([`convert`]) — Maps the raw, partially redundant
//!   flag set from the device into exactly one state via a priority-ordered
//!   decision chain, and assembles snapshots from raw payloads.

pub mod convert;
pub mod error;
pub mod model;
pub mod monitor;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use model::{Printer, PrinterState, Temperature};
pub use monitor::Monitor;
