// ── Printer domain types ──

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use prusalink_api::printer::PrinterResponse;

/// Printer operational state -- normalized from `link_state` and the flag set.
///
/// This enumeration is closed: the normalizer always produces exactly one
/// of these values and never anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrinterState {
    /// The device reported a `link_state` this client does not recognize
    /// (likely a protocol version skew -- surfaced, not reinterpreted).
    Unknown,
    Idle,
    Ready,
    Busy,
    Paused,
    Printing,
    Finished,
    Stopped,
    Error,
    Attention,
}

impl PrinterState {
    /// State where the printer is actively working on (or holding) a job.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Printing | Self::Paused | Self::Busy)
    }

    /// State that warrants operator intervention.
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::Error | Self::Attention)
    }
}

/// An `{actual, target}` temperature pair in degrees Celsius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub actual: f64,
    pub target: f64,
}

/// One point-in-time normalized view of printer status.
///
/// Created fresh on every poll, immutable once built -- there is no
/// identity beyond the moment it was captured, and no subscription or
/// stream behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Printer {
    /// Classified operational state.
    pub state: PrinterState,
    /// Loaded material as reported by the printer, e.g. "PETG".
    /// Empty when nothing is loaded.
    pub material: String,
    /// Print speed in percent. Passed through from telemetry unclamped.
    pub print_speed: i32,
    /// Number of hot ends -- always equals `tool_temperatures.len()`.
    pub tool_count: usize,
    /// Bed temperature. Zero-valued when no `"bed"` sensor is present.
    pub bed_temperature: Temperature,
    /// Per-tool temperatures, keyed by sensor name (`"tool0"`, `"tool1"`, ...).
    pub tool_temperatures: HashMap<String, Temperature>,
    /// The raw decoded payload, retained as a forward-compatibility escape
    /// hatch for diagnostics. Read-only data -- nothing dispatches on it.
    pub response: PrinterResponse,
}
