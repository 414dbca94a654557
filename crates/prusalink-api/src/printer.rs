// Wire types for the `/printer` status endpoint.
//
// These model the payload exactly as the device sends it. Fields use
// `#[serde(default)]` liberally because flag presence varies across
// firmware revisions. Normalization into domain types lives in
// `prusalink-core` -- nothing here interprets the data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Raw status payload from `GET /printer`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrinterResponse {
    #[serde(default)]
    pub state: PrinterStateResponse,
    #[serde(default)]
    pub telemetry: PrinterTelemetryResponse,
    /// Sensor readings keyed by channel name (`"bed"`, `"tool0"`, ...).
    /// Names are untyped strings; classification is by naming convention.
    #[serde(default)]
    pub temperature: HashMap<String, PrinterTemperatureResponse>,
}

/// The `state` sub-object: free text plus a bundle of boolean flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrinterStateResponse {
    /// Human-readable state text, e.g. "Operational". Case not guaranteed.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub flags: PrinterStateFlagsResponse,
}

/// State flags. The set is partially redundant and can be contradictory
/// (`operational` and `error` at the same time); resolving that is the
/// normalizer's job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrinterStateFlagsResponse {
    #[serde(default)]
    pub operational: bool,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub printing: bool,
    #[serde(default)]
    pub cancelling: bool,
    #[serde(default)]
    pub pausing: bool,
    #[serde(default, rename = "sdReady")]
    pub sd_ready: bool,
    #[serde(default)]
    pub error: bool,
    #[serde(default, rename = "closedOnError")]
    pub closed_on_error: bool,
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub busy: bool,
    #[serde(default)]
    pub finished: bool,
    /// The device's own pre-classified status string (e.g. "PRINTING").
    /// Empty when the firmware predates it.
    #[serde(default)]
    pub link_state: String,
}

/// The `telemetry` sub-object. Field names are kebab-case on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrinterTelemetryResponse {
    #[serde(default, rename = "temp-bed")]
    pub temp_bed: f64,
    #[serde(default, rename = "temp-nozzle")]
    pub temp_nozzle: f64,
    /// Print speed in percent.
    #[serde(default, rename = "print-speed")]
    pub print_speed: i32,
    #[serde(default, rename = "z-height")]
    pub z_height: f64,
    /// Loaded material as reported by the printer, e.g. "PETG".
    #[serde(default)]
    pub material: String,
}

/// One temperature sensor reading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrinterTemperatureResponse {
    #[serde(default)]
    pub actual: f64,
    #[serde(default)]
    pub target: f64,
    #[serde(default)]
    pub display: f64,
    #[serde(default)]
    pub offset: f64,
}
