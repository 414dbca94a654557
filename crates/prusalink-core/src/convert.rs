// ── API-to-domain conversions ──
//
// Bridges raw `prusalink_api` response types into the canonical
// `prusalink_core::model` snapshot. The state classification mirrors the
// vendor's own display logic (Prusa-Link-Web `src/state.js`): an
// authoritative `link_state` lookup first, then an ordered flag-based
// fallback chain.

use crate::model::{Printer, PrinterState, Temperature};
use prusalink_api::printer::{PrinterResponse, PrinterStateResponse};

// ── State classification ───────────────────────────────────────────

/// Map a non-empty `link_state` string through the fixed vendor table.
///
/// Anything not in the table becomes `Unknown`. No fallback to flag
/// inference happens after that: `link_state` is the device's own
/// authoritative classification, and an unrecognized value most likely
/// means protocol version skew that should be surfaced as-is.
fn state_from_link_state(raw: &str) -> PrinterState {
    match raw {
        "IDLE" => PrinterState::Idle,
        "READY" => PrinterState::Ready,
        "BUSY" => PrinterState::Busy,
        "PRINTING" => PrinterState::Printing,
        "PAUSED" => PrinterState::Paused,
        "FINISHED" => PrinterState::Finished,
        "STOPPED" => PrinterState::Stopped,
        "ERROR" => PrinterState::Error,
        "ATTENTION" => PrinterState::Attention,
        _ => PrinterState::Unknown,
    }
}

/// Classify the raw state into exactly one [`PrinterState`].
///
/// Total: always yields a value, never an error, for any structurally
/// valid payload. When `link_state` is absent the flags are resolved via
/// an ordered decision chain -- the order matters, since later rules
/// assume earlier ones did not match:
///
/// 1. `error` dominates everything (a device can report `operational`
///    and `error` at once).
/// 2. Text `"BUSY"` (any case) -- some firmware variants signal busy only
///    through the text field, with no flag set.
/// 3. `finished` before `paused` -- a finished print can leave stale
///    pause flags behind.
/// 4. `pausing` or `paused`.
/// 5. `ready` AND `operational` -- both required, because some revisions
///    keep `ready` set even while printing.
/// 6. Default: `Idle`.
///
/// `printing`, `cancelling`, `sdReady`, and `closedOnError` are decoded
/// from the wire but intentionally never consulted here, matching the
/// upstream display logic.
pub fn printer_state_from_response(res: &PrinterStateResponse) -> PrinterState {
    if !res.flags.link_state.is_empty() {
        return state_from_link_state(&res.flags.link_state);
    }

    if res.flags.error {
        return PrinterState::Error;
    }
    if res.text.eq_ignore_ascii_case("BUSY") {
        return PrinterState::Busy;
    }
    if res.flags.finished {
        return PrinterState::Finished;
    }
    if res.flags.pausing || res.flags.paused {
        return PrinterState::Paused;
    }
    if res.flags.ready && res.flags.operational {
        return PrinterState::Ready;
    }
    PrinterState::Idle
}

// ── Snapshot assembly ──────────────────────────────────────────────

impl From<PrinterResponse> for Printer {
    fn from(res: PrinterResponse) -> Self {
        let mut printer = Printer {
            state: printer_state_from_response(&res.state),
            material: res.telemetry.material.clone(),
            print_speed: res.telemetry.print_speed,
            tool_count: 0,
            bed_temperature: Temperature::default(),
            tool_temperatures: std::collections::HashMap::new(),
            response: PrinterResponse::default(),
        };

        // Single pass over the sensor map. Classification is by naming
        // convention: exact "bed", prefix "tool". Sensors matching neither
        // (e.g. "chamber") are silently dropped from the snapshot. Only
        // actual/target propagate; display/offset stay in the raw payload.
        for (sensor, reading) in &res.temperature {
            if sensor.starts_with("tool") {
                printer.tool_count += 1;
                printer.tool_temperatures.insert(
                    sensor.clone(),
                    Temperature {
                        actual: reading.actual,
                        target: reading.target,
                    },
                );
                continue;
            }
            if sensor == "bed" {
                printer.bed_temperature = Temperature {
                    actual: reading.actual,
                    target: reading.target,
                };
            }
        }

        printer.response = res;
        printer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prusalink_api::printer::{
        PrinterStateFlagsResponse, PrinterTelemetryResponse, PrinterTemperatureResponse,
    };

    fn state(link_state: &str, text: &str, flags: PrinterStateFlagsResponse) -> PrinterStateResponse {
        PrinterStateResponse {
            text: text.into(),
            flags: PrinterStateFlagsResponse {
                link_state: link_state.into(),
                ..flags
            },
        }
    }

    fn reading(actual: f64, target: f64) -> PrinterTemperatureResponse {
        PrinterTemperatureResponse {
            actual,
            target,
            display: target,
            offset: 0.0,
        }
    }

    // ── link_state authority ────────────────────────────────────────

    #[test]
    fn link_state_lookup_table() {
        let cases = [
            ("IDLE", PrinterState::Idle),
            ("READY", PrinterState::Ready),
            ("BUSY", PrinterState::Busy),
            ("PRINTING", PrinterState::Printing),
            ("PAUSED", PrinterState::Paused),
            ("FINISHED", PrinterState::Finished),
            ("STOPPED", PrinterState::Stopped),
            ("ERROR", PrinterState::Error),
            ("ATTENTION", PrinterState::Attention),
        ];
        for (raw, expected) in cases {
            let res = state(raw, "", PrinterStateFlagsResponse::default());
            assert_eq!(printer_state_from_response(&res), expected, "for {raw}");
        }
    }

    #[test]
    fn link_state_wins_over_contradicting_flags() {
        // Even an error flag cannot override the device's own classification.
        let res = state(
            "PRINTING",
            "Error",
            PrinterStateFlagsResponse {
                error: true,
                paused: true,
                finished: true,
                ..Default::default()
            },
        );
        assert_eq!(printer_state_from_response(&res), PrinterState::Printing);
    }

    #[test]
    fn unrecognized_link_state_is_terminal_unknown() {
        // Flags would say Ready, but a non-empty unrecognized link_state
        // short-circuits: fallback inference is never consulted.
        let res = state(
            "FOO",
            "",
            PrinterStateFlagsResponse {
                ready: true,
                operational: true,
                ..Default::default()
            },
        );
        assert_eq!(printer_state_from_response(&res), PrinterState::Unknown);
    }

    // ── Flag fallback chain ─────────────────────────────────────────

    #[test]
    fn error_flag_dominates_everything() {
        let res = state(
            "",
            "",
            PrinterStateFlagsResponse {
                error: true,
                finished: true,
                paused: true,
                ready: true,
                operational: true,
                ..Default::default()
            },
        );
        assert_eq!(printer_state_from_response(&res), PrinterState::Error);
    }

    #[test]
    fn busy_text_is_case_insensitive() {
        for text in ["BUSY", "busy", "Busy"] {
            let res = state("", text, PrinterStateFlagsResponse::default());
            assert_eq!(printer_state_from_response(&res), PrinterState::Busy, "for {text}");
        }
    }

    #[test]
    fn finished_dominates_stale_pause_flags() {
        let res = state(
            "",
            "",
            PrinterStateFlagsResponse {
                finished: true,
                paused: true,
                pausing: true,
                ..Default::default()
            },
        );
        assert_eq!(printer_state_from_response(&res), PrinterState::Finished);
    }

    #[test]
    fn pausing_alone_reads_as_paused() {
        let res = state(
            "",
            "",
            PrinterStateFlagsResponse {
                pausing: true,
                ..Default::default()
            },
        );
        assert_eq!(printer_state_from_response(&res), PrinterState::Paused);
    }

    #[test]
    fn ready_requires_operational() {
        let ready_only = state(
            "",
            "",
            PrinterStateFlagsResponse {
                ready: true,
                ..Default::default()
            },
        );
        assert_eq!(printer_state_from_response(&ready_only), PrinterState::Idle);

        let both = state(
            "",
            "",
            PrinterStateFlagsResponse {
                ready: true,
                operational: true,
                ..Default::default()
            },
        );
        assert_eq!(printer_state_from_response(&both), PrinterState::Ready);
    }

    #[test]
    fn all_false_defaults_to_idle() {
        let res = state("", "", PrinterStateFlagsResponse::default());
        assert_eq!(printer_state_from_response(&res), PrinterState::Idle);
    }

    #[test]
    fn informational_flags_never_drive_classification() {
        // printing/cancelling/sdReady/closedOnError are decoded but not
        // decision inputs -- setting them alone still yields Idle.
        let res = state(
            "",
            "",
            PrinterStateFlagsResponse {
                printing: true,
                cancelling: true,
                sd_ready: true,
                closed_on_error: true,
                ..Default::default()
            },
        );
        assert_eq!(printer_state_from_response(&res), PrinterState::Idle);
    }

    #[test]
    fn classification_is_total_over_flag_combinations() {
        // Exhaust the five decision-relevant flags; every combination must
        // classify without panicking and land inside the enumeration.
        for bits in 0u8..32 {
            let res = state(
                "",
                "",
                PrinterStateFlagsResponse {
                    error: bits & 1 != 0,
                    finished: bits & 2 != 0,
                    pausing: bits & 4 != 0,
                    paused: bits & 8 != 0,
                    ready: bits & 16 != 0,
                    operational: true,
                    ..Default::default()
                },
            );
            let _ = printer_state_from_response(&res);
        }
    }

    // ── Snapshot assembly ───────────────────────────────────────────

    fn sample_response() -> PrinterResponse {
        let mut temperature = std::collections::HashMap::new();
        temperature.insert("bed".to_owned(), reading(60.0, 60.0));
        temperature.insert("tool0".to_owned(), reading(210.0, 215.0));
        temperature.insert("tool1".to_owned(), reading(25.0, 0.0));
        temperature.insert("chamber".to_owned(), reading(31.0, 0.0));

        PrinterResponse {
            state: state("PRINTING", "Printing", PrinterStateFlagsResponse::default()),
            telemetry: PrinterTelemetryResponse {
                temp_bed: 60.0,
                temp_nozzle: 210.0,
                print_speed: 95,
                z_height: 2.4,
                material: "ASA".into(),
            },
            temperature,
        }
    }

    #[test]
    fn sensors_classified_by_naming_convention() {
        let printer = Printer::from(sample_response());

        assert_eq!(printer.tool_count, 2);
        assert_eq!(printer.tool_temperatures.len(), printer.tool_count);
        assert_eq!(
            printer.tool_temperatures["tool0"],
            Temperature {
                actual: 210.0,
                target: 215.0
            }
        );
        assert_eq!(
            printer.tool_temperatures["tool1"],
            Temperature {
                actual: 25.0,
                target: 0.0
            }
        );
        assert_eq!(
            printer.bed_temperature,
            Temperature {
                actual: 60.0,
                target: 60.0
            }
        );
        // "chamber" matches neither convention -- dropped from the snapshot.
        assert!(!printer.tool_temperatures.contains_key("chamber"));
    }

    #[test]
    fn telemetry_copied_verbatim() {
        let printer = Printer::from(sample_response());
        assert_eq!(printer.material, "ASA");
        assert_eq!(printer.print_speed, 95);
        assert_eq!(printer.state, PrinterState::Printing);
    }

    #[test]
    fn missing_bed_sensor_leaves_zero_default() {
        let mut res = sample_response();
        res.temperature.remove("bed");

        let printer = Printer::from(res);
        assert_eq!(printer.bed_temperature, Temperature::default());
        assert_eq!(printer.tool_count, 2);
    }

    #[test]
    fn raw_payload_retained_in_snapshot() {
        let printer = Printer::from(sample_response());
        assert_eq!(printer.response.telemetry.material, "ASA");
        assert_eq!(printer.response.temperature.len(), 4);
    }
}
