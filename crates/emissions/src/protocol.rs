//! Session protocol between the dashboard core and its presentation layer.
//!
//! The presentation layer drives the core over newline-delimited JSON on
//! stdin/stdout: each slider move or data load is one command, each command
//! yields exactly one response.
//!
//! These types live in the `emissions` crate so they can be unit-tested
//! without the binary. The I/O loop lives in `crates/app/src/session.rs`.

use serde::{Deserialize, Serialize};

use crate::datasets::DashboardData;
use crate::observation::{DashboardObservation, EmissionObservation, WasteObservation};

// ---------------------------------------------------------------------------
// Commands (stdin → core)
// ---------------------------------------------------------------------------

/// A single command from the presentation layer. The `cmd` field is the tag.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum DashboardCommand {
    /// Move the "percent wasted" slider.
    #[serde(rename = "set_wasted_percent")]
    SetWastedPercent { percent: f64 },

    /// Move the policy sliders.
    #[serde(rename = "set_policy")]
    SetPolicy {
        compost_percent: f64,
        production_reduction_percent: f64,
        anaerobic_percent: f64,
    },

    /// Request the full dashboard snapshot.
    #[serde(rename = "observe")]
    Observe,

    /// Replace the measurement tables.
    #[serde(rename = "load_data")]
    LoadData { data: DashboardData },

    /// List the composition dates and the default selection.
    #[serde(rename = "dates")]
    Dates,

    /// End the session.
    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (core → stdout)
// ---------------------------------------------------------------------------

/// Every response carries the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

/// Tagged payload variants.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    /// The session is ready to accept commands.
    #[serde(rename = "ready")]
    Ready,

    /// Result of `set_wasted_percent`.
    #[serde(rename = "waste_estimate")]
    WasteEstimate { waste: WasteObservation },

    /// Result of `set_policy`.
    #[serde(rename = "emission_comparison")]
    EmissionComparison { emissions: EmissionObservation },

    /// Full snapshot for `observe`.
    #[serde(rename = "observation")]
    Observation { observation: DashboardObservation },

    /// Tables were replaced.
    #[serde(rename = "data_loaded")]
    DataLoaded {
        monthly_rows: usize,
        composition_rows: usize,
        ghg_rows: usize,
        composition_dates: Vec<String>,
    },

    /// Composition dates for the dropdowns.
    #[serde(rename = "dates")]
    Dates {
        dates: Vec<String>,
        /// Default selection, when present in the loaded data.
        selected: Option<String>,
    },

    /// The command was rejected; session state is unchanged.
    #[serde(rename = "error")]
    Error { message: String },

    /// Response to `quit`.
    #[serde(rename = "goodbye")]
    Goodbye,
}

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

/// Wrap a payload with the current protocol version.
pub fn make_response(payload: ResponsePayload) -> DashboardResponse {
    DashboardResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

/// Shorthand for an error response.
pub fn error_response(message: impl Into<String>) -> DashboardResponse {
    make_response(ResponsePayload::Error {
        message: message.into(),
    })
}
