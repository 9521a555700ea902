//! Headless dashboard session: a blocking loop that reads JSON commands from
//! the presentation layer and writes one JSON response per command.
//!
//! ## Protocol
//!
//! Each input line is a JSON object with a `"cmd"` discriminator. Each output
//! line is a JSON response with `"protocol_version"` and `"type"` fields. See
//! [`emissions::protocol`] for the full schema.

use std::io::{self, BufRead, Write};

use bevy::prelude::*;

use emissions::emission_model::{EmissionComparisonState, PolicyShares, PolicySliders};
use emissions::observation::{DashboardObservation, EmissionObservation, WasteObservation};
use emissions::protocol::{
    error_response, make_response, DashboardCommand, DashboardResponse, ResponsePayload,
};
use emissions::waste_estimator::{WasteEstimateState, WastedSlider};
use emissions::{DashboardData, DashboardParams};

/// Run the command loop until `quit` or end of input.
///
/// Malformed lines and rejected commands produce an `error` response and the
/// loop keeps going. Only write failures end the session early.
pub fn run_session<R: BufRead, W: Write>(
    app: &mut App,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    write_response(output, &make_response(ResponsePayload::Ready))?;
    info!("dashboard session ready, waiting for commands");

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("input read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<DashboardCommand>(&line) {
            Ok(cmd) => process_command(cmd, app),
            Err(e) => error_response(format!("Parse error: {e}")),
        };
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        write_response(output, &response)?;

        if is_goodbye {
            break;
        }
    }

    info!("dashboard session shutting down");
    Ok(())
}

fn write_response<W: Write>(output: &mut W, response: &DashboardResponse) -> io::Result<()> {
    serde_json::to_writer(&mut *output, response)?;
    writeln!(output)?;
    output.flush()
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Apply one command to the app and build its response.
///
/// Slider commands write the input resource and run exactly one
/// `app.update()`, which recomputes the affected section.
pub fn process_command(cmd: DashboardCommand, app: &mut App) -> DashboardResponse {
    match cmd {
        DashboardCommand::SetWastedPercent { percent } => {
            let checked = app.world().resource::<DashboardParams>().check_wasted(percent);
            let percent = match checked {
                Ok(p) => p,
                Err(e) => {
                    warn!("rejected wasted percent: {e}");
                    return error_response(e.to_string());
                }
            };

            app.world_mut().resource_mut::<WastedSlider>().percent_wasted = percent;
            app.update();

            let world = app.world();
            let waste = WasteObservation::new(
                world.resource::<WasteEstimateState>(),
                world.get_resource::<DashboardData>(),
            );
            make_response(ResponsePayload::WasteEstimate { waste })
        }

        DashboardCommand::SetPolicy {
            compost_percent,
            production_reduction_percent,
            anaerobic_percent,
        } => {
            let requested = PolicyShares::new(
                compost_percent,
                production_reduction_percent,
                anaerobic_percent,
            );
            let checked = app
                .world()
                .resource::<DashboardParams>()
                .check_policy(requested);
            let shares = match checked {
                Ok(s) => s,
                Err(e) => {
                    warn!("rejected policy: {e}");
                    return error_response(e.to_string());
                }
            };

            app.world_mut().resource_mut::<PolicySliders>().shares = shares;
            app.update();

            let emissions =
                EmissionObservation::new(app.world().resource::<EmissionComparisonState>());
            make_response(ResponsePayload::EmissionComparison { emissions })
        }

        DashboardCommand::Observe => {
            let observation = DashboardObservation::from_world(app.world());
            make_response(ResponsePayload::Observation { observation })
        }

        DashboardCommand::LoadData { data } => {
            let monthly_rows = data.monthly_waste.len();
            let composition_rows = data.waste_composition.len();
            let ghg_rows = data.ghg_composition.len();
            let composition_dates = owned_dates(&data);
            info!(
                "loaded {monthly_rows} monthly, {composition_rows} composition, {ghg_rows} GHG rows"
            );

            app.world_mut().insert_resource(data);
            make_response(ResponsePayload::DataLoaded {
                monthly_rows,
                composition_rows,
                ghg_rows,
                composition_dates,
            })
        }

        DashboardCommand::Dates => {
            let world = app.world();
            let default_date = &world.resource::<DashboardParams>().default_composition_date;
            let (dates, selected) = match world.get_resource::<DashboardData>() {
                Some(data) => {
                    let selected = if data.has_composition_date(default_date) {
                        Some(default_date.clone())
                    } else {
                        data.composition_dates().first().map(|d| d.to_string())
                    };
                    (owned_dates(data), selected)
                }
                None => (Vec::new(), None),
            };
            make_response(ResponsePayload::Dates { dates, selected })
        }

        DashboardCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}

fn owned_dates(data: &DashboardData) -> Vec<String> {
    data.composition_dates()
        .into_iter()
        .map(str::to_string)
        .collect()
}
