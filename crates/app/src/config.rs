//! Command-line options and parameter file loading.

use std::path::{Path, PathBuf};

use clap::Parser;

use emissions::{DashboardParams, ParamsError};

/// Headless food-waste dashboard session driven over stdin/stdout.
#[derive(Parser, Debug, Default, PartialEq)]
#[command(name = "food_waste_dashboard")]
#[command(about = "Food-waste GHG dashboard core, driven by JSON lines on stdin", long_about = None)]
pub struct CliOptions {
    /// JSON file with dashboard parameter overrides
    #[arg(long, value_name = "PARAMS_JSON")]
    pub config: Option<PathBuf>,
}

/// Read dashboard parameters from a JSON file.
pub fn load_params(path: &Path) -> Result<DashboardParams, ParamsError> {
    let json = std::fs::read_to_string(path)?;
    DashboardParams::from_json_str(&json)
}
