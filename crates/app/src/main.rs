mod config;
mod session;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;

use config::{load_params, CliOptions};

fn main() {
    let options = CliOptions::parse();

    let mut app = App::new();
    // LogPlugin writes to stderr, keeping stdout for protocol responses.
    app.add_plugins((MinimalPlugins, LogPlugin::default()));

    if let Some(path) = &options.config {
        match load_params(path) {
            Ok(params) => {
                info!("loaded dashboard parameters from {}", path.display());
                app.insert_resource(params);
            }
            Err(e) => {
                error!("cannot load {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    app.add_plugins(emissions::EmissionsPlugin);

    // Initial update so the estimate and comparison exist before the first command.
    app.update();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    if let Err(e) = session::run_session(&mut app, stdin.lock(), &mut stdout) {
        error!("session aborted: {e}");
        std::process::exit(1);
    }
}
