//! Ordering of the dashboard systems via `SystemSet` phases.
//!
//! ```text
//! Input  →  Model
//! ```
//!
//! * **Input** – Enforces slider rules on the raw inputs (the anaerobic
//!   share is capped at `100 - compost`).
//! * **Model** – Recomputes the waste estimate and the emission comparison
//!   from inputs that changed this frame.
//!
//! Both phases run in `Update`. An input written before `App::update()` is
//! fully reflected in the model resources when that update returns.

use bevy::prelude::*;

/// Ordered phases for dashboard systems in the `Update` schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DashboardSet {
    Input,
    Model,
}

pub struct DashboardSetsPlugin;

impl Plugin for DashboardSetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (DashboardSet::Input, DashboardSet::Model).chain());
    }
}
