// src/directors/mod.rs

mod car_director;
mod van_director;

pub use car_director::CarDirector;
pub use van_director::VanDirector;

use crate::builders::VehicleBuilder;
use crate::{Vehicle, VehicleError, VehicleKind};
use tracing::debug;

/// Drives a builder through a fixed, kind-specific sequence of steps.
///
/// A director is typed over exactly one builder, so a car director can never
/// be handed a van builder.
pub trait VehicleDirector {
    type Builder: VehicleBuilder;

    fn builder(&self) -> &Self::Builder;

    /// Runs the build steps in order and assembles the vehicle.
    fn build(&self) -> Result<Vehicle, VehicleError>;
}

/// Collects step results in call order into a vehicle of `kind`.
fn assemble<I>(kind: VehicleKind, steps: I) -> Result<Vehicle, VehicleError>
where
    I: IntoIterator<Item = String>,
{
    let features: Vec<String> = steps.into_iter().collect();
    debug!(%kind, steps = features.len(), "assembling vehicle");
    Vehicle::new(kind, features)
}
