use crate::{
    PartsSummary, Vehicle, VehicleError,
    builders::{CarBuilder, VanBuilder},
    directors::{CarDirector, VanDirector, VehicleDirector},
    factories::{FactoryRegistry, vehicle_parts},
};
use tracing::info;

/// Answers the console's questions using the factory registry and the
/// builder directors.
pub struct Showroom<'a> {
    registry: &'a FactoryRegistry,
}

impl<'a> Showroom<'a> {
    pub fn new(registry: &'a FactoryRegistry) -> Self {
        Self { registry }
    }

    /// Names of the vehicle kinds parts can be ordered for.
    pub fn vehicle_names(&self) -> Vec<String> {
        self.registry
            .available_kinds()
            .into_iter()
            .map(|kind| kind.name().to_string())
            .collect()
    }

    /// Collects parts for every selected kind name, in selection order.
    pub fn parts_for<S: AsRef<str>>(&self, names: &[S]) -> Result<PartsSummary, VehicleError> {
        let summary = names
            .iter()
            .map(|name| {
                self.registry
                    .get_by_name(name.as_ref())
                    .map(vehicle_parts)
            })
            .collect::<Result<PartsSummary, _>>()?;

        info!(vehicles = summary.len(), "collected vehicle parts");
        Ok(summary)
    }

    /// Builds one car and one van.
    pub fn assemble_demo_vehicles(&self) -> Result<Vec<Vehicle>, VehicleError> {
        let car = CarDirector::new(CarBuilder).build()?;
        let van = VanDirector::new(VanBuilder).build()?;
        Ok(vec![car, van])
    }
}
