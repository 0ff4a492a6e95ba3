// src/factories/mod.rs

mod car_factory;
mod parts_helper;
mod registry;
mod truck_factory;
mod van_factory;

pub use car_factory::CarFactory;
pub use parts_helper::vehicle_parts;
pub use registry::FactoryRegistry;
pub use truck_factory::TruckFactory;
pub use van_factory::VanFactory;

use crate::{Body, Chassis, GlassWare, VehicleKind};
use std::fmt::Debug;

/// Abstract factory for one family of vehicle parts.
///
/// A factory only ever produces parts of its own [`VehicleKind`]; callers pick
/// the family once (usually through [`FactoryRegistry`]) and never have to
/// name concrete part types.
pub trait VehicleFactory: Debug + Send + Sync {
    /// The family this factory builds parts for.
    fn kind(&self) -> VehicleKind;

    fn create_body(&self) -> Box<dyn Body>;

    fn create_chassis(&self) -> Box<dyn Chassis>;

    fn create_glassware(&self) -> Box<dyn GlassWare>;
}

/// Returns a fresh factory for the given kind.
pub fn factory_for(kind: VehicleKind) -> Box<dyn VehicleFactory> {
    match kind {
        VehicleKind::Car => Box::new(CarFactory),
        VehicleKind::Truck => Box::new(TruckFactory),
        VehicleKind::Van => Box::new(VanFactory),
    }
}
