// src/factories/truck_factory.rs

use super::VehicleFactory;
use crate::{Body, Chassis, GlassWare, TruckBody, TruckChassis, TruckGlassWare, VehicleKind};

/// Factory for truck parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TruckFactory;

impl VehicleFactory for TruckFactory {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Truck
    }

    fn create_body(&self) -> Box<dyn Body> {
        Box::new(TruckBody::new())
    }

    fn create_chassis(&self) -> Box<dyn Chassis> {
        Box::new(TruckChassis::new())
    }

    fn create_glassware(&self) -> Box<dyn GlassWare> {
        Box::new(TruckGlassWare::new())
    }
}
