// src/factories/car_factory.rs

use super::VehicleFactory;
use crate::{Body, CarBody, CarChassis, CarGlassWare, Chassis, GlassWare, VehicleKind};

/// Factory for car parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarFactory;

impl VehicleFactory for CarFactory {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn create_body(&self) -> Box<dyn Body> {
        Box::new(CarBody::new())
    }

    fn create_chassis(&self) -> Box<dyn Chassis> {
        Box::new(CarChassis::new())
    }

    fn create_glassware(&self) -> Box<dyn GlassWare> {
        Box::new(CarGlassWare::new())
    }
}
