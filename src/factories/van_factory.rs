// src/factories/van_factory.rs

use super::VehicleFactory;
use crate::{Body, Chassis, GlassWare, VanBody, VanChassis, VanGlassWare, VehicleKind};

/// Factory for van parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct VanFactory;

impl VehicleFactory for VanFactory {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Van
    }

    fn create_body(&self) -> Box<dyn Body> {
        Box::new(VanBody::new())
    }

    fn create_chassis(&self) -> Box<dyn Chassis> {
        Box::new(VanChassis::new())
    }

    fn create_glassware(&self) -> Box<dyn GlassWare> {
        Box::new(VanGlassWare::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_van_parts() {
        let factory = VanFactory;
        assert_eq!(factory.create_body().body_parts(), "Van Body Parts");
        assert_eq!(factory.create_chassis().chassis_parts(), "Van Chassis Parts");
        assert_eq!(factory.create_glassware().glassware_parts(), "Van Glass Parts");
    }
}
