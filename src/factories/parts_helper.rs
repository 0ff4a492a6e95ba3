// src/factories/parts_helper.rs

use super::VehicleFactory;
use crate::VehicleParts;
use tracing::debug;

/// Asks `factory` for its body, chassis and glassware, in that order, and
/// returns their descriptions.
pub fn vehicle_parts(factory: &dyn VehicleFactory) -> VehicleParts {
    debug!(kind = %factory.kind(), "collecting vehicle parts");

    let body = factory.create_body();
    let chassis = factory.create_chassis();
    let glassware = factory.create_glassware();

    VehicleParts::new(
        body.body_parts(),
        chassis.chassis_parts(),
        glassware.glassware_parts(),
    )
}
