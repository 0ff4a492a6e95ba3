use crate::VehicleKind;
use std::fmt::Debug;

/// A vehicle body part.
pub trait Body: Debug + Send + Sync {
    fn kind(&self) -> VehicleKind;

    fn body_parts(&self) -> &str;
}

/// A vehicle chassis part.
pub trait Chassis: Debug + Send + Sync {
    fn kind(&self) -> VehicleKind;

    fn chassis_parts(&self) -> &str;
}

/// Windows, windshields and the rest of the glass.
pub trait GlassWare: Debug + Send + Sync {
    fn kind(&self) -> VehicleKind;

    fn glassware_parts(&self) -> &str;
}

macro_rules! part {
    ($name:ident, $contract:ident, $accessor:ident, $kind:expr, $text:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            parts: String,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    parts: $text.to_string(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $contract for $name {
            fn kind(&self) -> VehicleKind {
                $kind
            }

            fn $accessor(&self) -> &str {
                &self.parts
            }
        }
    };
}

part!(CarBody, Body, body_parts, VehicleKind::Car, "Car Body Parts");
part!(CarChassis, Chassis, chassis_parts, VehicleKind::Car, "Car Chassis Parts");
part!(CarGlassWare, GlassWare, glassware_parts, VehicleKind::Car, "Car Glass Parts");

part!(TruckBody, Body, body_parts, VehicleKind::Truck, "Truck Body Parts");
part!(TruckChassis, Chassis, chassis_parts, VehicleKind::Truck, "Truck Chassis Parts");
part!(TruckGlassWare, GlassWare, glassware_parts, VehicleKind::Truck, "Truck Glass Parts");

part!(VanBody, Body, body_parts, VehicleKind::Van, "Van Body Parts");
part!(VanChassis, Chassis, chassis_parts, VehicleKind::Van, "Van Chassis Parts");
part!(VanGlassWare, GlassWare, glassware_parts, VehicleKind::Van, "Van Glass Parts");
