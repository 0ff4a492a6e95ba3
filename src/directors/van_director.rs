// src/directors/van_director.rs

use super::{VehicleDirector, assemble};
use crate::builders::{AnyBuilder, VanBuilder, VehicleBuilder};
use crate::{Vehicle, VehicleError, VehicleKind};

#[derive(Debug, Clone)]
pub struct VanDirector {
    builder: VanBuilder,
}

impl VanDirector {
    pub fn new(builder: VanBuilder) -> Self {
        Self { builder }
    }
}

impl VehicleDirector for VanDirector {
    type Builder = VanBuilder;

    fn builder(&self) -> &VanBuilder {
        &self.builder
    }

    /// Body, chassis, reinforced storage, windows.
    fn build(&self) -> Result<Vehicle, VehicleError> {
        let b = &self.builder;
        assemble(
            VehicleKind::Van,
            [
                b.build_body(),
                b.build_chassis(),
                b.build_reinforced_storage(),
                b.build_windows(),
            ],
        )
    }
}

impl TryFrom<AnyBuilder> for VanDirector {
    type Error = VehicleError;

    fn try_from(builder: AnyBuilder) -> Result<Self, Self::Error> {
        match builder {
            AnyBuilder::Van(builder) => Ok(Self::new(builder)),
            other => Err(VehicleError::TypeMismatch {
                expected: VehicleKind::Van,
                found: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::CarBuilder;

    #[test]
    fn test_van_build_order() {
        let van = VanDirector::new(VanBuilder).build().unwrap();

        assert_eq!(van.kind(), VehicleKind::Van);
        assert_eq!(
            van.features(),
            [
                "Van Body Built",
                "Van Chassis Built",
                "Van Reinforced Storage Built",
                "Van Windows Built",
            ]
        );
        assert_eq!(
            van.to_string(),
            "Van with features: Van Body Built, Van Chassis Built, \
             Van Reinforced Storage Built, Van Windows Built"
        );
    }

    #[test]
    fn test_car_builder_rejected() {
        let result = VanDirector::try_from(AnyBuilder::from(CarBuilder));
        assert!(matches!(
            result,
            Err(VehicleError::TypeMismatch {
                expected: VehicleKind::Van,
                found: VehicleKind::Car
            })
        ));
    }
}
