// src/directors/car_director.rs

use super::{VehicleDirector, assemble};
use crate::builders::{AnyBuilder, CarBuilder, VehicleBuilder};
use crate::{Vehicle, VehicleError, VehicleKind};

#[derive(Debug, Clone)]
pub struct CarDirector {
    builder: CarBuilder,
}

impl CarDirector {
    pub fn new(builder: CarBuilder) -> Self {
        Self { builder }
    }
}

impl VehicleDirector for CarDirector {
    type Builder = CarBuilder;

    fn builder(&self) -> &CarBuilder {
        &self.builder
    }

    /// Body, chassis, boot, passenger area, reinforced storage, windows.
    fn build(&self) -> Result<Vehicle, VehicleError> {
        let b = &self.builder;
        assemble(
            VehicleKind::Car,
            [
                b.build_body(),
                b.build_chassis(),
                b.build_boot(),
                b.build_passenger_area(),
                b.build_reinforced_storage(),
                b.build_windows(),
            ],
        )
    }
}

impl TryFrom<AnyBuilder> for CarDirector {
    type Error = VehicleError;

    fn try_from(builder: AnyBuilder) -> Result<Self, Self::Error> {
        match builder {
            AnyBuilder::Car(builder) => Ok(Self::new(builder)),
            other => Err(VehicleError::TypeMismatch {
                expected: VehicleKind::Car,
                found: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::VanBuilder;

    #[test]
    fn test_car_build_order() {
        let car = CarDirector::new(CarBuilder).build().unwrap();

        assert_eq!(car.kind(), VehicleKind::Car);
        assert_eq!(
            car.features(),
            [
                "Car Body Built",
                "Car Chassis Built",
                "Car Boot Built",
                "Car Passenger Area Built",
                "Car Reinforced Storage Built",
                "Car Windows Built",
            ]
        );
    }

    #[test]
    fn test_van_builder_rejected() {
        let result = CarDirector::try_from(AnyBuilder::from(VanBuilder));
        assert!(matches!(
            result,
            Err(VehicleError::TypeMismatch {
                expected: VehicleKind::Car,
                found: VehicleKind::Van
            })
        ));
    }

    #[test]
    fn test_runtime_car_builder_accepted() {
        let director = CarDirector::try_from(AnyBuilder::Car(CarBuilder)).unwrap();
        assert_eq!(director.builder(), &CarBuilder);
        assert_eq!(director.build().unwrap().features().len(), 6);
    }
}
