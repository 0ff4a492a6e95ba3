// src/builders/car_builder.rs

use super::VehicleBuilder;
use crate::VehicleKind;

/// Builds every car step, boot and passenger area included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarBuilder;

impl VehicleBuilder for CarBuilder {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn build_body(&self) -> String {
        "Car Body Built".to_string()
    }

    fn build_chassis(&self) -> String {
        "Car Chassis Built".to_string()
    }

    fn build_boot(&self) -> String {
        "Car Boot Built".to_string()
    }

    fn build_passenger_area(&self) -> String {
        "Car Passenger Area Built".to_string()
    }

    fn build_windows(&self) -> String {
        "Car Windows Built".to_string()
    }

    fn build_reinforced_storage(&self) -> String {
        "Car Reinforced Storage Built".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_steps() {
        let builder = CarBuilder;
        assert_eq!(builder.build_body(), "Car Body Built");
        assert_eq!(builder.build_boot(), "Car Boot Built");
        assert_eq!(builder.build_passenger_area(), "Car Passenger Area Built");
    }
}
