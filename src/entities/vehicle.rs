use crate::{VehicleError, VehicleKind};
use std::fmt;

/// An assembled vehicle: its kind plus the features its director built, in
/// build order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    kind: VehicleKind,
    features: Vec<String>,
}

impl Vehicle {
    /// Creates a vehicle, rejecting an empty feature list or any empty feature.
    pub fn new(kind: VehicleKind, features: Vec<String>) -> Result<Self, VehicleError> {
        if features.is_empty() {
            return Err(VehicleError::EmptyFeatureList(kind));
        }

        if let Some(position) = features.iter().position(|f| f.is_empty()) {
            return Err(VehicleError::EmptyFeature { kind, position });
        }

        Ok(Self { kind, features })
    }

    /// Returns vehicle kind.
    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Returns features in build order.
    pub fn features(&self) -> &[String] {
        &self.features
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with features: {}", self.kind, self.features.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_display() {
        let car = Vehicle::new(
            VehicleKind::Car,
            vec!["Car Body Built".to_string(), "Car Chassis Built".to_string()],
        )
        .unwrap();

        assert_eq!(
            car.to_string(),
            "Car with features: Car Body Built, Car Chassis Built"
        );
    }

    #[test]
    fn test_empty_feature_list_rejected() {
        let result = Vehicle::new(VehicleKind::Van, vec![]);
        assert!(matches!(
            result,
            Err(VehicleError::EmptyFeatureList(VehicleKind::Van))
        ));
    }

    #[test]
    fn test_empty_feature_rejected() {
        let result = Vehicle::new(
            VehicleKind::Car,
            vec!["Car Body Built".to_string(), String::new()],
        );
        assert!(matches!(
            result,
            Err(VehicleError::EmptyFeature { position: 1, .. })
        ));
    }

    #[test]
    fn test_whitespace_feature_is_kept() {
        let vehicle = Vehicle::new(VehicleKind::Van, vec![" ".to_string()]).unwrap();
        assert_eq!(vehicle.features(), [" "]);
    }

    proptest! {
        #[test]
        fn test_display_lists_every_feature(features in prop::collection::vec("[A-Za-z]{1,12}", 1..8)) {
            let vehicle = Vehicle::new(VehicleKind::Truck, features.clone()).unwrap();
            let rendered = vehicle.to_string();

            let prefix = "Truck with features: ";
            prop_assert!(rendered.starts_with(prefix));
            let listed: Vec<&str> = rendered[prefix.len()..].split(", ").collect();
            prop_assert_eq!(listed, features.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
