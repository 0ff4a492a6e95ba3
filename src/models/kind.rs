use crate::VehicleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of vehicle families the factories and builders know about.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VehicleKind {
    Car,
    Truck,
    Van,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [Self::Car, Self::Truck, Self::Van];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Car => "Car",
            Self::Truck => "Truck",
            Self::Van => "Van",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleKind {
    type Err = VehicleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == value)
            .ok_or_else(|| VehicleError::unknown_kind(value))
    }
}

impl TryFrom<&str> for VehicleKind {
    type Error = VehicleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_display() {
        for kind in VehicleKind::ALL {
            let parsed: VehicleKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let result = VehicleKind::try_from("car");
        assert!(matches!(result, Err(VehicleError::UnknownKind(name)) if name == "car"));
    }
}
