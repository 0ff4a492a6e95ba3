// src/builders/mod.rs

mod car_builder;
mod van_builder;

pub use car_builder::CarBuilder;
pub use van_builder::VanBuilder;

use crate::VehicleKind;
use std::fmt::Debug;

/// Step-by-step construction of a vehicle.
///
/// Every step returns a short confirmation of what was built. Steps a kind
/// does not support keep the default and return an empty string.
pub trait VehicleBuilder: Debug + Send + Sync {
    fn kind(&self) -> VehicleKind;

    fn build_body(&self) -> String {
        String::new()
    }

    fn build_chassis(&self) -> String {
        String::new()
    }

    fn build_boot(&self) -> String {
        String::new()
    }

    fn build_passenger_area(&self) -> String {
        String::new()
    }

    fn build_windows(&self) -> String {
        String::new()
    }

    fn build_reinforced_storage(&self) -> String {
        String::new()
    }
}

/// A builder chosen at runtime.
///
/// Directors are typed over their builder, so code that only knows the
/// builder kind at runtime goes through this enum and a `TryFrom` conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyBuilder {
    Car(CarBuilder),
    Van(VanBuilder),
}

impl AnyBuilder {
    pub fn kind(&self) -> VehicleKind {
        match self {
            Self::Car(builder) => builder.kind(),
            Self::Van(builder) => builder.kind(),
        }
    }
}

impl From<CarBuilder> for AnyBuilder {
    fn from(builder: CarBuilder) -> Self {
        Self::Car(builder)
    }
}

impl From<VanBuilder> for AnyBuilder {
    fn from(builder: VanBuilder) -> Self {
        Self::Van(builder)
    }
}
