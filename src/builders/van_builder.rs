// src/builders/van_builder.rs

use super::VehicleBuilder;
use crate::VehicleKind;

/// Builds a van. Vans have no boot or passenger area, so those steps keep
/// the empty default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VanBuilder;

impl VehicleBuilder for VanBuilder {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Van
    }

    fn build_body(&self) -> String {
        "Van Body Built".to_string()
    }

    fn build_chassis(&self) -> String {
        "Van Chassis Built".to_string()
    }

    fn build_windows(&self) -> String {
        "Van Windows Built".to_string()
    }

    fn build_reinforced_storage(&self) -> String {
        "Van Reinforced Storage Built".to_string()
    }
}
