// src/factories/registry.rs

use super::{VehicleFactory, factory_for};
use crate::{VehicleError, VehicleKind};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

static GLOBAL: OnceLock<FactoryRegistry> = OnceLock::new();

/// Lookup table from vehicle kind to the factory for that kind.
///
/// The table is filled once and is read-only afterwards, so a shared
/// registry can be used from any thread without locking.
#[derive(Debug)]
pub struct FactoryRegistry {
    factories: BTreeMap<VehicleKind, Box<dyn VehicleFactory>>,
}

impl FactoryRegistry {
    /// Creates an empty registry.
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Creates a registry holding the car, truck and van factories.
    pub fn new() -> Self {
        let factories = VehicleKind::ALL
            .into_iter()
            .map(|kind| (kind, factory_for(kind)))
            .collect();
        Self { factories }
    }

    /// Process-wide registry, built on first access.
    pub fn global() -> &'static FactoryRegistry {
        GLOBAL.get_or_init(|| {
            debug!("initialising global factory registry");
            Self::new()
        })
    }

    /// Registers `factory` under `kind`, replacing any previous entry.
    ///
    /// # Returns
    /// * `Ok(())` - Factory registered
    /// * `Err(VehicleError::TypeMismatch)` - Factory builds a different kind
    pub fn register(
        &mut self,
        kind: VehicleKind,
        factory: Box<dyn VehicleFactory>,
    ) -> Result<(), VehicleError> {
        if factory.kind() != kind {
            return Err(VehicleError::TypeMismatch {
                expected: kind,
                found: factory.kind(),
            });
        }
        self.factories.insert(kind, factory);
        Ok(())
    }

    pub fn get(&self, kind: VehicleKind) -> Result<&dyn VehicleFactory, VehicleError> {
        self.factories
            .get(&kind)
            .map(|factory| factory.as_ref())
            .ok_or_else(|| VehicleError::unknown_kind(kind.name()))
    }

    /// Looks a factory up by kind name (`"Car"`, `"Truck"`, `"Van"`).
    pub fn get_by_name(&self, name: &str) -> Result<&dyn VehicleFactory, VehicleError> {
        let kind: VehicleKind = name.parse()?;
        self.get(kind)
    }

    /// Registered kinds in Car, Truck, Van order.
    pub fn available_kinds(&self) -> Vec<VehicleKind> {
        self.factories.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for FactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
