use crate::VehicleKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VehicleError {
    #[error("Unknown vehicle type: {0}")]
    UnknownKind(String),

    #[error("Builder mismatch: {expected} director requires a {expected} builder, got {found}")]
    TypeMismatch {
        expected: VehicleKind,
        found: VehicleKind,
    },

    #[error("{0} must have at least one feature")]
    EmptyFeatureList(VehicleKind),

    #[error("{kind} feature at position {position} is empty")]
    EmptyFeature { kind: VehicleKind, position: usize },

    #[error("Index {index} is out of range for {capacity} slots")]
    IndexOutOfRange { index: usize, capacity: usize },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Prompt aborted before a selection was made")]
    PromptAborted,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Failed to read or write console: {0}")]
    IoError(#[from] std::io::Error),
}

impl VehicleError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn unknown_kind<S: Into<String>>(name: S) -> Self {
        Self::UnknownKind(name.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }
}
