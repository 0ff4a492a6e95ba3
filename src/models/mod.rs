pub mod config;
pub mod kind;
pub mod vehicle_parts;

pub use config::*;
pub use kind::*;
pub use vehicle_parts::*;
