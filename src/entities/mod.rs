pub mod notebooks;
pub mod parts;
pub mod vehicle;

pub use notebooks::*;
pub use parts::*;
pub use vehicle::*;
