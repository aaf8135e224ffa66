//! Core types and utilities

pub mod units;
pub mod vec3;
pub mod volcano;

pub use units::*;
pub use vec3::Vec3;
pub use volcano::{Location, VolcanoInput};
