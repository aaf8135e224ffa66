//! Atmospheric conditions at the vent
//!
//! Maps latitude and elevation to temperature, wind, plume drag and a
//! plume-behavior label.

pub mod atmosphere;

pub use atmosphere::{
    drag_factor, surface_temperature, wind_speed, AtmosphereModel, AtmosphereState, PlumeBehavior,
};
