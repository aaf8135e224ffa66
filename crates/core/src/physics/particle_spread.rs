//! Particle (ash and block) spread envelope
//!
//! A small ballistic Monte Carlo: particles leave the vent with random
//! azimuth, random tilt off vertical and a launch speed around the speed that
//! reaches the blast radius on flat ground. Wind adds downwind drift along x
//! and damps crosswind motion along y, so the envelope stretches downwind and
//! narrows across the wind.
//!
//! # Model Overview
//!
//! ```text
//! 1. Nominal launch speed v₀ = √(g × d_blast)
//! 2. Per particle: azimuth θ ∈ [0, 2π), tilt φ ∈ [0, φ_max], speed v ∈ v₀(1 ± s)
//! 3. Velocity (x downwind, y crosswind):
//!    vx = v sinφ cosθ + u × drag,  vy = v sinφ sinθ × (1 - drag/2),  vz = v cosφ
//! 4. Flight time from vent height h: t = (vz + √(vz² + 2gh)) / g
//! 5. Landing offsets x = vx t × k_air, y = vy t × k_air; envelope is the max |offset|
//! ```
//!
//! The vertical extent is the vent elevation plus a buoyant plume height that
//! scales with the fourth root of the driving pressure (Morton-Taylor-Turner
//! scaling of plume rise with source strength).

use crate::core_types::units::{Meters, Pascals};
use crate::core_types::vec3::Vec3;
use crate::error::{ensure_finite, HazardResult};
use crate::params::PhysicsParameters;
use crate::weather::AtmosphereState;
use rand::Rng;
use serde::Serialize;
use std::f64::consts::TAU;

/// Extent of the particle cloud (m): downwind, crosswind, and altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleSpread {
    pub x: Meters,
    pub y: Meters,
    pub z: Meters,
}

/// Buoyant plume rise above the vent.
///
/// H = C × max(P, 0)^¼ × activity
pub fn plume_height(pressure: Pascals, activity: f64, params: &PhysicsParameters) -> Meters {
    let source = (*pressure).max(0.0).powf(0.25);
    Meters::new(params.plume_height_coefficient * source * activity.clamp(0.0, 1.0))
}

/// Time for a particle launched upward at `vz` from height `h` to land.
fn flight_time(vz: f64, vent_height: f64, gravity: f64) -> f64 {
    let radicand = (vz * vz + 2.0 * gravity * vent_height).max(0.0);
    ((vz + radicand.sqrt()) / gravity).max(0.0)
}

/// Run the particle Monte Carlo.
///
/// Draws `3 × particle_count` values from `rng`.
///
/// # Errors
///
/// `ComputationFailed` if the envelope is non-finite.
pub fn simulate_particle_spread(
    elevation: f64,
    blast: Meters,
    plume: Meters,
    atmosphere: &AtmosphereState,
    params: &PhysicsParameters,
    rng: &mut impl Rng,
) -> HazardResult<ParticleSpread> {
    let g = params.gravity;
    let vent_height = elevation.max(0.0);
    let launch_speed = (g * (*blast).max(0.0)).sqrt();

    let drag = atmosphere.drag_factor.value();
    let drift = *atmosphere.wind_speed * drag;
    let crosswind_damping = 1.0 - 0.5 * drag;
    let spread = params.particle_speed_spread;

    let mut max_x: f64 = 0.0;
    let mut max_y: f64 = 0.0;

    for _ in 0..params.particle_count {
        let azimuth = rng.random_range(0.0..TAU);
        let tilt = rng.random_range(0.0..=params.particle_max_launch_angle);
        let speed = launch_speed * rng.random_range((1.0 - spread)..=(1.0 + spread));

        let velocity = Vec3::new(
            speed * tilt.sin() * azimuth.cos() + drift,
            speed * tilt.sin() * azimuth.sin() * crosswind_damping,
            speed * tilt.cos(),
        );

        let t = flight_time(velocity.z, vent_height, g);
        let landing = velocity.xy() * (t * params.air_resistance);

        max_x = max_x.max(landing.x.abs());
        max_y = max_y.max(landing.y.abs());
    }

    Ok(ParticleSpread {
        x: Meters::new(ensure_finite(max_x, "particle spread")?),
        y: Meters::new(ensure_finite(max_y, "particle spread")?),
        z: Meters::new(ensure_finite(elevation + *plume, "plume height")?),
    })
}
