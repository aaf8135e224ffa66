//! Vector type alias for 3D velocities and displacements.

use nalgebra::Vector3;

/// 3D vector type for particle launch velocities and landing displacements.
///
/// This is a simple alias for `nalgebra::Vector3<f64>`. Axis convention:
/// x is downwind, y is crosswind, z is up.
pub type Vec3 = Vector3<f64>;
