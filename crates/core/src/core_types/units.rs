//! Semantic unit types for type-safe physical quantity handling
//!
//! Newtype wrappers keep temperatures, distances, pressures and speeds from
//! being mixed up as they flow through the hazard pipeline.
//!
//! # Design Philosophy
//! - Every quantity is an f64 so reported values keep full precision on the wire
//! - Total ordering via `Ord` (NaN sorts above all values, same as `f64::total_cmp`)
//! - `Deref` to the inner value for arithmetic-heavy physics code
//! - Serde serialises each type as a bare number
//!
//! # Usage
//! ```
//! use volcano_hazard_core::core_types::units::{Celsius, Kelvin, Meters, Kilometers};
//!
//! let temp = Celsius::new(25.0);
//! let kelvin: Kelvin = temp.into();
//! assert!((*kelvin - 298.15).abs() < 0.01);
//!
//! let blast = Meters::new(12_500.0);
//! assert_eq!(*blast.to_kilometers(), 12.5);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, Mul};

/// Shared boilerplate for an f64 quantity: total ordering, `Deref`, and
/// `Display` with a unit suffix. The `scalable` form adds `From<f64>` and
/// scaling by a plain factor.
macro_rules! quantity {
    (scalable $name:ident, $suffix:literal) => {
        quantity!($name, $suffix);

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                Self(v)
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;
            fn mul(self, rhs: f64) -> $name {
                Self(self.0 * rhs)
            }
        }
    };
    ($name:ident, $suffix:literal) => {
        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if let Some(precision) = f.precision() {
                    write!(f, "{:.*}{}", precision, self.0, $suffix)
                } else {
                    write!(f, "{}{}", self.0, $suffix)
                }
            }
        }
    };
}

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f64);

quantity!(scalable Celsius, "°C");

impl Celsius {
    /// Celsius to Kelvin conversion offset (0°C = 273.15 K)
    const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Celsius(value)
    }

    #[inline]
    #[must_use]
    pub fn to_kelvin(self) -> Kelvin {
        Kelvin(self.0 + Self::CELSIUS_KELVIN_OFFSET)
    }
}

impl From<Celsius> for Kelvin {
    fn from(c: Celsius) -> Kelvin {
        c.to_kelvin()
    }
}

/// Absolute temperature in Kelvin
///
/// Magma temperatures are sampled and reported in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kelvin(f64);

quantity!(scalable Kelvin, " K");

impl Kelvin {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kelvin(value)
    }

    #[inline]
    #[must_use]
    pub fn to_celsius(self) -> Celsius {
        Celsius(self.0 - Celsius::CELSIUS_KELVIN_OFFSET)
    }
}

impl From<Kelvin> for Celsius {
    fn from(k: Kelvin) -> Celsius {
        k.to_celsius()
    }
}

// ============================================================================
// DISTANCE
// ============================================================================

/// Distance in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Meters(f64);

quantity!(scalable Meters, " m");

impl Meters {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    #[inline]
    #[must_use]
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 / 1000.0)
    }
}

/// Distance in kilometers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilometers(f64);

quantity!(scalable Kilometers, " km");

impl Kilometers {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Kilometers(value)
    }

    /// Round to a fixed number of decimal places for reporting.
    #[must_use]
    pub fn rounded(self, decimals: i32) -> Kilometers {
        let scale = 10f64.powi(decimals);
        Kilometers((self.0 * scale).round() / scale)
    }
}

impl From<Meters> for Kilometers {
    fn from(m: Meters) -> Kilometers {
        m.to_kilometers()
    }
}

// ============================================================================
// SPEED / PRESSURE / DENSITY
// ============================================================================

/// Speed in meters per second
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

quantity!(scalable MetersPerSecond, " m/s");

impl MetersPerSecond {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }
}

/// Pressure in pascals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Pascals(f64);

quantity!(scalable Pascals, " Pa");

impl Pascals {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Pascals(value)
    }
}

/// Density in kg/m³
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KgPerCubicMeter(f64);

quantity!(scalable KgPerCubicMeter, " kg/m³");

impl KgPerCubicMeter {
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KgPerCubicMeter(value)
    }
}

// ============================================================================
// DIMENSIONLESS
// ============================================================================

/// Dimensionless fraction, always within [0, 1]
///
/// NaN input collapses to 0 so a fraction is never outside its range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Fraction(f64);

quantity!(Fraction, "");

impl Fraction {
    pub const ZERO: Fraction = Fraction(0.0);
    pub const ONE: Fraction = Fraction(1.0);

    /// Create a fraction, clamping into [0, 1].
    #[inline]
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Fraction::ZERO;
        }
        Fraction(value.clamp(0.0, 1.0))
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn celsius_kelvin_round_trip() {
        let k = Celsius::new(1000.0).to_kelvin();
        assert_relative_eq!(*k, 1273.15);
        assert_relative_eq!(*k.to_celsius(), 1000.0);
    }

    #[test]
    fn fraction_clamps_and_swallows_nan() {
        assert_eq!(Fraction::new(1.7), Fraction::ONE);
        assert_eq!(Fraction::new(-0.2), Fraction::ZERO);
        assert_eq!(Fraction::new(f64::NAN), Fraction::ZERO);
        assert_eq!(Fraction::new(0.35).value(), 0.35);
    }

    #[test]
    fn meters_to_kilometers_rounding() {
        let km = Meters::new(12_345.678).to_kilometers().rounded(2);
        assert_eq!(*km, 12.35);
    }

    #[test]
    fn total_ordering_puts_nan_last() {
        let mut values = [Meters::new(f64::NAN), Meters::new(3.0), Meters::new(-1.0)];
        values.sort();
        assert_eq!(*values[0], -1.0);
        assert_eq!(*values[1], 3.0);
        assert!(values[2].is_nan());
    }

    #[test]
    fn display_respects_precision() {
        assert_eq!(format!("{:.1}", Pascals::new(5.0e6)), "5000000.0 Pa");
        assert_eq!(format!("{:.2}", MetersPerSecond::new(12.34567)), "12.35 m/s");
    }

    #[test]
    fn serialises_as_bare_number() {
        let json = serde_json::to_string(&Kelvin::new(1273.15)).unwrap();
        assert_eq!(json, "1273.15");
    }
}
