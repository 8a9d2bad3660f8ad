//! # Unit Types and Conversions
//!
//! Type-safe wrappers for the measurement units used in hardscape
//! estimation, plus the conversion helpers shared by both calculators.
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Landscape estimation uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## US Customary Units
//!
//! Field measurements arrive as feet/inches pairs; all packing arithmetic
//! happens in inches, bulk volumes are reported in cubic yards, and
//! aggregate weights in tons.
//!
//! ## Example
//!
//! ```rust
//! use estimator_core::units::{feet_inches_to_inches, inches_to_feet_inches, Feet, Inches};
//!
//! let total = feet_inches_to_inches(20.0, 6.0);
//! assert_eq!(total, 246.0);
//! assert_eq!(inches_to_feet_inches(total), (20, 6.0));
//!
//! let span = Feet(12.0);
//! let span_in: Inches = span.into();
//! assert_eq!(span_in.0, 144.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Conversion Constants
// ============================================================================

pub const INCHES_PER_FOOT: f64 = 12.0;
pub const SQUARE_INCHES_PER_SQUARE_FOOT: f64 = 144.0;
pub const CUBIC_INCHES_PER_CUBIC_FOOT: f64 = 1728.0;
pub const CUBIC_FEET_PER_CUBIC_YARD: f64 = 27.0;
/// 36 in x 36 in x 36 in
pub const CUBIC_INCHES_PER_CUBIC_YARD: f64 = 46656.0;
pub const POUNDS_PER_TON: f64 = 2000.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * INCHES_PER_FOOT)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / INCHES_PER_FOOT)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicFeet(pub f64);

/// Volume in cubic yards (the unit bulk materials are ordered in)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicYards(pub f64);

impl From<CubicFeet> for CubicYards {
    fn from(cf: CubicFeet) -> Self {
        CubicYards(cf.0 / CUBIC_FEET_PER_CUBIC_YARD)
    }
}

impl From<CubicYards> for CubicFeet {
    fn from(cy: CubicYards) -> Self {
        CubicFeet(cy.0 * CUBIC_FEET_PER_CUBIC_YARD)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(SqFt);
impl_arithmetic!(CubicFeet);
impl_arithmetic!(CubicYards);

// ============================================================================
// Measurement Helpers
// ============================================================================

/// Convert a feet + inches pair to total inches.
///
/// Field crews record dimensions as separate feet and inch readings
/// (e.g. 20' 6"); all packing arithmetic works in total inches.
pub fn feet_inches_to_inches(feet: f64, inches: f64) -> f64 {
    feet * INCHES_PER_FOOT + inches
}

/// Convert total inches back to a (whole feet, remaining inches) pair.
pub fn inches_to_feet_inches(total_inches: f64) -> (u32, f64) {
    let feet = (total_inches / INCHES_PER_FOOT).floor() as u32;
    let inches = total_inches % INCHES_PER_FOOT;
    (feet, inches)
}

/// Format a feet/inches pair for display, e.g. `20' 6"` or `8"`.
pub fn format_measurement(feet: u32, inches: f64) -> String {
    if feet > 0 {
        format!("{}' {}\"", feet, inches)
    } else {
        format!("{}\"", inches)
    }
}

/// Round a currency amount to whole cents.
///
/// Applied to every cost output so repeated calculations with identical
/// inputs serialize byte-identically.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Round a quantity to the given number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_inches() {
        let ft = Feet(10.0);
        let inches: Inches = ft.into();
        assert_eq!(inches.0, 120.0);
    }

    #[test]
    fn test_cubic_feet_to_cubic_yards() {
        let cf = CubicFeet(54.0);
        let cy: CubicYards = cf.into();
        assert_eq!(cy.0, 2.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Feet(10.0);
        let b = Feet(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_feet_inches_pair_conversion() {
        assert_eq!(feet_inches_to_inches(20.0, 6.0), 246.0);
        assert_eq!(feet_inches_to_inches(0.0, 8.0), 8.0);
        assert_eq!(inches_to_feet_inches(246.0), (20, 6.0));
        assert_eq!(inches_to_feet_inches(8.0), (0, 8.0));
    }

    #[test]
    fn test_feet_inches_round_trip() {
        // Whole feet plus inch remainders in [0, 12) must survive the trip
        for feet in [0u32, 1, 7, 20, 150] {
            for inches in [0.0, 0.5, 3.0, 6.25, 11.875] {
                let total = feet_inches_to_inches(feet as f64, inches);
                let (f, i) = inches_to_feet_inches(total);
                assert_eq!(f, feet);
                assert!((i - inches).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_format_measurement() {
        assert_eq!(format_measurement(20, 6.0), "20' 6\"");
        assert_eq!(format_measurement(0, 8.0), "8\"");
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1080.0), 1080.0);
        assert_eq!(round_to_cents(25.4999), 25.5);
        assert_eq!(round_to_cents(0.005), 0.01);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.25, 1), 2.3);
        assert_eq!(round_to(41.0, 0), 41.0);
    }

    #[test]
    fn test_serialization() {
        let ft = Feet(12.5);
        let json = serde_json::to_string(&ft).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Feet = serde_json::from_str(&json).unwrap();
        assert_eq!(ft, roundtrip);
    }
}
