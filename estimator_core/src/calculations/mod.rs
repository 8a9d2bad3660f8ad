//! # Estimation Calculations
//!
//! This module contains the two estimator entry points. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, ...) -> Result<*Result, EstimateError>` - Pure function
//!
//! ## Available Calculations
//!
//! - [`wall`] - Single-material wall estimate priced against the catalog
//! - [`job`] - Generic job estimate (pavers, walls, stairs, steps) in
//!   named material layers, quantities only
//!
//! Both are stateless: safe to call concurrently from any number of
//! request handlers against a shared read-only catalog snapshot.

pub mod job;
pub mod wall;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use job::{JobInput, JobResult, JobType, MeasurementPolicy};
pub use wall::{WallInput, WallResult};

/// Unit tag carried by every quantity line in a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUnit {
    Each,
    Blocks,
    Pieces,
    Bags,
    SquareFeet,
    CubicFeet,
    CubicYards,
    Tons,
    LinearFeet,
}

impl QuantityUnit {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            QuantityUnit::Each => "each",
            QuantityUnit::Blocks => "blocks",
            QuantityUnit::Pieces => "pieces",
            QuantityUnit::Bags => "bags",
            QuantityUnit::SquareFeet => "square feet",
            QuantityUnit::CubicFeet => "cubic feet",
            QuantityUnit::CubicYards => "cubic yards",
            QuantityUnit::Tons => "tons",
            QuantityUnit::LinearFeet => "linear feet",
        }
    }
}

impl std::fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One material line in a breakdown: how much of something, unit-tagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub quantity: f64,
    pub unit: QuantityUnit,
}

impl MaterialLine {
    pub fn new(quantity: f64, unit: QuantityUnit) -> Self {
        Self { quantity, unit }
    }
}

impl std::fmt::Display for MaterialLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.quantity, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_line_display() {
        let line = MaterialLine::new(3.44, QuantityUnit::CubicYards);
        assert_eq!(line.to_string(), "3.44 cubic yards");
    }

    #[test]
    fn test_quantity_unit_serialization() {
        let json = serde_json::to_string(&QuantityUnit::CubicYards).unwrap();
        assert_eq!(json, "\"cubic_yards\"");
        let line = MaterialLine::new(240.0, QuantityUnit::Blocks);
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, "{\"quantity\":240.0,\"unit\":\"blocks\"}");
    }
}
