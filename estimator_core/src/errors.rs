//! # Error Types
//!
//! Structured error types for estimator_core. Each variant carries enough
//! context for the API layer to translate it into a user-facing response
//! (e.g. HTTP 400 for invalid dimensions, 404 for a missing material)
//! without string matching.
//!
//! ## Example
//!
//! ```rust
//! use estimator_core::errors::{EstimateError, EstimateResult};
//!
//! fn validate_length(wall_length_ft: f64) -> EstimateResult<()> {
//!     if wall_length_ft <= 0.0 {
//!         return Err(EstimateError::invalid_dimension(
//!             "wall_length_ft",
//!             wall_length_ft.to_string(),
//!             "Wall length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for estimator_core operations
pub type EstimateResult<T> = Result<T, EstimateError>;

/// Structured error type for estimation operations.
///
/// All errors are terminal for a single calculation call; no partial
/// results are ever returned alongside an error.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EstimateError {
    /// A length, height, or width is zero or negative where the formulas
    /// would divide by zero or produce a negative quantity
    #[error("Invalid dimension '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },

    /// Material id did not resolve in the catalog, or the material is inactive
    #[error("Material not found: {material_id}")]
    MaterialNotFound { material_id: String },

    /// Job type outside the supported set (pavers, walls, stairs, steps)
    #[error("Unsupported job type: {job_type}")]
    UnsupportedJobType { job_type: String },

    /// A required measurement field is absent (strict measurement policy only)
    #[error("Missing required measurement: {field}")]
    MissingMeasurement { field: String },

    /// Catalog backing store could not be read or parsed
    #[error("Catalog error: {operation} on '{path}' - {reason}")]
    CatalogError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl EstimateError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_id: impl Into<String>) -> Self {
        EstimateError::MaterialNotFound {
            material_id: material_id.into(),
        }
    }

    /// Create an UnsupportedJobType error
    pub fn unsupported_job_type(job_type: impl Into<String>) -> Self {
        EstimateError::UnsupportedJobType {
            job_type: job_type.into(),
        }
    }

    /// Create a MissingMeasurement error
    pub fn missing_measurement(field: impl Into<String>) -> Self {
        EstimateError::MissingMeasurement {
            field: field.into(),
        }
    }

    /// Create a CatalogError
    pub fn catalog_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EstimateError::CatalogError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error maps to a bad-request class failure
    /// (as opposed to a missing-resource or backing-store failure)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EstimateError::InvalidDimension { .. }
                | EstimateError::UnsupportedJobType { .. }
                | EstimateError::MissingMeasurement { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::InvalidDimension { .. } => "INVALID_DIMENSION",
            EstimateError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            EstimateError::UnsupportedJobType { .. } => "UNSUPPORTED_JOB_TYPE",
            EstimateError::MissingMeasurement { .. } => "MISSING_MEASUREMENT",
            EstimateError::CatalogError { .. } => "CATALOG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error =
            EstimateError::invalid_dimension("wall_height_ft", "-2.0", "Height must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: EstimateError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EstimateError::material_not_found("versa_lok_standard").error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(
            EstimateError::unsupported_job_type("driveways").error_code(),
            "UNSUPPORTED_JOB_TYPE"
        );
        assert_eq!(
            EstimateError::missing_measurement("length_ft").error_code(),
            "MISSING_MEASUREMENT"
        );
    }

    #[test]
    fn test_input_error_classification() {
        assert!(EstimateError::unsupported_job_type("ponds").is_input_error());
        assert!(!EstimateError::material_not_found("x").is_input_error());
        assert!(!EstimateError::catalog_error("open", "materials.csv", "no such file")
            .is_input_error());
    }

    #[test]
    fn test_error_display() {
        let error = EstimateError::material_not_found("granite_cobble");
        assert_eq!(error.to_string(), "Material not found: granite_cobble");
    }
}
