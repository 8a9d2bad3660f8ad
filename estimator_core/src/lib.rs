//! # estimator_core - Landscape Materials Estimation Engine
//!
//! `estimator_core` is the computational heart of the hardscape estimator,
//! providing quantity takeoffs and cost estimates for landscape construction
//! with a clean, LLM-friendly API. All inputs and outputs are
//! JSON-serializable, making it ideal for integration behind a web API or
//! AI assistant.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Injected Catalog**: Calculators take the material catalog as an
//!   explicit argument, never as hidden global state
//!
//! ## Quick Start
//!
//! ```rust
//! use estimator_core::calculations::wall::{calculate, WallInput};
//! use estimator_core::catalog::builtin_materials;
//!
//! let catalog = builtin_materials();
//! let input = WallInput {
//!     wall_length_ft: 20.0,
//!     wall_height_ft: 4.0,
//!     material_id: "versa_lok_standard".to_string(),
//!     include_base: true,
//!     include_cap: true,
//! };
//!
//! let result = calculate(&input, &catalog).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Wall and generic job estimators
//! - [`catalog`] - Material specifications and catalog implementations
//! - [`units`] - Type-safe unit wrappers and measurement helpers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{JobInput, JobResult, JobType, WallInput, WallResult};
pub use catalog::{builtin_materials, InMemoryCatalog, MaterialCatalog, MaterialSpec};
pub use errors::{EstimateError, EstimateResult};
