//! # Material Catalog
//!
//! Catalog of discrete and bulk landscape construction materials, indexed
//! by a stable string id. The calculators consume the catalog through the
//! [`MaterialCatalog`] trait so the surrounding application can supply any
//! backing store (database export, CSV file, or the builtin fixed list).
//!
//! The catalog is read-only from the calculators' perspective. Admin CRUD,
//! seeding, and persistence belong to the surrounding application.
//!
//! ## Example
//!
//! ```rust
//! use estimator_core::catalog::{builtin_materials, MaterialCatalog, MaterialCategory};
//!
//! let catalog = builtin_materials();
//! let block = catalog.get_material("versa_lok_standard").unwrap();
//! assert_eq!(block.category, MaterialCategory::Block);
//!
//! let stones = catalog.list_by_category(MaterialCategory::Stone);
//! assert_eq!(stones.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::errors::{EstimateError, EstimateResult};
use crate::units::SQUARE_INCHES_PER_SQUARE_FOOT;

/// Material category classification.
///
/// Quantity formulas dispatch on this closed set; adding a variant forces
/// every dispatch site to be revisited by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    /// Segmental retaining wall block (interlocking, mortarless)
    Block,
    /// Natural stone, cut or irregular
    Stone,
    /// Clay brick, laid with mortar joints
    Brick,
    /// Mortared concrete masonry unit
    Concrete,
    /// Pressure-treated landscape timber
    Timber,
    /// Metal edging and panels
    Metal,
    /// Wire basket filled with stone
    Gabion,
    /// Concrete or clay paver
    Paver,
    /// Bulk and miscellaneous materials (mulch, fabric, ...)
    Other,
}

impl MaterialCategory {
    /// All categories for iteration
    pub const ALL: [MaterialCategory; 9] = [
        MaterialCategory::Block,
        MaterialCategory::Stone,
        MaterialCategory::Brick,
        MaterialCategory::Concrete,
        MaterialCategory::Timber,
        MaterialCategory::Metal,
        MaterialCategory::Gabion,
        MaterialCategory::Paver,
        MaterialCategory::Other,
    ];

    /// Parse from a catalog/store code ("block", "stone", ...)
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "block" | "retaining_wall_blocks" => Some(MaterialCategory::Block),
            "stone" => Some(MaterialCategory::Stone),
            "brick" => Some(MaterialCategory::Brick),
            "concrete" => Some(MaterialCategory::Concrete),
            "timber" | "wood" => Some(MaterialCategory::Timber),
            "metal" => Some(MaterialCategory::Metal),
            "gabion" => Some(MaterialCategory::Gabion),
            "paver" | "pavers" => Some(MaterialCategory::Paver),
            "other" => Some(MaterialCategory::Other),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialCategory::Block => "Retaining Wall Block",
            MaterialCategory::Stone => "Natural Stone",
            MaterialCategory::Brick => "Brick",
            MaterialCategory::Concrete => "Concrete Block",
            MaterialCategory::Timber => "Landscape Timber",
            MaterialCategory::Metal => "Metal",
            MaterialCategory::Gabion => "Gabion",
            MaterialCategory::Paver => "Paver",
            MaterialCategory::Other => "Other",
        }
    }

    /// Categories that take a cap course (finishing top-course SKU)
    pub fn takes_cap_course(&self) -> bool {
        matches!(self, MaterialCategory::Block | MaterialCategory::Concrete)
    }
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Pricing unit for a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitOfMeasure {
    #[default]
    Each,
    SqFt,
    CubicYard,
    Ton,
    Bag,
    LinearFoot,
}

impl UnitOfMeasure {
    /// Parse from a store code ("each", "cubic_yard", ...)
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "each" => Some(UnitOfMeasure::Each),
            "sq_ft" | "square_foot" => Some(UnitOfMeasure::SqFt),
            "cubic_yard" => Some(UnitOfMeasure::CubicYard),
            "ton" => Some(UnitOfMeasure::Ton),
            "bag" => Some(UnitOfMeasure::Bag),
            "linear_foot" => Some(UnitOfMeasure::LinearFoot),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitOfMeasure::Each => "each",
            UnitOfMeasure::SqFt => "sq ft",
            UnitOfMeasure::CubicYard => "cubic yard",
            UnitOfMeasure::Ton => "ton",
            UnitOfMeasure::Bag => "bag",
            UnitOfMeasure::LinearFoot => "linear foot",
        }
    }
}

impl std::fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One catalog entry: the physical and pricing specification of a material.
///
/// Dimensional fields are in inches and may be absent for bulk materials
/// (mulch, gravel) that are not packed into courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Stable identifier, compared as a string regardless of the backing
    /// store's native id type
    pub id: String,

    /// Display name (e.g. "Versa-Lok Standard Block")
    pub name: String,

    /// Category driving the quantity formulas
    pub category: MaterialCategory,

    /// Unit length (in)
    pub length_in: Option<f64>,

    /// Unit width (in)
    pub width_in: Option<f64>,

    /// Unit height (in)
    pub height_in: Option<f64>,

    /// Unit weight (lb)
    pub weight_lbs: Option<f64>,

    /// Square feet of wall/patio face one unit occupies.
    ///
    /// When absent, derived from `length_in` x `height_in`. Irregular and
    /// bulk materials carry a manual value instead.
    pub coverage_per_unit: Option<f64>,

    /// Price per `unit_of_measure`, dollars, never negative
    pub price_per_unit: f64,

    /// Pricing unit
    pub unit_of_measure: UnitOfMeasure,

    /// Explicit reference to the cap-course SKU for this material, if one
    /// exists. Replaces discovery by name substring.
    pub cap_material_id: Option<String>,

    // Informational fields, never used in calculation
    pub description: Option<String>,
    pub use_case: Option<String>,
    pub installation_notes: Option<String>,

    /// Soft-delete flag; inactive materials are excluded from all lookups
    pub is_active: bool,
}

impl MaterialSpec {
    /// Validate the catalog invariants for this entry.
    pub fn validate(&self) -> EstimateResult<()> {
        if self.price_per_unit < 0.0 {
            return Err(EstimateError::invalid_dimension(
                "price_per_unit",
                self.price_per_unit.to_string(),
                "Price must not be negative",
            ));
        }
        for (field, value) in [
            ("length_in", self.length_in),
            ("width_in", self.width_in),
            ("height_in", self.height_in),
        ] {
            if let Some(v) = value {
                if v <= 0.0 {
                    return Err(EstimateError::invalid_dimension(
                        field,
                        v.to_string(),
                        "Unit dimension must be positive when present",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Face coverage in square feet per unit.
    ///
    /// Manual coverage wins; otherwise derived as length x height / 144.
    pub fn coverage_sq_ft(&self) -> f64 {
        if let Some(coverage) = self.coverage_per_unit {
            return coverage;
        }
        match (self.length_in, self.height_in) {
            (Some(l), Some(h)) => l * h / SQUARE_INCHES_PER_SQUARE_FOOT,
            _ => 0.0,
        }
    }

    /// Dimensions formatted for display, e.g. `12" x 6" x 4"`.
    pub fn dimensions_label(&self) -> String {
        match (self.length_in, self.width_in, self.height_in) {
            (Some(l), Some(w), Some(h)) => format!("{}\" x {}\" x {}\"", l, w, h),
            _ => "bulk".to_string(),
        }
    }
}

impl std::fmt::Display for MaterialSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, ${:.2}/{})",
            self.name, self.category, self.price_per_unit, self.unit_of_measure
        )
    }
}

/// Read-only lookup interface the calculators depend on.
///
/// Implementations must be safe for concurrent reads; the calculators hold
/// no mutable state and never write back.
pub trait MaterialCatalog {
    /// Resolve an active material by id.
    ///
    /// Fails with [`EstimateError::MaterialNotFound`] when the id is absent
    /// or the entry is inactive.
    fn get_material(&self, id: &str) -> EstimateResult<MaterialSpec>;

    /// All active materials, in an order deterministic within a process run.
    fn list_materials(&self) -> Vec<MaterialSpec>;

    /// All active materials of one category.
    fn list_by_category(&self, category: MaterialCategory) -> Vec<MaterialSpec> {
        self.list_materials()
            .into_iter()
            .filter(|m| m.category == category)
            .collect()
    }
}

/// In-memory material catalog.
///
/// Doubles as the test/fallback catalog (via [`builtin_materials`]) and the
/// store-backed one (via [`InMemoryCatalog::load_from_csv`] over a database
/// export). Entries are kept in a `BTreeMap` so iteration order is stable.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    materials: BTreeMap<String, MaterialSpec>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous entry with the same id.
    pub fn insert(&mut self, spec: MaterialSpec) -> EstimateResult<()> {
        spec.validate()?;
        self.materials.insert(spec.id.clone(), spec);
        Ok(())
    }

    /// Number of entries, active or not
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Load a catalog from a CSV export of the materials table.
    ///
    /// Expected header columns (order-insensitive, extra columns ignored):
    /// `id,name,category,length_in,width_in,height_in,weight_lbs,
    /// coverage_per_unit,price_per_unit,unit_of_measure,cap_material_id,
    /// is_active,description,use_case,installation_notes`.
    ///
    /// Rows with a blank id get a generated UUID. Rows with an unknown
    /// category are skipped.
    pub fn load_from_csv(path: &str) -> EstimateResult<Self> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        let file = File::open(path).map_err(|e| {
            EstimateError::catalog_error("open", path, format!("Failed to open CSV: {}", e))
        })?;

        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header_line = lines
            .next()
            .ok_or_else(|| EstimateError::catalog_error("read", path, "CSV file is empty"))?
            .map_err(|e| {
                EstimateError::catalog_error("read", path, format!("Failed to read header: {}", e))
            })?;

        let headers: Vec<&str> = header_line.split(',').map(|h| h.trim()).collect();
        let col_index = |name: &str| -> Option<usize> {
            headers.iter().position(|h| h.eq_ignore_ascii_case(name))
        };

        let name_idx = col_index("name")
            .ok_or_else(|| EstimateError::catalog_error("parse", path, "Missing 'name' column"))?;
        let category_idx = col_index("category").ok_or_else(|| {
            EstimateError::catalog_error("parse", path, "Missing 'category' column")
        })?;
        let price_idx = col_index("price_per_unit").ok_or_else(|| {
            EstimateError::catalog_error("parse", path, "Missing 'price_per_unit' column")
        })?;

        let id_idx = col_index("id");
        let length_idx = col_index("length_in");
        let width_idx = col_index("width_in");
        let height_idx = col_index("height_in");
        let weight_idx = col_index("weight_lbs");
        let coverage_idx = col_index("coverage_per_unit");
        let uom_idx = col_index("unit_of_measure");
        let cap_idx = col_index("cap_material_id");
        let active_idx = col_index("is_active");
        let description_idx = col_index("description");
        let use_case_idx = col_index("use_case");
        let notes_idx = col_index("installation_notes");

        let mut catalog = InMemoryCatalog::new();
        let mut line_num = 1;

        for line_result in lines {
            line_num += 1;
            let line = line_result.map_err(|e| {
                EstimateError::catalog_error(
                    "read",
                    path,
                    format!("Failed to read line {}: {}", line_num, e),
                )
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();

            let get_str = |idx: Option<usize>| -> Option<String> {
                idx.and_then(|i| fields.get(i))
                    .filter(|s| !s.is_empty())
                    .map(|s| s.to_string())
            };
            let get_opt_f64 = |idx: Option<usize>| -> Option<f64> {
                idx.and_then(|i| fields.get(i))
                    .and_then(|v| parse_optional_f64(v))
            };

            let name = match fields.get(name_idx).filter(|s| !s.is_empty()) {
                Some(n) => n.to_string(),
                None => continue, // Skip rows without a name
            };
            let category = match fields
                .get(category_idx)
                .and_then(|c| MaterialCategory::from_code(c))
            {
                Some(c) => c,
                None => continue, // Skip unknown categories
            };
            let price_per_unit = get_opt_f64(Some(price_idx)).ok_or_else(|| {
                EstimateError::catalog_error(
                    "parse",
                    path,
                    format!("Invalid price_per_unit at line {}", line_num),
                )
            })?;

            let id = get_str(id_idx).unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let unit_of_measure = get_str(uom_idx)
                .and_then(|s| UnitOfMeasure::from_code(&s))
                .unwrap_or_default();
            let is_active = get_str(active_idx)
                .map(|s| matches!(s.to_lowercase().as_str(), "true" | "t" | "1" | "yes"))
                .unwrap_or(true);

            catalog.insert(MaterialSpec {
                id,
                name,
                category,
                length_in: get_opt_f64(length_idx),
                width_in: get_opt_f64(width_idx),
                height_in: get_opt_f64(height_idx),
                weight_lbs: get_opt_f64(weight_idx),
                coverage_per_unit: get_opt_f64(coverage_idx),
                price_per_unit,
                unit_of_measure,
                cap_material_id: get_str(cap_idx),
                description: get_str(description_idx),
                use_case: get_str(use_case_idx),
                installation_notes: get_str(notes_idx),
                is_active,
            })?;
        }

        Ok(catalog)
    }
}

impl MaterialCatalog for InMemoryCatalog {
    fn get_material(&self, id: &str) -> EstimateResult<MaterialSpec> {
        self.materials
            .get(id)
            .filter(|m| m.is_active)
            .cloned()
            .ok_or_else(|| EstimateError::material_not_found(id))
    }

    fn list_materials(&self) -> Vec<MaterialSpec> {
        self.materials
            .values()
            .filter(|m| m.is_active)
            .cloned()
            .collect()
    }
}

/// Parse an optional f64 from a CSV field
///
/// Returns None for empty strings, dashes, or invalid numbers.
fn parse_optional_f64(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }
    f64::from_str(trimmed).ok()
}

// ============================================================================
// Builtin Materials (fallback catalog, no backing store required)
// ============================================================================

/// Get a catalog with common landscape materials pre-loaded.
///
/// This provides a realistic fixed set for testing and demos without a
/// database export. Dimensions in inches, weights in pounds, prices per
/// `unit_of_measure`.
pub fn builtin_materials() -> InMemoryCatalog {
    struct Entry {
        id: &'static str,
        name: &'static str,
        category: MaterialCategory,
        dims: (f64, f64, f64),
        weight_lbs: f64,
        coverage: f64,
        price: f64,
        cap_id: Option<&'static str>,
        description: &'static str,
        use_case: &'static str,
        notes: &'static str,
    }

    let entries = [
        // Segmental retaining wall blocks
        Entry {
            id: "versa_lok_standard",
            name: "Versa-Lok Standard Block",
            category: MaterialCategory::Block,
            dims: (12.0, 6.0, 4.0),
            weight_lbs: 35.0,
            coverage: 0.5,
            price: 4.50,
            cap_id: Some("versa_lok_cap"),
            description: "Interlocking concrete block for retaining walls",
            use_case: "Retaining walls, garden walls, raised beds",
            notes: "Requires gravel base, interlocking design",
        },
        Entry {
            id: "versa_lok_cap",
            name: "Versa-Lok Cap Block",
            category: MaterialCategory::Block,
            dims: (12.0, 6.0, 2.0),
            weight_lbs: 18.0,
            coverage: 0.5,
            price: 3.25,
            cap_id: None,
            description: "Cap block for finishing retaining walls",
            use_case: "Top course of retaining walls",
            notes: "Used as final layer, provides clean finish",
        },
        Entry {
            id: "allan_block_standard",
            name: "Allan Block Standard",
            category: MaterialCategory::Block,
            dims: (18.0, 6.0, 6.0),
            weight_lbs: 50.0,
            coverage: 0.75,
            price: 6.25,
            cap_id: Some("versa_lok_cap"),
            description: "Large interlocking concrete block",
            use_case: "Tall retaining walls, commercial applications",
            notes: "Heavy duty, requires equipment for installation",
        },
        Entry {
            id: "keystone_standard",
            name: "Keystone Standard Block",
            category: MaterialCategory::Block,
            dims: (12.0, 6.0, 4.0),
            weight_lbs: 32.0,
            coverage: 0.5,
            price: 4.25,
            cap_id: Some("versa_lok_cap"),
            description: "Versatile retaining wall block",
            use_case: "Residential retaining walls, planters",
            notes: "Easy to install, good for DIY projects",
        },
        // Pavers
        Entry {
            id: "concrete_paver_4x8",
            name: "Concrete Paver 4x8",
            category: MaterialCategory::Paver,
            dims: (8.0, 4.0, 2.375),
            weight_lbs: 8.0,
            coverage: 0.22,
            price: 1.25,
            cap_id: None,
            description: "Standard concrete paver",
            use_case: "Patios, walkways, edging",
            notes: "Requires sand base, good for flat surfaces",
        },
        Entry {
            id: "concrete_paver_6x6",
            name: "Concrete Paver 6x6",
            category: MaterialCategory::Paver,
            dims: (6.0, 6.0, 2.375),
            weight_lbs: 9.0,
            coverage: 0.25,
            price: 1.50,
            cap_id: None,
            description: "Square concrete paver",
            use_case: "Patios, decorative patterns",
            notes: "Versatile for various patterns",
        },
        // Natural stone
        Entry {
            id: "fieldstone_irregular",
            name: "Fieldstone (Irregular)",
            category: MaterialCategory::Stone,
            dims: (12.0, 8.0, 6.0), // average
            weight_lbs: 45.0,
            coverage: 0.67,
            price: 8.50,
            cap_id: None,
            description: "Natural irregular stone",
            use_case: "Natural looking walls, garden features",
            notes: "Requires skilled mason, irregular sizing",
        },
        Entry {
            id: "limestone_block",
            name: "Limestone Block",
            category: MaterialCategory::Stone,
            dims: (12.0, 6.0, 4.0),
            weight_lbs: 40.0,
            coverage: 0.5,
            price: 12.00,
            cap_id: None,
            description: "Cut limestone blocks",
            use_case: "Premium walls, formal gardens",
            notes: "Professional installation recommended",
        },
        // Mortared concrete block
        Entry {
            id: "concrete_block_8x8x16",
            name: "Concrete Block 8x8x16",
            category: MaterialCategory::Concrete,
            dims: (16.0, 8.0, 8.0),
            weight_lbs: 35.0,
            coverage: 0.89,
            price: 2.50,
            cap_id: Some("versa_lok_cap"),
            description: "Standard concrete block",
            use_case: "Foundation walls, structural walls",
            notes: "Requires mortar, professional installation",
        },
        // Brick
        Entry {
            id: "standard_brick",
            name: "Standard Brick",
            category: MaterialCategory::Brick,
            dims: (8.0, 3.625, 2.25),
            weight_lbs: 4.5,
            coverage: 0.2,
            price: 0.75,
            cap_id: None,
            description: "Standard clay brick",
            use_case: "Decorative walls, planters",
            notes: "Requires mortar, good for small projects",
        },
        // Timber
        Entry {
            id: "landscape_timber_6x6",
            name: "Landscape Timber 6x6",
            category: MaterialCategory::Timber,
            dims: (96.0, 6.0, 6.0), // 8 feet long
            weight_lbs: 25.0,
            coverage: 4.0, // 4 feet of wall length
            price: 15.00,
            cap_id: None,
            description: "Pressure treated landscape timber",
            use_case: "Garden walls, raised beds",
            notes: "Requires rebar, good for low walls",
        },
        // Gabion
        Entry {
            id: "gabion_basket_3x3x6",
            name: "Gabion Basket 3x3x6",
            category: MaterialCategory::Gabion,
            dims: (72.0, 36.0, 36.0), // 6' x 3' x 3'
            weight_lbs: 0.0,          // empty basket
            coverage: 18.0,           // 18 sq ft face
            price: 45.00,
            cap_id: None,
            description: "Wire basket for stone fill",
            use_case: "Large retaining walls, erosion control",
            notes: "Fill with local stone, requires heavy equipment",
        },
    ];

    let mut catalog = InMemoryCatalog::new();
    for e in entries {
        let (length, width, height) = e.dims;
        let spec = MaterialSpec {
            id: e.id.to_string(),
            name: e.name.to_string(),
            category: e.category,
            length_in: Some(length),
            width_in: Some(width),
            height_in: Some(height),
            weight_lbs: if e.weight_lbs > 0.0 {
                Some(e.weight_lbs)
            } else {
                None
            },
            coverage_per_unit: Some(e.coverage),
            price_per_unit: e.price,
            unit_of_measure: UnitOfMeasure::Each,
            cap_material_id: e.cap_id.map(|s| s.to_string()),
            description: Some(e.description.to_string()),
            use_case: Some(e.use_case.to_string()),
            installation_notes: Some(e.notes.to_string()),
            is_active: true,
        };
        // Builtin entries are statically valid
        catalog
            .insert(spec)
            .unwrap_or_else(|e| unreachable!("builtin material invalid: {}", e));
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            MaterialCategory::from_code("block"),
            Some(MaterialCategory::Block)
        );
        assert_eq!(
            MaterialCategory::from_code("retaining_wall_blocks"),
            Some(MaterialCategory::Block)
        );
        assert_eq!(
            MaterialCategory::from_code("WOOD"),
            Some(MaterialCategory::Timber)
        );
        assert_eq!(MaterialCategory::from_code("plastic"), None);
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = builtin_materials();
        assert_eq!(catalog.len(), 12);

        let block = catalog.get_material("versa_lok_standard").unwrap();
        assert_eq!(block.name, "Versa-Lok Standard Block");
        assert_eq!(block.length_in, Some(12.0));
        assert_eq!(block.price_per_unit, 4.50);
        assert_eq!(block.cap_material_id.as_deref(), Some("versa_lok_cap"));
    }

    #[test]
    fn test_material_not_found() {
        let catalog = builtin_materials();
        let result = catalog.get_material("granite_cobble");
        assert_eq!(
            result.unwrap_err(),
            EstimateError::material_not_found("granite_cobble")
        );
    }

    #[test]
    fn test_inactive_material_excluded() {
        let mut catalog = builtin_materials();
        let mut brick = catalog.get_material("standard_brick").unwrap();
        brick.is_active = false;
        catalog.insert(brick).unwrap();

        assert!(catalog.get_material("standard_brick").is_err());
        assert!(catalog
            .list_materials()
            .iter()
            .all(|m| m.id != "standard_brick"));
        // Inactive entries still occupy a catalog slot
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn test_list_by_category() {
        let catalog = builtin_materials();
        let blocks = catalog.list_by_category(MaterialCategory::Block);
        assert_eq!(blocks.len(), 4);
        assert!(blocks.iter().all(|m| m.category == MaterialCategory::Block));

        let metals = catalog.list_by_category(MaterialCategory::Metal);
        assert!(metals.is_empty());
    }

    #[test]
    fn test_listing_order_is_deterministic() {
        let catalog = builtin_materials();
        let first: Vec<String> = catalog.list_materials().iter().map(|m| m.id.clone()).collect();
        let second: Vec<String> = catalog.list_materials().iter().map(|m| m.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_coverage_derived_from_dimensions() {
        let spec = MaterialSpec {
            id: "test_block".to_string(),
            name: "Test Block".to_string(),
            category: MaterialCategory::Block,
            length_in: Some(12.0),
            width_in: Some(6.0),
            height_in: Some(6.0),
            weight_lbs: None,
            coverage_per_unit: None,
            price_per_unit: 5.0,
            unit_of_measure: UnitOfMeasure::Each,
            cap_material_id: None,
            description: None,
            use_case: None,
            installation_notes: None,
            is_active: true,
        };
        // 12 x 6 / 144 = 0.5 sq ft of face per unit
        assert_eq!(spec.coverage_sq_ft(), 0.5);

        let manual = MaterialSpec {
            coverage_per_unit: Some(0.75),
            ..spec
        };
        assert_eq!(manual.coverage_sq_ft(), 0.75);
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut catalog = InMemoryCatalog::new();
        let spec = MaterialSpec {
            id: "bad".to_string(),
            name: "Bad".to_string(),
            category: MaterialCategory::Other,
            length_in: None,
            width_in: None,
            height_in: None,
            weight_lbs: None,
            coverage_per_unit: None,
            price_per_unit: -1.0,
            unit_of_measure: UnitOfMeasure::Each,
            cap_material_id: None,
            description: None,
            use_case: None,
            installation_notes: None,
            is_active: true,
        };
        assert!(catalog.insert(spec).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_from_csv() {
        use std::io::Write;

        let path = std::env::temp_dir().join(format!(
            "estimator-catalog-{}.csv",
            uuid::Uuid::new_v4()
        ));
        {
            let mut f = std::fs::File::create(&path).unwrap();
            writeln!(
                f,
                "id,name,category,length_in,width_in,height_in,weight_lbs,coverage_per_unit,price_per_unit,unit_of_measure,cap_material_id,is_active"
            )
            .unwrap();
            writeln!(
                f,
                "wall_block,Wall Block,block,12,6,4,35,0.5,4.50,each,cap_block,true"
            )
            .unwrap();
            writeln!(f, "cap_block,Cap Block,block,12,6,2,18,0.5,3.25,each,,true").unwrap();
            writeln!(f, "retired,Old Block,block,12,6,4,35,0.5,2.00,each,,false").unwrap();
            writeln!(f, ",Unnamed Mulch,other,,,,,,35.00,cubic_yard,,true").unwrap();
            writeln!(f, "mystery,Mystery,plastic,1,1,1,1,1,1.00,each,,true").unwrap();
        }

        let catalog = InMemoryCatalog::load_from_csv(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        // Unknown category row skipped; blank-id row got a generated id
        assert_eq!(catalog.len(), 4);

        let block = catalog.get_material("wall_block").unwrap();
        assert_eq!(block.category, MaterialCategory::Block);
        assert_eq!(block.cap_material_id.as_deref(), Some("cap_block"));
        assert_eq!(block.unit_of_measure, UnitOfMeasure::Each);

        // Inactive row loads but does not resolve
        assert!(catalog.get_material("retired").is_err());

        let bulk: Vec<_> = catalog.list_by_category(MaterialCategory::Other);
        assert_eq!(bulk.len(), 1);
        assert_eq!(bulk[0].unit_of_measure, UnitOfMeasure::CubicYard);
        assert!(bulk[0].length_in.is_none());
    }

    #[test]
    fn test_load_from_csv_missing_file() {
        let result = InMemoryCatalog::load_from_csv("/nonexistent/materials.csv");
        assert!(matches!(
            result,
            Err(EstimateError::CatalogError { .. })
        ));
    }

    #[test]
    fn test_material_spec_serialization() {
        let catalog = builtin_materials();
        let spec = catalog.get_material("gabion_basket_3x3x6").unwrap();
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"category\":\"gabion\""));
        let roundtrip: MaterialSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, roundtrip);
    }
}
