//! # Wall Materials Calculation
//!
//! Computes the full material list and cost for a single-material landscape
//! wall: primary units packed into courses, mortar/rebar/base layers by
//! category, optional cap course, and an installation-time estimate.
//!
//! ## Assumptions
//!
//! - Straight wall, uniform height (length x height face)
//! - One primary material resolved from the injected catalog
//! - Secondary line items (gravel, mortar, rebar, ...) are priced from a
//!   fixed table of market estimates, not from the catalog
//!
//! ## Example
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
//! assert_eq!(result.cost_breakdown["primary_material"], 1080.0);
//! ```

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::calculations::{MaterialLine, QuantityUnit};
use crate::catalog::{MaterialCatalog, MaterialCategory, MaterialSpec};
use crate::errors::{EstimateError, EstimateResult};
use crate::units::{
    round_to, round_to_cents, Feet, Inches, CUBIC_INCHES_PER_CUBIC_YARD, INCHES_PER_FOOT,
    SQUARE_INCHES_PER_SQUARE_FOOT,
};

// ============================================================================
// Cost Estimates (secondary line items)
// ============================================================================
//
// Market approximations, not catalog-driven. The catalog prices only the
// primary material and its cap SKU.

pub const GRAVEL_COST_PER_CUBIC_YARD: f64 = 25.00;
pub const SAND_COST_PER_CUBIC_YARD: f64 = 30.00;
pub const MORTAR_COST_PER_BAG: f64 = 8.00;
pub const REBAR_COST_PER_PIECE: f64 = 5.00;
pub const FABRIC_COST_PER_SQUARE_FOOT: f64 = 0.50;
pub const DRAINAGE_PIPE_COST_PER_FOOT: f64 = 3.00;
pub const STONE_FILL_COST_PER_TON: f64 = 35.00;
pub const GEOTEXTILE_COST_PER_SQUARE_FOOT: f64 = 2.00;

/// Per-unit cost estimate by material line key.
static COST_ESTIMATES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("gravel_base_cubic_yards", GRAVEL_COST_PER_CUBIC_YARD),
        ("sand_bed_cubic_yards", SAND_COST_PER_CUBIC_YARD),
        ("sand_base_cubic_yards", SAND_COST_PER_CUBIC_YARD),
        ("paver_sand_cubic_yards", SAND_COST_PER_CUBIC_YARD),
        ("sand_cubic_yards", SAND_COST_PER_CUBIC_YARD),
        ("mortar_bags", MORTAR_COST_PER_BAG),
        ("rebar_pieces", REBAR_COST_PER_PIECE),
        ("landscape_fabric_square_feet", FABRIC_COST_PER_SQUARE_FOOT),
        ("drainage_pipe_feet", DRAINAGE_PIPE_COST_PER_FOOT),
        ("stone_fill_tons", STONE_FILL_COST_PER_TON),
        ("geotextile_square_feet", GEOTEXTILE_COST_PER_SQUARE_FOOT),
    ])
});

// ============================================================================
// Packing Ratios
// ============================================================================

/// Mortar bags per mortared concrete block
const MORTAR_BAGS_PER_CONCRETE_BLOCK: f64 = 0.3;
/// Mortar bags per stone in a mortared stone wall
const MORTAR_BAGS_PER_STONE: f64 = 0.1;
/// Mortar bags per brick
const MORTAR_BAGS_PER_BRICK: f64 = 0.05;
/// Masonry sand per brick (cubic yards)
const SAND_CUBIC_YARDS_PER_BRICK: f64 = 0.001;
/// Standard mortar joint thickness added to brick length and height (in)
const MORTAR_JOINT_IN: f64 = 0.375;
/// Vertical rebar spacing along the wall (in), one piece every 4 ft
const REBAR_SPACING_IN: f64 = 48.0;
/// Stone fill density for gabions (tons per cubic yard)
const STONE_FILL_TONS_PER_CUBIC_YARD: f64 = 1.5;
/// Pavers stacked as a wall are limited to this many courses
const MAX_PAVER_WALL_COURSES: u64 = 3;
/// Walls taller than this need a drainage pipe run behind the base (ft)
const DRAINAGE_HEIGHT_THRESHOLD_FT: f64 = 3.0;

// ============================================================================
// Input / Result Types
// ============================================================================

/// Input parameters for a wall estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wall_length_ft": 20.0,
///   "wall_height_ft": 4.0,
///   "material_id": "versa_lok_standard",
///   "include_base": true,
///   "include_cap": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallInput {
    /// Wall length in feet
    pub wall_length_ft: f64,

    /// Wall height in feet
    pub wall_height_ft: f64,

    /// Catalog id of the primary material
    pub material_id: String,

    /// Include base-preparation materials (fabric, drainage)
    pub include_base: bool,

    /// Include a cap course when the material carries a cap SKU
    pub include_cap: bool,
}

impl WallInput {
    /// Validate input parameters.
    pub fn validate(&self) -> EstimateResult<()> {
        if self.wall_length_ft <= 0.0 {
            return Err(EstimateError::invalid_dimension(
                "wall_length_ft",
                self.wall_length_ft.to_string(),
                "Wall length must be positive",
            ));
        }
        if self.wall_height_ft <= 0.0 {
            return Err(EstimateError::invalid_dimension(
                "wall_height_ft",
                self.wall_height_ft.to_string(),
                "Wall height must be positive",
            ));
        }
        Ok(())
    }
}

/// Echo of the wall dimensions with inch conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSpecifications {
    pub length_feet: f64,
    pub height_feet: f64,
    pub length_inches: f64,
    pub height_inches: f64,
}

/// Snapshot of the resolved primary material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryMaterial {
    pub name: String,
    pub category: MaterialCategory,
    pub dimensions: String,
    pub weight_per_unit: Option<f64>,
    pub price_per_unit: f64,
}

/// Category-specific quantity breakdown.
///
/// Coursed materials report the course grid, irregular stone reports
/// coverage, gabions report the basket grid and fill volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WallQuantities {
    /// Whole units packed in courses (blocks, pavers, bricks, timbers)
    Coursed {
        units_per_course: u64,
        courses: u64,
        total_units: u64,
    },
    /// Irregular units estimated from face coverage
    Coverage {
        wall_area_sq_ft: f64,
        stones_needed: u64,
    },
    /// Basket grid with stone fill
    Baskets {
        baskets_length: u64,
        baskets_height: u64,
        total_baskets: u64,
        stone_cubic_yards: f64,
    },
}

/// Results from a wall estimate.
///
/// ## JSON Example (abbreviated)
///
/// ```json
/// {
///   "wall_specifications": { "length_feet": 20.0, "height_feet": 4.0,
///                            "length_inches": 240.0, "height_inches": 48.0 },
///   "primary_material": { "name": "Versa-Lok Standard Block", "category": "block",
///                         "dimensions": "12\" x 6\" x 4\"",
///                         "weight_per_unit": 35.0, "price_per_unit": 4.5 },
///   "calculations": { "type": "Coursed", "units_per_course": 20,
///                     "courses": 12, "total_units": 240 },
///   "materials_needed": { "primary_blocks": { "quantity": 240.0, "unit": "blocks" } },
///   "cost_breakdown": { "primary_material": 1080.0 },
///   "total_estimated_cost": 1231.55,
///   "estimated_installation_hours": 6
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallResult {
    pub wall_specifications: WallSpecifications,
    pub primary_material: PrimaryMaterial,
    pub calculations: WallQuantities,
    pub materials_needed: BTreeMap<String, MaterialLine>,
    pub cost_breakdown: BTreeMap<String, f64>,
    pub total_estimated_cost: f64,
    pub installation_notes: Vec<String>,
    pub estimated_installation_hours: u32,
}

// ============================================================================
// Calculation
// ============================================================================

/// Per-category breakdown produced by the dispatch below.
struct CategoryBreakdown {
    quantities: WallQuantities,
    lines: BTreeMap<String, MaterialLine>,
    /// Key of the line priced from the catalog
    primary_line: &'static str,
}

/// Calculate the material list and cost for a wall.
///
/// Pure function over the input and a read-only catalog snapshot: identical
/// inputs against an unchanged catalog produce byte-identical results.
pub fn calculate(input: &WallInput, catalog: &dyn MaterialCatalog) -> EstimateResult<WallResult> {
    input.validate()?;
    let material = catalog.get_material(&input.material_id)?;

    let length_in = Inches::from(Feet(input.wall_length_ft)).value();
    let height_in = Inches::from(Feet(input.wall_height_ft)).value();

    let mut breakdown = match material.category {
        MaterialCategory::Block => segmental_block_wall(&material, length_in, height_in),
        MaterialCategory::Paver => paver_wall(&material, length_in, height_in),
        MaterialCategory::Stone => stone_wall(&material, length_in, height_in),
        MaterialCategory::Brick => brick_wall(&material, length_in, height_in),
        MaterialCategory::Timber => timber_wall(&material, length_in, height_in),
        MaterialCategory::Gabion => gabion_wall(&material, length_in, height_in),
        // Metal, bulk, and anything future-added estimate like a mortared
        // block wall until they grow a formula of their own
        MaterialCategory::Concrete | MaterialCategory::Metal | MaterialCategory::Other => {
            mortared_block_wall(&material, length_in, height_in)
        }
    };

    if input.include_base {
        add_base_materials(
            &mut breakdown.lines,
            input.wall_length_ft,
            input.wall_height_ft,
        );
    }

    let mut cost_breakdown: BTreeMap<String, f64> = BTreeMap::new();

    if input.include_cap && material.category.takes_cap_course() {
        add_cap_course(&mut breakdown, &mut cost_breakdown, &material, length_in, catalog);
    }

    // Primary material cost; a quantity below one clamps to one
    let mut primary_quantity = breakdown
        .lines
        .get(breakdown.primary_line)
        .map(|line| line.quantity)
        .unwrap_or(0.0);
    if !(primary_quantity >= 1.0) {
        log::warn!(
            "primary quantity {} for '{}' clamped to 1",
            primary_quantity,
            material.id
        );
        primary_quantity = 1.0;
    }
    cost_breakdown.insert(
        "primary_material".to_string(),
        round_to_cents(primary_quantity * material.price_per_unit),
    );

    // Secondary line items priced from the fixed estimate table; lines with
    // no table entry (e.g. footing concrete) stay quantity-only
    for (key, line) in &breakdown.lines {
        if let Some(rate) = COST_ESTIMATES.get(key.as_str()) {
            cost_breakdown.insert(key.clone(), round_to_cents(line.quantity * rate));
        }
    }

    let total_estimated_cost = round_to_cents(cost_breakdown.values().sum());

    let hours = estimate_installation_hours(
        input.wall_length_ft * input.wall_height_ft,
        material.category,
    );

    let mut installation_notes = Vec::new();
    if let Some(notes) = &material.installation_notes {
        installation_notes.push(notes.clone());
    }
    installation_notes.push(format!(
        "Wall area: {:.1} square feet",
        input.wall_length_ft * input.wall_height_ft
    ));
    installation_notes.push(format!("Estimated installation time: {} hours", hours));

    Ok(WallResult {
        wall_specifications: WallSpecifications {
            length_feet: input.wall_length_ft,
            height_feet: input.wall_height_ft,
            length_inches: length_in,
            height_inches: height_in,
        },
        primary_material: PrimaryMaterial {
            name: material.name.clone(),
            category: material.category,
            dimensions: material.dimensions_label(),
            weight_per_unit: material.weight_lbs,
            price_per_unit: material.price_per_unit,
        },
        calculations: breakdown.quantities,
        materials_needed: breakdown.lines,
        cost_breakdown,
        total_estimated_cost,
        installation_notes,
        estimated_installation_hours: hours,
    })
}

/// Ceiling division into whole units.
///
/// A zero or missing unit dimension divides to infinity; any non-finite
/// or sub-one count clamps to one unit with a warning.
fn whole_units(span: f64, unit: f64) -> u64 {
    let raw = (span / unit).ceil();
    if raw.is_finite() && raw >= 1.0 {
        raw as u64
    } else {
        log::warn!("unit count {} clamped to 1 (span {} / unit {})", raw, span, unit);
        1
    }
}

fn segmental_block_wall(
    material: &MaterialSpec,
    length_in: f64,
    height_in: f64,
) -> CategoryBreakdown {
    let unit_length = material.length_in.unwrap_or(0.0);
    let unit_width = material.width_in.unwrap_or(0.0);
    let unit_height = material.height_in.unwrap_or(0.0);

    let blocks_per_course = whole_units(length_in, unit_length);
    let courses = whole_units(height_in, unit_height);
    let total_blocks = blocks_per_course * courses;

    let mut lines = BTreeMap::new();
    lines.insert(
        "primary_blocks".to_string(),
        MaterialLine::new(total_blocks as f64, QuantityUnit::Blocks),
    );
    // 6" gravel base and 2" sand bed under the full wall footprint
    lines.insert(
        "gravel_base_cubic_yards".to_string(),
        MaterialLine::new(
            round_to(length_in * unit_width * 6.0 / CUBIC_INCHES_PER_CUBIC_YARD, 2),
            QuantityUnit::CubicYards,
        ),
    );
    lines.insert(
        "sand_bed_cubic_yards".to_string(),
        MaterialLine::new(
            round_to(length_in * unit_width * 2.0 / CUBIC_INCHES_PER_CUBIC_YARD, 2),
            QuantityUnit::CubicYards,
        ),
    );

    CategoryBreakdown {
        quantities: WallQuantities::Coursed {
            units_per_course: blocks_per_course,
            courses,
            total_units: total_blocks,
        },
        lines,
        primary_line: "primary_blocks",
    }
}

fn mortared_block_wall(
    material: &MaterialSpec,
    length_in: f64,
    height_in: f64,
) -> CategoryBreakdown {
    let unit_length = material.length_in.unwrap_or(0.0);
    let unit_height = material.height_in.unwrap_or(0.0);

    let blocks_per_course = whole_units(length_in, unit_length);
    let courses = whole_units(height_in, unit_height);
    let total_blocks = blocks_per_course * courses;

    let mut lines = BTreeMap::new();
    lines.insert(
        "concrete_blocks".to_string(),
        MaterialLine::new(total_blocks as f64, QuantityUnit::Blocks),
    );
    lines.insert(
        "mortar_bags".to_string(),
        MaterialLine::new(
            (total_blocks as f64 * MORTAR_BAGS_PER_CONCRETE_BLOCK).ceil(),
            QuantityUnit::Bags,
        ),
    );
    lines.insert(
        "rebar_pieces".to_string(),
        MaterialLine::new(
            (length_in / REBAR_SPACING_IN).ceil(),
            QuantityUnit::Pieces,
        ),
    );
    // 12" wide x 8" deep concrete footing along the wall
    lines.insert(
        "concrete_footings_cubic_yards".to_string(),
        MaterialLine::new(
            round_to(length_in * 12.0 * 8.0 / CUBIC_INCHES_PER_CUBIC_YARD, 2),
            QuantityUnit::CubicYards,
        ),
    );

    CategoryBreakdown {
        quantities: WallQuantities::Coursed {
            units_per_course: blocks_per_course,
            courses,
            total_units: total_blocks,
        },
        lines,
        primary_line: "concrete_blocks",
    }
}

fn paver_wall(material: &MaterialSpec, length_in: f64, height_in: f64) -> CategoryBreakdown {
    let unit_length = material.length_in.unwrap_or(0.0);
    let unit_width = material.width_in.unwrap_or(0.0);
    let unit_height = material.height_in.unwrap_or(0.0);

    // Pavers are not rated for tall walls; anything above the cap is a
    // different material choice
    let courses = whole_units(height_in, unit_height).min(MAX_PAVER_WALL_COURSES);
    let pavers_per_course = whole_units(length_in, unit_length);
    let total_pavers = pavers_per_course * courses;

    let mut lines = BTreeMap::new();
    lines.insert(
        "pavers".to_string(),
        MaterialLine::new(total_pavers as f64, QuantityUnit::Each),
    );
    lines.insert(
        "sand_base_cubic_yards".to_string(),
        MaterialLine::new(
            round_to(length_in * unit_width * 4.0 / CUBIC_INCHES_PER_CUBIC_YARD, 2),
            QuantityUnit::CubicYards,
        ),
    );
    lines.insert(
        "paver_sand_cubic_yards".to_string(),
        MaterialLine::new(
            round_to(length_in * unit_width * 1.0 / CUBIC_INCHES_PER_CUBIC_YARD, 2),
            QuantityUnit::CubicYards,
        ),
    );

    CategoryBreakdown {
        quantities: WallQuantities::Coursed {
            units_per_course: pavers_per_course,
            courses,
            total_units: total_pavers,
        },
        lines,
        primary_line: "pavers",
    }
}

fn stone_wall(material: &MaterialSpec, length_in: f64, height_in: f64) -> CategoryBreakdown {
    // Irregular stone packs by face coverage, not course grids
    let wall_area_sq_ft = length_in * height_in / SQUARE_INCHES_PER_SQUARE_FOOT;
    let stones_needed = whole_units(wall_area_sq_ft, material.coverage_sq_ft());

    let mut lines = BTreeMap::new();
    lines.insert(
        "stone_blocks".to_string(),
        MaterialLine::new(stones_needed as f64, QuantityUnit::Each),
    );
    lines.insert(
        "mortar_bags".to_string(),
        MaterialLine::new(
            (stones_needed as f64 * MORTAR_BAGS_PER_STONE).ceil(),
            QuantityUnit::Bags,
        ),
    );
    lines.insert(
        "gravel_base_cubic_yards".to_string(),
        MaterialLine::new(
            round_to(length_in * 12.0 * 6.0 / CUBIC_INCHES_PER_CUBIC_YARD, 2),
            QuantityUnit::CubicYards,
        ),
    );

    CategoryBreakdown {
        quantities: WallQuantities::Coverage {
            wall_area_sq_ft: round_to(wall_area_sq_ft, 2),
            stones_needed,
        },
        lines,
        primary_line: "stone_blocks",
    }
}

fn brick_wall(material: &MaterialSpec, length_in: f64, height_in: f64) -> CategoryBreakdown {
    // Unit size inflated by the mortar joint on length and height
    let unit_length = material.length_in.unwrap_or(0.0) + MORTAR_JOINT_IN;
    let unit_height = material.height_in.unwrap_or(0.0) + MORTAR_JOINT_IN;

    let bricks_per_course = whole_units(length_in, unit_length);
    let courses = whole_units(height_in, unit_height);
    let total_bricks = bricks_per_course * courses;

    let mut lines = BTreeMap::new();
    lines.insert(
        "bricks".to_string(),
        MaterialLine::new(total_bricks as f64, QuantityUnit::Each),
    );
    lines.insert(
        "mortar_bags".to_string(),
        MaterialLine::new(
            (total_bricks as f64 * MORTAR_BAGS_PER_BRICK).ceil(),
            QuantityUnit::Bags,
        ),
    );
    lines.insert(
        "sand_cubic_yards".to_string(),
        MaterialLine::new(
            round_to(total_bricks as f64 * SAND_CUBIC_YARDS_PER_BRICK, 2),
            QuantityUnit::CubicYards,
        ),
    );

    CategoryBreakdown {
        quantities: WallQuantities::Coursed {
            units_per_course: bricks_per_course,
            courses,
            total_units: total_bricks,
        },
        lines,
        primary_line: "bricks",
    }
}

fn timber_wall(material: &MaterialSpec, length_in: f64, height_in: f64) -> CategoryBreakdown {
    let unit_length = material.length_in.unwrap_or(0.0);
    let unit_height = material.height_in.unwrap_or(0.0);

    let timbers_per_course = whole_units(length_in, unit_length);
    let courses = whole_units(height_in, unit_height);
    let total_timbers = timbers_per_course * courses;

    let mut lines = BTreeMap::new();
    lines.insert(
        "landscape_timbers".to_string(),
        MaterialLine::new(total_timbers as f64, QuantityUnit::Each),
    );
    // Two spikes per timber
    lines.insert(
        "rebar_pieces".to_string(),
        MaterialLine::new((total_timbers * 2) as f64, QuantityUnit::Pieces),
    );
    lines.insert(
        "gravel_base_cubic_yards".to_string(),
        MaterialLine::new(
            round_to(length_in * 6.0 * 4.0 / CUBIC_INCHES_PER_CUBIC_YARD, 2),
            QuantityUnit::CubicYards,
        ),
    );

    CategoryBreakdown {
        quantities: WallQuantities::Coursed {
            units_per_course: timbers_per_course,
            courses,
            total_units: total_timbers,
        },
        lines,
        primary_line: "landscape_timbers",
    }
}

fn gabion_wall(material: &MaterialSpec, length_in: f64, height_in: f64) -> CategoryBreakdown {
    let basket_length = material.length_in.unwrap_or(0.0);
    let basket_width = material.width_in.unwrap_or(0.0);
    let basket_height = material.height_in.unwrap_or(0.0);

    let baskets_length = whole_units(length_in, basket_length);
    let baskets_height = whole_units(height_in, basket_height);
    let total_baskets = baskets_length * baskets_height;

    let stone_cubic_yards = total_baskets as f64 * (basket_length * basket_width * basket_height)
        / CUBIC_INCHES_PER_CUBIC_YARD;

    let mut lines = BTreeMap::new();
    lines.insert(
        "gabion_baskets".to_string(),
        MaterialLine::new(total_baskets as f64, QuantityUnit::Each),
    );
    lines.insert(
        "stone_fill_tons".to_string(),
        MaterialLine::new(
            round_to(stone_cubic_yards * STONE_FILL_TONS_PER_CUBIC_YARD, 1),
            QuantityUnit::Tons,
        ),
    );
    lines.insert(
        "geotextile_square_feet".to_string(),
        MaterialLine::new(
            round_to(length_in * INCHES_PER_FOOT / SQUARE_INCHES_PER_SQUARE_FOOT, 0),
            QuantityUnit::SquareFeet,
        ),
    );

    CategoryBreakdown {
        quantities: WallQuantities::Baskets {
            baskets_length,
            baskets_height,
            total_baskets,
            stone_cubic_yards: round_to(stone_cubic_yards, 2),
        },
        lines,
        primary_line: "gabion_baskets",
    }
}

/// Base-preparation lines common to all wall categories.
fn add_base_materials(
    lines: &mut BTreeMap<String, MaterialLine>,
    wall_length_ft: f64,
    wall_height_ft: f64,
) {
    // 2 ft wide fabric strip along the wall
    lines.insert(
        "landscape_fabric_square_feet".to_string(),
        MaterialLine::new(round_to(wall_length_ft * 2.0, 0), QuantityUnit::SquareFeet),
    );
    if wall_height_ft > DRAINAGE_HEIGHT_THRESHOLD_FT {
        lines.insert(
            "drainage_pipe_feet".to_string(),
            MaterialLine::new(round_to(wall_length_ft, 0), QuantityUnit::LinearFeet),
        );
    }
}

/// Cap course from the material's explicit cap SKU reference.
///
/// A material without a cap reference, or whose cap no longer resolves in
/// the catalog, simply gets no cap line. That is expected for one-piece
/// systems and retired SKUs, not an error.
fn add_cap_course(
    breakdown: &mut CategoryBreakdown,
    cost_breakdown: &mut BTreeMap<String, f64>,
    material: &MaterialSpec,
    length_in: f64,
    catalog: &dyn MaterialCatalog,
) {
    let Some(cap_id) = &material.cap_material_id else {
        return;
    };
    match catalog.get_material(cap_id) {
        Ok(cap) if cap.length_in.is_some_and(|l| l > 0.0) => {
            let cap_blocks = whole_units(length_in, cap.length_in.unwrap_or(0.0));
            breakdown.lines.insert(
                "cap_blocks".to_string(),
                MaterialLine::new(cap_blocks as f64, QuantityUnit::Blocks),
            );
            cost_breakdown.insert(
                "cap_blocks".to_string(),
                round_to_cents(cap_blocks as f64 * cap.price_per_unit),
            );
        }
        _ => {
            log::debug!("cap material '{}' unavailable, skipping cap course", cap_id);
        }
    }
}

/// Installation labor by category, hours per 100 sq ft of wall face.
fn hours_per_100_sqft(category: MaterialCategory) -> f64 {
    match category {
        MaterialCategory::Block => 8.0,
        MaterialCategory::Paver => 12.0,
        MaterialCategory::Stone => 20.0,
        MaterialCategory::Concrete => 15.0,
        MaterialCategory::Brick => 18.0,
        MaterialCategory::Timber => 6.0,
        MaterialCategory::Gabion => 4.0,
        MaterialCategory::Metal | MaterialCategory::Other => 10.0,
    }
}

fn estimate_installation_hours(wall_area_sq_ft: f64, category: MaterialCategory) -> u32 {
    let area = if wall_area_sq_ft > 0.0 {
        wall_area_sq_ft
    } else {
        log::warn!("wall area {} clamped to 1 sq ft", wall_area_sq_ft);
        1.0
    };
    let hours = (area / 100.0 * hours_per_100_sqft(category)).round() as u32;
    hours.max(1)
}
