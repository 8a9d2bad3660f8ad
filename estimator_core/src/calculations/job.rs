//! # Generic Job Calculation
//!
//! Quantity takeoffs for the four standard hardscape job types: paver
//! patios, block walls, stair runs, and individual steps. Measurements
//! arrive as feet/inches pairs keyed by field name; results come back as
//! named material lines plus a layer breakdown and volume/weight summary.
//!
//! Unlike the wall estimator this module never touches the catalog and
//! produces quantities only, no pricing. It mirrors the field worksheet:
//! "how much of each thing do I order", with material selection left to
//! the office.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use estimator_core::calculations::job::{calculate, JobInput, JobType};
//!
//! let mut measurements = BTreeMap::new();
//! measurements.insert("length_ft".to_string(), 20.0);
//! measurements.insert("length_in".to_string(), 6.0);
//! measurements.insert("width_ft".to_string(), 15.0);
//!
//! let input = JobInput::new(JobType::Pavers, measurements);
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.area_sq_ft, 307.5);
//! assert_eq!(result.total_depth_in, 8.375);
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::{MaterialLine, QuantityUnit};
use crate::errors::{EstimateError, EstimateResult};
use crate::units::{
    feet_inches_to_inches, round_to, CubicFeet, CubicYards, CUBIC_INCHES_PER_CUBIC_FOOT,
    INCHES_PER_FOOT, POUNDS_PER_TON, SQUARE_INCHES_PER_SQUARE_FOOT,
};

// ============================================================================
// Layer and Packing Defaults
// ============================================================================

/// Nominal paver thickness (in)
pub const PAVER_HEIGHT_DEFAULT_IN: f64 = 2.375;
/// Bedding fines layer under pavers (in)
pub const FINES_DEPTH_DEFAULT_IN: f64 = 2.375;
/// CA11 crushed-aggregate base layer (in)
pub const CA11_DEPTH_DEFAULT_IN: f64 = 3.625;
/// Wall blocks per square foot of face
pub const BLOCKS_PER_SQFT_DEFAULT: f64 = 1.125;
/// Mortar as a fraction of wall volume
const MORTAR_VOLUME_RATIO: f64 = 0.1;
/// Backfill as a fraction of wall volume
const BACKFILL_RATIO: f64 = 0.8;
/// Comfortable riser height used to derive a step count (in)
pub const STANDARD_STEP_RISE_IN: f64 = 7.0;
/// Default stair width (in)
pub const TREAD_WIDTH_DEFAULT_IN: f64 = 36.0;
/// Tread/riser slab thickness used for volume estimates (ft)
const TREAD_THICKNESS_FT: f64 = 0.1;
/// Compacted aggregate density (lbs per cubic foot)
const BASE_MATERIAL_DENSITY_PCF: f64 = 100.0;
/// Natural stone density (lbs per cubic foot)
const STONE_DENSITY_PCF: f64 = 150.0;
/// Built wall density (tons per cubic yard)
const WALL_DENSITY_TONS_PER_CUBIC_YARD: f64 = 1.5;

// ============================================================================
// Input Types
// ============================================================================

/// The supported job types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Pavers,
    Walls,
    Stairs,
    Steps,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::Pavers,
        JobType::Walls,
        JobType::Stairs,
        JobType::Steps,
    ];

    /// The result label, e.g. `paver_installation`.
    pub fn label(&self) -> &'static str {
        match self {
            JobType::Pavers => "paver_installation",
            JobType::Walls => "wall_construction",
            JobType::Stairs => "stair_construction",
            JobType::Steps => "step_installation",
        }
    }

    /// One-line description for menus and help text.
    pub fn description(&self) -> &'static str {
        match self {
            JobType::Pavers => "Paver patio or walkway over aggregate base",
            JobType::Walls => "Block wall by face area and volume",
            JobType::Stairs => "Full stair run from total rise and run",
            JobType::Steps => "Single step tread and riser",
        }
    }
}

impl FromStr for JobType {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pavers" => Ok(JobType::Pavers),
            "walls" => Ok(JobType::Walls),
            "stairs" => Ok(JobType::Stairs),
            "steps" => Ok(JobType::Steps),
            other => Err(EstimateError::unsupported_job_type(other)),
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JobType::Pavers => "pavers",
            JobType::Walls => "walls",
            JobType::Stairs => "stairs",
            JobType::Steps => "steps",
        };
        write!(f, "{}", name)
    }
}

/// How to treat absent required measurement fields.
///
/// Lenient mode treats a missing feet/inches pair as zero and lets the
/// math produce a degenerate (zero-area) result; strict mode rejects the
/// input with [`EstimateError::MissingMeasurement`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementPolicy {
    #[default]
    Lenient,
    Strict,
}

/// Input parameters for a job estimate.
///
/// Measurements are keyed by field name. Dimensions come as feet/inches
/// pairs (`length_ft` + `length_in`, either half may be omitted); layer
/// depths and counts are single keys (`paver_height`, `step_count`, ...).
///
/// ## JSON Example
///
/// ```json
/// {
///   "job_type": "pavers",
///   "measurements": {
///     "length_ft": 20.0, "length_in": 6.0,
///     "width_ft": 15.0
///   },
///   "policy": "strict"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobInput {
    pub job_type: JobType,

    pub measurements: BTreeMap<String, f64>,

    #[serde(default)]
    pub policy: MeasurementPolicy,

    /// Step tread material name (steps jobs, defaults to "Stone")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tread_material: Option<String>,

    /// Step riser material name (steps jobs, defaults to "Stone")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub riser_material: Option<String>,
}

impl JobInput {
    pub fn new(job_type: JobType, measurements: BTreeMap<String, f64>) -> Self {
        Self {
            job_type,
            measurements,
            policy: MeasurementPolicy::default(),
            tread_material: None,
            riser_material: None,
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// One layer in the installed cross-section, top down or bottom up as the
/// job type dictates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub name: String,
    pub depth_in: f64,
    pub material: String,
}

/// Per-step geometry for stair jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDimensions {
    pub rise_per_step_in: f64,
    pub run_per_step_in: f64,
}

/// Aggregate volume and weight for ordering and hauling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeSummary {
    pub total_volume_cubic_yards: f64,
    pub total_weight_tons: f64,
}

/// Results from a job estimate.
///
/// ## JSON Example (abbreviated)
///
/// ```json
/// {
///   "job_type": "paver_installation",
///   "area_sq_ft": 307.5,
///   "total_depth_in": 8.375,
///   "materials": {
///     "CA11": { "quantity": 3.44, "unit": "cubic_yards" },
///     "Fines": { "quantity": 2.25, "unit": "cubic_yards" },
///     "Pavers": { "quantity": 307.5, "unit": "square_feet" }
///   },
///   "layers": [
///     { "name": "CA11 Base", "depth_in": 3.625, "material": "CA11" }
///   ],
///   "calculations": { "total_volume_cubic_yards": 7.95, "total_weight_tons": 10.73 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    /// Job label, e.g. `paver_installation`
    pub job_type: String,

    /// Plan area covered by the job
    pub area_sq_ft: f64,

    /// Total installed depth (or width, for vertical work)
    pub total_depth_in: f64,

    /// Job-specific dimension echo (feet for walls/stairs, inches for steps)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dimensions: BTreeMap<String, f64>,

    /// Per-step geometry (stairs only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_dimensions: Option<StepDimensions>,

    pub materials: BTreeMap<String, MaterialLine>,

    pub layers: Vec<LayerSpec>,

    pub calculations: VolumeSummary,
}

// ============================================================================
// Measurement Extraction
// ============================================================================

/// Field lookup over the measurement map honoring the input policy.
struct Measurements<'a> {
    map: &'a BTreeMap<String, f64>,
    policy: MeasurementPolicy,
}

impl<'a> Measurements<'a> {
    fn new(input: &'a JobInput) -> Self {
        Self {
            map: &input.measurements,
            policy: input.policy,
        }
    }

    /// Single optional field with a default.
    fn optional(&self, key: &str, default: f64) -> f64 {
        self.map.get(key).copied().unwrap_or(default)
    }

    /// Required feet/inches pair (`{name}_ft` + `{name}_in`) in total inches.
    ///
    /// Either half of the pair may be omitted. Under the strict policy a
    /// pair that is entirely absent or totals zero is rejected; lenient
    /// inputs fall through to zero.
    fn required_pair(&self, name: &str) -> EstimateResult<f64> {
        let feet = self.optional(&format!("{}_ft", name), 0.0);
        let inches = self.optional(&format!("{}_in", name), 0.0);
        let total = feet_inches_to_inches(feet, inches);
        if self.policy == MeasurementPolicy::Strict && total <= 0.0 {
            return Err(EstimateError::missing_measurement(format!("{}_ft", name)));
        }
        Ok(total)
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// Calculate quantity takeoffs for a job.
///
/// Pure function over the input: identical inputs produce byte-identical
/// serialized results.
pub fn calculate(input: &JobInput) -> EstimateResult<JobResult> {
    let m = Measurements::new(input);
    match input.job_type {
        JobType::Pavers => paver_job(&m),
        JobType::Walls => wall_job(&m),
        JobType::Stairs => stair_job(&m),
        JobType::Steps => step_job(&m, input),
    }
}

fn paver_job(m: &Measurements) -> EstimateResult<JobResult> {
    let length_in = m.required_pair("length")?;
    let width_in = m.required_pair("width")?;

    let area_sq_ft = length_in * width_in / SQUARE_INCHES_PER_SQUARE_FOOT;

    let paver_height = m.optional("paver_height", PAVER_HEIGHT_DEFAULT_IN);
    let fines_depth = m.optional("fines_depth", FINES_DEPTH_DEFAULT_IN);
    let ca11_depth = m.optional("ca11_depth", CA11_DEPTH_DEFAULT_IN);
    let total_depth = paver_height + fines_depth + ca11_depth;

    let pavers_cf = CubicFeet(area_sq_ft * paver_height / INCHES_PER_FOOT);
    let fines_cf = CubicFeet(area_sq_ft * fines_depth / INCHES_PER_FOOT);
    let ca11_cf = CubicFeet(area_sq_ft * ca11_depth / INCHES_PER_FOOT);
    let total_cf = pavers_cf + fines_cf + ca11_cf;

    let mut materials = BTreeMap::new();
    materials.insert(
        "CA11".to_string(),
        MaterialLine::new(
            round_to(CubicYards::from(ca11_cf).value(), 2),
            QuantityUnit::CubicYards,
        ),
    );
    materials.insert(
        "Fines".to_string(),
        MaterialLine::new(
            round_to(CubicYards::from(fines_cf).value(), 2),
            QuantityUnit::CubicYards,
        ),
    );
    materials.insert(
        "Pavers".to_string(),
        MaterialLine::new(round_to(area_sq_ft, 2), QuantityUnit::SquareFeet),
    );

    let layers = vec![
        LayerSpec {
            name: "CA11 Base".to_string(),
            depth_in: ca11_depth,
            material: "CA11".to_string(),
        },
        LayerSpec {
            name: "Fines".to_string(),
            depth_in: fines_depth,
            material: "Fines".to_string(),
        },
        LayerSpec {
            name: "Pavers".to_string(),
            depth_in: paver_height,
            material: "Pavers".to_string(),
        },
    ];

    Ok(JobResult {
        job_type: JobType::Pavers.label().to_string(),
        area_sq_ft: round_to(area_sq_ft, 2),
        total_depth_in: round_to(total_depth, 2),
        dimensions: BTreeMap::new(),
        step_dimensions: None,
        materials,
        layers,
        calculations: VolumeSummary {
            total_volume_cubic_yards: round_to(CubicYards::from(total_cf).value(), 2),
            total_weight_tons: round_to(
                total_cf.value() * BASE_MATERIAL_DENSITY_PCF / POUNDS_PER_TON,
                2,
            ),
        },
    })
}

fn wall_job(m: &Measurements) -> EstimateResult<JobResult> {
    let length_in = m.required_pair("length")?;
    let height_in = m.required_pair("height")?;
    let width_in = m.required_pair("width")?;

    let volume_cf = CubicFeet(length_in * height_in * width_in / CUBIC_INCHES_PER_CUBIC_FOOT);
    let volume_cy = CubicYards::from(volume_cf);
    let surface_area_sq_ft = length_in * height_in / SQUARE_INCHES_PER_SQUARE_FOOT;

    let blocks_per_sqft = m.optional("blocks_per_sqft", BLOCKS_PER_SQFT_DEFAULT);

    let mut materials = BTreeMap::new();
    materials.insert(
        "Blocks".to_string(),
        MaterialLine::new(
            round_to(surface_area_sq_ft * blocks_per_sqft, 0),
            QuantityUnit::Blocks,
        ),
    );
    materials.insert(
        "Mortar".to_string(),
        MaterialLine::new(
            round_to(volume_cf.value() * MORTAR_VOLUME_RATIO, 2),
            QuantityUnit::CubicFeet,
        ),
    );
    materials.insert(
        "Backfill".to_string(),
        MaterialLine::new(
            round_to(volume_cy.value() * BACKFILL_RATIO, 2),
            QuantityUnit::CubicYards,
        ),
    );

    let mut dimensions = BTreeMap::new();
    dimensions.insert(
        "length_feet".to_string(),
        round_to(length_in / INCHES_PER_FOOT, 2),
    );
    dimensions.insert(
        "height_feet".to_string(),
        round_to(height_in / INCHES_PER_FOOT, 2),
    );
    dimensions.insert(
        "width_feet".to_string(),
        round_to(width_in / INCHES_PER_FOOT, 2),
    );

    let layers = vec![LayerSpec {
        name: "Wall Blocks".to_string(),
        depth_in: width_in,
        material: "Blocks".to_string(),
    }];

    Ok(JobResult {
        job_type: JobType::Walls.label().to_string(),
        area_sq_ft: round_to(surface_area_sq_ft, 2),
        total_depth_in: round_to(width_in, 2),
        dimensions,
        step_dimensions: None,
        materials,
        layers,
        calculations: VolumeSummary {
            total_volume_cubic_yards: round_to(volume_cy.value(), 2),
            total_weight_tons: round_to(volume_cy.value() * WALL_DENSITY_TONS_PER_CUBIC_YARD, 2),
        },
    })
}

fn stair_job(m: &Measurements) -> EstimateResult<JobResult> {
    let total_rise_in = m.required_pair("total_rise")?;
    let total_run_in = m.required_pair("total_run")?;

    // Derive a step count from the standard riser when none is given, and
    // clamp to one step: a shallow rise would otherwise round to zero and
    // divide the per-step geometry by it
    let mut step_count = m.optional("step_count", 0.0).round();
    if step_count < 1.0 {
        step_count = (total_rise_in / STANDARD_STEP_RISE_IN).round();
    }
    if !(step_count >= 1.0) {
        log::warn!("step count {} clamped to 1", step_count);
        step_count = 1.0;
    }

    let rise_per_step = total_rise_in / step_count;
    let run_per_step = total_run_in / step_count;
    let tread_width = m.optional("tread_width", TREAD_WIDTH_DEFAULT_IN);

    let tread_area_sq_ft = run_per_step * tread_width / SQUARE_INCHES_PER_SQUARE_FOOT;
    let riser_area_sq_ft = rise_per_step * tread_width / SQUARE_INCHES_PER_SQUARE_FOOT;
    let total_tread_area = tread_area_sq_ft * step_count;
    let total_riser_area = riser_area_sq_ft * step_count;
    let total_area = total_tread_area + total_riser_area;

    let mut materials = BTreeMap::new();
    materials.insert(
        "Treads".to_string(),
        MaterialLine::new(round_to(total_tread_area, 2), QuantityUnit::SquareFeet),
    );
    materials.insert(
        "Risers".to_string(),
        MaterialLine::new(round_to(total_riser_area, 2), QuantityUnit::SquareFeet),
    );
    materials.insert(
        "Stringers".to_string(),
        MaterialLine::new(2.0, QuantityUnit::Pieces),
    );

    let mut dimensions = BTreeMap::new();
    dimensions.insert(
        "total_rise_feet".to_string(),
        round_to(total_rise_in / INCHES_PER_FOOT, 2),
    );
    dimensions.insert(
        "total_run_feet".to_string(),
        round_to(total_run_in / INCHES_PER_FOOT, 2),
    );
    dimensions.insert("step_count".to_string(), step_count);

    let layers = vec![
        LayerSpec {
            name: "Tread Material".to_string(),
            depth_in: round_to(run_per_step, 2),
            material: "Treads".to_string(),
        },
        LayerSpec {
            name: "Riser Material".to_string(),
            depth_in: round_to(rise_per_step, 2),
            material: "Risers".to_string(),
        },
    ];

    Ok(JobResult {
        job_type: JobType::Stairs.label().to_string(),
        area_sq_ft: round_to(total_area, 2),
        total_depth_in: round_to(tread_width, 2),
        dimensions,
        step_dimensions: Some(StepDimensions {
            rise_per_step_in: round_to(rise_per_step, 2),
            run_per_step_in: round_to(run_per_step, 2),
        }),
        materials,
        layers,
        calculations: stone_slab_summary(total_area),
    })
}

fn step_job(m: &Measurements, input: &JobInput) -> EstimateResult<JobResult> {
    let rise_in = m.required_pair("rise")?;
    let run_in = m.required_pair("run")?;
    let width_in = m.required_pair("width")?;

    let tread_area_sq_ft = run_in * width_in / SQUARE_INCHES_PER_SQUARE_FOOT;
    let riser_area_sq_ft = rise_in * width_in / SQUARE_INCHES_PER_SQUARE_FOOT;

    let tread_material = input.tread_material.clone().unwrap_or_else(|| "Stone".to_string());
    let riser_material = input.riser_material.clone().unwrap_or_else(|| "Stone".to_string());

    let mut materials = BTreeMap::new();
    materials.insert(
        "Tread Material".to_string(),
        MaterialLine::new(round_to(tread_area_sq_ft, 2), QuantityUnit::SquareFeet),
    );
    materials.insert(
        "Riser Material".to_string(),
        MaterialLine::new(round_to(riser_area_sq_ft, 2), QuantityUnit::SquareFeet),
    );

    let mut dimensions = BTreeMap::new();
    dimensions.insert("rise_inches".to_string(), round_to(rise_in, 2));
    dimensions.insert("run_inches".to_string(), round_to(run_in, 2));
    dimensions.insert("width_inches".to_string(), round_to(width_in, 2));

    let layers = vec![
        LayerSpec {
            name: "Tread".to_string(),
            depth_in: run_in,
            material: tread_material,
        },
        LayerSpec {
            name: "Riser".to_string(),
            depth_in: rise_in,
            material: riser_material,
        },
    ];

    Ok(JobResult {
        job_type: JobType::Steps.label().to_string(),
        area_sq_ft: round_to(tread_area_sq_ft + riser_area_sq_ft, 2),
        total_depth_in: round_to(width_in, 2),
        dimensions,
        step_dimensions: None,
        materials,
        layers,
        calculations: stone_slab_summary(tread_area_sq_ft + riser_area_sq_ft),
    })
}

/// Volume and weight of stone tread/riser faces at nominal slab thickness.
fn stone_slab_summary(face_area_sq_ft: f64) -> VolumeSummary {
    let volume_cf = CubicFeet(face_area_sq_ft * TREAD_THICKNESS_FT);
    VolumeSummary {
        total_volume_cubic_yards: round_to(CubicYards::from(volume_cf).value(), 2),
        total_weight_tons: round_to(volume_cf.value() * STONE_DENSITY_PCF / POUNDS_PER_TON, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurements(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_paver_job_default_layers() {
        // 20'6" x 15'0" patio with default layer depths
        let input = JobInput::new(
            JobType::Pavers,
            measurements(&[("length_ft", 20.0), ("length_in", 6.0), ("width_ft", 15.0)]),
        );
        let result = calculate(&input).unwrap();

        assert_eq!(result.job_type, "paver_installation");
        assert_eq!(result.area_sq_ft, 307.5);
        assert_eq!(result.total_depth_in, 8.375);
        assert_eq!(result.materials["CA11"].quantity, 3.44);
        assert_eq!(result.materials["Fines"].quantity, 2.25);
        assert_eq!(result.materials["Pavers"].quantity, 307.5);
        assert_eq!(result.materials["Pavers"].unit, QuantityUnit::SquareFeet);
        assert_eq!(result.calculations.total_volume_cubic_yards, 7.95);
        assert_eq!(result.calculations.total_weight_tons, 10.73);

        // Layers listed bottom up
        let names: Vec<&str> = result.layers.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["CA11 Base", "Fines", "Pavers"]);
    }

    #[test]
    fn test_paver_job_custom_depths() {
        let input = JobInput::new(
            JobType::Pavers,
            measurements(&[
                ("length_ft", 10.0),
                ("width_ft", 10.0),
                ("paver_height", 3.0),
                ("fines_depth", 1.0),
                ("ca11_depth", 4.0),
            ]),
        );
        let result = calculate(&input).unwrap();
        assert_eq!(result.area_sq_ft, 100.0);
        assert_eq!(result.total_depth_in, 8.0);
        // 100 sq ft x 4/12 ft = 33.33 cf = 1.23 cy
        assert_eq!(result.materials["CA11"].quantity, 1.23);
    }

    #[test]
    fn test_wall_job() {
        // 30' x 4' wall, 8" thick
        let input = JobInput::new(
            JobType::Walls,
            measurements(&[("length_ft", 30.0), ("height_ft", 4.0), ("width_in", 8.0)]),
        );
        let result = calculate(&input).unwrap();

        assert_eq!(result.job_type, "wall_construction");
        assert_eq!(result.area_sq_ft, 120.0);
        assert_eq!(result.total_depth_in, 8.0);
        // 120 sq ft x 1.125 blocks
        assert_eq!(result.materials["Blocks"].quantity, 135.0);
        // volume = 360 x 48 x 8 / 1728 = 80 cf; mortar = 8 cf
        assert_eq!(result.materials["Mortar"].quantity, 8.0);
        // 80 cf = 2.96 cy; backfill = 2.37 cy
        assert_eq!(result.materials["Backfill"].quantity, 2.37);
        assert_eq!(result.dimensions["length_feet"], 30.0);
        assert_eq!(result.dimensions["width_feet"], 0.67);
        assert_eq!(result.calculations.total_volume_cubic_yards, 2.96);
        assert_eq!(result.calculations.total_weight_tons, 4.44);
    }

    #[test]
    fn test_wall_job_custom_block_density() {
        let input = JobInput::new(
            JobType::Walls,
            measurements(&[
                ("length_ft", 10.0),
                ("height_ft", 2.0),
                ("width_in", 6.0),
                ("blocks_per_sqft", 2.0),
            ]),
        );
        let result = calculate(&input).unwrap();
        assert_eq!(result.materials["Blocks"].quantity, 40.0);
    }

    #[test]
    fn test_stair_job_derived_step_count() {
        // 3'6" rise at the 7" standard riser derives 6 steps
        let input = JobInput::new(
            JobType::Stairs,
            measurements(&[
                ("total_rise_ft", 3.0),
                ("total_rise_in", 6.0),
                ("total_run_ft", 6.0),
            ]),
        );
        let result = calculate(&input).unwrap();

        assert_eq!(result.job_type, "stair_construction");
        assert_eq!(result.dimensions["step_count"], 6.0);
        let steps = result.step_dimensions.as_ref().unwrap();
        assert_eq!(steps.rise_per_step_in, 7.0);
        assert_eq!(steps.run_per_step_in, 12.0);
        // tread: 12 x 36 / 144 = 3 sq ft per step x 6
        assert_eq!(result.materials["Treads"].quantity, 18.0);
        // riser: 7 x 36 / 144 = 1.75 sq ft per step x 6
        assert_eq!(result.materials["Risers"].quantity, 10.5);
        assert_eq!(result.materials["Stringers"].quantity, 2.0);
        assert_eq!(result.total_depth_in, 36.0);
    }

    #[test]
    fn test_stair_job_explicit_step_count() {
        let input = JobInput::new(
            JobType::Stairs,
            measurements(&[
                ("total_rise_ft", 4.0),
                ("total_run_ft", 8.0),
                ("step_count", 8.0),
            ]),
        );
        let result = calculate(&input).unwrap();
        assert_eq!(result.dimensions["step_count"], 8.0);
        assert_eq!(result.step_dimensions.as_ref().unwrap().rise_per_step_in, 6.0);
    }

    #[test]
    fn test_stair_job_shallow_rise_clamps_step_count() {
        // 2" total rise rounds to zero steps at the standard riser
        let input = JobInput::new(
            JobType::Stairs,
            measurements(&[("total_rise_in", 2.0), ("total_run_ft", 1.0)]),
        );
        let result = calculate(&input).unwrap();
        assert_eq!(result.dimensions["step_count"], 1.0);
        assert_eq!(result.step_dimensions.as_ref().unwrap().rise_per_step_in, 2.0);
    }

    #[test]
    fn test_step_job() {
        let mut input = JobInput::new(
            JobType::Steps,
            measurements(&[("rise_in", 7.0), ("run_ft", 1.0), ("width_ft", 4.0)]),
        );
        input.tread_material = Some("Bluestone".to_string());
        let result = calculate(&input).unwrap();

        assert_eq!(result.job_type, "step_installation");
        // tread: 12 x 48 / 144 = 4; riser: 7 x 48 / 144 = 2.33
        assert_eq!(result.materials["Tread Material"].quantity, 4.0);
        assert_eq!(result.materials["Riser Material"].quantity, 2.33);
        assert_eq!(result.area_sq_ft, 6.33);
        assert_eq!(result.dimensions["width_inches"], 48.0);
        assert_eq!(result.layers[0].material, "Bluestone");
        assert_eq!(result.layers[1].material, "Stone");
    }

    #[test]
    fn test_unsupported_job_type() {
        let err = JobType::from_str("unsupported").unwrap_err();
        assert_eq!(err, EstimateError::unsupported_job_type("unsupported"));
        assert_eq!(err.error_code(), "UNSUPPORTED_JOB_TYPE");
        assert!(JobType::from_str("  Walls ").is_ok());
    }

    #[test]
    fn test_lenient_policy_defaults_to_zero() {
        // No measurements at all: lenient mode produces a zero-area result
        let input = JobInput::new(JobType::Pavers, BTreeMap::new());
        let result = calculate(&input).unwrap();
        assert_eq!(result.area_sq_ft, 0.0);
        assert_eq!(result.materials["Pavers"].quantity, 0.0);
    }

    #[test]
    fn test_strict_policy_rejects_missing_pair() {
        let mut input = JobInput::new(
            JobType::Pavers,
            measurements(&[("length_ft", 20.0)]),
        );
        input.policy = MeasurementPolicy::Strict;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, EstimateError::missing_measurement("width_ft"));
    }

    #[test]
    fn test_strict_policy_accepts_inches_only_pair() {
        // 8" rise with no feet half still satisfies the strict check
        let mut input = JobInput::new(
            JobType::Steps,
            measurements(&[("rise_in", 8.0), ("run_in", 14.0), ("width_ft", 3.0)]),
        );
        input.policy = MeasurementPolicy::Strict;
        assert!(calculate(&input).is_ok());
    }

    #[test]
    fn test_idempotent_results() {
        let input = JobInput::new(
            JobType::Stairs,
            measurements(&[("total_rise_ft", 3.0), ("total_run_ft", 5.0)]),
        );
        let first = serde_json::to_string(&calculate(&input).unwrap()).unwrap();
        let second = serde_json::to_string(&calculate(&input).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serialization_round_trip() {
        let input = JobInput::new(
            JobType::Walls,
            measurements(&[("length_ft", 30.0), ("height_ft", 4.0), ("width_in", 8.0)]),
        );
        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: JobResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);

        // Pavers carry no dimension echo; the key is omitted entirely
        let paver_json = serde_json::to_string(
            &calculate(&JobInput::new(
                JobType::Pavers,
                measurements(&[("length_ft", 10.0), ("width_ft", 10.0)]),
            ))
            .unwrap(),
        )
        .unwrap();
        assert!(!paver_json.contains("\"dimensions\""));
    }
}
