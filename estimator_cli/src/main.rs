//! # Estimator CLI Application
//!
//! Terminal interface for landscape material estimates. Prompts for wall
//! dimensions against the builtin catalog, prints a human-readable
//! breakdown, then the raw JSON for API/LLM use.

use std::io::{self, BufRead, Write};

use estimator_core::calculations::wall::{calculate, WallInput, WallQuantities};
use estimator_core::catalog::{builtin_materials, MaterialCatalog};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    pretty_env_logger::init();

    println!("Hardscape Estimator - Wall Materials Calculator");
    println!("===============================================");
    println!();

    let catalog = builtin_materials();

    println!("Available materials:");
    for material in catalog.list_materials() {
        println!(
            "  {:24} {:10} {:>8.2} {}",
            material.id,
            material.category.display_name(),
            material.price_per_unit,
            material.dimensions_label()
        );
    }
    println!();

    let material_id = prompt_string(
        "Enter material id [versa_lok_standard]: ",
        "versa_lok_standard",
    );
    let wall_length_ft = prompt_f64("Enter wall length (ft) [20.0]: ", 20.0);
    let wall_height_ft = prompt_f64("Enter wall height (ft) [4.0]: ", 4.0);

    let input = WallInput {
        wall_length_ft,
        wall_height_ft,
        material_id,
        include_base: true,
        include_cap: true,
    };

    println!();
    match calculate(&input, &catalog) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  WALL ESTIMATE");
            println!("═══════════════════════════════════════");
            println!();
            println!("Wall:");
            println!(
                "  {:.1} ft long x {:.1} ft tall",
                result.wall_specifications.length_feet, result.wall_specifications.height_feet
            );
            println!(
                "  Material: {} ({})",
                result.primary_material.name, result.primary_material.dimensions
            );
            println!();
            match &result.calculations {
                WallQuantities::Coursed {
                    units_per_course,
                    courses,
                    total_units,
                } => {
                    println!(
                        "Coursing: {} per course x {} courses = {} units",
                        units_per_course, courses, total_units
                    );
                }
                WallQuantities::Coverage {
                    wall_area_sq_ft,
                    stones_needed,
                } => {
                    println!(
                        "Coverage: {:.1} sq ft face, {} stones",
                        wall_area_sq_ft, stones_needed
                    );
                }
                WallQuantities::Baskets {
                    baskets_length,
                    baskets_height,
                    total_baskets,
                    stone_cubic_yards,
                } => {
                    println!(
                        "Baskets: {} long x {} high = {} baskets, {:.1} cy stone fill",
                        baskets_length, baskets_height, total_baskets, stone_cubic_yards
                    );
                }
            }
            println!();
            println!("Materials:");
            for (name, line) in &result.materials_needed {
                println!("  {:32} {:>10.2} {}", name, line.quantity, line.unit);
            }
            println!();
            println!("Costs:");
            for (name, cost) in &result.cost_breakdown {
                println!("  {:32} ${:>10.2}", name, cost);
            }
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  TOTAL: ${:.2}  ({} install hours)",
                result.total_estimated_cost, result.estimated_installation_hours
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
