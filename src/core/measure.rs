//! Geometry and material quantities. Inputs are meters, outputs are rounded
//! to two decimals.

use crate::utils::error::Result;
use crate::utils::formatting::round_to_cents;
use crate::utils::validation::{validate_non_negative, validate_percentage, validate_result};

/// Floor area of a rectangle in m².
pub fn calculate_area(length: f64, width: f64) -> Result<f64> {
    validate_non_negative("length", length)?;
    validate_non_negative("width", width)?;

    let area = round_to_cents(validate_result("area", length * width)?);
    tracing::debug!(length, width, area, "calculated area");
    Ok(area)
}

/// Room volume in m³.
pub fn calculate_volume(length: f64, width: f64, height: f64) -> Result<f64> {
    validate_non_negative("length", length)?;
    validate_non_negative("width", width)?;
    validate_non_negative("height", height)?;

    let volume = round_to_cents(validate_result("volume", length * width * height)?);
    tracing::debug!(length, width, height, volume, "calculated volume");
    Ok(volume)
}

/// Material needed to cover `area`, including a waste margin.
///
/// `waste_percent` must lie in [0, 100]; 10 means ten percent extra on top
/// of `area * usage_per_unit`.
pub fn calculate_material_quantity(
    area: f64,
    usage_per_unit: f64,
    waste_percent: f64,
) -> Result<f64> {
    validate_non_negative("area", area)?;
    validate_non_negative("usage_per_unit", usage_per_unit)?;
    validate_percentage("waste_percent", waste_percent)?;

    let base_quantity = area * usage_per_unit;
    let waste = base_quantity * (waste_percent / 100.0);
    let quantity = round_to_cents(validate_result("material_quantity", base_quantity + waste)?);
    tracing::debug!(
        area,
        usage_per_unit,
        waste_percent,
        quantity,
        "calculated material quantity"
    );
    Ok(quantity)
}
