//! Labour cost and VAT. Amounts are rounded to the cent.

use crate::utils::error::Result;
use crate::utils::formatting::round_to_cents;
use crate::utils::validation::{validate_non_negative, validate_percentage, validate_result};

/// Cost of work over `area` at `price_per_unit` per m².
pub fn calculate_work_cost(area: f64, price_per_unit: f64) -> Result<f64> {
    validate_non_negative("area", area)?;
    validate_non_negative("price_per_unit", price_per_unit)?;

    let cost = round_to_cents(validate_result("work_cost", area * price_per_unit)?);
    tracing::debug!(area, price_per_unit, cost, "calculated work cost");
    Ok(cost)
}

/// VAT due on `amount`. `vat_rate` is a percentage, e.g. 23 for 23%.
pub fn calculate_vat(amount: f64, vat_rate: f64) -> Result<f64> {
    validate_non_negative("amount", amount)?;
    validate_percentage("vat_rate", vat_rate)?;

    let vat = round_to_cents(amount * (vat_rate / 100.0));
    tracing::debug!(amount, vat_rate, vat, "calculated VAT");
    Ok(vat)
}

/// Net amount plus VAT.
pub fn calculate_gross_amount(net_amount: f64, vat_rate: f64) -> Result<f64> {
    let vat = calculate_vat(net_amount, vat_rate)?;
    Ok(round_to_cents(validate_result("gross", net_amount + vat)?))
}
