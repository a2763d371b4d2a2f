use crate::core::measure::{calculate_area, calculate_material_quantity, calculate_volume};
use crate::core::pricing::{calculate_gross_amount, calculate_vat, calculate_work_cost};
use crate::core::{Estimate, EstimateRequest};
use crate::utils::error::Result;

/// Runs the full chain for one room: area, optional volume, work cost,
/// material with waste, VAT on the work cost and the gross total.
///
/// Stops at the first invalid input and returns its error unchanged.
pub fn estimate(request: &EstimateRequest) -> Result<Estimate> {
    tracing::debug!(?request, "starting estimate");

    let area = calculate_area(request.length, request.width)?;
    let volume = request
        .height
        .map(|height| calculate_volume(request.length, request.width, height))
        .transpose()?;

    let work_cost = calculate_work_cost(area, request.price_per_unit)?;
    let material_quantity =
        calculate_material_quantity(area, request.usage_per_unit, request.waste_percent)?;

    let vat = calculate_vat(work_cost, request.vat_rate)?;
    let gross = calculate_gross_amount(work_cost, request.vat_rate)?;

    let estimate = Estimate {
        area,
        volume,
        work_cost,
        material_quantity,
        vat,
        gross,
    };
    tracing::info!(area, work_cost, gross, "estimate completed");
    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CalcError;

    fn room() -> EstimateRequest {
        EstimateRequest {
            length: 5.0,
            width: 4.0,
            height: None,
            price_per_unit: 50.0,
            usage_per_unit: 2.5,
            waste_percent: 10.0,
            vat_rate: 23.0,
        }
    }

    #[test]
    fn test_estimate_for_standard_room() {
        let result = estimate(&room()).unwrap();
        assert_eq!(result.area, 20.0);
        assert_eq!(result.volume, None);
        assert_eq!(result.work_cost, 1000.0);
        assert_eq!(result.material_quantity, 55.0);
        assert_eq!(result.vat, 230.0);
        assert_eq!(result.gross, 1230.0);
    }

    #[test]
    fn test_estimate_includes_volume_when_height_given() {
        let request = EstimateRequest {
            height: Some(3.0),
            ..room()
        };
        assert_eq!(estimate(&request).unwrap().volume, Some(60.0));
    }

    #[test]
    fn test_estimate_reports_first_invalid_field() {
        let request = EstimateRequest {
            width: -4.0,
            vat_rate: 150.0,
            ..room()
        };
        match estimate(&request).unwrap_err() {
            CalcError::InvalidArgument { field, .. } => assert_eq!(field, "width"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_estimate_rejects_negative_height() {
        let request = EstimateRequest {
            height: Some(-1.0),
            ..room()
        };
        assert!(estimate(&request).is_err());
    }
}
