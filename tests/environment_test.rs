use budcalc::{
    calculate_area, calculate_work_cost, estimate, AppEnvironment, BuildEnvironment,
    CalculatorConfig, CurrencyFormat, DecimalSeparator, EstimateRequest,
};

fn render_with(env: &dyn AppEnvironment, amount: f64) -> String {
    env.currency_format().format(amount)
}

#[test]
fn environment_reports_package_name() {
    let env = BuildEnvironment::default();
    assert_eq!(env.package_name(), "budcalc");
}

#[test]
fn environment_has_version_info() {
    let env = BuildEnvironment::default();
    assert!(!env.version_name().is_empty());
    assert!(env.version_code() > 0);
}

#[test]
fn environment_is_usable_as_trait_object() {
    let config = CalculatorConfig {
        currency: CurrencyFormat::new("EUR", DecimalSeparator::Comma),
        ..CalculatorConfig::default()
    };
    let env = BuildEnvironment::new(config);

    assert_eq!(render_with(&env, 1234.56), "1234,56 EUR");
    assert_eq!(env.config().currency.suffix, "EUR");
}

#[test]
fn calculator_results_render_through_environment() {
    let env = BuildEnvironment::default();

    let area = calculate_area(5.0, 4.0).unwrap();
    let cost = calculate_work_cost(area, 50.0).unwrap();

    assert_eq!(render_with(&env, cost), "1000 PLN");
}

#[test]
fn estimate_serializes_for_display() {
    let request = EstimateRequest {
        length: 5.0,
        width: 4.0,
        height: None,
        price_per_unit: 50.0,
        usage_per_unit: 2.5,
        waste_percent: 10.0,
        vat_rate: 23.0,
    };

    let result = estimate(&request).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["material_quantity"], 55.0);
    assert_eq!(json["vat"], 230.0);
    assert!(json.get("volume").is_none());
}
