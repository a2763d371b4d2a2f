use crate::config::{CalculatorConfig, Command};
use crate::core::estimate::estimate;
use crate::core::measure::{calculate_area, calculate_material_quantity, calculate_volume};
use crate::core::pricing::{calculate_gross_amount, calculate_vat, calculate_work_cost};
use crate::core::EstimateRequest;
use crate::utils::error::Result;
use crate::utils::formatting::format_decimal;
use crate::utils::validation::{is_valid_email, is_valid_password};

/// Executes one CLI command and returns the text to print.
pub fn execute(command: &Command, config: &CalculatorConfig) -> Result<String> {
    let money = |amount: f64| config.currency.format(amount);
    let number = |value: f64| format_decimal(value, config.currency.decimal_separator);

    let output = match command {
        Command::Area { length, width } => {
            format!("Area: {} m²", number(calculate_area(*length, *width)?))
        }
        Command::WorkCost { area, price } => {
            format!("Work cost: {}", money(calculate_work_cost(*area, *price)?))
        }
        Command::Material { area, usage, waste } => {
            let waste = waste.unwrap_or(config.defaults.waste_percent);
            let quantity = calculate_material_quantity(*area, *usage, waste)?;
            format!("Material quantity: {} (waste {}%)", number(quantity), number(waste))
        }
        Command::Volume {
            length,
            width,
            height,
        } => format!(
            "Volume: {} m³",
            number(calculate_volume(*length, *width, *height)?)
        ),
        Command::Vat { amount, rate } => {
            let rate = rate.unwrap_or(config.defaults.vat_rate);
            format!("VAT ({}%): {}", number(rate), money(calculate_vat(*amount, rate)?))
        }
        Command::Gross { net, rate } => {
            let rate = rate.unwrap_or(config.defaults.vat_rate);
            format!(
                "Gross ({}% VAT): {}",
                number(rate),
                money(calculate_gross_amount(*net, rate)?)
            )
        }
        Command::Estimate {
            length,
            width,
            height,
            price,
            usage,
            waste,
            vat_rate,
            json,
        } => {
            let request = EstimateRequest {
                length: *length,
                width: *width,
                height: *height,
                price_per_unit: *price,
                usage_per_unit: *usage,
                waste_percent: waste.unwrap_or(config.defaults.waste_percent),
                vat_rate: vat_rate.unwrap_or(config.defaults.vat_rate),
            };
            let result = estimate(&request)?;

            if *json {
                serde_json::to_string_pretty(&result)?
            } else {
                let mut lines = vec![format!("Area: {} m²", number(result.area))];
                if let Some(volume) = result.volume {
                    lines.push(format!("Volume: {} m³", number(volume)));
                }
                lines.push(format!("Work cost: {}", money(result.work_cost)));
                lines.push(format!(
                    "Material quantity: {}",
                    number(result.material_quantity)
                ));
                lines.push(format!("VAT ({}%): {}", number(request.vat_rate), money(result.vat)));
                lines.push(format!("Gross: {}", money(result.gross)));
                lines.join("\n")
            }
        }
        Command::CheckEmail { email } => {
            if is_valid_email(Some(email.as_str())) {
                format!("✅ '{}' is a valid email address", email)
            } else {
                format!("❌ '{}' is not a valid email address", email)
            }
        }
        Command::CheckPassword { password } => {
            if is_valid_password(Some(password.as_str())) {
                "✅ Password is long enough".to_string()
            } else {
                "❌ Password must have at least 6 characters".to_string()
            }
        }
        Command::Format { amount } => money(*amount),
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::formatting::DecimalSeparator;

    fn run(command: Command) -> Result<String> {
        execute(&command, &CalculatorConfig::default())
    }

    #[test]
    fn test_area_output() {
        let out = run(Command::Area {
            length: 5.5,
            width: 4.3,
        })
        .unwrap();
        assert_eq!(out, "Area: 23.65 m²");
    }

    #[test]
    fn test_vat_uses_configured_default_rate() {
        let out = run(Command::Vat {
            amount: 1000.0,
            rate: None,
        })
        .unwrap();
        assert_eq!(out, "VAT (23%): 230 PLN");
    }

    #[test]
    fn test_material_uses_configured_default_waste() {
        let out = run(Command::Material {
            area: 20.0,
            usage: 2.5,
            waste: None,
        })
        .unwrap();
        assert_eq!(out, "Material quantity: 55 (waste 10%)");
    }

    #[test]
    fn test_invalid_input_propagates() {
        let err = run(Command::Gross {
            net: 1000.0,
            rate: Some(150.0),
        })
        .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_estimate_json_output() {
        let out = run(Command::Estimate {
            length: 5.0,
            width: 4.0,
            height: Some(3.0),
            price: 50.0,
            usage: 2.5,
            waste: None,
            vat_rate: None,
            json: true,
        })
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["area"], 20.0);
        assert_eq!(value["volume"], 60.0);
        assert_eq!(value["gross"], 1230.0);
    }

    #[test]
    fn test_estimate_text_output_with_comma() {
        let mut config = CalculatorConfig::default();
        config.currency.decimal_separator = DecimalSeparator::Comma;

        let command = Command::Estimate {
            length: 2.5,
            width: 2.0,
            height: None,
            price: 10.1,
            usage: 1.0,
            waste: Some(0.0),
            vat_rate: Some(0.0),
            json: false,
        };
        let out = execute(&command, &config).unwrap();
        assert!(out.contains("Area: 5 m²"));
        assert!(out.contains("Work cost: 50,5 PLN"));
        assert!(out.contains("Gross: 50,5 PLN"));
        assert!(!out.contains("Volume"));
    }

    #[test]
    fn test_validation_commands() {
        let ok = run(Command::CheckEmail {
            email: "user@example.com".to_string(),
        })
        .unwrap();
        assert!(ok.starts_with("✅"));

        let bad = run(Command::CheckPassword {
            password: "pass".to_string(),
        })
        .unwrap();
        assert!(bad.starts_with("❌"));
    }

    #[test]
    fn test_format_command() {
        let out = run(Command::Format { amount: 1000.0 }).unwrap();
        assert_eq!(out, "1000 PLN");
    }
}
