#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::CalculatorConfig;

pub use crate::core::estimate::estimate;
pub use crate::core::measure::{calculate_area, calculate_material_quantity, calculate_volume};
pub use crate::core::pricing::{calculate_gross_amount, calculate_vat, calculate_work_cost};
pub use domain::model::{Estimate, EstimateRequest};
pub use domain::ports::{AppEnvironment, BuildEnvironment};
pub use utils::error::{CalcError, Result};
pub use utils::formatting::{format_currency, CurrencyFormat, DecimalSeparator};
pub use utils::validation::{is_valid_email, is_valid_password};
