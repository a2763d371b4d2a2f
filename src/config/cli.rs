use crate::config::CalculatorConfig;
use crate::utils::formatting::DecimalSeparator;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "budcalc")]
#[command(about = "Construction estimate calculator", version)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Override the currency suffix
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Use a comma as the decimal separator
    #[arg(long, global = true)]
    pub decimal_comma: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Floor area of a rectangle (m²)
    #[command(allow_negative_numbers = true)]
    Area {
        #[arg(long)]
        length: f64,
        #[arg(long)]
        width: f64,
    },

    /// Cost of work over an area
    #[command(allow_negative_numbers = true)]
    WorkCost {
        #[arg(long)]
        area: f64,
        /// Price per m²
        #[arg(long)]
        price: f64,
    },

    /// Material quantity including a waste margin
    #[command(allow_negative_numbers = true)]
    Material {
        #[arg(long)]
        area: f64,
        /// Usage per m²
        #[arg(long)]
        usage: f64,
        /// Waste percentage, defaults to the configured value
        #[arg(long)]
        waste: Option<f64>,
    },

    /// Room volume (m³)
    #[command(allow_negative_numbers = true)]
    Volume {
        #[arg(long)]
        length: f64,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: f64,
    },

    /// VAT due on a net amount
    #[command(allow_negative_numbers = true)]
    Vat {
        #[arg(long)]
        amount: f64,
        /// VAT rate in percent, defaults to the configured value
        #[arg(long)]
        rate: Option<f64>,
    },

    /// Net amount plus VAT
    #[command(allow_negative_numbers = true)]
    Gross {
        #[arg(long)]
        net: f64,
        #[arg(long)]
        rate: Option<f64>,
    },

    /// Full estimate for one room
    #[command(allow_negative_numbers = true)]
    Estimate {
        #[arg(long)]
        length: f64,
        #[arg(long)]
        width: f64,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        usage: f64,
        #[arg(long)]
        waste: Option<f64>,
        #[arg(long)]
        vat_rate: Option<f64>,
        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check an email address
    CheckEmail { email: String },

    /// Check password length
    CheckPassword { password: String },

    /// Render an amount as currency
    #[command(allow_negative_numbers = true)]
    Format { amount: f64 },
}

impl CliConfig {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, mut config: CalculatorConfig) -> CalculatorConfig {
        if let Some(currency) = &self.currency {
            config.currency.suffix = currency.clone();
        }
        if self.decimal_comma {
            config.currency.decimal_separator = DecimalSeparator::Comma;
        }
        config
    }
}
