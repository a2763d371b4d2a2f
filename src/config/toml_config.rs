use crate::utils::error::{CalcError, Result};
use crate::utils::formatting::CurrencyFormat;
use crate::utils::validation::{validate_non_empty_string, validate_percentage, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_VAT_RATE: f64 = 23.0;
pub const DEFAULT_WASTE_PERCENT: f64 = 10.0;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub currency: CurrencyFormat,
    pub defaults: DefaultsConfig,
}

/// Values used when a caller does not supply a rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub vat_rate: f64,
    pub waste_percent: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            vat_rate: DEFAULT_VAT_RATE,
            waste_percent: DEFAULT_WASTE_PERCENT,
        }
    }
}

impl CalculatorConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay verbatim.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("currency.suffix", &self.currency.suffix)
            .map_err(|e| CalcError::config(e.user_friendly_message()))?;
        validate_percentage("defaults.vat_rate", self.defaults.vat_rate)
            .map_err(|e| CalcError::config(e.user_friendly_message()))?;
        validate_percentage("defaults.waste_percent", self.defaults.waste_percent)
            .map_err(|e| CalcError::config(e.user_friendly_message()))?;
        Ok(())
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
