use crate::config::CalculatorConfig;
use crate::utils::formatting::CurrencyFormat;

/// Queryable handle to the host application environment.
///
/// Front ends hand one of these to the display layer; the calculators never
/// depend on it.
pub trait AppEnvironment: Send + Sync {
    fn package_name(&self) -> &str;
    fn version_name(&self) -> &str;
    fn version_code(&self) -> u32;
    fn currency_format(&self) -> &CurrencyFormat;
}

/// Environment backed by this crate's build metadata.
#[derive(Debug, Clone)]
pub struct BuildEnvironment {
    config: CalculatorConfig,
}

impl BuildEnvironment {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl Default for BuildEnvironment {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl AppEnvironment for BuildEnvironment {
    fn package_name(&self) -> &str {
        env!("CARGO_PKG_NAME")
    }

    fn version_name(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    // major * 10000 + minor * 100 + patch, never zero
    fn version_code(&self) -> u32 {
        let parse = |s: &str| s.parse::<u32>().unwrap_or(0);
        let code = parse(env!("CARGO_PKG_VERSION_MAJOR")) * 10_000
            + parse(env!("CARGO_PKG_VERSION_MINOR")) * 100
            + parse(env!("CARGO_PKG_VERSION_PATCH"));
        code.max(1)
    }

    fn currency_format(&self) -> &CurrencyFormat {
        &self.config.currency
    }
}
