use crate::error::AppError;
use crate::pricing::config::PricingConfig;
use std::path::Path;
use tracing::{debug, info};

/// Parse a pricing document persisted by the administrative tooling.
///
/// The document is validated as a whole before it is handed to an
/// estimator, so a broken table is rejected at load time instead of
/// surfacing mid-estimate.
pub fn parse_pricing_json(json: &str) -> Result<PricingConfig, AppError> {
    let config: PricingConfig = serde_json::from_str(json)
        .map_err(|e| AppError::ConfigError(format!("Failed to parse pricing JSON: {}", e)))?;

    config.validate()?;

    debug!(
        "Parsed pricing table: {} base prices, {} add-on costs",
        config.base_prices.len(),
        config.add_on_costs.len()
    );
    Ok(config)
}

/// Load pricing configuration from a JSON file
pub fn load_pricing_from_file(path: impl AsRef<Path>) -> Result<PricingConfig, AppError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::ConfigError(format!("Failed to read {}: {}", path.display(), e)))?;

    let config = parse_pricing_json(&content)?;
    info!("Loaded pricing configuration from {}", path.display());
    Ok(config)
}

/// Layered load: a `pricing.*` file in the working directory with
/// `COST_CALC`-prefixed environment overrides on top.
pub fn load_pricing() -> Result<PricingConfig, AppError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("pricing"))
        .add_source(config::Environment::with_prefix("COST_CALC").separator("__"))
        .build()?;

    let config: PricingConfig = settings.try_deserialize()?;
    config.validate()?;

    info!(
        "Loaded pricing configuration ({} base prices, step {})",
        config.base_prices.len(),
        config.rounding_step
    );
    Ok(config)
}
