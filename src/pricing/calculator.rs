use crate::error::AppError;
use crate::pricing::config::PricingConfig;
use crate::pricing::models::{PriceRange, Selection};

/// Calculator for estimating project cost from a wizard selection.
///
/// The computation is pure: the same selection against the same
/// configuration always yields the same range, with no clock, randomness
/// or hidden state involved. Configuration problems surface as
/// `ConfigError`, incomplete selections as `InvalidSelection`.
pub struct PriceEstimator {
    config: PricingConfig,
}

impl PriceEstimator {
    /// Create an estimator over a pricing table snapshot
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Estimate the cost interval for a complete selection.
    ///
    /// Both multipliers are applied to the base range before any add-on
    /// cost is added; add-ons are flat and never multiplied. `min` and
    /// `max` are then rounded independently, half-up, to the configured
    /// step.
    pub fn estimate(&self, selection: &Selection) -> Result<PriceRange, AppError> {
        let category = selection.category.ok_or_else(|| {
            AppError::InvalidSelection("project category is not chosen".to_string())
        })?;
        let complexity = selection.complexity.ok_or_else(|| {
            AppError::InvalidSelection("complexity level is not chosen".to_string())
        })?;
        let timeline = selection.timeline.ok_or_else(|| {
            AppError::InvalidSelection("timeline is not chosen".to_string())
        })?;

        let base = self.config.base_range(category)?;
        let complexity_mult = self.config.complexity_multiplier(complexity)?;
        let timeline_mult = self.config.timeline_multiplier(timeline)?;

        let mut min = base.min as f64 * complexity_mult.min * timeline_mult.min;
        let mut max = base.max as f64 * complexity_mult.max * timeline_mult.max;

        // Add-ons without a configured cost are skipped: the catalog may
        // lag behind or run ahead of what a caller knows about.
        for add_on in &selection.add_ons {
            if let Some(cost) = self.config.add_on_cost(*add_on)? {
                min += cost.min as f64;
                max += cost.max as f64;
            }
        }

        // Can only happen with an inconsistent multiplier table. Never
        // swap silently: the operator has to fix the table.
        if min > max {
            return Err(AppError::ConfigError(format!(
                "Estimated minimum {} exceeds maximum {}; check the multiplier table",
                min, max
            )));
        }

        if self.config.rounding_step == 0 {
            return Err(AppError::ConfigError(
                "rounding_step must be positive".to_string(),
            ));
        }

        Ok(PriceRange {
            min: round_to_step(min, self.config.rounding_step),
            max: round_to_step(max, self.config.rounding_step),
        })
    }
}

/// Round half-up (half away from zero) to the nearest multiple of `step`.
/// Inputs are non-negative by the time this is called.
fn round_to_step(value: f64, step: u64) -> u64 {
    let step = step as f64;
    ((value / step).round() * step) as u64
}
