use crate::error::AppError;
use crate::pricing::models::{
    AddOn, ComplexityLevel, Multiplier, PriceRange, ProjectCategory, TimelineUrgency,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pricing table: base prices per category, multipliers per complexity
/// and timeline, flat costs per add-on.
///
/// The table is edited through separate administrative tooling and
/// persisted externally; within one estimation it is read-only. Money
/// fields are unsigned, so negative prices cannot be represented past
/// deserialization. Multipliers are floats and are checked at lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Estimates are rounded to the nearest multiple of this step
    #[serde(default = "default_rounding_step")]
    pub rounding_step: u64,

    pub base_prices: HashMap<ProjectCategory, PriceRange>,
    pub complexity_multipliers: HashMap<ComplexityLevel, Multiplier>,
    pub timeline_multipliers: HashMap<TimelineUrgency, Multiplier>,

    #[serde(default)]
    pub add_on_costs: HashMap<AddOn, PriceRange>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            rounding_step: default_rounding_step(),
            base_prices: HashMap::from([
                (
                    ProjectCategory::Website,
                    PriceRange { min: 80_000, max: 150_000 },
                ),
                (
                    ProjectCategory::WebApplication,
                    PriceRange { min: 200_000, max: 400_000 },
                ),
                (
                    ProjectCategory::MobileApplication,
                    PriceRange { min: 300_000, max: 600_000 },
                ),
                (
                    ProjectCategory::Chatbot,
                    PriceRange { min: 100_000, max: 200_000 },
                ),
                (
                    ProjectCategory::ECommerce,
                    PriceRange { min: 250_000, max: 500_000 },
                ),
            ]),
            complexity_multipliers: HashMap::from([
                (ComplexityLevel::Simple, Multiplier { min: 0.8, max: 1.0 }),
                (ComplexityLevel::Medium, Multiplier { min: 1.2, max: 1.5 }),
                (ComplexityLevel::Complex, Multiplier { min: 2.0, max: 2.8 }),
            ]),
            timeline_multipliers: HashMap::from([
                (TimelineUrgency::Urgent, Multiplier { min: 1.6, max: 2.0 }),
                (TimelineUrgency::Normal, Multiplier { min: 1.0, max: 1.0 }),
                (TimelineUrgency::Flexible, Multiplier { min: 0.7, max: 0.9 }),
            ]),
            add_on_costs: HashMap::from([
                (AddOn::Content, PriceRange { min: 25_000, max: 50_000 }),
                (AddOn::Seo, PriceRange { min: 15_000, max: 30_000 }),
                (AddOn::Support, PriceRange { min: 20_000, max: 35_000 }),
                (AddOn::Hosting, PriceRange { min: 10_000, max: 20_000 }),
            ]),
        }
    }
}

fn default_currency() -> String {
    "RUB".to_string()
}

fn default_rounding_step() -> u64 {
    10_000
}

impl PricingConfig {
    /// Base price range for a project category. Every category must have
    /// a well-formed entry; a missing or inverted one is a configuration
    /// error, not a caller error.
    pub fn base_range(&self, category: ProjectCategory) -> Result<PriceRange, AppError> {
        let range = self.base_prices.get(&category).ok_or_else(|| {
            AppError::ConfigError(format!(
                "No base price configured for category '{}'",
                category.as_id()
            ))
        })?;

        if !range.is_well_formed() {
            return Err(AppError::ConfigError(format!(
                "Base price for '{}' has min {} greater than max {}",
                category.as_id(),
                range.min,
                range.max
            )));
        }

        Ok(*range)
    }

    pub fn complexity_multiplier(&self, level: ComplexityLevel) -> Result<Multiplier, AppError> {
        let multiplier = self.complexity_multipliers.get(&level).ok_or_else(|| {
            AppError::ConfigError(format!(
                "No complexity multiplier configured for '{}'",
                level.as_id()
            ))
        })?;

        if !multiplier.is_well_formed() {
            return Err(AppError::ConfigError(format!(
                "Complexity multiplier for '{}' is negative or inverted ({} / {})",
                level.as_id(),
                multiplier.min,
                multiplier.max
            )));
        }

        Ok(*multiplier)
    }

    pub fn timeline_multiplier(&self, urgency: TimelineUrgency) -> Result<Multiplier, AppError> {
        let multiplier = self.timeline_multipliers.get(&urgency).ok_or_else(|| {
            AppError::ConfigError(format!(
                "No timeline multiplier configured for '{}'",
                urgency.as_id()
            ))
        })?;

        if !multiplier.is_well_formed() {
            return Err(AppError::ConfigError(format!(
                "Timeline multiplier for '{}' is negative or inverted ({} / {})",
                urgency.as_id(),
                multiplier.min,
                multiplier.max
            )));
        }

        Ok(*multiplier)
    }

    /// Flat cost for an add-on. The catalog may be a superset or subset
    /// of what callers know about, so an absent entry is `None`, never an
    /// error. A present but inverted entry is still a configuration error.
    pub fn add_on_cost(&self, add_on: AddOn) -> Result<Option<PriceRange>, AppError> {
        match self.add_on_costs.get(&add_on) {
            None => Ok(None),
            Some(cost) if !cost.is_well_formed() => Err(AppError::ConfigError(format!(
                "Add-on cost for '{}' has min {} greater than max {}",
                add_on.as_id(),
                cost.min,
                cost.max
            ))),
            Some(cost) => Ok(Some(*cost)),
        }
    }

    /// Whole-table check run when a table is loaded from an external
    /// document. Lookups re-check individual entries, so a table mutated
    /// after validation still cannot produce a silent bad estimate.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.rounding_step == 0 {
            return Err(AppError::ConfigError(
                "rounding_step must be positive".to_string(),
            ));
        }

        for category in ProjectCategory::ALL {
            self.base_range(category)?;
        }
        for level in ComplexityLevel::ALL {
            self.complexity_multiplier(level)?;
        }
        for urgency in TimelineUrgency::ALL {
            self.timeline_multiplier(urgency)?;
        }
        for add_on in AddOn::ALL {
            self.add_on_cost(add_on)?;
        }

        Ok(())
    }
}
