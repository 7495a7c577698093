pub mod calculator;
pub mod config;
pub mod loader;
pub mod models;

pub use calculator::PriceEstimator;
pub use config::PricingConfig;
pub use loader::{load_pricing, load_pricing_from_file, parse_pricing_json};
pub use models::{
    AddOn, ComplexityLevel, Multiplier, PriceRange, ProjectCategory, Selection, TimelineUrgency,
};
