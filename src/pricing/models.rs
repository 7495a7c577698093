use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Kind of project being estimated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    Website,
    WebApplication,
    MobileApplication,
    Chatbot,
    ECommerce,
}

impl ProjectCategory {
    pub const ALL: [Self; 5] = [
        Self::Website,
        Self::WebApplication,
        Self::MobileApplication,
        Self::Chatbot,
        Self::ECommerce,
    ];

    pub fn as_id(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::WebApplication => "web-application",
            Self::MobileApplication => "mobile-application",
            Self::Chatbot => "chatbot",
            Self::ECommerce => "e-commerce",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_id() == id)
    }
}

/// How much custom logic and design the project needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Simple,
    Medium,
    Complex,
}

impl ComplexityLevel {
    pub const ALL: [Self; 3] = [Self::Simple, Self::Medium, Self::Complex];

    pub fn as_id(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_id() == id)
    }
}

/// Launch timeline chosen by the visitor. Urgent inflates the price,
/// flexible discounts it, normal leaves it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineUrgency {
    Urgent,
    Normal,
    Flexible,
}

impl TimelineUrgency {
    pub const ALL: [Self; 3] = [Self::Urgent, Self::Normal, Self::Flexible];

    pub fn as_id(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Normal => "normal",
            Self::Flexible => "flexible",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_id() == id)
    }
}

/// Optional extra service with a flat additive cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOn {
    /// Content authoring and placement
    Content,
    /// Basic search-engine setup
    Seo,
    /// Post-launch support
    Support,
    /// Cloud hosting setup
    Hosting,
}

impl AddOn {
    pub const ALL: [Self; 4] = [Self::Content, Self::Seo, Self::Support, Self::Hosting];

    pub fn as_id(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Seo => "seo",
            Self::Support => "support",
            Self::Hosting => "hosting",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_id() == id)
    }
}

/// Price interval in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn is_well_formed(&self) -> bool {
        self.min <= self.max
    }
}

/// Multiplier pair applied to a base price range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multiplier {
    pub min: f64,
    pub max: f64,
}

impl Multiplier {
    /// Both factors non-negative and not inverted. NaN fails every
    /// comparison and is rejected here as well.
    pub fn is_well_formed(&self) -> bool {
        self.min >= 0.0 && self.max >= 0.0 && self.min <= self.max
    }
}

/// The wizard's accumulated answers. A selection is complete once
/// category, complexity and timeline are all chosen; add-ons may stay
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub category: Option<ProjectCategory>,
    #[serde(default)]
    pub complexity: Option<ComplexityLevel>,
    #[serde(default)]
    pub timeline: Option<TimelineUrgency>,
    #[serde(default, deserialize_with = "lenient_add_ons")]
    pub add_ons: BTreeSet<AddOn>,
}

impl Selection {
    pub fn is_complete(&self) -> bool {
        self.category.is_some() && self.complexity.is_some() && self.timeline.is_some()
    }
}

/// Deserialize an add-on list, dropping identifiers we don't recognize.
/// The add-on catalog evolves independently of clients, so a stale
/// identifier is not an error.
fn lenient_add_ons<'de, D>(deserializer: D) -> Result<BTreeSet<AddOn>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    let mut add_ons = BTreeSet::new();
    for id in raw {
        match AddOn::from_id(&id) {
            Some(add_on) => {
                add_ons.insert(add_on);
            }
            None => debug!("Ignoring unknown add-on identifier: {}", id),
        }
    }
    Ok(add_ons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id_round_trip() {
        for category in ProjectCategory::ALL {
            assert_eq!(ProjectCategory::from_id(category.as_id()), Some(category));
        }
        assert_eq!(ProjectCategory::from_id("landing-page"), None);
    }

    #[test]
    fn test_category_serde_ids() {
        let json = serde_json::to_string(&ProjectCategory::ECommerce).unwrap();
        assert_eq!(json, "\"e-commerce\"");

        let category: ProjectCategory = serde_json::from_str("\"web-application\"").unwrap();
        assert_eq!(category, ProjectCategory::WebApplication);
    }

    #[test]
    fn test_unrecognized_category_rejected_at_boundary() {
        let result = serde_json::from_str::<ProjectCategory>("\"blockchain\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_selection_completeness() {
        let mut selection = Selection::default();
        assert!(!selection.is_complete());

        selection.category = Some(ProjectCategory::Website);
        selection.complexity = Some(ComplexityLevel::Simple);
        assert!(!selection.is_complete());

        selection.timeline = Some(TimelineUrgency::Normal);
        assert!(selection.is_complete());
    }

    #[test]
    fn test_selection_deserializes_with_defaults() {
        let selection: Selection = serde_json::from_str("{}").unwrap();
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn test_unknown_add_on_ids_are_dropped() {
        let selection: Selection = serde_json::from_str(
            r#"{
                "category": "website",
                "complexity": "simple",
                "timeline": "normal",
                "add_ons": ["seo", "blockchain-audit", "hosting"]
            }"#,
        )
        .unwrap();

        assert_eq!(
            selection.add_ons,
            BTreeSet::from([AddOn::Seo, AddOn::Hosting])
        );
    }

    #[test]
    fn test_duplicate_add_ons_collapse() {
        let selection: Selection = serde_json::from_str(
            r#"{"add_ons": ["seo", "seo", "content"]}"#,
        )
        .unwrap();
        assert_eq!(selection.add_ons.len(), 2);
    }

    #[test]
    fn test_multiplier_well_formedness() {
        assert!(Multiplier { min: 0.8, max: 1.0 }.is_well_formed());
        assert!(Multiplier { min: 1.0, max: 1.0 }.is_well_formed());
        assert!(!Multiplier { min: 1.5, max: 1.2 }.is_well_formed());
        assert!(!Multiplier { min: -0.5, max: 1.0 }.is_well_formed());
        assert!(!Multiplier { min: f64::NAN, max: 1.0 }.is_well_formed());
    }
}
