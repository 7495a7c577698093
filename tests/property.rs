use cost_calculator::pricing::{
    AddOn, ComplexityLevel, PriceEstimator, PricingConfig, ProjectCategory, Selection,
    TimelineUrgency,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn category_strategy() -> impl Strategy<Value = ProjectCategory> {
    proptest::sample::select(ProjectCategory::ALL.to_vec())
}

fn complexity_strategy() -> impl Strategy<Value = ComplexityLevel> {
    proptest::sample::select(ComplexityLevel::ALL.to_vec())
}

fn timeline_strategy() -> impl Strategy<Value = TimelineUrgency> {
    proptest::sample::select(TimelineUrgency::ALL.to_vec())
}

fn add_ons_strategy() -> impl Strategy<Value = BTreeSet<AddOn>> {
    proptest::sample::subsequence(AddOn::ALL.to_vec(), 0..=AddOn::ALL.len())
        .prop_map(|subset| subset.into_iter().collect())
}

fn selection_strategy() -> impl Strategy<Value = Selection> {
    (
        category_strategy(),
        complexity_strategy(),
        timeline_strategy(),
        add_ons_strategy(),
    )
        .prop_map(|(category, complexity, timeline, add_ons)| Selection {
            category: Some(category),
            complexity: Some(complexity),
            timeline: Some(timeline),
            add_ons,
        })
}

proptest! {
    #[test]
    fn estimate_never_inverts(selection in selection_strategy()) {
        let estimator = PriceEstimator::new(PricingConfig::default());
        let range = estimator.estimate(&selection).unwrap();
        prop_assert!(range.min <= range.max);
    }

    #[test]
    fn estimate_is_deterministic(selection in selection_strategy()) {
        let estimator = PriceEstimator::new(PricingConfig::default());
        let first = estimator.estimate(&selection).unwrap();
        let second = estimator.estimate(&selection).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn complexity_ordering_holds(
        category in category_strategy(),
        timeline in timeline_strategy(),
        add_ons in add_ons_strategy(),
    ) {
        let estimator = PriceEstimator::new(PricingConfig::default());

        let estimate_for = |complexity| {
            estimator.estimate(&Selection {
                category: Some(category),
                complexity: Some(complexity),
                timeline: Some(timeline),
                add_ons: add_ons.clone(),
            }).unwrap()
        };

        let simple = estimate_for(ComplexityLevel::Simple);
        let medium = estimate_for(ComplexityLevel::Medium);
        let complex = estimate_for(ComplexityLevel::Complex);

        prop_assert!(simple.min <= medium.min && medium.min <= complex.min);
        prop_assert!(simple.max <= medium.max && medium.max <= complex.max);
    }

    #[test]
    fn urgency_ordering_holds(
        category in category_strategy(),
        complexity in complexity_strategy(),
        add_ons in add_ons_strategy(),
    ) {
        let estimator = PriceEstimator::new(PricingConfig::default());

        let estimate_for = |timeline| {
            estimator.estimate(&Selection {
                category: Some(category),
                complexity: Some(complexity),
                timeline: Some(timeline),
                add_ons: add_ons.clone(),
            }).unwrap()
        };

        let flexible = estimate_for(TimelineUrgency::Flexible);
        let normal = estimate_for(TimelineUrgency::Normal);
        let urgent = estimate_for(TimelineUrgency::Urgent);

        prop_assert!(flexible.min <= normal.min && normal.min <= urgent.min);
        prop_assert!(flexible.max <= normal.max && normal.max <= urgent.max);
    }

    #[test]
    fn add_on_is_additive_before_rounding(
        category in category_strategy(),
        complexity in complexity_strategy(),
        timeline in timeline_strategy(),
        add_ons in add_ons_strategy(),
        extra in proptest::sample::select(AddOn::ALL.to_vec()),
    ) {
        prop_assume!(!add_ons.contains(&extra));

        let mut config = PricingConfig::default();
        config.rounding_step = 1;
        let cost = config.add_on_cost(extra).unwrap().unwrap();
        let estimator = PriceEstimator::new(config);

        let without = estimator.estimate(&Selection {
            category: Some(category),
            complexity: Some(complexity),
            timeline: Some(timeline),
            add_ons: add_ons.clone(),
        }).unwrap();

        let mut widened = add_ons.clone();
        widened.insert(extra);
        let with = estimator.estimate(&Selection {
            category: Some(category),
            complexity: Some(complexity),
            timeline: Some(timeline),
            add_ons: widened,
        }).unwrap();

        prop_assert_eq!(with.min, without.min + cost.min);
        prop_assert_eq!(with.max, without.max + cost.max);
    }
}
