//! Property-based tests for Wayfarer
//!
//! Uses proptest for testing invariants and edge cases:
//! - Enum string round-trips (to_string -> parse -> to_string)
//! - Resolver determinism over arbitrary complete choice sets
//! - Session completion and reset invariants for arbitrary answers

use proptest::prelude::*;

use wayfarer::collector::{ChoiceCollector, ChoiceSet};
use wayfarer::logic::resolver::resolve;
use wayfarer::rules::RuleTable;
use wayfarer::types::{ActivityPreference, Answer, BudgetLevel, TerrainPreference};

// =============================================================================
// Strategies
// =============================================================================

fn terrain_strategy() -> impl Strategy<Value = TerrainPreference> {
    prop_oneof![
        Just(TerrainPreference::Mountains),
        Just(TerrainPreference::Beach),
    ]
}

fn activity_strategy() -> impl Strategy<Value = ActivityPreference> {
    prop_oneof![
        Just(ActivityPreference::Adventure),
        Just(ActivityPreference::Relaxation),
    ]
}

fn budget_strategy() -> impl Strategy<Value = BudgetLevel> {
    prop_oneof![
        Just(BudgetLevel::Low),
        Just(BudgetLevel::Medium),
        Just(BudgetLevel::High),
    ]
}

// =============================================================================
// Enum round-trips
// =============================================================================

proptest! {
    /// TerrainPreference: to_string -> parse round-trip is identity
    #[test]
    fn terrain_roundtrip(terrain in terrain_strategy()) {
        let s = terrain.to_string();
        let parsed: TerrainPreference = s.parse().expect("Should parse");
        prop_assert_eq!(terrain, parsed);
    }

    /// ActivityPreference: to_string -> parse round-trip is identity
    #[test]
    fn activity_roundtrip(activity in activity_strategy()) {
        let s = activity.to_string();
        let parsed: ActivityPreference = s.parse().expect("Should parse");
        prop_assert_eq!(activity, parsed);
    }

    /// BudgetLevel: to_string -> parse round-trip is identity
    #[test]
    fn budget_roundtrip(budget in budget_strategy()) {
        let s = budget.to_string();
        let parsed: BudgetLevel = s.parse().expect("Should parse");
        prop_assert_eq!(budget, parsed);
    }
}

// =============================================================================
// Resolver invariants
// =============================================================================

proptest! {
    /// resolve: equal complete choice sets always yield equal, non-empty text
    #[test]
    fn resolver_deterministic(
        terrain in terrain_strategy(),
        activity in activity_strategy(),
        budget in budget_strategy(),
    ) {
        let table = RuleTable::default();
        let choices = ChoiceSet::new(terrain, activity, budget);

        let first = resolve(&choices, &table).expect("complete set resolves");
        let second = resolve(&choices, &table).expect("complete set resolves");

        prop_assert!(!first.is_empty());
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Session invariants
// =============================================================================

proptest! {
    /// Recording three answers always transitions the collector to Complete,
    /// and the step pointer never leaves 1..=3 along the way.
    #[test]
    fn three_answers_always_complete(
        terrain in terrain_strategy(),
        activity in activity_strategy(),
        budget in budget_strategy(),
    ) {
        let mut collector = ChoiceCollector::new();

        for answer in [
            Answer::Terrain(terrain),
            Answer::Activity(activity),
            Answer::Budget(budget),
        ] {
            prop_assert!((1..=3).contains(&collector.step()));
            collector.record(answer).expect("valid answer records");
        }

        prop_assert!(collector.is_complete());
    }

    /// After reset, replaying the same answers yields the identical
    /// recommendation (no hidden session carry-over).
    #[test]
    fn reset_then_replay_is_identical(
        terrain in terrain_strategy(),
        activity in activity_strategy(),
        budget in budget_strategy(),
    ) {
        let table = RuleTable::default();
        let mut collector = ChoiceCollector::new();

        let answers = [
            Answer::Terrain(terrain),
            Answer::Activity(activity),
            Answer::Budget(budget),
        ];

        for answer in answers {
            collector.record(answer).expect("valid answer records");
        }
        let first = resolve(collector.choices(), &table).expect("resolves");

        collector.reset();
        prop_assert_eq!(collector.step(), 1);

        for answer in answers {
            collector.record(answer).expect("valid answer records");
        }
        let second = resolve(collector.choices(), &table).expect("resolves");

        prop_assert_eq!(first, second);
    }
}
