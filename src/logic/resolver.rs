//! Recommendation resolver
//!
//! Translates a completed choice set into a human-readable travel
//! recommendation.
//!
//! # Design
//!
//! - **No hardcoded branching**: recommendation content comes from the
//!   `RuleTable`, with the table's fallback covering unmatched combinations
//! - **Determinism**: equal choice sets against the same table always yield
//!   the same string
//! - **Pure logic**: no I/O, no side effects
//!
//! The resolver defends its own preconditions: an incomplete choice set
//! fails with `IncompleteInput` even though the collector's contract means
//! callers should never hand one over.

use crate::collector::ChoiceSet;
use crate::error::{Result, WayfarerError};
use crate::rules::RuleTable;

/// Resolve a completed choice set to a recommendation string.
///
/// # Errors
///
/// Fails with `IncompleteInput` naming the unanswered questions when any of
/// the three fields is missing.
pub fn resolve(choices: &ChoiceSet, table: &RuleTable) -> Result<String> {
    let missing = choices.missing();
    if !missing.is_empty() {
        let names: Vec<String> = missing.iter().map(|k| k.to_string()).collect();
        return Err(WayfarerError::incomplete_input(format!(
            "unanswered questions: {}",
            names.join(", ")
        )));
    }

    let terrain = choices.terrain.ok_or_else(incomplete)?;
    let activity = choices.activity.ok_or_else(incomplete)?;
    let budget = choices.budget.ok_or_else(incomplete)?;

    let text = table
        .lookup(terrain, activity, budget)
        .unwrap_or(&table.fallback);

    Ok(text.to_string())
}

fn incomplete() -> WayfarerError {
    WayfarerError::incomplete_input("choice set is missing a field")
}
