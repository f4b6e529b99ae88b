//! Rule table handling for saving and loading recommendation rules.
//!
//! The mapping from a completed choice set to a recommendation is data, not
//! branching: a table keyed by the 2x2x3 = 12 possible combinations plus an
//! explicit fallback entry. Operators can edit the table as a JSON file and
//! point the binary at it with `--rules`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::types::{ActivityPreference, BudgetLevel, TerrainPreference};

/// One rule: a full combination of answers mapped to recommendation text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRule {
    pub terrain: TerrainPreference,
    pub activity: ActivityPreference,
    pub budget: BudgetLevel,
    pub text: String,
}

/// The full rule table with a fallback for unmatched combinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    pub rules: Vec<RecommendationRule>,
    /// Text returned when no rule matches the combination.
    pub fallback: String,
}

impl RuleTable {
    /// Look up the recommendation text for a combination, if a rule exists.
    pub fn lookup(
        &self,
        terrain: TerrainPreference,
        activity: ActivityPreference,
        budget: BudgetLevel,
    ) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.terrain == terrain && r.activity == activity && r.budget == budget)
            .map(|r| r.text.as_str())
    }

    /// Save the rule table to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize rule table to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write rule table to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a rule table from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read rule table from {:?}", path.as_ref()))?;

        let table: Self =
            serde_json::from_str(&content).context("Failed to parse rule table JSON")?;

        Ok(table)
    }

    /// Validate the rule table
    pub fn validate(&self) -> Result<()> {
        if self.fallback.trim().is_empty() {
            anyhow::bail!("Fallback text must not be empty");
        }

        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.text.trim().is_empty() {
                anyhow::bail!(
                    "Rule for {}/{}/{} has empty text",
                    rule.terrain,
                    rule.activity,
                    rule.budget
                );
            }
            if !seen.insert((rule.terrain, rule.activity, rule.budget)) {
                anyhow::bail!(
                    "Duplicate rule for combination {}/{}/{}",
                    rule.terrain,
                    rule.activity,
                    rule.budget
                );
            }
        }

        Ok(())
    }
}

impl Default for RuleTable {
    /// Built-in table covering all 12 combinations.
    fn default() -> Self {
        use ActivityPreference::*;
        use BudgetLevel::*;
        use TerrainPreference::*;

        let rule = |terrain, activity, budget, text: &str| RecommendationRule {
            terrain,
            activity,
            budget,
            text: text.to_string(),
        };

        Self {
            rules: vec![
                rule(
                    Mountains,
                    Adventure,
                    Low,
                    "Head for the High Tatras in Slovakia - hut-to-hut hiking, \
                     via ferrata routes, and mountain hostels that cost less than a city dinner.",
                ),
                rule(
                    Mountains,
                    Adventure,
                    Medium,
                    "Banff, Canada is calling - canyon scrambles, glacier walks, \
                     and world-class trail networks with comfortable lodges in town.",
                ),
                rule(
                    Mountains,
                    Adventure,
                    High,
                    "Go big in the Swiss Alps - base yourself in Zermatt for guided \
                     glacier treks, climbing schools, and the Matterhorn at your window.",
                ),
                rule(
                    Mountains,
                    Relaxation,
                    Low,
                    "The Great Smoky Mountains are perfect - quiet cabin stays, \
                     easy waterfall walks, and misty ridgeline views for next to nothing.",
                ),
                rule(
                    Mountains,
                    Relaxation,
                    Medium,
                    "Try Lake Bled, Slovenia - an alpine lake with a castle view, \
                     lakeside spas, and slow mornings with cream cake on the shore.",
                ),
                rule(
                    Mountains,
                    Relaxation,
                    High,
                    "Treat yourself to Aspen, Colorado - five-star lodges, mountain \
                     spas, and gondola rides to summit restaurants.",
                ),
                rule(
                    Beach,
                    Adventure,
                    Low,
                    "Nha Trang, Vietnam fits the bill - cheap dive certifications, \
                     island-hopping boats, and beachfront street food.",
                ),
                rule(
                    Beach,
                    Adventure,
                    Medium,
                    "Costa Rica's Pacific coast is your spot - surf breaks, \
                     zip-lines through the canopy, and wildlife right off the sand.",
                ),
                rule(
                    Beach,
                    Adventure,
                    High,
                    "Bora Bora, French Polynesia - lagoon diving with rays, \
                     private boat charters, and overwater bungalows to come home to.",
                ),
                rule(
                    Beach,
                    Relaxation,
                    Low,
                    "Koh Lanta, Thailand is made for this - long empty beaches, \
                     hammocks under the palms, and sunset curries for a few dollars.",
                ),
                rule(
                    Beach,
                    Relaxation,
                    Medium,
                    "The Algarve, Portugal awaits - golden cliffs, calm coves, \
                     and seafood lunches in whitewashed villages.",
                ),
                rule(
                    Beach,
                    Relaxation,
                    High,
                    "The Maldives, no question - a private overwater villa, \
                     your own stretch of reef, and nothing on the schedule.",
                ),
            ],
            fallback: "Pack a bag and go somewhere new - any trip beats no trip. \
                       Start with a place you can reach in one flight."
                .to_string(),
        }
    }
}
