//! Type-safe questionnaire types for Wayfarer
//!
//! This module replaces stringly-typed answers with proper Rust enums that
//! provide compile-time validation and exhaustive matching. String parsing
//! via `FromStr` is the defended entry point for programmatic input.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{Result, WayfarerError};

/// Terrain preference - the first question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum TerrainPreference {
    #[strum(serialize = "Mountains")]
    Mountains,
    #[strum(serialize = "Beach")]
    Beach,
}

/// Activity preference - the second question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum ActivityPreference {
    #[strum(serialize = "Adventure")]
    Adventure,
    #[strum(serialize = "Relaxation")]
    Relaxation,
}

/// Budget level - the third question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum BudgetLevel {
    #[strum(serialize = "Low")]
    Low,
    #[strum(serialize = "Medium")]
    Medium,
    #[strum(serialize = "High")]
    High,
}

/// Identifies one of the three fixed questions.
///
/// Question order is fixed: terrain, then activity, then budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum QuestionKey {
    Terrain,
    Activity,
    Budget,
}

impl QuestionKey {
    /// All questions in presentation order.
    pub fn all() -> &'static [Self] {
        &[Self::Terrain, Self::Activity, Self::Budget]
    }

    /// The question text shown to the user.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Terrain => "Do you prefer mountains or beach?",
            Self::Activity => "Are you looking for adventure or relaxation?",
            Self::Budget => "What's your budget?",
        }
    }

    /// The allowed answers for this question, in display order.
    pub fn options(&self) -> Vec<String> {
        match self {
            Self::Terrain => TerrainPreference::iter().map(|v| v.to_string()).collect(),
            Self::Activity => ActivityPreference::iter().map(|v| v.to_string()).collect(),
            Self::Budget => BudgetLevel::iter().map(|v| v.to_string()).collect(),
        }
    }

    /// 1-indexed step number for progress display.
    pub fn step_number(&self) -> usize {
        match self {
            Self::Terrain => 1,
            Self::Activity => 2,
            Self::Budget => 3,
        }
    }
}

/// A single typed answer to one of the three questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Terrain(TerrainPreference),
    Activity(ActivityPreference),
    Budget(BudgetLevel),
}

impl Answer {
    /// The question this answer belongs to.
    pub fn key(&self) -> QuestionKey {
        match self {
            Self::Terrain(_) => QuestionKey::Terrain,
            Self::Activity(_) => QuestionKey::Activity,
            Self::Budget(_) => QuestionKey::Budget,
        }
    }

    /// Parse a raw string into a typed answer for the given question.
    ///
    /// Fails with `InvalidInput` when the value is outside the fixed
    /// enumeration for that question.
    pub fn parse(key: QuestionKey, raw: &str) -> Result<Self> {
        let invalid = || {
            WayfarerError::invalid_input(format!(
                "'{}' is not a valid answer for {} (expected one of: {})",
                raw,
                key,
                key.options().join(", ")
            ))
        };

        match key {
            QuestionKey::Terrain => TerrainPreference::from_str(raw)
                .map(Self::Terrain)
                .map_err(|_| invalid()),
            QuestionKey::Activity => ActivityPreference::from_str(raw)
                .map(Self::Activity)
                .map_err(|_| invalid()),
            QuestionKey::Budget => BudgetLevel::from_str(raw)
                .map(Self::Budget)
                .map_err(|_| invalid()),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Terrain(v) => v.fmt(f),
            Self::Activity(v) => v.fmt(f),
            Self::Budget(v) => v.fmt(f),
        }
    }
}
