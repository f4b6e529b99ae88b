//! Choice collector - the questionnaire session state machine
//!
//! Tracks which of the three fixed questions have been answered and signals
//! completion after the third answer. State transitions fire only on
//! `record`; `reset` is the only way to restart a session.
//!
//! # State Transitions
//!
//! ```text
//! AwaitingTerrain -> AwaitingActivity -> AwaitingBudget -> Complete
//! ```
//!
//! # Invariants
//!
//! - The step pointer is always in 1..=3 while collecting
//! - An answered question is immutable until reset
//! - A failed `record` leaves the session untouched

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WayfarerError};
use crate::types::{ActivityPreference, Answer, BudgetLevel, QuestionKey, TerrainPreference};

/// The three collected answers for one questionnaire session.
///
/// Created empty, fully populated after three answers, discarded on reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSet {
    pub terrain: Option<TerrainPreference>,
    pub activity: Option<ActivityPreference>,
    pub budget: Option<BudgetLevel>,
}

impl ChoiceSet {
    /// Build a fully-populated choice set directly (headless resolution).
    pub fn new(
        terrain: TerrainPreference,
        activity: ActivityPreference,
        budget: BudgetLevel,
    ) -> Self {
        Self {
            terrain: Some(terrain),
            activity: Some(activity),
            budget: Some(budget),
        }
    }

    /// Whether all three questions have been answered.
    pub fn is_complete(&self) -> bool {
        self.terrain.is_some() && self.activity.is_some() && self.budget.is_some()
    }

    /// The questions still unanswered, in presentation order.
    pub fn missing(&self) -> Vec<QuestionKey> {
        let mut missing = Vec::new();
        if self.terrain.is_none() {
            missing.push(QuestionKey::Terrain);
        }
        if self.activity.is_none() {
            missing.push(QuestionKey::Activity);
        }
        if self.budget.is_none() {
            missing.push(QuestionKey::Budget);
        }
        missing
    }
}

/// Session phase for the questionnaire workflow.
///
/// `Complete` is terminal until `reset` returns the machine to
/// `AwaitingTerrain`. Collection is monotonic: there is no going back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingTerrain,
    AwaitingActivity,
    AwaitingBudget,
    Complete,
}

impl Default for SessionPhase {
    fn default() -> Self {
        Self::AwaitingTerrain
    }
}

impl SessionPhase {
    /// Derive the phase from the recorded answers: the first unanswered
    /// question is active, or the session is complete.
    fn from_choices(choices: &ChoiceSet) -> Self {
        match choices.missing().first() {
            Some(QuestionKey::Terrain) => Self::AwaitingTerrain,
            Some(QuestionKey::Activity) => Self::AwaitingActivity,
            Some(QuestionKey::Budget) => Self::AwaitingBudget,
            None => Self::Complete,
        }
    }

    /// The question currently awaiting an answer, if any.
    pub fn question(&self) -> Option<QuestionKey> {
        match self {
            Self::AwaitingTerrain => Some(QuestionKey::Terrain),
            Self::AwaitingActivity => Some(QuestionKey::Activity),
            Self::AwaitingBudget => Some(QuestionKey::Budget),
            Self::Complete => None,
        }
    }
}

/// Accumulates answers one at a time and flags the session complete after
/// the third. Owned exclusively by one presentation layer instance for the
/// lifetime of a session; every operation is a single synchronous transition.
#[derive(Debug, Clone, Default)]
pub struct ChoiceCollector {
    choices: ChoiceSet,
    phase: SessionPhase,
}

impl ChoiceCollector {
    /// Create a collector at step 1 with an empty choice set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The answers recorded so far.
    pub fn choices(&self) -> &ChoiceSet {
        &self.choices
    }

    /// The current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether all three answers have been recorded.
    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Complete
    }

    /// 1-indexed step pointer. Stays at 3 once the session is complete.
    pub fn step(&self) -> usize {
        match self.phase.question() {
            Some(key) => key.step_number(),
            None => 3,
        }
    }

    /// Record a typed answer.
    ///
    /// Fails with `InvalidInput` when the question was already answered or
    /// the session is already complete; the session is unchanged on failure.
    /// The third successful answer flags the session complete instead of
    /// advancing the step pointer further.
    pub fn record(&mut self, answer: Answer) -> Result<()> {
        if self.phase == SessionPhase::Complete {
            return Err(WayfarerError::invalid_input(
                "session is complete; reset to answer again",
            ));
        }

        let already = |key: QuestionKey| {
            WayfarerError::invalid_input(format!("{} question was already answered", key))
        };

        match answer {
            Answer::Terrain(v) => {
                if self.choices.terrain.is_some() {
                    return Err(already(QuestionKey::Terrain));
                }
                self.choices.terrain = Some(v);
            }
            Answer::Activity(v) => {
                if self.choices.activity.is_some() {
                    return Err(already(QuestionKey::Activity));
                }
                self.choices.activity = Some(v);
            }
            Answer::Budget(v) => {
                if self.choices.budget.is_some() {
                    return Err(already(QuestionKey::Budget));
                }
                self.choices.budget = Some(v);
            }
        }

        self.phase = SessionPhase::from_choices(&self.choices);
        debug!(answer = %answer, step = self.step(), complete = self.is_complete(), "answer recorded");
        Ok(())
    }

    /// Parse a raw value for the given question and record it.
    ///
    /// Fails with `InvalidInput` when the value is outside the enumeration
    /// for that question; the step pointer is unchanged on failure.
    pub fn record_answer(&mut self, key: QuestionKey, raw: &str) -> Result<()> {
        let answer = Answer::parse(key, raw)?;
        self.record(answer)
    }

    /// Clear the choice set and return to step 1. Never fails.
    pub fn reset(&mut self) {
        debug!("session reset");
        *self = Self::default();
    }
}
