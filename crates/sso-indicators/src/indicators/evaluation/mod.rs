mod config;
mod policy;

pub use config::{ConfigurationError, EvaluationConfig, GoalSet, DEFAULT_K_FACTOR};
pub use policy::GoalPolarity;

use serde::{Deserialize, Serialize};

use super::domain::{IndicatorCode, IndicatorResult, Period};

/// Stateless evaluator comparing computed values against configured goals.
#[derive(Debug, Clone)]
pub struct ComplianceEvaluator {
    goals: GoalSet,
}

impl ComplianceEvaluator {
    pub fn new(goals: GoalSet) -> Self {
        Self { goals }
    }

    /// Derives the verdict purely from the result and the configuration; no
    /// hidden state, no hysteresis.
    pub fn evaluate(&self, result: &IndicatorResult) -> ComplianceStatus {
        let goal = self.goals.goal_for(result.code);
        let polarity = GoalPolarity::for_code(result.code);

        ComplianceStatus {
            code: result.code,
            period: result.period,
            goal,
            polarity,
            meets_goal: policy::meets_goal(result.value, goal, polarity),
            margin: result.value - goal,
        }
    }
}

/// Goal verdict for one indicator in one period. The margin is the signed
/// distance `value - goal` regardless of polarity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    pub code: IndicatorCode,
    pub period: Period,
    pub goal: f64,
    pub polarity: GoalPolarity,
    pub meets_goal: bool,
    pub margin: f64,
}

impl ComplianceStatus {
    pub const fn verdict_label(&self) -> &'static str {
        if self.meets_goal {
            "compliant"
        } else {
            "non-compliant"
        }
    }
}
