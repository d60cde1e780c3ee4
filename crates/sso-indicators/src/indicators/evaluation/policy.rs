use serde::{Deserialize, Serialize};

use super::super::domain::{IndicatorCode, IndicatorKind};

/// Direction in which a value is compared against its goal. Reactive
/// indicators count negative events, so for them lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPolarity {
    AtLeast,
    AtMost,
}

impl GoalPolarity {
    pub const fn for_code(code: IndicatorCode) -> Self {
        match code.kind() {
            IndicatorKind::Reactive => GoalPolarity::AtMost,
            IndicatorKind::Proactive | IndicatorKind::Composite => GoalPolarity::AtLeast,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            GoalPolarity::AtLeast => "at least",
            GoalPolarity::AtMost => "at most",
        }
    }
}

/// Inclusive at the exact boundary in both directions.
pub(crate) fn meets_goal(value: f64, goal: f64, polarity: GoalPolarity) -> bool {
    match polarity {
        GoalPolarity::AtLeast => value >= goal,
        GoalPolarity::AtMost => value <= goal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reactive_codes_compare_downward() {
        assert_eq!(
            GoalPolarity::for_code(IndicatorCode::Frequency),
            GoalPolarity::AtMost
        );
        assert_eq!(
            GoalPolarity::for_code(IndicatorCode::RiskRate),
            GoalPolarity::AtMost
        );
        assert_eq!(
            GoalPolarity::for_code(IndicatorCode::SafetyDemand),
            GoalPolarity::AtLeast
        );
        assert_eq!(
            GoalPolarity::for_code(IndicatorCode::Management),
            GoalPolarity::AtLeast
        );
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(meets_goal(80.0, 80.0, GoalPolarity::AtLeast));
        assert!(meets_goal(5.0, 5.0, GoalPolarity::AtMost));
        assert!(!meets_goal(79.9, 80.0, GoalPolarity::AtLeast));
        assert!(!meets_goal(5.1, 5.0, GoalPolarity::AtMost));
    }
}
