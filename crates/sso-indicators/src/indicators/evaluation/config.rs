use serde::{Deserialize, Serialize};

use super::super::domain::IndicatorCode;

/// International normalization constant for frequency/severity rates,
/// roughly one hundred workers over a year.
pub const DEFAULT_K_FACTOR: f64 = 200_000.0;

const DEFAULT_PROACTIVE_GOAL: f64 = 80.0;

/// Normalization constant and per-indicator goals for one evaluation run.
/// Supplied once per batch and never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    #[serde(default = "default_k_factor")]
    pub k_factor: f64,
    #[serde(default)]
    pub goals: GoalSet,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            goals: GoalSet::default(),
        }
    }
}

impl EvaluationConfig {
    /// Rejects configurations the formulas cannot honor. Fatal for the whole
    /// run; the only recovery is resubmitting a corrected configuration.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(ConfigurationError::InvalidScaleFactor {
                value: self.k_factor,
            });
        }

        for (code, goal) in self.goals.entries() {
            if !goal.is_finite() || goal < 0.0 {
                return Err(ConfigurationError::InvalidGoal { code, value: goal });
            }
        }

        Ok(())
    }
}

fn default_k_factor() -> f64 {
    DEFAULT_K_FACTOR
}

/// The configurable goal percentages, one per indicator plus the management
/// index. Reactive entries are reference thresholds (lower is better);
/// proactive entries are execution goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalSet {
    pub frequency: f64,
    pub severity: f64,
    pub risk_rate: f64,
    pub task_risk_analysis: f64,
    pub planned_observations: f64,
    pub safety_dialogues: f64,
    pub safety_demand: f64,
    pub safety_training: f64,
    pub service_orders: f64,
    pub incident_control: f64,
    pub audit_effectiveness: f64,
    pub management: f64,
}

impl Default for GoalSet {
    fn default() -> Self {
        Self {
            frequency: 5.0,
            severity: 50.0,
            risk_rate: 10.0,
            task_risk_analysis: DEFAULT_PROACTIVE_GOAL,
            planned_observations: DEFAULT_PROACTIVE_GOAL,
            safety_dialogues: DEFAULT_PROACTIVE_GOAL,
            safety_demand: DEFAULT_PROACTIVE_GOAL,
            safety_training: DEFAULT_PROACTIVE_GOAL,
            service_orders: DEFAULT_PROACTIVE_GOAL,
            incident_control: DEFAULT_PROACTIVE_GOAL,
            audit_effectiveness: DEFAULT_PROACTIVE_GOAL,
            management: DEFAULT_PROACTIVE_GOAL,
        }
    }
}

impl GoalSet {
    pub fn goal_for(&self, code: IndicatorCode) -> f64 {
        match code {
            IndicatorCode::Frequency => self.frequency,
            IndicatorCode::Severity => self.severity,
            IndicatorCode::RiskRate => self.risk_rate,
            IndicatorCode::TaskRiskAnalysis => self.task_risk_analysis,
            IndicatorCode::PlannedObservations => self.planned_observations,
            IndicatorCode::SafetyDialogues => self.safety_dialogues,
            IndicatorCode::SafetyDemand => self.safety_demand,
            IndicatorCode::SafetyTraining => self.safety_training,
            IndicatorCode::ServiceOrders => self.service_orders,
            IndicatorCode::IncidentControl => self.incident_control,
            IndicatorCode::AuditEffectiveness => self.audit_effectiveness,
            IndicatorCode::Management => self.management,
        }
    }

    pub fn entries(&self) -> [(IndicatorCode, f64); 12] {
        IndicatorCode::ALL.map(|code| (code, self.goal_for(code)))
    }
}

/// Fatal configuration faults.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("scale factor K must be a finite positive number, found {value}")]
    InvalidScaleFactor { value: f64 },
    #[error("goal for {code} must be a finite non-negative percentage, found {value}")]
    InvalidGoal { code: IndicatorCode, value: f64 },
}
