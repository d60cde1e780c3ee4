use super::calculator;
use super::domain::{IndicatorCode, IndicatorResult, RawRecord};

/// One row of the proactive indicator table: where the operands come from
/// and how the result weighs into the management index.
pub(crate) struct SubIndicator {
    pub(crate) code: IndicatorCode,
    pub(crate) weight: Option<f64>,
    numerator: fn(&RawRecord) -> f64,
    denominator: fn(&RawRecord) -> f64,
}

/// The eight prevention-activity sub-indicators. OPAS and IDPS use composite
/// operands (activity count times people reached); audit effectiveness
/// carries no weight and is excluded from the management index.
pub(crate) const SUB_INDICATORS: [SubIndicator; 8] = [
    SubIndicator {
        code: IndicatorCode::TaskRiskAnalysis,
        weight: Some(5.0),
        numerator: |record| record.risk_analyses_performed,
        denominator: |record| record.risk_analyses_planned,
    },
    SubIndicator {
        code: IndicatorCode::PlannedObservations,
        weight: Some(3.0),
        numerator: |record| record.observations_performed * record.people_compliant,
        denominator: |record| record.observations_planned * record.people_observed,
    },
    SubIndicator {
        code: IndicatorCode::SafetyDialogues,
        weight: Some(2.0),
        numerator: |record| record.dialogues_held * record.attendees_present,
        denominator: |record| record.dialogues_planned * record.attendees_expected,
    },
    SubIndicator {
        code: IndicatorCode::SafetyDemand,
        weight: Some(3.0),
        numerator: |record| record.conditions_eliminated,
        denominator: |record| record.conditions_detected,
    },
    SubIndicator {
        code: IndicatorCode::SafetyTraining,
        weight: Some(4.0),
        numerator: |record| record.workers_trained,
        denominator: |record| record.workers_scheduled,
    },
    SubIndicator {
        code: IndicatorCode::ServiceOrders,
        weight: Some(4.0),
        numerator: |record| record.standards_met,
        denominator: |record| record.standards_applicable,
    },
    SubIndicator {
        code: IndicatorCode::IncidentControl,
        weight: Some(4.0),
        numerator: |record| record.measures_implemented,
        denominator: |record| record.measures_proposed,
    },
    SubIndicator {
        code: IndicatorCode::AuditEffectiveness,
        weight: None,
        numerator: |record| record.items_audited,
        denominator: |record| record.items_total,
    },
];

/// Sum of the seven management-index weights.
pub const MANAGEMENT_WEIGHT_TOTAL: f64 = 25.0;

/// The eight sub-indicator results plus the weighted management index for
/// one period.
#[derive(Debug, Clone, PartialEq)]
pub struct ProactiveAssessment {
    pub sub_indicators: Vec<IndicatorResult>,
    pub management_index: IndicatorResult,
}

/// Stateless engine iterating the sub-indicator table with one formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProactiveEngine;

impl ProactiveEngine {
    pub fn assess(&self, record: &RawRecord) -> ProactiveAssessment {
        let mut sub_indicators = Vec::with_capacity(SUB_INDICATORS.len());
        let mut weighted = Vec::with_capacity(SUB_INDICATORS.len());

        for entry in &SUB_INDICATORS {
            let quotient =
                calculator::percentage((entry.numerator)(record), (entry.denominator)(record));
            if let Some(weight) = entry.weight {
                weighted.push((quotient.value, weight));
            }
            sub_indicators.push(IndicatorResult {
                code: entry.code,
                period: record.period,
                value: quotient.value,
                unit: entry.code.unit(),
                flag: quotient.flag,
            });
        }

        let total = calculator::weighted_average(&weighted);
        let management_index = IndicatorResult {
            code: IndicatorCode::Management,
            period: record.period,
            value: total.value,
            unit: IndicatorCode::Management.unit(),
            flag: total.flag,
        };

        ProactiveAssessment {
            sub_indicators,
            management_index,
        }
    }
}
