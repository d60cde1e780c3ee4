//! Serializable projections of the annual summary: the sole data surface
//! the CLI renderer and the HTTP response read. Consumers format these,
//! they do not recompute indicators.

use serde::Serialize;

use super::super::domain::IndicatorResult;
use super::super::evaluation::ComplianceStatus;
use super::super::validator::ValidationIssue;
use super::summary::{AnnualRollup, QuarterRollup, TrendDirection};

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorResultView {
    pub code: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub flag: &'static str,
}

impl From<&IndicatorResult> for IndicatorResultView {
    fn from(result: &IndicatorResult) -> Self {
        Self {
            code: result.code.code(),
            label: result.code.label(),
            kind: result.code.kind().label(),
            value: result.value,
            unit: result.unit.label(),
            flag: result.flag.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceView {
    pub code: &'static str,
    pub goal: f64,
    pub polarity: &'static str,
    pub meets_goal: bool,
    pub margin: f64,
    pub verdict: &'static str,
}

impl From<&ComplianceStatus> for ComplianceView {
    fn from(status: &ComplianceStatus) -> Self {
        Self {
            code: status.code.code(),
            goal: status.goal,
            polarity: status.polarity.label(),
            meets_goal: status.meets_goal,
            margin: status.margin,
            verdict: status.verdict_label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PeriodAssessmentView {
    pub month: &'static str,
    pub year: i32,
    pub results: Vec<IndicatorResultView>,
    pub compliance: Vec<ComplianceView>,
    pub management_index: IndicatorResultView,
    pub management_compliance: ComplianceView,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnualSummaryView {
    pub periods: Vec<PeriodAssessmentView>,
    pub quarters: Vec<QuarterRollup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual: Option<AnnualRollup>,
    pub trend: TrendDirection,
    pub trend_label: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<ValidationIssue>,
}
