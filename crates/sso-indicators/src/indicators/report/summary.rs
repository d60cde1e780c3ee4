use serde::Serialize;

use super::super::calculator::{self, Quotient};
use super::super::domain::{IndicatorResult, Period, Quarter, RawRecord};
use super::super::evaluation::ComplianceStatus;
use super::super::reactive::risk_rate;
use super::super::validator::ValidationIssue;
use super::views::{AnnualSummaryView, ComplianceView, IndicatorResultView, PeriodAssessmentView};

/// One period's full assessment: the eleven indicator results, their
/// verdicts, and the weighted management index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodAssessment {
    pub period: Period,
    pub results: Vec<IndicatorResult>,
    pub compliance: Vec<ComplianceStatus>,
    pub management_index: IndicatorResult,
    pub management_compliance: ComplianceStatus,
}

/// Reactive aggregate over one quarter: inputs are summed before the
/// indices are recomputed, so a quarter is not an average of its months.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterRollup {
    pub quarter: Quarter,
    pub hours_worked: f64,
    pub injuries: f64,
    pub lost_days: f64,
    pub frequency: Quotient,
    pub severity: Quotient,
    pub risk_rate: Quotient,
}

impl QuarterRollup {
    pub(crate) fn collect(records: &[RawRecord], k_factor: f64) -> Vec<QuarterRollup> {
        Quarter::ALL
            .iter()
            .filter_map(|&quarter| {
                let members: Vec<&RawRecord> = records
                    .iter()
                    .filter(|record| record.period.month.quarter() == quarter)
                    .collect();
                if members.is_empty() {
                    return None;
                }

                let hours_worked: f64 = members.iter().map(|r| r.hours_worked).sum();
                let injuries: f64 = members.iter().map(|r| r.injuries).sum();
                let lost_days: f64 = members.iter().map(|r| r.lost_days).sum();

                Some(QuarterRollup {
                    quarter,
                    hours_worked,
                    injuries,
                    lost_days,
                    frequency: calculator::scaled_ratio(injuries, hours_worked, k_factor),
                    severity: calculator::scaled_ratio(lost_days, hours_worked, k_factor),
                    risk_rate: risk_rate(lost_days, injuries),
                })
            })
            .collect()
    }
}

/// Whole-year reactive aggregate plus the mean management index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualRollup {
    pub hours_worked: f64,
    pub injuries: f64,
    pub lost_days: f64,
    pub frequency: Quotient,
    pub severity: Quotient,
    pub risk_rate: Quotient,
    pub average_management_index: Quotient,
}

impl AnnualRollup {
    pub(crate) fn collect(
        records: &[RawRecord],
        management_values: &[f64],
        k_factor: f64,
    ) -> Option<AnnualRollup> {
        if records.is_empty() {
            return None;
        }

        let hours_worked: f64 = records.iter().map(|r| r.hours_worked).sum();
        let injuries: f64 = records.iter().map(|r| r.injuries).sum();
        let lost_days: f64 = records.iter().map(|r| r.lost_days).sum();
        let average_pairs: Vec<(f64, f64)> =
            management_values.iter().map(|&value| (value, 1.0)).collect();

        Some(AnnualRollup {
            hours_worked,
            injuries,
            lost_days,
            frequency: calculator::scaled_ratio(injuries, hours_worked, k_factor),
            severity: calculator::scaled_ratio(lost_days, hours_worked, k_factor),
            risk_rate: risk_rate(lost_days, injuries),
            average_management_index: calculator::weighted_average(&average_pairs),
        })
    }
}

/// Year-over-year direction of the management index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl TrendDirection {
    pub const fn label(self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Declining => "declining",
            TrendDirection::Stable => "stable",
        }
    }
}

/// The engine's complete output for one reporting year. Recomputing from the
/// same validated input yields an identical summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualSummary {
    pub periods: Vec<PeriodAssessment>,
    pub quarters: Vec<QuarterRollup>,
    pub annual: Option<AnnualRollup>,
    pub trend: TrendDirection,
    pub rejected: Vec<ValidationIssue>,
}

impl AnnualSummary {
    /// Serializable projection for reporting collaborators.
    pub fn view(&self) -> AnnualSummaryView {
        let periods = self
            .periods
            .iter()
            .map(|assessment| PeriodAssessmentView {
                month: assessment.period.month.label(),
                year: assessment.period.year,
                results: assessment.results.iter().map(IndicatorResultView::from).collect(),
                compliance: assessment.compliance.iter().map(ComplianceView::from).collect(),
                management_index: IndicatorResultView::from(&assessment.management_index),
                management_compliance: ComplianceView::from(&assessment.management_compliance),
            })
            .collect();

        AnnualSummaryView {
            periods,
            quarters: self.quarters.clone(),
            annual: self.annual.clone(),
            trend: self.trend,
            trend_label: self.trend.label(),
            rejected: self.rejected.clone(),
        }
    }

    pub fn insights(&self) -> super::AnnualInsights {
        super::generate_insights(self)
    }
}
