use serde::Serialize;

use super::super::domain::{IndicatorCode, Period, ValueFlag};
use super::summary::{AnnualSummary, TrendDirection};

/// A period paired with its management index, for best/worst callouts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodIndexEntry {
    pub period: Period,
    pub value: f64,
}

/// Year-level statistics and human-readable observations derived from an
/// annual summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualInsights {
    pub periods_assessed: usize,
    pub periods_compliant: usize,
    pub incident_free_periods: usize,
    pub average_management_index: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_period: Option<PeriodIndexEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_period: Option<PeriodIndexEntry>,
    pub observations: Vec<String>,
}

pub(crate) fn generate_insights(summary: &AnnualSummary) -> AnnualInsights {
    let periods_assessed = summary.periods.len();
    let periods_compliant = summary
        .periods
        .iter()
        .filter(|assessment| assessment.management_compliance.meets_goal)
        .count();
    let incident_free_periods = summary
        .periods
        .iter()
        .filter(|assessment| {
            assessment
                .results
                .iter()
                .any(|result| {
                    result.code == IndicatorCode::RiskRate && result.flag == ValueFlag::NoIncidents
                })
        })
        .count();
    let average_management_index = summary
        .annual
        .as_ref()
        .map(|rollup| rollup.average_management_index.value)
        .unwrap_or(0.0);

    let best_period = summary
        .periods
        .iter()
        .max_by(|a, b| {
            a.management_index
                .value
                .partial_cmp(&b.management_index.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|assessment| PeriodIndexEntry {
            period: assessment.period,
            value: assessment.management_index.value,
        });
    let worst_period = summary
        .periods
        .iter()
        .min_by(|a, b| {
            a.management_index
                .value
                .partial_cmp(&b.management_index.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|assessment| PeriodIndexEntry {
            period: assessment.period,
            value: assessment.management_index.value,
        });

    let mut observations = Vec::new();

    if periods_assessed == 0 {
        observations.push("No valid periods were assessed".to_string());
    } else {
        let goal = summary.periods[0].management_compliance.goal;
        observations.push(format!(
            "{periods_compliant} of {periods_assessed} period(s) met the {goal:.0}% management goal"
        ));

        match summary.trend {
            TrendDirection::Improving => {
                observations.push("Management index is improving across the year".to_string());
            }
            TrendDirection::Declining => {
                observations.push("Management index is declining across the year".to_string());
            }
            TrendDirection::Stable => {
                observations.push("Management index is stable across the year".to_string());
            }
        }

        if incident_free_periods > 0 {
            observations.push(format!(
                "{incident_free_periods} period(s) closed without recordable injuries"
            ));
        }

        if let Some(worst) = worst_period {
            if worst.value < goal {
                observations.push(format!(
                    "Lowest management index: {:.1}% in {}",
                    worst.value, worst.period
                ));
            }
        }
    }

    if !summary.rejected.is_empty() {
        observations.push(format!(
            "{} period(s) were excluded by validation and need corrected source data",
            summary.rejected.len()
        ));
    }

    AnnualInsights {
        periods_assessed,
        periods_compliant,
        incident_free_periods,
        average_management_index,
        best_period,
        worst_period,
        observations,
    }
}
