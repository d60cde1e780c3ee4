use super::domain::RawRecord;
use super::evaluation::{ComplianceEvaluator, ConfigurationError, EvaluationConfig};
use super::proactive::{ProactiveAssessment, ProactiveEngine};
use super::reactive::ReactiveEngine;
use super::report::{AnnualRollup, AnnualSummary, PeriodAssessment, QuarterRollup, TrendDirection};
use super::validator::{validate_batch, ValidatedBatch};

/// Net management-index change below this many percentage points counts as
/// stable.
pub const TREND_EPSILON: f64 = 0.5;

/// Pipeline entry point: validation, both engines, compliance evaluation,
/// rollups, and trend classification. A pure function of its inputs — no
/// process-wide state, safe to share across threads and to rerun.
#[derive(Debug, Clone)]
pub struct IndicatorService {
    config: EvaluationConfig,
    reactive: ReactiveEngine,
    proactive: ProactiveEngine,
    evaluator: ComplianceEvaluator,
}

impl IndicatorService {
    /// Fails with [`ConfigurationError`] on a negative or non-finite K or
    /// goal; the run cannot proceed until the configuration is corrected.
    pub fn new(config: EvaluationConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;

        Ok(Self {
            reactive: ReactiveEngine::new(config.k_factor),
            proactive: ProactiveEngine,
            evaluator: ComplianceEvaluator::new(config.goals.clone()),
            config,
        })
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Assesses one reporting year. Invalid records exclude only their own
    /// period and are carried in the summary as validation issues.
    pub fn assess_year(&self, records: Vec<RawRecord>) -> AnnualSummary {
        let ValidatedBatch { accepted, rejected } = validate_batch(records);

        let mut periods = Vec::with_capacity(accepted.len());
        for record in &accepted {
            let reactive = self.reactive.assess(record);
            let ProactiveAssessment {
                sub_indicators,
                management_index,
            } = self.proactive.assess(record);

            let mut results = Vec::with_capacity(reactive.len() + sub_indicators.len());
            results.extend(reactive);
            results.extend(sub_indicators);

            let compliance = results
                .iter()
                .map(|result| self.evaluator.evaluate(result))
                .collect();
            let management_compliance = self.evaluator.evaluate(&management_index);

            periods.push(PeriodAssessment {
                period: record.period,
                results,
                compliance,
                management_index,
                management_compliance,
            });
        }

        let management_values: Vec<f64> = periods
            .iter()
            .map(|assessment| assessment.management_index.value)
            .collect();
        let quarters = QuarterRollup::collect(&accepted, self.config.k_factor);
        let annual = AnnualRollup::collect(&accepted, &management_values, self.config.k_factor);
        let trend = classify_trend(&management_values);

        AnnualSummary {
            periods,
            quarters,
            annual,
            trend,
            rejected,
        }
    }
}

/// Sign of the net change between the first and last management index, with
/// changes below [`TREND_EPSILON`] classified as stable.
pub(crate) fn classify_trend(management_values: &[f64]) -> TrendDirection {
    let (Some(first), Some(last)) = (management_values.first(), management_values.last()) else {
        return TrendDirection::Stable;
    };

    let net = last - first;
    if management_values.len() < 2 || net.abs() < TREND_EPSILON {
        TrendDirection::Stable
    } else if net > 0.0 {
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    }
}
