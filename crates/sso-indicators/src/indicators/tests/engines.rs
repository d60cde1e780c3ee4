use super::common::{find, sample_record};
use crate::indicators::domain::{IndicatorCode, Month, ValueFlag};
use crate::indicators::evaluation::DEFAULT_K_FACTOR;
use crate::indicators::{ProactiveEngine, ReactiveEngine};

#[test]
fn reactive_engine_matches_the_worked_example() {
    let engine = ReactiveEngine::new(DEFAULT_K_FACTOR);
    let record = sample_record(Month::January);

    let [frequency, severity, risk_rate] = engine.assess(&record);

    assert_eq!(frequency.code, IndicatorCode::Frequency);
    assert_eq!(frequency.value, 8.0);
    assert_eq!(frequency.flag, ValueFlag::Nominal);

    assert_eq!(severity.value, 40.0);
    assert_eq!(risk_rate.value, 5.0);
    assert_eq!(risk_rate.flag, ValueFlag::Nominal);
}

#[test]
fn zero_hours_flags_frequency_and_severity_without_erroring() {
    let engine = ReactiveEngine::new(DEFAULT_K_FACTOR);
    let mut record = sample_record(Month::January);
    record.hours_worked = 0.0;

    let [frequency, severity, risk_rate] = engine.assess(&record);

    assert_eq!(frequency.value, 0.0);
    assert_eq!(frequency.flag, ValueFlag::UndefinedRatio);
    assert_eq!(severity.value, 0.0);
    assert_eq!(severity.flag, ValueFlag::UndefinedRatio);
    // TR does not depend on hours.
    assert_eq!(risk_rate.value, 5.0);
}

#[test]
fn zero_injuries_marks_risk_rate_as_no_incidents() {
    let engine = ReactiveEngine::new(DEFAULT_K_FACTOR);
    let mut record = sample_record(Month::January);
    record.injuries = 0.0;
    record.lost_days = 0.0;

    let [frequency, _, risk_rate] = engine.assess(&record);

    assert_eq!(frequency.value, 0.0);
    assert_eq!(frequency.flag, ValueFlag::Nominal);
    assert_eq!(risk_rate.value, 0.0);
    assert_eq!(risk_rate.flag, ValueFlag::NoIncidents);
}

#[test]
fn proactive_engine_computes_the_sub_indicator_table() {
    let engine = ProactiveEngine;
    let record = sample_record(Month::March);

    let assessment = engine.assess(&record);
    assert_eq!(assessment.sub_indicators.len(), 8);

    let iart = find(&assessment.sub_indicators, IndicatorCode::TaskRiskAnalysis);
    assert!((iart.value - 90.0).abs() < 1e-9);

    let opas = find(&assessment.sub_indicators, IndicatorCode::PlannedObservations);
    assert!((opas.value - 70.0).abs() < 1e-9);

    let idps = find(&assessment.sub_indicators, IndicatorCode::SafetyDialogues);
    assert!((idps.value - 7_000.0 / 90.0).abs() < 1e-9);

    let ief = find(&assessment.sub_indicators, IndicatorCode::AuditEffectiveness);
    assert!((ief.value - 85.0).abs() < 1e-9);
}

#[test]
fn management_index_is_the_weighted_average_of_the_seven() {
    let engine = ProactiveEngine;
    let record = sample_record(Month::March);

    let assessment = engine.assess(&record);

    // (5*90 + 3*70 + 2*IDPS + 3*80 + 4*90 + 4*IOSEA + 4*80) / 25
    let expected = (450.0 + 210.0 + 1_400.0 / 9.0 + 240.0 + 360.0 + 1_040.0 / 3.0 + 320.0) / 25.0;
    assert!((assessment.management_index.value - expected).abs() < 1e-9);
    assert_eq!(assessment.management_index.code, IndicatorCode::Management);
    assert_eq!(assessment.management_index.flag, ValueFlag::Nominal);
}

#[test]
fn over_execution_is_preserved_not_clamped() {
    let engine = ProactiveEngine;
    let mut record = sample_record(Month::April);
    record.risk_analyses_performed = 25.0;
    record.risk_analyses_planned = 20.0;

    let assessment = engine.assess(&record);
    let iart = find(&assessment.sub_indicators, IndicatorCode::TaskRiskAnalysis);
    assert!((iart.value - 125.0).abs() < 1e-9);
}

#[test]
fn audit_effectiveness_never_moves_the_management_index() {
    let engine = ProactiveEngine;
    let baseline = sample_record(Month::May);
    let mut modified = baseline.clone();
    modified.items_audited = 2.0;
    modified.items_total = 100.0;

    let baseline_total = engine.assess(&baseline).management_index.value;
    let modified_total = engine.assess(&modified).management_index.value;

    assert_eq!(baseline_total, modified_total);
}

#[test]
fn undefined_sub_indicator_participates_as_a_flagged_zero() {
    let engine = ProactiveEngine;
    let mut record = sample_record(Month::June);
    record.risk_analyses_planned = 0.0;

    let assessment = engine.assess(&record);
    let iart = find(&assessment.sub_indicators, IndicatorCode::TaskRiskAnalysis);
    assert_eq!(iart.value, 0.0);
    assert_eq!(iart.flag, ValueFlag::UndefinedRatio);

    // The zero still carries its weight in the total.
    let expected = (210.0 + 1_400.0 / 9.0 + 240.0 + 360.0 + 1_040.0 / 3.0 + 320.0) / 25.0;
    assert!((assessment.management_index.value - expected).abs() < 1e-9);
}
