use super::common::{sample_record, service};
use crate::indicators::domain::{Month, RawRecord};
use crate::indicators::report::TrendDirection;
use crate::indicators::service::classify_trend;

fn full_year() -> Vec<RawRecord> {
    Month::ALL.map(sample_record).to_vec()
}

#[test]
fn a_full_year_produces_eleven_results_per_period() {
    let summary = service().assess_year(full_year());

    assert_eq!(summary.periods.len(), 12);
    for assessment in &summary.periods {
        assert_eq!(assessment.results.len(), 11);
        assert_eq!(assessment.compliance.len(), 11);
    }
    assert!(summary.rejected.is_empty());
}

#[test]
fn assessing_the_same_input_twice_is_idempotent() {
    let engine = service();

    let first = engine.assess_year(full_year());
    let second = engine.assess_year(full_year());

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.view()).expect("summary serializes"),
        serde_json::to_string(&second.view()).expect("summary serializes"),
    );
}

#[test]
fn quarter_rollups_sum_inputs_before_scaling() {
    let records = vec![
        sample_record(Month::January),
        sample_record(Month::February),
        sample_record(Month::March),
    ];

    let summary = service().assess_year(records);

    assert_eq!(summary.quarters.len(), 1);
    let quarter = &summary.quarters[0];
    assert_eq!(quarter.hours_worked, 150_000.0);
    assert_eq!(quarter.injuries, 6.0);
    assert_eq!(quarter.lost_days, 30.0);
    // Identical months keep the monthly rates: 6 * 200,000 / 150,000 = 8.
    assert_eq!(quarter.frequency.value, 8.0);
    assert_eq!(quarter.severity.value, 40.0);
    assert_eq!(quarter.risk_rate.value, 5.0);
}

#[test]
fn annual_rollup_covers_the_whole_year() {
    let summary = service().assess_year(full_year());

    let annual = summary.annual.as_ref().expect("annual rollup present");
    assert_eq!(annual.hours_worked, 600_000.0);
    assert_eq!(annual.injuries, 24.0);
    assert_eq!(annual.frequency.value, 8.0);

    let monthly_management = summary.periods[0].management_index.value;
    assert!((annual.average_management_index.value - monthly_management).abs() < 1e-9);
}

#[test]
fn rejected_periods_are_carried_alongside_the_assessments() {
    let mut june = sample_record(Month::June);
    june.lost_days = -3.0;

    let mut records = full_year();
    records[5] = june;

    let summary = service().assess_year(records);

    assert_eq!(summary.periods.len(), 11);
    assert_eq!(summary.rejected.len(), 1);
    assert_eq!(summary.rejected[0].period.month, Month::June);
    assert!(summary
        .periods
        .iter()
        .all(|assessment| assessment.period.month != Month::June));
}

#[test]
fn trend_follows_the_net_management_change() {
    let engine = service();

    let mut improving = full_year();
    // Resolve every detected condition in the closing months.
    for record in improving.iter_mut().skip(9) {
        record.conditions_eliminated = record.conditions_detected;
    }
    assert_eq!(
        engine.assess_year(improving).trend,
        TrendDirection::Improving
    );

    let mut declining = full_year();
    for record in declining.iter_mut().skip(9) {
        record.workers_trained = 5.0;
    }
    assert_eq!(
        engine.assess_year(declining).trend,
        TrendDirection::Declining
    );

    assert_eq!(engine.assess_year(full_year()).trend, TrendDirection::Stable);
}

#[test]
fn trend_classification_honors_the_epsilon() {
    assert_eq!(classify_trend(&[]), TrendDirection::Stable);
    assert_eq!(classify_trend(&[82.0]), TrendDirection::Stable);
    assert_eq!(classify_trend(&[80.0, 80.4]), TrendDirection::Stable);
    assert_eq!(classify_trend(&[80.0, 80.6]), TrendDirection::Improving);
    assert_eq!(classify_trend(&[80.0, 85.0, 79.0]), TrendDirection::Declining);
}

#[test]
fn insights_count_compliance_and_incident_free_periods() {
    let mut records = full_year();
    for record in records.iter_mut().take(4) {
        record.injuries = 0.0;
        record.lost_days = 0.0;
    }

    let summary = service().assess_year(records);
    let insights = summary.insights();

    assert_eq!(insights.periods_assessed, 12);
    assert_eq!(insights.periods_compliant, 12);
    assert_eq!(insights.incident_free_periods, 4);
    assert!(insights.average_management_index > 80.0);
    assert!(insights
        .observations
        .iter()
        .any(|note| note.contains("12 of 12")));
}

#[test]
fn the_view_is_the_complete_reporting_surface() {
    let summary = service().assess_year(full_year());
    let view = serde_json::to_value(summary.view()).expect("view serializes");

    let periods = view["periods"].as_array().expect("periods array");
    assert_eq!(periods.len(), 12);
    assert_eq!(
        periods[0]["results"].as_array().map(Vec::len),
        Some(11)
    );
    assert_eq!(periods[0]["management_index"]["code"], "IG_TOTAL");
    assert_eq!(view["trend_label"], "stable");
    // No rejected periods means the key is omitted entirely.
    assert!(view.get("rejected").is_none());
}
