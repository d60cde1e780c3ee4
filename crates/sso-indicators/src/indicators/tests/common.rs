use crate::indicators::domain::{IndicatorCode, IndicatorResult, Month, Period, RawRecord};
use crate::indicators::evaluation::EvaluationConfig;
use crate::indicators::IndicatorService;

pub(crate) fn period(month: Month) -> Period {
    Period { year: 2025, month }
}

/// A coherent month of activity with hand-checkable indicator values:
/// IF = 8, IG = 40, TR = 5, IART = 90, OPAS = 70, IDPS = 77.78, IDS = 80,
/// IENTS = 90, IOSEA = 86.67, ICAI = 80, IEF = 85, IG_TOTAL = 83.29.
pub(crate) fn sample_record(month: Month) -> RawRecord {
    RawRecord {
        period: period(month),
        hours_worked: 50_000.0,
        injuries: 2.0,
        lost_days: 10.0,
        risk_analyses_performed: 18.0,
        risk_analyses_planned: 20.0,
        observations_performed: 12.0,
        observations_planned: 15.0,
        people_compliant: 35.0,
        people_observed: 40.0,
        dialogues_held: 5.0,
        dialogues_planned: 6.0,
        attendees_present: 28.0,
        attendees_expected: 30.0,
        conditions_eliminated: 8.0,
        conditions_detected: 10.0,
        workers_trained: 18.0,
        workers_scheduled: 20.0,
        standards_met: 13.0,
        standards_applicable: 15.0,
        measures_implemented: 4.0,
        measures_proposed: 5.0,
        items_audited: 17.0,
        items_total: 20.0,
    }
}

pub(crate) fn service() -> IndicatorService {
    IndicatorService::new(EvaluationConfig::default()).expect("default config is valid")
}

pub(crate) fn find(results: &[IndicatorResult], code: IndicatorCode) -> &IndicatorResult {
    results
        .iter()
        .find(|result| result.code == code)
        .unwrap_or_else(|| panic!("missing {code} in results"))
}
