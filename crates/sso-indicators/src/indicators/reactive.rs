use super::calculator::{self, Quotient};
use super::domain::{IndicatorCode, IndicatorResult, RawRecord, ValueFlag};

/// Stateless engine for the three incident-outcome indicators.
#[derive(Debug, Clone, Copy)]
pub struct ReactiveEngine {
    k_factor: f64,
}

impl ReactiveEngine {
    pub const fn new(k_factor: f64) -> Self {
        Self { k_factor }
    }

    /// Computes IF, IG, and TR for one period. A period without worked hours
    /// yields flagged zeros for IF and IG; a period without injuries yields
    /// TR = 0 flagged `no incidents`.
    pub fn assess(&self, record: &RawRecord) -> [IndicatorResult; 3] {
        let frequency = calculator::scaled_ratio(record.injuries, record.hours_worked, self.k_factor);
        let severity = calculator::scaled_ratio(record.lost_days, record.hours_worked, self.k_factor);
        let risk = risk_rate(record.lost_days, record.injuries);

        [
            to_result(IndicatorCode::Frequency, record, frequency),
            to_result(IndicatorCode::Severity, record, severity),
            to_result(IndicatorCode::RiskRate, record, risk),
        ]
    }
}

/// Lost days per injury. Shared with the quarterly/annual rollups so the
/// no-incident flag stays consistent everywhere.
pub(crate) fn risk_rate(lost_days: f64, injuries: f64) -> Quotient {
    let quotient = calculator::ratio(lost_days, injuries);
    if injuries == 0.0 {
        Quotient::flagged(ValueFlag::NoIncidents)
    } else {
        quotient
    }
}

fn to_result(code: IndicatorCode, record: &RawRecord, quotient: Quotient) -> IndicatorResult {
    IndicatorResult {
        code,
        period: record.period,
        value: quotient.value,
        unit: code.unit(),
        flag: quotient.flag,
    }
}
