use std::fmt;

use serde::{Deserialize, Serialize};

/// Calendar month of a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub const fn ordinal(self) -> u8 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
            Month::July => 7,
            Month::August => 8,
            Month::September => 9,
            Month::October => 10,
            Month::November => 11,
            Month::December => 12,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    pub const fn quarter(self) -> Quarter {
        match self {
            Month::January | Month::February | Month::March => Quarter::First,
            Month::April | Month::May | Month::June => Quarter::Second,
            Month::July | Month::August | Month::September => Quarter::Third,
            Month::October | Month::November | Month::December => Quarter::Fourth,
        }
    }

    /// Lenient parsing for spreadsheet-shaped inputs: full name, three-letter
    /// abbreviation, or a 1-12 numeral.
    pub fn parse(raw: &str) -> Option<Month> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "january" | "jan" | "1" | "01" => Some(Month::January),
            "february" | "feb" | "2" | "02" => Some(Month::February),
            "march" | "mar" | "3" | "03" => Some(Month::March),
            "april" | "apr" | "4" | "04" => Some(Month::April),
            "may" | "5" | "05" => Some(Month::May),
            "june" | "jun" | "6" | "06" => Some(Month::June),
            "july" | "jul" | "7" | "07" => Some(Month::July),
            "august" | "aug" | "8" | "08" => Some(Month::August),
            "september" | "sep" | "sept" | "9" | "09" => Some(Month::September),
            "october" | "oct" | "10" => Some(Month::October),
            "november" | "nov" | "11" => Some(Month::November),
            "december" | "dec" | "12" => Some(Month::December),
            _ => None,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quarter of the reporting year, used by the reactive rollups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quarter {
    First,
    Second,
    Third,
    Fourth,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [
        Quarter::First,
        Quarter::Second,
        Quarter::Third,
        Quarter::Fourth,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Quarter::First => "first quarter",
            Quarter::Second => "second quarter",
            Quarter::Third => "third quarter",
            Quarter::Fourth => "fourth quarter",
        }
    }
}

/// One reporting period. Ordering is chronological.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Period {
    pub year: i32,
    pub month: Month,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month.label(), self.year)
    }
}

/// One period's raw activity inputs, immutable once accepted by the
/// validator. Fields are `f64` because values arrive from spreadsheet-shaped
/// sources and must survive range validation before being trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub period: Period,
    pub hours_worked: f64,
    pub injuries: f64,
    pub lost_days: f64,
    pub risk_analyses_performed: f64,
    pub risk_analyses_planned: f64,
    pub observations_performed: f64,
    pub observations_planned: f64,
    pub people_compliant: f64,
    pub people_observed: f64,
    pub dialogues_held: f64,
    pub dialogues_planned: f64,
    pub attendees_present: f64,
    pub attendees_expected: f64,
    pub conditions_eliminated: f64,
    pub conditions_detected: f64,
    pub workers_trained: f64,
    pub workers_scheduled: f64,
    pub standards_met: f64,
    pub standards_applicable: f64,
    pub measures_implemented: f64,
    pub measures_proposed: f64,
    pub items_audited: f64,
    pub items_total: f64,
}

impl RawRecord {
    /// Field inventory in template order. Validation and CSV ingestion
    /// iterate this table instead of repeating per-field code.
    pub fn fields(&self) -> [(&'static str, f64); 23] {
        [
            ("hours_worked", self.hours_worked),
            ("injuries", self.injuries),
            ("lost_days", self.lost_days),
            ("risk_analyses_performed", self.risk_analyses_performed),
            ("risk_analyses_planned", self.risk_analyses_planned),
            ("observations_performed", self.observations_performed),
            ("observations_planned", self.observations_planned),
            ("people_compliant", self.people_compliant),
            ("people_observed", self.people_observed),
            ("dialogues_held", self.dialogues_held),
            ("dialogues_planned", self.dialogues_planned),
            ("attendees_present", self.attendees_present),
            ("attendees_expected", self.attendees_expected),
            ("conditions_eliminated", self.conditions_eliminated),
            ("conditions_detected", self.conditions_detected),
            ("workers_trained", self.workers_trained),
            ("workers_scheduled", self.workers_scheduled),
            ("standards_met", self.standards_met),
            ("standards_applicable", self.standards_applicable),
            ("measures_implemented", self.measures_implemented),
            ("measures_proposed", self.measures_proposed),
            ("items_audited", self.items_audited),
            ("items_total", self.items_total),
        ]
    }
}

/// The eleven regulatory indicators plus the weighted management index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCode {
    Frequency,
    Severity,
    RiskRate,
    TaskRiskAnalysis,
    PlannedObservations,
    SafetyDialogues,
    SafetyDemand,
    SafetyTraining,
    ServiceOrders,
    IncidentControl,
    AuditEffectiveness,
    Management,
}

impl IndicatorCode {
    pub const ALL: [IndicatorCode; 12] = [
        IndicatorCode::Frequency,
        IndicatorCode::Severity,
        IndicatorCode::RiskRate,
        IndicatorCode::TaskRiskAnalysis,
        IndicatorCode::PlannedObservations,
        IndicatorCode::SafetyDialogues,
        IndicatorCode::SafetyDemand,
        IndicatorCode::SafetyTraining,
        IndicatorCode::ServiceOrders,
        IndicatorCode::IncidentControl,
        IndicatorCode::AuditEffectiveness,
        IndicatorCode::Management,
    ];

    /// Short regulatory code used in reports and templates.
    pub const fn code(self) -> &'static str {
        match self {
            IndicatorCode::Frequency => "IF",
            IndicatorCode::Severity => "IG",
            IndicatorCode::RiskRate => "TR",
            IndicatorCode::TaskRiskAnalysis => "IART",
            IndicatorCode::PlannedObservations => "OPAS",
            IndicatorCode::SafetyDialogues => "IDPS",
            IndicatorCode::SafetyDemand => "IDS",
            IndicatorCode::SafetyTraining => "IENTS",
            IndicatorCode::ServiceOrders => "IOSEA",
            IndicatorCode::IncidentControl => "ICAI",
            IndicatorCode::AuditEffectiveness => "IEF",
            IndicatorCode::Management => "IG_TOTAL",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            IndicatorCode::Frequency => "Frequency index",
            IndicatorCode::Severity => "Severity index",
            IndicatorCode::RiskRate => "Risk rate",
            IndicatorCode::TaskRiskAnalysis => "Task risk analysis",
            IndicatorCode::PlannedObservations => "Planned observations",
            IndicatorCode::SafetyDialogues => "Periodic safety dialogues",
            IndicatorCode::SafetyDemand => "Safety demand",
            IndicatorCode::SafetyTraining => "Safety training",
            IndicatorCode::ServiceOrders => "Standardized service orders",
            IndicatorCode::IncidentControl => "Accident and incident control",
            IndicatorCode::AuditEffectiveness => "Audit effectiveness",
            IndicatorCode::Management => "Management index",
        }
    }

    pub const fn kind(self) -> IndicatorKind {
        match self {
            IndicatorCode::Frequency | IndicatorCode::Severity | IndicatorCode::RiskRate => {
                IndicatorKind::Reactive
            }
            IndicatorCode::Management => IndicatorKind::Composite,
            _ => IndicatorKind::Proactive,
        }
    }

    pub const fn unit(self) -> Unit {
        match self {
            IndicatorCode::Frequency | IndicatorCode::Severity => Unit::ScaledRate,
            IndicatorCode::RiskRate => Unit::DaysPerInjury,
            _ => Unit::Percent,
        }
    }
}

impl fmt::Display for IndicatorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Reactive,
    Proactive,
    Composite,
}

impl IndicatorKind {
    pub const fn label(self) -> &'static str {
        match self {
            IndicatorKind::Reactive => "reactive",
            IndicatorKind::Proactive => "proactive",
            IndicatorKind::Composite => "composite",
        }
    }
}

/// Measurement unit attached to an indicator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    ScaledRate,
    DaysPerInjury,
    Percent,
}

impl Unit {
    pub const fn label(self) -> &'static str {
        match self {
            Unit::ScaledRate => "per K hours worked",
            Unit::DaysPerInjury => "lost days per injury",
            Unit::Percent => "%",
        }
    }
}

/// Edge-case provenance of a computed value. Undefined ratios are reported
/// as flagged zeros, never as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFlag {
    Nominal,
    UndefinedRatio,
    NoIncidents,
    NoData,
}

impl ValueFlag {
    pub const fn label(self) -> &'static str {
        match self {
            ValueFlag::Nominal => "nominal",
            ValueFlag::UndefinedRatio => "undefined ratio",
            ValueFlag::NoIncidents => "no incidents",
            ValueFlag::NoData => "no data",
        }
    }
}

/// One computed indicator value for one period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub code: IndicatorCode,
    pub period: Period,
    pub value: f64,
    pub unit: Unit,
    pub flag: ValueFlag,
}
