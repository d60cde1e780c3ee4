use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::{Period, RawRecord};

/// Range rule a record field can violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    NegativeValue,
    NonFiniteValue,
    DuplicatePeriod,
}

impl ValidationRule {
    pub const fn label(self) -> &'static str {
        match self {
            ValidationRule::NegativeValue => "value must be non-negative",
            ValidationRule::NonFiniteValue => "value must be a finite number",
            ValidationRule::DuplicatePeriod => "period appears more than once",
        }
    }
}

/// One rejected period with enough context to fix the source data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub period: Period,
    pub field: &'static str,
    pub rule: ValidationRule,
}

/// Outcome of validating a batch: accepted records in chronological order
/// plus one issue per rejected period. An invalid record excludes only its
/// own period; the rest proceed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedBatch {
    pub accepted: Vec<RawRecord>,
    pub rejected: Vec<ValidationIssue>,
}

/// Checks every record against the range rules. Hours worked equal to zero
/// is accepted; the frequency/severity formulas flag it downstream.
pub fn validate_batch(records: Vec<RawRecord>) -> ValidatedBatch {
    let mut accepted = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();
    let mut seen_periods = BTreeSet::new();

    for record in records {
        if !seen_periods.insert(record.period) {
            rejected.push(ValidationIssue {
                period: record.period,
                field: "period",
                rule: ValidationRule::DuplicatePeriod,
            });
            continue;
        }

        match first_field_violation(&record) {
            Some(issue) => rejected.push(issue),
            None => accepted.push(record),
        }
    }

    accepted.sort_by_key(|record| record.period);
    ValidatedBatch { accepted, rejected }
}

fn first_field_violation(record: &RawRecord) -> Option<ValidationIssue> {
    for (field, value) in record.fields() {
        let rule = if !value.is_finite() {
            ValidationRule::NonFiniteValue
        } else if value < 0.0 {
            ValidationRule::NegativeValue
        } else {
            continue;
        };

        return Some(ValidationIssue {
            period: record.period,
            field,
            rule,
        });
    }

    None
}
