//! Formula primitives shared by both engines. Every function returns a
//! [`Quotient`] so zero denominators and degenerate weight sets surface as
//! flagged values instead of panics or errors.

use serde::{Deserialize, Serialize};

use super::domain::ValueFlag;

/// A computed value paired with its edge-case provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quotient {
    pub value: f64,
    pub flag: ValueFlag,
}

impl Quotient {
    pub const fn nominal(value: f64) -> Self {
        Self {
            value,
            flag: ValueFlag::Nominal,
        }
    }

    pub const fn flagged(flag: ValueFlag) -> Self {
        Self { value: 0.0, flag }
    }

    pub fn is_nominal(&self) -> bool {
        self.flag == ValueFlag::Nominal
    }
}

/// `numerator / denominator`; a zero or non-finite denominator yields a zero
/// flagged `undefined ratio`.
pub fn ratio(numerator: f64, denominator: f64) -> Quotient {
    if denominator == 0.0 || !denominator.is_finite() {
        return Quotient::flagged(ValueFlag::UndefinedRatio);
    }

    let value = numerator / denominator;
    if value.is_finite() {
        Quotient::nominal(value)
    } else {
        Quotient::flagged(ValueFlag::UndefinedRatio)
    }
}

/// `(numerator * k) / denominator`, the frequency/severity form.
pub fn scaled_ratio(numerator: f64, denominator: f64, k: f64) -> Quotient {
    ratio(numerator * k, denominator)
}

/// `ratio * 100`, the proactive-indicator form. Values above 100 are
/// preserved; over-execution is interpreted downstream.
pub fn percentage(numerator: f64, denominator: f64) -> Quotient {
    let quotient = ratio(numerator, denominator);
    Quotient {
        value: quotient.value * 100.0,
        flag: quotient.flag,
    }
}

/// `sum(value * weight) / sum(weight)` over `(value, weight)` pairs. An
/// empty pair set or all-zero weights yields a zero flagged `no data`.
pub fn weighted_average(pairs: &[(f64, f64)]) -> Quotient {
    let total_weight: f64 = pairs.iter().map(|(_, weight)| weight).sum();
    if total_weight == 0.0 || !total_weight.is_finite() {
        return Quotient::flagged(ValueFlag::NoData);
    }

    let weighted_sum: f64 = pairs.iter().map(|(value, weight)| value * weight).sum();
    ratio(weighted_sum, total_weight)
}
