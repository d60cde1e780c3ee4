//! Header normalization for CSV exports of the reporting template. Column
//! spellings drift between sites, so a small alias table maps the common
//! variants onto the canonical record fields.

pub(crate) const MONTH_COLUMN: &str = "month";
pub(crate) const YEAR_COLUMN: &str = "year";

/// Canonical numeric columns in template order, matching the record field
/// inventory.
pub(crate) const NUMERIC_COLUMNS: [&str; 23] = [
    "hours_worked",
    "injuries",
    "lost_days",
    "risk_analyses_performed",
    "risk_analyses_planned",
    "observations_performed",
    "observations_planned",
    "people_compliant",
    "people_observed",
    "dialogues_held",
    "dialogues_planned",
    "attendees_present",
    "attendees_expected",
    "conditions_eliminated",
    "conditions_detected",
    "workers_trained",
    "workers_scheduled",
    "standards_met",
    "standards_applicable",
    "measures_implemented",
    "measures_proposed",
    "items_audited",
    "items_total",
];

pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace([' ', '-', '/'], "_")
}

pub(crate) fn canonical_column(normalized: &str) -> Option<&'static str> {
    let canonical = match normalized {
        "month" | "period" => MONTH_COLUMN,
        "year" => YEAR_COLUMN,
        "hours_worked" | "hours" | "worked_hours" | "man_hours" => "hours_worked",
        "injuries" | "accidents" | "lesions" | "injury_count" => "injuries",
        "lost_days" | "days_lost" | "lost_workdays" => "lost_days",
        "risk_analyses_performed" | "task_analyses_performed" | "iart_performed" => {
            "risk_analyses_performed"
        }
        "risk_analyses_planned" | "task_analyses_planned" | "iart_planned" => {
            "risk_analyses_planned"
        }
        "observations_performed" | "opas_performed" => "observations_performed",
        "observations_planned" | "opas_planned" => "observations_planned",
        "people_compliant" | "compliant_people" => "people_compliant",
        "people_observed" | "observed_people" | "people_expected" => "people_observed",
        "dialogues_held" | "idps_held" => "dialogues_held",
        "dialogues_planned" | "idps_planned" => "dialogues_planned",
        "attendees_present" | "attendees" => "attendees_present",
        "attendees_expected" | "expected_attendees" => "attendees_expected",
        "conditions_eliminated" | "demands_eliminated" | "ids_eliminated" => {
            "conditions_eliminated"
        }
        "conditions_detected" | "demands_detected" | "ids_detected" => "conditions_detected",
        "workers_trained" | "trained_workers" | "ients_trained" => "workers_trained",
        "workers_scheduled" | "training_scheduled" | "ients_scheduled" => "workers_scheduled",
        "standards_met" | "orders_met" | "iosea_met" => "standards_met",
        "standards_applicable" | "orders_applicable" | "iosea_applicable" => {
            "standards_applicable"
        }
        "measures_implemented" | "actions_implemented" | "icai_implemented" => {
            "measures_implemented"
        }
        "measures_proposed" | "actions_proposed" | "icai_proposed" => "measures_proposed",
        "items_audited" | "elements_audited" | "ief_audited" => "items_audited",
        "items_total" | "elements_total" | "ief_total" => "items_total",
        _ => return None,
    };

    Some(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_normalize_case_spaces_and_separators() {
        assert_eq!(normalize_header("  Hours Worked "), "hours_worked");
        assert_eq!(normalize_header("Lost-Days"), "lost_days");
    }

    #[test]
    fn aliases_resolve_to_canonical_columns() {
        assert_eq!(canonical_column("accidents"), Some("injuries"));
        assert_eq!(canonical_column("period"), Some(MONTH_COLUMN));
        assert_eq!(canonical_column("iart_planned"), Some("risk_analyses_planned"));
        assert_eq!(canonical_column("unrelated"), None);
    }
}
