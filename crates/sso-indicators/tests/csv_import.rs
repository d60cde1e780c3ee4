use std::io::Cursor;

use sso_indicators::indicators::domain::Month;
use sso_indicators::indicators::evaluation::EvaluationConfig;
use sso_indicators::indicators::ingest::CsvBatchImporter;
use sso_indicators::indicators::IndicatorService;

const HEADER: &str = "month,year,hours_worked,injuries,lost_days,\
risk_analyses_performed,risk_analyses_planned,observations_performed,observations_planned,\
people_compliant,people_observed,dialogues_held,dialogues_planned,attendees_present,\
attendees_expected,conditions_eliminated,conditions_detected,workers_trained,\
workers_scheduled,standards_met,standards_applicable,measures_implemented,\
measures_proposed,items_audited,items_total";

fn quarter_csv() -> String {
    format!(
        "{HEADER}\n\
January,2025,50000,2,10,18,20,12,15,35,40,5,6,28,30,8,10,18,20,13,15,4,5,17,20\n\
February,2025,48000,0,0,19,20,13,15,36,40,6,6,29,30,9,10,19,20,14,15,5,5,18,20\n\
March,2025,52000,1,4,20,20,14,15,37,40,6,6,30,30,10,10,20,20,15,15,5,5,19,20\n"
    )
}

#[test]
fn an_imported_batch_flows_through_the_whole_pipeline() {
    let importer = CsvBatchImporter::new(2025);
    let records = importer
        .from_reader(Cursor::new(quarter_csv()))
        .expect("quarter imports");
    assert_eq!(records.len(), 3);

    let service =
        IndicatorService::new(EvaluationConfig::default()).expect("default config is valid");
    let summary = service.assess_year(records);

    assert_eq!(summary.periods.len(), 3);
    assert_eq!(summary.quarters.len(), 1);
    assert!(summary.rejected.is_empty());

    let february = summary
        .periods
        .iter()
        .find(|assessment| assessment.period.month == Month::February)
        .expect("february assessed");
    // 0 injuries: TR is flagged, management is unaffected.
    assert!(february.management_compliance.meets_goal);

    let insights = summary.insights();
    assert_eq!(insights.incident_free_periods, 1);
}

#[test]
fn malformed_rows_keep_their_template_line_number() {
    let csv = format!(
        "{HEADER}\n\
January,2025,50000,2,10,18,20,12,15,35,40,5,6,28,30,8,10,18,20,13,15,4,5,17,20\n\
February,2025,oops,0,0,19,20,13,15,36,40,6,6,29,30,9,10,19,20,14,15,5,5,18,20\n"
    );

    let importer = CsvBatchImporter::new(2025);
    let error = importer
        .from_reader(Cursor::new(csv))
        .expect_err("bad hours must fail");

    let message = error.to_string();
    assert!(message.contains("row 3"));
    assert!(message.contains("hours_worked"));
}
