use std::path::PathBuf;

use clap::Args;
use serde_json::json;
use sso_indicators::error::AppError;
use sso_indicators::indicators::domain::{Month, Period, RawRecord};
use sso_indicators::indicators::evaluation::EvaluationConfig;
use sso_indicators::indicators::ingest::CsvBatchImporter;
use sso_indicators::indicators::report::AnnualSummary;
use sso_indicators::indicators::IndicatorService;

use crate::infra::current_year;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// CSV export of the reporting template
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Reporting year for rows without a year column (defaults to today's)
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Emit the summary as JSON instead of the rendered report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reporting year stamped on the synthetic batch (defaults to today's)
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Emit the summary as JSON instead of the rendered report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let year = args.year.unwrap_or_else(current_year);
    let importer = CsvBatchImporter::new(year);
    let records = importer.from_path(&args.input)?;

    let service = IndicatorService::new(EvaluationConfig::default())?;
    let summary = service.assess_year(records);

    emit(&summary, args.json);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let year = args.year.unwrap_or_else(current_year);
    let service = IndicatorService::new(EvaluationConfig::default())?;
    let summary = service.assess_year(demo_batch(year));

    println!("Synthetic demo year {year}");
    emit(&summary, args.json);
    Ok(())
}

fn emit(summary: &AnnualSummary, as_json: bool) {
    if as_json {
        let payload = json!({ "summary": summary.view(), "insights": summary.insights() });
        match serde_json::to_string_pretty(&payload) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("summary unavailable as JSON: {err}"),
        }
    } else {
        render_annual_summary(summary);
    }
}

/// Renders the report from the serializable view, the same surface the HTTP
/// response exposes.
fn render_annual_summary(summary: &AnnualSummary) {
    let view = summary.view();
    let insights = summary.insights();

    println!("Annual safety indicator assessment");
    println!(
        "Periods assessed: {} | Trend: {}",
        view.periods.len(),
        view.trend_label
    );

    for period in &view.periods {
        println!("\n{} {}", period.month, period.year);
        for (result, compliance) in period.results.iter().zip(&period.compliance) {
            println!(
                "- {:<8} {:>8.2} {} [{}] -> {} (goal {} {:.1})",
                result.code,
                result.value,
                result.unit,
                result.flag,
                compliance.verdict,
                compliance.polarity,
                compliance.goal
            );
        }

        let management = &period.management_index;
        let verdict = &period.management_compliance;
        println!(
            "- {:<8} {:>8.2} % -> {} (goal {:.1}, margin {:+.1})",
            management.code, management.value, verdict.verdict, verdict.goal, verdict.margin
        );
    }

    if !view.quarters.is_empty() {
        println!("\nQuarterly reactive rollups");
        for quarter in &view.quarters {
            println!(
                "- {}: IF {:.2} | IG {:.2} | TR {:.2} ({:.0} injuries, {:.0} lost days, {:.0} h)",
                quarter.quarter.label(),
                quarter.frequency.value,
                quarter.severity.value,
                quarter.risk_rate.value,
                quarter.injuries,
                quarter.lost_days,
                quarter.hours_worked
            );
        }
    }

    if let Some(annual) = &view.annual {
        println!("\nYear totals");
        println!(
            "- IF {:.2} | IG {:.2} | TR {:.2} | average IG_TOTAL {:.1}%",
            annual.frequency.value,
            annual.severity.value,
            annual.risk_rate.value,
            annual.average_management_index.value
        );
    }

    if !view.rejected.is_empty() {
        println!("\nExcluded periods");
        for issue in &view.rejected {
            println!("- {}: {} ({})", issue.period, issue.field, issue.rule.label());
        }
    }

    if !insights.observations.is_empty() {
        println!("\nObservations");
        for note in &insights.observations {
            println!("- {note}");
        }
    }
}

/// A coherent, deterministic twelve-month batch. Arithmetic modulation keeps
/// demo output and route tests reproducible without an RNG.
pub(crate) fn demo_batch(year: i32) -> Vec<RawRecord> {
    Month::ALL
        .iter()
        .enumerate()
        .map(|(index, &month)| {
            let swing = (index % 4) as f64;
            let injuries = match index % 5 {
                0 => 1.0,
                3 => 2.0,
                _ => 0.0,
            };

            RawRecord {
                period: Period { year, month },
                hours_worked: 18_000.0 + 450.0 * swing,
                injuries,
                lost_days: injuries * 4.0,
                risk_analyses_performed: 12.0 + swing - (index % 3) as f64,
                risk_analyses_planned: 12.0 + swing,
                observations_performed: 14.0 - (index % 2) as f64,
                observations_planned: 15.0,
                people_compliant: 34.0 + swing,
                people_observed: 40.0,
                dialogues_held: 5.0 + (index % 2) as f64,
                dialogues_planned: 6.0,
                attendees_present: 26.0 + swing,
                attendees_expected: 30.0,
                conditions_eliminated: 8.0 + (index % 2) as f64,
                conditions_detected: 10.0,
                workers_trained: 17.0 + (index % 3) as f64,
                workers_scheduled: 20.0,
                standards_met: 13.0 + (index % 2) as f64,
                standards_applicable: 15.0,
                measures_implemented: 4.0,
                measures_proposed: 5.0,
                items_audited: 16.0 + (index % 4) as f64,
                items_total: 20.0,
            }
        })
        .collect()
}
