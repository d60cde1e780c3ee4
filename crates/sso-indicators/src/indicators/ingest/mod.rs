//! CSV batch ingestion: the concrete data-ingestion adapter feeding the
//! engine from template exports.

mod mapping;

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use mapping::{canonical_column, normalize_header, MONTH_COLUMN, NUMERIC_COLUMNS, YEAR_COLUMN};

use super::domain::{Month, Period, RawRecord};

/// Faults raised while importing a CSV batch, with enough row/column context
/// to fix the source file.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read csv input: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("required column '{column}' is missing")]
    MissingColumn { column: &'static str },
    #[error("row {row}: column '{column}' is not a number: '{value}'")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}: unrecognized month '{value}'")]
    UnknownMonth { row: usize, value: String },
}

/// Reads period records from a CSV export of the reporting template.
/// Headers are matched case-insensitively through the alias table; a
/// missing year column falls back to the configured default year.
#[derive(Debug, Clone, Copy)]
pub struct CsvBatchImporter {
    default_year: i32,
}

impl CsvBatchImporter {
    pub const fn new(default_year: i32) -> Self {
        Self { default_year }
    }

    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Vec<RawRecord>, IngestError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IngestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.from_reader(file)
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<Vec<RawRecord>, IngestError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = resolve_columns(csv_reader.headers()?)?;
        let mut records = Vec::new();

        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            // Header occupies line 1 of the file.
            let row_number = index + 2;
            records.push(parse_row(&row, &columns, row_number, self.default_year)?);
        }

        Ok(records)
    }
}

struct ColumnIndex {
    month: usize,
    year: Option<usize>,
    numeric: [usize; 23],
}

fn resolve_columns(headers: &csv::StringRecord) -> Result<ColumnIndex, IngestError> {
    let mut positions: HashMap<&'static str, usize> = HashMap::new();
    for (index, header) in headers.iter().enumerate() {
        if let Some(canonical) = canonical_column(&normalize_header(header)) {
            positions.entry(canonical).or_insert(index);
        }
    }

    let month = *positions
        .get(MONTH_COLUMN)
        .ok_or(IngestError::MissingColumn {
            column: MONTH_COLUMN,
        })?;
    let year = positions.get(YEAR_COLUMN).copied();

    let mut numeric = [0usize; 23];
    for (slot, column) in NUMERIC_COLUMNS.iter().copied().enumerate() {
        numeric[slot] = *positions
            .get(column)
            .ok_or(IngestError::MissingColumn { column })?;
    }

    Ok(ColumnIndex {
        month,
        year,
        numeric,
    })
}

fn parse_row(
    row: &csv::StringRecord,
    columns: &ColumnIndex,
    row_number: usize,
    default_year: i32,
) -> Result<RawRecord, IngestError> {
    let month_raw = row.get(columns.month).unwrap_or_default();
    let month = Month::parse(month_raw).ok_or_else(|| IngestError::UnknownMonth {
        row: row_number,
        value: month_raw.to_string(),
    })?;

    let year = match columns.year {
        Some(index) => {
            let raw = row.get(index).unwrap_or_default().trim();
            if raw.is_empty() {
                default_year
            } else {
                raw.parse::<i32>().map_err(|_| IngestError::InvalidNumber {
                    row: row_number,
                    column: YEAR_COLUMN,
                    value: raw.to_string(),
                })?
            }
        }
        None => default_year,
    };

    let mut numbers = [0f64; 23];
    for (slot, column) in NUMERIC_COLUMNS.iter().copied().enumerate() {
        let raw = row.get(columns.numeric[slot]).unwrap_or_default().trim();
        // Blank cells mean "no activity", matching the template convention.
        numbers[slot] = if raw.is_empty() {
            0.0
        } else {
            raw.parse::<f64>().map_err(|_| IngestError::InvalidNumber {
                row: row_number,
                column,
                value: raw.to_string(),
            })?
        };
    }

    Ok(RawRecord {
        period: Period { year, month },
        hours_worked: numbers[0],
        injuries: numbers[1],
        lost_days: numbers[2],
        risk_analyses_performed: numbers[3],
        risk_analyses_planned: numbers[4],
        observations_performed: numbers[5],
        observations_planned: numbers[6],
        people_compliant: numbers[7],
        people_observed: numbers[8],
        dialogues_held: numbers[9],
        dialogues_planned: numbers[10],
        attendees_present: numbers[11],
        attendees_expected: numbers[12],
        conditions_eliminated: numbers[13],
        conditions_detected: numbers[14],
        workers_trained: numbers[15],
        workers_scheduled: numbers[16],
        standards_met: numbers[17],
        standards_applicable: numbers[18],
        measures_implemented: numbers[19],
        measures_proposed: numbers[20],
        items_audited: numbers[21],
        items_total: numbers[22],
    })
}
