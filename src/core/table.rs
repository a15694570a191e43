//! CSV to named columns of raw cells.
//!
//! Cells keep whatever the file held: numbers are parsed eagerly (with the
//! same float parser the sanitizer uses), everything else stays text, and
//! empty fields are `Missing`.  Nothing is dropped here; that is the
//! sanitizer's job.  Quoted fields may hold commas and `""` escapes.

use std::io::Read;

use thiserror::Error;

use crate::core::sanitize::{Cell, parse_number};

/// One named column.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Number-typed: nothing but numbers and gaps.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.cells
            .iter()
            .all(|c| matches!(c, Cell::Number(_) | Cell::Missing))
    }
}

/// Columns in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of data rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }
}

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseCsvError {
    pub line: u64,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("expected at most {expected} columns, got {got}")]
    BadColumnCount { expected: usize, got: usize },
    #[error("no header row")]
    MissingHeader,
}

// --- Helpers ---
#[inline]
fn to_cell(field: &str) -> Cell {
    if field.is_empty() {
        Cell::Missing
    } else if let Some(v) = parse_number(field) {
        Cell::Number(v)
    } else {
        Cell::Text(field.to_owned())
    }
}

// --- Ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

pub fn read_csv<R: Read>(src: R) -> Result<Table, ParseCsvError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .buffer_capacity(BUF_CAP)
        .from_reader(src);
    let mut record = csv::StringRecord::new();
    let mut table: Option<Table> = None;
    let mut line_no = 0u64;

    loop {
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                return Err(ParseCsvError {
                    line: e.position().map_or(line_no + 1, csv::Position::line),
                    kind: ParseErrorKind::Csv(e),
                });
            }
        }
        line_no = record.position().map_or(line_no + 1, csv::Position::line);
        if record.iter().all(str::is_empty) {
            continue;
        }

        let Some(table) = table.as_mut() else {
            table = Some(Table {
                columns: record
                    .iter()
                    .map(|name| Column::new(name, Vec::new()))
                    .collect(),
            });
            continue;
        };

        let width = table.columns.len();
        if record.len() > width {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount {
                    expected: width,
                    got: record.len(),
                },
            });
        }
        for (i, column) in table.columns.iter_mut().enumerate() {
            column
                .cells
                .push(record.get(i).map_or(Cell::Missing, to_cell));
        }
    }

    let table = table.ok_or(ParseCsvError {
        line: line_no,
        kind: ParseErrorKind::MissingHeader,
    })?;
    log::debug!(
        "read {} rows × {} columns",
        table.height(),
        table.columns.len()
    );
    Ok(table)
}

pub fn read_csv_from_path(path: &str) -> Result<Table, ParseCsvError> {
    if path == "-" {
        read_csv(std::io::stdin())
    } else {
        use std::fs::File;
        read_csv(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}
