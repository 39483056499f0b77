use std::io::Cursor;

use calamine::{Data, DataType, Range, Reader};

use crate::cell::{CellValue, RawRecord};
use crate::{ImporterError, Result};

/// Reads the first worksheet of an xlsx/xls/ods file into header-keyed records.
///
/// Line numbers are sheet rows counted from 1, so the header is line 1 and the
/// first data row is usually line 2.
pub fn read_rows(bytes: &[u8]) -> Result<Vec<(u32, RawRecord)>> {
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ImporterError::SpreadsheetError(format!("failed to open workbook: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImporterError::EmptySpreadsheet)?
        .map_err(|e| ImporterError::SpreadsheetError(format!("failed to read first sheet: {e}")))?;

    records_from_range(&range)
}

fn records_from_range(range: &Range<Data>) -> Result<Vec<(u32, RawRecord)>> {
    let (start_row, _) = range.start().ok_or(ImporterError::EmptySpreadsheet)?;
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .ok_or(ImporterError::EmptySpreadsheet)?
        .iter()
        .map(|cell| cell_value(cell).to_text())
        .collect();

    let mut records = Vec::new();
    for (offset, row) in rows.enumerate() {
        let record: RawRecord = headers
            .iter()
            .zip(row)
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| (header.clone(), cell_value(cell)))
            .collect();

        if record.values().all(CellValue::is_blank) {
            continue;
        }

        // +1 for 1-based numbering, +1 for the header row
        let line = start_row + offset as u32 + 2;
        records.push((line, record));
    }

    if records.is_empty() {
        return Err(ImporterError::EmptySpreadsheet);
    }

    Ok(records)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(cell.to_string())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
