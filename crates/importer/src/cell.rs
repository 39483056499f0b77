use std::collections::HashMap;

use chrono::NaiveDate;
use storage::fields::RawDate;

/// One input record keyed by column header (spreadsheet) or JSON key (webhook).
pub type RawRecord = HashMap<String, CellValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl CellValue {
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Trimmed text form. Whole numbers print without a fraction so CPFs and
    /// phone numbers typed as numeric cells keep their digits.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{n:.0}"),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn as_raw_date(&self) -> Option<RawDate<'_>> {
        match self {
            CellValue::Text(s) => Some(RawDate::Text(s.as_str())),
            CellValue::Date(d) => Some(RawDate::Date(*d)),
            _ => None,
        }
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null | Value::Object(_) => CellValue::Empty,
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Number(n) => n.as_f64().map(CellValue::Number).unwrap_or(CellValue::Empty),
            Value::Bool(b) => CellValue::Bool(*b),
            // Checkbox answers arrive as arrays.
            Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| CellValue::from(item).to_text())
                    .filter(|s| !s.is_empty())
                    .collect();
                CellValue::Text(parts.join(", "))
            }
        }
    }
}

/// Builds a record from a JSON object; `None` for any other JSON value.
pub fn record_from_json(payload: &serde_json::Value) -> Option<RawRecord> {
    payload.as_object().map(|object| {
        object
            .iter()
            .map(|(key, value)| (key.clone(), CellValue::from(value)))
            .collect()
    })
}
