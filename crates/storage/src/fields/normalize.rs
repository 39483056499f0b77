//! Canonical display/storage forms for free-text athlete fields.

use chrono::NaiveDate;

/// A birth date as it arrives from an input source: either free text typed by
/// a person or a date cell already decoded by the spreadsheet reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawDate<'a> {
    Text(&'a str),
    Date(NaiveDate),
}

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a CPF as `NNN.NNN.NNN-NN`.
///
/// Length is not checked here: fewer than 11 digits come back as bare digits,
/// and anything past the eleventh digit is kept after the formatted prefix.
pub fn normalize_cpf(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() < 11 {
        return digits;
    }

    format!(
        "{}.{}.{}-{}{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11],
        &digits[11..]
    )
}

/// Formats a phone number as `(DD) DDDD-DDDD` (landline, up to 10 digits) or
/// `(DD) DDDDD-DDDD` (mobile). Area codes are not checked.
pub fn normalize_phone(raw: &str) -> String {
    let digits = digits_only(raw);

    if digits.len() <= 10 {
        if digits.len() < 10 {
            return digits;
        }
        return format!("({}) {}-{}", &digits[0..2], &digits[2..6], &digits[6..10]);
    }

    format!(
        "({}) {}-{}{}",
        &digits[0..2],
        &digits[2..7],
        &digits[7..11],
        &digits[11..]
    )
}

/// Converts `DD/MM/YYYY`, `YYYY-MM-DD` or a decoded date into `YYYY-MM-DD`.
///
/// Only the shape is checked; `31/02/2020` becomes `2020-02-31` and is
/// rejected later by [`crate::fields::validate::is_valid_date_string`].
pub fn normalize_date(raw: RawDate<'_>) -> Option<String> {
    match raw {
        RawDate::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
        RawDate::Text(text) => {
            let text = text.trim();

            if let Some((day, month, year)) = split3(text, '/') {
                if is_digits(day, 2) && is_digits(month, 2) && is_digits(year, 4) {
                    return Some(format!("{year}-{month}-{day}"));
                }
            }

            if let Some((year, month, day)) = split3(text, '-') {
                if is_digits(year, 4) && is_digits(month, 2) && is_digits(day, 2) {
                    return Some(text.to_string());
                }
            }

            None
        }
    }
}

fn split3(text: &str, separator: char) -> Option<(&str, &str, &str)> {
    let mut parts = text.split(separator);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second, third))
}

pub(crate) fn is_digits(part: &str, len: usize) -> bool {
    part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
}
