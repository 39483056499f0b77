use chrono::NaiveDate;
use storage::dto::import::RowValidationResult;
use storage::fields::{
    MAX_NAME_LENGTH, STATUS_ACTIVE, is_known_position, is_valid_cpf, is_valid_date_string,
    is_valid_phone, normalize_cpf, normalize_date, normalize_phone,
};

use crate::cell::{CellValue, RawRecord};
use crate::duplicate::DuplicateChecker;
use crate::profile::{Field, PRESENCE_ORDER, RowProfile};
use crate::traits::AthleteStore;

/// Turns one raw record into a normalized, validated candidate athlete.
pub struct RowProcessor<'a, S: AthleteStore + ?Sized> {
    profile: &'a RowProfile,
    checker: DuplicateChecker<'a, S>,
    reference_date: NaiveDate,
}

impl<'a, S: AthleteStore + ?Sized> RowProcessor<'a, S> {
    pub fn new(profile: &'a RowProfile, store: &'a S, reference_date: NaiveDate) -> Self {
        Self {
            profile,
            checker: DuplicateChecker::new(store),
            reference_date,
        }
    }

    /// Errors are reported in a fixed order: missing fields, CPF, positions,
    /// name widths and phone, birth date. A duplicate CPF does not make the
    /// row invalid.
    pub async fn process(&self, record: &RawRecord, line: u32) -> RowValidationResult {
        let mut errors = Vec::new();
        let mut missing = Vec::new();

        let mut first_name = self.text(record, Field::FirstName);
        let mut last_name = self.text(record, Field::LastName);
        let mut position = self.text(record, Field::Position);
        let mut secondary = self.text(record, Field::SecondaryPosition);
        let phone_raw = self.text(record, Field::GuardianPhone);
        let cpf_raw = self.text(record, Field::Cpf);

        if self.profile.split_full_name && last_name.is_empty() {
            if let Some((given, family)) = split_full_name(&first_name) {
                first_name = given;
                last_name = family;
            }
        }

        if self.profile.split_positions {
            let (primary, rest) = split_positions(&position);
            position = primary;
            if secondary.is_empty() {
                secondary = rest.unwrap_or_default();
            }
        }

        for field in PRESENCE_ORDER {
            let value = match field {
                Field::FirstName => &first_name,
                Field::LastName => &last_name,
                Field::Cpf => &cpf_raw,
                Field::Position => &position,
                _ => &phone_raw,
            };
            if self.profile.requires(field) && value.is_empty() {
                errors.push(field.missing_message().to_string());
                missing.push(field.wire_name());
            }
        }

        let cpf = normalize_cpf(&cpf_raw);
        let cpf_valid = is_valid_cpf(&cpf);
        if !cpf_raw.is_empty() && !cpf_valid {
            errors.push("CPF inválido".to_string());
        }

        if !position.is_empty() && !is_known_position(&position) {
            errors.push("Posição inválida".to_string());
        }
        if !secondary.is_empty() && !is_known_position(&secondary) {
            errors.push("Posição secundária inválida".to_string());
        }

        if first_name.chars().count() > MAX_NAME_LENGTH {
            errors.push(format!("Nome deve ter no máximo {MAX_NAME_LENGTH} caracteres"));
        }
        if last_name.chars().count() > MAX_NAME_LENGTH {
            errors.push(format!(
                "Sobrenome deve ter no máximo {MAX_NAME_LENGTH} caracteres"
            ));
        }
        if !phone_raw.is_empty() && !is_valid_phone(&phone_raw) {
            errors.push("Telefone inválido".to_string());
        }

        let birth_date = match self.cell(record, Field::BirthDate) {
            None => {
                errors.push(Field::BirthDate.missing_message().to_string());
                missing.push(Field::BirthDate.wire_name());
                String::new()
            }
            Some(cell) => {
                let normalized = cell
                    .as_raw_date()
                    .and_then(normalize_date)
                    .unwrap_or_default();
                if !is_valid_date_string(&normalized) {
                    errors.push("Data de nascimento inválida".to_string());
                }
                normalized
            }
        };

        let (age, category) = self
            .profile
            .categories
            .classify_iso(&birth_date, self.reference_date)
            .map(|c| (c.age, c.category.to_string()))
            .unwrap_or_default();

        let is_duplicate = cpf_valid && self.checker.exists(&cpf).await;

        RowValidationResult {
            line,
            first_name,
            last_name,
            birth_date,
            position,
            secondary_position: (!secondary.is_empty()).then_some(secondary),
            guardian_phone: normalize_phone(&phone_raw),
            cpf,
            category,
            age,
            status: STATUS_ACTIVE.to_string(),
            is_valid: errors.is_empty(),
            errors,
            is_duplicate,
            missing,
        }
    }

    fn cell<'r>(&self, record: &'r RawRecord, field: Field) -> Option<&'r CellValue> {
        self.profile
            .aliases
            .for_field(field)
            .iter()
            .filter_map(|alias| record.get(*alias))
            .find(|cell| !cell.is_blank())
    }

    fn text(&self, record: &RawRecord, field: Field) -> String {
        self.cell(record, field)
            .map(CellValue::to_text)
            .unwrap_or_default()
    }
}

fn split_full_name(full_name: &str) -> Option<(String, String)> {
    let mut parts = full_name.split_whitespace();
    let given = parts.next()?;
    let family: Vec<&str> = parts.collect();
    if family.is_empty() {
        return None;
    }
    Some((given.to_string(), family.join(" ")))
}

fn split_positions(list: &str) -> (String, Option<String>) {
    let mut positions = list.split(',').map(str::trim).filter(|p| !p.is_empty());
    let primary = positions.next().unwrap_or_default().to_string();
    let secondary = positions.next().map(str::to_string);
    (primary, secondary)
}
