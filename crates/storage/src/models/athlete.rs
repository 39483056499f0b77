use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub position: String,
    pub secondary_position: Option<String>,
    pub guardian_phone: String,
    pub cpf: String,
    pub category: String,
    pub age: i32,
    pub status: String,
    pub source: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Where a record entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationSource {
    Manual,
    Publico,
    Importacao,
    GoogleForms,
}

impl RegistrationSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Publico => "publico",
            Self::Importacao => "importacao",
            Self::GoogleForms => "google_forms",
        }
    }
}

/// A fully normalized record ready to be inserted. Age and category are
/// already derived from the birth date.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAthlete {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub position: String,
    pub secondary_position: Option<String>,
    pub guardian_phone: String,
    pub cpf: String,
    pub category: String,
    pub age: i32,
    pub status: String,
    pub source: RegistrationSource,
}

/// Column values for a partial update; `None` keeps the stored value.
/// The CPF is not part of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AthleteChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub secondary_position: Option<String>,
    pub guardian_phone: Option<String>,
    pub category: Option<String>,
    pub age: Option<i32>,
    pub status: Option<String>,
}
