use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::fields::{is_known_position, is_known_status, is_valid_cpf, is_valid_phone};
use crate::models::Athlete;

/// Athlete as exposed over HTTP
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: i32,
    #[serde(rename = "nome")]
    pub first_name: String,
    #[serde(rename = "sobrenome")]
    pub last_name: String,
    #[serde(rename = "data_nascimento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "posicao")]
    pub position: String,
    #[serde(rename = "posicao_secundaria")]
    pub secondary_position: Option<String>,
    #[serde(rename = "telefone_responsavel")]
    pub guardian_phone: String,
    pub cpf: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "idade")]
    pub age: i32,
    pub status: String,
    #[serde(rename = "origem_cadastro")]
    pub source: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            id: athlete.id,
            first_name: athlete.first_name,
            last_name: athlete.last_name,
            birth_date: athlete.birth_date,
            position: athlete.position,
            secondary_position: athlete.secondary_position,
            guardian_phone: athlete.guardian_phone,
            cpf: athlete.cpf,
            category: athlete.category,
            age: athlete.age,
            status: athlete.status,
            source: athlete.source,
            created_at: athlete.created_at,
            updated_at: athlete.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteSummary {
    pub id: i32,
    #[serde(rename = "nome")]
    pub first_name: String,
    #[serde(rename = "sobrenome")]
    pub last_name: String,
    #[serde(rename = "categoria")]
    pub category: String,
}

impl From<Athlete> for AthleteSummary {
    fn from(athlete: Athlete) -> Self {
        Self {
            id: athlete.id,
            first_name: athlete.first_name,
            last_name: athlete.last_name,
            category: athlete.category,
        }
    }
}

/// Acknowledgement sent back to the form automation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WebhookResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "atleta")]
    pub athlete: AthleteSummary,
}

/// Request payload for creating a new athlete.
///
/// Unknown keys such as `categoria` or `idade` are ignored; both are derived
/// from the birth date on the server.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[serde(rename = "nome")]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Nome deve ter entre 1 e 100 caracteres"
    ))]
    pub first_name: String,

    #[serde(rename = "sobrenome")]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Sobrenome deve ter entre 1 e 100 caracteres"
    ))]
    pub last_name: String,

    #[serde(rename = "data_nascimento")]
    pub birth_date: NaiveDate,

    #[serde(rename = "posicao")]
    #[validate(custom(function = "validate_position"))]
    pub position: String,

    #[serde(
        rename = "posicao_secundaria",
        default,
        deserialize_with = "blank_as_none"
    )]
    #[validate(custom(function = "validate_position"))]
    pub secondary_position: Option<String>,

    #[serde(rename = "telefone_responsavel")]
    #[validate(custom(function = "validate_phone"))]
    pub guardian_phone: String,

    #[validate(custom(function = "validate_cpf"))]
    pub cpf: String,

    #[serde(default)]
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// Request payload for a partial update. The CPF cannot be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[serde(rename = "nome", default)]
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[serde(rename = "sobrenome", default)]
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[serde(rename = "data_nascimento", default)]
    pub birth_date: Option<NaiveDate>,

    #[serde(rename = "posicao", default)]
    #[validate(custom(function = "validate_position"))]
    pub position: Option<String>,

    #[serde(
        rename = "posicao_secundaria",
        default,
        deserialize_with = "blank_as_none"
    )]
    #[validate(custom(function = "validate_position"))]
    pub secondary_position: Option<String>,

    #[serde(rename = "telefone_responsavel", default)]
    #[validate(custom(function = "validate_phone"))]
    pub guardian_phone: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// Forms send `""` when no secondary position was picked.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

fn validate_phone(phone: &str) -> Result<(), validator::ValidationError> {
    let message = if phone.trim().is_empty() {
        "Telefone obrigatório"
    } else if is_valid_phone(phone) {
        return Ok(());
    } else {
        "Telefone inválido"
    };
    let mut error = validator::ValidationError::new("invalid_phone");
    error.message = Some(message.into());
    Err(error)
}

fn validate_position(position: &str) -> Result<(), validator::ValidationError> {
    if is_known_position(position) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_position");
        error.message = Some("Posição inválida".into());
        Err(error)
    }
}

fn validate_cpf(cpf: &str) -> Result<(), validator::ValidationError> {
    if is_valid_cpf(cpf) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_cpf");
        error.message = Some("CPF inválido".into());
        Err(error)
    }
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    if is_known_status(status) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("invalid_status");
        error.message = Some("Status deve ser Ativo ou Inativo".into());
        Err(error)
    }
}
