use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::SchoolSettings;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SettingsResponse {
    #[serde(rename = "nome_escolinha")]
    pub school_name: String,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "endereco")]
    pub address: Option<String>,
    pub logo_url: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<SchoolSettings> for SettingsResponse {
    fn from(settings: SchoolSettings) -> Self {
        Self {
            school_name: settings.school_name,
            phone: settings.phone,
            email: settings.email,
            address: settings.address,
            logo_url: settings.logo_url,
            updated_at: settings.updated_at,
        }
    }
}

/// Request payload replacing the school settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSettingsRequest {
    #[serde(rename = "nome_escolinha")]
    #[validate(length(
        min = 1,
        max = 255,
        message = "Nome da escolinha deve ter entre 1 e 255 caracteres"
    ))]
    pub school_name: String,

    #[serde(rename = "telefone", default)]
    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(email(message = "E-mail inválido"))]
    pub email: Option<String>,

    #[serde(rename = "endereco", default)]
    #[validate(length(max = 500))]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(url)]
    #[validate(length(max = 500))]
    pub logo_url: Option<String>,
}
