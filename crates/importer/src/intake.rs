//! Single-record registration paths (public form, webhook, admin create) and
//! the conversion from validated input into a storable athlete.

use chrono::NaiveDate;
use serde_json::Value;
use storage::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use storage::dto::import::RowValidationResult;
use storage::fields::{CategoryTable, STATUS_ACTIVE, normalize_cpf, normalize_phone};
use storage::models::{Athlete, AthleteChanges, NewAthlete, RegistrationSource};
use tracing::info;
use validator::ValidationErrors;

use crate::cell::record_from_json;
use crate::profile::RowProfile;
use crate::row::RowProcessor;
use crate::traits::AthleteStore;
use crate::{ImporterError, Result};

/// Normalizes a validated create request and derives age and category.
pub fn prepare_athlete(
    req: &CreateAthleteRequest,
    categories: &CategoryTable,
    reference_date: NaiveDate,
    source: RegistrationSource,
) -> NewAthlete {
    let classification = categories.classify(req.birth_date, reference_date);
    NewAthlete {
        first_name: req.first_name.trim().to_string(),
        last_name: req.last_name.trim().to_string(),
        birth_date: req.birth_date,
        position: req.position.clone(),
        secondary_position: req.secondary_position.clone(),
        guardian_phone: normalize_phone(&req.guardian_phone),
        cpf: normalize_cpf(&req.cpf),
        category: classification.category.to_string(),
        age: classification.age,
        status: req
            .status
            .clone()
            .unwrap_or_else(|| STATUS_ACTIVE.to_string()),
        source,
    }
}

/// Builds the column changes for a partial update. Age and category are
/// recomputed only when a new birth date is supplied.
pub fn prepare_changes(
    req: &UpdateAthleteRequest,
    categories: &CategoryTable,
    reference_date: NaiveDate,
) -> AthleteChanges {
    let classification = req
        .birth_date
        .map(|birth_date| categories.classify(birth_date, reference_date));

    AthleteChanges {
        first_name: req.first_name.as_deref().map(|n| n.trim().to_string()),
        last_name: req.last_name.as_deref().map(|n| n.trim().to_string()),
        birth_date: req.birth_date,
        position: req.position.clone(),
        secondary_position: req.secondary_position.clone(),
        guardian_phone: req.guardian_phone.as_deref().map(normalize_phone),
        category: classification.as_ref().map(|c| c.category.to_string()),
        age: classification.map(|c| c.age),
        status: req.status.clone(),
    }
}

/// Converts a valid row result into an insertable athlete. `None` when the
/// row carries errors.
pub fn athlete_from_row(row: &RowValidationResult, source: RegistrationSource) -> Option<NewAthlete> {
    if !row.is_valid {
        return None;
    }
    let birth_date = NaiveDate::parse_from_str(&row.birth_date, "%Y-%m-%d").ok()?;

    Some(NewAthlete {
        first_name: row.first_name.clone(),
        last_name: row.last_name.clone(),
        birth_date,
        position: row.position.clone(),
        secondary_position: row.secondary_position.clone(),
        guardian_phone: row.guardian_phone.clone(),
        cpf: row.cpf.clone(),
        category: row.category.clone(),
        age: row.age,
        status: row.status.clone(),
        source,
    })
}

/// Validates one JSON payload as a single-row batch and stores it.
///
/// Missing fields, other validation errors and duplicates come back as
/// distinct errors so each endpoint can pick its own status codes.
pub async fn register_from_payload<S: AthleteStore + ?Sized>(
    payload: &Value,
    profile: &RowProfile,
    store: &S,
    reference_date: NaiveDate,
    source: RegistrationSource,
) -> Result<Athlete> {
    let record = record_from_json(payload).ok_or(ImporterError::NotAnObject)?;

    let processor = RowProcessor::new(profile, store, reference_date);
    let row = processor.process(&record, 1).await;

    if !row.missing.is_empty() {
        let mut fields = row.missing.clone();
        profile.order_missing(&mut fields);
        let mut received: Vec<String> = record.keys().cloned().collect();
        received.sort();
        return Err(ImporterError::MissingFields { fields, received });
    }

    if row.is_duplicate {
        return Err(ImporterError::DuplicateCpf);
    }

    let athlete = athlete_from_row(&row, source)
        .ok_or_else(|| ImporterError::ValidationError(row.errors.clone()))?;

    let created = store.insert(&athlete).await.map_err(|e| {
        if e.is_duplicate_cpf() {
            ImporterError::DuplicateCpf
        } else {
            e
        }
    })?;

    info!(
        "Registered athlete {} ({}) via {} in category {}",
        created.id, created.cpf, profile.name, created.category
    );

    Ok(created)
}

/// Flattens validator errors into `field: message` lines, keyed by the
/// JSON field names clients send.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            let field = wire_field(field);
            errors.iter().map(move |e| {
                format!(
                    "{}: {}",
                    field,
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                )
            })
        })
        .collect();
    messages.sort();
    messages
}

fn wire_field(field: &str) -> &str {
    match field {
        "first_name" => "nome",
        "last_name" => "sobrenome",
        "birth_date" => "data_nascimento",
        "position" => "posicao",
        "secondary_position" => "posicao_secundaria",
        "guardian_phone" => "telefone_responsavel",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{PUBLIC_FORM, WEBHOOK_FORM};
    use crate::testing::{MemoryStore, reference_date};
    use serde_json::json;
    use storage::fields::REGISTRATION;
    use validator::Validate;

    fn public_payload() -> Value {
        json!({
            "nome": "Rafael",
            "sobrenome": "Costa",
            "data_nascimento": "2013-09-02",
            "posicao": "Ponta Direita",
            "telefone_responsavel": "31 91234-5678",
            "cpf": "123.456.789-09",
        })
    }

    #[test]
    fn test_prepare_athlete_normalizes_and_classifies() {
        let req: CreateAthleteRequest = serde_json::from_value(json!({
            "nome": " Rafael ",
            "sobrenome": "Costa",
            "data_nascimento": "2013-09-02",
            "posicao": "Ponta Direita",
            "posicao_secundaria": "",
            "telefone_responsavel": "31912345678",
            "cpf": "12345678909",
        }))
        .unwrap();

        let athlete = prepare_athlete(
            &req,
            &REGISTRATION,
            reference_date(),
            RegistrationSource::Manual,
        );

        assert_eq!(athlete.first_name, "Rafael");
        assert_eq!(athlete.cpf, "123.456.789-09");
        assert_eq!(athlete.guardian_phone, "(31) 91234-5678");
        assert_eq!(athlete.age, 11);
        assert_eq!(athlete.category, "Sub-11");
        assert_eq!(athlete.status, "Ativo");
        assert!(athlete.secondary_position.is_none());
    }

    #[test]
    fn test_prepare_changes_recomputes_category_with_birth_date() {
        let req: UpdateAthleteRequest = serde_json::from_value(json!({
            "data_nascimento": "2005-03-03",
            "telefone_responsavel": "1133334444",
        }))
        .unwrap();

        let changes = prepare_changes(&req, &REGISTRATION, reference_date());

        assert_eq!(changes.age, Some(19));
        assert_eq!(changes.category.as_deref(), Some("Sub-20"));
        assert_eq!(changes.guardian_phone.as_deref(), Some("(11) 3333-4444"));
        assert!(changes.first_name.is_none());
    }

    #[test]
    fn test_prepare_changes_keeps_category_without_birth_date() {
        let req: UpdateAthleteRequest =
            serde_json::from_value(json!({ "status": "Inativo" })).unwrap();

        let changes = prepare_changes(&req, &REGISTRATION, reference_date());

        assert!(changes.category.is_none());
        assert!(changes.age.is_none());
        assert_eq!(changes.status.as_deref(), Some("Inativo"));
    }

    #[tokio::test]
    async fn test_public_registration_stores_record() {
        let store = MemoryStore::new();

        let created = register_from_payload(
            &public_payload(),
            &PUBLIC_FORM,
            &store,
            reference_date(),
            RegistrationSource::Publico,
        )
        .await
        .unwrap();

        assert_eq!(created.cpf, "123.456.789-09");
        assert_eq!(created.category, "Sub-11");
        assert_eq!(created.source, "publico");
        assert_eq!(store.count(), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_are_reported_with_received_keys() {
        let store = MemoryStore::new();
        let mut payload = public_payload();
        payload.as_object_mut().unwrap().remove("sobrenome");

        let err = register_from_payload(
            &payload,
            &PUBLIC_FORM,
            &store,
            reference_date(),
            RegistrationSource::Publico,
        )
        .await
        .unwrap_err();

        match err {
            ImporterError::MissingFields { fields, received } => {
                assert_eq!(fields, vec!["sobrenome"]);
                assert!(received.contains(&"nome".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn test_public_form_missing_fields_follow_form_order() {
        let store = MemoryStore::new();
        let mut payload = public_payload();
        let fields = payload.as_object_mut().unwrap();
        fields.remove("cpf");
        fields.remove("data_nascimento");

        let err = register_from_payload(
            &payload,
            &PUBLIC_FORM,
            &store,
            reference_date(),
            RegistrationSource::Publico,
        )
        .await
        .unwrap_err();

        match err {
            ImporterError::MissingFields { fields, .. } => {
                assert_eq!(fields, vec!["data_nascimento", "cpf"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_overlong_phone_is_rejected_before_insert() {
        let store = MemoryStore::new();
        let mut payload = public_payload();
        payload["telefone_responsavel"] = json!("(31) 91234-5678 / (31) 3333-4444");

        let err = register_from_payload(
            &payload,
            &PUBLIC_FORM,
            &store,
            reference_date(),
            RegistrationSource::Publico,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ImporterError::ValidationError(ref e) if e == &vec!["Telefone inválido".to_string()]));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_validation_messages_use_json_field_names() {
        let req: CreateAthleteRequest = serde_json::from_value(json!({
            "nome": "Rafael",
            "sobrenome": "Costa",
            "data_nascimento": "2013-09-02",
            "posicao": "Ponta Direita",
            "posicao_secundaria": "Líbero",
            "telefone_responsavel": "9123",
            "cpf": "12345678909",
        }))
        .unwrap();

        let messages = validation_messages(&req.validate().unwrap_err());

        assert_eq!(
            messages,
            vec![
                "posicao_secundaria: Posição inválida",
                "telefone_responsavel: Telefone inválido",
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_values_are_rejected() {
        let store = MemoryStore::new();
        let mut payload = public_payload();
        payload["cpf"] = json!("111.111.111-11");

        let err = register_from_payload(
            &payload,
            &PUBLIC_FORM,
            &store,
            reference_date(),
            RegistrationSource::Publico,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ImporterError::ValidationError(ref e) if e == &vec!["CPF inválido".to_string()]));
    }

    #[tokio::test]
    async fn test_webhook_duplicate_is_rejected_before_insert() {
        let store = MemoryStore::with_cpfs(&["111.444.777-35"]);
        let payload = json!({
            "Nome Completo": "Bruno Henrique Lima",
            "Data de Nascimento": "02/02/2011",
            "CPF": "11144477735",
        });

        let err = register_from_payload(
            &payload,
            &WEBHOOK_FORM,
            &store,
            reference_date(),
            RegistrationSource::GoogleForms,
        )
        .await
        .unwrap_err();

        assert!(err.is_duplicate_cpf());
        assert_eq!(store.count(), 1);
    }

    #[tokio::test]
    async fn test_insert_race_surfaces_as_duplicate() {
        let store = MemoryStore::new().taken_at_insert("123.456.789-09");

        let err = register_from_payload(
            &public_payload(),
            &PUBLIC_FORM,
            &store,
            reference_date(),
            RegistrationSource::Publico,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ImporterError::DuplicateCpf));
    }

    #[tokio::test]
    async fn test_webhook_uses_its_own_category_table() {
        let store = MemoryStore::new();
        let payload = json!({
            "nome": "Caio Ramos",
            "data_nascimento": "2012-10-10",
            "cpf": "529.982.247-25",
            "posicoes": ["Atacante", "Centroavante"],
        });

        let created = register_from_payload(
            &payload,
            &WEBHOOK_FORM,
            &store,
            reference_date(),
            RegistrationSource::GoogleForms,
        )
        .await
        .unwrap();

        assert_eq!(created.first_name, "Caio");
        assert_eq!(created.last_name, "Ramos");
        assert_eq!(created.category, "Sub-12");
        assert_eq!(created.position, "Atacante");
        assert_eq!(created.secondary_position.as_deref(), Some("Centroavante"));
        assert_eq!(created.source, "google_forms");
    }

    #[tokio::test]
    async fn test_non_object_payload() {
        let store = MemoryStore::new();
        let err = register_from_payload(
            &json!([1, 2, 3]),
            &PUBLIC_FORM,
            &store,
            reference_date(),
            RegistrationSource::Publico,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ImporterError::NotAnObject));
    }
}
