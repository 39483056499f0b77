use chrono::{Local, NaiveDate};
use importer::{prepare_athlete, prepare_changes};
use sqlx::PgPool;
use storage::{
    dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest},
    error::Result,
    fields::REGISTRATION,
    models::{Athlete, RegistrationSource},
    repository::athlete::AthleteRepository,
};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// List all athletes, most recent first
pub async fn list_athletes(pool: &PgPool) -> Result<Vec<Athlete>> {
    let repo = AthleteRepository::new(pool);
    repo.list().await
}

/// Get athlete by id
pub async fn get_athlete(pool: &PgPool, id: i32) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new athlete from the admin screens
pub async fn create_athlete(pool: &PgPool, request: &CreateAthleteRequest) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    let athlete = prepare_athlete(request, &REGISTRATION, today(), RegistrationSource::Manual);
    let created = repo.create(&athlete).await?;

    tracing::info!(
        "Created athlete {} ({}) in category {}",
        created.id,
        created.cpf,
        created.category
    );
    Ok(created)
}

/// Update an athlete
pub async fn update_athlete(
    pool: &PgPool,
    id: i32,
    request: &UpdateAthleteRequest,
) -> Result<Athlete> {
    let repo = AthleteRepository::new(pool);
    let changes = prepare_changes(request, &REGISTRATION, today());
    repo.update(id, &changes).await
}

/// Delete an athlete
pub async fn delete_athlete(pool: &PgPool, id: i32) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(id).await?;
    tracing::info!("Deleted athlete {}", id);
    Ok(())
}
