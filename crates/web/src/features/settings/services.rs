use sqlx::PgPool;
use storage::{
    dto::settings::UpdateSettingsRequest,
    error::{Result, StorageError},
    models::SchoolSettings,
    repository::settings::SettingsRepository,
};

/// Current school settings; `NotFound` until they are first saved
pub async fn get_settings(pool: &PgPool) -> Result<SchoolSettings> {
    let repo = SettingsRepository::new(pool);
    repo.get().await?.ok_or(StorageError::NotFound)
}

pub async fn save_settings(pool: &PgPool, request: &UpdateSettingsRequest) -> Result<SchoolSettings> {
    let repo = SettingsRepository::new(pool);
    let settings = repo.upsert(request).await?;
    tracing::info!("School settings updated for {}", settings.school_name);
    Ok(settings)
}
