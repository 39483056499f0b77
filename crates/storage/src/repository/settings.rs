use sqlx::PgPool;

use crate::dto::settings::UpdateSettingsRequest;
use crate::error::Result;
use crate::models::SchoolSettings;

pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> Result<Option<SchoolSettings>> {
        let settings = sqlx::query_as::<_, SchoolSettings>(
            r#"
            SELECT id, school_name, phone, email, address, logo_url, updated_at
            FROM school_settings
            ORDER BY id
            LIMIT 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(settings)
    }

    /// Replace the settings row, creating it on first use
    pub async fn upsert(&self, req: &UpdateSettingsRequest) -> Result<SchoolSettings> {
        let settings = sqlx::query_as::<_, SchoolSettings>(
            r#"
            INSERT INTO school_settings (id, school_name, phone, email, address, logo_url)
            VALUES (1, $1, $2, $3, $4, $5)
            ON CONFLICT (id)
            DO UPDATE SET
                school_name = EXCLUDED.school_name,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                address = EXCLUDED.address,
                logo_url = EXCLUDED.logo_url,
                updated_at = CURRENT_TIMESTAMP
            RETURNING id, school_name, phone, email, address, logo_url, updated_at
            "#,
        )
        .bind(&req.school_name)
        .bind(&req.phone)
        .bind(&req.email)
        .bind(&req.address)
        .bind(&req.logo_url)
        .fetch_one(self.pool)
        .await?;

        Ok(settings)
    }
}
