use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteChanges, NewAthlete};

const ATHLETE_COLUMNS: &str = "id, first_name, last_name, birth_date, position, \
    secondary_position, guardian_phone, cpf, category, age, status, source, \
    created_at, updated_at";

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all athletes, most recently registered first
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Athlete> {
        sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Find athlete by the exact normalized CPF
    pub async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athletes WHERE cpf = $1 LIMIT 1"
        ))
        .bind(cpf)
        .fetch_optional(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Create a new athlete. A CPF that is already registered yields
    /// `StorageError::ConstraintViolation`.
    pub async fn create(&self, athlete: &NewAthlete) -> Result<Athlete> {
        let created = sqlx::query_as::<_, Athlete>(&format!(
            r#"
            INSERT INTO athletes (first_name, last_name, birth_date, position, secondary_position,
                                  guardian_phone, cpf, category, age, status, source)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(&athlete.first_name)
        .bind(&athlete.last_name)
        .bind(athlete.birth_date)
        .bind(&athlete.position)
        .bind(&athlete.secondary_position)
        .bind(&athlete.guardian_phone)
        .bind(&athlete.cpf)
        .bind(&athlete.category)
        .bind(athlete.age)
        .bind(&athlete.status)
        .bind(athlete.source.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).translate_cpf_violation())?;

        Ok(created)
    }

    /// Update an existing athlete; columns without a new value keep theirs
    pub async fn update(&self, id: i32, changes: &AthleteChanges) -> Result<Athlete> {
        sqlx::query_as::<_, Athlete>(&format!(
            r#"
            UPDATE athletes
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                birth_date = COALESCE($4, birth_date),
                position = COALESCE($5, position),
                secondary_position = COALESCE($6, secondary_position),
                guardian_phone = COALESCE($7, guardian_phone),
                category = COALESCE($8, category),
                age = COALESCE($9, age),
                status = COALESCE($10, status),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING {ATHLETE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(changes.birth_date)
        .bind(&changes.position)
        .bind(&changes.secondary_position)
        .bind(&changes.guardian_phone)
        .bind(&changes.category)
        .bind(changes.age)
        .bind(&changes.status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
