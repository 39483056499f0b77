use crate::Result;
use sqlx::PgPool;
use storage::models::{Athlete, NewAthlete};
use storage::repository::athlete::AthleteRepository;

/// The persistent side of the import pipeline: duplicate lookups and inserts.
#[async_trait::async_trait]
pub trait AthleteStore: Send + Sync {
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Athlete>>;

    async fn insert(&self, athlete: &NewAthlete) -> Result<Athlete>;
}

pub struct ImportContext {
    pub pool: PgPool,
}

impl ImportContext {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AthleteStore for ImportContext {
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Athlete>> {
        let repo = AthleteRepository::new(&self.pool);
        Ok(repo.find_by_cpf(cpf).await?)
    }

    async fn insert(&self, athlete: &NewAthlete) -> Result<Athlete> {
        let repo = AthleteRepository::new(&self.pool);
        Ok(repo.create(athlete).await?)
    }
}
