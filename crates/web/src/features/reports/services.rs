use sqlx::PgPool;
use storage::{
    dto::report::{AthleteReport, ReportFilters},
    error::Result,
    repository::athlete::AthleteRepository,
};

/// Totals over the whole registry plus the athletes matching the filters
pub async fn athlete_report(pool: &PgPool, filters: ReportFilters) -> Result<AthleteReport> {
    let repo = AthleteRepository::new(pool);
    let athletes = repo.list().await?;
    Ok(AthleteReport::build(athletes, filters))
}
