use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::health::handlers::health,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::imports::handlers::upload_spreadsheet,
        features::imports::handlers::commit_import,
        features::registration::handlers::register_athlete,
        features::webhook::handlers::google_forms,
        features::settings::handlers::get_settings,
        features::settings::handlers::update_settings,
        features::reports::handlers::athlete_report,
    ),
    components(
        schemas(
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::AthleteSummary,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::WebhookResponse,
            storage::dto::import::RowValidationResult,
            storage::dto::import::ImportReport,
            storage::dto::import::CommitImportRequest,
            storage::dto::import::CommitOutcome,
            storage::dto::import::CommitReport,
            storage::dto::settings::SettingsResponse,
            storage::dto::settings::UpdateSettingsRequest,
            storage::dto::report::ReportFilters,
            storage::dto::report::AthleteReport,
            storage::dto::common::CreatedResponse,
            storage::dto::common::HealthResponse,
            storage::fields::Position,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete registry administration"),
        (name = "imports", description = "Spreadsheet validation and bulk import"),
        (name = "public", description = "Self-registration and form webhook"),
        (name = "settings", description = "School settings"),
        (name = "reports", description = "Athlete reports"),
        (name = "health", description = "Liveness"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}
