use axum::Json;
use utoipa::OpenApi;

use super::dto;
use super::handlers;
use super::response;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vitalog API",
        version = "1.0.0",
        description = "Health diary backend. REST API for diary entries, metric extraction, and weekly analytics.",
    ),
    paths(
        handlers::health::health_check,
        handlers::entries::create_entry,
        handlers::entries::get_entry,
        handlers::entries::list_entries,
        handlers::entries::update_entry,
        handlers::entries::delete_entry,
        handlers::analytics::weekly_summary,
        handlers::analytics::correlations,
        handlers::analytics::trends,
    ),
    components(schemas(
        // Response envelope
        response::ErrorCode,
        response::ApiError,
        response::ResponseMeta,
        // Domain
        models::HealthMetrics,
        models::Trend,
        models::Correlation,
        models::CorrelationStrength,
        models::CorrelationDirection,
        models::InsightBundle,
        models::WeekTrend,
        // Entries
        dto::entries::CreateEntryRequest,
        dto::entries::UpdateEntryRequest,
        dto::entries::ListEntriesQuery,
        dto::entries::EntryResponse,
        dto::entries::ListEntriesResponse,
        dto::entries::DeleteEntryResponse,
        // Analytics
        dto::analytics::SummaryQuery,
        dto::analytics::PeriodDto,
        dto::analytics::MetricSummaryDto,
        dto::analytics::SleepSummaryDto,
        dto::analytics::HealthMetricsDto,
        dto::analytics::WeeklySummaryResponse,
        dto::analytics::CorrelationsResponse,
        dto::analytics::TrendsResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::DatabaseStatus,
        handlers::health::LlmStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "entries", description = "Diary entry CRUD and metric extraction"),
        (name = "analytics", description = "Weekly summaries, correlations, and trends"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            utoipa::openapi::security::SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
