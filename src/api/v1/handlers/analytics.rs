//! v1 analytics handlers.

use axum::extract::State;
use axum_extra::extract::Query;

use crate::api::v1::dto::{
    CorrelationsResponse, SummaryQuery, TrendsResponse, WeeklySummaryResponse,
};
use crate::api::v1::response::{ApiError, ApiResponse};
use crate::api::AppState;

const DEFAULT_USER: &str = "default";

fn resolve_window(state: &AppState, weeks: Option<u32>) -> u32 {
    let requested = weeks.unwrap_or(state.config.analytics.default_weeks_back);
    requested.clamp(1, state.config.analytics.max_weeks_back)
}

fn resolve_user(user_id: Option<String>) -> String {
    user_id
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USER.to_string())
}

/// `GET /api/v1/analytics/weekly-summary`
///
/// Runs the full pipeline: statistics, correlations, and LLM insight
/// generation. With no entries in the window, a canned summary with
/// `no_data` trends is returned rather than an error.
#[utoipa::path(
    get,
    path = "/api/v1/analytics/weekly-summary",
    tag = "analytics",
    operation_id = "analytics.weeklySummary",
    params(
        ("user_id" = Option<String>, Query, description = "Owner to analyze"),
        ("weeks" = Option<u32>, Query, description = "Analysis window in weeks (clamped to configured maximum)"),
    ),
    responses(
        (status = 200, description = "Weekly health summary", body = WeeklySummaryResponse),
        (status = 500, description = "Analysis failed", body = ApiError),
    )
)]
pub async fn weekly_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> ApiResponse<WeeklySummaryResponse> {
    let user_id = resolve_user(query.user_id);
    let weeks = resolve_window(&state, query.weeks);

    match state
        .analytics
        .generate_weekly_summary(&user_id, weeks)
        .await
    {
        Ok(summary) => ApiResponse::success(WeeklySummaryResponse::from(summary)),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/analytics/correlations`
///
/// Correlation analysis on its own, without the LLM stages.
#[utoipa::path(
    get,
    path = "/api/v1/analytics/correlations",
    tag = "analytics",
    operation_id = "analytics.correlations",
    params(
        ("user_id" = Option<String>, Query, description = "Owner to analyze"),
        ("weeks" = Option<u32>, Query, description = "Analysis window in weeks (clamped to configured maximum)"),
    ),
    responses(
        (status = 200, description = "Detected metric correlations", body = CorrelationsResponse),
        (status = 500, description = "Analysis failed", body = ApiError),
    )
)]
pub async fn correlations(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> ApiResponse<CorrelationsResponse> {
    let user_id = resolve_user(query.user_id);
    let weeks = resolve_window(&state, query.weeks);

    match state.analytics.correlations_only(&user_id, weeks).await {
        Ok((correlations, data_points)) => ApiResponse::success(CorrelationsResponse {
            correlations,
            data_points,
            period_weeks: weeks,
        }),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/analytics/trends`
///
/// Per-week metric averages for charting. Weeks with no entries are
/// omitted from the series.
#[utoipa::path(
    get,
    path = "/api/v1/analytics/trends",
    tag = "analytics",
    operation_id = "analytics.trends",
    params(
        ("user_id" = Option<String>, Query, description = "Owner to analyze"),
        ("weeks" = Option<u32>, Query, description = "Number of weekly windows to compute (clamped to configured maximum)"),
    ),
    responses(
        (status = 200, description = "Week-by-week metric averages", body = TrendsResponse),
        (status = 500, description = "Analysis failed", body = ApiError),
    )
)]
pub async fn trends(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> ApiResponse<TrendsResponse> {
    let user_id = resolve_user(query.user_id);
    let weeks = resolve_window(&state, query.weeks.or(Some(4)));

    match state.analytics.trend_series(&user_id, weeks).await {
        Ok(trends) => ApiResponse::success(TrendsResponse {
            trends,
            weeks_analyzed: weeks,
        }),
        Err(e) => e.into(),
    }
}
