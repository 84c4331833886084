//! v1 diary entry handlers.

use axum::extract::{Path, State};
use axum_extra::extract::Query;
use chrono::Utc;
use nanoid::nanoid;

use crate::api::v1::dto::{
    CreateEntryRequest, DeleteEntryResponse, EntryResponse, ListEntriesQuery, ListEntriesResponse,
    UpdateEntryRequest,
};
use crate::api::v1::response::{ApiError, ApiResponse, ErrorCode, ResponseMeta};
use crate::api::AppState;
use crate::models::DiaryEntry;

const DEFAULT_USER: &str = "default";
const DEFAULT_LIST_LIMIT: u32 = 20;

/// `POST /api/v1/entries`
///
/// Stores the entry and runs metric extraction on it. Extraction is
/// best-effort; an entry with no extractable metrics is still stored.
#[utoipa::path(
    post,
    path = "/api/v1/entries",
    tag = "entries",
    operation_id = "entries.create",
    request_body = CreateEntryRequest,
    responses(
        (status = 201, description = "Entry created", body = EntryResponse),
        (status = 400, description = "Invalid request", body = ApiError),
    )
)]
pub async fn create_entry(
    State(state): State<AppState>,
    axum::Json(req): axum::Json<CreateEntryRequest>,
) -> ApiResponse<EntryResponse> {
    if req.entry_text.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Entry text cannot be empty");
    }

    let user_id = req
        .user_id
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USER.to_string());
    let entry_date = req.entry_date.unwrap_or_else(|| Utc::now().date_naive());

    let metrics = state.extractor.extract(&req.entry_text).await;
    let now = Utc::now();

    let entry = DiaryEntry {
        id: nanoid!(),
        user_id,
        entry_date,
        entry_text: req.entry_text,
        created_at: now,
        updated_at: now,
        metrics: (!metrics.is_empty()).then(|| metrics.clone()),
    };

    if let Err(e) = state.db.create_entry(&entry).await {
        return e.into();
    }

    if !metrics.is_empty() {
        if let Err(e) = state.db.save_metrics(&entry.id, &metrics).await {
            tracing::warn!(error = %e, entry_id = %entry.id, "Failed to persist extracted metrics");
        }
    }

    ApiResponse::created(EntryResponse::from(entry))
}

/// `GET /api/v1/entries/{entryId}`
#[utoipa::path(
    get,
    path = "/api/v1/entries/{entryId}",
    tag = "entries",
    operation_id = "entries.get",
    params(("entryId" = String, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Entry found", body = EntryResponse),
        (status = 404, description = "Entry not found", body = ApiError),
    )
)]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<EntryResponse> {
    match state.db.get_entry_by_id(&id).await {
        Ok(Some(entry)) => ApiResponse::success(EntryResponse::from(entry)),
        Ok(None) => ApiResponse::error(ErrorCode::NotFound, format!("Entry {id} not found")),
        Err(e) => e.into(),
    }
}

/// `GET /api/v1/entries`
#[utoipa::path(
    get,
    path = "/api/v1/entries",
    tag = "entries",
    operation_id = "entries.list",
    params(
        ("user_id" = Option<String>, Query, description = "Owner to list entries for"),
        ("limit" = Option<u32>, Query, description = "Maximum entries to return (1-100, default 20)"),
    ),
    responses(
        (status = 200, description = "Entries, newest first", body = ListEntriesResponse),
    )
)]
pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<ListEntriesQuery>,
) -> ApiResponse<ListEntriesResponse> {
    let user_id = query
        .user_id
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USER.to_string());
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, 100);

    match state.db.list_entries(&user_id, limit).await {
        Ok(entries) => {
            let entries: Vec<EntryResponse> =
                entries.into_iter().map(EntryResponse::from).collect();
            let meta = ResponseMeta {
                total: Some(entries.len() as u64),
            };
            ApiResponse::success_with_meta(ListEntriesResponse { entries }, meta)
        }
        Err(e) => e.into(),
    }
}

/// `PATCH /api/v1/entries/{entryId}`
///
/// Replaces the entry text and re-extracts metrics from the new text.
#[utoipa::path(
    patch,
    path = "/api/v1/entries/{entryId}",
    tag = "entries",
    operation_id = "entries.update",
    params(("entryId" = String, Path, description = "Entry ID")),
    request_body = UpdateEntryRequest,
    responses(
        (status = 200, description = "Entry updated", body = EntryResponse),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Entry not found", body = ApiError),
    )
)]
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    axum::Json(req): axum::Json<UpdateEntryRequest>,
) -> ApiResponse<EntryResponse> {
    if req.entry_text.trim().is_empty() {
        return ApiResponse::error(ErrorCode::InvalidRequest, "Entry text cannot be empty");
    }

    match state.db.update_entry_text(&id, &req.entry_text).await {
        Ok(true) => {}
        Ok(false) => {
            return ApiResponse::error(ErrorCode::NotFound, format!("Entry {id} not found"))
        }
        Err(e) => return e.into(),
    }

    let metrics = state.extractor.extract(&req.entry_text).await;
    if !metrics.is_empty() {
        if let Err(e) = state.db.save_metrics(&id, &metrics).await {
            tracing::warn!(error = %e, entry_id = %id, "Failed to persist re-extracted metrics");
        }
    }

    match state.db.get_entry_by_id(&id).await {
        Ok(Some(entry)) => ApiResponse::success(EntryResponse::from(entry)),
        Ok(None) => ApiResponse::error(ErrorCode::NotFound, format!("Entry {id} not found")),
        Err(e) => e.into(),
    }
}

/// `DELETE /api/v1/entries/{entryId}`
#[utoipa::path(
    delete,
    path = "/api/v1/entries/{entryId}",
    tag = "entries",
    operation_id = "entries.delete",
    params(("entryId" = String, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Entry deleted", body = DeleteEntryResponse),
        (status = 404, description = "Entry not found", body = ApiError),
    )
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResponse<DeleteEntryResponse> {
    match state.db.delete_entry(&id).await {
        Ok(true) => ApiResponse::success(DeleteEntryResponse { id, deleted: true }),
        Ok(false) => ApiResponse::error(ErrorCode::NotFound, format!("Entry {id} not found")),
        Err(e) => e.into(),
    }
}
