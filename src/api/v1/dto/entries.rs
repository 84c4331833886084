//! Request/response shapes for the diary entry endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DiaryEntry, HealthMetrics};

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct CreateEntryRequest {
    /// Diary text to store and extract metrics from.
    pub entry_text: String,
    /// Owner of the entry. Defaults to `"default"`.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Date the entry describes. Defaults to today (UTC).
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct UpdateEntryRequest {
    /// Replacement diary text. Metrics are re-extracted from it.
    pub entry_text: String,
}

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ListEntriesQuery {
    #[serde(default)]
    pub user_id: Option<String>,
    /// Maximum number of entries to return. Clamped to `1..=100`, defaults to 20.
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct EntryResponse {
    pub id: String,
    pub user_id: String,
    pub entry_date: NaiveDate,
    pub entry_text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Extracted metrics, absent when extraction produced nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<HealthMetrics>,
}

impl From<DiaryEntry> for EntryResponse {
    fn from(entry: DiaryEntry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            entry_date: entry.entry_date,
            entry_text: entry.entry_text,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
            metrics: entry.metrics,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ListEntriesResponse {
    pub entries: Vec<EntryResponse>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct DeleteEntryResponse {
    pub id: String,
    pub deleted: bool,
}
