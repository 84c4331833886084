use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{DiaryEntry, HealthMetrics, Observation};

/// CRUD operations for diary entries plus the analytics read path.
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn create_entry(&self, entry: &DiaryEntry) -> Result<()>;
    async fn get_entry_by_id(&self, id: &str) -> Result<Option<DiaryEntry>>;
    async fn list_entries(&self, user_id: &str, limit: u32) -> Result<Vec<DiaryEntry>>;
    async fn update_entry_text(&self, id: &str, entry_text: &str) -> Result<bool>;
    async fn delete_entry(&self, id: &str) -> Result<bool>;

    /// Ordered-by-date observation sequence for one user over an inclusive
    /// date range.
    async fn observations_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>>;
}

/// Storage for AI-extracted metric rows.
#[async_trait]
pub trait MetricsStore: Send + Sync {
    async fn save_metrics(&self, entry_id: &str, metrics: &HealthMetrics) -> Result<()>;
    async fn get_metrics_by_entry_id(&self, entry_id: &str) -> Result<Option<HealthMetrics>>;
}

/// Combined backend facade injected into services as `Arc<dyn DatabaseBackend>`.
pub trait DatabaseBackend: EntryStore + MetricsStore {}

impl<T: EntryStore + MetricsStore> DatabaseBackend for T {}
