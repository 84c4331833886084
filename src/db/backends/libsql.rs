use async_trait::async_trait;
use chrono::NaiveDate;
use nanoid::nanoid;

use crate::db::connection::Database;
use crate::db::repository::{EntryRepository, MetricsRepository};
use crate::db::traits::{EntryStore, MetricsStore};
use crate::error::Result;
use crate::models::{DiaryEntry, HealthMetrics, Observation};

pub struct LibSqlBackend {
    db: Database,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryStore for LibSqlBackend {
    async fn create_entry(&self, entry: &DiaryEntry) -> Result<()> {
        let conn = self.db.connect()?;
        EntryRepository::create(&conn, entry).await
    }

    async fn get_entry_by_id(&self, id: &str) -> Result<Option<DiaryEntry>> {
        let conn = self.db.connect()?;
        EntryRepository::get_by_id(&conn, id).await
    }

    async fn list_entries(&self, user_id: &str, limit: u32) -> Result<Vec<DiaryEntry>> {
        let conn = self.db.connect()?;
        EntryRepository::list_for_user(&conn, user_id, limit).await
    }

    async fn update_entry_text(&self, id: &str, entry_text: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        EntryRepository::update_text(&conn, id, entry_text).await
    }

    async fn delete_entry(&self, id: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        EntryRepository::delete(&conn, id).await
    }

    async fn observations_in_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>> {
        let conn = self.db.connect()?;
        EntryRepository::observations_in_range(&conn, user_id, start, end).await
    }
}

#[async_trait]
impl MetricsStore for LibSqlBackend {
    async fn save_metrics(&self, entry_id: &str, metrics: &HealthMetrics) -> Result<()> {
        let conn = self.db.connect()?;
        MetricsRepository::upsert(&conn, &nanoid!(), entry_id, metrics).await
    }

    async fn get_metrics_by_entry_id(&self, entry_id: &str) -> Result<Option<HealthMetrics>> {
        let conn = self.db.connect()?;
        MetricsRepository::get_by_entry_id(&conn, entry_id).await
    }
}
