use chrono::Utc;
use libsql::{params, Connection};

use crate::error::Result;
use crate::models::HealthMetrics;

pub struct MetricsRepository;

impl MetricsRepository {
    /// Insert or replace the metrics row for an entry. Re-extraction after
    /// an entry edit overwrites the previous scores wholesale.
    pub async fn upsert(
        conn: &Connection,
        id: &str,
        entry_id: &str,
        metrics: &HealthMetrics,
    ) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO health_metrics (
                id, entry_id, mood_score, energy_level, pain_level,
                sleep_quality, sleep_hours, stress_level, ai_confidence, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(entry_id) DO UPDATE SET
                mood_score = excluded.mood_score,
                energy_level = excluded.energy_level,
                pain_level = excluded.pain_level,
                sleep_quality = excluded.sleep_quality,
                sleep_hours = excluded.sleep_hours,
                stress_level = excluded.stress_level,
                ai_confidence = excluded.ai_confidence
            "#,
            params![
                id,
                entry_id,
                metrics.mood_score,
                metrics.energy_level,
                metrics.pain_level,
                metrics.sleep_quality,
                metrics.sleep_hours,
                metrics.stress_level,
                metrics.ai_confidence,
                Utc::now().to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_entry_id(
        conn: &Connection,
        entry_id: &str,
    ) -> Result<Option<HealthMetrics>> {
        let mut rows = conn
            .query(
                r#"
                SELECT mood_score, energy_level, pain_level, sleep_quality,
                       sleep_hours, stress_level, ai_confidence
                FROM health_metrics
                WHERE entry_id = ?1
                "#,
                params![entry_id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(HealthMetrics {
                mood_score: row.get(0)?,
                energy_level: row.get(1)?,
                pain_level: row.get(2)?,
                sleep_quality: row.get(3)?,
                sleep_hours: row.get(4)?,
                stress_level: row.get(5)?,
                ai_confidence: row.get(6)?,
            }))
        } else {
            Ok(None)
        }
    }
}
