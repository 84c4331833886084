use chrono::{DateTime, NaiveDate, Utc};
use libsql::{params, Connection};

use crate::error::{Result, VitalogError};
use crate::models::{DiaryEntry, HealthMetrics, Observation};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct EntryRepository;

impl EntryRepository {
    pub async fn create(conn: &Connection, entry: &DiaryEntry) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO entries (id, user_id, entry_date, entry_text, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                entry.id.clone(),
                entry.user_id.clone(),
                entry.entry_date.format(DATE_FORMAT).to_string(),
                entry.entry_text.clone(),
                entry.created_at.to_rfc3339(),
                entry.updated_at.to_rfc3339(),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<DiaryEntry>> {
        let mut rows = conn
            .query(
                r#"
                SELECT e.id, e.user_id, e.entry_date, e.entry_text, e.created_at, e.updated_at,
                       m.mood_score, m.energy_level, m.pain_level, m.sleep_quality,
                       m.sleep_hours, m.stress_level, m.ai_confidence
                FROM entries e
                LEFT JOIN health_metrics m ON e.id = m.entry_id
                WHERE e.id = ?1
                "#,
                params![id],
            )
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(Self::row_to_entry(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn list_for_user(
        conn: &Connection,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<DiaryEntry>> {
        let mut rows = conn
            .query(
                r#"
                SELECT e.id, e.user_id, e.entry_date, e.entry_text, e.created_at, e.updated_at,
                       m.mood_score, m.energy_level, m.pain_level, m.sleep_quality,
                       m.sleep_hours, m.stress_level, m.ai_confidence
                FROM entries e
                LEFT JOIN health_metrics m ON e.id = m.entry_id
                WHERE e.user_id = ?1
                ORDER BY e.entry_date DESC, e.created_at DESC
                LIMIT ?2
                "#,
                params![user_id, limit as i64],
            )
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(Self::row_to_entry(&row)?);
        }
        Ok(entries)
    }

    pub async fn update_text(conn: &Connection, id: &str, entry_text: &str) -> Result<bool> {
        let rows_affected = conn
            .execute(
                "UPDATE entries SET entry_text = ?2, updated_at = ?3 WHERE id = ?1",
                params![id, entry_text, Utc::now().to_rfc3339()],
            )
            .await?;

        Ok(rows_affected > 0)
    }

    pub async fn delete(conn: &Connection, id: &str) -> Result<bool> {
        // The metrics row rides along via ON DELETE CASCADE, but libsql does
        // not enable foreign_keys by default, so clear it explicitly.
        conn.execute(
            "DELETE FROM health_metrics WHERE entry_id = ?1",
            params![id],
        )
        .await?;
        let rows_affected = conn
            .execute("DELETE FROM entries WHERE id = ?1", params![id])
            .await?;

        Ok(rows_affected > 0)
    }

    /// Fetch the ordered observation sequence for one user over an inclusive
    /// date range. This is the single read the analytics pipeline performs.
    pub async fn observations_in_range(
        conn: &Connection,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>> {
        let mut rows = conn
            .query(
                r#"
                SELECT e.id, e.entry_date, e.entry_text,
                       m.mood_score, m.energy_level, m.pain_level,
                       m.sleep_quality, m.sleep_hours, m.stress_level
                FROM entries e
                LEFT JOIN health_metrics m ON e.id = m.entry_id
                WHERE e.user_id = ?1
                  AND e.entry_date >= ?2
                  AND e.entry_date <= ?3
                ORDER BY e.entry_date ASC, e.created_at ASC
                "#,
                params![
                    user_id,
                    start.format(DATE_FORMAT).to_string(),
                    end.format(DATE_FORMAT).to_string(),
                ],
            )
            .await?;

        let mut observations = Vec::new();
        while let Some(row) = rows.next().await? {
            observations.push(Observation {
                entry_id: row.get(0)?,
                date: parse_date(&row.get::<String>(1)?)?,
                text: row.get(2)?,
                mood: row.get(3)?,
                energy: row.get(4)?,
                pain: row.get(5)?,
                sleep_quality: row.get(6)?,
                sleep_hours: row.get(7)?,
                stress: row.get(8)?,
            });
        }

        Ok(observations)
    }

    fn row_to_entry(row: &libsql::Row) -> Result<DiaryEntry> {
        let metrics = HealthMetrics {
            mood_score: row.get(6)?,
            energy_level: row.get(7)?,
            pain_level: row.get(8)?,
            sleep_quality: row.get(9)?,
            sleep_hours: row.get(10)?,
            stress_level: row.get(11)?,
            ai_confidence: row.get(12)?,
        };

        Ok(DiaryEntry {
            id: row.get(0)?,
            user_id: row.get(1)?,
            entry_date: parse_date(&row.get::<String>(2)?)?,
            entry_text: row.get(3)?,
            created_at: parse_timestamp(&row.get::<String>(4)?),
            updated_at: parse_timestamp(&row.get::<String>(5)?),
            metrics: if metrics.is_empty() { None } else { Some(metrics) },
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| VitalogError::Internal(format!("Invalid entry_date '{raw}' in database: {e}")))
}

fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}
